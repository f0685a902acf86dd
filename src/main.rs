use clap::Parser;
use neis_meal::config::Command;
use neis_meal::core::date::{to_compact_date, today};
use neis_meal::core::interactive::run_interactive;
use neis_meal::core::meal::{format_all_meals, parse_meal_data};
use neis_meal::core::render::render_schools;
use neis_meal::core::session::NO_SEARCH_RESULTS;
use neis_meal::core::NeisApi;
use neis_meal::domain::offices::{find_office, EDUCATION_OFFICES};
use neis_meal::utils::error::ErrorSeverity;
use neis_meal::utils::{logger, validation};
use neis_meal::utils::validation::Validate;
use neis_meal::{ApiSettings, CliConfig, MealLookup, NeisClient, NeisError, Result, TomlConfig};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ neis-meal failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("오류: {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn resolve_office(requested: Option<String>, fallback: Option<&str>) -> Result<&'static str> {
    let code = requested
        .as_deref()
        .or(fallback)
        .ok_or_else(|| NeisError::MissingConfigError {
            field: "office (--office or [defaults] office)".to_string(),
        })?;

    find_office(code)
        .map(|office| office.code)
        .ok_or_else(|| NeisError::UnknownOffice {
            code: code.to_string(),
        })
}

async fn run(config: CliConfig) -> Result<()> {
    let file = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let default_office = file.as_ref().and_then(|f| f.default_office());

    match config.command {
        Command::Offices => {
            for office in EDUCATION_OFFICES {
                println!("{}\t{}", office.code, office.name);
            }
            return Ok(());
        }
        Command::Search {
            ref office,
            ref name,
            format,
        } => {
            let office = resolve_office(office.clone(), default_office)?;
            validation::validate_non_empty_string("name", name)?;
            let format = match format {
                Some(format) => format,
                None => file
                    .as_ref()
                    .map(|f| f.default_format())
                    .transpose()?
                    .flatten()
                    .unwrap_or_default(),
            };

            let client = NeisClient::new(settings(&config, file.as_ref())?);
            let schools = client.search_schools(name.trim(), office).await?;
            if schools.is_empty() {
                println!("{}", NO_SEARCH_RESULTS);
            } else {
                println!("{}", render_schools(&schools, format)?);
            }
        }
        Command::Meal {
            ref office,
            ref school,
            ref date,
            all,
        } => {
            let office = resolve_office(office.clone(), default_office)?;
            validation::validate_school_code("school", school)?;
            let date = date.clone().unwrap_or_else(today);
            validation::validate_date("date", &date)?;

            let client = NeisClient::new(settings(&config, file.as_ref())?);
            let data = client
                .fetch_meal(office, school, &to_compact_date(&date))
                .await?;
            let text = if all {
                format_all_meals(&data)
            } else {
                parse_meal_data(&data)
            };
            println!("{}", text);
        }
        Command::Interactive => {
            let client = NeisClient::new(settings(&config, file.as_ref())?);
            let mut lookup = MealLookup::new(client);
            let input = BufReader::new(tokio::io::stdin());
            run_interactive(&mut lookup, input, tokio::io::stdout(), default_office).await?;
        }
    }

    Ok(())
}

fn settings(config: &CliConfig, file: Option<&TomlConfig>) -> Result<ApiSettings> {
    let settings = ApiSettings::resolve(config.base_url.clone(), config.api_key.clone(), file);
    settings.validate()?;
    tracing::debug!("Using NEIS hub at {}", settings.base_url);
    Ok(settings)
}
