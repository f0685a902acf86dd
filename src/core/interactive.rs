use crate::core::session::MealLookup;
use crate::core::NeisApi;
use crate::domain::offices::{find_office, EDUCATION_OFFICES};
use crate::utils::error::Result;
use crate::utils::validation::validate_date;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

/// 以行為單位的問答介面；讀到 EOF 即結束
struct Prompter<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> Prompter<R, W> {
    async fn say(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.out.write_all(prompt.as_bytes()).await?;
        self.out.flush().await?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }
}

fn resolve_office(input: &str) -> Option<&'static str> {
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| EDUCATION_OFFICES.get(i))
            .map(|office| office.code);
    }
    find_office(input).map(|office| office.code)
}

pub async fn run_interactive<A, R, W>(
    lookup: &mut MealLookup<A>,
    input: R,
    output: W,
    default_office: Option<&str>,
) -> Result<()>
where
    A: NeisApi,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut prompter = Prompter {
        lines: input.lines(),
        out: output,
    };

    for (i, office) in EDUCATION_OFFICES.iter().enumerate() {
        prompter
            .say(&format!("{:>3}. {} ({})", i + 1, office.name, office.code))
            .await?;
    }

    let default_office = default_office.and_then(find_office).map(|office| office.code);

    loop {
        let office_prompt = match default_office {
            Some(code) => format!("교육청 번호 또는 코드 [{}]: ", code),
            None => "교육청 번호 또는 코드: ".to_string(),
        };
        let Some(answer) = prompter.ask(&office_prompt).await? else {
            return Ok(());
        };
        let office_code = if answer.is_empty() {
            default_office
        } else {
            resolve_office(&answer)
        };
        let Some(office_code) = office_code else {
            prompter.say("알 수 없는 교육청입니다.").await?;
            continue;
        };

        let Some(name) = prompter.ask("학교명: ").await? else {
            return Ok(());
        };
        prompter.say(crate::core::session::SEARCHING).await?;
        let message = lookup.submit_search(office_code, &name).await.to_string();
        if !lookup.is_meal_enabled() {
            prompter.say(&message).await?;
            continue;
        }

        let labels: Vec<String> = lookup.options().iter().map(|o| o.label.clone()).collect();
        for (i, label) in labels.iter().enumerate() {
            prompter.say(&format!("{:>3}. {}", i + 1, label)).await?;
        }
        prompter.say(&message).await?;

        let Some(choice) = prompter.ask("학교 번호 [1]: ").await? else {
            return Ok(());
        };
        if !choice.is_empty() {
            let selected = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .map(|index| lookup.select_school(index));
            match selected {
                Some(Ok(school)) => tracing::debug!("Chosen school: {}", school.name),
                _ => {
                    prompter.say("잘못된 학교 번호입니다.").await?;
                    continue;
                }
            }
        }

        let date_prompt = format!("날짜 (YYYY-MM-DD) [{}]: ", lookup.meal_date());
        let Some(date) = prompter.ask(&date_prompt).await? else {
            return Ok(());
        };
        if !date.is_empty() {
            if let Err(e) = validate_date("date", &date) {
                prompter.say(&format!("오류: {}", e)).await?;
                continue;
            }
            lookup.set_meal_date(date);
        }

        prompter.say(crate::core::session::LOADING_MEAL).await?;
        let meal = lookup.submit_meal().await.to_string();
        prompter.say(&meal).await?;
    }
}
