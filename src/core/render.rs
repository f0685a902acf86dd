use crate::domain::model::School;
use crate::utils::error::{NeisError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = NeisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(NeisError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

pub fn render_schools(schools: &[School], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(schools
            .iter()
            .enumerate()
            .map(|(i, school)| format!("{:>3}. {}", i + 1, school.label()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(schools)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["office_code", "school_code", "name", "address"])?;
            for school in schools {
                writer.write_record([
                    &school.office_code,
                    &school.school_code,
                    &school.name,
                    &school.address,
                ])?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| NeisError::IoError(e.into_error()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schools() -> Vec<School> {
        vec![
            School {
                office_code: "B10".to_string(),
                school_code: "7010057".to_string(),
                name: "한빛고등학교".to_string(),
                address: "서울특별시 강남구, 테헤란로 1".to_string(),
            },
            School {
                office_code: "B10".to_string(),
                school_code: "7010058".to_string(),
                name: "한빛중학교".to_string(),
                address: String::new(),
            },
        ]
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text() {
        let text = render_schools(&schools(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "  1. 한빛고등학교 (서울특별시 강남구, 테헤란로 1)\n  2. 한빛중학교 ()"
        );
    }

    #[test]
    fn test_render_csv_quotes_commas() {
        let csv = render_schools(&schools(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "office_code,school_code,name,address");
        assert_eq!(lines[1], "B10,7010057,한빛고등학교,\"서울특별시 강남구, 테헤란로 1\"");
        assert_eq!(lines[2], "B10,7010058,한빛중학교,");
    }

    #[test]
    fn test_render_json_uses_selection_keys() {
        let json = render_schools(&schools(), OutputFormat::Json).unwrap();
        let parsed: Vec<School> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schools());
        assert!(json.contains("\"schoolCode\""));
    }
}
