use crate::domain::offices::find_office;
use crate::utils::error::{NeisError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(NeisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(NeisError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(NeisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NeisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查日期是否為 `YYYY-MM-DD` 格式且為有效日期
pub fn validate_date(field_name: &str, value: &str) -> Result<()> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| NeisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected a YYYY-MM-DD date: {}", e),
        })
}

pub fn validate_office_code(value: &str) -> Result<()> {
    find_office(value).map(|_| ()).ok_or_else(|| NeisError::UnknownOffice {
        code: value.to_string(),
    })
}

pub fn validate_school_code(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(NeisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "School code must be numeric".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://open.neis.go.kr/hub").is_ok());
        assert!(validate_url("api.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("date", "2024-05-01").is_ok());
        assert!(validate_date("date", "2024-02-30").is_err());
        assert!(validate_date("date", "20240501").is_err());
    }

    #[test]
    fn test_validate_office_and_school_codes() {
        assert!(validate_office_code("B10").is_ok());
        assert!(validate_office_code("b10").is_ok());
        assert!(matches!(
            validate_office_code("X10"),
            Err(NeisError::UnknownOffice { .. })
        ));

        assert!(validate_school_code("school", "7010057").is_ok());
        assert!(validate_school_code("school", "70A0057").is_err());
        assert!(validate_school_code("school", "").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "한빛").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
