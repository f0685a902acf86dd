use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeisError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("학교 검색 API 요청 실패 (HTTP {status})")]
    SchoolSearchFailed { status: u16 },

    #[error("급식 API 요청 실패 (HTTP {status})")]
    MealRequestFailed { status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Unknown education office code: {code}")]
    UnknownOffice { code: String },

    #[error("School option {index} does not exist ({available} available)")]
    SchoolIndexOutOfRange { index: usize, available: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NeisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NeisError::ApiError(_) => ErrorCategory::Network,
            NeisError::SchoolSearchFailed { .. } | NeisError::MealRequestFailed { .. } => {
                ErrorCategory::Api
            }
            NeisError::CsvError(_) | NeisError::SerializationError(_) => ErrorCategory::Data,
            NeisError::ConfigError { .. }
            | NeisError::MissingConfigError { .. }
            | NeisError::InvalidConfigValueError { .. }
            | NeisError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            NeisError::UnknownOffice { .. } | NeisError::SchoolIndexOutOfRange { .. } => {
                ErrorCategory::Input
            }
            NeisError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Api => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息（不含內部細節）
    pub fn user_friendly_message(&self) -> String {
        match self {
            NeisError::ApiError(e) if e.is_connect() => {
                "NEIS 서버에 연결할 수 없습니다.".to_string()
            }
            NeisError::ApiError(_) => "NEIS API 요청 중 오류가 발생했습니다.".to_string(),
            NeisError::SchoolSearchFailed { .. } => "학교 검색 API 요청 실패".to_string(),
            NeisError::MealRequestFailed { .. } => "급식 API 요청 실패".to_string(),
            NeisError::SerializationError(_) => "API 응답을 해석할 수 없습니다.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the --base-url setting",
            ErrorCategory::Api => "Check the API key (NEIS_API_KEY) and the request parameters",
            ErrorCategory::Data => "The API response format may have changed; rerun with --verbose",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Input => "Run `neis-meal offices` to list valid office codes",
            ErrorCategory::System => "Check file permissions and disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, NeisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_errors_keep_generic_message() {
        let err = NeisError::SchoolSearchFailed { status: 500 };
        assert_eq!(err.user_friendly_message(), "학교 검색 API 요청 실패");
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = NeisError::MealRequestFailed { status: 404 };
        assert_eq!(err.user_friendly_message(), "급식 API 요청 실패");
        assert_eq!(err.category(), ErrorCategory::Api);
    }

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = NeisError::UnknownOffice {
            code: "Z99".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("Z99"));
    }
}
