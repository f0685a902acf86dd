#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://open.neis.go.kr/hub";

/// 合併命令列、環境變數與 TOML 後的最終 API 設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

fn usable_key(key: Option<String>) -> Option<String> {
    let key = key?.trim().to_string();
    if key.is_empty() {
        return None;
    }
    if key.starts_with("${") {
        tracing::warn!("⚠️ API key placeholder {} was not substituted, ignoring it", key);
        return None;
    }
    Some(key)
}

impl ApiSettings {
    /// 優先順序：命令列 / 環境變數 > TOML > 內建預設值
    pub fn resolve(
        cli_base_url: Option<String>,
        cli_api_key: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let file_api = file.map(|config| &config.api);

        let base_url = cli_base_url
            .or_else(|| file_api.and_then(|api| api.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = usable_key(cli_api_key)
            .or_else(|| usable_key(file_api.and_then(|api| api.key.clone())));

        if api_key.is_none() {
            tracing::warn!("⚠️ No NEIS API key configured, responses are limited to sample data");
        }

        Self { base_url, api_key }
    }
}

impl ConfigProvider for ApiSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl Validate for ApiSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)
    }
}
