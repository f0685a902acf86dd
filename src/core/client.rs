use crate::core::{ConfigProvider, NeisApi};
use crate::domain::model::{School, SchoolRow};
use crate::utils::error::{NeisError, Result};
use reqwest::Client;
use serde_json::Value;
use url::Url;

pub struct NeisClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> NeisClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.config.base_url().trim_end_matches('/'), endpoint);
        Url::parse(&raw).map_err(|e| NeisError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: self.config.base_url().to_string(),
            reason: format!("Invalid URL format: {}", e),
        })
    }

    /// 組出學校搜尋網址；學校名稱會被百分比編碼
    pub fn school_search_url(&self, name: &str, office_code: &str) -> Result<Url> {
        let mut url = self.endpoint_url("schoolInfo")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(key) = self.config.api_key() {
                query.append_pair("KEY", key);
            }
            query
                .append_pair("Type", "json")
                .append_pair("ATPT_OFCDC_SC_CODE", office_code)
                .append_pair("SCHUL_NM", name);
        }
        Ok(url)
    }

    pub fn meal_url(&self, office_code: &str, school_code: &str, meal_date: &str) -> Result<Url> {
        let mut url = self.endpoint_url("mealServiceDietInfo")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(key) = self.config.api_key() {
                query.append_pair("KEY", key);
            }
            query
                .append_pair("ATPT_OFCDC_SC_CODE", office_code)
                .append_pair("SD_SCHUL_CODE", school_code)
                .append_pair("MLSV_YMD", meal_date)
                .append_pair("Type", "json");
        }
        Ok(url)
    }
}

/// 取出 `schoolInfo[1].row`；結構不符時視為沒有結果
pub fn extract_schools(body: &Value) -> Result<Vec<School>> {
    let rows = match body
        .get("schoolInfo")
        .and_then(|info| info.get(1))
        .and_then(|section| section.get("row"))
    {
        Some(rows) => rows,
        None => {
            if let Some(message) = body.pointer("/RESULT/MESSAGE").and_then(Value::as_str) {
                tracing::debug!("schoolInfo returned no rows: {}", message);
            }
            return Ok(Vec::new());
        }
    };

    let rows: Vec<SchoolRow> = serde_json::from_value(rows.clone())?;
    Ok(rows.into_iter().map(School::from).collect())
}

#[async_trait::async_trait]
impl<C: ConfigProvider> NeisApi for NeisClient<C> {
    async fn search_schools(&self, name: &str, office_code: &str) -> Result<Vec<School>> {
        let url = self.school_search_url(name, office_code)?;
        tracing::debug!("Searching schools: office={} name={}", office_code, name);

        let response = self.client.get(url).send().await?;
        tracing::debug!("schoolInfo response status: {}", response.status());

        if !response.status().is_success() {
            return Err(NeisError::SchoolSearchFailed {
                status: response.status().as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let schools = extract_schools(&body)?;
        tracing::info!("🏫 Found {} school(s) for '{}'", schools.len(), name);
        Ok(schools)
    }

    async fn fetch_meal(
        &self,
        office_code: &str,
        school_code: &str,
        meal_date: &str,
    ) -> Result<Value> {
        let url = self.meal_url(office_code, school_code, meal_date)?;
        tracing::debug!(
            "Fetching meal: office={} school={} date={}",
            office_code,
            school_code,
            meal_date
        );

        let response = self.client.get(url).send().await?;
        tracing::debug!("mealServiceDietInfo response status: {}", response.status());

        if !response.status().is_success() {
            return Err(NeisError::MealRequestFailed {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
