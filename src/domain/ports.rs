use crate::domain::model::School;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
}

#[async_trait]
pub trait NeisApi: Send + Sync {
    async fn search_schools(&self, name: &str, office_code: &str) -> Result<Vec<School>>;
    async fn fetch_meal(
        &self,
        office_code: &str,
        school_code: &str,
        meal_date: &str,
    ) -> Result<serde_json::Value>;
}
