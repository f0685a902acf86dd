use crate::core::date::{to_compact_date, today};
use crate::core::meal::parse_meal_data;
use crate::core::NeisApi;
use crate::domain::model::School;
use crate::utils::error::{NeisError, Result};

pub const SEARCHING: &str = "학교 검색 중...";
pub const NO_SEARCH_RESULTS: &str = "검색 결과가 없습니다.";
pub const SELECT_PROMPT: &str = "학교를 선택하고 날짜를 입력 후 조회하세요.";
pub const LOADING_MEAL: &str = "급식 조회 중...";
pub const SELECT_SCHOOL_FIRST: &str = "학교를 선택하세요.";

/// 選單中的一個學校選項
#[derive(Debug, Clone)]
pub struct SchoolOption {
    pub value: String,
    pub label: String,
}

/// 兩段式查詢：先搜尋學校，再依選定學校與日期查詢餐點
pub struct MealLookup<A: NeisApi> {
    api: A,
    options: Vec<SchoolOption>,
    selected: Option<String>,
    meal_enabled: bool,
    meal_date: String,
    result: String,
}

impl<A: NeisApi> MealLookup<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            options: Vec::new(),
            selected: None,
            meal_enabled: false,
            meal_date: today(),
            result: String::new(),
        }
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn options(&self) -> &[SchoolOption] {
        &self.options
    }

    pub fn is_meal_enabled(&self) -> bool {
        self.meal_enabled
    }

    pub fn meal_date(&self) -> &str {
        &self.meal_date
    }

    pub fn set_meal_date(&mut self, date: impl Into<String>) {
        self.meal_date = date.into();
    }

    pub fn selected_school(&self) -> Option<School> {
        self.selected
            .as_deref()
            .and_then(|value| School::from_selection_value(value).ok())
    }

    fn fail(&mut self, error: &NeisError) {
        tracing::error!("❌ {}", error);
        self.result = format!("오류: {}", error.user_friendly_message());
    }

    pub async fn submit_search(&mut self, office_code: &str, name: &str) -> &str {
        let name = name.trim();
        self.result = SEARCHING.to_string();
        self.meal_enabled = false;
        self.options.clear();
        self.selected = None;

        match self.populate(office_code, name).await {
            Ok(0) => self.result = NO_SEARCH_RESULTS.to_string(),
            Ok(_) => {
                // 與下拉選單相同，預設選取第一個選項
                self.selected = self.options.first().map(|option| option.value.clone());
                self.meal_enabled = true;
                self.result = SELECT_PROMPT.to_string();
            }
            Err(e) => self.fail(&e),
        }

        &self.result
    }

    async fn populate(&mut self, office_code: &str, name: &str) -> Result<usize> {
        let schools = self.api.search_schools(name, office_code).await?;
        for school in &schools {
            self.options.push(SchoolOption {
                value: school.to_selection_value()?,
                label: school.label(),
            });
        }
        Ok(self.options.len())
    }

    pub fn select_school(&mut self, index: usize) -> Result<School> {
        let option = self
            .options
            .get(index)
            .ok_or(NeisError::SchoolIndexOutOfRange {
                index,
                available: self.options.len(),
            })?;
        let school = School::from_selection_value(&option.value)?;
        tracing::debug!("Selected school option {}: {}", index, option.label);
        self.selected = Some(option.value.clone());
        Ok(school)
    }

    pub async fn submit_meal(&mut self) -> &str {
        self.result = LOADING_MEAL.to_string();

        let Some(selected) = self.selected.clone() else {
            self.result = SELECT_SCHOOL_FIRST.to_string();
            return &self.result;
        };

        let school = match School::from_selection_value(&selected) {
            Ok(school) => school,
            Err(e) => {
                self.fail(&e);
                return &self.result;
            }
        };
        let meal_date = to_compact_date(&self.meal_date);

        match self
            .api
            .fetch_meal(&school.office_code, &school.school_code, &meal_date)
            .await
        {
            Ok(data) => self.result = parse_meal_data(&data),
            Err(e) => self.fail(&e),
        }

        &self.result
    }
}
