use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationOffice {
    pub code: &'static str,
    pub name: &'static str,
}

/// 學校選項；以 JSON 字串存放在選單值中，送出時再還原
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub office_code: String,
    pub school_code: String,
    pub name: String,
    pub address: String,
}

impl School {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.address)
    }

    pub fn to_selection_value(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_selection_value(value: &str) -> Result<Self> {
        Ok(serde_json::from_str(value)?)
    }
}

/// `schoolInfo` 回應中的一列
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolRow {
    #[serde(rename = "ATPT_OFCDC_SC_CODE")]
    pub office_code: String,
    #[serde(rename = "SD_SCHUL_CODE")]
    pub school_code: String,
    #[serde(rename = "SCHUL_NM")]
    pub name: String,
    #[serde(rename = "ORG_RDNMA", default)]
    pub road_address: Option<String>,
}

impl From<SchoolRow> for School {
    fn from(row: SchoolRow) -> Self {
        Self {
            office_code: row.office_code,
            school_code: row.school_code,
            name: row.name,
            address: row.road_address.unwrap_or_default(),
        }
    }
}

/// `mealServiceDietInfo` 回應中的一列
#[derive(Debug, Clone, Deserialize)]
pub struct MealRow {
    #[serde(rename = "MLSV_YMD")]
    pub date: String,
    #[serde(rename = "DDISH_NM")]
    pub dishes: String,
    #[serde(rename = "MMEAL_SC_NM", default)]
    pub kind: Option<String>,
    #[serde(rename = "CAL_INFO", default)]
    pub calories: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_selection_value_uses_camel_case_keys() {
        let school = School {
            office_code: "B10".to_string(),
            school_code: "7010057".to_string(),
            name: "한빛고등학교".to_string(),
            address: "서울특별시 강남구".to_string(),
        };

        let value = school.to_selection_value().unwrap();
        assert!(value.contains("\"officeCode\":\"B10\""));
        assert!(value.contains("\"schoolCode\":\"7010057\""));

        let restored = School::from_selection_value(&value).unwrap();
        assert_eq!(restored, school);
        assert_eq!(restored.label(), "한빛고등학교 (서울특별시 강남구)");
    }

    #[test]
    fn test_school_row_without_address() {
        let row: SchoolRow = serde_json::from_value(serde_json::json!({
            "ATPT_OFCDC_SC_CODE": "J10",
            "SD_SCHUL_CODE": "7530001",
            "SCHUL_NM": "경기고등학교",
            "ORG_RDNMA": null
        }))
        .unwrap();

        let school = School::from(row);
        assert_eq!(school.address, "");
        assert_eq!(school.school_code, "7530001");
    }

    #[test]
    fn test_invalid_selection_value_is_error() {
        assert!(School::from_selection_value("not json").is_err());
    }
}
