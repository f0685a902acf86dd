use crate::domain::model::MealRow;
use serde_json::Value;

pub const NO_MEAL_INFO: &str = "해당 날짜의 급식 정보가 없습니다.";

const LINE_BREAK_MARKER: &str = "<br/>";

fn meal_rows(data: &Value) -> Vec<MealRow> {
    data.get("mealServiceDietInfo")
        .and_then(|info| info.get(1))
        .and_then(|section| section.get("row"))
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(|row| match serde_json::from_value::<MealRow>(row.clone()) {
                    Ok(meal) => Some(meal),
                    Err(e) => {
                        tracing::warn!("Skipping malformed meal row: {}", e);
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

fn dish_lines(dishes: &str) -> String {
    dishes.replace(LINE_BREAK_MARKER, "\n")
}

/// 只顯示當天的第一筆餐點
pub fn parse_meal_data(data: &Value) -> String {
    match meal_rows(data).first() {
        Some(meal) => format!("\n[{} 급식]\n\n{}", meal.date, dish_lines(&meal.dishes)),
        None => NO_MEAL_INFO.to_string(),
    }
}

/// 顯示當天所有餐點（조식/중식/석식），附上熱量
pub fn format_all_meals(data: &Value) -> String {
    let rows = meal_rows(data);
    if rows.is_empty() {
        return NO_MEAL_INFO.to_string();
    }

    let mut output = String::new();
    for meal in rows {
        let kind = meal.kind.as_deref().unwrap_or("급식");
        output.push_str(&format!("\n[{} {}]\n\n{}\n", meal.date, kind, dish_lines(&meal.dishes)));
        if let Some(calories) = meal.calories.as_deref().filter(|c| !c.trim().is_empty()) {
            output.push_str(&format!("({})\n", calories));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_meal_array_returns_no_data_message() {
        assert_eq!(parse_meal_data(&json!({})), NO_MEAL_INFO);

        let no_data = json!({"RESULT": {"CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다."}});
        assert_eq!(parse_meal_data(&no_data), NO_MEAL_INFO);

        let head_only = json!({"mealServiceDietInfo": [{"head": []}]});
        assert_eq!(parse_meal_data(&head_only), NO_MEAL_INFO);
        assert_eq!(format_all_meals(&head_only), NO_MEAL_INFO);
    }

    #[test]
    fn test_single_row_replaces_line_break_markers() {
        let data = json!({
            "mealServiceDietInfo": [
                {"head": [{"list_total_count": 1}]},
                {"row": [{
                    "MLSV_YMD": "20240501",
                    "DDISH_NM": "쌀밥<br/>미역국 (5.6.)<br/>불고기"
                }]}
            ]
        });

        assert_eq!(
            parse_meal_data(&data),
            "\n[20240501 급식]\n\n쌀밥\n미역국 (5.6.)\n불고기"
        );
    }

    #[test]
    fn test_only_first_row_is_shown() {
        let data = json!({
            "mealServiceDietInfo": [
                {"head": []},
                {"row": [
                    {"MLSV_YMD": "20240501", "DDISH_NM": "토스트", "MMEAL_SC_NM": "조식"},
                    {"MLSV_YMD": "20240501", "DDISH_NM": "비빔밥", "MMEAL_SC_NM": "중식"}
                ]}
            ]
        });

        let text = parse_meal_data(&data);
        assert!(text.contains("토스트"));
        assert!(!text.contains("비빔밥"));
    }

    #[test]
    fn test_format_all_meals() {
        let data = json!({
            "mealServiceDietInfo": [
                {"head": []},
                {"row": [
                    {"MLSV_YMD": "20240501", "DDISH_NM": "토스트<br/>우유", "MMEAL_SC_NM": "조식", "CAL_INFO": "512.3 Kcal"},
                    {"MLSV_YMD": "20240501", "DDISH_NM": "비빔밥", "MMEAL_SC_NM": "중식"}
                ]}
            ]
        });

        let text = format_all_meals(&data);
        assert!(text.contains("[20240501 조식]\n\n토스트\n우유\n(512.3 Kcal)"));
        assert!(text.contains("[20240501 중식]\n\n비빔밥\n"));
    }
}
