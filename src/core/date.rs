use chrono::Local;

/// 今天的本地日期，`YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DD` → `YYYYMMDD`
pub fn to_compact_date(date: &str) -> String {
    date.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_compact_date() {
        assert_eq!(to_compact_date("2024-05-01"), "20240501");
        assert_eq!(to_compact_date("20240501"), "20240501");
    }

    #[test]
    fn test_today_matches_local_date() {
        let before = Local::now().date_naive();
        let value = today();
        let after = Local::now().date_naive();

        let parsed = chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d").unwrap();
        assert!(parsed == before || parsed == after);
        assert_eq!(value.len(), 10);
        assert_eq!(to_compact_date(&value).len(), 8);
    }
}
