use chrono::NaiveDate;

use crate::date::parse_date;
use crate::error::CoreError;

/// Search format of a date typed by a person, e.g. `15.03.2024`.
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

/// Number of rows returned by list and search when no limit is configured.
pub const DEFAULT_LIMIT: u32 = 50;

/// A parsed search key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Tasks due on exactly this date.
    Date(NaiveDate),
    /// Tasks whose title or comment contains the text, ignoring ASCII case.
    Text(String),
}

impl SearchQuery {
    pub fn parse(key: &str) -> Result<Self, CoreError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CoreError::InvalidInput("search key is empty".to_string()));
        }

        if let Ok(date) = NaiveDate::parse_from_str(key, SEARCH_DATE_FORMAT) {
            return Ok(SearchQuery::Date(date));
        }
        if let Ok(date) = parse_date(key) {
            return Ok(SearchQuery::Date(date));
        }
        Ok(SearchQuery::Text(key.to_string()))
    }

    /// `LIKE` pattern of a text query, with `%`, `_` and `\` escaped by `\`.
    pub fn like_pattern(text: &str) -> String {
        let mut pattern = String::with_capacity(text.len() + 2);
        pattern.push('%');
        for c in text.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("15.03.2024", 2024, 3, 15)]
    #[case("20240315", 2024, 3, 15)]
    #[case(" 01.01.2025 ", 2025, 1, 1)]
    fn test_date_keys(#[case] key: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
        assert_eq!(
            SearchQuery::parse(key).unwrap(),
            SearchQuery::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
        );
    }

    #[rstest]
    #[case("dentist")]
    #[case("31.02.2024")]
    #[case("2024-03-15")]
    #[case("1234567")]
    fn test_text_keys(#[case] key: &str) {
        assert_eq!(SearchQuery::parse(key).unwrap(), SearchQuery::Text(key.to_string()));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(SearchQuery::parse(""), Err(CoreError::InvalidInput(_))));
        assert!(matches!(SearchQuery::parse("   "), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(SearchQuery::like_pattern("rent"), "%rent%");
        assert_eq!(SearchQuery::like_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(SearchQuery::like_pattern(r"a\b"), r"%a\\b%");
    }
}
