use crate::aliases::is_truthy;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde_json::{Number, Value};
use std::borrow::Cow;

pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

const OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%b %d %Y %H:%M:%S %z",
    "%d %b %Y %H:%M:%S %z",
];

const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%B %d, %Y %H:%M:%S",
    "%b %d %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
];

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[derive(Debug, Clone, PartialEq)]
pub enum DateInput<'a> {
    Missing,
    Date(NaiveDate),
    Text(Cow<'a, str>),
}

impl<'a> DateInput<'a> {
    pub fn from_value(value: &'a Value) -> Self {
        if !is_truthy(value) {
            return DateInput::Missing;
        }
        match value {
            Value::String(text) => DateInput::Text(Cow::Borrowed(text)),
            Value::Number(number) => DateInput::Text(Cow::Owned(number_to_string(number))),
            other => DateInput::Text(Cow::Owned(loose_string(other))),
        }
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(Cow::Borrowed(text))
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn normalize_date(input: DateInput<'_>) -> String {
    normalize_date_at(input, today())
}

/// Turns whatever the upstream sent into a display date. Never fails: input
/// that no parser accepts comes back trimmed but otherwise untouched.
pub fn normalize_date_at(input: DateInput<'_>, today: NaiveDate) -> String {
    let text = match input {
        DateInput::Missing => return format_date(today),
        DateInput::Date(date) => return format_date(date),
        DateInput::Text(text) if text.is_empty() => return format_date(today),
        DateInput::Text(text) => text,
    };

    let trimmed = text.trim();
    parse_compact(trimmed)
        .or_else(|| parse_generic(trimmed))
        .map(format_date)
        .unwrap_or_else(|| trimmed.to_string())
}

fn parse_compact(text: &str) -> Option<NaiveDate> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u32 = text[0..2].parse().ok()?;
    let month: u32 = text[2..4].parse().ok()?;
    let year: i32 = text[4..8].parse().ok()?;
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || year < 1900 {
        return None;
    }
    // from_ymd_opt rejects days past the end of the month.
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_generic(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if let Some(date) = parse_with_offset(text) {
        return Some(date);
    }
    let cleaned = simplify_date_string(text);
    parse_with_offset(&cleaned)
        .or_else(|| parse_naive(&cleaned))
        .or_else(|| parse_year_month(&cleaned))
}

fn parse_with_offset(text: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .or_else(|| DateTime::parse_from_rfc2822(text).ok())
        .or_else(|| {
            OFFSET_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
        })
        .map(|moment| moment.with_timezone(&Local).date_naive())
}

fn parse_naive(text: &str) -> Option<NaiveDate> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|moment| moment.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// `YYYY-MM` is the first day of that month.
fn parse_year_month(text: &str) -> Option<NaiveDate> {
    let (year, month) = text.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Reduces `Mon Jan 15 2024 00:00:00 GMT+0300 (Moscow Standard Time)` to
/// `Jan 15 2024 00:00:00 +0300`.
fn simplify_date_string(text: &str) -> String {
    let text = match text.rfind(" (") {
        Some(start) if text.ends_with(')') => &text[..start],
        _ => text,
    };
    strip_weekday(text.trim())
        .split_whitespace()
        .map(|token| match token.strip_prefix("GMT").or_else(|| token.strip_prefix("UTC")) {
            Some("") => "+0000",
            Some(offset) => offset,
            None => token,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_weekday(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    let token = text[..end].to_ascii_lowercase();
    let is_weekday = WEEKDAYS
        .iter()
        .any(|day| token == *day || (token.len() == 3 && day.starts_with(token.as_str())));
    if is_weekday {
        text[end..].trim_start_matches(|c: char| c == ',' || c.is_whitespace())
    } else {
        text
    }
}

fn loose_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_to_string(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(loose_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_string(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => format!("{float:.0}"),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    fn at(input: DateInput<'_>) -> String {
        normalize_date_at(input, fixed_today())
    }

    fn local_day(rfc3339: &str) -> String {
        let moment = DateTime::parse_from_rfc3339(rfc3339).unwrap();
        format_date(moment.with_timezone(&Local).date_naive())
    }

    #[test]
    fn compact_dates_are_day_month_year() {
        assert_eq!(at("01012024".into()), "01.01.2024");
        assert_eq!(at("29022024".into()), "29.02.2024");
        assert_eq!(at("31121900".into()), "31.12.1900");
        assert_eq!(at("  15062023 ".into()), "15.06.2023");
    }

    #[test]
    fn impossible_compact_dates_pass_through() {
        assert_eq!(at("31042023".into()), "31042023");
        assert_eq!(at("29022023".into()), "29022023");
        assert_eq!(at("00012024".into()), "00012024");
        assert_eq!(at("01132024".into()), "01132024");
        assert_eq!(at("01011899".into()), "01011899");
    }

    #[test]
    fn missing_or_empty_means_today() {
        assert_eq!(at(DateInput::Missing), "09.03.2026");
        assert_eq!(at("".into()), "09.03.2026");
        assert_eq!(at(DateInput::from_value(&Value::Null)), "09.03.2026");
        assert_eq!(at(DateInput::from_value(&json!(0))), "09.03.2026");
    }

    #[test]
    fn whitespace_only_is_not_missing() {
        assert_eq!(at("   ".into()), "");
    }

    #[test]
    fn native_dates_are_formatted_directly() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(at(date.into()), "04.07.2024");
    }

    #[test]
    fn generic_formats_are_recognised() {
        assert_eq!(at("2024-01-15".into()), "15.01.2024");
        assert_eq!(at("2024-01-15T10:30:00".into()), "15.01.2024");
        assert_eq!(at("2024-01-15 10:30:00.250".into()), "15.01.2024");
        assert_eq!(at("2024/01/15".into()), "15.01.2024");
        assert_eq!(at("01/15/2024".into()), "15.01.2024");
    }

    #[test]
    fn month_name_formats_are_recognised() {
        assert_eq!(at("Jan 15, 2024".into()), "15.01.2024");
        assert_eq!(at("January 15, 2024".into()), "15.01.2024");
        assert_eq!(at("15 January 2024".into()), "15.01.2024");
        assert_eq!(at("Mon Jan 15 2024".into()), "15.01.2024");
        assert_eq!(at("Monday, January 15, 2024".into()), "15.01.2024");
        assert_eq!(at("January 15, 2024 10:00:00".into()), "15.01.2024");
    }

    #[test]
    fn year_month_is_first_of_month() {
        assert_eq!(at("2024-01".into()), "01.01.2024");
        assert_eq!(at("2024-13".into()), "2024-13");
    }

    #[test]
    fn compact_offsets_and_js_date_strings_are_recognised() {
        assert_eq!(
            at("2024-01-15T10:30:00.000+0300".into()),
            local_day("2024-01-15T10:30:00+03:00")
        );
        assert_eq!(
            at("Mon Jan 15 2024 00:00:00 GMT+0300".into()),
            local_day("2024-01-15T00:00:00+03:00")
        );
        assert_eq!(
            at("Mon Jan 15 2024 12:00:00 GMT+0300 (Moscow Standard Time)".into()),
            local_day("2024-01-15T12:00:00+03:00")
        );
        assert_eq!(
            at("Jan 15 2024 12:00:00 GMT".into()),
            local_day("2024-01-15T12:00:00+00:00")
        );
    }

    #[test]
    fn weekday_lookalikes_are_not_stripped() {
        assert_eq!(at("Sunrise 2024".into()), "Sunrise 2024");
        assert_eq!(at("Mon".into()), "Mon");
    }

    #[test]
    fn objects_and_arrays_stringify_loosely() {
        assert_eq!(at(DateInput::from_value(&json!({ "d": 1 }))), "[object Object]");
        assert_eq!(at(DateInput::from_value(&json!([1, 2]))), "1,2");
        assert_eq!(at(DateInput::from_value(&json!(["01012024"]))), "01.01.2024");
        assert_eq!(at(DateInput::from_value(&json!(true))), "true");
    }

    #[test]
    fn offset_timestamps_use_local_calendar_day() {
        let expected = DateTime::parse_from_rfc3339("2024-01-15T12:00:00+00:00")
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(at("2024-01-15T12:00:00Z".into()), format_date(expected));
    }

    #[test]
    fn unparseable_text_is_returned_trimmed() {
        assert_eq!(at("  неделя 3 ".into()), "неделя 3");
        assert_eq!(at("15.01.2024".into()), "15.01.2024");
    }

    #[test]
    fn numbers_are_stringified_first() {
        assert_eq!(at(DateInput::from_value(&json!(15062023))), "15.06.2023");
        assert_eq!(at(DateInput::from_value(&json!(1012024))), "1012024");
    }
}
