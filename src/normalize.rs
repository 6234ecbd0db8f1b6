use crate::aliases::{lookup, lookup_by, Field};
use crate::dates::{normalize_date_at, today, DateInput};
use crate::models::ChartRecord;
use chrono::NaiveDate;
use serde_json::{Map, Value};

pub fn normalize_records(raw: &Value) -> Vec<ChartRecord> {
    normalize_records_at(raw, today())
}

pub fn normalize_records_at(raw: &Value, today: NaiveDate) -> Vec<ChartRecord> {
    match raw {
        Value::Array(items) => items
            .iter()
            .map(|item| from_list_item(item, today))
            .collect(),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, value)| from_keyed_entry(key, value, today))
            .collect(),
        _ => Vec::new(),
    }
}

fn from_list_item(item: &Value, today: NaiveDate) -> ChartRecord {
    let fields = item.as_object();
    let date = fields
        .and_then(|fields| lookup(fields, Field::Date))
        .map(DateInput::from_value)
        .unwrap_or(DateInput::Missing);
    build_record(normalize_date_at(date, today), fields)
}

fn from_keyed_entry(key: &str, value: &Value, today: NaiveDate) -> ChartRecord {
    let fields = value.as_object();
    // An explicit date column inside the record beats the outer key.
    let date = fields
        .and_then(|fields| lookup(fields, Field::Date))
        .map(DateInput::from_value)
        .unwrap_or_else(|| DateInput::from(key));
    build_record(normalize_date_at(date, today), fields)
}

fn build_record(date: String, fields: Option<&Map<String, Value>>) -> ChartRecord {
    let [order_sum, volume, sales] = Field::NUMERIC.map(|field| amount(fields, field));
    ChartRecord {
        date,
        order_sum,
        volume,
        sales,
    }
}

fn amount(fields: Option<&Map<String, Value>>, field: Field) -> f64 {
    fields
        .and_then(|fields| lookup_by(fields, field, coerce_amount))
        .unwrap_or(0.0)
}

/// Positive finite number from a JSON number or a numeric string such as
/// `"1 250,5"`. Zero, negatives and garbage are rejected.
pub fn coerce_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => parse_amount(text)?,
        _ => return None,
    };
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

fn parse_amount(text: &str) -> Option<f64> {
    let mut cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.matches(',').count() == 1 && !cleaned.contains('.') {
        cleaned = cleaned.replace(',', ".");
    }
    cleaned.parse().ok()
}
