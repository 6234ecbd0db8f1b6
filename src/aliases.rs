use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    OrderSum,
    Volume,
    Sales,
}

impl Field {
    pub const NUMERIC: [Field; 3] = [Field::OrderSum, Field::Volume, Field::Sales];

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Date => &["Дата", "дата", "Date", "date", "DATE", "day", "Day"],
            Field::OrderSum => &["Сумма заказа", "orderSum", "order_sum", "sum"],
            Field::Volume => &["Объём", "volume", "Volume", "объем"],
            Field::Sales => &["Продажи", "sales", "Sales", "продажи"],
        }
    }
}

pub fn lookup<'a>(record: &'a Map<String, Value>, field: Field) -> Option<&'a Value> {
    lookup_by(record, field, |value| is_truthy(value).then_some(value))
}

pub fn lookup_by<'a, T>(
    record: &'a Map<String, Value>,
    field: Field,
    accept: impl FnMut(&'a Value) -> Option<T>,
) -> Option<T> {
    field
        .aliases()
        .iter()
        .filter_map(|alias| record.get(*alias))
        .find_map(accept)
}

/// Loose truthiness: null, false, zero, NaN and the empty string are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn russian_date_column_wins_over_english() {
        let record = object(json!({ "date": "2024-01-02", "Дата": "03012024" }));
        assert_eq!(lookup(&record, Field::Date), Some(&json!("03012024")));
    }

    #[test]
    fn falsy_values_fall_through_to_next_alias() {
        let record = object(json!({ "Сумма заказа": 0, "orderSum": "", "order_sum": null, "sum": 7 }));
        assert_eq!(lookup(&record, Field::OrderSum), Some(&json!(7)));
    }

    #[test]
    fn missing_field_yields_none() {
        let record = object(json!({ "unrelated": 1 }));
        assert_eq!(lookup(&record, Field::Sales), None);
    }

    #[test]
    fn numeric_fields_follow_record_order() {
        assert_eq!(Field::NUMERIC, [Field::OrderSum, Field::Volume, Field::Sales]);
        assert!(!Field::NUMERIC.contains(&Field::Date));
    }

    #[test]
    fn every_field_has_aliases() {
        for field in [Field::Date, Field::OrderSum, Field::Volume, Field::Sales] {
            assert!(!field.aliases().is_empty());
        }
        assert_eq!(Field::Volume.aliases()[0], "Объём");
        assert_eq!(Field::Volume.aliases().last(), Some(&"объем"));
    }

    #[test]
    fn truthiness_matches_loose_semantics() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
