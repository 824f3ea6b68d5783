//! Record - Untyped Row Data
//!
//! Rows arrive from the server as arbitrary JSON objects. Cells are looked up
//! by field name, with `a.b` paths reaching into nested objects.

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// A single row as returned by the server
pub type Record = Map<String, Value>;

/// Look up a (possibly dotted) field in a record
pub fn lookup<'a>(record: &'a Record, field: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(field) {
        return Some(value);
    }

    let mut parts = field.split('.');
    let mut current = record.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Render a JSON value as cell text
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Cell text for a field, empty when absent
pub fn cell_text(record: &Record, field: &str) -> String {
    lookup(record, field).map(value_text).unwrap_or_default()
}

/// Numeric view of a value (numbers, or strings that parse as numbers)
pub fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Ordering used for local sorting: absent and null values sort last,
/// numbers compare numerically, everything else by case-insensitive text.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Number(_), Value::Number(_)) => {
                let (x, y) = (value_number(a), value_number(b));
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            _ => value_text(a)
                .to_lowercase()
                .cmp(&value_text(b).to_lowercase()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().expect("fixture should be an object")
    }

    #[test]
    fn nested_lookup() {
        let user = record(json!({
            "id": 1,
            "company": { "name": "ABC Corp" },
        }));

        assert_eq!(cell_text(&user, "company.name"), "ABC Corp");
        assert_eq!(cell_text(&user, "id"), "1");
        assert_eq!(cell_text(&user, "company.missing"), "");
        assert_eq!(cell_text(&user, "phone"), "");
    }

    #[test]
    fn nulls_sort_last() {
        let one = json!(1);
        let two = json!(2);
        assert_eq!(compare_values(Some(&one), Some(&two)), Ordering::Less);
        assert_eq!(compare_values(None, Some(&one)), Ordering::Greater);
        assert_eq!(
            compare_values(Some(&Value::Null), Some(&one)),
            Ordering::Greater
        );
    }

    #[test]
    fn text_sorts_case_insensitively() {
        let a = json!("apple");
        let b = json!("Banana");
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);
    }
}
