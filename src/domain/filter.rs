//! Filter - Per-Column Filter Model
//!
//! The filter model maps a field name to one filter definition. It is turned
//! into query parameters for server-side fetches and evaluated in-process for
//! client-side tables.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::{Record, lookup, value_number, value_text};

/// Filter operators offered by column filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    NotEqual,
}

/// Operators for free-text columns
pub const TEXT_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Contains,
    FilterOperator::Equals,
    FilterOperator::StartsWith,
    FilterOperator::EndsWith,
];

/// Operators for numeric and date columns
pub const COMPARISON_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Equals,
    FilterOperator::GreaterThan,
    FilterOperator::LessThan,
    FilterOperator::NotEqual,
];

impl FilterOperator {
    /// Wire name of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Contains => "contains",
            FilterOperator::Equals => "equals",
            FilterOperator::StartsWith => "startsWith",
            FilterOperator::EndsWith => "endsWith",
            FilterOperator::GreaterThan => "greaterThan",
            FilterOperator::LessThan => "lessThan",
            FilterOperator::NotEqual => "notEqual",
        }
    }

    /// Short label for the filter bar
    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Contains => "contains",
            FilterOperator::Equals => "=",
            FilterOperator::StartsWith => "starts with",
            FilterOperator::EndsWith => "ends with",
            FilterOperator::GreaterThan => ">",
            FilterOperator::LessThan => "<",
            FilterOperator::NotEqual => "≠",
        }
    }

    /// Query key suffix; `None` means the raw field name is used
    fn key_suffix(&self) -> Option<&'static str> {
        match self {
            FilterOperator::Equals => Some("Equals"),
            FilterOperator::StartsWith => Some("StartsWith"),
            FilterOperator::EndsWith => Some("EndsWith"),
            FilterOperator::Contains
            | FilterOperator::GreaterThan
            | FilterOperator::LessThan
            | FilterOperator::NotEqual => None,
        }
    }
}

/// A single column filter condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filterType", rename_all = "camelCase")]
pub enum FilterDefinition {
    Text {
        operator: FilterOperator,
        value: String,
    },
    Number {
        operator: FilterOperator,
        value: f64,
    },
    Date {
        operator: FilterOperator,
        value: NaiveDate,
    },
    /// Discrete-value filter: the cell must be one of `values`
    Set { values: Vec<String> },
}

impl FilterDefinition {
    pub fn text(operator: FilterOperator, value: impl Into<String>) -> Self {
        FilterDefinition::Text {
            operator,
            value: value.into(),
        }
    }

    pub fn number(operator: FilterOperator, value: f64) -> Self {
        FilterDefinition::Number { operator, value }
    }

    pub fn date(operator: FilterOperator, value: NaiveDate) -> Self {
        FilterDefinition::Date { operator, value }
    }

    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterDefinition::Set {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Operator, if this is not a set filter
    pub fn operator(&self) -> Option<FilterOperator> {
        match self {
            FilterDefinition::Text { operator, .. }
            | FilterDefinition::Number { operator, .. }
            | FilterDefinition::Date { operator, .. } => Some(*operator),
            FilterDefinition::Set { .. } => None,
        }
    }

    /// Filter value as it is sent on the wire
    pub fn value_string(&self) -> String {
        match self {
            FilterDefinition::Text { value, .. } => value.clone(),
            FilterDefinition::Number { value, .. } => format_number(*value),
            FilterDefinition::Date { value, .. } => value.format("%Y-%m-%d").to_string(),
            FilterDefinition::Set { values } => values.join(","),
        }
    }

    /// Query parameter for this filter on `field`.
    ///
    /// `equals` maps to `{field}Equals`, `contains` and the numeric/date
    /// comparisons map to the raw field key. Empty filters produce nothing.
    pub fn query_param(&self, field: &str) -> Option<(String, String)> {
        let value = self.value_string();
        if value.is_empty() {
            return None;
        }

        let key = match self.operator().and_then(|op| op.key_suffix()) {
            Some(suffix) => format!("{field}{suffix}"),
            None => field.to_string(),
        };
        Some((key, value))
    }

    /// Evaluate against a cell value (client-side mode)
    pub fn matches(&self, cell: Option<&Value>) -> bool {
        match self {
            FilterDefinition::Text { operator, value } => {
                let cell = cell.map(value_text).unwrap_or_default();
                match_text(*operator, &cell, value)
            }
            FilterDefinition::Number { operator, value } => {
                match cell.and_then(value_number) {
                    Some(cell) => match_ordered(*operator, cell, *value, |a, b| {
                        (a - b).abs() < f64::EPSILON
                    }),
                    None => false,
                }
            }
            FilterDefinition::Date { operator, value } => {
                match cell.map(value_text).as_deref().and_then(parse_date) {
                    Some(cell) => match_ordered(*operator, cell, *value, |a, b| a == b),
                    None => false,
                }
            }
            FilterDefinition::Set { values } => {
                let cell = cell.map(value_text).unwrap_or_default();
                values.iter().any(|v| v.eq_ignore_ascii_case(&cell))
            }
        }
    }
}

fn match_text(operator: FilterOperator, cell: &str, needle: &str) -> bool {
    let cell = cell.to_lowercase();
    let needle = needle.to_lowercase();
    match operator {
        FilterOperator::Contains => cell.contains(&needle),
        FilterOperator::Equals => cell == needle,
        FilterOperator::StartsWith => cell.starts_with(&needle),
        FilterOperator::EndsWith => cell.ends_with(&needle),
        FilterOperator::NotEqual => cell != needle,
        FilterOperator::GreaterThan => cell > needle,
        FilterOperator::LessThan => cell < needle,
    }
}

fn match_ordered<T: PartialOrd>(
    operator: FilterOperator,
    cell: T,
    target: T,
    eq: impl Fn(&T, &T) -> bool,
) -> bool {
    match operator {
        FilterOperator::GreaterThan => cell > target,
        FilterOperator::LessThan => cell < target,
        FilterOperator::NotEqual => !eq(&cell, &target),
        FilterOperator::Equals
        | FilterOperator::Contains
        | FilterOperator::StartsWith
        | FilterOperator::EndsWith => eq(&cell, &target),
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let day = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// The user-configured set of per-column filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterModel(BTreeMap<String, FilterDefinition>);

impl FilterModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, filter: FilterDefinition) -> Self {
        self.set(field, filter);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, filter: FilterDefinition) {
        self.0.insert(field.into(), filter);
    }

    pub fn remove(&mut self, field: &str) -> Option<FilterDefinition> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&FilterDefinition> {
        self.0.get(field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterDefinition)> {
        self.0.iter()
    }

    /// Query parameters for every active filter
    pub fn query_params(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter_map(|(field, filter)| filter.query_param(field))
            .collect()
    }

    /// Whether a record passes every filter
    pub fn matches(&self, record: &Record) -> bool {
        self.0
            .iter()
            .all(|(field, filter)| filter.matches(lookup(record, field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_keys_follow_operator() {
        let model = FilterModel::new()
            .with("name", FilterDefinition::text(FilterOperator::Contains, "jo"))
            .with("email", FilterDefinition::text(FilterOperator::Equals, "a@b.c"))
            .with("age", FilterDefinition::number(FilterOperator::GreaterThan, 30.0))
            .with("city", FilterDefinition::text(FilterOperator::StartsWith, "Par"));

        let params = model.query_params();
        assert_eq!(params.get("name").map(String::as_str), Some("jo"));
        assert_eq!(params.get("emailEquals").map(String::as_str), Some("a@b.c"));
        assert_eq!(params.get("age").map(String::as_str), Some("30"));
        assert_eq!(params.get("cityStartsWith").map(String::as_str), Some("Par"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn numeric_filters_always_produce_a_parameter() {
        for op in COMPARISON_OPERATORS {
            let filter = FilterDefinition::number(*op, 2.5);
            let (key, value) = filter.query_param("score").expect("numeric filter param");
            assert_eq!(value, "2.5");
            if *op == FilterOperator::Equals {
                assert_eq!(key, "scoreEquals");
            } else {
                assert_eq!(key, "score");
            }
        }
    }

    #[test]
    fn date_filters_use_iso_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date");

        let after = FilterDefinition::date(FilterOperator::GreaterThan, day);
        assert_eq!(
            after.query_param("createdAt"),
            Some(("createdAt".to_string(), "2024-01-02".to_string()))
        );

        let before = FilterDefinition::date(FilterOperator::LessThan, day);
        assert_eq!(
            before.query_param("createdAt"),
            Some(("createdAt".to_string(), "2024-01-02".to_string()))
        );

        let on = FilterDefinition::date(FilterOperator::Equals, day);
        assert_eq!(
            on.query_param("createdAt"),
            Some(("createdAtEquals".to_string(), "2024-01-02".to_string()))
        );
    }

    #[test]
    fn empty_text_filter_is_skipped() {
        let filter = FilterDefinition::text(FilterOperator::Contains, "");
        assert_eq!(filter.query_param("name"), None);
    }

    #[test]
    fn set_filter_joins_values() {
        let filter = FilterDefinition::set(["true", "false"]);
        assert_eq!(
            filter.query_param("active"),
            Some(("active".to_string(), "true,false".to_string()))
        );
    }

    #[test]
    fn local_matching() {
        let row = json!({ "name": "John Doe", "age": 42, "joined": "2023-05-01T10:00:00Z", "active": true });
        let row = row.as_object().cloned().expect("object");

        let model = FilterModel::new()
            .with("name", FilterDefinition::text(FilterOperator::Contains, "john"))
            .with("age", FilterDefinition::number(FilterOperator::GreaterThan, 40.0))
            .with(
                "joined",
                FilterDefinition::date(
                    FilterOperator::LessThan,
                    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
                ),
            )
            .with("active", FilterDefinition::set(["true"]));
        assert!(model.matches(&row));

        let model = FilterModel::new()
            .with("age", FilterDefinition::number(FilterOperator::NotEqual, 42.0));
        assert!(!model.matches(&row));
    }

    #[test]
    fn serializes_with_filter_type_tag() {
        let filter = FilterDefinition::number(FilterOperator::LessThan, 3.0);
        let json = serde_json::to_value(&filter).expect("serialize");
        assert_eq!(json["filterType"], "number");
        assert_eq!(json["operator"], "lessThan");
    }
}
