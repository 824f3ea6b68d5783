//! Column - Column Descriptors and Derived Filter Configuration

use serde::{Deserialize, Serialize};

use super::filter::{COMPARISON_OPERATORS, FilterOperator, TEXT_OPERATORS};

/// Value type of a column; drives the filter operator set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
}

/// Describes one table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Record field shown in this column
    pub field: String,
    /// Header label (defaults to the field name)
    #[serde(default)]
    pub header_name: Option<String>,
    #[serde(default, rename = "type")]
    pub column_type: ColumnType,
    #[serde(default = "default_true")]
    pub filterable: bool,
    #[serde(default = "default_true")]
    pub sortable: bool,
}

fn default_true() -> bool {
    true
}

impl ColumnDescriptor {
    /// Create a text column for `field`
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header_name: None,
            column_type: ColumnType::Text,
            filterable: true,
            sortable: true,
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header_name = Some(header.into());
        self
    }

    pub fn kind(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Header text shown to the user
    pub fn header_label(&self) -> &str {
        self.header_name.as_deref().unwrap_or(&self.field)
    }

    /// Derived filter configuration, `None` when filtering is disabled
    pub fn filter_config(&self) -> Option<FilterConfig> {
        self.filterable
            .then(|| FilterConfig::for_type(self.column_type))
    }
}

/// How a column is filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Text,
    Number,
    Date,
    /// Discrete values, no free-text operators
    Set,
}

/// Effective filter configuration for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub kind: FilterKind,
    pub operators: &'static [FilterOperator],
}

impl FilterConfig {
    /// Filter configuration for a column type
    pub fn for_type(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Number => Self {
                kind: FilterKind::Number,
                operators: COMPARISON_OPERATORS,
            },
            ColumnType::Date => Self {
                kind: FilterKind::Date,
                operators: COMPARISON_OPERATORS,
            },
            ColumnType::Boolean => Self {
                kind: FilterKind::Set,
                operators: &[],
            },
            ColumnType::Text => Self {
                kind: FilterKind::Text,
                operators: TEXT_OPERATORS,
            },
        }
    }

    /// Operator preselected in the filter bar
    pub fn default_operator(&self) -> Option<FilterOperator> {
        self.operators.first().copied()
    }
}

/// A column descriptor paired with its derived filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedColumn {
    pub descriptor: ColumnDescriptor,
    pub filter: Option<FilterConfig>,
}

/// Derive the effective filter configuration for every column
pub fn process_columns(columns: &[ColumnDescriptor]) -> Vec<ProcessedColumn> {
    columns
        .iter()
        .map(|descriptor| ProcessedColumn {
            descriptor: descriptor.clone(),
            filter: descriptor.filter_config(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_sets_by_type() {
        assert_eq!(FilterConfig::for_type(ColumnType::Text).operators, TEXT_OPERATORS);
        assert_eq!(
            FilterConfig::for_type(ColumnType::Number).operators,
            COMPARISON_OPERATORS
        );
        assert_eq!(
            FilterConfig::for_type(ColumnType::Date).kind,
            FilterKind::Date
        );
        let boolean = FilterConfig::for_type(ColumnType::Boolean);
        assert_eq!(boolean.kind, FilterKind::Set);
        assert!(boolean.operators.is_empty());
    }

    #[test]
    fn derivation_ignores_call_order_and_other_fields() {
        let columns = vec![
            ColumnDescriptor::new("age").kind(ColumnType::Number).header("Age"),
            ColumnDescriptor::new("name"),
            ColumnDescriptor::new("score").kind(ColumnType::Number).sortable(false),
        ];

        let forward = process_columns(&columns);
        let mut reversed_input = columns.clone();
        reversed_input.reverse();
        let mut backward = process_columns(&reversed_input);
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward[0].filter, forward[2].filter);
    }

    #[test]
    fn non_filterable_column_has_no_filter() {
        let column = ColumnDescriptor::new("id").filterable(false);
        assert_eq!(column.filter_config(), None);
    }

    #[test]
    fn deserializes_descriptor_defaults() {
        let column: ColumnDescriptor =
            serde_json::from_str(r#"{"field":"price","type":"number"}"#).expect("parse");
        assert_eq!(column.column_type, ColumnType::Number);
        assert!(column.filterable);
        assert!(column.sortable);
        assert_eq!(column.header_label(), "price");
    }
}
