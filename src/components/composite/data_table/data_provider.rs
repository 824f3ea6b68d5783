//! Data Provider
//!
//! In-memory row storage. `VecDataProvider` holds a static row set and
//! backs client-side tables: filtering, sorting and paging happen in-process
//! with the same operator semantics the server applies.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::filter::FilterModel;
use crate::domain::page::{SortDirection, SortModel};
use crate::domain::record::{Record, compare_values, lookup};

/// Simple in-memory data provider
#[derive(Clone)]
pub struct VecDataProvider<R> {
    rows: Arc<Vec<R>>,
}

impl<R: Clone + Send + Sync + 'static> VecDataProvider<R> {
    /// Create a new VecDataProvider
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    /// Get all rows
    pub fn all(&self) -> &[R] {
        &self.rows
    }
}

/// Result of a local query: the requested window plus the filtered total
#[derive(Debug, Clone, PartialEq)]
pub struct LocalPage {
    pub rows: Vec<Record>,
    pub total: usize,
}

impl VecDataProvider<Record> {
    /// Filter, sort and slice the row set
    pub fn query(
        &self,
        filters: &FilterModel,
        sort: Option<&SortModel>,
        start: usize,
        count: usize,
    ) -> LocalPage {
        let mut matched: Vec<&Record> = self.rows.iter().filter(|r| filters.matches(r)).collect();

        if let Some(sort) = sort {
            matched.sort_by(|a, b| {
                let ord = compare_values(lookup(a, &sort.col_id), lookup(b, &sort.col_id));
                match sort.sort {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => reverse_keeping_nulls_last(ord, a, b, &sort.col_id),
                }
            });
        }

        let total = matched.len();
        let rows = matched
            .into_iter()
            .skip(start)
            .take(count)
            .cloned()
            .collect();

        LocalPage { rows, total }
    }
}

fn reverse_keeping_nulls_last(ord: Ordering, a: &Record, b: &Record, field: &str) -> Ordering {
    let a_null = lookup(a, field).is_none_or(|v| v.is_null());
    let b_null = lookup(b, field).is_none_or(|v| v.is_null());
    if a_null || b_null { ord } else { ord.reverse() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{FilterDefinition, FilterOperator};
    use serde_json::json;

    fn provider() -> VecDataProvider<Record> {
        let rows = json!([
            { "id": 1, "name": "Charlie", "age": 31 },
            { "id": 2, "name": "alice", "age": 25 },
            { "id": 3, "name": "Bob" },
            { "id": 4, "name": "Dave", "age": 40 },
        ]);
        let rows = rows
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|r| r.as_object().cloned())
            .collect();
        VecDataProvider::new(rows)
    }

    fn ids(page: &LocalPage) -> Vec<i64> {
        page.rows
            .iter()
            .filter_map(|r| r.get("id").and_then(|v| v.as_i64()))
            .collect()
    }

    #[test]
    fn windows_without_filter_or_sort() {
        let page = provider().query(&FilterModel::new(), None, 1, 2);
        assert_eq!(page.total, 4);
        assert_eq!(ids(&page), vec![2, 3]);
    }

    #[test]
    fn sorts_with_missing_values_last() {
        let asc = SortModel::new("age", SortDirection::Asc);
        let page = provider().query(&FilterModel::new(), Some(&asc), 0, 10);
        assert_eq!(ids(&page), vec![2, 1, 4, 3]);

        let desc = SortModel::new("age", SortDirection::Desc);
        let page = provider().query(&FilterModel::new(), Some(&desc), 0, 10);
        assert_eq!(ids(&page), vec![4, 1, 2, 3]);
    }

    #[test]
    fn filter_reduces_total() {
        let filters = FilterModel::new()
            .with("age", FilterDefinition::number(FilterOperator::GreaterThan, 30.0));
        let page = provider().query(&filters, None, 0, 1);
        assert_eq!(page.total, 2);
        assert_eq!(ids(&page), vec![1]);
    }
}
