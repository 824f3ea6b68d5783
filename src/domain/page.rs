//! Page - Page Request / Response Protocol Types
//!
//! Outbound query: `page`, `size`, `sort`, `sortField`, filter parameters and
//! caller-supplied extras. Inbound body: `{ "content": [...], "totalElements": N }`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::filter::FilterModel;
use super::record::Record;
use crate::error::{Error, Result};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Single-column sort entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortModel {
    pub col_id: String,
    pub sort: SortDirection,
}

impl SortModel {
    pub fn new(col_id: impl Into<String>, sort: SortDirection) -> Self {
        Self {
            col_id: col_id.into(),
            sort,
        }
    }

    /// Header-click cycle: none → asc → desc → none
    pub fn cycle(current: Option<&SortModel>, col_id: &str) -> Option<SortModel> {
        match current {
            Some(sort) if sort.col_id == col_id => match sort.sort {
                SortDirection::Asc => Some(SortModel::new(col_id, SortDirection::Desc)),
                SortDirection::Desc => None,
            },
            _ => Some(SortModel::new(col_id, SortDirection::Asc)),
        }
    }
}

/// Row window requested by the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRowsParams {
    pub start_row: usize,
    pub end_row: usize,
    /// Only the first entry is sent to the server
    pub sort_model: Vec<SortModel>,
}

impl GetRowsParams {
    pub fn new(start_row: usize, end_row: usize) -> Self {
        Self {
            start_row,
            end_row,
            sort_model: Vec::new(),
        }
    }

    pub fn with_sort(mut self, sort: Option<SortModel>) -> Self {
        self.sort_model = sort.into_iter().collect();
        self
    }
}

/// One server fetch, built per request
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub start_row: usize,
    pub page_size: usize,
    pub sort: Option<SortModel>,
    pub filters: FilterModel,
}

impl PageRequest {
    /// Zero-based page index
    pub fn page(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.start_row / self.page_size
        }
    }

    /// Query parameters; later sources override earlier ones on key collision
    pub fn query_params(&self, extra: &BTreeMap<String, String>) -> Result<BTreeMap<String, String>> {
        if self.page_size == 0 {
            return Err(Error::invalid("page size must be greater than zero"));
        }

        let mut params = BTreeMap::new();
        params.insert("page".to_string(), self.page().to_string());
        params.insert("size".to_string(), self.page_size.to_string());
        if let Some(sort) = &self.sort {
            params.insert("sort".to_string(), sort.sort.as_str().to_string());
            params.insert("sortField".to_string(), sort.col_id.clone());
        }
        params.extend(self.filters.query_params());
        params.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(params)
    }
}

/// One page of rows plus the server-side total
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub rows: Vec<Record>,
    pub total_count: usize,
}

impl PageResponse {
    /// Validate and unpack a response body.
    ///
    /// `content` must be an array of objects no longer than the page size and
    /// `totalElements` must be a non-negative integer.
    pub fn from_body(body: Value, page_size: usize) -> Result<Self> {
        let Value::Object(mut body) = body else {
            return Err(Error::protocol("Invalid data format received from server"));
        };

        let total_count = body
            .get("totalElements")
            .and_then(Value::as_u64)
            .ok_or_else(|| Error::protocol("Invalid data format received from server"))?;

        let Some(Value::Array(content)) = body.remove("content") else {
            return Err(Error::protocol("Invalid data format received from server"));
        };

        if content.len() > page_size {
            return Err(Error::protocol(format!(
                "Server returned {} rows for a page of {}",
                content.len(),
                page_size
            )));
        }

        let rows = content
            .into_iter()
            .map(|row| match row {
                Value::Object(record) => Ok(record),
                _ => Err(Error::protocol("Invalid row received from server")),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rows,
            total_count: total_count as usize,
        })
    }
}
