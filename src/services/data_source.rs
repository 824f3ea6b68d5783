//! Data Source Adapter
//!
//! Bridges grid row requests to the paginated REST endpoint. A `DataSource`
//! captures the endpoint, page size, filter model and extra parameters that were
//! current when it was built; whenever one of them changes the table state
//! derives a new configuration and installs a fresh `DataSource`.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::filter::FilterModel;
use crate::domain::page::{GetRowsParams, PageRequest, PageResponse};
use crate::error::{Error, Result};
use crate::services::http::RestClient;

/// Parameters a data source closes over
#[derive(Debug, Clone, PartialEq)]
pub struct DataSourceConfig {
    pub api_url: String,
    pub page_size: usize,
    pub filter_model: FilterModel,
    pub extra_params: BTreeMap<String, String>,
}

impl DataSourceConfig {
    /// Derive the configuration for the current table parameters
    pub fn derive(
        api_url: &str,
        page_size: usize,
        filter_model: &FilterModel,
        extra_params: &BTreeMap<String, String>,
    ) -> Self {
        Self {
            api_url: api_url.trim().to_string(),
            page_size,
            filter_model: filter_model.clone(),
            extra_params: extra_params.clone(),
        }
    }

    /// Build the page request for a grid row window
    pub fn page_request(&self, params: &GetRowsParams) -> PageRequest {
        PageRequest {
            start_row: params.start_row,
            page_size: self.page_size,
            sort: params.sort_model.first().cloned(),
            filters: self.filter_model.clone(),
        }
    }

    /// Full query for a row window
    pub fn query_for(&self, params: &GetRowsParams) -> Result<BTreeMap<String, String>> {
        self.page_request(params).query_params(&self.extra_params)
    }
}

/// Row fetcher installed into a server-side table
#[derive(Clone, Debug)]
pub struct DataSource {
    config: Arc<DataSourceConfig>,
    client: RestClient,
}

impl DataSource {
    pub fn new(config: Arc<DataSourceConfig>, client: RestClient) -> Self {
        Self { config, client }
    }

    /// Fetch one page of rows.
    ///
    /// Fails with `MissingApiUrl` before touching the network when no endpoint
    /// is configured.
    pub async fn get_rows(&self, params: GetRowsParams) -> Result<PageResponse> {
        if self.config.api_url.is_empty() {
            tracing::warn!("Row request without an API URL");
            return Err(Error::MissingApiUrl);
        }

        let request = self.config.page_request(&params);
        let query = request.query_params(&self.config.extra_params)?;

        tracing::info!(
            url = %self.config.api_url,
            page = request.page(),
            size = request.page_size,
            filters = request.filters.len(),
            "Fetching rows"
        );

        let body = self.client.get_json(&self.config.api_url, &query).await?;
        let page = PageResponse::from_body(body, request.page_size)?;

        tracing::debug!(
            rows = page.rows.len(),
            total = page.total_count,
            "Rows received"
        );
        Ok(page)
    }
}
