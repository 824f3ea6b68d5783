//! ServiceHub - Shared Service Handles
//!
//! Holds the HTTP client built from the API configuration and hands out data
//! sources and the user directory to controllers. Installed as a GPUI global.

use std::sync::Arc;
use std::time::Duration;

use gpui::Global;

use crate::domain::config::ApiConfig;
use crate::error::Result;
use crate::services::data_source::{DataSource, DataSourceConfig};
use crate::services::http::RestClient;
use crate::services::users::UserDirectory;

/// ServiceHub owns the client shared by every fetch
pub struct ServiceHub {
    client: RestClient,
    users_url: String,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let client = RestClient::new(Duration::from_secs(api.timeout_secs.max(1)))?;
        tracing::info!(timeout_secs = api.timeout_secs, "ServiceHub initialized");
        Ok(Self {
            client,
            users_url: api.users_url.clone(),
        })
    }

    /// Build a data source for a derived configuration
    pub fn data_source(&self, config: Arc<DataSourceConfig>) -> DataSource {
        DataSource::new(config, self.client.clone())
    }

    /// User directory on the configured endpoint
    pub fn users(&self) -> UserDirectory {
        UserDirectory::new(self.users_url.clone(), self.client.clone())
    }
}
