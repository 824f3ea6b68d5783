//! Config - Application Configuration

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// REST endpoints and paging
    pub api: ApiConfig,
    /// CSV export options
    pub export: ExportConfig,
}

/// REST endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Paginated collection shown in the Items grid
    pub items_url: String,
    /// User directory (bare array, `/<id>` for details)
    pub users_url: String,
    /// Rows per page for server-side grids
    pub page_size: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Extra query parameters sent with every page request
    pub extra_params: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            items_url: "http://localhost:3000/api/items".to_string(),
            users_url: "https://jsonplaceholder.typicode.com/users".to_string(),
            page_size: 20,
            timeout_secs: 30,
            extra_params: BTreeMap::new(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Target directory; falls back to the download directory when unset
    pub directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "api": { "page_size": 50 } }"#).expect("valid config");
        assert_eq!(config.api.page_size, 50);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.items_url, "http://localhost:3000/api/items");
        assert_eq!(config.export.directory, None);
    }
}
