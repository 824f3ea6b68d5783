//! ConfigStore - Local Configuration Storage
//!
//! Read-only JSON settings in the platform data directory:
//! - **Linux**: `~/.local/share/rest-grid/`
//! - **macOS**: `~/Library/Application Support/com.cyenx.rest-grid/`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\rest-grid\data\`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;

/// Application configuration file name
pub const CONFIG_FILE: &str = "config.json";

/// Get the application data directory, creating it if needed
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "cyenx", "rest-grid")
        .context("Could not determine project directories")?;
    let dir = dirs.data_dir();

    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create {}", dir.display()))?;
    }

    Ok(dir.to_path_buf())
}

/// Load a JSON config file; a missing file yields the default
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_config_from(&app_data_dir()?.join(filename))
}

pub fn load_config_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("rest-grid-missing-config.json");
        let _ = fs::remove_file(&path);
        let config: AppConfig = load_config_from(&path).expect("defaults");
        assert_eq!(config, AppConfig::default());
        // Loading never writes the defaults back
        assert!(!path.exists());
    }

    #[test]
    fn written_config_loads_back() {
        let path = std::env::temp_dir().join(format!("rest-grid-config-{}.json", std::process::id()));
        let mut config = AppConfig::default();
        config.api.page_size = 50;
        config
            .api
            .extra_params
            .insert("tenant".to_string(), "acme".to_string());

        let content = serde_json::to_string_pretty(&config).expect("serialize");
        fs::write(&path, content).expect("write");
        let loaded: AppConfig = load_config_from(&path).expect("load");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn broken_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("rest-grid-broken-{}.json", std::process::id()));
        fs::write(&path, "{ not json").expect("write");
        let result: Result<AppConfig> = load_config_from(&path);
        let _ = fs::remove_file(&path);

        let err = result.expect_err("invalid json");
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
