//! ConfigState - Application Configuration State

use crate::domain::config::AppConfig;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
    /// Last load problem, shown in the header
    pub last_error: Option<String>,
}

impl ConfigState {
    /// Configuration read at startup
    pub fn loaded(config: AppConfig) -> Self {
        Self {
            config,
            last_error: None,
        }
    }

    /// Fallback when the file could not be read
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            config: AppConfig::default(),
            last_error: Some(message.into()),
        }
    }
}
