//! Error types for REST-Grid
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Fallback text when neither the server nor the transport gives a message
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// No endpoint configured; raised before any network attempt
    #[snafu(display("No API URL configured"))]
    MissingApiUrl,

    /// Request could not be sent or the connection failed
    #[snafu(display("{source}"))]
    Transport { source: reqwest::Error },

    /// Server answered with a non-success status
    #[snafu(display("Request failed with status code {status}"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// Response arrived but does not have the expected shape
    #[snafu(display("{message}"))]
    Protocol { message: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (export, config files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// CSV writer error
    #[snafu(display("CSV error: {source}"))]
    Csv { source: csv::Error },
}

impl Error {
    /// Human-readable message for the UI.
    ///
    /// Prefers a message provided by the server in the response body, then the
    /// error's own message, then a generic fallback.
    pub fn display_message(&self) -> String {
        if let Error::Server {
            message: Some(message),
            ..
        } = self
        {
            if !message.trim().is_empty() {
                return message.clone();
            }
        }

        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Shape-violation error
    pub fn protocol(message: impl Into<String>) -> Self {
        Error::Protocol {
            message: message.into(),
        }
    }

    /// Invalid-input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::Invalid {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Transport { source }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<csv::Error> for Error {
    fn from(source: csv::Error) -> Self {
        Error::Csv { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
