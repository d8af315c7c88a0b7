//! Error types for the shipdeck dashboard

use thiserror::Error;

/// Main error type for the dashboard client
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Malformed payload: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DashboardError {
    /// True for bodies that decoded but did not match the endpoint contract.
    pub fn is_parse(&self) -> bool {
        matches!(self, DashboardError::ParseError(_))
    }
}
