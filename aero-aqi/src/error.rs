/// Error types for the AeroSense data layer
use thiserror::Error;

/// Main error type for data API operations
#[derive(Error, Debug)]
pub enum AqiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The data source answered with a non-success status
    #[error("Unexpected response status: {0}")]
    BadStatus(u16),

    /// The payload did not match the city record schema
    #[error("Failed to parse city payload: {0}")]
    PayloadParse(#[from] serde_json::Error),

    /// The data source answered with an empty city list
    #[error("Data source returned an empty dataset")]
    EmptyDataset,
}

/// Type alias for Results using AqiError
pub type Result<T> = std::result::Result<T, AqiError>;
