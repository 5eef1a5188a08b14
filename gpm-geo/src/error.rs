/// Error types for the geocoding library
use thiserror::Error;

/// Main error type for geocoding operations
#[derive(Error, Debug)]
pub enum GeoError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service answered with a non-OK status
    #[error("Geocoding service returned status {0}")]
    BadStatus(reqwest::StatusCode),

    /// Failed to interpret the service response
    #[error("Failed to parse geocoding response: {0}")]
    ResponseParse(String),
}

/// Type alias for Results using GeoError
pub type Result<T> = std::result::Result<T, GeoError>;
