//! Error types for Harvest API operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during Harvest API operations.
///
/// Non-2xx HTTP statuses are not errors: they come back to the caller inside
/// the [`HarvestResponse`](crate::HarvestResponse) envelope. Only transport
/// failures, undecodable bodies, and pre-flight receipt validation produce
/// an `Err`.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Base URL could not be parsed, or a request path failed to join onto it.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP transport error (connection, DNS, TLS, request construction).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON, or a request value could not be
    /// serialized.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Expense receipt path does not point at an existing file.
    #[error("Receipt file not found: {}", .0.display())]
    ReceiptNotFound(PathBuf),

    /// Expense receipt has an extension Harvest does not accept.
    #[error("Unsupported receipt type '{0}': expected pdf, png, jpg, or gif")]
    UnsupportedReceiptType(String),

    /// Expense receipt could not be read from disk.
    #[error("Failed to read receipt: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Harvest operations.
pub type Result<T> = core::result::Result<T, HarvestError>;
