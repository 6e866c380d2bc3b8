//! Error types for the qrpay library.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during QR payment-code handling.
#[derive(Debug, Error)]
pub enum Error {
    /// The scanned string matches none of the supported QR payment-code
    /// layouts (neither `bank://` nor the 12-line EPC069-12 format).
    #[error("QR code format not recognized")]
    UnknownQrCodeFormat,

    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing the payment-data payload.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid format name specified.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
