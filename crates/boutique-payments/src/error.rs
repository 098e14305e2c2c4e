//! Payment errors.

use thiserror::Error;

/// Errors that can occur at the payment boundary.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Charge amount must be positive.
    #[error("invalid amount: {0} cents")]
    InvalidAmount(i64),

    /// The processor request could not be sent or completed.
    #[error("payment request failed: {0}")]
    Request(String),

    /// The processor answered with a non-success status.
    #[error("payment processor returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The processor response was not the expected JSON shape.
    #[error("failed to parse processor response: {0}")]
    Parse(String),

    /// Intent not found.
    #[error("payment intent not found: {0}")]
    IntentNotFound(String),
}

impl From<reqwest::Error> for PaymentError {
    fn from(e: reqwest::Error) -> Self {
        PaymentError::Request(e.to_string())
    }
}
