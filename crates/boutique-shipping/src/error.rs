//! Shipping estimation errors.
//!
//! Every failure here is a value the quote orchestrator absorbs into the
//! default-fee branch; none of them escape a [`crate::ShippingEstimator`].

use thiserror::Error;

/// Errors that can occur while resolving a destination address.
#[derive(Error, Debug)]
pub enum ShippingError {
    /// The lookup request could not be sent or completed.
    #[error("geocode request failed: {0}")]
    Request(String),

    /// The lookup request ran past its deadline.
    #[error("geocode request timed out")]
    Timeout,

    /// The lookup service answered with a non-success status.
    #[error("geocode service returned HTTP {status}")]
    Http { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("failed to parse geocode response: {0}")]
    Parse(String),

    /// A candidate carried a non-numeric latitude or longitude.
    #[error("malformed coordinate in geocode response: {0:?}")]
    MalformedCoordinate(String),
}

impl From<reqwest::Error> for ShippingError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ShippingError::Timeout
        } else {
            ShippingError::Request(e.to_string())
        }
    }
}
