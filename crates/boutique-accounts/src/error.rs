//! Account errors.

use thiserror::Error;

/// Account error type.
#[derive(Error, Debug)]
pub enum AccountError {
    /// Email already registered.
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// Invalid email or password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No user is signed in.
    #[error("not signed in")]
    NotSignedIn,

    /// Password too weak.
    #[error("password too weak: {0}")]
    WeakPassword(String),

    /// Stored credential hash is not in the expected format.
    #[error("invalid credential hash")]
    InvalidHash,

    /// Backing store failure.
    #[error("store error: {0}")]
    Store(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AccountError {
    fn from(e: serde_json::Error) -> Self {
        AccountError::Serialization(e.to_string())
    }
}
