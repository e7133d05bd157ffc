//! Domain and store error types

use thiserror::Error;

/// Domain-level error types surfaced to API callers.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A request field is malformed or out of range.
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The path identifier is not a 24-character lowercase hex id.
    #[error("Invalid user id: {0}")]
    InvalidId(String),

    /// Another user already owns this email address.
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A write succeeded but the follow-up read missed, e.g. a concurrent
    /// delete between update and re-fetch.
    #[error("Store inconsistency: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level failures reported by the repository layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store not connected: {0}")]
    NotConnected(String),

    #[error("Store timeout: {0}")]
    Timeout(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store error: {0}")]
    Unknown(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for repository operations
pub type StoreResult<T> = Result<T, StoreError>;
