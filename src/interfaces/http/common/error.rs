//! HTTP error mapping
//!
//! `ApiError` converts the domain error taxonomy into a status code plus
//! a JSON body carrying a human-readable detail message. Nothing is
//! swallowed: every failure surfaces to the caller through this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{DomainError, StoreError};

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Wrapper that gives `DomainError` an HTTP rendering.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::Validation { .. }
            | DomainError::InvalidId(_)
            | DomainError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Inconsistent(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Store(e) => match e {
                StoreError::NotConnected(_) | StoreError::Unavailable(_) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                StoreError::Timeout(_) | StoreError::Unknown(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };

        if status.is_server_error() {
            error!(%status, "{}", self.0);
        }

        (status, Json(ErrorBody::new(self.0.to_string()))).into_response()
    }
}
