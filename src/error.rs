//! Error types for the tiered cache
//!
//! Provides unified error handling using thiserror. A cache miss is never an
//! error inside the library; `NotFound` only exists for the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the tiered cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Tier capacity (or tier layout) is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Eviction policy name is not one of the supported policies
    #[error("Unsupported eviction policy: {0}")]
    UnsupportedPolicy(String),

    /// Tier index does not address an existing tier
    #[error("Tier index {index} out of range ({tiers} tiers)")]
    IndexOutOfRange { index: i64, tiers: usize },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Key absent from every tier (HTTP rendering of a miss)
    #[error("Key not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidConfiguration(_)
            | CacheError::UnsupportedPolicy(_)
            | CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::IndexOutOfRange { .. } | CacheError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the tiered cache.
pub type Result<T> = std::result::Result<T, CacheError>;
