//! Mock API error types
//!
//! This module defines a centralized error type using `thiserror` for
//! clean error handling across the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mock API error type
///
/// Structured variants for the failure modes the API can hit, with serde
/// support so errors can be handed to a frontend as-is. Display output is
/// the wire-level error string.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ApiError {
    /// No dataset is registered under the requested endpoint path
    #[error("Not Found")]
    NotFound {
        /// The path that was requested
        endpoint: String,
        /// HTTP-style status code carried in the failure payload
        status: u16,
    },
}

impl ApiError {
    /// Build the not-found error for an endpoint path
    pub fn not_found(endpoint: impl Into<String>) -> Self {
        ApiError::NotFound {
            endpoint: endpoint.into(),
            status: 404,
        }
    }

    /// HTTP-style status code of this error
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound { status, .. } => *status,
        }
    }
}

/// Convert ApiError to String for callers that only want the message
impl From<ApiError> for String {
    fn from(error: ApiError) -> String {
        error.to_string()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ApiError>;
