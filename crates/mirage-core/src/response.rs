//! Mock API response types
//!
//! Wire-shape types for the data served by the mock API. These match the
//! frontend contract exactly, down to the serialized category tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag of a message record
///
/// The frontend keys styling off these tags, so the serialized form is part
/// of the contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageClass {
    /// Module is up and healthy
    #[serde(rename = "health--success")]
    HealthSuccess,
    /// Module is disabled or degraded
    #[serde(rename = "health--warning")]
    HealthWarning,
    /// Positive detection result
    #[serde(rename = "result--fire")]
    ResultFire,
    /// Negative detection result
    #[serde(rename = "result--no-fire")]
    ResultNoFire,
}

impl fmt::Display for MessageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageClass::HealthSuccess => write!(f, "health--success"),
            MessageClass::HealthWarning => write!(f, "health--warning"),
            MessageClass::ResultFire => write!(f, "result--fire"),
            MessageClass::ResultNoFire => write!(f, "result--no-fire"),
        }
    }
}

/// A status or result notification with localized display text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRecord {
    /// Category tag consumed by the frontend
    pub class: MessageClass,
    /// Human-readable display text, localized
    pub message: String,
}

impl MessageRecord {
    /// Create a new message record
    pub fn new(class: MessageClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }
}

/// Response envelope returned by the mock API
///
/// Mirrors the shape of an HTTP JSON response: either a `data` payload or
/// an error body with a status code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ApiResponse {
    /// Successful response carrying the requested records
    Data { data: Vec<MessageRecord> },
    /// Failure payload mirroring an HTTP error response
    Error { error: String, status: u16 },
}

impl ApiResponse {
    /// The canonical not-found failure payload
    pub fn not_found() -> Self {
        ApiResponse::Error {
            error: "Not Found".to_string(),
            status: 404,
        }
    }
}
