//! Asynchronous data sources
//!
//! This module provides the `DataSource` trait for decoupling consumers
//! from where response data comes from, and `MockApi`, an in-process
//! stand-in for the backend HTTP API. Frontends can develop against the
//! mock and swap in a real client without touching call sites.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog;
use crate::config::{defaults, MockApiConfig};
use crate::error::{ApiError, Result};
use crate::response::{ApiResponse, MessageRecord};

/// Source of endpoint-keyed record data
///
/// This trait abstracts data fetching so application logic can work with
/// different backends (mock, real HTTP client, tests, etc.)
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the records published under an endpoint path
    async fn fetch_data(&self, endpoint: &str) -> Result<Vec<MessageRecord>>;
}

/// In-process stand-in for the backend HTTP API
///
/// Responses come from a route table keyed by endpoint path, and every
/// request resolves after the configured artificial latency so loading
/// states stay observable during development. The built-in message-type
/// catalog is registered on construction; additional routes can be added
/// with [`MockApi::with_route`].
#[derive(Debug, Clone)]
pub struct MockApi {
    routes: HashMap<String, Vec<MessageRecord>>,
    latency: Duration,
}

impl MockApi {
    /// Create a mock API from configuration, with the built-in routes registered
    pub fn new(config: MockApiConfig) -> Self {
        let mut routes = HashMap::new();
        routes.insert(
            defaults::MESSAGE_TYPES_ENDPOINT.to_string(),
            catalog::message_types(config.wording),
        );

        Self {
            routes,
            latency: Duration::from_millis(config.latency_ms),
        }
    }

    /// Builder method registering a dataset under an endpoint path
    pub fn with_route(mut self, endpoint: impl Into<String>, records: Vec<MessageRecord>) -> Self {
        self.routes.insert(endpoint.into(), records);
        self
    }

    /// Resolve an endpoint path to its raw response envelope
    ///
    /// The latency sleep is the only suspension point; concurrent requests
    /// are independent of each other.
    pub async fn request(&self, endpoint: &str) -> ApiResponse {
        tokio::time::sleep(self.latency).await;

        match self.routes.get(endpoint) {
            Some(records) => ApiResponse::Data {
                data: records.clone(),
            },
            None => ApiResponse::not_found(),
        }
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(MockApiConfig::default())
    }
}

#[async_trait]
impl DataSource for MockApi {
    async fn fetch_data(&self, endpoint: &str) -> Result<Vec<MessageRecord>> {
        match self.request(endpoint).await {
            ApiResponse::Data { data } => Ok(data),
            failure => {
                let payload = serde_json::to_string(&failure).unwrap_or_default();
                tracing::error!("Error fetching data from {endpoint}: {payload}");
                Err(ApiError::not_found(endpoint))
            }
        }
    }
}
