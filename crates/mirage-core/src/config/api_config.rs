use serde::{Deserialize, Serialize};

use crate::catalog::MessageWording;

/// Mock API configuration
///
/// Serde-enabled so it can load from files, with builder methods for
/// in-code customization and sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockApiConfig {
    /// Artificial delay before a response resolves (milliseconds)
    pub latency_ms: u64,

    /// Which wording the detection result messages use
    pub wording: MessageWording,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            latency_ms: super::defaults::DEFAULT_LATENCY_MS,
            wording: MessageWording::default(),
        }
    }
}

impl MockApiConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for the response latency
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Builder method for the result-message wording
    pub fn with_wording(mut self, wording: MessageWording) -> Self {
        self.wording = wording;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;

    #[test]
    fn test_default_config() {
        let config = MockApiConfig::default();
        assert_eq!(config.latency_ms, defaults::DEFAULT_LATENCY_MS);
        assert_eq!(config.wording, MessageWording::Object);
    }

    #[test]
    fn test_builder_overrides() {
        let config = MockApiConfig::new()
            .with_latency_ms(50)
            .with_wording(MessageWording::Fire);

        assert_eq!(config.latency_ms, 50);
        assert_eq!(config.wording, MessageWording::Fire);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = MockApiConfig::new().with_wording(MessageWording::Fire);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"wording\":\"fire\""));

        let parsed: MockApiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.latency_ms, config.latency_ms);
        assert_eq!(parsed.wording, config.wording);
    }
}
