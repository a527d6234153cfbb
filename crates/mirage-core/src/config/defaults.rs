/// Endpoint path serving the message-type catalog
pub const MESSAGE_TYPES_ENDPOINT: &str = "/message-types";

/// Default artificial latency before a response resolves (milliseconds)
pub const DEFAULT_LATENCY_MS: u64 = 500;
