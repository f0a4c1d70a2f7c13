use thiserror::Error;

/// Errors raised while talking to the content store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),
    /// The content API answered with a non-success status.
    #[error("Content API returned status {0}")]
    Status(u16),
    /// The content API reported a query error in its response body.
    #[error("Content API error: {0}")]
    Api(String),
    /// The response body did not have the expected shape.
    #[error("Failed to decode content: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration JSON failed to parse.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A setting has an unusable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
