#![deny(missing_docs)]
//! folio site layer: configuration, the content-store client and the
//! request handlers that turn a slug into a finished page.

/// Site configuration and environment overrides.
pub mod config;
/// Content-store queries and client.
pub mod content;
/// Error types.
pub mod error;
/// Blog post and category handlers.
pub mod handlers;

pub use config::SiteConfig;
pub use content::{ContentClient, ContentConfig, ContentTransport, GroqQuery};
pub use error::{ConfigError, ContentError};
pub use handlers::{PageResponse, Site};
