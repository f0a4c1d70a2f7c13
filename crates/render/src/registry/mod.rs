//! Callout registry: maps callout sub-kinds to icon glyphs and title labels.

pub mod defaults;
mod types;

pub use defaults::default_callout_registry;
pub use types::{CalloutRegistry, CalloutStyle};
