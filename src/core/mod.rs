// Core business logic module

pub mod config;
pub mod control;
pub mod daemon;
pub mod status;

// Re-export commonly used items
pub use config::{Config, Highlight, SourceKind};
pub use status::{OverrideStore, StatusLine};
