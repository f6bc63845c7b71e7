//! # vistag-core
//!
//! Core types, errors, and events for the vistag picture-tagging bridge.
//!
//! This crate provides the domain models and foundations that the
//! prediction and tagging crates depend on.

pub mod defaults;
pub mod error;
pub mod events;
pub mod models;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use events::{EventBus, RepositoryEvent};
pub use models::*;
