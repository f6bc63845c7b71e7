//! # vistag-tagger
//!
//! Tagging orchestration for the vistag picture-tagging bridge.
//!
//! This crate composes the prediction backend with the hosting
//! repository's documents and tag store:
//! - Image resolution from a document's preview rendition
//! - Best-effort tagging orchestration with the skip/fail policy
//! - The pipeline-facing operation gateway
//! - The event-triggered listener for automatic tagging
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vistag_predict::ClarifaiBackend;
//! use vistag_tagger::{NoOpSink, TagPictureOperation, TaggingOrchestrator};
//!
//! let predictor = Arc::new(ClarifaiBackend::from_env()?);
//! let sink = Arc::new(NoOpSink);
//! let operation = TagPictureOperation::new(TaggingOrchestrator::new(predictor, sink));
//!
//! let document = operation.run(document).await?;
//! ```

pub mod listener;
pub mod operation;
pub mod orchestrator;
pub mod resolver;
pub mod sink;

// Re-export core types
pub use vistag_core::*;

pub use listener::PreviewReadyListener;
pub use operation::TagPictureOperation;
pub use orchestrator::TaggingOrchestrator;
pub use resolver::{DocumentImageResolver, ResolvedImage};
pub use sink::{NoOpSink, TagSink};
