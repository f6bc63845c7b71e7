//! # vistag-predict
//!
//! Concept prediction backend abstraction for vistag.
//!
//! This crate provides:
//! - Pluggable concept predictor trait
//! - Clarifai HTTP backend implementation
//! - Deterministic mock predictor (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use vistag_predict::{ClarifaiBackend, ConceptPredictor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = ClarifaiBackend::from_env().unwrap();
//!     let image = std::fs::read("preview.jpg").unwrap();
//!     let outputs = backend.predict(&image, "image/jpeg").await.unwrap();
//!     for output in outputs {
//!         for concept in output.concepts {
//!             println!("{} ({:.2})", concept.name, concept.value);
//!         }
//!     }
//! }
//! ```

pub mod clarifai;
pub mod predictor;

// Mock predictor for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use vistag_core::*;

pub use clarifai::{ClarifaiBackend, ClarifaiConfig};
pub use predictor::ConceptPredictor;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCall, MockPredictor};
