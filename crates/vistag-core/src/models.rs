//! Core data models for vistag.
//!
//! These types are shared across all vistag crates and represent the
//! entities exchanged with the hosting document repository and the
//! prediction service. All of them are owned by the host around a single
//! tagging call; the core holds only transient references.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A document handle from the hosting repository.
///
/// The core never mutates a document or its rendition structure; it only
/// reads rendition bytes and issues tag writes through the tag sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Opaque repository identifier.
    pub id: String,
    /// Repository document type (e.g. "Picture").
    pub doc_type: String,
    /// Alternate-quality representations of the primary image content.
    pub renditions: Vec<Rendition>,
}

impl Document {
    /// Look up a rendition by its role name.
    pub fn rendition(&self, role: &str) -> Option<&Rendition> {
        self.renditions.iter().find(|r| r.role == role)
    }
}

/// An alternate-size representation of a document's primary image content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rendition {
    /// Role name assigned by the rendition generator (e.g. "preview").
    pub role: String,
    /// MIME type of the rendition content.
    pub mime_type: String,
    /// File-backed binary content, if the rendition has been materialized.
    pub content: Option<FileBlob>,
}

/// Handle to file-backed binary content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileBlob {
    /// Path to the backing file in the repository's binary store.
    pub path: PathBuf,
}

// =============================================================================
// PREDICTION TYPES
// =============================================================================

/// A machine-predicted label describing visual content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// Service-assigned concept identifier, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Concept label; the only field consumed by tagging.
    pub name: String,
    /// Prediction confidence in `[0, 1]`.
    pub value: f32,
}

/// Concepts predicted for one submitted input.
///
/// The prediction service returns one entry per input; this system submits
/// exactly one image per call, so exactly one entry is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutput {
    /// Service-assigned input identifier, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
    /// Predicted concepts, in service-returned order.
    pub concepts: Vec<Concept>,
}

/// A resolved submission image.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}
