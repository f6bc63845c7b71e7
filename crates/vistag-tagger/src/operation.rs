//! Pipeline-facing tagging operation.

use tracing::debug;

use vistag_core::{defaults, Document, Error, Result};

use crate::orchestrator::TaggingOrchestrator;

/// Entry point invoked by the hosting document pipeline.
///
/// Validates that the document is of the supported type before delegating
/// to the orchestrator, and returns the same document handle for pipeline
/// continuation. Tags are side effects recorded through the sink; they are
/// not reflected in the returned handle's in-memory state.
pub struct TagPictureOperation {
    orchestrator: TaggingOrchestrator,
}

impl TagPictureOperation {
    /// Stable operation identifier used by pipeline configuration.
    pub const ID: &'static str = "Document.TagPicture";

    /// Create the operation over a configured orchestrator.
    pub fn new(orchestrator: TaggingOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// Run the operation on one document.
    ///
    /// An unsupported document type is a hard rejection, unlike the
    /// orchestrator's silent skip for missing images.
    pub async fn run(&self, document: Document) -> Result<Document> {
        if document.doc_type != defaults::PICTURE_DOC_TYPE {
            return Err(Error::UnsupportedDocumentType {
                expected: defaults::PICTURE_DOC_TYPE.to_string(),
                actual: document.doc_type.clone(),
            });
        }

        debug!(document_id = %document.id, operation = Self::ID, "Running tagging operation");
        self.orchestrator.tag(Some(&document)).await?;
        Ok(document)
    }
}
