//! Image resolution from a document's rendition sequence.

use tracing::debug;

use vistag_core::{defaults, Document, Error, ImageData, Result};

/// Outcome of resolving a document's submission image.
///
/// The two non-`Found` arms are the closed set of expected skip
/// conditions. Anything outside this set (an I/O failure reading an
/// existing file, for example) is a real error and propagates as `Err`
/// rather than being absorbed.
#[derive(Debug)]
pub enum ResolvedImage {
    /// A usable preview image was read.
    Found(ImageData),
    /// The document has no materialized rendition with the configured
    /// role, or the backing file does not exist.
    NotFound,
    /// A rendition with the configured role exists but is not image
    /// content.
    MalformedSource,
}

/// Resolves the image rendition submitted for prediction.
///
/// Renditions are selected by role name, not position, so the resolver
/// depends on the rendition generator's naming rather than its ordering.
#[derive(Debug, Clone)]
pub struct DocumentImageResolver {
    role: String,
}

impl DocumentImageResolver {
    /// Create a resolver for the default preview role.
    pub fn new() -> Self {
        Self {
            role: defaults::PREVIEW_RENDITION_ROLE.to_string(),
        }
    }

    /// Override the rendition role to resolve.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// The rendition role this resolver selects.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Resolve the submission image for a document.
    pub async fn resolve(&self, document: &Document) -> Result<ResolvedImage> {
        let Some(rendition) = document.rendition(&self.role) else {
            debug!(
                document_id = %document.id,
                role = %self.role,
                "No rendition with configured role"
            );
            return Ok(ResolvedImage::NotFound);
        };

        if !rendition.mime_type.starts_with("image/") {
            debug!(
                document_id = %document.id,
                mime_type = %rendition.mime_type,
                "Rendition is not image content"
            );
            return Ok(ResolvedImage::MalformedSource);
        }

        let Some(blob) = &rendition.content else {
            debug!(document_id = %document.id, role = %self.role, "Rendition has no content");
            return Ok(ResolvedImage::NotFound);
        };

        match tokio::fs::read(&blob.path).await {
            Ok(bytes) => Ok(ResolvedImage::Found(ImageData {
                bytes,
                mime_type: rendition.mime_type.clone(),
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    document_id = %document.id,
                    path = %blob.path.display(),
                    "Rendition blob has no backing file"
                );
                Ok(ResolvedImage::NotFound)
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}

impl Default for DocumentImageResolver {
    fn default() -> Self {
        Self::new()
    }
}
