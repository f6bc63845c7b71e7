//! Best-effort tagging orchestration.

use std::sync::Arc;

use tracing::{debug, info};

use vistag_core::{defaults, Document, Result};
use vistag_predict::ConceptPredictor;

use crate::resolver::{DocumentImageResolver, ResolvedImage};
use crate::sink::TagSink;

/// Composes image resolution, concept prediction, and tag writes for one
/// document at a time.
///
/// Tagging is best-effort: a document without a usable preview image is
/// an expected skip condition and produces no error, while a prediction
/// service failure propagates to the caller. Tagging is not
/// transactional; a sink failure partway through the concept list leaves
/// earlier writes in place.
///
/// The only state held across calls is the immutable credential inside
/// the predictor backend, so one orchestrator may serve concurrent
/// requests for different documents without locking.
pub struct TaggingOrchestrator {
    predictor: Arc<dyn ConceptPredictor>,
    sink: Arc<dyn TagSink>,
    resolver: DocumentImageResolver,
    actor: String,
}

impl TaggingOrchestrator {
    /// Create an orchestrator over an already-constructed predictor.
    ///
    /// Predictor construction is where the credential is validated, so a
    /// missing or empty API key has already failed fast before an
    /// orchestrator can exist.
    pub fn new(predictor: Arc<dyn ConceptPredictor>, sink: Arc<dyn TagSink>) -> Self {
        Self {
            predictor,
            sink,
            resolver: DocumentImageResolver::new(),
            actor: defaults::TAG_ACTOR.to_string(),
        }
    }

    /// Override the rendition resolver.
    pub fn with_resolver(mut self, resolver: DocumentImageResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Override the acting identity recorded on tag writes.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Tag a document with concepts predicted from its preview image.
    ///
    /// An absent document or a document without a usable preview image is
    /// skipped silently. Prediction and tag-write failures propagate
    /// unmodified; by then zero or more tags may already be written.
    pub async fn tag(&self, document: Option<&Document>) -> Result<()> {
        let Some(document) = document else {
            return Ok(());
        };

        let image = match self.resolver.resolve(document).await? {
            ResolvedImage::Found(image) => image,
            ResolvedImage::NotFound | ResolvedImage::MalformedSource => {
                debug!(
                    document_id = %document.id,
                    "No usable preview image, skipping tagging"
                );
                return Ok(());
            }
        };

        let outputs = self
            .predictor
            .predict(&image.bytes, &image.mime_type)
            .await?;

        let mut tag_count = 0usize;
        for output in &outputs {
            for concept in &output.concepts {
                self.sink
                    .tag(&document.id, &concept.name, &self.actor)
                    .await?;
                tag_count += 1;
            }
        }

        info!(
            document_id = %document.id,
            model = %self.predictor.model_name(),
            tag_count,
            "Applied predicted tags"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use vistag_core::{Error, FileBlob, Rendition};
    use vistag_predict::MockPredictor;

    /// Sink that records every write and can fail on a given call index.
    #[derive(Default)]
    struct RecordingSink {
        writes: Mutex<Vec<(String, String, String)>>,
        fail_on: Option<usize>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self::default()
        }

        fn failing_on(index: usize) -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
                fail_on: Some(index),
            }
        }

        fn writes(&self) -> Vec<(String, String, String)> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TagSink for RecordingSink {
        async fn tag(&self, document_id: &str, label: &str, actor: &str) -> Result<()> {
            let mut writes = self.writes.lock().unwrap();
            if self.fail_on == Some(writes.len()) {
                return Err(Error::Tag("sink rejected write".to_string()));
            }
            writes.push((
                document_id.to_string(),
                label.to_string(),
                actor.to_string(),
            ));
            Ok(())
        }
    }

    fn picture_with_preview(path: std::path::PathBuf) -> Document {
        Document {
            id: "doc-1".to_string(),
            doc_type: "Picture".to_string(),
            renditions: vec![Rendition {
                role: "preview".to_string(),
                mime_type: "image/jpeg".to_string(),
                content: Some(FileBlob { path }),
            }],
        }
    }

    fn preview_file(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[tokio::test]
    async fn test_absent_document_is_a_no_op() {
        let predictor = Arc::new(MockPredictor::new().with_concepts(["dog"]));
        let sink = Arc::new(RecordingSink::new());
        let orchestrator = TaggingOrchestrator::new(predictor.clone(), sink.clone());

        orchestrator.tag(None).await.unwrap();

        assert_eq!(predictor.call_count(), 0);
        assert!(sink.writes().is_empty());
    }

    #[tokio::test]
    async fn test_document_without_preview_is_skipped_silently() {
        let predictor = Arc::new(MockPredictor::new().with_concepts(["dog"]));
        let sink = Arc::new(RecordingSink::new());
        let orchestrator = TaggingOrchestrator::new(predictor.clone(), sink.clone());

        let doc = Document {
            id: "doc-1".to_string(),
            doc_type: "Picture".to_string(),
            renditions: vec![],
        };

        orchestrator.tag(Some(&doc)).await.unwrap();

        assert_eq!(predictor.call_count(), 0);
        assert!(sink.writes().is_empty());
    }

    #[tokio::test]
    async fn test_predictor_called_once_with_preview_bytes() {
        let file = preview_file(b"preview bytes");
        let doc = picture_with_preview(file.path().to_path_buf());

        let predictor = Arc::new(MockPredictor::new());
        let sink = Arc::new(RecordingSink::new());
        let orchestrator = TaggingOrchestrator::new(predictor.clone(), sink);

        orchestrator.tag(Some(&doc)).await.unwrap();

        let calls = predictor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].image, b"preview bytes");
        assert_eq!(calls[0].mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_concepts_become_ordered_tag_writes_with_system_actor() {
        let file = preview_file(b"preview bytes");
        let doc = picture_with_preview(file.path().to_path_buf());

        let predictor = Arc::new(MockPredictor::new().with_concepts(["dog", "outdoor"]));
        let sink = Arc::new(RecordingSink::new());
        let orchestrator = TaggingOrchestrator::new(predictor, sink.clone());

        orchestrator.tag(Some(&doc)).await.unwrap();

        let writes = sink.writes();
        assert_eq!(
            writes,
            vec![
                (
                    "doc-1".to_string(),
                    "dog".to_string(),
                    "system".to_string()
                ),
                (
                    "doc-1".to_string(),
                    "outdoor".to_string(),
                    "system".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_concepts_produce_duplicate_writes() {
        let file = preview_file(b"preview bytes");
        let doc = picture_with_preview(file.path().to_path_buf());

        let predictor = Arc::new(MockPredictor::new().with_concepts(["dog", "dog"]));
        let sink = Arc::new(RecordingSink::new());
        let orchestrator = TaggingOrchestrator::new(predictor, sink.clone());

        orchestrator.tag(Some(&doc)).await.unwrap();

        assert_eq!(sink.writes().len(), 2);
    }

    #[tokio::test]
    async fn test_prediction_failure_propagates_with_zero_writes() {
        let file = preview_file(b"preview bytes");
        let doc = picture_with_preview(file.path().to_path_buf());

        let predictor = Arc::new(MockPredictor::new().with_failure("service unreachable"));
        let sink = Arc::new(RecordingSink::new());
        let orchestrator = TaggingOrchestrator::new(predictor, sink.clone());

        let err = orchestrator.tag(Some(&doc)).await.unwrap_err();
        assert!(matches!(err, Error::Prediction(_)));
        assert!(sink.writes().is_empty());
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_earlier_writes_and_propagates() {
        let file = preview_file(b"preview bytes");
        let doc = picture_with_preview(file.path().to_path_buf());

        let predictor = Arc::new(MockPredictor::new().with_concepts(["dog", "outdoor", "grass"]));
        let sink = Arc::new(RecordingSink::failing_on(1));
        let orchestrator = TaggingOrchestrator::new(predictor, sink.clone());

        let err = orchestrator.tag(Some(&doc)).await.unwrap_err();
        assert!(matches!(err, Error::Tag(_)));
        // The first write stays; nothing is rolled back.
        assert_eq!(sink.writes().len(), 1);
    }

    #[tokio::test]
    async fn test_repeat_invocation_writes_full_set_again() {
        let file = preview_file(b"preview bytes");
        let doc = picture_with_preview(file.path().to_path_buf());

        let predictor = Arc::new(MockPredictor::new().with_concepts(["dog", "outdoor"]));
        let sink = Arc::new(RecordingSink::new());
        let orchestrator = TaggingOrchestrator::new(predictor.clone(), sink.clone());

        orchestrator.tag(Some(&doc)).await.unwrap();
        orchestrator.tag(Some(&doc)).await.unwrap();

        assert_eq!(predictor.call_count(), 2);
        assert_eq!(sink.writes().len(), 4);
    }

    #[tokio::test]
    async fn test_actor_override() {
        let file = preview_file(b"preview bytes");
        let doc = picture_with_preview(file.path().to_path_buf());

        let predictor = Arc::new(MockPredictor::new().with_concepts(["dog"]));
        let sink = Arc::new(RecordingSink::new());
        let orchestrator =
            TaggingOrchestrator::new(predictor, sink.clone()).with_actor("Administrator");

        orchestrator.tag(Some(&doc)).await.unwrap();

        assert_eq!(sink.writes()[0].2, "Administrator");
    }
}
