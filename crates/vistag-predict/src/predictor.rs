//! Concept predictor trait for image-recognition backends.

use async_trait::async_trait;
use vistag_core::{PredictionOutput, Result};

/// Backend for predicting concept labels from image content.
///
/// One call is one synchronous round trip to the recognition service: no
/// internal retry, no batching. A hung call blocks for as long as the
/// backend's transport timeout allows; callers needing tighter latency
/// bounds must impose their own timeout around `predict`.
#[async_trait]
pub trait ConceptPredictor: Send + Sync {
    /// Predict concepts for a single image.
    ///
    /// Returns one [`PredictionOutput`] per submitted input, in service
    /// order. Any non-success outcome from the service surfaces as an
    /// error, never an empty result.
    async fn predict(&self, image: &[u8], mime_type: &str) -> Result<Vec<PredictionOutput>>;

    /// Check if the prediction backend is reachable.
    async fn health_check(&self) -> Result<bool>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
