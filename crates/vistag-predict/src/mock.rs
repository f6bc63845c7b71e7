//! Mock concept predictor for deterministic testing.
//!
//! Provides a predictor that returns a fixed concept list, records every
//! call, and can be configured to fail, so orchestration logic can be
//! tested without a live recognition service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vistag_core::{Concept, Error, PredictionOutput, Result};

use crate::predictor::ConceptPredictor;

/// One recorded `predict` invocation.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub image: Vec<u8>,
    pub mime_type: String,
}

/// Mock concept predictor.
///
/// Returns the configured concept names with descending confidence values.
/// All calls are logged and retrievable via [`MockPredictor::calls`].
#[derive(Clone)]
pub struct MockPredictor {
    concepts: Vec<String>,
    failure: Option<String>,
    healthy: bool,
    model: String,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockPredictor {
    /// Create a mock that predicts no concepts.
    pub fn new() -> Self {
        Self {
            concepts: Vec::new(),
            failure: None,
            healthy: true,
            model: "mock-model".to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the concept names returned by every prediction.
    pub fn with_concepts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concepts = names.into_iter().map(Into::into).collect();
        self
    }

    /// Make every prediction fail with the given message.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Set the health check result.
    pub fn with_health(mut self, healthy: bool) -> Self {
        self.healthy = healthy;
        self
    }

    /// All recorded calls, in invocation order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockPredictor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConceptPredictor for MockPredictor {
    async fn predict(&self, image: &[u8], mime_type: &str) -> Result<Vec<PredictionOutput>> {
        self.calls.lock().unwrap().push(MockCall {
            image: image.to_vec(),
            mime_type: mime_type.to_string(),
        });

        if let Some(message) = &self.failure {
            return Err(Error::Prediction(message.clone()));
        }

        let concepts = self
            .concepts
            .iter()
            .enumerate()
            .map(|(i, name)| Concept {
                id: None,
                name: name.clone(),
                value: 1.0 - (i as f32) * 0.01,
            })
            .collect();

        Ok(vec![PredictionOutput {
            input_id: None,
            concepts,
        }])
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.healthy)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
