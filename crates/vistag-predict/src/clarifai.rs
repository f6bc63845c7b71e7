//! Clarifai concept prediction backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use vistag_core::{Concept, Error, PredictionOutput, Result};

use crate::predictor::ConceptPredictor;

/// Default Clarifai API endpoint.
pub const DEFAULT_CLARIFAI_URL: &str = "https://api.clarifai.com";

/// Default prediction model.
pub const DEFAULT_MODEL: &str = "general-image-recognition";

/// Default timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Service-level success code in Clarifai responses.
const STATUS_SUCCESS: i64 = 10_000;

/// Configuration for the Clarifai backend.
#[derive(Debug, Clone)]
pub struct ClarifaiConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication. Required; validated at construction.
    pub api_key: String,
    /// Model to use for concept prediction.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ClarifaiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CLARIFAI_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClarifaiConfig {
    /// Create configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | CLARIFAI_API_KEY | (none) |
    /// | CLARIFAI_BASE_URL | https://api.clarifai.com |
    /// | CLARIFAI_MODEL | general-image-recognition |
    /// | CLARIFAI_TIMEOUT | 30 |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CLARIFAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CLARIFAI_URL.to_string()),
            api_key: std::env::var("CLARIFAI_API_KEY").unwrap_or_default(),
            model: std::env::var("CLARIFAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_seconds: std::env::var("CLARIFAI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Clarifai concept prediction backend.
///
/// Holds the credential as an immutable value captured once at
/// construction; there is no setter.
#[derive(Debug)]
pub struct ClarifaiBackend {
    client: Client,
    config: ClarifaiConfig,
}

impl ClarifaiBackend {
    /// Create a new Clarifai backend with the given configuration.
    ///
    /// Fails with [`Error::MissingCredential`] if the API key is absent or
    /// empty. The check runs at construction, before any network access.
    pub fn new(config: ClarifaiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingCredential(
                "no Clarifai API key configured; set CLARIFAI_API_KEY".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing Clarifai backend: url={}, model={}",
            config.base_url, config.model
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClarifaiConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ClarifaiConfig {
        &self.config
    }

    fn outputs_url(&self) -> String {
        format!(
            "{}/v2/models/{}/outputs",
            self.config.base_url, self.config.model
        )
    }
}

#[derive(Serialize)]
struct PredictRequest {
    inputs: Vec<PredictInput>,
}

#[derive(Serialize)]
struct PredictInput {
    data: InputData,
}

#[derive(Serialize)]
struct InputData {
    image: ImagePayload,
}

#[derive(Serialize)]
struct ImagePayload {
    base64: String, // base64 encoded image bytes
}

#[derive(Deserialize)]
struct PredictResponse {
    status: ServiceStatus,
    #[serde(default)]
    outputs: Vec<OutputPayload>,
}

#[derive(Deserialize)]
struct ServiceStatus {
    code: i64,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct OutputPayload {
    #[serde(default)]
    input: Option<InputRef>,
    data: OutputData,
}

#[derive(Deserialize)]
struct InputRef {
    id: String,
}

#[derive(Deserialize)]
struct OutputData {
    #[serde(default)]
    concepts: Vec<ConceptPayload>,
}

#[derive(Deserialize)]
struct ConceptPayload {
    #[serde(default)]
    id: Option<String>,
    name: String,
    value: f32,
}

impl From<OutputPayload> for PredictionOutput {
    fn from(payload: OutputPayload) -> Self {
        PredictionOutput {
            input_id: payload.input.map(|input| input.id),
            concepts: payload
                .data
                .concepts
                .into_iter()
                .map(|c| Concept {
                    id: c.id,
                    name: c.name,
                    value: c.value,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ConceptPredictor for ClarifaiBackend {
    async fn predict(&self, image: &[u8], _mime_type: &str) -> Result<Vec<PredictionOutput>> {
        use base64::Engine;

        if image.is_empty() {
            return Err(Error::InvalidInput(
                "Cannot predict concepts for empty image data".to_string(),
            ));
        }

        let image_b64 = base64::engine::general_purpose::STANDARD.encode(image);
        let request = PredictRequest {
            inputs: vec![PredictInput {
                data: InputData {
                    image: ImagePayload { base64: image_b64 },
                },
            }],
        };

        debug!(
            model = %self.config.model,
            size_bytes = image.len(),
            "Submitting image for concept prediction"
        );

        let response = self
            .client
            .post(self.outputs_url())
            .header("Authorization", format!("Key {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Prediction(format!(
                "Clarifai API returned {}: {}",
                status, body
            )));
        }

        let result: PredictResponse = response.json().await.map_err(|e| {
            Error::Prediction(format!("Failed to parse prediction response: {}", e))
        })?;

        if result.status.code != STATUS_SUCCESS {
            return Err(Error::Prediction(format!(
                "Prediction rejected by service: {} (code {})",
                result.status.description, result.status.code
            )));
        }

        debug!(
            output_count = result.outputs.len(),
            "Received prediction outputs"
        );

        Ok(result.outputs.into_iter().map(Into::into).collect())
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/v2/models", self.config.base_url);
        match self
            .client
            .get(&url)
            .header("Authorization", format!("Key {}", self.config.api_key))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
