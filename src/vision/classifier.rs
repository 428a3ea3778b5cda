//! Face-expression classifier boundary.
//!
//! [`ExpressionClassifier`] is the interface used by the sampler.
//! [`HttpClassifier`] talks to a face-expression inference service:
//!
//! ```text
//! POST {base_url}/detect   { "image_b64": "...", "single_face": true }
//!   ← { "expressions": { "happy": 0.91, "neutral": 0.05, ... } }
//!   ← { "expressions": null }                       (no face)
//! GET  {base_url}/health   ← 200 once the models are loaded
//! ```

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SamplerConfig;
use crate::emotion::{Detection, EmotionLabel, ExpressionReading};

use super::camera::Frame;

// ---------------------------------------------------------------------------
// ClassifierError
// ---------------------------------------------------------------------------

/// Errors that can occur during classification.
#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    /// HTTP transport or connection error.
    #[error("classifier request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("classifier request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("classifier returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("failed to parse classifier response: {0}")]
    Parse(String),

    /// The service reported scores, but none for a known label.
    #[error("classifier reported no known expression labels")]
    NoKnownLabels,
}

impl From<reqwest::Error> for ClassifierError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClassifierError::Timeout
        } else {
            ClassifierError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// ExpressionClassifier trait
// ---------------------------------------------------------------------------

/// Async classifier: one frame in, one [`Detection`] out.
#[async_trait]
pub trait ExpressionClassifier: Send + Sync {
    async fn detect(&self, frame: &Frame) -> Result<Detection, ClassifierError>;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct DetectRequest {
    image_b64: String,
    single_face: bool,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(default)]
    expressions: Option<HashMap<String, f32>>,
}

/// Convert the service's label map into a [`Detection`].
///
/// `None` means no face.  Unknown label keys are skipped.
fn detection_from_scores(
    expressions: Option<HashMap<String, f32>>,
) -> Result<Detection, ClassifierError> {
    let Some(expressions) = expressions else {
        return Ok(Detection::NoFace);
    };

    let scores = expressions.into_iter().filter_map(|(key, score)| {
        let label = EmotionLabel::from_key(&key);
        if label.is_none() {
            log::debug!("classifier: skipping unknown label {key:?}");
        }
        label.map(|label| (label, score))
    });

    ExpressionReading::new(scores)
        .map(Detection::Face)
        .ok_or(ClassifierError::NoKnownLabels)
}

// ---------------------------------------------------------------------------
// HttpClassifier
// ---------------------------------------------------------------------------

/// HTTP client for the face-expression service.
pub struct HttpClassifier {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClassifier {
    /// Build a classifier client from the sampler settings.
    pub fn from_config(config: &SamplerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.classifier_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check that the service is up and its models are loaded.
    pub async fn health_check(&self) -> Result<(), ClassifierError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClassifierError::Status(response.status().as_u16()))
        }
    }
}

#[async_trait]
impl ExpressionClassifier for HttpClassifier {
    async fn detect(&self, frame: &Frame) -> Result<Detection, ClassifierError> {
        let url = format!("{}/detect", self.base_url);
        let request = DetectRequest {
            image_b64: BASE64.encode(&frame.data),
            single_face: true,
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(ClassifierError::Status(response.status().as_u16()));
        }

        let body: DetectResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::Parse(e.to_string()))?;

        detection_from_scores(body.expressions)
    }
}

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------

/// Classifier that replays a scripted sequence of results, then repeats
/// the last one.
#[cfg(test)]
pub struct MockClassifier {
    script: std::sync::Mutex<std::collections::VecDeque<Result<Detection, ClassifierError>>>,
    last: std::sync::Mutex<Option<Result<Detection, ClassifierError>>>,
}

#[cfg(test)]
impl MockClassifier {
    pub fn scripted(results: Vec<Result<Detection, ClassifierError>>) -> Self {
        Self {
            script: std::sync::Mutex::new(results.into()),
            last: std::sync::Mutex::new(None),
        }
    }

    pub fn always(label: EmotionLabel) -> Self {
        Self::scripted(vec![Ok(Detection::Face(
            ExpressionReading::new([(label, 0.9)]).unwrap(),
        ))])
    }
}

#[cfg(test)]
#[async_trait]
impl ExpressionClassifier for MockClassifier {
    async fn detect(&self, _frame: &Frame) -> Result<Detection, ClassifierError> {
        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(result) = next {
            *last = Some(result);
        }
        last.clone().unwrap_or(Ok(Detection::NoFace))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
