//! One sampling pass: grab the current frame and classify it.

use std::sync::Arc;

use thiserror::Error;

use crate::emotion::Detection;

use super::camera::{CameraError, FrameSource};
use super::classifier::{ClassifierError, ExpressionClassifier};

/// Why a sampling tick produced nothing.  Never fatal: the next tick
/// retries on its own.
#[derive(Debug, Clone, Error)]
pub enum SampleError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Pairs a frame source with a classifier.  Cheap to clone into a spawned
/// sampling task.
#[derive(Clone)]
pub struct ExpressionSampler {
    source: Arc<dyn FrameSource>,
    classifier: Arc<dyn ExpressionClassifier>,
}

impl ExpressionSampler {
    pub fn new(source: Arc<dyn FrameSource>, classifier: Arc<dyn ExpressionClassifier>) -> Self {
        Self { source, classifier }
    }

    /// Frame source shared with the camera controller.
    pub fn source(&self) -> Arc<dyn FrameSource> {
        Arc::clone(&self.source)
    }

    /// Capture one frame and classify it.
    pub async fn sample(&self) -> Result<Detection, SampleError> {
        let frame = self.source.capture().await?;
        let detection = self.classifier.detect(&frame).await?;
        Ok(detection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::EmotionLabel;
    use crate::vision::camera::MockFrameSource;
    use crate::vision::classifier::MockClassifier;

    #[tokio::test]
    async fn sample_returns_classifier_detection() {
        let sampler = ExpressionSampler::new(
            Arc::new(MockFrameSource::default()),
            Arc::new(MockClassifier::always(EmotionLabel::Sad)),
        );
        let detection = sampler.sample().await.unwrap();
        assert_eq!(
            detection.reading().and_then(|r| r.score(EmotionLabel::Sad)),
            Some(0.9)
        );
    }

    #[tokio::test]
    async fn classifier_failure_surfaces_as_sample_error() {
        let sampler = ExpressionSampler::new(
            Arc::new(MockFrameSource::default()),
            Arc::new(MockClassifier::scripted(vec![Err(ClassifierError::Timeout)])),
        );
        assert!(matches!(
            sampler.sample().await,
            Err(SampleError::Classifier(ClassifierError::Timeout))
        ));
    }

    #[tokio::test]
    async fn closed_snapshot_source_surfaces_as_camera_error() {
        let sampler = ExpressionSampler::new(
            Arc::new(crate::vision::SnapshotFileSource::new("/nonexistent/frame.jpg")),
            Arc::new(MockClassifier::always(EmotionLabel::Happy)),
        );
        assert!(matches!(
            sampler.sample().await,
            Err(SampleError::Camera(CameraError::NotOpen))
        ));
    }
}
