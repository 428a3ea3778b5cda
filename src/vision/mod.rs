//! Camera and classifier boundary.
//!
//! ```text
//! FrameSource::capture()  ──▶  ExpressionClassifier::detect()  ──▶  Detection
//!        (camera.rs)                 (classifier.rs)
//!                   └──── ExpressionSampler::sample() ────┘
//! ```
//!
//! Both collaborators are object-safe and `Send + Sync` so they can be held
//! behind `Arc<dyn …>` and moved into spawned sampling tasks.

pub mod camera;
pub mod classifier;
pub mod sampler;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use camera::{CameraError, Frame, FrameSource, SnapshotFileSource};
pub use classifier::{ClassifierError, ExpressionClassifier, HttpClassifier};
pub use sampler::{ExpressionSampler, SampleError};

// test-only re-exports for the kiosk orchestrator tests.
#[cfg(test)]
pub use camera::MockFrameSource;
#[cfg(test)]
pub use classifier::MockClassifier;
