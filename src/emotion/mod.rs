//! Emotion data model: labels, readings and the dominant-label selector.
//!
//! This module provides:
//! * [`EmotionLabel`]: the closed set of expression categories.
//! * [`ExpressionReading`]: per-label confidence scores for one face.
//! * [`Detection`]: a reading or `NoFace`.
//! * [`dominant_label`]: deterministic reduction to one label.

pub mod label;
pub mod reading;
pub mod selector;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use label::{EmotionLabel, UnknownLabel};
pub use reading::{Detection, ExpressionReading};
pub use selector::dominant_label;
