//! Per-tick classifier output.

use std::collections::BTreeMap;

use super::label::EmotionLabel;
use super::selector::strongest;

// ---------------------------------------------------------------------------
// ExpressionReading
// ---------------------------------------------------------------------------

/// Confidence score per label for one detected face.
///
/// Always holds at least one label.  Scores are clamped to `[0, 1]`; they are
/// not required to sum to one.  Iteration is in canonical label order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionReading {
    scores: BTreeMap<EmotionLabel, f32>,
    /// Highest-scoring label, fixed at construction.
    dominant: EmotionLabel,
}

impl ExpressionReading {
    /// Build a reading from `(label, score)` pairs.
    ///
    /// Non-finite scores are dropped.  Returns `None` when nothing usable is
    /// left, since an empty mapping is not a valid reading.
    ///
    /// ```
    /// use emotion_kiosk::emotion::{EmotionLabel, ExpressionReading};
    ///
    /// let reading = ExpressionReading::new([(EmotionLabel::Happy, 0.9)]).unwrap();
    /// assert_eq!(reading.score(EmotionLabel::Happy), Some(0.9));
    /// assert!(ExpressionReading::new([(EmotionLabel::Sad, f32::NAN)]).is_none());
    /// ```
    pub fn new(scores: impl IntoIterator<Item = (EmotionLabel, f32)>) -> Option<Self> {
        let scores: BTreeMap<EmotionLabel, f32> = scores
            .into_iter()
            .filter(|(_, score)| score.is_finite())
            .map(|(label, score)| (label, score.clamp(0.0, 1.0)))
            .collect();

        let dominant = strongest(scores.iter().map(|(label, score)| (*label, *score)))?;
        Some(Self { scores, dominant })
    }

    /// Highest-scoring label; on an exact tie the earlier label wins.
    pub fn dominant(&self) -> EmotionLabel {
        self.dominant
    }

    /// Score for `label`, if the classifier reported it.
    pub fn score(&self, label: EmotionLabel) -> Option<f32> {
        self.scores.get(&label).copied()
    }

    /// All scores in canonical label order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f32)> + '_ {
        self.scores.iter().map(|(label, score)| (*label, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Outcome of one successful classifier call.
///
/// `NoFace` is a valid "no signal" result, distinct from a failed call.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    Face(ExpressionReading),
    NoFace,
}

impl Detection {
    pub fn reading(&self) -> Option<&ExpressionReading> {
        match self {
            Detection::Face(reading) => Some(reading),
            Detection::NoFace => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_clamped() {
        let reading =
            ExpressionReading::new([(EmotionLabel::Sad, 1.7), (EmotionLabel::Angry, -0.2)])
                .unwrap();
        assert_eq!(reading.score(EmotionLabel::Sad), Some(1.0));
        assert_eq!(reading.score(EmotionLabel::Angry), Some(0.0));
    }

    #[test]
    fn non_finite_scores_are_dropped() {
        let reading =
            ExpressionReading::new([(EmotionLabel::Sad, f32::NAN), (EmotionLabel::Happy, 0.4)])
                .unwrap();
        assert_eq!(reading.len(), 1);
        assert_eq!(reading.score(EmotionLabel::Sad), None);
    }

    #[test]
    fn only_non_finite_scores_is_not_a_reading() {
        assert!(ExpressionReading::new([(EmotionLabel::Sad, f32::INFINITY)]).is_none());
    }

    #[test]
    fn iteration_is_canonical_order() {
        let reading = ExpressionReading::new([
            (EmotionLabel::Fearful, 0.1),
            (EmotionLabel::Neutral, 0.2),
            (EmotionLabel::Happy, 0.3),
        ])
        .unwrap();
        let labels: Vec<_> = reading.iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            vec![EmotionLabel::Happy, EmotionLabel::Neutral, EmotionLabel::Fearful]
        );
    }

    #[test]
    fn dominant_is_computed_after_clamping() {
        // 1.7 and 1.2 both clamp to 1.0, so the earlier label wins the tie.
        let reading = ExpressionReading::new([
            (EmotionLabel::Angry, 1.7),
            (EmotionLabel::Happy, 1.2),
            (EmotionLabel::Sad, f32::INFINITY),
        ])
        .unwrap();
        assert_eq!(reading.dominant(), EmotionLabel::Happy);
    }

    #[test]
    fn no_face_has_no_reading() {
        assert!(Detection::NoFace.reading().is_none());
    }
}
