//! Dominant-label reduction.

use super::label::EmotionLabel;
use super::reading::ExpressionReading;

/// Reduce a reading to its single highest-scoring label.
///
/// Left fold over canonical order that keeps the current best unless the
/// next score is strictly greater, so on an exact tie the earlier label wins.
///
/// ```
/// use emotion_kiosk::emotion::{dominant_label, EmotionLabel, ExpressionReading};
///
/// let reading =
///     ExpressionReading::new([(EmotionLabel::Sad, 0.5), (EmotionLabel::Happy, 0.5)]).unwrap();
/// assert_eq!(dominant_label(&reading), EmotionLabel::Happy);
/// ```
pub fn dominant_label(reading: &ExpressionReading) -> EmotionLabel {
    reading.dominant()
}

/// Strongest label of `scores`, `None` when there are none.
pub(crate) fn strongest(
    scores: impl IntoIterator<Item = (EmotionLabel, f32)>,
) -> Option<EmotionLabel> {
    scores
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
        .map(|(label, _)| label)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(scores: &[(EmotionLabel, f32)]) -> ExpressionReading {
        ExpressionReading::new(scores.iter().copied()).unwrap()
    }

    #[test]
    fn picks_maximum() {
        let r = reading(&[
            (EmotionLabel::Happy, 0.1),
            (EmotionLabel::Angry, 0.7),
            (EmotionLabel::Neutral, 0.2),
        ]);
        assert_eq!(dominant_label(&r), EmotionLabel::Angry);
    }

    #[test]
    fn tie_keeps_earlier_label() {
        let r = reading(&[(EmotionLabel::Happy, 0.5), (EmotionLabel::Sad, 0.5)]);
        assert_eq!(dominant_label(&r), EmotionLabel::Happy);
    }

    #[test]
    fn tie_ignores_insertion_order() {
        let r = reading(&[(EmotionLabel::Fearful, 0.4), (EmotionLabel::Surprised, 0.4)]);
        assert_eq!(dominant_label(&r), EmotionLabel::Surprised);
    }

    #[test]
    fn single_label_wins() {
        let r = reading(&[(EmotionLabel::Disgusted, 0.0)]);
        assert_eq!(dominant_label(&r), EmotionLabel::Disgusted);
    }

    #[test]
    fn later_strictly_greater_replaces_best() {
        let r = reading(&[(EmotionLabel::Happy, 0.30), (EmotionLabel::Fearful, 0.31)]);
        assert_eq!(dominant_label(&r), EmotionLabel::Fearful);
    }

    #[test]
    fn strongest_of_nothing_is_none() {
        assert_eq!(strongest(std::iter::empty()), None);
        assert_eq!(
            strongest([(EmotionLabel::Sad, 0.2), (EmotionLabel::Neutral, 0.2)]),
            Some(EmotionLabel::Sad)
        );
    }

    #[test]
    fn is_deterministic() {
        let r = reading(&[
            (EmotionLabel::Sad, 0.2),
            (EmotionLabel::Neutral, 0.2),
            (EmotionLabel::Angry, 0.2),
        ]);
        let first = dominant_label(&r);
        for _ in 0..10 {
            assert_eq!(dominant_label(&r), first);
        }
        assert_eq!(first, EmotionLabel::Sad);
    }
}
