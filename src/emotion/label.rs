//! The closed set of facial-expression labels.
//!
//! Declaration order of [`EmotionLabel`] is the canonical enumeration order.
//! The derived `Ord` follows it, so a `BTreeMap<EmotionLabel, _>` iterates in
//! canonical order and the dominant-label fold can rely on that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EmotionLabel
// ---------------------------------------------------------------------------

/// One facial expression category reported by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Neutral,
    Surprised,
    Disgusted,
    Fearful,
}

impl EmotionLabel {
    /// Every label in canonical order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Neutral,
        EmotionLabel::Surprised,
        EmotionLabel::Disgusted,
        EmotionLabel::Fearful,
    ];

    /// Lower-case key used by the classifier wire format and the phrase
    /// configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Disgusted => "disgusted",
            EmotionLabel::Fearful => "fearful",
        }
    }

    /// Parse a classifier key.  Matching is case-insensitive and ignores
    /// surrounding whitespace; unknown keys yield `None`.
    ///
    /// ```
    /// use emotion_kiosk::emotion::EmotionLabel;
    ///
    /// assert_eq!(EmotionLabel::from_key("Happy"), Some(EmotionLabel::Happy));
    /// assert_eq!(EmotionLabel::from_key(" neutral "), Some(EmotionLabel::Neutral));
    /// assert_eq!(EmotionLabel::from_key("bored"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the seven known labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion label: {0:?}")]
pub struct UnknownLabel(pub String);

impl FromStr for EmotionLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
