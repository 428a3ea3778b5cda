//! The label-memoized reaction trigger.
//!
//! A reaction fires only when the dominant label differs from the label of
//! the last dispatched reaction.  Ticks without a face are ignored.
//!
//! ```text
//! Detection::NoFace                  ──▶ Ignored
//! label == last_emotion              ──▶ Unchanged
//! label != last_emotion
//!   ├─ neutral, greeting not given   ──▶ full neutral pool, mark greeting given
//!   ├─ neutral, greeting given       ──▶ neutral pool minus its first entry
//!   ├─ other label                   ──▶ label pool (or `default`)
//!   ├─ phrase picked                 ──▶ Speak, commit last_emotion
//!   └─ nothing to pick               ──▶ Exhausted, state untouched
//! ```

use crate::emotion::{dominant_label, Detection, EmotionLabel};

use super::phrases::PhraseBook;
use super::picker::PhrasePicker;
use super::state::ReactionState;

// ---------------------------------------------------------------------------
// Reaction
// ---------------------------------------------------------------------------

/// Decision produced for one sampled detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// No face in the frame; memory left as-is.
    Ignored,
    /// Dominant label equals the last reacted-to label.
    Unchanged(EmotionLabel),
    /// Speak `text` in reaction to `label`.
    Speak { label: EmotionLabel, text: String },
    /// The resolved pool had no candidates; nothing is spoken.
    Exhausted(EmotionLabel),
}

impl Reaction {
    /// Text to hand to the speech dispatcher, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Reaction::Speak { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionHooks
// ---------------------------------------------------------------------------

/// Lifecycle callbacks invoked by the camera controller.
pub trait SessionHooks {
    /// A new session is about to start sampling.
    fn on_session_start(&mut self);
    /// The session has ended; sampling is halted.
    fn on_session_stop(&mut self);
}

// ---------------------------------------------------------------------------
// ReactionMachine
// ---------------------------------------------------------------------------

/// Owns [`ReactionState`] and turns dominant labels into spoken reactions.
#[derive(Debug)]
pub struct ReactionMachine {
    state: ReactionState,
    phrases: PhraseBook,
    picker: PhrasePicker,
}

impl ReactionMachine {
    pub fn new(phrases: PhraseBook) -> Self {
        Self::with_picker(phrases, PhrasePicker::new())
    }

    /// Use an explicit picker (seeded pickers make tests deterministic).
    pub fn with_picker(phrases: PhraseBook, picker: PhrasePicker) -> Self {
        Self {
            state: ReactionState::new(),
            phrases,
            picker,
        }
    }

    pub fn state(&self) -> &ReactionState {
        &self.state
    }

    /// Consume one sampled detection.
    pub fn on_detection(&mut self, detection: &Detection) -> Reaction {
        match detection {
            Detection::NoFace => {
                log::debug!("reaction: no face, ignoring tick");
                Reaction::Ignored
            }
            Detection::Face(reading) => self.on_label(dominant_label(reading)),
        }
    }

    /// Consume one dominant label.
    pub fn on_label(&mut self, label: EmotionLabel) -> Reaction {
        if self.state.last_emotion == Some(label) {
            log::debug!("reaction: {label} unchanged, staying silent");
            return Reaction::Unchanged(label);
        }

        let pool = self.phrases.pool_for(label);
        let consumes_greeting =
            label == EmotionLabel::Neutral && !self.state.neutral_greeting_given;

        let candidates = if label == EmotionLabel::Neutral && !consumes_greeting {
            pool.without_greeting()
        } else {
            pool.all()
        };

        let Some(text) = self.picker.pick(candidates).map(str::to_owned) else {
            log::debug!("reaction: no phrase available for {label}, skipping dispatch");
            return Reaction::Exhausted(label);
        };

        if consumes_greeting {
            self.state.neutral_greeting_given = true;
        }
        self.state.last_emotion = Some(label);

        log::info!("reaction: {label} → {text:?}");
        Reaction::Speak { label, text }
    }

    /// Return to the session-start state.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl SessionHooks for ReactionMachine {
    fn on_session_start(&mut self) {
        self.reset();
    }

    fn on_session_stop(&mut self) {
        self.reset();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
