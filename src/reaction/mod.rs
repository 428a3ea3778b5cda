//! Emotion-reaction core.
//!
//! This module provides:
//! * [`ReactionState`]: per-session memory (`last_emotion`, greeting flag).
//! * [`PhraseBook`] / [`PhrasePool`]: immutable phrase pools per label.
//! * [`PhrasePicker`]: uniform random choice, `None` on an empty pool.
//! * [`ReactionMachine`]: fires a [`Reaction`] only when the dominant label
//!   changes.
//! * [`SessionHooks`]: start/stop callbacks driven by the camera controller.
//!
//! # Quick start
//!
//! ```rust
//! use emotion_kiosk::emotion::EmotionLabel;
//! use emotion_kiosk::reaction::{default_phrase_table, PhraseBook, ReactionMachine};
//!
//! let mut machine = ReactionMachine::new(PhraseBook::from_config(&default_phrase_table()));
//!
//! assert!(machine.on_label(EmotionLabel::Happy).text().is_some());
//! // Same label on the next tick: silent.
//! assert!(machine.on_label(EmotionLabel::Happy).text().is_none());
//! ```

pub mod machine;
pub mod phrases;
pub mod picker;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use machine::{Reaction, ReactionMachine, SessionHooks};
pub use phrases::{default_phrase_table, PhraseBook, PhrasePool, DEFAULT_POOL_KEY};
pub use picker::PhrasePicker;
pub use state::ReactionState;
