//! Per-session reaction memory.

use crate::emotion::EmotionLabel;

/// The reaction core's only persistent state.
///
/// Created fresh at session start and reset when the camera is switched off
/// or back on.  Only [`ReactionMachine`](super::ReactionMachine) mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionState {
    /// Label of the most recent dispatched reaction.  `None` until the first
    /// reaction of the session fires.
    pub last_emotion: Option<EmotionLabel>,

    /// Whether the opening neutral greeting has been used this session.
    /// Only moves `false → true`, except on [`reset`](Self::reset).
    pub neutral_greeting_given: bool,
}

impl ReactionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the session-start values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `true` while no reaction has fired in this session.
    pub fn is_fresh(&self) -> bool {
        self.last_emotion.is_none() && !self.neutral_greeting_given
    }
}
