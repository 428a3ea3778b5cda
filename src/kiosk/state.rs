//! Shared kiosk state read by the UI each frame.
//!
//! [`KioskState`] is the single source of truth for everything the window
//! draws: camera flags, the current caption, the detection overlay, the chat
//! transcript and any notice for the user.  The orchestrator and the speech
//! dispatcher mutate it; the egui update loop only reads it.
//!
//! [`SharedState`] is `Arc<Mutex<KioskState>>`.  Lock for short critical
//! sections only and never hold the guard across `.await`.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::chat::ChatTranscript;
use crate::emotion::{EmotionLabel, ExpressionReading};
use crate::speech::Caption;

/// Everything the kiosk window renders.
#[derive(Debug, Clone, Default)]
pub struct KioskState {
    /// `true` while a camera session is running and sampling.
    pub camera_active: bool,

    /// Whether the camera panel is drawn.  Purely cosmetic.
    pub camera_visible: bool,

    /// Most recent dispatched text.  Replaced by newer dispatches.
    pub caption: Option<Caption>,

    /// Per-label scores of the latest face reading in this session.
    pub overlay: Option<ExpressionReading>,

    /// Label behind the last spoken reaction, for the status line.
    pub last_reaction: Option<EmotionLabel>,

    pub transcript: ChatTranscript,

    /// User-facing notice (e.g. camera unavailable).  Dismissable.
    pub notice: Option<String>,

    /// Chat requests sent but not yet answered.
    pub pending_chats: usize,
}

impl KioskState {
    pub fn new(max_transcript_entries: usize) -> Self {
        Self {
            transcript: ChatTranscript::with_capacity(max_transcript_entries),
            ..Self::default()
        }
    }

    /// Caption still on screen at `now`, if any.
    pub fn visible_caption(&self, now: Instant) -> Option<&Caption> {
        self.caption.as_ref().filter(|c| c.is_visible_at(now))
    }

    /// Forget everything tied to the current camera session.
    pub fn clear_session(&mut self) {
        self.overlay = None;
        self.last_reaction = None;
    }

    pub fn is_waiting_for_chat(&self) -> bool {
        self.pending_chats > 0
    }
}

/// Thread-safe handle to [`KioskState`].  Cheap to clone.
pub type SharedState = Arc<Mutex<KioskState>>;

/// A [`SharedState`] wrapping a default [`KioskState`].
pub fn new_shared_state() -> SharedState {
    Arc::new(Mutex::new(KioskState::default()))
}

/// A [`SharedState`] whose transcript keeps at most `max_transcript_entries`.
pub fn shared_state_with_capacity(max_transcript_entries: usize) -> SharedState {
    Arc::new(Mutex::new(KioskState::new(max_transcript_entries)))
}
