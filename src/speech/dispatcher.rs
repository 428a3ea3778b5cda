//! Fire-and-forget speech dispatch with on-screen captions.
//!
//! [`SpeechDispatcher::announce`] returns immediately.  The text is captioned
//! in [`SharedState`] right away and queued for a single worker task that
//! speaks utterances one after another, in dispatch order.  Speech failures
//! are logged; the caption is shown regardless.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::kiosk::SharedState;

use super::engine::SpeechEngine;

// ---------------------------------------------------------------------------
// Caption
// ---------------------------------------------------------------------------

/// Text shown on screen for a fixed duration after it is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Caption {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
            duration,
        }
    }

    /// `true` while the caption should still be on screen at `now`.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.duration
    }

    /// Time left on screen at `now`.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    /// Opacity in `[0, 1]`: fully opaque until the last [`CAPTION_FADE`] of
    /// its lifetime, then linear down to zero.
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let fade = CAPTION_FADE.min(self.duration);
        if fade.is_zero() {
            return if self.is_visible_at(now) { 1.0 } else { 0.0 };
        }
        (self.remaining_at(now).as_secs_f32() / fade.as_secs_f32()).min(1.0)
    }
}

/// Fade-out window at the end of a caption's lifetime.
pub const CAPTION_FADE: Duration = Duration::from_millis(500);

// ---------------------------------------------------------------------------
// SpeechDispatcher
// ---------------------------------------------------------------------------

/// Handle to the speech queue.  Cheap to clone.
#[derive(Clone)]
pub struct SpeechDispatcher {
    queue: mpsc::UnboundedSender<String>,
    state: SharedState,
    caption_duration: Duration,
}

impl SpeechDispatcher {
    /// Start the speech worker on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn(
        engine: Arc<dyn SpeechEngine>,
        state: SharedState,
        caption_duration: Duration,
    ) -> Self {
        let (queue, mut rx) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            while let Some(text) = rx.recv().await {
                if let Err(e) = engine.speak(&text).await {
                    log::warn!("speech: failed to speak {text:?}: {e}");
                }
            }
            log::debug!("speech: queue closed, worker exiting");
        });

        Self {
            queue,
            state,
            caption_duration,
        }
    }

    /// Caption `text` and queue it for speaking.  Never blocks.
    pub fn announce(&self, text: &str) {
        if let Ok(mut st) = self.state.lock() {
            st.caption = Some(Caption::new(text, self.caption_duration));
        }

        if self.queue.send(text.to_string()).is_err() {
            log::warn!("speech: worker stopped, dropping {text:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
