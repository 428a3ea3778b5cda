//! Speech output.
//!
//! * [`SpeechEngine`]: async trait implemented by TTS backends.
//! * [`CommandSpeech`]: espeak-ng compatible process backend.
//! * [`SilentSpeech`]: caption-only backend used when speech is disabled.
//! * [`SpeechDispatcher`]: fire-and-forget FIFO queue plus [`Caption`].

pub mod dispatcher;
pub mod engine;

pub use dispatcher::{Caption, SpeechDispatcher};
pub use engine::{CommandSpeech, SilentSpeech, SpeechEngine, SpeechError};

#[cfg(test)]
pub use engine::RecordingSpeech;
