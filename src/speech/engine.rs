//! Core `SpeechEngine` trait and the process-backed implementation.
//!
//! [`CommandSpeech`] drives an espeak-ng compatible program.  Text is fed on
//! stdin so phrases starting with `-` are never parsed as flags.

use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::config::SpeechConfig;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// Errors that can occur while speaking.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The TTS program could not be started.
    #[error("cannot start speech program {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the text to the program failed.
    #[error("speech program I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The program exited unsuccessfully.
    #[error("speech program exited with {0}")]
    Exit(std::process::ExitStatus),
}

// ---------------------------------------------------------------------------
// SpeechEngine trait
// ---------------------------------------------------------------------------

/// Async text-to-speech backend.  `speak` resolves once the utterance has
/// finished playing.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

// ---------------------------------------------------------------------------
// Voice shaping
// ---------------------------------------------------------------------------

/// espeak-ng default pitch (0–99 scale).
const BASE_PITCH: f32 = 50.0;
/// espeak-ng default speed in words per minute.
const BASE_WPM: f32 = 175.0;

/// Translate relative pitch/rate into espeak-ng `-p` / `-s` values.
fn voice_args(pitch: f32, rate: f32) -> (u32, u32) {
    let pitch = (BASE_PITCH * pitch).round().clamp(0.0, 99.0) as u32;
    let wpm = (BASE_WPM * rate).round().clamp(80.0, 450.0) as u32;
    (pitch, wpm)
}

// ---------------------------------------------------------------------------
// CommandSpeech
// ---------------------------------------------------------------------------

/// Speaks through an external TTS program, one process per utterance.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
}

impl CommandSpeech {
    pub fn from_config(config: &SpeechConfig) -> Self {
        let (pitch, wpm) = voice_args(config.pitch, config.rate);
        let args = vec![
            "-v".to_string(),
            config.voice.clone(),
            "-p".to_string(),
            pitch.to_string(),
            "-s".to_string(),
            wpm.to_string(),
            "--stdin".to_string(),
        ];
        Self {
            program: config.program.clone(),
            args,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl SpeechEngine for CommandSpeech {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.write_all(b"\n").await?;
            // Dropping stdin closes the pipe so the program starts speaking.
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::Exit(status))
        }
    }
}

/// Engine used when speech is disabled: captions only.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeech;

#[async_trait]
impl SpeechEngine for SilentSpeech {
    async fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------

/// Records every utterance and forwards it on a channel.
#[cfg(test)]
pub struct RecordingSpeech {
    pub spoken: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    notify: Option<tokio::sync::mpsc::UnboundedSender<String>>,
}

#[cfg(test)]
impl RecordingSpeech {
    pub fn new() -> Self {
        Self {
            spoken: Default::default(),
            notify: None,
        }
    }

    /// Also push each utterance into the returned receiver.
    pub fn with_channel() -> (Self, tokio::sync::mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let speech = Self {
            spoken: Default::default(),
            notify: Some(tx),
        };
        (speech, rx)
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechEngine for RecordingSpeech {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        self.spoken.lock().unwrap().push(text.to_string());
        if let Some(tx) = &self.notify {
            let _ = tx.send(text.to_string());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_voice_is_lower_and_slower() {
        let (pitch, wpm) = voice_args(0.8, 0.9);
        assert_eq!(pitch, 40);
        assert!((155..=160).contains(&wpm), "wpm = {wpm}");
        assert_eq!(voice_args(1.0, 1.0), (50, 175));
    }

    #[test]
    fn voice_args_are_clamped() {
        assert_eq!(voice_args(5.0, 10.0), (99, 450));
        assert_eq!(voice_args(-1.0, 0.0), (0, 80));
    }

    #[test]
    fn from_config_builds_stdin_command() {
        let config = SpeechConfig {
            rate: 1.0,
            ..SpeechConfig::default()
        };
        let engine = CommandSpeech::from_config(&config);
        assert_eq!(engine.program, "espeak-ng");
        assert_eq!(
            engine.args(),
            ["-v", "es", "-p", "40", "-s", "175", "--stdin"].map(String::from)
        );
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let config = SpeechConfig {
            program: "definitely-not-a-tts-program-1234".into(),
            ..SpeechConfig::default()
        };
        let engine = CommandSpeech::from_config(&config);
        assert!(matches!(
            engine.speak("hola").await,
            Err(SpeechError::Spawn { .. })
        ));
    }

    #[tokio::test]
    async fn silent_engine_always_succeeds() {
        assert!(SilentSpeech.speak("hola").await.is_ok());
    }

    #[test]
    fn engine_is_object_safe() {
        let engine: Box<dyn SpeechEngine> = Box::new(SilentSpeech);
        drop(engine);
    }
}
