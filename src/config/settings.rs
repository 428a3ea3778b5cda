//! Kiosk settings: one struct per `settings.toml` section plus load/save.
//!
//! Every section is `#[serde(default)]`, so a hand-edited `settings.toml`
//! only needs the keys it changes.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::reaction::default_phrase_table;

/// Environment variable that overrides `chat.api_key`.
pub const API_KEY_ENV: &str = "EMOTION_KIOSK_API_KEY";

// ---------------------------------------------------------------------------
// SamplerConfig
// ---------------------------------------------------------------------------

/// Expression sampling cadence and classifier endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Milliseconds between sampling ticks.
    pub period_ms: u64,
    /// Base URL of the face-expression classifier service.
    pub classifier_url: String,
    /// Maximum seconds to wait for one classification.
    pub timeout_secs: u64,
}

impl SamplerConfig {
    pub fn period(&self) -> Duration {
        // A zero period would make `tokio::time::interval` panic.
        Duration::from_millis(self.period_ms.max(1))
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            period_ms: 1_500,
            classifier_url: "http://127.0.0.1:5070".into(),
            timeout_secs: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// CameraConfig
// ---------------------------------------------------------------------------

/// Camera session behaviour and the fixed acknowledgments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Open the camera automatically at start-up.
    pub start_active: bool,
    /// Show the camera panel at start-up.
    pub start_visible: bool,
    /// Snapshot file kept current by the capture helper.  `None` uses
    /// [`AppPaths::snapshot_file`].
    pub snapshot_path: Option<PathBuf>,
    /// Spoken when the camera is switched on.
    pub camera_on_message: String,
    /// Spoken when the camera is switched off.
    pub camera_off_message: String,
    /// Shown when the camera cannot be opened.
    pub unavailable_message: String,
}

impl CameraConfig {
    /// Snapshot path with the platform default applied.
    pub fn resolved_snapshot_path(&self) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(|| AppPaths::new().snapshot_file)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_active: true,
            start_visible: true,
            snapshot_path: None,
            camera_on_message: "Cámara activada. Continuando con el análisis.".into(),
            camera_off_message: "He apagado la cámara, pero sigo aquí para ayudarte.".into(),
            unavailable_message:
                "No se pudo acceder a la cámara. Revisa permisos y la conexión del dispositivo."
                    .into(),
        }
    }
}

// ---------------------------------------------------------------------------
// SpeechConfig
// ---------------------------------------------------------------------------

/// Text-to-speech program and caption settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// When `false`, texts are only captioned.
    pub enabled: bool,
    /// TTS executable (espeak-ng compatible command line).
    pub program: String,
    /// Voice identifier passed to the program.
    pub voice: String,
    /// Pitch relative to the voice default (1.0 = unchanged).
    pub pitch: f32,
    /// Speaking rate relative to the voice default (1.0 = unchanged).
    pub rate: f32,
    /// Seconds a caption stays on screen.
    pub caption_secs: u64,
}

impl SpeechConfig {
    pub fn caption_duration(&self) -> Duration {
        Duration::from_secs(self.caption_secs)
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "espeak-ng".into(),
            voice: "es".into(),
            pitch: 0.8,
            rate: 0.9,
            caption_secs: 4,
        }
    }
}

// ---------------------------------------------------------------------------
// ChatConfig
// ---------------------------------------------------------------------------

/// Settings for the free-text chat channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the chat channel is active at all.
    pub enabled: bool,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// API key; `None` for local providers.
    pub api_key: Option<String>,
    /// Model identifier sent to the API.
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f32,
    /// Maximum seconds to wait for a reply.
    pub timeout_secs: u64,
    /// Optional system message sent before the user's message.
    pub system_prompt: Option<String>,
    /// Shown and spoken when the service answers without content.
    pub empty_reply_message: String,
    /// Shown (not spoken) when the service cannot be reached.
    pub connection_error_message: String,
    /// Oldest transcript entries are dropped past this size.
    pub max_transcript_entries: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.openai.com".into(),
            api_key: None,
            model: "gpt-4o-mini".into(),
            temperature: 0.7,
            timeout_secs: 30,
            system_prompt: None,
            empty_reply_message: "Error obteniendo respuesta.".into(),
            connection_error_message: "Error al conectar con el servidor.".into(),
            max_transcript_entries: 200,
        }
    }
}

// ---------------------------------------------------------------------------
// HotkeyConfig
// ---------------------------------------------------------------------------

/// Global shortcut bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Key that switches the camera on/off (e.g. `"F8"`).
    pub toggle_camera_key: String,
    /// Key that shows/hides the camera panel (e.g. `"F7"`).
    pub toggle_visibility_key: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            toggle_camera_key: "F8".into(),
            toggle_visibility_key: "F7".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// Kiosk window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Last saved window position `(x, y)` in screen pixels.
    pub window_position: Option<(f32, f32)>,
    /// Keep the kiosk window above all other windows.
    pub always_on_top: bool,
    /// Name shown in front of assistant messages.
    pub assistant_name: String,
    /// Name shown in front of the user's messages.
    pub user_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_position: None,
            always_on_top: false,
            assistant_name: "Baymax".into(),
            user_name: "Tú".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// The whole `settings.toml`.
///
/// ```rust,no_run
/// use emotion_kiosk::config::AppConfig;
///
/// let mut config = AppConfig::load().unwrap();
/// config.sampler.period_ms = 1_000;
/// config.save().unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Expression sampling settings.
    pub sampler: SamplerConfig,
    /// Camera session settings.
    pub camera: CameraConfig,
    /// Speech output settings.
    pub speech: SpeechConfig,
    /// Chat channel settings.
    pub chat: ChatConfig,
    /// Global shortcut bindings.
    pub hotkey: HotkeyConfig,
    /// Kiosk window settings.
    pub ui: UiConfig,
    /// Phrase pools keyed by label name plus `default`.  Entries in the file
    /// replace the built-in pool of the same name; other pools stay.
    pub phrases: BTreeMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sampler: SamplerConfig::default(),
            camera: CameraConfig::default(),
            speech: SpeechConfig::default(),
            chat: ChatConfig::default(),
            hotkey: HotkeyConfig::default(),
            ui: UiConfig::default(),
            phrases: default_phrase_table(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`,
    /// then apply environment overrides.
    ///
    /// Returns the defaults when the file does not exist yet (first run).
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&AppPaths::new().settings_file)?;
        config.apply_env(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.phrases = merge_phrase_table(std::mem::take(&mut config.phrases));
        Ok(config)
    }

    /// Write to the per-user `settings.toml`.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Parent directories are created on demand.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply the API key override; blank values are ignored.
    pub fn apply_env(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.chat.api_key = Some(key.trim().to_string());
        }
    }

    /// Returns `true` when no `settings.toml` file exists yet.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

/// Overlay user pools on the built-in table.  Keys are normalised to lower
/// case so `Happy` replaces the stock `happy` pool instead of shadowing it.
fn merge_phrase_table(user: BTreeMap<String, Vec<String>>) -> BTreeMap<String, Vec<String>> {
    let mut merged = default_phrase_table();
    for (key, phrases) in user {
        merged.insert(key.trim().to_ascii_lowercase(), phrases);
    }
    merged
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
