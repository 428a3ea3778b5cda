//! Global shortcuts for the kiosk, backed by `rdev`.
//!
//! `rdev::listen()` blocks forever, so it runs on a dedicated OS thread
//! ([`HotkeyListener`]).  Key events are matched against
//! [`HotkeyBindings`] and forwarded as [`HotkeyEvent`]s on a tokio channel;
//! `main` turns them into [`KioskCommand`]s.
//!
//! ```no_run
//! use tokio::sync::mpsc;
//! use emotion_kiosk::config::HotkeyConfig;
//! use emotion_kiosk::hotkey::{HotkeyBindings, HotkeyListener};
//!
//! let bindings = HotkeyBindings::from_config(&HotkeyConfig::default()).unwrap();
//! let (tx, _rx) = mpsc::channel(16);
//! let _listener = HotkeyListener::start(bindings, tx).unwrap();
//! ```

pub mod listener;

pub use listener::HotkeyListener;

use thiserror::Error;

use crate::config::HotkeyConfig;
use crate::kiosk::KioskCommand;

// ---------------------------------------------------------------------------
// HotkeyEvent
// ---------------------------------------------------------------------------

/// Shortcuts recognised by the listener thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyEvent {
    ToggleCamera,
    ToggleVisibility,
}

impl From<HotkeyEvent> for KioskCommand {
    fn from(event: HotkeyEvent) -> Self {
        match event {
            HotkeyEvent::ToggleCamera => KioskCommand::ToggleCamera,
            HotkeyEvent::ToggleVisibility => KioskCommand::ToggleVisibility,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HotkeyError {
    #[error("unknown key name {0:?}")]
    UnknownKey(String),

    #[error("both shortcuts are bound to {0:?}")]
    Conflict(String),
}

// ---------------------------------------------------------------------------
// HotkeyBindings
// ---------------------------------------------------------------------------

/// Resolved keys plus press tracking so a held key toggles only once.
#[derive(Debug, Clone)]
pub struct HotkeyBindings {
    toggle_camera: rdev::Key,
    toggle_visibility: rdev::Key,
    held: Vec<rdev::Key>,
}

impl HotkeyBindings {
    pub fn new(toggle_camera: rdev::Key, toggle_visibility: rdev::Key) -> Self {
        Self {
            toggle_camera,
            toggle_visibility,
            held: Vec::new(),
        }
    }

    pub fn from_config(config: &HotkeyConfig) -> Result<Self, HotkeyError> {
        let camera = parse_key(&config.toggle_camera_key)
            .ok_or_else(|| HotkeyError::UnknownKey(config.toggle_camera_key.clone()))?;
        let visibility = parse_key(&config.toggle_visibility_key)
            .ok_or_else(|| HotkeyError::UnknownKey(config.toggle_visibility_key.clone()))?;
        if camera == visibility {
            return Err(HotkeyError::Conflict(config.toggle_camera_key.clone()));
        }
        Ok(Self::new(camera, visibility))
    }

    fn event_for(&self, key: rdev::Key) -> Option<HotkeyEvent> {
        if key == self.toggle_camera {
            Some(HotkeyEvent::ToggleCamera)
        } else if key == self.toggle_visibility {
            Some(HotkeyEvent::ToggleVisibility)
        } else {
            None
        }
    }

    /// Feed one raw event.  Returns a shortcut on the first press of a bound
    /// key; auto-repeat presses and releases return `None`.
    pub fn handle(&mut self, event: &rdev::EventType) -> Option<HotkeyEvent> {
        match *event {
            rdev::EventType::KeyPress(key) => {
                let shortcut = self.event_for(key)?;
                if self.held.contains(&key) {
                    return None;
                }
                self.held.push(key);
                Some(shortcut)
            }
            rdev::EventType::KeyRelease(key) => {
                self.held.retain(|k| *k != key);
                None
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// parse_key
// ---------------------------------------------------------------------------

/// Parse a key name from the config into an [`rdev::Key`].
///
/// Accepts `F1`–`F12`, a handful of named keys, and single ASCII letters.
/// Matching ignores case and surrounding whitespace.
///
/// ```
/// use emotion_kiosk::hotkey::parse_key;
///
/// assert_eq!(parse_key("F8"), Some(rdev::Key::F8));
/// assert_eq!(parse_key("esc"), Some(rdev::Key::Escape));
/// assert_eq!(parse_key("k"), Some(rdev::Key::KeyK));
/// assert_eq!(parse_key("Ctrl+K"), None);
/// ```
pub fn parse_key(name: &str) -> Option<rdev::Key> {
    use rdev::Key::*;

    const FUNCTION_KEYS: [rdev::Key; 12] = [F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12];
    const LETTER_KEYS: [rdev::Key; 26] = [
        KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM, KeyN,
        KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
    ];
    const NAMED_KEYS: &[(&str, rdev::Key)] = &[
        ("escape", Escape),
        ("esc", Escape),
        ("space", Space),
        ("return", Return),
        ("enter", Return),
        ("tab", Tab),
        ("home", Home),
        ("end", End),
        ("pageup", PageUp),
        ("pagedown", PageDown),
        ("insert", Insert),
        ("pause", Pause),
        ("scrolllock", ScrollLock),
        ("printscreen", PrintScreen),
    ];

    let name = name.trim();
    let lower = name.to_ascii_lowercase();

    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<usize>().ok()) {
        return n.checked_sub(1).and_then(|i| FUNCTION_KEYS.get(i)).copied();
    }

    let mut chars = lower.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_lowercase() {
            return LETTER_KEYS.get((c as u8 - b'a') as usize).copied();
        }
    }

    NAMED_KEYS
        .iter()
        .find(|(key_name, _)| *key_name == lower)
        .map(|(_, key)| *key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
