//! Per-user file locations resolved with `dirs`.
//!
//! Layout:
//!
//! Config dir (settings):
//!   Windows: %APPDATA%\emotion-kiosk\
//!   macOS:   ~/Library/Application Support/emotion-kiosk/
//!   Linux:   ~/.config/emotion-kiosk/
//!
//! Data dir (camera snapshot written by the capture helper):
//!   Windows: %LOCALAPPDATA%\emotion-kiosk\
//!   macOS:   ~/Library/Application Support/emotion-kiosk/
//!   Linux:   ~/.local/share/emotion-kiosk/

use std::path::PathBuf;

/// Resolved locations of the settings file and the camera snapshot.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml`.
    pub config_dir: PathBuf,
    pub settings_file: PathBuf,
    /// Directory for runtime data.
    pub data_dir: PathBuf,
    /// Default location of the live camera snapshot.
    pub snapshot_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "emotion-kiosk";

    /// Platform directories, or `./emotion-kiosk` when the platform has none.
    pub fn new() -> Self {
        let under = |base: Option<PathBuf>| base.unwrap_or_default().join(Self::APP_NAME);
        let config_dir = under(dirs::config_dir());
        let data_dir = under(dirs::data_local_dir());

        Self {
            settings_file: config_dir.join("settings.toml"),
            snapshot_file: data_dir.join("frame.jpg"),
            config_dir,
            data_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
