use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadenza/config.toml` or `~/.config/cadenza/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENZA__`, `__` as nested separator,
///    `library.extensions` as a comma-separated list)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub state: StateSettings,
    pub input: InputSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory to scan when none is given on the command line.
    pub dir: Option<PathBuf>,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
    /// Whether to follow symlinks in the music directory.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: None,
            extensions: vec!["mp3".into()],
            include_hidden: true,
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Starting volume in percent, 0 to 100.
    pub volume: f32,
    /// Percent added or removed by `+` / `-`.
    pub volume_step: f32,
    /// Seconds to jump back or forward with `,` / `.`.
    pub seek_seconds: u64,
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Whether loop (repeat current track) starts enabled.
    pub loop_enabled: bool,
    /// Advance to the next track when one finishes and loop is off.
    pub auto_advance: bool,
    /// Fixed seed for the shuffle generator. Random when unset.
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 50.0,
            volume_step: 10.0,
            seek_seconds: 10,
            shuffle: false,
            loop_enabled: false,
            auto_advance: false,
            shuffle_seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StateSettings {
    /// File holding the last played track index, relative to the working directory.
    pub file: PathBuf,
}

impl Default for StateSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("last_track.txt"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// How long to wait for a key before checking for end of track (milliseconds).
    pub poll_interval_ms: u64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file. Logs never go to the terminal.
    pub file: PathBuf,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("cadenza.log"),
            filter: "info".to_string(),
        }
    }
}
