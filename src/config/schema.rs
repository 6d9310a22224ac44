use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/adagio/config.toml` or `~/.config/adagio/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ADAGIO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub controls: ControlsSettings,
    pub poller: PollerSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Output volume, `0.0..=1.0`.
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { volume: 0.5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to skip when pressing `j` / `l`.
    pub skip_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { skip_seconds: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollerSettings {
    /// How often the position snapshot is pushed to the display (ms).
    /// Cosmetic; coarser saves redraw work.
    pub publish_interval_ms: u64,
    /// How often the busy flag is checked for end-of-track (ms). Bounds the
    /// audible gap between tracks; finer costs CPU.
    pub completion_interval_ms: u64,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            publish_interval_ms: 1000,
            completion_interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top "adagio" header box.
    pub header_text: String,
    /// Whether the playlist sidebar starts visible.
    pub show_sidebar: bool,
    /// Sidebar width in terminal columns.
    pub sidebar_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ adagio: take it slow ~ ".to_string(),
            show_sidebar: false,
            sidebar_width: 40,
        }
    }
}
