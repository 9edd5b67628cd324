use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings for the `cadenza` command line, loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadenza/config.toml` or `~/.config/cadenza/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENZA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub output: OutputSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder used when no directory is given on the command line.
    /// Falls back to the current directory when unset.
    pub music_dir: Option<PathBuf>,
    /// Whether to descend into symlinked directories while scanning.
    pub follow_links: bool,
    /// Default window for `recent`, in days.
    pub recent_days: f64,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_dir: None,
            follow_links: false,
            recent_days: 7.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Which track fields to print per line, and in what order.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub track_fields: Vec<TrackField>,
    /// Separator used to join `track_fields`.
    pub separator: String,
    /// Prefix for tracks listed under a group heading.
    pub group_indent: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            track_fields: vec![TrackField::Artist, TrackField::Title],
            separator: " - ".to_string(),
            group_indent: "  ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Title,
    Artist,
    #[serde(alias = "file_name", alias = "file-name")]
    Filename,
    Path,
    #[serde(alias = "format", alias = "ext")]
    Extension,
    Size,
    #[serde(alias = "mtime")]
    Modified,
}
