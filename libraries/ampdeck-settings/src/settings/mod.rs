//! Persisted player settings
//!
//! The settings file is a single JSON object:
//!
//! ```json
//! { "playlist": ["/music/a.mp3", "/music/b.flac"], "theme": "#4caf50", "vol": 70 }
//! ```
//!
//! Older files hold only the bare playlist array, which still loads.
//! Unknown keys are ignored.

use crate::error::{Result, SettingsError};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Highest persisted volume level
pub const MAX_VOLUME: u8 = 100;

/// Everything that survives a restart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    /// Playlist file paths, in playlist order
    #[serde(default)]
    pub playlist: Vec<PathBuf>,

    /// Accent colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    /// Volume level (0-100)
    #[serde(default, rename = "vol", skip_serializing_if = "Option::is_none")]
    pub volume: Option<u8>,
}

impl PersistedSettings {
    pub fn with_playlist(playlist: Vec<PathBuf>) -> Self {
        Self {
            playlist,
            ..Default::default()
        }
    }

    /// Drop playlist entries whose file no longer exists, keeping order
    ///
    /// Returns how many entries were dropped.
    pub fn retain_existing(&mut self) -> usize {
        let before = self.playlist.len();
        self.playlist.retain(|path| path.exists());
        before - self.playlist.len()
    }

    /// Split off playlist entries that are not valid UTF-8
    ///
    /// JSON strings cannot hold them, so they are left out of the saved
    /// file rather than failing the whole save.
    pub(crate) fn partition_encodable(&self) -> (Self, Vec<PathBuf>) {
        let (playlist, skipped): (Vec<PathBuf>, Vec<PathBuf>) = self
            .playlist
            .iter()
            .cloned()
            .partition(|path| path.to_str().is_some());

        let encodable = Self {
            playlist,
            theme: self.theme.clone(),
            volume: self.volume,
        };
        (encodable, skipped)
    }
}

// ===== Wire format =====

/// On-disk shape, accepting both the current object and the legacy array
#[derive(Deserialize)]
#[serde(untagged)]
enum SettingsFile {
    Legacy(Vec<PathBuf>),
    Current(RawSettings),
}

/// Object form with loosely-typed optional fields, so one bad value does
/// not cost the whole playlist
#[derive(Deserialize)]
struct RawSettings {
    #[serde(default)]
    playlist: Vec<PathBuf>,
    #[serde(default)]
    theme: Option<serde_json::Value>,
    #[serde(default)]
    vol: Option<serde_json::Value>,
}

/// Result of decoding a settings file
#[derive(Debug)]
pub(crate) struct Decoded {
    pub settings: PersistedSettings,
    /// Value errors that were recovered from by dropping the field
    pub rejected: Vec<SettingsError>,
}

/// Decode settings JSON
///
/// # Errors
/// Returns `Serialization` when the document is neither a playlist array
/// nor a settings object.
pub(crate) fn decode(json: &str) -> Result<Decoded> {
    let file: SettingsFile = serde_json::from_str(json)?;

    let raw = match file {
        SettingsFile::Legacy(playlist) => {
            return Ok(Decoded {
                settings: PersistedSettings::with_playlist(playlist),
                rejected: Vec::new(),
            })
        }
        SettingsFile::Current(raw) => raw,
    };

    let mut rejected = Vec::new();

    let theme = match raw.theme {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(value)) => match Theme::parse(&value) {
            Ok(theme) => Some(theme),
            Err(e) => {
                rejected.push(e);
                None
            }
        },
        Some(other) => {
            rejected.push(SettingsError::InvalidTheme(other.to_string()));
            None
        }
    };

    let volume = raw.vol.as_ref().and_then(volume_from_json);

    Ok(Decoded {
        settings: PersistedSettings {
            playlist: raw.playlist,
            theme,
            volume,
        },
        rejected,
    })
}

/// Integer or float volume, clamped into 0-100
fn volume_from_json(value: &serde_json::Value) -> Option<u8> {
    let level = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))?;
    Some(level.clamp(0, i64::from(MAX_VOLUME)) as u8)
}
