//! Settings file load/save

use crate::diagnostics::{Diagnostics, SettingsFailure, SettingsOperation, TracingDiagnostics};
use crate::error::{Result, SettingsError};
use crate::settings::{decode, PersistedSettings};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Settings file name, placed in the user's home directory
pub const SETTINGS_FILE_NAME: &str = ".ampdeck_settings.json";

/// Default settings location (`$HOME/.ampdeck_settings.json`)
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SETTINGS_FILE_NAME))
}

/// Reads and writes the settings file
///
/// `load` and `save` never fail outward: a missing or corrupt file loads as
/// defaults, and a failed write leaves the previous file alone (the new
/// contents go to a sibling temp file that is renamed over it). Failures are
/// passed to the configured [`Diagnostics`] sink. Use `try_load` and
/// `try_save` to get the error instead.
#[derive(Clone)]
pub struct SettingsStore {
    path: PathBuf,
    diagnostics: Arc<dyn Diagnostics>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Store at `$HOME/.ampdeck_settings.json`
    pub fn at_default_location() -> Result<Self> {
        default_settings_path()
            .map(Self::new)
            .ok_or(SettingsError::NoHomeDirectory)
    }

    /// Replace the failure sink
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ===== Loading =====

    /// Load settings, falling back to defaults on any failure
    ///
    /// Playlist entries whose file no longer exists are dropped, keeping the
    /// order of the survivors.
    pub fn load(&self) -> PersistedSettings {
        match self.read() {
            Ok(settings) => settings,
            Err(e) => {
                self.report(SettingsOperation::Load, &e);
                PersistedSettings::default()
            }
        }
    }

    /// Load settings, returning read or parse errors
    ///
    /// A missing file is not an error and yields defaults. Invalid field
    /// values are dropped and reported, as in `load`.
    pub fn try_load(&self) -> Result<PersistedSettings> {
        self.read()
    }

    fn read(&self) -> Result<PersistedSettings> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(PersistedSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        let decoded = decode(&json)?;
        for error in &decoded.rejected {
            self.report(SettingsOperation::Load, error);
        }

        let mut settings = decoded.settings;
        let missing = settings.retain_existing();
        if missing > 0 {
            info!(missing, "Dropped playlist entries whose files no longer exist");
        }

        debug!(
            path = %self.path.display(),
            tracks = settings.playlist.len(),
            "Loaded settings"
        );
        Ok(settings)
    }

    // ===== Saving =====

    /// Save settings, reporting but not returning failures
    pub fn save(&self, settings: &PersistedSettings) {
        if let Err(e) = self.try_save(settings) {
            self.report(SettingsOperation::Save, &e);
        }
    }

    /// Save settings as pretty-printed JSON, creating the parent directory
    ///
    /// Playlist paths that are not valid UTF-8 are skipped and reported;
    /// everything else is still written.
    pub fn try_save(&self, settings: &PersistedSettings) -> Result<()> {
        let (settings, skipped) = settings.partition_encodable();
        for path in skipped {
            self.report(SettingsOperation::Save, &SettingsError::NonUtf8Path(path));
        }

        let json = serde_json::to_string_pretty(&settings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, json).and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        debug!(
            path = %self.path.display(),
            tracks = settings.playlist.len(),
            "Saved settings"
        );
        Ok(())
    }

    /// Sibling file the next save is staged in
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(SETTINGS_FILE_NAME));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn report(&self, operation: SettingsOperation, error: &SettingsError) {
        self.diagnostics.report(&SettingsFailure {
            operation,
            path: &self.path,
            error,
        });
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
