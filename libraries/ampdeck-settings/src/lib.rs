//! ampdeck - Settings Persistence
//!
//! Saves and restores the playlist, accent theme and volume across
//! restarts as one small JSON file in the user's home directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use ampdeck_settings::{PersistedSettings, SettingsStore};
//! use std::path::PathBuf;
//!
//! # fn example() -> ampdeck_settings::Result<()> {
//! let store = SettingsStore::at_default_location()?;
//!
//! // Never fails: missing or corrupt files load as defaults
//! let mut settings = store.load();
//!
//! settings.playlist.push(PathBuf::from("/music/track.mp3"));
//! settings.volume = Some(80);
//! store.save(&settings);
//! # Ok(())
//! # }
//! ```

mod diagnostics;
mod error;
pub mod settings;
mod store;
mod theme;

pub use diagnostics::{Diagnostics, SettingsFailure, SettingsOperation, TracingDiagnostics};
pub use error::{Result, SettingsError};
pub use settings::{PersistedSettings, MAX_VOLUME};
pub use store::{default_settings_path, SettingsStore, SETTINGS_FILE_NAME};
pub use theme::{Theme, DEFAULT_ACCENT};
