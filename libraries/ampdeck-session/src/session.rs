//! Player session
//!
//! Owns everything that lives between startup and shutdown: the sequencer,
//! the accent theme and the settings store they are restored from and
//! flushed back to.

use crate::config::SessionConfig;
use crate::error::Result;
use ampdeck_playback::{AudioPlayer, PlaybackSequencer};
use ampdeck_settings::{PersistedSettings, SettingsStore, Theme};
use std::path::PathBuf;
use tracing::{debug, info};

/// One run of the player, from `open` to `shutdown`
pub struct Session<P: AudioPlayer> {
    sequencer: PlaybackSequencer<P>,
    store: SettingsStore,
    theme: Theme,
}

impl<P: AudioPlayer> Session<P> {
    /// Restore the last session from `store`
    ///
    /// Missing playlist files are skipped; a missing or unreadable settings
    /// file starts an empty session with the configured default volume.
    pub fn open(player: P, store: SettingsStore, config: &SessionConfig) -> Self {
        let settings = store.load();
        let mut sequencer = PlaybackSequencer::new(player, config.sequencer_config());

        let restored = sequencer.add_tracks(settings.playlist);
        if let Some(volume) = settings.volume {
            sequencer.set_volume(volume);
        }
        // Restoring is not a user change
        sequencer.drain_events();

        info!(
            path = %store.path().display(),
            tracks = restored,
            volume = sequencer.volume(),
            "Session opened"
        );

        Self {
            sequencer,
            store,
            theme: settings.theme.unwrap_or_default(),
        }
    }

    /// Open with the store named by `config` (override or home directory)
    pub fn open_with_config(player: P, config: &SessionConfig) -> Result<Self> {
        let store = config.settings_store()?;
        Ok(Self::open(player, store, config))
    }

    /// Persist the session and end it
    pub fn shutdown(mut self) {
        self.sequencer.stop();
        let snapshot = self.snapshot();
        self.store.save(&snapshot);
        info!(tracks = snapshot.playlist.len(), "Session closed");
    }

    /// What would be written at shutdown
    pub fn snapshot(&self) -> PersistedSettings {
        PersistedSettings {
            playlist: self
                .sequencer
                .playlist()
                .iter()
                .map(|track| track.path().to_path_buf())
                .collect(),
            theme: Some(self.theme.clone()),
            volume: Some(self.sequencer.volume()),
        }
    }

    // ===== Playlist =====

    /// Add files chosen in a dialog (not filtered by extension)
    pub fn add_files<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let added = self.sequencer.add_tracks(paths);
        debug!(added, "Added files");
        added
    }

    /// Add dropped files, keeping only supported audio
    pub fn add_dropped_files<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let added = self.sequencer.add_dropped(paths);
        debug!(added, "Added dropped files");
        added
    }

    // ===== Theme =====

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        debug!(theme = %theme, "Theme changed");
        self.theme = theme;
    }

    // ===== Timer =====

    /// UI timer tick; returns true when the visualizer needs a repaint
    pub fn tick(&mut self) -> bool {
        self.sequencer.tick()
    }

    // ===== Accessors =====

    pub fn sequencer(&self) -> &PlaybackSequencer<P> {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut PlaybackSequencer<P> {
        &mut self.sequencer
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }
}
