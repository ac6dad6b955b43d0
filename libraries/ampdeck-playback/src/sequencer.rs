//! Playback sequencer - core orchestration
//!
//! Owns the playlist and the current index, decides which track plays next
//! under shuffle/repeat, and drives the audio player and the visualizer.

use crate::{
    display::{self, StatusLine},
    error::{PlaybackError, Result},
    events::SequencerEvent,
    player::{AudioPlayer, MediaStatus, PlayerEvent},
    playlist::Playlist,
    shuffle,
    types::{BoundaryPolicy, Direction, PlaybackState, SequencerConfig, Track},
    visualizer::BarVisualizer,
    volume::Volume,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Playlist sequencer bound to an audio player
///
/// All methods run on the UI thread; nothing here blocks or spawns.
pub struct PlaybackSequencer<P: AudioPlayer> {
    player: P,
    playlist: Playlist,

    // Invariant: always < playlist.len() when Some
    current: Option<usize>,

    shuffle: bool,
    repeat: bool,
    state: PlaybackState,

    // Last values reported by the player
    position: Duration,
    duration: Duration,

    volume: Volume,
    status: StatusLine,
    visualizer: BarVisualizer,
    config: SequencerConfig,
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<SequencerEvent>,
}

impl<P: AudioPlayer> PlaybackSequencer<P> {
    /// Create new sequencer with an entropy-seeded shuffle RNG
    pub fn new(player: P, config: SequencerConfig) -> Self {
        Self::with_rng(player, config, StdRng::from_entropy())
    }

    /// Create new sequencer with a caller-provided RNG (deterministic tests)
    pub fn with_rng(mut player: P, config: SequencerConfig, rng: StdRng) -> Self {
        let volume = Volume::new(config.volume);
        player.set_volume(volume.player_volume());

        Self {
            player,
            playlist: Playlist::new(),
            current: None,
            shuffle: false,
            repeat: false,
            state: PlaybackState::Idle,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            volume,
            status: StatusLine::Ready,
            visualizer: BarVisualizer::new(config.visualizer.clone()),
            config,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Select the track at `index`, load it and start playing
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index` is not in the playlist (nothing changes),
    /// or the player's error if it cannot load the file.
    pub fn select_and_play(&mut self, index: usize) -> Result<()> {
        let len = self.playlist.len();
        let Some(track) = self.playlist.get(index).cloned() else {
            debug!(index, len, "Selection ignored: index out of range");
            return Err(PlaybackError::IndexOutOfBounds { index, len });
        };

        self.current = Some(index);
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.set_state(PlaybackState::Loading);

        if let Err(e) = self.player.load_source(track.path()) {
            warn!(path = %track.path().display(), error = %e, "Failed to load track");
            self.visualizer.stop();
            self.set_state(PlaybackState::Idle);
            return Err(e);
        }

        let title = track.display_name();
        info!(index, %title, "Playing track");
        self.pending_events.push(SequencerEvent::TrackChanged {
            index,
            title: title.clone(),
        });

        self.start_playback();
        self.set_status(StatusLine::Playing(title));
        Ok(())
    }

    /// Start or resume playback
    ///
    /// With nothing loaded yet, selects the current index (or the first
    /// track) and plays it. With an empty playlist and nothing loaded this
    /// does nothing.
    pub fn play_current(&mut self) -> Result<()> {
        if !self.player.has_source() {
            if self.playlist.is_empty() {
                debug!("Play ignored: playlist is empty");
                return Ok(());
            }
            let index = self.current.unwrap_or(0);
            return self.select_and_play(index);
        }

        self.start_playback();
        if let Some(title) = self.current_track().map(Track::display_name) {
            self.set_status(StatusLine::Playing(title));
        }
        Ok(())
    }

    /// Pause playback and freeze the visualizer
    pub fn pause(&mut self) {
        self.player.pause();
        self.visualizer.stop();
        if self.state == PlaybackState::Playing {
            self.set_state(PlaybackState::Paused);
        }
    }

    /// Stop playback
    ///
    /// Never auto-advances. The source stays loaded, so `play_current`
    /// starts it again from the top.
    pub fn stop(&mut self) {
        self.player.stop();
        self.visualizer.stop();
        self.position = Duration::ZERO;
        self.set_state(PlaybackState::Stopped);
        self.set_status(StatusLine::Stopped);
    }

    /// Move to the next or previous track and play it
    ///
    /// Returns the newly selected index, or `None` when there is nothing to
    /// move to (empty playlist, or a boundary under `BoundaryPolicy::Clamp`).
    pub fn advance(&mut self, direction: Direction) -> Result<Option<usize>> {
        let Some(index) = self.target_index(direction) else {
            debug!(?direction, current = ?self.current, "Advance ignored");
            return Ok(None);
        };

        self.select_and_play(index)?;
        Ok(Some(index))
    }

    /// Skip to next track
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<usize>> {
        self.advance(Direction::Next)
    }

    /// Go to previous track
    pub fn previous(&mut self) -> Result<Option<usize>> {
        self.advance(Direction::Previous)
    }

    /// React to the player reporting end of media
    ///
    /// Repeat wins over shuffle: with repeat on the current track restarts
    /// even if shuffle is also on.
    pub fn on_track_ended(&mut self) -> Result<Option<usize>> {
        self.set_state(PlaybackState::Ended);

        if self.repeat {
            if let Some(index) = self.current {
                debug!(index, "Repeating track");
                self.select_and_play(index)?;
                return Ok(Some(index));
            }
        }

        let next = if self.shuffle {
            shuffle::pick_index(
                &mut self.rng,
                self.playlist.len(),
                self.current,
                self.config.shuffle,
            )
        } else {
            self.target_index(Direction::Next)
        };

        match next {
            Some(index) => {
                self.select_and_play(index)?;
                Ok(Some(index))
            }
            None => {
                debug!("End of playlist");
                self.visualizer.stop();
                self.set_state(PlaybackState::Idle);
                Ok(None)
            }
        }
    }

    /// Work out where next/previous lands without touching anything
    /// except the shuffle RNG
    fn target_index(&mut self, direction: Direction) -> Option<usize> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }

        match direction {
            Direction::Next if self.shuffle && len > 1 => {
                shuffle::pick_index(&mut self.rng, len, self.current, self.config.shuffle)
            }
            Direction::Next => match (self.current, self.config.boundary) {
                (None, _) => Some(0),
                (Some(i), BoundaryPolicy::Wrap) => Some((i + 1) % len),
                (Some(i), BoundaryPolicy::Clamp) => (i + 1 < len).then_some(i + 1),
            },
            Direction::Previous => match (self.current, self.config.boundary) {
                (None, BoundaryPolicy::Wrap) => Some(len - 1),
                (None, BoundaryPolicy::Clamp) => None,
                (Some(i), BoundaryPolicy::Wrap) => Some((i + len - 1) % len),
                (Some(i), BoundaryPolicy::Clamp) => i.checked_sub(1),
            },
        }
    }

    fn start_playback(&mut self) {
        self.player.play();
        self.visualizer.start();
        self.set_state(PlaybackState::Playing);
    }

    // ===== Shuffle & Repeat =====

    /// Flip shuffle mode, returning the new value
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.emit_modes_changed();
        self.shuffle
    }

    /// Flip repeat mode, returning the new value
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.emit_modes_changed();
        self.repeat
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    // ===== Playlist Management =====

    /// Append a track unless it is already in the playlist
    pub fn add_track(&mut self, track: impl Into<Track>) -> bool {
        let added = self.playlist.add(track.into());
        if added {
            self.emit_playlist_changed();
        }
        added
    }

    /// Append tracks, skipping duplicates; returns how many were added
    pub fn add_tracks<I, T>(&mut self, tracks: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<Track>,
    {
        let added = self.playlist.extend(tracks);
        if added > 0 {
            self.emit_playlist_changed();
        }
        added
    }

    /// Append dropped files, keeping only supported audio extensions
    pub fn add_dropped<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let added = self.playlist.add_dropped(paths);
        if added > 0 {
            self.emit_playlist_changed();
        }
        added
    }

    /// Remove tracks by index
    ///
    /// If the current track is removed, `current_index` becomes `None` and
    /// the caller has to select again. Removing earlier tracks shifts the
    /// current index so it keeps naming the same track.
    pub fn remove_tracks(&mut self, indices: &BTreeSet<usize>) -> Vec<Track> {
        let removed = self.playlist.remove_indices(indices);
        if removed.is_empty() {
            return removed;
        }

        if let Some(current) = self.current {
            if indices.contains(&current) {
                debug!(current, "Current track removed");
                self.current = None;
            } else {
                let shift = indices.range(..current).count();
                self.current = Some(current - shift);
            }
        }

        info!(count = removed.len(), "Removed tracks");
        self.emit_playlist_changed();
        self.set_status(StatusLine::Removed(removed.len()));
        removed
    }

    // ===== Seek =====

    /// Seek in the loaded track, clamped to its duration when known
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if !self.player.has_source() {
            return Err(PlaybackError::NoTrackLoaded);
        }

        let position = if self.duration > Duration::ZERO {
            position.min(self.duration)
        } else {
            position
        };
        self.player.seek(position);
        self.position = position;
        Ok(())
    }

    /// Jump forward by the configured seek step
    pub fn seek_forward(&mut self) -> Result<()> {
        let target = self.player.position() + self.config.seek_step;
        self.seek(target)
    }

    /// Jump back by the configured seek step (stops at 0)
    pub fn seek_backward(&mut self) -> Result<()> {
        let target = self.player.position().saturating_sub(self.config.seek_step);
        self.seek(target)
    }

    // ===== Volume =====

    /// Set volume (0-100)
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.player.set_volume(self.volume.player_volume());
        self.pending_events.push(SequencerEvent::VolumeChanged {
            level: self.volume.level(),
        });
    }

    /// Get current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Show an equalizer slider change on the status line
    ///
    /// Display only: no filter is applied to the audio.
    pub fn show_eq_adjustment(&mut self, band: impl Into<String>, gain_db: i32) {
        self.set_status(StatusLine::Equalizer {
            band: band.into(),
            gain_db,
        });
    }

    // ===== Player Notifications =====

    /// Consume a notification from the audio player
    pub fn handle_player_event(&mut self, event: PlayerEvent) -> Result<()> {
        match event {
            PlayerEvent::PositionChanged(position) => {
                self.position = position;
                self.pending_events.push(SequencerEvent::PositionChanged {
                    position,
                    duration: self.duration,
                });
            }
            PlayerEvent::DurationChanged(duration) => {
                self.duration = duration;
                self.pending_events
                    .push(SequencerEvent::DurationChanged { duration });
            }
            PlayerEvent::StatusChanged(MediaStatus::EndOfMedia) => {
                self.on_track_ended()?;
            }
            PlayerEvent::StatusChanged(MediaStatus::InvalidMedia) => {
                warn!(track = ?self.current_track().map(Track::path), "Player rejected media");
                self.visualizer.stop();
                self.set_state(PlaybackState::Idle);
            }
            PlayerEvent::StatusChanged(status) => {
                trace!(?status, "Media status");
            }
        }
        Ok(())
    }

    /// Advance the visualizer one frame; true if it needs a repaint
    pub fn tick(&mut self) -> bool {
        self.visualizer.tick(&mut self.rng)
    }

    // ===== State Queries =====

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Get currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|index| self.playlist.get(index))
    }

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether audio is playing, as reported by the player
    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// `mm:ss / mm:ss` label for the screen
    pub fn time_label(&self) -> String {
        display::time_label(self.position, self.duration)
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status
    }

    pub fn visualizer(&self) -> &BarVisualizer {
        &self.visualizer
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain. The UI should call
    /// this after each user action and player notification.
    pub fn drain_events(&mut self) -> Vec<SequencerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            trace!(from = ?self.state, to = ?state, "State change");
            self.state = state;
            self.pending_events
                .push(SequencerEvent::StateChanged { state });
        }
    }

    fn set_status(&mut self, status: StatusLine) {
        if self.status != status {
            self.status = status.clone();
            self.pending_events
                .push(SequencerEvent::StatusChanged { status });
        }
    }

    fn emit_modes_changed(&mut self) {
        self.pending_events.push(SequencerEvent::ModesChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
    }

    fn emit_playlist_changed(&mut self) {
        self.pending_events.push(SequencerEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
    }
}

impl<P: AudioPlayer + Default> Default for PlaybackSequencer<P> {
    fn default() -> Self {
        Self::new(P::default(), SequencerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::DummyPlayer;

    fn sequencer_with(tracks: &[&str]) -> PlaybackSequencer<DummyPlayer> {
        let mut seq = PlaybackSequencer::with_rng(
            DummyPlayer::default(),
            SequencerConfig::default(),
            StdRng::seed_from_u64(42),
        );
        seq.add_tracks(tracks.iter().copied());
        seq
    }

    #[test]
    fn create_sequencer() {
        let seq = sequencer_with(&[]);
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.current_index(), None);
        assert_eq!(seq.volume(), 70);
        assert!((seq.player().volume - 0.7).abs() < 1e-6);
        assert_eq!(seq.status_line(), &StatusLine::Ready);
    }

    #[test]
    fn select_and_play_loads_track() {
        let mut seq = sequencer_with(&["/m/a.mp3", "/m/b.mp3"]);
        seq.select_and_play(1).unwrap();

        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.player().loaded, vec![PathBuf::from("/m/b.mp3")]);
        assert!(seq.is_playing());
        assert!(seq.visualizer().is_active());
        assert_eq!(seq.state(), PlaybackState::Playing);
        assert_eq!(seq.status_line(), &StatusLine::Playing("b.mp3".into()));
    }

    #[test]
    fn select_out_of_range_changes_nothing() {
        let mut seq = sequencer_with(&["/m/a.mp3"]);
        let err = seq.select_and_play(3).unwrap_err();
        assert!(matches!(
            err,
            PlaybackError::IndexOutOfBounds { index: 3, len: 1 }
        ));
        assert_eq!(seq.current_index(), None);
        assert!(seq.player().loaded.is_empty());
    }

    #[test]
    fn failed_load_leaves_sequencer_idle() {
        let mut seq = sequencer_with(&["/m/a.mp3"]);
        seq.player_mut().fail_loads = true;

        assert!(seq.select_and_play(0).is_err());
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert!(!seq.visualizer().is_active());
    }

    #[test]
    fn play_current_starts_first_track() {
        let mut seq = sequencer_with(&["/m/a.mp3", "/m/b.mp3"]);
        seq.play_current().unwrap();
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.player().loaded.len(), 1);
    }

    #[test]
    fn play_current_resumes_loaded_source() {
        let mut seq = sequencer_with(&["/m/a.mp3", "/m/b.mp3"]);
        seq.select_and_play(1).unwrap();
        seq.pause();
        assert_eq!(seq.state(), PlaybackState::Paused);
        assert!(!seq.visualizer().is_active());

        seq.play_current().unwrap();
        assert_eq!(seq.state(), PlaybackState::Playing);
        assert_eq!(seq.player().loaded.len(), 1, "resume must not reload");
        assert!(seq.visualizer().is_active());
    }

    #[test]
    fn empty_playlist_operations_are_noops() {
        let mut seq = sequencer_with(&[]);
        assert_eq!(seq.next().unwrap(), None);
        assert_eq!(seq.previous().unwrap(), None);
        seq.play_current().unwrap();

        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.current_index(), None);
        assert!(!seq.visualizer().is_active());
        assert!(!seq.has_pending_events());
    }

    #[test]
    fn stop_resets_status() {
        let mut seq = sequencer_with(&["/m/a.mp3"]);
        seq.play_current().unwrap();
        seq.stop();

        assert_eq!(seq.state(), PlaybackState::Stopped);
        assert_eq!(seq.status_line().to_string(), "STOPPED");
        assert_eq!(seq.player().stops, 1);
        assert!(!seq.is_playing());
    }

    #[test]
    fn next_wraps_by_default() {
        let mut seq = sequencer_with(&["/a.mp3", "/b.mp3", "/c.mp3"]);
        seq.select_and_play(2).unwrap();
        assert_eq!(seq.next().unwrap(), Some(0));
        assert_eq!(seq.previous().unwrap(), Some(2));
    }

    #[test]
    fn next_without_selection_starts_at_first() {
        let mut seq = sequencer_with(&["/a.mp3", "/b.mp3", "/c.mp3"]);
        assert_eq!(seq.next().unwrap(), Some(0));
    }

    #[test]
    fn previous_without_selection_wraps_to_last() {
        let mut seq = sequencer_with(&["/a.mp3", "/b.mp3", "/c.mp3"]);
        assert_eq!(seq.previous().unwrap(), Some(2));
    }

    #[test]
    fn shuffle_next_stays_in_range() {
        let mut seq = sequencer_with(&["/a.mp3", "/b.mp3", "/c.mp3", "/d.mp3"]);
        seq.toggle_shuffle();
        for _ in 0..50 {
            let index = seq.next().unwrap().unwrap();
            assert!(index < 4);
            assert_eq!(seq.current_index(), Some(index));
        }
    }

    #[test]
    fn shuffle_with_single_track_is_sequential() {
        let mut seq = sequencer_with(&["/a.mp3"]);
        seq.toggle_shuffle();
        assert_eq!(seq.next().unwrap(), Some(0));
    }

    #[test]
    fn track_end_repeat_beats_shuffle() {
        let mut seq = sequencer_with(&["/a.mp3", "/b.mp3"]);
        seq.select_and_play(0).unwrap();
        seq.toggle_repeat();
        seq.toggle_shuffle();

        for _ in 0..10 {
            assert_eq!(seq.on_track_ended().unwrap(), Some(0));
        }
        assert_eq!(seq.player().loaded.len(), 11);
    }

    #[test]
    fn toggles_are_independent() {
        let mut seq = sequencer_with(&[]);
        assert!(seq.toggle_shuffle());
        assert!(seq.toggle_repeat());
        assert!(!seq.toggle_shuffle());
        assert!(seq.is_repeat());
        assert!(!seq.is_shuffle());
    }

    #[test]
    fn remove_shifts_current_index() {
        let mut seq = sequencer_with(&["/0.mp3", "/1.mp3", "/2.mp3", "/3.mp3"]);
        seq.select_and_play(3).unwrap();

        let removed = seq.remove_tracks(&BTreeSet::from([0, 2]));
        assert_eq!(removed.len(), 2);
        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.current_track().unwrap().display_name(), "3.mp3");
        assert_eq!(seq.status_line(), &StatusLine::Removed(2));
    }

    #[test]
    fn removing_current_clears_selection() {
        let mut seq = sequencer_with(&["/0.mp3", "/1.mp3"]);
        seq.select_and_play(1).unwrap();
        seq.remove_tracks(&BTreeSet::from([1]));
        assert_eq!(seq.current_index(), None);
        assert!(seq.current_track().is_none());
    }

    #[test]
    fn seek_requires_source() {
        let mut seq = sequencer_with(&["/a.mp3"]);
        assert!(matches!(
            seq.seek(Duration::from_secs(1)),
            Err(PlaybackError::NoTrackLoaded)
        ));
    }

    #[test]
    fn seek_steps_and_clamps() {
        let mut seq = sequencer_with(&["/a.mp3"]);
        seq.play_current().unwrap();
        seq.handle_player_event(PlayerEvent::DurationChanged(Duration::from_secs(12)))
            .unwrap();

        seq.seek_forward().unwrap();
        assert_eq!(seq.player().position, Duration::from_secs(5));
        seq.seek_forward().unwrap();
        seq.seek_forward().unwrap();
        assert_eq!(seq.player().position, Duration::from_secs(12));

        seq.seek(Duration::from_secs(3)).unwrap();
        seq.seek_backward().unwrap();
        assert_eq!(seq.player().position, Duration::ZERO);
    }

    #[test]
    fn set_volume_reaches_player() {
        let mut seq = sequencer_with(&[]);
        seq.set_volume(120);
        assert_eq!(seq.volume(), 100);
        assert_eq!(seq.player().volume, 1.0);
        assert_eq!(
            seq.drain_events(),
            vec![SequencerEvent::VolumeChanged { level: 100 }]
        );
    }

    #[test]
    fn eq_adjustment_replaces_status_until_next_track() {
        let mut seq = sequencer_with(&["/a.mp3", "/b.mp3"]);
        seq.select_and_play(0).unwrap();
        seq.drain_events();

        seq.show_eq_adjustment("1K", 6);
        assert_eq!(seq.status_line().to_string(), "EQ Adjustment:\n1KHz -> 6 dB");
        assert_eq!(seq.state(), PlaybackState::Playing);
        assert_eq!(seq.drain_events().len(), 1);

        seq.next().unwrap();
        assert_eq!(seq.status_line(), &StatusLine::Playing("b.mp3".into()));
    }

    #[test]
    fn end_of_media_event_advances() {
        let mut seq = sequencer_with(&["/a.mp3", "/b.mp3"]);
        seq.select_and_play(0).unwrap();
        seq.handle_player_event(PlayerEvent::StatusChanged(MediaStatus::EndOfMedia))
            .unwrap();
        assert_eq!(seq.current_index(), Some(1));
    }

    #[test]
    fn position_events_update_time_label() {
        let mut seq = sequencer_with(&["/a.mp3"]);
        seq.handle_player_event(PlayerEvent::DurationChanged(Duration::from_secs(185)))
            .unwrap();
        seq.handle_player_event(PlayerEvent::PositionChanged(Duration::from_secs(61)))
            .unwrap();
        assert_eq!(seq.time_label(), "01:01 / 03:05");
    }

    #[test]
    fn invalid_media_goes_idle() {
        let mut seq = sequencer_with(&["/a.mp3"]);
        seq.play_current().unwrap();
        seq.handle_player_event(PlayerEvent::StatusChanged(MediaStatus::InvalidMedia))
            .unwrap();
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert!(!seq.visualizer().is_active());
    }

    #[test]
    fn tick_only_animates_while_playing() {
        let mut seq = sequencer_with(&["/a.mp3"]);
        assert!(!seq.tick());
        seq.play_current().unwrap();
        assert!(seq.tick());
        seq.pause();
        assert!(!seq.tick());
    }

    #[test]
    fn events_describe_selection() {
        let mut seq = sequencer_with(&["/m/a.mp3"]);
        seq.drain_events();
        seq.select_and_play(0).unwrap();

        let events = seq.drain_events();
        assert!(events.contains(&SequencerEvent::TrackChanged {
            index: 0,
            title: "a.mp3".into()
        }));
        assert!(events.contains(&SequencerEvent::StateChanged {
            state: PlaybackState::Playing
        }));
        assert!(!seq.has_pending_events());
    }
}
