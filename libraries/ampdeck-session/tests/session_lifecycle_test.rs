//! Session lifecycle tests
//!
//! Open from a real settings file, change things, shut down, and reopen.

use ampdeck_playback::{AudioPlayer, PlaybackState, Result};
use ampdeck_session::{Session, SessionConfig};
use ampdeck_settings::{PersistedSettings, SettingsStore, Theme};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

// ===== Test Helpers =====

#[derive(Debug, Default)]
struct FakePlayer {
    source: Option<PathBuf>,
    playing: bool,
    volume: f32,
}

impl AudioPlayer for FakePlayer {
    fn load_source(&mut self, path: &Path) -> Result<()> {
        self.source = Some(path.to_path_buf());
        Ok(())
    }
    fn play(&mut self) {
        self.playing = self.source.is_some();
    }
    fn pause(&mut self) {
        self.playing = false;
    }
    fn stop(&mut self) {
        self.playing = false;
    }
    fn seek(&mut self, _position: Duration) {}
    fn position(&self) -> Duration {
        Duration::ZERO
    }
    fn has_source(&self) -> bool {
        self.source.is_some()
    }
    fn is_playing(&self) -> bool {
        self.playing
    }
    fn volume(&self) -> f32 {
        self.volume
    }
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn store(&self) -> SettingsStore {
        SettingsStore::new(self.dir.path().join("settings.json"))
    }

    fn track(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    fn open(&self) -> Session<FakePlayer> {
        Session::open(FakePlayer::default(), self.store(), &SessionConfig::default())
    }
}

// ===== Lifecycle =====

#[test]
fn test_shutdown_then_reopen_restores_everything() {
    let fixture = Fixture::new();
    let a = fixture.track("a.mp3");
    let b = fixture.track("b.wav");

    let mut session = fixture.open();
    session.add_files(vec![a.clone(), b.clone()]);
    session.sequencer_mut().set_volume(33);
    session.set_theme(Theme::parse("#ff0088").unwrap());
    session.shutdown();

    let reopened = fixture.open();
    let paths: Vec<PathBuf> = reopened
        .sequencer()
        .playlist()
        .iter()
        .map(|t| t.path().to_path_buf())
        .collect();

    assert_eq!(paths, vec![a, b]);
    assert_eq!(reopened.sequencer().volume(), 33);
    assert_eq!(reopened.theme().as_str(), "#ff0088");
    assert_eq!(reopened.sequencer().current_index(), None);
    assert_eq!(reopened.sequencer().state(), PlaybackState::Idle);
}

#[test]
fn test_files_deleted_between_runs_are_skipped() {
    let fixture = Fixture::new();
    let keep = fixture.track("keep.mp3");
    let delete = fixture.track("delete.mp3");

    let mut session = fixture.open();
    session.add_files(vec![delete.clone(), keep.clone()]);
    session.shutdown();

    fs::remove_file(&delete).unwrap();

    let reopened = fixture.open();
    assert_eq!(reopened.sequencer().playlist().len(), 1);
    assert_eq!(reopened.sequencer().playlist().get(0).unwrap().path(), keep);
}

#[test]
fn test_nothing_is_written_before_shutdown() {
    let fixture = Fixture::new();
    let mut session = fixture.open();
    session.add_files(vec![fixture.track("a.mp3")]);

    assert!(!fixture.store().path().exists());

    session.shutdown();
    assert!(fixture.store().path().exists());
}

#[test]
fn test_corrupt_settings_start_empty_session() {
    let fixture = Fixture::new();
    fs::write(fixture.store().path(), "][").unwrap();

    let config = SessionConfig {
        default_volume: 55,
        ..Default::default()
    };
    let session = Session::open(FakePlayer::default(), fixture.store(), &config);

    assert!(session.sequencer().playlist().is_empty());
    assert_eq!(session.sequencer().volume(), 55);
    assert_eq!(session.sequencer().player().volume(), 0.55);
}

#[test]
fn test_legacy_file_restores_playlist_with_default_volume() {
    let fixture = Fixture::new();
    let a = fixture.track("a.ogg");
    fs::write(
        fixture.store().path(),
        serde_json::to_string(&vec![&a]).unwrap(),
    )
    .unwrap();

    let session = fixture.open();

    assert_eq!(session.sequencer().playlist().len(), 1);
    assert_eq!(session.sequencer().volume(), 70);
}

#[test]
fn test_snapshot_matches_saved_file() {
    let fixture = Fixture::new();
    let a = fixture.track("a.mp3");

    let mut session = fixture.open();
    session.add_files(vec![a]);
    let snapshot = session.snapshot();
    session.shutdown();

    let saved: PersistedSettings = fixture.store().try_load().unwrap();
    assert_eq!(saved, snapshot);
}

#[test]
fn test_open_with_config_uses_settings_path_override() {
    let fixture = Fixture::new();
    let path = fixture.dir.path().join("nested").join("custom.json");
    let config = SessionConfig {
        settings_path: Some(path.clone()),
        ..Default::default()
    };

    let session = Session::open_with_config(FakePlayer::default(), &config).unwrap();
    assert_eq!(session.store().path(), path);
    session.shutdown();

    assert!(path.exists());
}
