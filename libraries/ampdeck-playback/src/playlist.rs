//! Ordered, duplicate-free playlist
//!
//! Insertion order is display order. A path that is already present is
//! never added a second time.

use crate::types::Track;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Extensions accepted for dropped files (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["mp3", "wav", "ogg", "flac", "m4a", "aac"];

/// Check whether a path looks like an audio file we accept from drag and drop
pub fn is_supported_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// The user's ordered working set of tracks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create new empty playlist
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append a track unless its path is already present
    ///
    /// Returns true if the track was added
    pub fn add(&mut self, track: Track) -> bool {
        if self.tracks.contains(&track) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Append many tracks, skipping duplicates
    ///
    /// Returns the number of tracks actually added
    pub fn extend<I, T>(&mut self, tracks: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<Track>,
    {
        let mut added = 0;
        for track in tracks {
            if self.add(track.into()) {
                added += 1;
            }
        }
        added
    }

    /// Append dropped files, keeping only supported audio extensions
    pub fn add_dropped<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.extend(paths.into_iter().filter(|path| is_supported_audio(path)))
    }

    /// Remove the tracks at the given indices
    ///
    /// Indices are processed from highest to lowest so earlier removals never
    /// shift later ones. Out-of-range indices are ignored. Returns the removed
    /// tracks in playlist order.
    pub fn remove_indices(&mut self, indices: &BTreeSet<usize>) -> Vec<Track> {
        let mut removed: Vec<Track> = indices
            .iter()
            .rev()
            .filter_map(|&index| (index < self.tracks.len()).then(|| self.tracks.remove(index)))
            .collect();
        removed.reverse();
        removed
    }

    /// Get track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index of the track with this path
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.tracks.iter().position(|track| track.path() == path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    /// Total number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Paths in display order (the persisted form)
    pub fn paths(&self) -> Vec<PathBuf> {
        self.tracks.iter().map(|t| t.path().to_path_buf()).collect()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}

impl<T: Into<Track>> FromIterator<T> for Playlist {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut playlist = Playlist::new();
        playlist.extend(iter);
        playlist
    }
}
