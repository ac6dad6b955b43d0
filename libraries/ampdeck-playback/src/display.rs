//! Text shown on the player's screen

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Format a position as `mm:ss`
///
/// Minutes are not wrapped at the hour, so a 75 minute mix reads `75:00`.
pub fn format_time(time: Duration) -> String {
    let total = time.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Format `position / duration` as `mm:ss / mm:ss`
pub fn time_label(position: Duration, duration: Duration) -> String {
    format!("{} / {}", format_time(position), format_time(duration))
}

/// Status line on the player screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusLine {
    /// Nothing has been played yet
    #[default]
    Ready,

    /// A track is playing
    Playing(String),

    /// User stopped playback
    Stopped,

    /// Tracks were removed from the playlist
    Removed(usize),

    /// An equalizer slider moved (band label such as `"1K"`, gain in dB)
    Equalizer { band: String, gain_db: i32 },
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Ready => write!(f, "READY TO PLAY"),
            StatusLine::Playing(title) => write!(f, "PLAYING:\n{title}"),
            StatusLine::Stopped => write!(f, "STOPPED"),
            StatusLine::Removed(1) => write!(f, "1 file removed"),
            StatusLine::Removed(count) => write!(f, "{count} files removed"),
            StatusLine::Equalizer { band, gain_db } => {
                write!(f, "EQ Adjustment:\n{band}Hz -> {gain_db} dB")
            }
        }
    }
}
