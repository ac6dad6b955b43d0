//! ampdeck - Session
//!
//! Ties the playback sequencer to settings persistence. A [`Session`] is
//! opened from the settings file at startup, drives playback while the
//! player runs, and writes the playlist, theme and volume back exactly once
//! when it is shut down.
//!
//! # Example
//!
//! ```rust,no_run
//! use ampdeck_playback::AudioPlayer;
//! use ampdeck_session::{Session, SessionConfig};
//!
//! # fn example<P: AudioPlayer>(player: P) -> ampdeck_session::Result<()> {
//! let config = SessionConfig::default();
//! let mut session = Session::open_with_config(player, &config)?;
//!
//! session.sequencer_mut().play_current()?;
//! // ... UI timer calls session.tick() ...
//!
//! session.shutdown();
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod session;

pub use config::{SessionConfig, VisualizerPreset};
pub use error::{Result, SessionError};
pub use session::Session;
