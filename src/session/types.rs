//! Session-level types: repeat mode, tick outcome, snapshot and handles.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::catalog::Track;

use super::model::PlaybackSession;

/// Highest accepted volume level.
pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatMode {
    /// Advance through the queue and stop after its last track.
    #[default]
    Off,
    /// Loop the current track.
    One,
    /// Wrap around to the start of the queue.
    All,
}

impl RepeatMode {
    /// Next mode in the `Off -> All -> One -> Off` cycle.
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::One => "one",
            RepeatMode::All => "all",
        }
    }
}

/// What a single `tick` did to the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or nothing loaded; no time passed.
    Idle,
    /// Elapsed time moved forward within the current track.
    Progressed,
    /// The track ended and restarted (repeat one).
    Repeated,
    /// The track ended and another one was loaded.
    Advanced,
    /// The queue was exhausted and playback stopped.
    Stopped,
}

/// Initial modes for a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub volume: u8,
    pub shuffle: bool,
    pub repeat: RepeatMode,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            volume: 80,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}

/// Read-only copy of the session handed to views after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub elapsed_secs: u32,
    pub volume: u8,
    pub is_liked: bool,
    pub is_shuffled: bool,
    pub repeat_mode: RepeatMode,
}

impl SessionSnapshot {
    pub fn duration_secs(&self) -> Option<u32> {
        self.current_track.as_ref().map(|t| t.duration_secs)
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.duration_secs()
            .map(|d| d.saturating_sub(self.elapsed_secs))
    }
}

/// One session shared by every view and the tick scheduler.
pub type SharedSession = Arc<Mutex<PlaybackSession>>;

/// Wrap `session` for sharing across threads.
pub fn share(session: PlaybackSession) -> SharedSession {
    Arc::new(Mutex::new(session))
}
