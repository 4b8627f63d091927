//! Error types for session commands

use thiserror::Error;

use crate::catalog::TrackId;

/// Reasons a strict (`try_*`) session command was rejected.
///
/// The plain commands never return these: they turn them into no-ops or
/// clamps so every control stays safe to invoke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Seek or volume outside its bounds
    #[error("value {value} is outside {min}..={max}")]
    OutOfRangeInput { value: i64, min: i64, max: i64 },

    /// Skip requested with no tracks queued
    #[error("queue is empty")]
    EmptyQueue,

    /// Toggle, seek or like with nothing loaded
    #[error("no track loaded")]
    NoActiveTrack,

    /// Play requested for a track that is not in the queue
    #[error("track {0} is not in the queue")]
    UnknownTrack(TrackId),
}

/// Result type for session commands
pub type Result<T> = std::result::Result<T, SessionError>;
