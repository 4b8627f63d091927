//! Playback session: the single source of truth for what is playing.
//!
//! `PlaybackSession` owns the queue, the loaded track and the transport
//! modes. Views observe it through `SessionSnapshot` and change it only
//! through its commands.

mod model;
mod navigation;
mod queue;
mod types;

pub use model::PlaybackSession;
pub use queue::Queue;
pub use types::*;
