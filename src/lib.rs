//! `romeo`: the playback core of a mobile-styled music browser.
//!
//! The [`session`] module holds the playback state machine. Everything else
//! feeds it or watches it: [`catalog`] supplies tracks, [`scheduler`] drives
//! its clock, [`config`] seeds its modes and [`runtime`] wraps it in a small
//! command shell.

pub mod catalog;
pub mod config;
pub mod error;
pub mod runtime;
pub mod scheduler;
pub mod session;

pub use catalog::{CatalogProvider, StaticCatalog, Track, TrackId};
pub use error::SessionError;
pub use session::{PlaybackSession, RepeatMode, SessionSnapshot, SharedSession};
