//! Configuration loader and schema types.
//!
//! This module exposes the settings that seed a playback session and the
//! shell around it, plus helpers to load them from disk and environment.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
