//! Catalog module: the read-only track source a session loads its queue from.
//!
//! Tracks come from a `CatalogProvider`, either the built-in demo catalog or
//! a TOML catalog file. Helpers for `m:ss` durations and title/artist search
//! live here as well.

mod demo;
mod display;
mod load;
mod model;
mod search;

pub use demo::demo_catalog;
pub use display::{format_time, parse_duration};
pub use load::{CatalogError, load_catalog_file, parse_catalog};
pub use model::*;
pub use search::search;
