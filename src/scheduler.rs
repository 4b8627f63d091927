//! Tick scheduler: drives a shared session's clock from a background thread.

mod ticker;

pub use ticker::{DEFAULT_TICK_INTERVAL, Ticker};
