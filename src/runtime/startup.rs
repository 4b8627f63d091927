use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::Context;

use crate::catalog::{self, StaticCatalog};
use crate::config;
use crate::session::{PlaybackSession, RepeatMode, SessionOptions};

/// Translate the `[playback]` settings into initial session modes.
pub fn session_options(settings: &config::Settings) -> SessionOptions {
    SessionOptions {
        volume: settings.playback.volume,
        shuffle: settings.playback.shuffle,
        repeat: match settings.playback.repeat {
            config::RepeatSetting::Off => RepeatMode::Off,
            config::RepeatSetting::One => RepeatMode::One,
            config::RepeatSetting::All => RepeatMode::All,
        },
    }
}

/// Pick the catalog: the CLI path wins over `catalog.path`; with neither the
/// built-in demo catalog is used.
pub fn load_catalog(
    cli_path: Option<&Path>,
    settings: &config::CatalogSettings,
) -> Result<StaticCatalog> {
    match cli_path.or(settings.path.as_deref()) {
        Some(path) => catalog::load_catalog_file(path)
            .wrap_err_with(|| format!("Failed to load catalog {}", path.display())),
        None => {
            log::debug!("no catalog configured, using demo catalog");
            Ok(catalog::demo_catalog())
        }
    }
}

/// Create a session seeded from settings with `catalog` as its queue.
pub fn build_session(settings: &config::Settings, catalog: &StaticCatalog) -> PlaybackSession {
    let mut session = PlaybackSession::new(session_options(settings));
    session.load_queue(catalog);
    session
}
