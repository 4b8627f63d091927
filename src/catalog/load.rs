use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use super::display::parse_duration;
use super::model::{Mood, StaticCatalog, Track, TrackId};

/// Errors raised while reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid duration {duration:?} for track {id}")]
    InvalidDuration { id: TrackId, duration: String },

    #[error("duplicate track id {0}")]
    DuplicateId(TrackId),
}

/// On-disk catalog layout:
///
/// ```toml
/// [[tracks]]
/// id = 1
/// title = "Heartbeat Symphony"
/// artist = "Anime Dreams"
/// duration = "3:45"   # or a number of seconds
/// mood = "love"       # optional
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<TrackEntry>,
}

#[derive(Debug, Deserialize)]
struct TrackEntry {
    id: TrackId,
    title: String,
    artist: String,
    duration: DurationField,
    #[serde(default)]
    mood: Mood,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DurationField {
    Seconds(u32),
    Clock(String),
}

/// Parse catalog TOML into tracks, keeping file order.
pub fn parse_catalog(text: &str) -> Result<Vec<Track>, CatalogError> {
    let file: CatalogFile = toml::from_str(text)?;

    let mut seen: HashSet<TrackId> = HashSet::new();
    let mut tracks = Vec::with_capacity(file.tracks.len());

    for entry in file.tracks {
        if !seen.insert(entry.id) {
            return Err(CatalogError::DuplicateId(entry.id));
        }

        let duration_secs = match entry.duration {
            DurationField::Seconds(secs) => secs,
            DurationField::Clock(clock) => match parse_duration(&clock) {
                Some(secs) => secs,
                None => {
                    return Err(CatalogError::InvalidDuration {
                        id: entry.id,
                        duration: clock,
                    });
                }
            },
        };

        tracks.push(Track {
            id: entry.id,
            title: entry.title,
            artist: entry.artist,
            duration_secs,
            mood: entry.mood,
        });
    }

    Ok(tracks)
}

/// Read a catalog file from disk.
pub fn load_catalog_file(path: &Path) -> Result<StaticCatalog, CatalogError> {
    let text = fs::read_to_string(path)?;
    let tracks = parse_catalog(&text)?;
    debug!("loaded {} tracks from {}", tracks.len(), path.display());
    Ok(StaticCatalog::new(tracks))
}
