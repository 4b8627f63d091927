use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a track within a catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for TrackId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Cosmetic mood tag. Has no effect on playback.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Love,
    Chill,
    Energy,
    #[default]
    Default,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Love => "love",
            Mood::Chill => "chill",
            Mood::Energy => "energy",
            Mood::Default => "default",
        }
    }
}

/// A single playable item. Never mutated once it is part of a queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    /// Canonical playback length in whole seconds.
    pub duration_secs: u32,
    pub mood: Mood,
}

impl Track {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: TrackId(id),
            title: title.into(),
            artist: artist.into(),
            duration_secs,
            mood: Mood::Default,
        }
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    /// "Artist - Title", or just the title when the artist is blank.
    pub fn display(&self) -> String {
        match self.artist.trim() {
            "" => self.title.clone(),
            artist => format!("{} - {}", artist, self.title),
        }
    }
}

/// Read-only source of tracks, queried once per queue load.
pub trait CatalogProvider {
    /// Return the tracks in playback order.
    fn list_tracks(&self) -> Vec<Track>;
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tracks: Vec<Track>,
}

impl StaticCatalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }
}
