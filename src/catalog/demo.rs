use super::model::{Mood, StaticCatalog, Track};

/// The catalog used when no catalog file is configured.
pub fn demo_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        Track::new(1, "Heartbeat Symphony", "Anime Dreams", 225).with_mood(Mood::Love),
        Track::new(2, "Neon Nights", "Cyber Romance", 252).with_mood(Mood::Energy),
        Track::new(3, "Sakura Falling", "Peaceful Vibes", 320).with_mood(Mood::Chill),
        Track::new(4, "Digital Love", "Future Hearts", 238).with_mood(Mood::Love),
        Track::new(5, "Smile Like You Mean It", "The Killers", 234).with_mood(Mood::Energy),
    ])
}
