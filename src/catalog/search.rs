use super::model::Track;

/// Case-insensitive substring search over title and artist.
///
/// A blank query matches nothing.
pub fn search<'a>(tracks: &'a [Track], query: &str) -> Vec<&'a Track> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    tracks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&query) || t.artist.to_lowercase().contains(&query)
        })
        .collect()
}
