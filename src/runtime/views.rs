//! Plain-text views of a session snapshot.
//!
//! The mini player and the now-playing panel render the same snapshot, so
//! the two can never disagree about what is playing.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::catalog::{Track, format_time};
use crate::session::SessionSnapshot;

const BAR_WIDTH: usize = 24;

static COMMANDS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("play <id>", "play a track from the start");
    map.insert("toggle/p", "play/pause");
    map.insert("next/n", "next track");
    map.insert("prev/b", "previous track");
    map.insert("seek <s|m:ss>", "jump to a position");
    // fwd/back is filled dynamically from config.
    map.insert("shuffle [on|off]", "toggle or set shuffle");
    map.insert("repeat [off|one|all]", "cycle or set repeat mode");
    map.insert("vol <0-100>", "set volume");
    map.insert("like", "like/unlike current track");
    map.insert("list", "show the queue");
    map.insert("search <text>", "find by title or artist");
    map.insert("status", "mini player");
    map.insert("full", "now playing panel");
    map.insert("quit/q", "quit");
    map
});

/// Command reference, incorporating the configured scrub step.
pub fn help_text(scrub_seconds: u32) -> String {
    let order = [
        "play <id>",
        "toggle/p",
        "next/n",
        "prev/b",
        "seek <s|m:ss>",
        "fwd/back",
        "shuffle [on|off]",
        "repeat [off|one|all]",
        "vol <0-100>",
        "like",
        "list",
        "search <text>",
        "status",
        "full",
        "quit/q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "fwd/back" {
                Some(format!("  {:<22} scrub +/-{}s", k, scrub_seconds))
            } else {
                COMMANDS_MAP.get(k).map(|v| format!("  {:<22} {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn state_icon(snapshot: &SessionSnapshot) -> &'static str {
    match (&snapshot.current_track, snapshot.is_playing) {
        (None, _) => "■",
        (Some(_), true) => "▶",
        (Some(_), false) => "⏸",
    }
}

/// `[=========---------------]` with the filled share of `elapsed / duration`.
pub fn progress_bar(elapsed_secs: u32, duration_secs: u32, width: usize) -> String {
    let filled = if duration_secs == 0 {
        0
    } else {
        let ratio = f64::from(elapsed_secs.min(duration_secs)) / f64::from(duration_secs);
        ((ratio * width as f64).round() as usize).min(width)
    };
    format!("[{}{}]", "=".repeat(filled), "-".repeat(width - filled))
}

/// Compact one-line view shown after every command.
pub fn mini_player_line(snapshot: &SessionSnapshot) -> String {
    let Some(track) = &snapshot.current_track else {
        return format!("{} nothing playing", state_icon(snapshot));
    };
    let heart = if snapshot.is_liked { " ♥" } else { "" };
    format!(
        "{} {}{}  {} / {}",
        state_icon(snapshot),
        track.display(),
        heart,
        format_time(snapshot.elapsed_secs),
        format_time(track.duration_secs)
    )
}

/// Full now-playing view: track details, progress and every mode.
pub fn now_playing_panel(snapshot: &SessionSnapshot) -> String {
    let mut lines: Vec<String> = Vec::new();

    match &snapshot.current_track {
        Some(track) => {
            lines.push(format!("Song:    {}", track.title));
            if !track.artist.trim().is_empty() {
                lines.push(format!("Artist:  {}", track.artist));
            }
            lines.push(format!("Mood:    {}", track.mood.label()));
            lines.push(format!(
                "{} {} {} / -{}",
                state_icon(snapshot),
                progress_bar(snapshot.elapsed_secs, track.duration_secs, BAR_WIDTH),
                format_time(snapshot.elapsed_secs),
                format_time(snapshot.remaining_secs().unwrap_or(0))
            ));
        }
        None => lines.push(format!("{} nothing playing", state_icon(snapshot))),
    }

    lines.push(format!("Volume:  {}", snapshot.volume));
    lines.push(format!(
        "Shuffle: {}",
        if snapshot.is_shuffled { "on" } else { "off" }
    ));
    lines.push(format!("Repeat:  {}", snapshot.repeat_mode.label()));
    lines.push(format!(
        "Liked:   {}",
        if snapshot.is_liked { "yes" } else { "no" }
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// One queue entry: marker, id, "Artist - Title", duration and like flag.
pub fn track_list_line(track: &Track, is_current: bool, is_liked: bool) -> String {
    format!(
        "{} {:>4}  {}  {}{}",
        if is_current { ">" } else { " " },
        track.id.to_string(),
        track.display(),
        format_time(track.duration_secs),
        if is_liked { " ♥" } else { "" }
    )
}
