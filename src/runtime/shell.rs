//! Line-oriented command shell over a shared playback session.
//!
//! The shell plays the part of the app's screens: it only reads session
//! snapshots and changes the session through its commands.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use log::debug;
use thiserror::Error;

use crate::catalog::{self, TrackId};
use crate::config;
use crate::session::{PlaybackSession, RepeatMode, SharedSession};

use super::views;

const PROMPT: &str = "romeo> ";

/// One parsed shell input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Play(TrackId),
    Toggle,
    Next,
    Prev,
    /// Absolute position in seconds. Out-of-range values are clamped.
    Seek(i64),
    Forward,
    Back,
    /// `None` toggles.
    Shuffle(Option<bool>),
    /// `None` cycles `off -> all -> one`.
    Repeat(Option<RepeatMode>),
    /// Requested level, clamped to `0..=100` when applied.
    Volume(i64),
    Like,
    List,
    Search(String),
    Status,
    Full,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid argument `{value}` for `{command}`")]
    InvalidArgument { command: &'static str, value: String },
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then_some(rest);

        let invalid = |command: &'static str, value: &str| ParseCommandError::InvalidArgument {
            command,
            value: value.to_string(),
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "" => return Err(ParseCommandError::Empty),
            "play" => {
                let a = arg.ok_or(ParseCommandError::MissingArgument("play"))?;
                let id = a.parse::<u64>().map_err(|_| invalid("play", a))?;
                ShellCommand::Play(TrackId(id))
            }
            "toggle" | "p" => ShellCommand::Toggle,
            "next" | "n" => ShellCommand::Next,
            "prev" | "b" => ShellCommand::Prev,
            "seek" => {
                let a = arg.ok_or(ParseCommandError::MissingArgument("seek"))?;
                ShellCommand::Seek(parse_position(a).ok_or_else(|| invalid("seek", a))?)
            }
            "fwd" => ShellCommand::Forward,
            "back" => ShellCommand::Back,
            "shuffle" => ShellCommand::Shuffle(match arg {
                None => None,
                Some(a) => Some(parse_switch(a).ok_or_else(|| invalid("shuffle", a))?),
            }),
            "repeat" => ShellCommand::Repeat(match arg {
                None => None,
                Some(a) => Some(parse_repeat(a).ok_or_else(|| invalid("repeat", a))?),
            }),
            "vol" | "volume" => {
                let a = arg.ok_or(ParseCommandError::MissingArgument("vol"))?;
                ShellCommand::Volume(parse_level(a).ok_or_else(|| invalid("vol", a))?)
            }
            "like" => ShellCommand::Like,
            "list" | "ls" => ShellCommand::List,
            "search" => {
                let a = arg.ok_or(ParseCommandError::MissingArgument("search"))?;
                ShellCommand::Search(a.to_string())
            }
            "status" => ShellCommand::Status,
            "full" => ShellCommand::Full,
            "help" | "?" => ShellCommand::Help,
            "quit" | "q" | "exit" => ShellCommand::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}

/// Seconds (possibly negative) or an `m:ss` clock position.
fn parse_position(s: &str) -> Option<i64> {
    if s.contains(':') {
        catalog::parse_duration(s).map(i64::from)
    } else {
        s.parse::<i64>().ok()
    }
}

/// Integer level, saturating when the digits overflow `i64`.
fn parse_level(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn parse_switch(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_repeat(s: &str) -> Option<RepeatMode> {
    match s.to_ascii_lowercase().as_str() {
        "off" | "none" => Some(RepeatMode::Off),
        "one" | "track" => Some(RepeatMode::One),
        "all" | "queue" => Some(RepeatMode::All),
        _ => None,
    }
}

/// Whether the shell should keep reading after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply `cmd` to `session` and write the resulting view to `out`.
///
/// Commands go through the session's forgiving forms: a command that does
/// not apply leaves the session untouched and only the view is printed.
pub fn dispatch<W: Write>(
    cmd: ShellCommand,
    session: &mut PlaybackSession,
    settings: &config::Settings,
    out: &mut W,
) -> io::Result<Flow> {
    debug!("shell command: {cmd:?}");
    let scrub = i64::from(settings.controls.scrub_seconds);

    match cmd {
        ShellCommand::Play(id) => session.play(id),
        ShellCommand::Toggle => session.toggle_play(),
        ShellCommand::Next => session.skip_next(),
        ShellCommand::Prev => session.skip_previous(),
        ShellCommand::Seek(pos) => session.seek(pos),
        ShellCommand::Forward => session.seek_by(scrub),
        ShellCommand::Back => session.seek_by(-scrub),
        ShellCommand::Shuffle(Some(on)) => session.set_shuffle(on),
        ShellCommand::Shuffle(None) => {
            session.toggle_shuffle();
        }
        ShellCommand::Repeat(Some(mode)) => session.set_repeat(mode),
        ShellCommand::Repeat(None) => {
            session.cycle_repeat();
        }
        ShellCommand::Volume(level) => {
            let level = level.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
            session.set_volume(i32::try_from(level).unwrap_or(i32::MAX));
        }
        ShellCommand::Like => session.toggle_like(),
        ShellCommand::List => {
            let current = session.current_track().map(|t| t.id);
            for track in session.queue().tracks() {
                writeln!(
                    out,
                    "{}",
                    views::track_list_line(
                        track,
                        current == Some(track.id),
                        session.is_track_liked(track.id)
                    )
                )?;
            }
            return Ok(Flow::Continue);
        }
        ShellCommand::Search(query) => {
            let hits = catalog::search(session.queue().tracks(), &query);
            if hits.is_empty() {
                writeln!(out, "no tracks match `{query}`")?;
            }
            let current = session.current_track().map(|t| t.id);
            for track in hits {
                writeln!(
                    out,
                    "{}",
                    views::track_list_line(
                        track,
                        current == Some(track.id),
                        session.is_track_liked(track.id)
                    )
                )?;
            }
            return Ok(Flow::Continue);
        }
        ShellCommand::Status => {}
        ShellCommand::Full => {
            write!(out, "{}", views::now_playing_panel(&session.snapshot()))?;
            return Ok(Flow::Continue);
        }
        ShellCommand::Help => {
            writeln!(out, "{}", views::help_text(settings.controls.scrub_seconds))?;
            return Ok(Flow::Continue);
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    }

    writeln!(out, "{}", views::mini_player_line(&session.snapshot()))?;
    Ok(Flow::Continue)
}

/// Read commands from `input` until EOF or `quit`.
///
/// The session lock is held only while a single command runs, so the
/// ticker keeps advancing time between lines.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    shared: &SharedSession,
    settings: &config::Settings,
) -> Result<()> {
    writeln!(out, "romeo: type `help` for commands")?;
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match line.parse::<ShellCommand>() {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        let mut session = shared
            .lock()
            .map_err(|_| eyre!("playback session lock poisoned"))?;
        if dispatch(cmd, &mut session, settings, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
