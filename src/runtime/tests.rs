use std::io::Cursor;

use super::shell::{self, Flow, ParseCommandError, ShellCommand, dispatch};
use super::startup::{build_session, load_catalog, session_options};
use super::views::{help_text, mini_player_line, now_playing_panel, progress_bar};
use crate::catalog::{self, TrackId};
use crate::config::{CatalogSettings, RepeatSetting, Settings};
use crate::session::{self, PlaybackSession, RepeatMode};

fn demo_session() -> PlaybackSession {
    build_session(&Settings::default(), &catalog::demo_catalog())
}

fn run_dispatch(cmd: ShellCommand, session: &mut PlaybackSession) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = dispatch(cmd, session, &Settings::default(), &mut out).unwrap();
    (flow, String::from_utf8(out).unwrap())
}

#[test]
fn parse_commands_and_aliases() {
    assert_eq!("play 3".parse::<ShellCommand>(), Ok(ShellCommand::Play(TrackId(3))));
    assert_eq!("p".parse::<ShellCommand>(), Ok(ShellCommand::Toggle));
    assert_eq!("  NEXT ".parse::<ShellCommand>(), Ok(ShellCommand::Next));
    assert_eq!("b".parse::<ShellCommand>(), Ok(ShellCommand::Prev));
    assert_eq!("seek 90".parse::<ShellCommand>(), Ok(ShellCommand::Seek(90)));
    assert_eq!("seek 1:30".parse::<ShellCommand>(), Ok(ShellCommand::Seek(90)));
    assert_eq!("seek -4".parse::<ShellCommand>(), Ok(ShellCommand::Seek(-4)));
    assert_eq!("shuffle".parse::<ShellCommand>(), Ok(ShellCommand::Shuffle(None)));
    assert_eq!("shuffle on".parse::<ShellCommand>(), Ok(ShellCommand::Shuffle(Some(true))));
    assert_eq!(
        "repeat one".parse::<ShellCommand>(),
        Ok(ShellCommand::Repeat(Some(RepeatMode::One)))
    );
    assert_eq!("repeat".parse::<ShellCommand>(), Ok(ShellCommand::Repeat(None)));
    assert_eq!("vol 150".parse::<ShellCommand>(), Ok(ShellCommand::Volume(150)));
    assert_eq!(
        "search neon nights".parse::<ShellCommand>(),
        Ok(ShellCommand::Search("neon nights".to_string()))
    );
    assert_eq!("q".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
}

#[test]
fn parse_rejects_bad_input() {
    assert_eq!("".parse::<ShellCommand>(), Err(ParseCommandError::Empty));
    assert_eq!(
        "dance".parse::<ShellCommand>(),
        Err(ParseCommandError::Unknown("dance".to_string()))
    );
    assert_eq!(
        "play".parse::<ShellCommand>(),
        Err(ParseCommandError::MissingArgument("play"))
    );
    assert!(matches!(
        "play abc".parse::<ShellCommand>(),
        Err(ParseCommandError::InvalidArgument { command: "play", .. })
    ));
    assert!("seek 1:75".parse::<ShellCommand>().is_err());
    assert!("shuffle maybe".parse::<ShellCommand>().is_err());
    assert!("repeat twice".parse::<ShellCommand>().is_err());
}

#[test]
fn session_options_follow_playback_settings() {
    let mut settings = Settings::default();
    settings.playback.shuffle = true;
    settings.playback.repeat = RepeatSetting::All;
    settings.playback.volume = 30;

    let opts = session_options(&settings);
    assert!(opts.shuffle);
    assert_eq!(opts.repeat, RepeatMode::All);
    assert_eq!(opts.volume, 30);
}

#[test]
fn build_session_queues_catalog_without_playing() {
    let s = demo_session();
    assert_eq!(s.queue().len(), 5);
    assert!(s.current_track().is_none());
    assert!(!s.is_playing());
}

#[test]
fn load_catalog_defaults_to_demo() {
    let catalog = load_catalog(None, &CatalogSettings::default()).unwrap();
    assert_eq!(catalog.len(), 5);
}

#[test]
fn load_catalog_prefers_cli_path_over_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[tracks]]
id = 42
title = "Only Song"
artist = "Somebody"
duration = "2:00"
"#,
    )
    .unwrap();

    let settings = CatalogSettings {
        path: Some(dir.path().join("missing.toml")),
    };
    let catalog = load_catalog(Some(path.as_path()), &settings).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.tracks()[0].duration_secs, 120);

    assert!(load_catalog(None, &settings).is_err());
}

#[test]
fn dispatch_play_then_next_shows_mini_player() {
    let mut s = demo_session();

    let (flow, out) = run_dispatch(ShellCommand::Play(TrackId(1)), &mut s);
    assert_eq!(flow, Flow::Continue);
    assert!(out.contains("Anime Dreams - Heartbeat Symphony"));
    assert!(out.contains("0:00 / 3:45"));

    let (_, out) = run_dispatch(ShellCommand::Next, &mut s);
    assert!(out.contains("Neon Nights"));
    assert_eq!(s.current_track().unwrap().id, TrackId(2));
}

#[test]
fn dispatch_inapplicable_commands_are_quiet_no_ops() {
    let mut s = demo_session();
    let before = s.snapshot();

    for cmd in [
        ShellCommand::Toggle,
        ShellCommand::Next,
        ShellCommand::Prev,
        ShellCommand::Like,
        ShellCommand::Play(TrackId(99)),
    ] {
        let (flow, out) = run_dispatch(cmd, &mut s);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "■ nothing playing\n");
    }
    assert_eq!(s.snapshot(), before);

    let mut empty = build_session(&Settings::default(), &catalog::StaticCatalog::default());
    let (_, out) = run_dispatch(ShellCommand::Next, &mut empty);
    assert_eq!(out, "■ nothing playing\n");
}

#[test]
fn volume_argument_saturates_instead_of_failing() {
    assert_eq!(
        "vol 99999999999".parse::<ShellCommand>(),
        Ok(ShellCommand::Volume(99_999_999_999))
    );
    assert_eq!(
        "vol 999999999999999999999999".parse::<ShellCommand>(),
        Ok(ShellCommand::Volume(i64::MAX))
    );
    assert_eq!(
        "vol -999999999999999999999999".parse::<ShellCommand>(),
        Ok(ShellCommand::Volume(i64::MIN))
    );
    assert!("vol loud".parse::<ShellCommand>().is_err());

    let mut s = demo_session();
    run_dispatch(ShellCommand::Volume(99_999_999_999), &mut s);
    assert_eq!(s.volume(), 100);
    run_dispatch(ShellCommand::Volume(i64::MIN), &mut s);
    assert_eq!(s.volume(), 0);
}

#[test]
fn dispatch_seek_and_scrub_clamp() {
    let mut s = demo_session();
    s.play(TrackId(1));

    run_dispatch(ShellCommand::Seek(10_000), &mut s);
    assert_eq!(s.elapsed_secs(), 225);

    run_dispatch(ShellCommand::Back, &mut s);
    assert_eq!(s.elapsed_secs(), 220);

    run_dispatch(ShellCommand::Seek(2), &mut s);
    run_dispatch(ShellCommand::Back, &mut s);
    assert_eq!(s.elapsed_secs(), 0);

    run_dispatch(ShellCommand::Forward, &mut s);
    assert_eq!(s.elapsed_secs(), 5);
}

#[test]
fn dispatch_modes_volume_and_like() {
    let mut s = demo_session();
    s.play(TrackId(4));

    run_dispatch(ShellCommand::Repeat(None), &mut s);
    assert_eq!(s.repeat_mode(), RepeatMode::All);
    run_dispatch(ShellCommand::Repeat(Some(RepeatMode::One)), &mut s);
    assert_eq!(s.repeat_mode(), RepeatMode::One);

    run_dispatch(ShellCommand::Shuffle(None), &mut s);
    assert!(s.is_shuffled());
    run_dispatch(ShellCommand::Shuffle(Some(false)), &mut s);
    assert!(!s.is_shuffled());

    run_dispatch(ShellCommand::Volume(-5), &mut s);
    assert_eq!(s.volume(), 0);

    let (_, out) = run_dispatch(ShellCommand::Like, &mut s);
    assert!(s.is_liked());
    assert!(out.contains('♥'));
}

#[test]
fn dispatch_list_and_search() {
    let mut s = demo_session();
    s.play(TrackId(3));

    let (_, out) = run_dispatch(ShellCommand::List, &mut s);
    assert_eq!(out.lines().count(), 5);
    assert!(out.lines().any(|l| l.starts_with('>') && l.contains("Sakura Falling")));

    let (_, out) = run_dispatch(ShellCommand::Search("LOVE".to_string()), &mut s);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("Digital Love"));

    let (_, out) = run_dispatch(ShellCommand::Search("zzz".to_string()), &mut s);
    assert!(out.contains("no tracks match"));
}

#[test]
fn dispatch_quit_stops_the_shell() {
    let mut s = demo_session();
    let (flow, out) = run_dispatch(ShellCommand::Quit, &mut s);
    assert_eq!(flow, Flow::Quit);
    assert!(out.is_empty());
}

#[test]
fn shell_run_processes_lines_until_quit() {
    let shared = session::share(demo_session());
    let input = Cursor::new("play 2\n\nbogus\nvol 150\nfull\nquit\nplay 1\n");
    let mut out = Vec::new();

    shell::run(input, &mut out, &shared, &Settings::default()).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("unknown command `bogus`"));
    assert!(out.contains("Volume:  100"));
    assert!(out.contains("Song:    Neon Nights"));

    let s = shared.lock().unwrap();
    assert_eq!(s.current_track().unwrap().id, TrackId(2));
    assert_eq!(s.volume(), 100);
}

#[test]
fn shell_run_stops_at_end_of_input() {
    let shared = session::share(demo_session());
    let mut out = Vec::new();
    shell::run(Cursor::new("play 3\nnext\n"), &mut out, &shared, &Settings::default()).unwrap();
    assert_eq!(
        shared.lock().unwrap().current_track().unwrap().id,
        TrackId(4)
    );
    assert!(String::from_utf8(out).unwrap().ends_with("romeo> \n"));
}

#[test]
fn views_render_from_one_snapshot() {
    let mut s = demo_session();
    assert_eq!(mini_player_line(&s.snapshot()), "■ nothing playing");

    s.play(TrackId(2));
    s.seek(60);
    s.toggle_play();
    let snap = s.snapshot();

    assert_eq!(
        mini_player_line(&snap),
        "⏸ Cyber Romance - Neon Nights  1:00 / 4:12"
    );
    let panel = now_playing_panel(&snap);
    assert!(panel.contains("Artist:  Cyber Romance"));
    assert!(panel.contains("1:00 / -3:12"));
    assert!(panel.contains("Repeat:  off"));
}

#[test]
fn progress_bar_fills_proportionally() {
    assert_eq!(progress_bar(0, 100, 10), "[----------]");
    assert_eq!(progress_bar(50, 100, 10), "[=====-----]");
    assert_eq!(progress_bar(500, 100, 10), "[==========]");
    assert_eq!(progress_bar(5, 0, 4), "[----]");
}

#[test]
fn help_text_mentions_scrub_step() {
    let help = help_text(9);
    assert!(help.contains("scrub +/-9s"));
    assert!(help.contains("quit/q"));
}
