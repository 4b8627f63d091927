//! The playback session controller.
//!
//! Every command comes in two forms. `try_*` checks its precondition and
//! returns a `SessionError` without touching state when it fails. The plain
//! form is what views call: it never fails, turning rejected commands into
//! no-ops (logged at debug level) and out-of-range inputs into clamps.

use std::collections::HashSet;

use log::{debug, info};
use rand::rngs::StdRng;

use crate::catalog::{CatalogProvider, Track, TrackId};
use crate::error::{Result, SessionError};

use super::navigation::{next_index, pick_unplayed, prev_index, random_other_index};
use super::queue::Queue;
use super::types::{MAX_VOLUME, RepeatMode, SessionOptions, SessionSnapshot, TickOutcome};

#[derive(Debug)]
pub struct PlaybackSession {
    queue: Queue,
    /// Owned copy of the loaded track, independent of later queue changes.
    current_track: Option<Track>,
    is_playing: bool,
    elapsed_secs: u32,
    volume: u8,
    liked: HashSet<TrackId>,
    is_shuffled: bool,
    repeat_mode: RepeatMode,
    /// Tracks played in the current shuffle pass.
    played: HashSet<TrackId>,
    rng: StdRng,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl PlaybackSession {
    /// Create an empty session with an OS-seeded shuffle generator.
    pub fn new(options: SessionOptions) -> Self {
        Self::with_rng(options, rand::make_rng())
    }

    /// Create an empty session drawing shuffle picks from `rng`.
    pub fn with_rng(options: SessionOptions, rng: StdRng) -> Self {
        Self {
            queue: Queue::default(),
            current_track: None,
            is_playing: false,
            elapsed_secs: 0,
            volume: options.volume.min(MAX_VOLUME),
            liked: HashSet::new(),
            is_shuffled: options.shuffle,
            repeat_mode: options.repeat,
            played: HashSet::new(),
            rng,
        }
    }

    // ===== Queue =====

    /// Replace the queue with the provider's tracks.
    ///
    /// The loaded track keeps playing even if the new queue lacks it.
    pub fn load_queue(&mut self, catalog: &dyn CatalogProvider) {
        self.queue = Queue::new(catalog.list_tracks());
        self.restart_pass();
        debug!("queue loaded with {} tracks", self.queue.len());
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    // ===== Observers =====

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Whether the loaded track is liked. False when nothing is loaded.
    pub fn is_liked(&self) -> bool {
        self.current_track
            .as_ref()
            .is_some_and(|t| self.liked.contains(&t.id))
    }

    pub fn is_track_liked(&self, id: TrackId) -> bool {
        self.liked.contains(&id)
    }

    pub fn is_shuffled(&self) -> bool {
        self.is_shuffled
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            elapsed_secs: self.elapsed_secs,
            volume: self.volume,
            is_liked: self.is_liked(),
            is_shuffled: self.is_shuffled,
            repeat_mode: self.repeat_mode,
        }
    }

    // ===== Transport =====

    /// Load the queued track `id` from the start and play it.
    pub fn try_play(&mut self, id: TrackId) -> Result<()> {
        let index = self
            .queue
            .position_of(id)
            .ok_or(SessionError::UnknownTrack(id))?;
        self.load_index(index);
        self.restart_pass();
        Ok(())
    }

    pub fn play(&mut self, id: TrackId) {
        if let Err(e) = self.try_play(id) {
            debug!("play ignored: {e}");
        }
    }

    /// Flip between playing and paused. Returns the new playing state.
    pub fn try_toggle_play(&mut self) -> Result<bool> {
        if self.current_track.is_none() {
            return Err(SessionError::NoActiveTrack);
        }
        self.is_playing = !self.is_playing;
        debug!("playing: {}", self.is_playing);
        Ok(self.is_playing)
    }

    pub fn toggle_play(&mut self) {
        if let Err(e) = self.try_toggle_play() {
            debug!("toggle ignored: {e}");
        }
    }

    /// Advance playback by one second.
    ///
    /// Does nothing while paused. When the track runs out the repeat mode
    /// decides whether it restarts, the next track loads, or playback stops.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing {
            return TickOutcome::Idle;
        }
        let Some(duration) = self.current_duration() else {
            return TickOutcome::Idle;
        };

        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        if self.elapsed_secs < duration {
            return TickOutcome::Progressed;
        }

        match self.repeat_mode {
            RepeatMode::One => {
                self.elapsed_secs = 0;
                debug!("repeating current track");
                TickOutcome::Repeated
            }
            RepeatMode::Off | RepeatMode::All => self.advance_after_track(),
        }
    }

    /// Jump to `position` seconds into the loaded track.
    pub fn try_seek(&mut self, position: i64) -> Result<()> {
        let duration = self
            .current_duration()
            .ok_or(SessionError::NoActiveTrack)?;
        let secs = u32::try_from(position)
            .ok()
            .filter(|s| *s <= duration)
            .ok_or(SessionError::OutOfRangeInput {
                value: position,
                min: 0,
                max: i64::from(duration),
            })?;
        self.elapsed_secs = secs;
        Ok(())
    }

    /// Like `try_seek`, clamping out-of-range positions to the track bounds.
    pub fn seek(&mut self, position: i64) {
        match self.try_seek(position) {
            Ok(()) => {}
            Err(SessionError::OutOfRangeInput { min, max, .. }) => {
                self.elapsed_secs = u32::try_from(position.clamp(min, max)).unwrap_or(0);
            }
            Err(e) => debug!("seek ignored: {e}"),
        }
    }

    /// Scrub forwards (positive) or backwards (negative) by `delta` seconds.
    pub fn seek_by(&mut self, delta: i64) {
        if self.current_track.is_none() {
            debug!("seek ignored: {}", SessionError::NoActiveTrack);
            return;
        }
        self.seek(i64::from(self.elapsed_secs).saturating_add(delta));
    }

    // ===== Navigation =====

    pub fn try_skip_next(&mut self) -> Result<()> {
        if self.queue.is_empty() {
            return Err(SessionError::EmptyQueue);
        }
        if self.current_track.is_none() {
            return Err(SessionError::NoActiveTrack);
        }
        let current = self.current_index();
        let index = if self.is_shuffled {
            random_other_index(&mut self.rng, current, self.queue.len())
        } else {
            next_index(current, self.queue.len())
        };
        self.load_index(index);
        Ok(())
    }

    pub fn skip_next(&mut self) {
        if let Err(e) = self.try_skip_next() {
            debug!("skip next ignored: {e}");
        }
    }

    pub fn try_skip_previous(&mut self) -> Result<()> {
        if self.queue.is_empty() {
            return Err(SessionError::EmptyQueue);
        }
        if self.current_track.is_none() {
            return Err(SessionError::NoActiveTrack);
        }
        let current = self.current_index();
        let index = if self.is_shuffled {
            random_other_index(&mut self.rng, current, self.queue.len())
        } else {
            prev_index(current, self.queue.len())
        };
        self.load_index(index);
        Ok(())
    }

    pub fn skip_previous(&mut self) {
        if let Err(e) = self.try_skip_previous() {
            debug!("skip previous ignored: {e}");
        }
    }

    // ===== Modes =====

    /// Turn shuffle on or off. The loaded track is left alone.
    ///
    /// Re-sending the current state keeps the shuffle pass intact.
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.is_shuffled == enabled {
            return;
        }
        debug!("shuffle: {enabled}");
        self.is_shuffled = enabled;
        self.restart_pass();
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.set_shuffle(!self.is_shuffled);
        self.is_shuffled
    }

    pub fn set_repeat(&mut self, mode: RepeatMode) {
        debug!("repeat: {}", mode.label());
        self.repeat_mode = mode;
    }

    /// Step through `Off -> All -> One -> Off` and return the new mode.
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.set_repeat(self.repeat_mode.cycled());
        self.repeat_mode
    }

    pub fn try_set_volume(&mut self, level: i32) -> Result<()> {
        let level = u8::try_from(level)
            .ok()
            .filter(|l| *l <= MAX_VOLUME)
            .ok_or(SessionError::OutOfRangeInput {
                value: i64::from(level),
                min: 0,
                max: i64::from(MAX_VOLUME),
            })?;
        self.volume = level;
        Ok(())
    }

    /// Set the volume, clamping to `0..=100`.
    pub fn set_volume(&mut self, level: i32) {
        if self.try_set_volume(level).is_err() {
            let clamped = level.clamp(0, i32::from(MAX_VOLUME));
            debug!("volume {level} clamped to {clamped}");
            self.volume = u8::try_from(clamped).unwrap_or(MAX_VOLUME);
        }
    }

    /// Like or unlike the loaded track. Returns the new liked state.
    pub fn try_toggle_like(&mut self) -> Result<bool> {
        let id = self
            .current_track
            .as_ref()
            .map(|t| t.id)
            .ok_or(SessionError::NoActiveTrack)?;
        if !self.liked.insert(id) {
            self.liked.remove(&id);
        }
        Ok(self.liked.contains(&id))
    }

    pub fn toggle_like(&mut self) {
        if let Err(e) = self.try_toggle_like() {
            debug!("like ignored: {e}");
        }
    }

    // ===== Internals =====

    fn current_duration(&self) -> Option<u32> {
        self.current_track.as_ref().map(|t| t.duration_secs)
    }

    fn current_index(&self) -> Option<usize> {
        self.current_track
            .as_ref()
            .and_then(|t| self.queue.position_of(t.id))
    }

    fn load_index(&mut self, index: usize) {
        let Some(track) = self.queue.get(index).cloned() else {
            return;
        };
        info!("now playing {} ({})", track.display(), track.id);
        self.played.insert(track.id);
        self.current_track = Some(track);
        self.elapsed_secs = 0;
        self.is_playing = true;
    }

    /// Start a new shuffle pass containing only the loaded track.
    fn restart_pass(&mut self) {
        self.played.clear();
        if let Some(t) = &self.current_track {
            self.played.insert(t.id);
        }
    }

    fn stop(&mut self) {
        self.is_playing = false;
        self.elapsed_secs = 0;
        info!("end of queue reached, playback stopped");
    }

    /// End-of-track navigation for repeat `Off` and `All`.
    fn advance_after_track(&mut self) -> TickOutcome {
        let len = self.queue.len();
        if len == 0 {
            self.stop();
            return TickOutcome::Stopped;
        }
        let current = self.current_index();

        if self.is_shuffled {
            if let Some(index) = pick_unplayed(&mut self.rng, &self.queue, &self.played, current) {
                self.load_index(index);
                return TickOutcome::Advanced;
            }
            if self.repeat_mode == RepeatMode::Off {
                self.stop();
                return TickOutcome::Stopped;
            }
            let index = random_other_index(&mut self.rng, current, len);
            self.load_index(index);
            self.restart_pass();
            return TickOutcome::Advanced;
        }

        match current {
            Some(i) if i + 1 >= len && self.repeat_mode == RepeatMode::Off => {
                self.stop();
                TickOutcome::Stopped
            }
            _ => {
                self.load_index(next_index(current, len));
                TickOutcome::Advanced
            }
        }
    }
}
