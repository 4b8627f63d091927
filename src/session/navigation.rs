//! Index arithmetic for skip and auto-advance.
//!
//! All helpers expect `len > 0`; callers check for an empty queue first.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::{Rng, RngExt};

use crate::catalog::TrackId;

use super::queue::Queue;

/// Next index with wraparound. Starts at the head when the loaded track
/// is not in the queue.
pub(crate) fn next_index(current: Option<usize>, len: usize) -> usize {
    match current {
        Some(i) => (i + 1) % len,
        None => 0,
    }
}

/// Previous index with wraparound. Starts at the tail when the loaded track
/// is not in the queue.
pub(crate) fn prev_index(current: Option<usize>, len: usize) -> usize {
    match current {
        Some(i) => (i + len - 1) % len,
        None => len - 1,
    }
}

/// Uniform pick among every index except `current`.
///
/// A single-track queue always yields 0.
pub(crate) fn random_other_index<R: Rng + ?Sized>(
    rng: &mut R,
    current: Option<usize>,
    len: usize,
) -> usize {
    match current {
        Some(_) if len == 1 => 0,
        Some(i) if i < len => {
            // Draw from the len - 1 other slots and step over `i`.
            let pick = rng.random_range(0..len - 1);
            if pick >= i { pick + 1 } else { pick }
        }
        _ => rng.random_range(0..len),
    }
}

/// Uniform pick among queued tracks not yet played in this pass, never `current`.
pub(crate) fn pick_unplayed<R: Rng + ?Sized>(
    rng: &mut R,
    queue: &Queue,
    played: &HashSet<TrackId>,
    current: Option<usize>,
) -> Option<usize> {
    let candidates: Vec<usize> = queue
        .tracks()
        .iter()
        .enumerate()
        .filter(|(i, t)| Some(*i) != current && !played.contains(&t.id))
        .map(|(i, _)| i)
        .collect();

    candidates.choose(rng).copied()
}
