//! Statistics derived from a decoded replay.

use serde::Serialize;

use crate::replay::types::{NoteEventKind, Replay};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    /// Mean of the per-frame FPS values, `None` when there are no frames.
    pub average_fps: Option<f64>,
    pub good_cuts: usize,
    pub bad_cuts: usize,
    pub misses: usize,
    pub bombs: usize,
    pub unknown_events: usize,
    /// Every recorded note event was a good cut.
    pub full_combo: bool,
    pub wall_hits: usize,
    /// Seconds, saturating at the `i64` bounds.
    pub total_pause_duration: i64,
    pub longest_pause: Option<i64>,
}

impl ReplaySummary {
    pub fn from_replay(replay: &Replay) -> Self {
        let average_fps = if replay.frames.is_empty() {
            None
        } else {
            let total: f64 = replay.frames.iter().map(|f| f64::from(f.fps)).sum();
            Some(total / replay.frames.len() as f64)
        };

        let (mut good_cuts, mut bad_cuts, mut misses, mut bombs, mut unknown_events) =
            (0, 0, 0, 0, 0);
        for note in &replay.notes {
            match note.kind {
                NoteEventKind::Good(_) => good_cuts += 1,
                NoteEventKind::Bad(_) => bad_cuts += 1,
                NoteEventKind::Miss => misses += 1,
                NoteEventKind::Bomb => bombs += 1,
                NoteEventKind::Unknown(_) => unknown_events += 1,
            }
        }

        ReplaySummary {
            average_fps,
            good_cuts,
            bad_cuts,
            misses,
            bombs,
            unknown_events,
            full_combo: good_cuts == replay.notes.len(),
            wall_hits: replay.walls.len(),
            total_pause_duration: replay
                .pauses
                .iter()
                .fold(0i64, |acc, p| acc.saturating_add(p.duration)),
            longest_pause: replay.pauses.iter().map(|p| p.duration).max(),
        }
    }
}

impl From<&Replay> for ReplaySummary {
    fn from(replay: &Replay) -> Self {
        Self::from_replay(replay)
    }
}
