//! Replay recorder/player
//!
//! Records `(action, direction)` pairs in the order they happened and plays
//! them back one step at a time against a fresh grid.
//!
//! State machine: `Recording` (initial) -> `Replaying` (terminal). Once
//! replaying, nothing more is recorded and the log is consumed front to back.

use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace, warn};

use super::PaintAction;
use crate::grid::Grid;

/// Default maximum number of recorded entries.
pub const DEFAULT_REPLAY_CAPACITY: usize = 10_000;

/// Replay tracker states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayState {
    /// Accepting new entries (default state)
    #[default]
    Recording,
    /// Playing back; no longer accepting entries
    Replaying,
}

impl fmt::Display for ReplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayState::Recording => write!(f, "Recording"),
            ReplayState::Replaying => write!(f, "Replaying"),
        }
    }
}

/// One recorded edit and the direction it was applied in
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayEntry {
    pub action: PaintAction,
    /// True if the action was undone, false for draws, specials and redos
    pub is_undo: bool,
}

/// Bounded chronological log of edits.
///
/// Cloning is cheap (actions share their steps), which lets a caller replay
/// a copy while keeping its own recording.
#[derive(Debug, Clone)]
pub struct ReplayTracker {
    entries: VecDeque<ReplayEntry>,
    capacity: usize,
    state: ReplayState,
    dropped: usize,
}

impl Default for ReplayTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayTracker {
    /// Create a tracker with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REPLAY_CAPACITY)
    }

    /// Create a tracker holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            state: ReplayState::Recording,
            dropped: 0,
        }
    }

    /// Record an action.
    ///
    /// `is_undo` marks an undo; draws, specials and redos pass `false`.
    /// Returns `false` if the entry was not recorded: the log is full, or the
    /// tracker is already replaying.
    pub fn add_action(&mut self, action: PaintAction, is_undo: bool) -> bool {
        if self.state == ReplayState::Replaying {
            debug!("replay in progress, not recording '{}'", action.description());
            return false;
        }

        if self.entries.len() >= self.capacity {
            warn!(
                "replay log full ({} entries), dropping '{}'",
                self.capacity,
                action.description()
            );
            self.dropped += 1;
            return false;
        }

        self.entries.push_back(ReplayEntry { action, is_undo });
        true
    }

    /// Stop recording and start playing back.
    ///
    /// The log itself is the playback cursor, so there is nothing else to
    /// reset. Calling this again has no effect.
    pub fn start_replay(&mut self) {
        if self.state == ReplayState::Recording {
            debug!("starting replay of {} entries", self.entries.len());
            self.state = ReplayState::Replaying;
        }
    }

    /// Play the oldest remaining entry on `grid`.
    ///
    /// Returns `true` if there was nothing left to play (no effect),
    /// `false` otherwise. A tracker still recording is sealed first.
    pub fn play_next_action(&mut self, grid: &mut Grid) -> bool {
        self.start_replay();

        let Some(entry) = self.entries.pop_front() else {
            return true;
        };

        trace!(
            "replaying {}{} ({} left)",
            if entry.is_undo { "undo of " } else { "" },
            entry.action.description(),
            self.entries.len()
        );

        if entry.is_undo {
            entry.action.undo_apply(grid);
        } else {
            entry.action.redo_apply(grid);
        }
        false
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn is_replaying(&self) -> bool {
        self.state == ReplayState::Replaying
    }

    /// Number of entries recorded and not yet played
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries refused because the log was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Entries still to play, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &ReplayEntry> {
        self.entries.iter()
    }
}
