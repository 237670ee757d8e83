//! History Module
//!
//! Edits are captured as immutable `PaintAction` commands:
//! - `UndoTracker`: bounded two-stack LIFO undo/redo
//! - `ReplayTracker`: bounded FIFO log replayed in chronological order
//! - `ReplayClock`: caller-side cadence for stepping a replay

mod action;
mod clock;
mod replay;
mod undo;

pub use action::{PaintAction, PaintStep, SpecialUndo};
pub use clock::{ReplayClock, DEFAULT_REPLAY_INTERVAL};
pub use replay::{ReplayEntry, ReplayState, ReplayTracker, DEFAULT_REPLAY_CAPACITY};
pub use undo::{UndoTracker, DEFAULT_UNDO_CAPACITY};
