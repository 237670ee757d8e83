//! Layerpaint - Layered Colour Canvas
//!
//! A grid of cells, each holding a stack of colour layers, with undoable and
//! redoable edits and a deterministic replay of the whole edit history.
//!
//! # Architecture
//!
//! - `layers`: immutable colour transforms and the registry supplying them
//! - `store`: per-cell state (Set, Additive, Sequence) deciding how layers combine
//! - `grid`: the fixed-size matrix of stores plus the brush
//! - `history`: paint actions, the undo tracker and the replay tracker
//! - `session`: the controller wiring all of the above for a front end

pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod layers;
pub mod session;
pub mod store;

pub use config::SessionConfig;
pub use error::{PaintError, Result};
pub use grid::{DrawStyle, Frame, Grid};
pub use history::{PaintAction, PaintStep, ReplayTracker, UndoTracker};
pub use layers::{Color, Layer, LayerRef, LayerRegistry};
pub use session::PaintSession;
pub use store::{CellStore, LayerStore};
