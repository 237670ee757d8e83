//! Layer Store Module
//!
//! Per-cell state deciding which layers are active and how they combine.
//! Three variants share one capability contract:
//! - Set: at most one layer, special inverts the output
//! - Additive: FIFO of layers, special reverses the order
//! - Sequence: one entry per layer index, special drops the median name

mod additive;
mod cell;
mod sequence;
mod set;

pub use additive::{AdditiveLayerStore, ADDITIVE_CAPACITY};
pub use cell::CellStore;
pub use sequence::{SequenceLayerStore, SEQUENCE_CAPACITY};
pub use set::SetLayerStore;

use crate::layers::{Color, LayerRef};

/// Capability contract shared by every store variant.
///
/// None of these operations fail: "nothing happened" is reported through the
/// returned `bool`.
pub trait LayerStore {
    /// Add a layer. Returns true if the visible state could have changed.
    fn add(&mut self, layer: &LayerRef) -> bool;

    /// Undo an add for this layer. Returns true if the store was modified.
    fn erase(&mut self, layer: &LayerRef) -> bool;

    /// Colour this cell shows, given the current layers. Never mutates.
    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color;

    /// Variant-specific transform of the store's own state.
    ///
    /// Returns the layer the transform discarded, if any.
    fn special(&mut self) -> Option<LayerRef>;

    /// Held layers in application order
    fn layers(&self) -> Vec<LayerRef>;

    fn len(&self) -> usize {
        self.layers().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
