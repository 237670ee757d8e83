//! Additive layer store: every added layer applies after all previous ones.

use std::collections::VecDeque;

use log::debug;

use super::LayerStore;
use crate::layers::{Color, LayerRef};

/// Maximum number of layers an additive cell holds
pub const ADDITIVE_CAPACITY: usize = 100;

/// Additive layer store.
///
/// - add: push a layer to be applied last
/// - erase: remove the oldest layer, whatever was selected
/// - special: reverse the application order
#[derive(Debug, Clone)]
pub struct AdditiveLayerStore {
    layers: VecDeque<LayerRef>,
    capacity: usize,
}

impl AdditiveLayerStore {
    pub fn new() -> Self {
        Self::with_capacity(ADDITIVE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.layers.len() >= self.capacity
    }
}

impl Default for AdditiveLayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore for AdditiveLayerStore {
    fn add(&mut self, layer: &LayerRef) -> bool {
        if self.is_full() {
            debug!(
                "additive store full ({} layers), dropping '{}'",
                self.capacity, layer.name
            );
            return false;
        }
        self.layers.push_back(layer.clone());
        true
    }

    fn erase(&mut self, _layer: &LayerRef) -> bool {
        self.layers.pop_front().is_some()
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        self.layers
            .iter()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) -> Option<LayerRef> {
        self.layers.make_contiguous().reverse();
        None
    }

    fn layers(&self) -> Vec<LayerRef> {
        self.layers.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.layers.len()
    }
}
