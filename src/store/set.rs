//! Set layer store: a single layer at a time, or nothing at all.

use log::trace;

use super::LayerStore;
use crate::layers::{Color, LayerRef};

/// Set layer store.
///
/// - add: replace the held layer
/// - erase: drop the held layer, whatever was selected
/// - special: toggle inversion of the output colour
#[derive(Debug, Clone, Default)]
pub struct SetLayerStore {
    layer: Option<LayerRef>,
    inverted: bool,
}

impl SetLayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The held layer, if any
    pub fn layer(&self) -> Option<&LayerRef> {
        self.layer.as_ref()
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl LayerStore for SetLayerStore {
    fn add(&mut self, layer: &LayerRef) -> bool {
        if let Some(held) = &self.layer {
            if held.same_layer(layer) {
                return false;
            }
        }
        self.layer = Some(layer.clone());
        true
    }

    fn erase(&mut self, _layer: &LayerRef) -> bool {
        self.layer.take().is_some()
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        let color = match &self.layer {
            Some(layer) => layer.apply(start, timestamp, x, y),
            None => start,
        };
        if self.inverted {
            color.inverted()
        } else {
            color
        }
    }

    fn special(&mut self) -> Option<LayerRef> {
        self.inverted = !self.inverted;
        trace!("set store inverted={}", self.inverted);
        None
    }

    fn layers(&self) -> Vec<LayerRef> {
        self.layer.iter().cloned().collect()
    }
}
