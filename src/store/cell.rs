//! Closed dispatch over the store variants

use super::{AdditiveLayerStore, LayerStore, SequenceLayerStore, SetLayerStore};
use crate::grid::DrawStyle;
use crate::layers::{Color, LayerRef};

/// The store held by one grid cell.
///
/// The variant is picked once from the grid's draw style and never changes.
#[derive(Debug, Clone)]
pub enum CellStore {
    Set(SetLayerStore),
    Additive(AdditiveLayerStore),
    Sequence(SequenceLayerStore),
}

impl CellStore {
    /// Create an empty store for a draw style
    pub fn for_style(style: DrawStyle) -> Self {
        match style {
            DrawStyle::Set => CellStore::Set(SetLayerStore::new()),
            DrawStyle::Additive => CellStore::Additive(AdditiveLayerStore::new()),
            DrawStyle::Sequence => CellStore::Sequence(SequenceLayerStore::new()),
        }
    }

    /// The draw style this store implements
    pub fn style(&self) -> DrawStyle {
        match self {
            CellStore::Set(_) => DrawStyle::Set,
            CellStore::Additive(_) => DrawStyle::Additive,
            CellStore::Sequence(_) => DrawStyle::Sequence,
        }
    }

    fn inner(&self) -> &dyn LayerStore {
        match self {
            CellStore::Set(store) => store,
            CellStore::Additive(store) => store,
            CellStore::Sequence(store) => store,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn LayerStore {
        match self {
            CellStore::Set(store) => store,
            CellStore::Additive(store) => store,
            CellStore::Sequence(store) => store,
        }
    }
}

impl LayerStore for CellStore {
    fn add(&mut self, layer: &LayerRef) -> bool {
        self.inner_mut().add(layer)
    }

    fn erase(&mut self, layer: &LayerRef) -> bool {
        self.inner_mut().erase(layer)
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        self.inner().get_color(start, timestamp, x, y)
    }

    fn special(&mut self) -> Option<LayerRef> {
        self.inner_mut().special()
    }

    fn layers(&self) -> Vec<LayerRef> {
        self.inner().layers()
    }

    fn len(&self) -> usize {
        self.inner().len()
    }
}
