//! Layer registry
//!
//! The ordered, immutable set of layers a canvas can paint with. It is built
//! once and shared as an `Arc<LayerRegistry>` handle.

use std::collections::HashSet;
use std::sync::Arc;

use super::builtin::builtin_layers;
use super::{Layer, LayerRef};
use crate::error::{PaintError, Result};

/// Registry of available layers
#[derive(Debug, Clone)]
pub struct LayerRegistry {
    layers: Vec<LayerRef>,
}

impl LayerRegistry {
    /// Create a registry from the given layers, in display order
    ///
    /// # Errors
    /// Returns `DuplicateLayerIndex` if two layers share an index.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self> {
        let mut seen = HashSet::new();
        for layer in &layers {
            if !seen.insert(layer.index) {
                return Err(PaintError::DuplicateLayerIndex { index: layer.index });
            }
        }

        Ok(Self {
            layers: layers.into_iter().map(Arc::new).collect(),
        })
    }

    /// Create the registry of builtin layers
    pub fn builtin() -> Self {
        Self {
            layers: builtin_layers().into_iter().map(Arc::new).collect(),
        }
    }

    /// Wrap in a shared handle
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Get the layer at a display position
    pub fn get(&self, position: usize) -> Option<&LayerRef> {
        self.layers.get(position)
    }

    /// Get a layer by its priority index
    pub fn by_index(&self, index: usize) -> Option<&LayerRef> {
        self.layers.iter().find(|l| l.index == index)
    }

    /// Get a layer by its slug
    pub fn by_id(&self, id: &str) -> Option<&LayerRef> {
        self.layers.iter().find(|l| l.id.eq_ignore_ascii_case(id))
    }

    /// Resolve a user-supplied key: a display position or a slug
    pub fn resolve(&self, key: &str) -> Result<LayerRef> {
        let position = self.position_of(key)?;
        Ok(self.layers[position].clone())
    }

    /// Display position for a user-supplied key
    pub fn position_of(&self, key: &str) -> Result<usize> {
        let found = match key.parse::<usize>() {
            Ok(position) if position < self.layers.len() => Some(position),
            Ok(_) => None,
            Err(_) => self
                .layers
                .iter()
                .position(|l| l.id.eq_ignore_ascii_case(key)),
        };

        found.ok_or_else(|| PaintError::UnknownLayer {
            key: key.to_string(),
        })
    }

    /// Iterate layers in display order
    pub fn iter(&self) -> impl Iterator<Item = &LayerRef> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
