//! Sequence layer store: each layer type is applied or not, in index order.

use std::collections::BTreeMap;

use log::debug;

use super::LayerStore;
use crate::layers::{Color, LayerRef};

/// Maximum number of distinct layers a sequence cell holds
pub const SEQUENCE_CAPACITY: usize = 20;

/// Sequence layer store.
///
/// - add: ensure this layer type is applied
/// - erase: ensure this layer type is not applied
/// - special: of the applied layers, remove the one with the median name;
///   with two median names the lexicographically smaller one goes
#[derive(Debug, Clone)]
pub struct SequenceLayerStore {
    /// Keyed by layer index, so iteration is application order
    layers: BTreeMap<usize, LayerRef>,
    capacity: usize,
}

impl SequenceLayerStore {
    pub fn new() -> Self {
        Self::with_capacity(SEQUENCE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: BTreeMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a layer with this index is applied
    pub fn contains(&self, index: usize) -> bool {
        self.layers.contains_key(&index)
    }

    /// Index of the entry `special` would remove
    fn median_index(&self) -> Option<usize> {
        let mut by_name: Vec<&LayerRef> = self.layers.values().collect();
        if by_name.is_empty() {
            return None;
        }
        by_name.sort_by(|a, b| a.name.cmp(&b.name).then(a.index.cmp(&b.index)));

        // Odd count: the middle. Even count: the lower of the two middles.
        let position = (by_name.len() - 1) / 2;
        Some(by_name[position].index)
    }
}

impl Default for SequenceLayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore for SequenceLayerStore {
    fn add(&mut self, layer: &LayerRef) -> bool {
        if self.layers.contains_key(&layer.index) {
            return false;
        }
        if self.layers.len() >= self.capacity {
            debug!(
                "sequence store full ({} layers), dropping '{}'",
                self.capacity, layer.name
            );
            return false;
        }
        self.layers.insert(layer.index, layer.clone());
        true
    }

    fn erase(&mut self, layer: &LayerRef) -> bool {
        self.layers.remove(&layer.index).is_some()
    }

    fn get_color(&self, start: Color, timestamp: f64, x: usize, y: usize) -> Color {
        self.layers
            .values()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    fn special(&mut self) -> Option<LayerRef> {
        let index = self.median_index()?;
        self.layers.remove(&index)
    }

    fn layers(&self) -> Vec<LayerRef> {
        self.layers.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.layers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_layers::digit;

    fn names(store: &SequenceLayerStore) -> Vec<String> {
        store.layers().iter().map(|l| l.name.clone()).collect()
    }

    #[test]
    fn test_applies_in_index_order() {
        let mut store = SequenceLayerStore::new();
        store.add(&digit(2, "b"));
        store.add(&digit(1, "a"));
        store.add(&digit(3, "c"));

        assert_eq!(names(&store), vec!["a", "b", "c"]);
        assert_eq!(store.get_color(Color::BLACK, 0.0, 0, 0).g, 123);
    }

    #[test]
    fn test_duplicate_index_is_noop() {
        let mut store = SequenceLayerStore::new();
        assert!(store.add(&digit(4, "d")));
        assert!(!store.add(&digit(4, "other name")));
        assert_eq!(names(&store), vec!["d"]);
    }

    #[test]
    fn test_erase_by_index() {
        let mut store = SequenceLayerStore::new();
        store.add(&digit(1, "a"));
        store.add(&digit(2, "b"));

        assert!(store.erase(&digit(1, "renamed")));
        assert!(!store.erase(&digit(1, "a")));
        assert!(!store.erase(&digit(9, "z")));
        assert_eq!(names(&store), vec!["b"]);
    }

    #[test]
    fn test_special_odd_removes_middle_name() {
        let mut store = SequenceLayerStore::new();
        store.add(&digit(1, "a"));
        store.add(&digit(2, "b"));
        store.add(&digit(3, "c"));

        let removed = store.special().unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&store), vec!["a", "c"]);
    }

    #[test]
    fn test_special_even_removes_lower_middle() {
        let mut store = SequenceLayerStore::new();
        store.add(&digit(1, "a"));
        store.add(&digit(2, "b"));
        assert_eq!(store.special().unwrap().name, "a");

        let mut store = SequenceLayerStore::new();
        for (index, name) in [(0, "delta"), (1, "alpha"), (2, "charlie"), (3, "bravo")] {
            store.add(&digit(index, name));
        }
        // sorted: alpha bravo charlie delta -> bravo
        assert_eq!(store.special().unwrap().name, "bravo");
    }

    #[test]
    fn test_special_orders_by_name_not_index() {
        let mut store = SequenceLayerStore::new();
        store.add(&digit(1, "zulu"));
        store.add(&digit(2, "mike"));
        store.add(&digit(3, "alpha"));

        assert_eq!(store.special().unwrap().index, 2);
    }

    #[test]
    fn test_special_on_empty_is_noop() {
        let mut store = SequenceLayerStore::new();
        assert!(store.special().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_special_tied_names_use_index() {
        let mut store = SequenceLayerStore::new();
        store.add(&digit(5, "same"));
        store.add(&digit(2, "same"));
        // Even count, lower of the two by (name, index)
        assert_eq!(store.special().unwrap().index, 2);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut store = SequenceLayerStore::new();
        for i in 0..SEQUENCE_CAPACITY {
            assert!(store.add(&digit(i, "x")));
        }
        assert!(!store.add(&digit(SEQUENCE_CAPACITY, "x")));
        assert_eq!(store.len(), SEQUENCE_CAPACITY);
        assert!(!store.contains(SEQUENCE_CAPACITY));
    }
}
