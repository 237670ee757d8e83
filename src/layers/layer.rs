//! Layer descriptor

use std::fmt;
use std::sync::Arc;

use super::Color;

/// Colour transform applied by a layer: `(color, timestamp, x, y) -> color`.
pub type ColorTransform = Arc<dyn Fn(Color, f64, usize, usize) -> Color + Send + Sync>;

/// Shared handle to an immutable layer.
pub type LayerRef = Arc<Layer>;

/// An immutable colour layer.
///
/// Stores compare layers by `index`: two handles with the same index are the
/// same layer.
#[derive(Clone)]
pub struct Layer {
    /// Stable slug used for lookup (e.g. "lighten")
    pub id: String,
    /// Priority / ordering key
    pub index: usize,
    /// Display name, also the ordering key for the sequence special
    pub name: String,
    /// Swatch colour for layer pickers
    pub background: Option<Color>,
    transform: ColorTransform,
}

impl Layer {
    /// Create a new layer
    pub fn new<F>(id: impl Into<String>, index: usize, name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Color, f64, usize, usize) -> Color + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            index,
            name: name.into(),
            background: None,
            transform: Arc::new(transform),
        }
    }

    /// Set the swatch colour
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Apply this layer's transform
    pub fn apply(&self, color: Color, timestamp: f64, x: usize, y: usize) -> Color {
        (self.transform)(color, timestamp, x, y)
    }

    /// Whether `other` is the same layer (same index)
    pub fn same_layer(&self, other: &Layer) -> bool {
        self.index == other.index
    }

    /// Wrap in a shared handle
    pub fn into_ref(self) -> LayerRef {
        Arc::new(self)
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("name", &self.name)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_passes_arguments() {
        let layer = Layer::new("pos", 0, "Position", |_, t, x, y| {
            Color::rgb(x as u8, y as u8, t as u8)
        });
        assert_eq!(layer.apply(Color::WHITE, 7.0, 3, 4), Color::rgb(3, 4, 7));
    }

    #[test]
    fn test_same_layer_by_index() {
        let a = Layer::new("a", 1, "A", |c, _, _, _| c);
        let b = Layer::new("b", 1, "B", |c, _, _, _| c.inverted());
        let c = Layer::new("c", 2, "A", |c, _, _, _| c);
        assert!(a.same_layer(&b));
        assert!(!a.same_layer(&c));
    }
}
