//! Layer Model Module
//!
//! Layers are immutable colour transforms supplied by a registry:
//! - `Color`: 8-bit RGB value the canvas works in
//! - `Layer`: one named transform with a priority index
//! - `LayerRegistry`: the ordered, read-only set of available layers

mod builtin;
mod color;
mod layer;
mod registry;

pub use color::Color;
pub use layer::{ColorTransform, Layer, LayerRef};
pub use registry::LayerRegistry;
