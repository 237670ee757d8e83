//! Grid Module
//!
//! A fixed-size matrix of cell stores, all of one draw style, plus the
//! active brush size.

mod frame;
mod style;

pub use frame::Frame;
pub use style::DrawStyle;

use log::debug;

use crate::error::{PaintError, Result};
use crate::history::{PaintStep, SpecialUndo};
use crate::layers::Color;
use crate::store::{CellStore, LayerStore};

/// Default brush radius
pub const DEFAULT_BRUSH_SIZE: usize = 2;

/// Largest brush radius
pub const MAX_BRUSH: usize = 5;

/// Smallest brush radius
pub const MIN_BRUSH: usize = 0;

/// The canvas: `width * height` cells of one store variant.
#[derive(Debug, Clone)]
pub struct Grid {
    style: DrawStyle,
    width: usize,
    height: usize,
    /// Row-major, index `y * width + x`
    cells: Vec<CellStore>,
    brush_size: usize,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if either dimension is zero or the cell
    /// count overflows.
    pub fn new(style: DrawStyle, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidDimensions { width, height });
        }

        let count = width
            .checked_mul(height)
            .ok_or(PaintError::InvalidDimensions { width, height })?;
        let cells = (0..count)
            .map(|_| CellStore::for_style(style))
            .collect();

        debug!("created {}x{} grid with {} style", width, height, style);

        Ok(Self {
            style,
            width,
            height,
            cells,
            brush_size: DEFAULT_BRUSH_SIZE,
        })
    }

    /// Create a grid from a draw style name ("SET", "ADD", "SEQUENCE")
    ///
    /// # Errors
    /// Returns `UnknownDrawStyle` for any other name.
    pub fn from_style_name(style: &str, width: usize, height: usize) -> Result<Self> {
        Self::new(style.parse()?, width, height)
    }

    pub fn draw_style(&self) -> DrawStyle {
        self.style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Store of one cell, `None` outside the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<&CellStore> {
        if !self.contains(x, y) {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Mutable store of one cell, `None` outside the grid
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut CellStore> {
        if !self.contains(x, y) {
            return None;
        }
        self.cells.get_mut(y * self.width + x)
    }

    // ========================================================================
    // Brush
    // ========================================================================

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Set the brush size, clamped to `[MIN_BRUSH, MAX_BRUSH]`
    pub fn set_brush_size(&mut self, size: usize) -> usize {
        self.brush_size = size.clamp(MIN_BRUSH, MAX_BRUSH);
        self.brush_size
    }

    /// Grow the brush by one, unless already at `MAX_BRUSH`
    pub fn increase_brush_size(&mut self) -> usize {
        if self.brush_size < MAX_BRUSH {
            self.brush_size += 1;
        }
        self.brush_size
    }

    /// Shrink the brush by one, unless already at `MIN_BRUSH`
    pub fn decrease_brush_size(&mut self) -> usize {
        if self.brush_size > MIN_BRUSH {
            self.brush_size -= 1;
        }
        self.brush_size
    }

    /// In-bounds cells within Manhattan distance `brush_size` of `(px, py)`,
    /// row-major
    pub fn brush_cells(&self, px: usize, py: usize) -> Vec<(usize, usize)> {
        let radius = self.brush_size;
        let y_start = py.saturating_sub(radius);
        let y_end = py.saturating_add(radius).min(self.height.saturating_sub(1));

        let mut cells = Vec::new();
        for y in y_start..=y_end {
            let reach = radius - py.abs_diff(y);
            let x_start = px.saturating_sub(reach);
            let x_end = px.saturating_add(reach).min(self.width.saturating_sub(1));
            for x in x_start..=x_end {
                if self.contains(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    // ========================================================================
    // Whole-grid operations
    // ========================================================================

    /// Run `special` on every cell, row-major
    ///
    /// Returns how to reverse the sweep: re-running it for styles where
    /// special is an involution, otherwise restoring the discarded layers.
    pub fn special(&mut self) -> SpecialUndo {
        let mut removed = Vec::new();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if let Some(layer) = cell.special() {
                removed.push(PaintStep::new((i % self.width, i / self.width), layer));
            }
        }

        if self.style.special_is_involution() {
            SpecialUndo::Reapply
        } else {
            debug!("special removed {} sequence entries", removed.len());
            SpecialUndo::Restore(removed.into())
        }
    }

    /// Evaluate every cell over `background` at `timestamp`
    pub fn render(&self, background: Color, timestamp: f64) -> Frame {
        let pixels = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| cell.get_color(background, timestamp, i % self.width, i / self.width))
            .collect();
        Frame::new(self.width, self.height, pixels)
    }
}
