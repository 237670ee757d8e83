//! Rendered grid snapshot

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::layers::Color;

/// The colours of every cell at one moment, row-major with row 0 = y 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Color>,
}

impl Frame {
    pub(crate) fn new(width: usize, height: usize, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Colour of one cell
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Rows of colours, y 0 first
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width)
    }

    /// One line per row of space-separated `#rrggbb` values
    pub fn to_text(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|c| c.to_hex())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// SHA-256 hex digest over the dimensions and every pixel
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.width as u64).to_le_bytes());
        hasher.update((self.height as u64).to_le_bytes());
        for pixel in &self.pixels {
            hasher.update(pixel.channels());
        }
        format!("{:x}", hasher.finalize())
    }
}
