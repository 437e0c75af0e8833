//! Two-tile background scroll
//!
//! Two copies of the backdrop sit one tile width apart. Each tick both move
//! left; a tile that has fully left the viewport is re-anchored behind the
//! other one, so the strip never shows a seam.

use serde::{Deserialize, Serialize};

/// Pair of horizontal tile offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundScroll {
    /// Left edge of each tile
    pub offsets: [i32; 2],
    /// Width of one tile (the viewport width)
    pub width: i32,
}

impl BackgroundScroll {
    pub fn new(width: i32) -> Self {
        Self {
            offsets: [0, width],
            width,
        }
    }

    /// Re-anchor both tiles to their starting positions
    pub fn reset(&mut self) {
        self.offsets = [0, self.width];
    }

    /// Scroll left by the whole-pixel part of `speed`
    pub fn advance(&mut self, speed: f64) {
        let step = speed as i32;
        self.offsets[0] -= step;
        self.offsets[1] -= step;
        if self.offsets[0] + self.width <= 0 {
            self.offsets[0] = self.offsets[1] + self.width;
        }
        if self.offsets[1] + self.width <= 0 {
            self.offsets[1] = self.offsets[0] + self.width;
        }
    }
}
