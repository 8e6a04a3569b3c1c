//! Estimation results exposed as plain data for debug consumers.

use serde::{Deserialize, Serialize};

use crate::block::{Block, Point};

/// Everything one estimation run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusReport {
    /// Source image width in pixels.
    pub width: u32,
    /// Source image height in pixels.
    pub height: u32,
    /// Nominal block size used for tiling.
    pub block_size: u32,
    /// Estimated focal point.
    pub point: Point,
    /// The highest-scoring block.
    pub focal: Block,
    /// Every scored block, in emission order.
    pub blocks: Vec<Block>,
}

impl FocusReport {
    /// Number of block columns in the tiling.
    pub fn columns(&self) -> u32 {
        self.width.div_ceil(self.block_size)
    }

    /// Number of block rows in the tiling.
    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.block_size)
    }

    /// Index of the focal block within `blocks`.
    pub fn focal_index(&self) -> Option<usize> {
        self.blocks.iter().position(|b| *b == self.focal)
    }

    /// Focal point normalized to `[0.0, 1.0]`.
    pub fn normalized_point(&self) -> Point {
        self.point.normalized(self.width, self.height)
    }
}
