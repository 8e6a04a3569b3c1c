//! Scored image blocks and focal points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular tile of the image with its composite intensity score.
///
/// `w`/`h` equal the nominal block size except for the last block in each
/// row or column, which is clipped to the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Left edge (pixels).
    pub x: u32,
    /// Top edge (pixels).
    pub y: u32,
    /// Width (pixels).
    pub w: u32,
    /// Height (pixels).
    pub h: u32,
    /// Blend of edge density and center bias.
    pub intensity: f64,
}

impl Block {
    pub fn new(x: u32, y: u32, w: u32, h: u32, intensity: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            intensity,
        }
    }

    /// Geometric midpoint, using the actual (possibly clipped) size.
    pub fn midpoint(&self) -> Point {
        Point::new(
            self.x as f64 + self.w as f64 / 2.0,
            self.y as f64 + self.h as f64 / 2.0,
        )
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if pixel `(px, py)` lies inside this block.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Normalize to `[0.0, 1.0]` relative to a `width x height` image.
    pub fn normalized(&self, width: u32, height: u32) -> Point {
        Point::new(self.x / width as f64, self.y / height as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
