//! RGBA pixel buffers.
//!
//! Pixels are 4 bytes (R, G, B, A), row-major, with a stride of
//! `width * 4` bytes and no padding between rows.

use focal_common::{rgba_len, FocalError, FocalResult};

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Borrowed, validated view of a caller-owned RGBA image.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as a `width x height` RGBA image.
    ///
    /// Fails with `InvalidImageShape` when either dimension is zero or the
    /// byte length is not exactly `width * height * 4`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> FocalResult<Self> {
        if width == 0 || height == 0 || data.len() != rgba_len(width, height) {
            return Err(FocalError::invalid_shape(width, height, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Bytes of row `y`. Panics if `y` is out of range.
    pub fn row(&self, y: u32) -> &'a [u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// RGBA value at `(x, y)`. Panics if out of range.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Owned RGBA edge-magnitude map with the same shape as its source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl EdgeBuffer {
    /// Take ownership of `data` as a `width x height` RGBA image.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> FocalResult<Self> {
        PixelBuffer::new(&data, width, height)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow as a read-only `PixelBuffer` view.
    pub fn as_view(&self) -> PixelBuffer<'_> {
        PixelBuffer {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    /// Consume the buffer, returning the raw RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
