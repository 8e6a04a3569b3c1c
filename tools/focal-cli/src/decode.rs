//! Image acquisition: decode files into RGBA pixel buffers.

use std::path::Path;

use anyhow::Context;
use focal_common::FocalResult;
use focal_model::PixelBuffer;
use image::RgbaImage;

/// Decode an image from disk and convert to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> anyhow::Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .into_rgba8();
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );
    Ok(img)
}

/// Borrow a decoded image as a validated pixel buffer.
pub fn as_pixel_buffer(img: &RgbaImage) -> FocalResult<PixelBuffer<'_>> {
    PixelBuffer::new(img.as_raw(), img.width(), img.height())
}
