//! Edge-magnitude computation by 2D convolution.
//!
//! Each of the R, G and B channels is filtered independently: the kernel
//! weights are applied (unflipped) to the neighbourhood centred on the
//! output pixel, the integer sum is divided by the kernel divisor, rounded
//! to nearest and clamped to `[0, 255]`. Alpha is copied through.
//!
//! # Border handling
//!
//! Clamp-to-edge: a neighbourhood sample that falls outside the image
//! reuses the nearest in-bounds pixel. A flat image therefore produces a
//! flat response all the way to its borders.

use focal_common::FocalResult;
use focal_model::buffer::{EdgeBuffer, PixelBuffer, CHANNELS};
use focal_model::kernel::Kernel;

/// Convolve `src` with `kernel`, producing an edge map of the same shape.
pub fn convolve(src: &PixelBuffer<'_>, kernel: &Kernel) -> FocalResult<EdgeBuffer> {
    let stride = src.stride();
    let mut out = vec![0u8; src.data().len()];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| convolve_row(src, kernel, y as u32, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| convolve_row(src, kernel, y as u32, row));
    }

    tracing::debug!(
        width = src.width(),
        height = src.height(),
        kernel_size = kernel.size(),
        "computed edge map"
    );

    EdgeBuffer::from_raw(src.width(), src.height(), out)
}

/// Fill output row `y`.
fn convolve_row(src: &PixelBuffer<'_>, kernel: &Kernel, y: u32, out: &mut [u8]) {
    let radius = kernel.radius() as i64;
    let max_x = src.width() as i64 - 1;
    let max_y = src.height() as i64 - 1;
    let src_row = src.row(y);

    for (x, dst) in out.chunks_exact_mut(CHANNELS).enumerate() {
        let mut acc = [0i64; 3];

        for ky in 0..kernel.size() {
            let sy = (y as i64 + ky as i64 - radius).clamp(0, max_y) as u32;
            let row = src.row(sy);
            for kx in 0..kernel.size() {
                let weight = kernel.at(kx, ky) as i64;
                if weight == 0 {
                    continue;
                }
                let sx = (x as i64 + kx as i64 - radius).clamp(0, max_x) as usize;
                let sample = &row[sx * CHANNELS..sx * CHANNELS + 3];
                for (sum, &value) in acc.iter_mut().zip(sample) {
                    *sum += weight * value as i64;
                }
            }
        }

        for (channel, sum) in dst.iter_mut().zip(acc) {
            *channel = normalize(sum, kernel.divisor());
        }
        dst[3] = src_row[x * CHANNELS + 3];
    }
}

#[inline]
fn normalize(sum: i64, divisor: i32) -> u8 {
    (sum as f64 / divisor as f64).round().clamp(0.0, 255.0) as u8
}
