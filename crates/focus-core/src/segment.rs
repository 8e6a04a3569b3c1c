//! Block segmentation and intensity scoring.
//!
//! # Algorithm
//!
//! 1. **Tile** the edge map into `block_size x block_size` blocks from
//!    `(0, 0)`, row-major by block. The last block of each row/column is
//!    clipped to the image, so the tiling covers every pixel exactly once.
//! 2. **Average** the grayscale edge response `(R + G + B) / 765` over the
//!    block's actual pixels.
//! 3. **Center bias**: `1 - (nx/2 + ny/2)` where `nx`, `ny` are the
//!    normalized distances of the block's nominal centre from the image
//!    centre. The nominal centre always uses the full block size, even for
//!    clipped blocks, so the factor may dip below zero near the far edges.
//! 4. **Score**: `(bias * 0.15 + average * 0.85) * 5`.

use focal_common::{FocalError, FocalResult};
use focal_model::block::Block;
use focal_model::buffer::{PixelBuffer, CHANNELS};

/// Weight of the center-bias factor in the composite score.
pub const CENTER_WEIGHT: f64 = 0.15;

/// Weight of the average edge response in the composite score.
pub const EDGE_WEIGHT: f64 = 0.85;

/// Final scale applied to the weighted blend.
pub const INTENSITY_SCALE: f64 = 5.0;

/// Maximum of `R + G + B` for 8-bit channels.
const RGB_SUM_MAX: f64 = 765.0;

/// Tile `edges` into blocks of `block_size` pixels and score each one.
pub fn segment(edges: &PixelBuffer<'_>, block_size: u32) -> FocalResult<Vec<Block>> {
    if block_size == 0 {
        return Err(FocalError::invalid_configuration(
            "block size must be a positive integer",
        ));
    }

    let tiles = tile(edges.width(), edges.height(), block_size);

    #[cfg(feature = "parallel")]
    let blocks: Vec<Block> = {
        use rayon::prelude::*;
        tiles
            .par_iter()
            .map(|t| score_tile(edges, t, block_size))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let blocks: Vec<Block> = tiles
        .iter()
        .map(|t| score_tile(edges, t, block_size))
        .collect();

    tracing::debug!(
        width = edges.width(),
        height = edges.height(),
        block_size,
        blocks = blocks.len(),
        "segmented edge map"
    );

    Ok(blocks)
}

/// Unscored block geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tile {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

fn tile(width: u32, height: u32, block_size: u32) -> Vec<Tile> {
    let step = block_size as usize;
    (0..height)
        .step_by(step)
        .flat_map(|y| {
            (0..width).step_by(step).map(move |x| Tile {
                x,
                y,
                w: block_size.min(width - x),
                h: block_size.min(height - y),
            })
        })
        .collect()
}

fn score_tile(edges: &PixelBuffer<'_>, tile: &Tile, block_size: u32) -> Block {
    let average = average_response(edges, tile);
    let half = block_size as f64 / 2.0;
    let bias = center_bias(
        edges.width(),
        edges.height(),
        tile.x as f64 + half,
        tile.y as f64 + half,
    );
    let intensity = composite_intensity(bias, average);

    tracing::trace!(
        x = tile.x,
        y = tile.y,
        w = tile.w,
        h = tile.h,
        average,
        bias,
        intensity,
        "scored block"
    );

    Block::new(tile.x, tile.y, tile.w, tile.h, intensity)
}

/// Mean of `(R + G + B) / 765` over the tile, summed left-to-right in
/// row-major pixel order.
fn average_response(edges: &PixelBuffer<'_>, tile: &Tile) -> f64 {
    let start = tile.x as usize * CHANNELS;
    let end = (tile.x + tile.w) as usize * CHANNELS;

    let sum = (tile.y..tile.y + tile.h).fold(0.0_f64, |acc, y| {
        edges.row(y)[start..end]
            .chunks_exact(CHANNELS)
            .fold(acc, |acc, px| {
                let rgb = px[0] as u32 + px[1] as u32 + px[2] as u32;
                acc + rgb as f64 / RGB_SUM_MAX
            })
    });

    sum / (tile.w as f64 * tile.h as f64)
}

/// Center-bias factor for a point `(px, py)` in a `width x height` image.
///
/// 1.0 at the image centre, 0.5 on the midpoint of an edge, 0.0 in the
/// corners. Not clamped: points beyond the image go negative.
pub fn center_bias(width: u32, height: u32, px: f64, py: f64) -> f64 {
    let hx = width as f64 / 2.0;
    let hy = height as f64 / 2.0;
    let nx = (px - hx).abs() / hx;
    let ny = (py - hy).abs() / hy;
    1.0 - (nx / 2.0 + ny / 2.0)
}

/// Blend a center-bias factor and an average edge response into a score.
pub fn composite_intensity(bias: f64, average: f64) -> f64 {
    (bias * CENTER_WEIGHT + average * EDGE_WEIGHT) * INTENSITY_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(width: u32, height: u32) -> Vec<u8> {
        vec![0u8; (width * height * 4) as usize]
    }

    fn sizes(blocks: &[Block]) -> Vec<(u32, u32, u32, u32)> {
        blocks.iter().map(|b| (b.x, b.y, b.w, b.h)).collect()
    }

    #[test]
    fn clips_edge_blocks() {
        let data = black(25, 25);
        let edges = PixelBuffer::new(&data, 25, 25).unwrap();
        let blocks = segment(&edges, 20).unwrap();

        assert_eq!(
            sizes(&blocks),
            vec![(0, 0, 20, 20), (20, 0, 5, 20), (0, 20, 20, 5), (20, 20, 5, 5)]
        );
        let area: u64 = blocks.iter().map(Block::area).sum();
        assert_eq!(area, 625);
    }

    #[test]
    fn emits_row_major_by_block() {
        let data = black(60, 40);
        let edges = PixelBuffer::new(&data, 60, 40).unwrap();
        let origins: Vec<(u32, u32)> = segment(&edges, 20)
            .unwrap()
            .iter()
            .map(|b| (b.x, b.y))
            .collect();
        assert_eq!(
            origins,
            vec![(0, 0), (20, 0), (40, 0), (0, 20), (20, 20), (40, 20)]
        );
    }

    #[test]
    fn block_larger_than_image_is_clipped_to_one_block() {
        let data = black(7, 3);
        let edges = PixelBuffer::new(&data, 7, 3).unwrap();
        assert_eq!(sizes(&segment(&edges, 20).unwrap()), vec![(0, 0, 7, 3)]);
    }

    #[test]
    fn zero_block_size_is_a_configuration_error() {
        let data = black(4, 4);
        let edges = PixelBuffer::new(&data, 4, 4).unwrap();
        assert!(matches!(
            segment(&edges, 0),
            Err(FocalError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn average_divides_by_actual_pixel_count() {
        // 25x20 white image: the clipped 5x20 block is fully white too.
        let data = vec![255u8; 25 * 20 * 4];
        let edges = PixelBuffer::new(&data, 25, 20).unwrap();
        let blocks = segment(&edges, 20).unwrap();

        let tile = Tile {
            x: 20,
            y: 0,
            w: 5,
            h: 20,
        };
        assert!((average_response(&edges, &tile) - 1.0).abs() < 1e-12);
        let bias = center_bias(25, 20, 30.0, 10.0);
        assert!((blocks[1].intensity - composite_intensity(bias, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn center_bias_landmarks() {
        assert!((center_bias(40, 40, 20.0, 20.0) - 1.0).abs() < 1e-12);
        assert!((center_bias(40, 40, 0.0, 20.0) - 0.5).abs() < 1e-12);
        assert!(center_bias(40, 40, 0.0, 0.0).abs() < 1e-12);
        assert!((center_bias(40, 40, 10.0, 10.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn nominal_offset_can_push_bias_negative() {
        // Corner block of a 25x25 image: nominal centre (30, 30) lies outside.
        let data = black(25, 25);
        let edges = PixelBuffer::new(&data, 25, 25).unwrap();
        let corner = segment(&edges, 20).unwrap()[3];
        assert!(corner.intensity < 0.0);
        let expected = composite_intensity(center_bias(25, 25, 30.0, 30.0), 0.0);
        assert!((corner.intensity - expected).abs() < 1e-12);
    }

    #[test]
    fn composite_uses_reference_weights() {
        assert!((composite_intensity(0.5, 0.0) - 0.375).abs() < 1e-12);
        assert!((composite_intensity(0.5, 1.0) - 4.625).abs() < 1e-12);
        assert!((composite_intensity(1.0, 1.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn grayscale_average_weights_channels_equally() {
        // Every pixel has R+G+B = 255, a third of the maximum.
        let pixel = [255u8, 0, 0, 0];
        let data: Vec<u8> = std::iter::repeat(pixel).take(4).flatten().collect();
        let edges = PixelBuffer::new(&data, 2, 2).unwrap();
        let tile = Tile {
            x: 0,
            y: 0,
            w: 2,
            h: 2,
        };
        assert!((average_response(&edges, &tile) - 1.0 / 3.0).abs() < 1e-12);
    }
}
