//! Debug overlay rendering.
//!
//! The canvas is twice as wide as the source image: the edge map on the
//! left, the original on the right. On both halves each block is drawn as a
//! half-transparent red disc whose shade and radius scale with its
//! intensity, and the focal block gets a blue disc of the same geometry on
//! top.

use focal_model::{Block, EdgeBuffer, FocusReport};
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, Blend};

/// Alpha of every disc (about 50%).
const DISC_ALPHA: u8 = 128;

/// Where and how large to draw a block's disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub center: (i32, i32),
    pub radius: i32,
    pub shade: u8,
}

impl Disc {
    /// Disc for `block`, or `None` when its intensity leaves nothing to draw.
    pub fn for_block(block: &Block) -> Option<Self> {
        let radius = (block.w as f64 / 2.0 * block.intensity) as i32;
        if radius <= 0 {
            return None;
        }
        let mid = block.midpoint();
        Some(Self {
            center: (mid.x as i32, mid.y as i32),
            radius,
            shade: (255.0 * block.intensity).clamp(0.0, 255.0) as u8,
        })
    }
}

/// Compose the side-by-side debug canvas.
pub fn render_overlay(
    original: &RgbaImage,
    edges: EdgeBuffer,
    report: &FocusReport,
) -> anyhow::Result<RgbaImage> {
    let (width, height) = (edges.width(), edges.height());
    let edge_image = RgbaImage::from_raw(width, height, edges.into_raw())
        .ok_or_else(|| anyhow::anyhow!("Edge map does not match its dimensions"))?;

    let mut canvas = Blend(RgbaImage::new(width * 2, height));
    imageops::replace(&mut canvas.0, &edge_image, 0, 0);
    imageops::replace(&mut canvas.0, original, width as i64, 0);

    for offset in [0, width as i32] {
        draw_blocks(&mut canvas, report, offset);
    }

    tracing::debug!(
        blocks = report.blocks.len(),
        width = width * 2,
        height,
        "rendered overlay"
    );

    Ok(canvas.0)
}

fn draw_blocks(canvas: &mut Blend<RgbaImage>, report: &FocusReport, offset: i32) {
    for block in &report.blocks {
        if let Some(disc) = Disc::for_block(block) {
            draw_disc(canvas, disc, offset, Rgba([disc.shade, 0, 0, DISC_ALPHA]));
        }
    }
    if let Some(disc) = Disc::for_block(&report.focal) {
        draw_disc(canvas, disc, offset, Rgba([0, 0, disc.shade, DISC_ALPHA]));
    }
}

fn draw_disc(canvas: &mut Blend<RgbaImage>, disc: Disc, offset: i32, color: Rgba<u8>) {
    let (cx, cy) = disc.center;
    draw_filled_circle_mut(canvas, (cx + offset, cy), disc.radius, color);
}
