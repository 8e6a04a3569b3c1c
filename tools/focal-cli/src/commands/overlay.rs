//! Render the debug overlay for an image.

use std::path::PathBuf;

use anyhow::Context;
use focal_common::AppConfig;

use crate::decode::{as_pixel_buffer, load_rgba};
use crate::overlay::render_overlay;

pub fn run(
    config: &AppConfig,
    path: PathBuf,
    output: PathBuf,
    block_size: Option<u32>,
    kernel: Option<String>,
) -> anyhow::Result<()> {
    let estimator = super::build_estimator(config, block_size, kernel)?;
    let img = load_rgba(&path)?;
    let buffer = as_pixel_buffer(&img)?;

    let edges = estimator.edge_map(&buffer)?;
    let report = estimator.report_from_edges(&edges)?;
    let canvas = render_overlay(&img, edges, &report)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    canvas
        .save(&output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    println!("Focal point: {}", report.point);
    println!("Overlay saved to: {}", output.display());
    Ok(())
}
