//! Estimate the focal point of an image.

use std::path::PathBuf;

use focal_common::AppConfig;
use focal_model::{FocusReport, Point};
use serde::Serialize;

use crate::decode::{as_pixel_buffer, load_rgba};

/// JSON output of `focal estimate --json`.
#[derive(Debug, Serialize)]
struct EstimateOutput<'a> {
    image: String,
    analyzed_at: String,
    normalized: Point,
    #[serde(flatten)]
    report: &'a FocusReport,
}

pub fn run(
    config: &AppConfig,
    path: PathBuf,
    block_size: Option<u32>,
    kernel: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let estimator = super::build_estimator(config, block_size, kernel)?;
    let img = load_rgba(&path)?;
    let buffer = as_pixel_buffer(&img)?;

    let report = estimator
        .estimate_with_blocks(&buffer)
        .map_err(|e| anyhow::anyhow!("Failed to estimate focus: {e}"))?;

    tracing::info!(
        image = %path.display(),
        blocks = report.blocks.len(),
        point = %report.point,
        "estimated focal point"
    );

    if json {
        let output = EstimateOutput {
            image: path.display().to_string(),
            analyzed_at: chrono::Utc::now().to_rfc3339(),
            normalized: report.normalized_point(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", report.point);
    }

    Ok(())
}
