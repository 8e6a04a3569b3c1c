//! Subcommand implementations.

pub mod config;
pub mod estimate;
pub mod overlay;

use focal_common::{AppConfig, EstimatorDefaults};
use focal_core::FocusEstimator;

/// Build an estimator from config, applying command-line overrides.
fn build_estimator(
    config: &AppConfig,
    block_size: Option<u32>,
    kernel: Option<String>,
) -> anyhow::Result<FocusEstimator> {
    let defaults = EstimatorDefaults {
        block_size: block_size.unwrap_or(config.estimator.block_size),
        kernel: kernel.unwrap_or_else(|| config.estimator.kernel.clone()),
    };
    FocusEstimator::from_defaults(&defaults)
        .map_err(|e| anyhow::anyhow!("Invalid estimator settings: {e}"))
}
