//! Focal point estimation: wires convolution, segmentation and selection.

use focal_common::{EstimatorDefaults, FocalError, FocalResult};
use focal_model::block::Point;
use focal_model::buffer::{EdgeBuffer, PixelBuffer};
use focal_model::kernel::Kernel;
use focal_model::report::FocusReport;

use crate::convolution::convolve;
use crate::segment::segment;
use crate::select::select_max;

/// Default tiling granularity in pixels.
pub const DEFAULT_BLOCK_SIZE: u32 = 20;

/// Configuration for the focus estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusConfig {
    /// Side length of the scoring blocks, in pixels. Must be positive.
    pub block_size: u32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl FocusConfig {
    pub fn validate(&self) -> FocalResult<()> {
        if self.block_size == 0 {
            return Err(FocalError::invalid_configuration(
                "block size must be a positive integer",
            ));
        }
        Ok(())
    }
}

/// The focus estimator.
///
/// Holds only read-only configuration; every call is independent.
#[derive(Debug, Clone)]
pub struct FocusEstimator {
    config: FocusConfig,
    kernel: Kernel,
}

impl FocusEstimator {
    /// Create an estimator with the given configuration and edge kernel.
    pub fn new(config: FocusConfig, kernel: Kernel) -> Self {
        Self { config, kernel }
    }

    /// Create an estimator with default configuration and the Laplacian kernel.
    pub fn with_defaults() -> Self {
        Self::new(FocusConfig::default(), Kernel::laplacian())
    }

    /// Create an estimator from application-level defaults.
    pub fn from_defaults(defaults: &EstimatorDefaults) -> FocalResult<Self> {
        let config = FocusConfig {
            block_size: defaults.block_size,
        };
        config.validate()?;
        Ok(Self::new(config, Kernel::preset(&defaults.kernel)?))
    }

    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Estimate the focal point of `image`.
    pub fn estimate(&self, image: &PixelBuffer<'_>) -> FocalResult<Point> {
        Ok(self.estimate_with_blocks(image)?.point)
    }

    /// Estimate the focal point and return the intermediate blocks as well.
    pub fn estimate_with_blocks(&self, image: &PixelBuffer<'_>) -> FocalResult<FocusReport> {
        self.config.validate()?;
        let edges = self.edge_map(image)?;
        self.report_from_edges(&edges)
    }

    /// Run only the convolution stage.
    pub fn edge_map(&self, image: &PixelBuffer<'_>) -> FocalResult<EdgeBuffer> {
        convolve(image, &self.kernel)
    }

    /// Score and select blocks of an already computed edge map.
    pub fn report_from_edges(&self, edges: &EdgeBuffer) -> FocalResult<FocusReport> {
        self.config.validate()?;

        let blocks = segment(&edges.as_view(), self.config.block_size)?;
        let focal = select_max(&blocks)?;
        let point = focal.midpoint();

        tracing::debug!(
            x = focal.x,
            y = focal.y,
            w = focal.w,
            h = focal.h,
            intensity = focal.intensity,
            %point,
            "selected focal block"
        );

        Ok(FocusReport {
            width: edges.width(),
            height: edges.height(),
            block_size: self.config.block_size,
            point,
            focal,
            blocks,
        })
    }

    /// Estimate the focal point of a raw `width x height` RGBA byte buffer.
    pub fn estimate_rgba(&self, pixels: &[u8], width: u32, height: u32) -> FocalResult<Point> {
        let image = PixelBuffer::new(pixels, width, height)?;
        self.estimate(&image)
    }
}

impl Default for FocusEstimator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// One-shot estimation over a raw RGBA buffer.
///
/// The image shape is checked before the block size, so a malformed buffer
/// reports `InvalidImageShape` even when `block_size` is also invalid.
pub fn estimate_focus(
    pixels: &[u8],
    width: u32,
    height: u32,
    kernel: &Kernel,
    block_size: u32,
) -> FocalResult<Point> {
    FocusEstimator::new(FocusConfig { block_size }, kernel.clone()).estimate_rgba(
        pixels,
        width,
        height,
    )
}
