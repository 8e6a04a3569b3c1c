//! Square convolution kernels for edge detection.

use focal_common::{FocalError, FocalResult};

/// An odd-sized square matrix of signed weights plus a normalization divisor.
///
/// Weights are stored row-major. A kernel of side `size` is centred on the
/// output pixel, reaching `radius() = size / 2` pixels in every direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    size: usize,
    weights: Vec<i32>,
    divisor: i32,
}

impl Kernel {
    /// Build a kernel, validating its shape.
    pub fn new(size: usize, weights: Vec<i32>, divisor: i32) -> FocalResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FocalError::invalid_configuration(format!(
                "kernel side must be odd and positive (got {size})"
            )));
        }
        if weights.len() != size * size {
            return Err(FocalError::invalid_configuration(format!(
                "kernel of side {size} needs {} weights (got {})",
                size * size,
                weights.len()
            )));
        }
        if divisor == 0 {
            return Err(FocalError::invalid_configuration(
                "kernel divisor must be non-zero",
            ));
        }
        Ok(Self {
            size,
            weights,
            divisor,
        })
    }

    /// 8-connectivity Laplacian high-pass filter. The default edge kernel.
    pub fn laplacian() -> Self {
        Self {
            size: 3,
            weights: vec![-1, -1, -1, -1, 8, -1, -1, -1, -1],
            divisor: 1,
        }
    }

    /// 4-connectivity Laplacian high-pass filter.
    pub fn laplacian4() -> Self {
        Self {
            size: 3,
            weights: vec![0, -1, 0, -1, 4, -1, 0, -1, 0],
            divisor: 1,
        }
    }

    /// Pass-through kernel: the output equals the input.
    pub fn identity() -> Self {
        Self {
            size: 1,
            weights: vec![1],
            divisor: 1,
        }
    }

    /// Look up a kernel preset by name.
    pub fn preset(name: &str) -> FocalResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "laplacian" | "edges" => Ok(Self::laplacian()),
            "laplacian4" => Ok(Self::laplacian4()),
            "identity" | "none" => Ok(Self::identity()),
            other => Err(FocalError::invalid_configuration(format!(
                "unknown kernel preset '{other}' (expected laplacian, laplacian4, or identity)"
            ))),
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reach from the centre tap to the edge of the kernel.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    pub fn divisor(&self) -> i32 {
        self.divisor
    }

    /// Row-major weights.
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Weight at column `kx`, row `ky`. Panics if out of range.
    #[inline]
    pub fn at(&self, kx: usize, ky: usize) -> i32 {
        self.weights[ky * self.size + kx]
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::laplacian()
    }
}
