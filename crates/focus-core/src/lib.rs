//! Focal Core: focal point estimation
//!
//! Estimates the single most visually interesting point of an RGBA image:
//! - **Convolution:** Edge-magnitude map via a 2D high-pass kernel
//! - **Segmentation:** Tile the edge map into blocks and score each one
//! - **Selection:** Pick the highest-scoring block (first wins on ties)
//! - **Estimation:** Wire the stages together and return the block midpoint
//!
//! This crate is pure computation: no I/O, no state kept between calls.
//! All inputs are data; all outputs are data. Enable the `parallel`
//! feature to spread convolution rows and block scoring over rayon's pool;
//! results are bit-identical to the sequential path.

pub mod convolution;
pub mod estimator;
pub mod segment;
pub mod select;

pub use convolution::convolve;
pub use estimator::{estimate_focus, FocusConfig, FocusEstimator, DEFAULT_BLOCK_SIZE};
pub use segment::segment;
pub use select::select_max;
