//! Focal Model
//!
//! Defines the plain data contracts shared by the estimation pipeline and
//! its consumers:
//! - **Buffers:** Borrowed RGBA pixel views and the owned edge map
//! - **Kernel:** Convolution weights plus normalization divisor
//! - **Block:** A scored rectangular tile of the image
//! - **Report:** The winning point together with every scored block
//!
//! Coordinates are in pixels with `(0, 0)` at the top-left corner.

pub mod block;
pub mod buffer;
pub mod kernel;
pub mod report;

pub use block::*;
pub use buffer::*;
pub use kernel::*;
pub use report::*;
