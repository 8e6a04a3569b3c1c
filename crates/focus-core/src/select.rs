//! Focal block selection.

use focal_common::{FocalError, FocalResult};
use focal_model::block::Block;

/// Return the block with the highest intensity.
///
/// A later block replaces the current best only when strictly greater, so
/// among equal scores the first one in `blocks` wins.
pub fn select_max(blocks: &[Block]) -> FocalResult<Block> {
    select_max_index(blocks).map(|i| blocks[i])
}

/// Index of the block [`select_max`] would return.
pub fn select_max_index(blocks: &[Block]) -> FocalResult<usize> {
    if blocks.is_empty() {
        return Err(FocalError::EmptyInput);
    }

    let best = blocks
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (i, block)| {
            if block.intensity > blocks[best].intensity {
                i
            } else {
                best
            }
        });
    Ok(best)
}
