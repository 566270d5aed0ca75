//! Spatial downsampling by non-overlapping block averaging.
//!
//! Each output sample is the arithmetic mean of one `block.rows` x
//! `block.cols` region of the input frame. Remainder rows/columns beyond
//! the last full block are excluded from the output.

use ndarray::{s, Array2, Array3, ArrayView2, Axis};
use rayon::prelude::*;

use crate::consts::PARALLEL_FRAME_THRESHOLD;
use crate::error::{Result, StackprepError};
use crate::frame::{BlockSize, Stack};

/// The largest output grid that fits `rows` x `cols` frames, truncating
/// any partial trailing block.
pub fn full_grid(rows: usize, cols: usize, block: BlockSize) -> Result<(usize, usize)> {
    if block.rows == 0 || block.cols == 0 {
        return Err(StackprepError::InvalidBlockGrid(
            "block size must be at least 1x1".into(),
        ));
    }
    let grid = (rows / block.rows, cols / block.cols);
    if grid.0 == 0 || grid.1 == 0 {
        return Err(StackprepError::InvalidBlockGrid(format!(
            "{}x{} blocks do not fit a {}x{} frame",
            block.rows, block.cols, rows, cols
        )));
    }
    Ok(grid)
}

/// Downsample every frame of `stack` to `grid` output cells of
/// `block`-sized means.
///
/// Output shape is (frames, grid.0, grid.1); cell `[n, j, k]` is the mean
/// of the input window starting at `(j * block.rows, k * block.cols)`.
/// Pure function of its inputs; frames above [`PARALLEL_FRAME_THRESHOLD`]
/// are reduced in parallel with identical results, since each frame's
/// means are independent.
pub fn downsample_stack(stack: &Stack, grid: (usize, usize), block: BlockSize) -> Result<Stack> {
    validate(stack.rows(), stack.cols(), grid, block)?;

    let n = stack.frames();
    let reduced: Vec<Array2<f32>> = if n >= PARALLEL_FRAME_THRESHOLD {
        stack
            .data
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|frame| downsample_frame(&frame, grid, block))
            .collect()
    } else {
        stack
            .data
            .axis_iter(Axis(0))
            .map(|frame| downsample_frame(&frame, grid, block))
            .collect()
    };

    let mut out = Array3::<f32>::zeros((n, grid.0, grid.1));
    for (i, frame) in reduced.iter().enumerate() {
        out.index_axis_mut(Axis(0), i).assign(frame);
    }
    Ok(Stack::new(out))
}

fn downsample_frame(frame: &ArrayView2<'_, f32>, grid: (usize, usize), block: BlockSize) -> Array2<f32> {
    let area = (block.rows * block.cols) as f32;
    Array2::from_shape_fn(grid, |(j, k)| {
        let window = frame.slice(s![
            j * block.rows..(j + 1) * block.rows,
            k * block.cols..(k + 1) * block.cols
        ]);
        window.sum() / area
    })
}

fn validate(rows: usize, cols: usize, grid: (usize, usize), block: BlockSize) -> Result<()> {
    if block.rows == 0 || block.cols == 0 {
        return Err(StackprepError::InvalidBlockGrid(
            "block size must be at least 1x1".into(),
        ));
    }
    if grid.0 == 0 || grid.1 == 0 {
        return Err(StackprepError::InvalidBlockGrid(
            "output grid must be at least 1x1".into(),
        ));
    }
    if grid.0 * block.rows > rows || grid.1 * block.cols > cols {
        return Err(StackprepError::InvalidBlockGrid(format!(
            "grid {}x{} of {}x{} blocks exceeds frame {}x{}",
            grid.0, grid.1, block.rows, block.cols, rows, cols
        )));
    }
    Ok(())
}
