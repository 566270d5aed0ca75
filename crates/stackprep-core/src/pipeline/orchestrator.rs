use tracing::info;

use crate::consts::STACK_DATASET;
use crate::error::Result;
use crate::filters::normalize::normalize_stack;
use crate::frame::IntensityRange;
use crate::io::container;
use crate::scan::scan_range;
use crate::source::{ContainerDirectory, FrameSource};
use crate::stack::{collect_strided, downsample_stack, full_grid};

use super::config::PreprocessConfig;

/// Summary of a completed preprocessing run.
#[derive(Clone, Debug)]
pub struct PreprocessOutput {
    /// Intensity range observed during the scan stage.
    pub range: IntensityRange,
    /// Number of frames in the output stack.
    pub frames: usize,
    /// Spatial dimensions of the output stack.
    pub grid: (usize, usize),
}

/// Run the full preprocessing pipeline:
/// scan range -> collect strided stack -> downsample -> normalize -> persist.
///
/// Normalization uses the range observed during the scan stage, applied
/// after downsampling.
pub fn run_preprocess(config: &PreprocessConfig) -> Result<PreprocessOutput> {
    let source = ContainerDirectory::open(&config.input)?;
    let offset = config.selection.offset;
    let stride = config.selection.stride;
    info!(
        total_frames = source.len(),
        offset, stride, "Scanning intensity range"
    );

    let range = scan_range(&source, offset, stride)?;
    info!(min = range.min, max = range.max, "Range scan complete");

    let stack = collect_strided(&source, offset, stride)?;
    info!(
        frames = stack.frames(),
        rows = stack.rows(),
        cols = stack.cols(),
        "Collected strided stack"
    );

    let block = config.downsample.block;
    let grid = match config.downsample.grid {
        Some(grid) => grid,
        None => full_grid(stack.rows(), stack.cols(), block)?,
    };
    let reduced = downsample_stack(&stack, grid, block)?;
    info!(rows = grid.0, cols = grid.1, "Downsampled stack");

    let result = if config.normalize.enabled {
        normalize_stack(&reduced, &range)?
    } else {
        reduced
    };

    container::write_array3(&config.output, STACK_DATASET, &result.data)?;
    info!(output = %config.output.display(), "Wrote stack container");

    Ok(PreprocessOutput {
        range,
        frames: result.frames(),
        grid,
    })
}
