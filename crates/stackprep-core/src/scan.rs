//! Strided intensity range scanning.
//!
//! Visits every `stride`-th frame starting at `offset` and folds each
//! frame's (min, max) into a running global range. Frames are loaded one
//! at a time, so the whole collection never has to fit in memory.

use tracing::debug;

use crate::error::{Result, StackprepError};
use crate::frame::IntensityRange;
use crate::source::FrameSource;

/// Indices `offset, offset + stride, ...` below `total`.
///
/// Fails with [`StackprepError::InvalidStride`] for a zero stride and with
/// [`StackprepError::EmptyRange`] when the selection contains no indices.
pub fn selection(
    offset: usize,
    stride: usize,
    total: usize,
) -> Result<impl Iterator<Item = usize>> {
    if stride == 0 {
        return Err(StackprepError::InvalidStride);
    }
    if offset >= total {
        return Err(StackprepError::EmptyRange {
            offset,
            stride,
            total,
        });
    }
    Ok((offset..total).step_by(stride))
}

/// Scan the strided selection for the global (minimum, maximum) intensity.
///
/// The running range is seeded from the first visited frame, never from
/// placeholder values. All visited frames must share the first frame's
/// dimensions.
pub fn scan_range(
    source: &dyn FrameSource,
    offset: usize,
    stride: usize,
) -> Result<IntensityRange> {
    let mut range: Option<IntensityRange> = None;
    let mut dims: Option<(usize, usize)> = None;

    for index in selection(offset, stride, source.len())? {
        let frame = source.load_frame(index)?;

        let (rows, cols) = match dims {
            Some(d) => d,
            None => {
                let d = (frame.rows(), frame.cols());
                dims = Some(d);
                d
            }
        };
        if (frame.rows(), frame.cols()) != (rows, cols) {
            return Err(StackprepError::DimensionMismatch {
                rows,
                cols,
                got_rows: frame.rows(),
                got_cols: frame.cols(),
            });
        }

        let local = frame.intensity_range().ok_or(StackprepError::EmptyRange {
            offset,
            stride,
            total: source.len(),
        })?;
        debug!(index, min = local.min, max = local.max, "scanned frame");

        range = Some(match range {
            Some(r) => r.merge(&local),
            None => local,
        });
    }

    // selection() guarantees at least one index, so the fold ran.
    range.ok_or(StackprepError::EmptyRange {
        offset,
        stride,
        total: source.len(),
    })
}
