use ndarray::{Array2, Array3, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BLOCK_EDGE;
use crate::error::{Result, StackprepError};

/// A single grayscale acquisition frame.
///
/// Pixel values are f32 holding the raw sample magnitude as decoded
/// (e.g. 0..65535 for 16-bit sources). Rescaling into [0, 1] only happens
/// through [`crate::filters::normalize`] with an explicit intensity range.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (rows, cols)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// (min, max) over this frame's samples, or None for a zero-pixel frame.
    pub fn intensity_range(&self) -> Option<IntensityRange> {
        let mut iter = self.data.iter();
        let first = *iter.next()?;
        let range = iter.fold(
            IntensityRange {
                min: first,
                max: first,
            },
            |r, &v| IntensityRange {
                min: r.min.min(v),
                max: r.max.max(v),
            },
        );
        Some(range)
    }
}

/// An ordered sequence of frames sharing dimensions, stored as one
/// contiguous 3D array of shape (frames, rows, cols).
#[derive(Clone, Debug)]
pub struct Stack {
    pub data: Array3<f32>,
}

impl Stack {
    pub fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Build a stack from frames, enforcing uniform dimensions.
    pub fn from_frames(frames: &[Frame]) -> Result<Self> {
        let first = frames.first().ok_or(StackprepError::EmptySequence)?;
        let (rows, cols) = first.data.dim();

        let mut data = Array3::<f32>::zeros((frames.len(), rows, cols));
        for (i, frame) in frames.iter().enumerate() {
            let (got_rows, got_cols) = frame.data.dim();
            if (got_rows, got_cols) != (rows, cols) {
                return Err(StackprepError::DimensionMismatch {
                    rows,
                    cols,
                    got_rows,
                    got_cols,
                });
            }
            data.index_axis_mut(ndarray::Axis(0), i).assign(&frame.data);
        }
        Ok(Self { data })
    }

    pub fn frames(&self) -> usize {
        self.data.dim().0
    }

    pub fn rows(&self) -> usize {
        self.data.dim().1
    }

    pub fn cols(&self) -> usize {
        self.data.dim().2
    }

    /// Borrow frame `index` as a 2D view.
    pub fn frame(&self, index: usize) -> Result<ArrayView2<'_, f32>> {
        let total = self.frames();
        if index >= total {
            return Err(StackprepError::FrameIndexOutOfRange { index, total });
        }
        Ok(self.data.index_axis(ndarray::Axis(0), index))
    }
}

/// Observed (minimum, maximum) sample values over a scanned selection.
///
/// Only ever constructed from observed samples, so `min <= max` holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntensityRange {
    pub min: f32,
    pub max: f32,
}

impl IntensityRange {
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Fold another observed range into this one.
    pub fn merge(&self, other: &IntensityRange) -> IntensityRange {
        IntensityRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Size of the rectangular region averaged into one output sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockSize {
    pub rows: usize,
    pub cols: usize,
}

impl BlockSize {
    pub fn square(edge: usize) -> Self {
        Self {
            rows: edge,
            cols: edge,
        }
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self::square(DEFAULT_BLOCK_EDGE)
    }
}
