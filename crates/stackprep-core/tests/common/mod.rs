use ndarray::Array2;

use stackprep_core::error::{Result, StackprepError};
use stackprep_core::frame::Frame;
use stackprep_core::source::FrameSource;

/// In-memory frame source for exercising scan/collect without disk I/O.
pub struct MemorySource {
    frames: Vec<Array2<f32>>,
}

impl MemorySource {
    pub fn new(frames: Vec<Array2<f32>>) -> Self {
        Self { frames }
    }
}

impl FrameSource for MemorySource {
    fn len(&self) -> usize {
        self.frames.len()
    }

    fn load_frame(&self, index: usize) -> Result<Frame> {
        self.frames
            .get(index)
            .cloned()
            .map(Frame::new)
            .ok_or(StackprepError::FrameIndexOutOfRange {
                index,
                total: self.frames.len(),
            })
    }
}

/// A rows x cols frame filled with `value`.
pub fn constant_frame(rows: usize, cols: usize, value: f32) -> Array2<f32> {
    Array2::from_elem((rows, cols), value)
}

/// A rows x cols frame with samples 0, 1, 2, ... in row-major order.
pub fn ramp_frame(rows: usize, cols: usize) -> Array2<f32> {
    Array2::from_shape_fn((rows, cols), |(r, c)| (r * cols + c) as f32)
}
