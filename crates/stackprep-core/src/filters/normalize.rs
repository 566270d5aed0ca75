use crate::error::{Result, StackprepError};
use crate::frame::{Frame, IntensityRange, Stack};

/// Linear rescale: maps [range.min, range.max] -> [0.0, 1.0], clamped.
///
/// A zero-width range (constant data) cannot be rescaled and fails with
/// [`StackprepError::DegenerateRange`].
pub fn normalize_frame(frame: &Frame, range: &IntensityRange) -> Result<Frame> {
    let width = nonzero_width(range)?;
    let data = frame
        .data
        .mapv(|v| ((v - range.min) / width).clamp(0.0, 1.0));
    Ok(Frame::new(data))
}

/// Rescale every sample of a stack into [0.0, 1.0], as [`normalize_frame`].
pub fn normalize_stack(stack: &Stack, range: &IntensityRange) -> Result<Stack> {
    let width = nonzero_width(range)?;
    let data = stack
        .data
        .mapv(|v| ((v - range.min) / width).clamp(0.0, 1.0));
    Ok(Stack::new(data))
}

fn nonzero_width(range: &IntensityRange) -> Result<f32> {
    let width = range.width();
    if width <= 0.0 {
        return Err(StackprepError::DegenerateRange(range.min));
    }
    Ok(width)
}
