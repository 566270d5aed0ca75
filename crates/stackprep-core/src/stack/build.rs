use tracing::debug;

use crate::error::Result;
use crate::frame::Stack;
use crate::scan::selection;
use crate::source::FrameSource;

/// Load every `stride`-th frame starting at `offset` into a single stack.
///
/// Selection and dimension policies match [`crate::scan::scan_range`]:
/// an empty selection and a zero stride are errors, and all selected
/// frames must share dimensions (enforced by [`Stack::from_frames`]).
pub fn collect_strided(source: &dyn FrameSource, offset: usize, stride: usize) -> Result<Stack> {
    let frames = selection(offset, stride, source.len())?
        .map(|index| source.load_frame(index))
        .collect::<Result<Vec<_>>>()?;

    debug!(frames = frames.len(), offset, stride, "collected strided selection");
    Stack::from_frames(&frames)
}
