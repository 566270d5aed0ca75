use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackprepError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid container file {path:?}: {reason}")]
    InvalidContainer { path: PathBuf, reason: String },

    #[error("Container {path:?} holds dataset {found:?}, expected {expected:?}")]
    DatasetMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("Frame index {index} out of range (total: {total})")]
    FrameIndexOutOfRange { index: usize, total: usize },

    #[error("No frames selected (offset {offset}, stride {stride}, {total} available)")]
    EmptyRange {
        offset: usize,
        stride: usize,
        total: usize,
    },

    #[error("Stride must be at least 1")]
    InvalidStride,

    #[error("Empty frame sequence")]
    EmptySequence,

    #[error("Frame dimensions {got_rows}x{got_cols} do not match expected {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },

    #[error("Invalid block grid: {0}")]
    InvalidBlockGrid(String),

    #[error("Degenerate intensity range: minimum and maximum are both {0}")]
    DegenerateRange(f32),
}

pub type Result<T> = std::result::Result<T, StackprepError>;
