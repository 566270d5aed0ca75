use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SCAN_STRIDE;
use crate::frame::BlockSize;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Directory of per-frame container files.
    pub input: PathBuf,
    /// Output stack container file.
    pub output: PathBuf,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub downsample: DownsampleConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Index of the first selected frame.
    pub offset: usize,
    /// Step between selected frame indices.
    pub stride: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            offset: 0,
            stride: DEFAULT_SCAN_STRIDE,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DownsampleConfig {
    pub block: BlockSize,
    /// Explicit output grid (rows, cols). Omit for the largest grid that
    /// fits the input frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<(usize, usize)>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NormalizeConfig {
    pub enabled: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
