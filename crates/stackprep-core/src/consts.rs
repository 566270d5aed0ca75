/// Default step between selected frame indices when scanning or collecting
/// a subset of a long acquisition.
pub const DEFAULT_SCAN_STRIDE: usize = 100;

/// Default edge length (pixels) of the square block averaged into one
/// output sample during spatial downsampling.
pub const DEFAULT_BLOCK_EDGE: usize = 50;

/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// File extension for array container files.
pub const CONTAINER_EXTENSION: &str = "stk";

/// Dataset name used for per-frame container files written by the converter.
pub const FRAME_DATASET: &str = "frame";

/// Dataset name used for preprocessed stack container files.
pub const STACK_DATASET: &str = "stack";
