mod build;
mod downsample;

pub use build::collect_strided;
pub use downsample::{downsample_stack, full_grid};
