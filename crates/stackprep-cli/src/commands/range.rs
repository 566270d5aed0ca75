use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stackprep_core::consts::DEFAULT_SCAN_STRIDE;
use stackprep_core::scan::scan_range;
use stackprep_core::source::{ContainerDirectory, FrameSource};

#[derive(Args)]
pub struct RangeArgs {
    /// Directory of per-frame container files
    pub dir: PathBuf,

    /// Index of the first scanned frame
    #[arg(long, default_value = "0")]
    pub offset: usize,

    /// Step between scanned frame indices
    #[arg(long, default_value_t = DEFAULT_SCAN_STRIDE)]
    pub stride: usize,
}

pub fn run(args: &RangeArgs) -> Result<()> {
    let source = ContainerDirectory::open(&args.dir)
        .with_context(|| format!("Failed to open {}", args.dir.display()))?;

    println!(
        "Scanning {} frames (offset {}, stride {})...",
        source.len(),
        args.offset,
        args.stride
    );

    let range = scan_range(&source, args.offset, args.stride)?;

    println!("Minimum:  {}", range.min);
    println!("Maximum:  {}", range.max);
    Ok(())
}
