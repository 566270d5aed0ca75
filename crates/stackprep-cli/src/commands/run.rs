use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stackprep_core::consts::DEFAULT_SCAN_STRIDE;
use stackprep_core::frame::BlockSize;
use stackprep_core::pipeline::config::{
    DownsampleConfig, NormalizeConfig, PreprocessConfig, SelectionConfig,
};
use stackprep_core::pipeline::run_preprocess;

use crate::summary::print_preprocess_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Directory of per-frame container files
    pub dir: PathBuf,

    /// Pipeline config file (TOML); overrides the other flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Index of the first selected frame
    #[arg(long, default_value = "0")]
    pub offset: usize,

    /// Step between selected frame indices
    #[arg(long, default_value_t = DEFAULT_SCAN_STRIDE)]
    pub stride: usize,

    /// Block edge length in pixels (square blocks)
    #[arg(long)]
    pub block: Option<usize>,

    /// Output grid as "rows,cols" (defaults to the largest grid that fits)
    #[arg(long)]
    pub grid: Option<String>,

    /// Skip the normalization stage
    #[arg(long)]
    pub no_normalize: bool,

    /// Output file path
    #[arg(short, long, default_value = "preprocessed.stk")]
    pub output: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)?
    };

    print_preprocess_summary(&config);

    let output = run_preprocess(&config)?;

    println!();
    println!(
        "Preprocessed {} frames to {}x{} (range {}..{})",
        output.frames, output.grid.0, output.grid.1, output.range.min, output.range.max
    );
    println!("Output saved to {}", config.output.display());

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> Result<PreprocessConfig> {
    let grid = match args.grid {
        Some(ref grid_str) => {
            let parts: Vec<usize> = grid_str
                .split(',')
                .map(|s| s.trim().parse::<usize>())
                .collect::<std::result::Result<_, _>>()
                .context("Invalid grid format (expected 'rows,cols')")?;
            if parts.len() != 2 {
                anyhow::bail!("Grid requires exactly 2 values: rows,cols");
            }
            Some((parts[0], parts[1]))
        }
        None => None,
    };

    let block = match args.block {
        Some(edge) => BlockSize::square(edge),
        None => BlockSize::default(),
    };

    Ok(PreprocessConfig {
        input: args.dir.clone(),
        output: args.output.clone(),
        selection: SelectionConfig {
            offset: args.offset,
            stride: args.stride,
        },
        downsample: DownsampleConfig { block, grid },
        normalize: NormalizeConfig {
            enabled: !args.no_normalize,
        },
    })
}
