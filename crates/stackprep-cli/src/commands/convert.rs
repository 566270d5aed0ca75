use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use stackprep_core::consts::{CONTAINER_EXTENSION, FRAME_DATASET};
use stackprep_core::io::container::write_array2;
use stackprep_core::io::image_io::load_image;

#[derive(Args)]
pub struct ConvertArgs {
    /// Directory of TIFF frames
    pub dir: PathBuf,

    /// Output directory for container files
    #[arg(short, long, default_value = "data")]
    pub output: PathBuf,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(&args.dir)
        .with_context(|| format!("Failed to list {}", args.dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("tif") || e.eq_ignore_ascii_case("tiff"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No TIFF frames found in {}", args.dir.display());
    }

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    println!("Converting {} frames...", files.len());
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Converting [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    for file in &files {
        let frame = load_image(file)
            .with_context(|| format!("Failed to load {}", file.display()))?;

        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("Unusable file name {}", file.display()))?;
        let target = args
            .output
            .join(format!("{stem}.{CONTAINER_EXTENSION}"));

        write_array2(&target, FRAME_DATASET, &frame.data)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tracing::debug!("converted {}", target.display());
        pb.inc(1);
    }
    pb.finish();

    println!("Saved {} container files to {}", files.len(), args.output.display());
    Ok(())
}
