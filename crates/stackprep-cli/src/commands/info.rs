use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use stackprep_core::io::container::peek;

#[derive(Args)]
pub struct InfoArgs {
    /// Container file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = peek(&args.file)?;

    let shape = info
        .shape
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("x");

    println!("File:       {}", args.file.display());
    println!("Dataset:    {}", info.name);
    println!("Shape:      {}", shape);

    let total_mb = (info.len() * 4) as f64 / (1024.0 * 1024.0);
    println!("Data size:  {:.1} MB", total_mb);

    Ok(())
}
