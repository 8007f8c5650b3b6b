use anyhow::{Context, Result};
use std::path::PathBuf;

use spimdata::document::DocumentIo;

use super::Config;

/// Print a summary of a dataset
pub fn run(config: &Config, file: PathBuf, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let io = DocumentIo::builtin(config.document)?;
    let data = io
        .load(&file)
        .with_context(|| format!("Failed to read dataset {}", file.display()))?;
    let summary = data.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("File: {}", file.display());
        print!("{}", summary.format_colored());
    }
    Ok(())
}
