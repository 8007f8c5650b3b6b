use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use spimdata::document::DocumentIo;
use spimdata::entity::AttributeKind;

use super::Config;

/// Remove attributes from every view setup and save the dataset
pub fn run(config: &Config, input: PathBuf, names: Vec<String>, output: Option<PathBuf>) -> Result<()> {
    for name in &names {
        if AttributeKind::resolve(name).is_none() {
            warn!("No attribute is named {:?}", name.trim());
        }
    }

    let io = DocumentIo::builtin(config.document)?;
    let mut data = io
        .load(&input)
        .with_context(|| format!("Failed to read dataset {}", input.display()))?;

    let removed = data.remove_entities(&names);

    let output = output.unwrap_or(input);
    io.save(&data, &output)
        .with_context(|| format!("Failed to write dataset {}", output.display()))?;
    info!("Removed {} attributes, wrote {}", removed, output.display());
    println!("Removed {} attributes", removed);
    Ok(())
}
