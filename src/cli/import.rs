use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

use spimdata::dataset::{DatasetBuilder, SourceImage};
use spimdata::document::DocumentIo;

use super::Config;

/// Source images listed in an import file
#[derive(Debug, Deserialize)]
struct ImportFile {
    #[serde(default, rename = "image")]
    images: Vec<SourceImage>,
}

impl ImportFile {
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file: {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse import file")
    }
}

/// Build one dataset per source image; images that cannot be represented
/// are reported and skipped
pub fn run(config: &Config, sources: PathBuf, output_dir: PathBuf) -> Result<()> {
    let file = ImportFile::from_file(&sources)?;
    if file.images.is_empty() {
        warn!("{} lists no images", sources.display());
    }

    let builder = match &config.import.base_path {
        Some(base_path) => DatasetBuilder::new().base_path(base_path),
        None => DatasetBuilder::new(),
    };
    let io = DocumentIo::builtin(config.document)?;
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut written = 0;
    for source in &file.images {
        let Some(file_name) = dataset_file_name(&source.title) else {
            warn!(
                "Skipping image {:?}: its title cannot be used as a file name",
                source.title
            );
            continue;
        };
        let Some(data) = builder.try_build(source) else {
            continue;
        };
        let path = output_dir.join(file_name);
        io.save(&data, &path)
            .with_context(|| format!("Failed to write dataset {}", path.display()))?;
        println!("{} -> {}", source.title, path.display());
        written += 1;
    }

    info!("Imported {} of {} images", written, file.images.len());
    Ok(())
}

/// `<title>.xml`, or `None` when the title would leave the output
/// directory
fn dataset_file_name(title: &str) -> Option<String> {
    if title.is_empty() || title.contains(['/', '\\']) {
        return None;
    }
    let mut components = Path::new(title).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(format!("{}.xml", title)),
        _ => None,
    }
}
