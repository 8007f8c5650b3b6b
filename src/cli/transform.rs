use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use spimdata::dataset::SpimData;
use spimdata::document::DocumentIo;

use super::{Config, TransformOp};

/// Append a transform to every registration and save the dataset
pub fn run(
    config: &Config,
    input: PathBuf,
    name: String,
    op: TransformOp,
    output: Option<PathBuf>,
) -> Result<()> {
    let io = DocumentIo::builtin(config.document)?;
    let mut data = io
        .load(&input)
        .with_context(|| format!("Failed to read dataset {}", input.display()))?;

    apply(&mut data, &name, op);

    let output = output.unwrap_or(input);
    io.save(&data, &output)
        .with_context(|| format!("Failed to write dataset {}", output.display()))?;
    info!(
        "Appended '{}' to {} registrations, wrote {}",
        name,
        data.registrations().len(),
        output.display()
    );
    Ok(())
}

fn apply(data: &mut SpimData, name: &str, op: TransformOp) {
    match op {
        TransformOp::Scale { x, y, z } => data.scale(name, x, y, z),
        TransformOp::Uniform { factor } => data.scale_uniform(name, factor),
        TransformOp::Translate { x, y, z } => data.translate(name, x, y, z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spimdata::dataset::{DatasetBuilder, SourceImage};
    use spimdata::loader::PixelType;
    use spimdata::sequence::ViewId;

    #[test]
    fn test_apply_ops() {
        let source = SourceImage::new("s", "/s.tif", PixelType::Gray8);
        let mut data = DatasetBuilder::new().build(&source).unwrap();

        apply(&mut data, "a", TransformOp::Uniform { factor: 2.0 });
        apply(&mut data, "b", TransformOp::Translate { x: -1.0, y: 0.0, z: 1.0 });
        apply(&mut data, "c", TransformOp::Scale { x: 1.0, y: 3.0, z: 1.0 });

        let reg = data.registrations().get(&ViewId::new(0, 0)).unwrap();
        assert_eq!(reg.transforms().len(), 4);
        assert_eq!(reg.model().apply([1.0, 1.0, 1.0]), [1.0, 6.0, 3.0]);
    }
}
