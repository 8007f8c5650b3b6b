use std::fmt;

use serde::Serialize;

#[cfg(feature = "colorized_output")]
use console::style;

use super::SpimData;
use crate::entity::Attribute;
use crate::sequence::VoxelDimensions;

/// Printable overview of a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Base path as stored
    pub base_path: String,
    /// Source file of the image loader, if any
    pub image_loader: Option<String>,
    /// Time origin of the image loader
    pub time_origin: u32,
    /// Time point ids
    pub timepoints: Vec<i32>,
    /// Per-setup details
    pub setups: Vec<SetupSummary>,
    /// Whether missing views were enumerated at all
    pub missing_views_known: bool,
    /// Number of missing views
    pub missing_views: usize,
    /// Number of registration chains
    pub registrations: usize,
    /// Longest registration chain
    pub max_chain_length: usize,
}

/// Overview of one view setup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetupSummary {
    /// Setup id
    pub id: i32,
    /// Setup name
    pub name: String,
    /// Volume size in pixels
    pub size: Option<[u64; 3]>,
    /// Voxel calibration
    pub voxel_size: Option<VoxelDimensions>,
    /// Attached attributes
    pub attributes: Vec<Attribute>,
}

impl DatasetSummary {
    /// Collect the summary of `data`
    pub fn new(data: &SpimData) -> Self {
        let sequence = data.sequence();
        let loader = sequence.image_loader();
        Self {
            base_path: data.base_path().to_string_lossy().into_owned(),
            image_loader: loader.map(|l| l.file_path.clone()),
            time_origin: loader.map_or(0, |l| l.time_origin),
            timepoints: sequence.timepoints().iter().collect(),
            setups: sequence
                .setups()
                .map(|setup| SetupSummary {
                    id: setup.id(),
                    name: setup.name().to_string(),
                    size: setup.size().map(|s| s.0),
                    voxel_size: setup.voxel_size().cloned(),
                    attributes: setup.attributes().iter().cloned().collect(),
                })
                .collect(),
            missing_views_known: !sequence.missing_views().is_none_known(),
            missing_views: sequence.missing_views().len(),
            registrations: data.registrations().len(),
            max_chain_length: data
                .registrations()
                .iter()
                .map(|r| r.transforms().len())
                .max()
                .unwrap_or(0),
        }
    }

    fn timepoint_span(&self) -> String {
        match (self.timepoints.first(), self.timepoints.last()) {
            (Some(first), Some(last)) => {
                format!("{} ({}..={})", self.timepoints.len(), first, last)
            }
            _ => "0".to_string(),
        }
    }

    fn missing_description(&self) -> String {
        if self.missing_views_known {
            self.missing_views.to_string()
        } else {
            "none known".to_string()
        }
    }

    /// Format the summary with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();
            output.push_str(&format!("{}\n", style("SpimData Summary").bold().cyan()));
            output.push_str(&format!("{}\n", style("================").cyan()));
            output.push_str(&format!("{}: {}\n", style("Base path").bold(), self.base_path));
            if let Some(loader) = &self.image_loader {
                output.push_str(&format!(
                    "{}: {} (time origin {})\n",
                    style("Image loader").bold(),
                    loader,
                    self.time_origin
                ));
            }
            output.push_str(&format!(
                "{}: {}\n",
                style("Time points").bold(),
                self.timepoint_span()
            ));
            output.push_str(&format!(
                "{}: {}\n",
                style("Missing views").bold(),
                style(self.missing_description()).yellow()
            ));
            output.push_str(&format!(
                "{}: {} (longest chain {})\n\n",
                style("Registrations").bold(),
                self.registrations,
                self.max_chain_length
            ));

            for setup in &self.setups {
                output.push_str(&format!(
                    "{} {}\n",
                    style(format!("[{}]", setup.id)).green(),
                    style(&setup.name).bold()
                ));
                for attribute in &setup.attributes {
                    output.push_str(&format!(
                        "    {}: {}\n",
                        style(attribute.tag()).cyan(),
                        attribute
                    ));
                }
            }
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SpimData Summary")?;
        writeln!(f, "================")?;
        writeln!(f, "Base path: {}", self.base_path)?;
        if let Some(loader) = &self.image_loader {
            writeln!(f, "Image loader: {} (time origin {})", loader, self.time_origin)?;
        }
        writeln!(f, "Time points: {}", self.timepoint_span())?;
        writeln!(f, "Missing views: {}", self.missing_description())?;
        writeln!(
            f,
            "Registrations: {} (longest chain {})",
            self.registrations, self.max_chain_length
        )?;
        writeln!(f)?;

        for setup in &self.setups {
            write!(f, "[{}] {}", setup.id, setup.name)?;
            if let Some(size) = setup.size {
                write!(f, ", {}x{}x{}", size[0], size[1], size[2])?;
            }
            if let Some(voxel) = &setup.voxel_size {
                write!(
                    f,
                    ", voxel {}x{}x{} {}",
                    voxel.size[0], voxel.size[1], voxel.size[2], voxel.unit
                )?;
            }
            writeln!(f)?;
            for attribute in &setup.attributes {
                writeln!(f, "    {}: {}", attribute.tag(), attribute)?;
            }
        }
        Ok(())
    }
}
