use std::path::PathBuf;

use log::{error, info};

use super::{DatasetError, SourceImage, SpimData};
use crate::entity::{Channel, Displaysettings};
use crate::loader::ImageLoaderDescriptor;
use crate::registration::{
    ViewRegistration, ViewRegistrations, ViewTransform, CALIBRATION_TRANSFORM_NAME,
};
use crate::sequence::{
    Dimensions, SequenceDescription, TimePoints, ViewId, ViewSetup, VoxelDimensions,
};

/// Builds datasets from source images.
///
/// Every channel becomes a view setup named `"<title> channel <n>"` carrying a
/// `Channel(n)` and a `Displaysettings(n)` attribute. Time points cover the
/// frames shifted by the time origin, and every view starts with the
/// calibration transform as its only registration.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    base_path: PathBuf,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
        }
    }
}

impl DatasetBuilder {
    /// Builder with base path `.`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path of built datasets
    pub fn base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Build a dataset, failing on sources that cannot be represented
    pub fn build(&self, source: &SourceImage) -> Result<SpimData, DatasetError> {
        validate(source)?;

        let cal = &source.calibration;
        let voxel_size = VoxelDimensions::new(
            &cal.unit,
            [cal.pixel_width, cal.pixel_height, cal.pixel_depth],
        );
        let size = Dimensions::new(source.width, source.height, source.slices);

        let loader = ImageLoaderDescriptor::new(&source.file_path, source.time_origin);
        let shift = loader.time_origin_shift();
        let timepoint_count = shift.timepoint_count(source.frames);
        let mut sequence = SequenceDescription::new(TimePoints::range(timepoint_count));

        for (index, s) in (0..source.channels).enumerate() {
            let id = setup_id(s)?;
            let mut setup = ViewSetup::new(
                id,
                format!("{} channel {}", source.title, id + 1),
                Some(size),
                Some(voxel_size.clone()),
            );
            setup.set_attribute(Channel::with_id(id + 1));
            setup.set_attribute(displaysettings(source, index, id + 1));
            sequence.add_setup(setup)?;
        }

        let setup_ids: Vec<i32> = sequence.setup_ids().collect();
        sequence.set_missing_views(shift.missing_views(setup_ids.iter().copied()));
        sequence.set_image_loader(loader);

        let calibration = cal.to_transform();
        let registrations = ViewRegistrations::from_registrations(
            sequence
                .timepoints()
                .iter()
                .flat_map(|t| setup_ids.iter().map(move |&s| ViewId::new(t, s)))
                .map(|view| {
                    ViewRegistration::with_transform(
                        view,
                        ViewTransform::new(CALIBRATION_TRANSFORM_NAME, calibration),
                    )
                }),
        )?;

        info!(
            "Built dataset '{}': {} setups, {} time points, {} missing views",
            source.title,
            setup_ids.len(),
            timepoint_count,
            sequence.missing_views().len()
        );

        Ok(SpimData::new(self.base_path.clone(), sequence, registrations))
    }

    /// Build a dataset, logging and returning `None` when the source
    /// cannot be represented
    pub fn try_build(&self, source: &SourceImage) -> Option<SpimData> {
        match self.build(source) {
            Ok(data) => Some(data),
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }

    /// Build one dataset per source, skipping the ones that fail
    pub fn build_batch<'a, I>(&self, sources: I) -> Vec<SpimData>
    where
        I: IntoIterator<Item = &'a SourceImage>,
    {
        sources
            .into_iter()
            .filter_map(|source| self.try_build(source))
            .collect()
    }
}

fn validate(source: &SourceImage) -> Result<(), DatasetError> {
    if !source.pixel_type.is_supported() {
        return Err(DatasetError::UnsupportedPixelType {
            title: source.title.clone(),
            pixel_type: source.pixel_type,
        });
    }
    if source.channels == 0 {
        return Err(DatasetError::InvalidSource(format!(
            "image {} has no channels",
            source.title
        )));
    }
    if source.frames == 0 {
        return Err(DatasetError::InvalidSource(format!(
            "image {} has no frames",
            source.title
        )));
    }
    let cal = &source.calibration;
    let pixel_size = [cal.pixel_width, cal.pixel_height, cal.pixel_depth];
    if pixel_size.iter().chain(&cal.origin).any(|v| !v.is_finite()) {
        return Err(DatasetError::InvalidSource(format!(
            "image {} has a non-finite calibration",
            source.title
        )));
    }
    if !source.channel_display.is_empty()
        && source.channel_display.len() != source.channels as usize
    {
        return Err(DatasetError::ChannelCountMismatch {
            channels: source.channels,
            displays: source.channel_display.len(),
        });
    }
    Ok(())
}

fn setup_id(channel: u32) -> Result<i32, DatasetError> {
    i32::try_from(channel)
        .ok()
        .filter(|&id| id < i32::MAX)
        .ok_or_else(|| DatasetError::InvalidSource(format!("too many channels: {}", channel)))
}

/// RGB images keep the default color and stay unset; the display range is
/// carried either way
fn displaysettings(source: &SourceImage, index: usize, id: i32) -> Displaysettings {
    let display = source.display(index);
    let mut ds = Displaysettings::with_id(id);
    ds.min = display.min;
    ds.max = display.max;
    if !source.pixel_type.is_rgb() {
        ds.is_set = true;
        ds.color = display.lut_color;
    }
    ds
}
