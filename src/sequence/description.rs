use std::collections::BTreeMap;

use super::{MissingViews, SequenceError, TimePoints, ViewId, ViewSetup};
use crate::loader::ImageLoaderDescriptor;

/// Time points, setups, image loader and missing views of a dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceDescription {
    timepoints: TimePoints,
    setups: BTreeMap<i32, ViewSetup>,
    image_loader: Option<ImageLoaderDescriptor>,
    missing_views: MissingViews,
}

impl SequenceDescription {
    /// Create a sequence with the given time points and no setups
    pub fn new(timepoints: TimePoints) -> Self {
        Self {
            timepoints,
            ..Default::default()
        }
    }

    /// Add a setup; ids are never reused
    pub fn add_setup(&mut self, setup: ViewSetup) -> Result<(), SequenceError> {
        if self.setups.contains_key(&setup.id()) {
            return Err(SequenceError::DuplicateSetup(setup.id()));
        }
        self.setups.insert(setup.id(), setup);
        Ok(())
    }

    /// Setup by id
    pub fn setup(&self, id: i32) -> Option<&ViewSetup> {
        self.setups.get(&id)
    }

    /// Mutable setup by id
    pub fn setup_mut(&mut self, id: i32) -> Option<&mut ViewSetup> {
        self.setups.get_mut(&id)
    }

    /// Setups in id order
    pub fn setups(&self) -> impl Iterator<Item = &ViewSetup> {
        self.setups.values()
    }

    /// Mutable setups in id order
    pub fn setups_mut(&mut self) -> impl Iterator<Item = &mut ViewSetup> {
        self.setups.values_mut()
    }

    /// Setup ids in ascending order
    pub fn setup_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.setups.keys().copied()
    }

    /// Time points
    pub fn timepoints(&self) -> &TimePoints {
        &self.timepoints
    }

    /// Image loader descriptor, if any
    pub fn image_loader(&self) -> Option<&ImageLoaderDescriptor> {
        self.image_loader.as_ref()
    }

    /// Attach the image loader descriptor
    pub fn set_image_loader(&mut self, loader: ImageLoaderDescriptor) {
        self.image_loader = Some(loader);
    }

    /// Views known to be missing
    pub fn missing_views(&self) -> &MissingViews {
        &self.missing_views
    }

    /// Replace the missing-view set
    pub fn set_missing_views(&mut self, missing_views: MissingViews) {
        self.missing_views = missing_views;
    }

    /// Every (time point, setup) pair, missing views included
    pub fn view_ids(&self) -> Vec<ViewId> {
        self.timepoints
            .iter()
            .flat_map(|t| self.setups.keys().map(move |&s| ViewId::new(t, s)))
            .collect()
    }

    /// Views that are not known to be missing
    pub fn present_view_ids(&self) -> Vec<ViewId> {
        self.view_ids()
            .into_iter()
            .filter(|view| !self.missing_views.contains(view))
            .collect()
    }
}
