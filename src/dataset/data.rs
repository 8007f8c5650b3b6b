use std::path::{Path, PathBuf};

use log::debug;

use super::DatasetSummary;
use crate::entity::AttributeKind;
use crate::registration::{AffineTransform3D, ViewRegistrations};
use crate::sequence::SequenceDescription;

/// A complete dataset: base path, sequence description and registrations
#[derive(Debug, Clone, PartialEq)]
pub struct SpimData {
    base_path: PathBuf,
    sequence: SequenceDescription,
    registrations: ViewRegistrations,
}

impl SpimData {
    /// Assemble a dataset
    pub fn new(
        base_path: impl Into<PathBuf>,
        sequence: SequenceDescription,
        registrations: ViewRegistrations,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            sequence,
            registrations,
        }
    }

    /// Directory relative paths resolve against
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Replace the base path
    pub fn set_base_path(&mut self, base_path: impl Into<PathBuf>) {
        self.base_path = base_path.into();
    }

    /// Sequence description
    pub fn sequence(&self) -> &SequenceDescription {
        &self.sequence
    }

    /// Mutable sequence description
    pub fn sequence_mut(&mut self) -> &mut SequenceDescription {
        &mut self.sequence
    }

    /// Registration chains
    pub fn registrations(&self) -> &ViewRegistrations {
        &self.registrations
    }

    /// Mutable registration chains
    pub fn registrations_mut(&mut self) -> &mut ViewRegistrations {
        &mut self.registrations
    }

    /// Printable overview
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::new(self)
    }

    /// Remove attributes from every setup by name. Names are trimmed and
    /// matched against tags and attribute names; unknown names are ignored.
    ///
    /// Returns the number of attributes removed.
    pub fn remove_entities<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        let removed: usize = self
            .sequence
            .setups_mut()
            .map(|setup| setup.remove_attributes(names.iter().map(|n| n.as_ref().trim())))
            .sum();
        debug!("Removed {} attributes", removed);
        removed
    }

    /// Remove every attribute of the given kinds from every setup
    pub fn remove_entity_kinds(&mut self, kinds: &[AttributeKind]) -> usize {
        let mut removed = 0;
        for setup in self.sequence.setups_mut() {
            for &kind in kinds {
                if setup.remove_attribute_kind(kind).is_some() {
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Append a named transform to every registration
    pub fn pretransform(&mut self, name: &str, transform: AffineTransform3D) {
        self.registrations.pretransform_all(name, transform);
    }

    /// Append a diagonal scaling to every registration
    pub fn scale(&mut self, name: &str, sx: f64, sy: f64, sz: f64) {
        self.registrations.scale_all(name, sx, sy, sz);
    }

    /// Append the same scaling along all axes to every registration
    pub fn scale_uniform(&mut self, name: &str, s: f64) {
        self.scale(name, s, s, s);
    }

    /// Append a translation to every registration
    pub fn translate(&mut self, name: &str, tx: f64, ty: f64, tz: f64) {
        self.registrations.translate_all(name, tx, ty, tz);
    }
}
