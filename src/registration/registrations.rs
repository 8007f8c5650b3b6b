use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::debug;

use super::{AffineTransform3D, RegistrationError, ViewRegistration};
use crate::sequence::ViewId;

/// Registration chains of all views of a dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewRegistrations {
    registrations: BTreeMap<ViewId, ViewRegistration>,
}

impl ViewRegistrations {
    /// Empty registrations
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect chains, one per view
    pub fn from_registrations<I>(registrations: I) -> Result<Self, RegistrationError>
    where
        I: IntoIterator<Item = ViewRegistration>,
    {
        let mut out = Self::new();
        for registration in registrations {
            out.insert(registration)?;
        }
        Ok(out)
    }

    /// Insert the chain of a view that has none yet.
    ///
    /// Existing chains only grow, so a second chain for the same view is
    /// rejected and the stored one is left as it was.
    pub fn insert(&mut self, registration: ViewRegistration) -> Result<(), RegistrationError> {
        match self.registrations.entry(registration.view_id()) {
            Entry::Occupied(_) => Err(RegistrationError::DuplicateView(registration.view_id())),
            Entry::Vacant(slot) => {
                slot.insert(registration);
                Ok(())
            }
        }
    }

    /// Chain for a view
    pub fn get(&self, view: &ViewId) -> Option<&ViewRegistration> {
        self.registrations.get(view)
    }

    /// Chains in view order
    pub fn iter(&self) -> impl Iterator<Item = &ViewRegistration> {
        self.registrations.values()
    }

    /// Number of registered views
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no view is registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Append a named transform to the chain of `view`, creating the chain
    /// if the view has none yet
    pub fn pretransform(&mut self, view: ViewId, name: &str, transform: AffineTransform3D) {
        self.registrations
            .entry(view)
            .or_insert_with(|| ViewRegistration::new(view))
            .pretransform(name, transform);
    }

    /// Append a diagonal scaling to the chain of `view`
    pub fn scale(&mut self, view: ViewId, name: &str, sx: f64, sy: f64, sz: f64) {
        self.pretransform(view, name, AffineTransform3D::scaling(sx, sy, sz));
    }

    /// Append a translation to the chain of `view`
    pub fn translate(&mut self, view: ViewId, name: &str, tx: f64, ty: f64, tz: f64) {
        self.pretransform(view, name, AffineTransform3D::translation(tx, ty, tz));
    }

    /// Append a named transform to every chain
    pub fn pretransform_all(&mut self, name: &str, transform: AffineTransform3D) {
        debug!(
            "Appending transform '{}' to {} registrations",
            name,
            self.registrations.len()
        );
        for registration in self.registrations.values_mut() {
            registration.pretransform(name, transform);
        }
    }

    /// Append a diagonal scaling to every chain
    pub fn scale_all(&mut self, name: &str, sx: f64, sy: f64, sz: f64) {
        self.pretransform_all(name, AffineTransform3D::scaling(sx, sy, sz));
    }

    /// Append a translation to every chain
    pub fn translate_all(&mut self, name: &str, tx: f64, ty: f64, tz: f64) {
        self.pretransform_all(name, AffineTransform3D::translation(tx, ty, tz));
    }
}
