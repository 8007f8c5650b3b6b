use serde::{Deserialize, Serialize};

use super::AffineTransform3D;
use crate::sequence::ViewId;

/// Name given to the transform derived from the source calibration
pub const CALIBRATION_TRANSFORM_NAME: &str = "calibration";

/// A named affine transform in a registration chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Transform name (e.g. "calibration")
    pub name: String,
    /// The affine transform
    pub affine: AffineTransform3D,
}

impl ViewTransform {
    /// Create a named transform
    pub fn new(name: impl Into<String>, affine: AffineTransform3D) -> Self {
        Self {
            name: name.into(),
            affine,
        }
    }
}

/// Registration chain of a single view.
///
/// Transforms are kept in application order: the first entry is applied
/// first to pixel coordinates, the last entry last.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRegistration {
    view_id: ViewId,
    transforms: Vec<ViewTransform>,
    model: AffineTransform3D,
}

impl ViewRegistration {
    /// Empty chain (identity model)
    pub fn new(view_id: ViewId) -> Self {
        Self {
            view_id,
            transforms: Vec::new(),
            model: AffineTransform3D::identity(),
        }
    }

    /// Chain seeded with one transform
    pub fn with_transform(view_id: ViewId, transform: ViewTransform) -> Self {
        let mut reg = Self::new(view_id);
        reg.push(transform);
        reg
    }

    /// Rebuild a chain from transforms in application order
    pub fn from_transforms<I>(view_id: ViewId, transforms: I) -> Self
    where
        I: IntoIterator<Item = ViewTransform>,
    {
        let mut reg = Self::new(view_id);
        for transform in transforms {
            reg.push(transform);
        }
        reg
    }

    /// View this chain belongs to
    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    /// Transforms in application order
    pub fn transforms(&self) -> &[ViewTransform] {
        &self.transforms
    }

    /// Composite pixel-to-world transform
    pub fn model(&self) -> &AffineTransform3D {
        &self.model
    }

    /// Append `transform` after everything already in the chain
    pub fn pretransform(&mut self, name: impl Into<String>, transform: AffineTransform3D) {
        self.push(ViewTransform::new(name, transform));
    }

    fn push(&mut self, transform: ViewTransform) {
        self.model = self.model.preconcatenate(&transform.affine);
        self.transforms.push(transform);
    }
}
