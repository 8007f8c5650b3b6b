use serde::{Deserialize, Serialize};

use crate::entity::{Attribute, AttributeKind, AttributeStore};

/// Unit used when a calibration carries none
pub const DEFAULT_VOXEL_UNIT: &str = "px";

/// Size of a volume in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions(pub [u64; 3]);

impl Dimensions {
    /// Create dimensions from width, height and depth
    pub fn new(width: u64, height: u64, depth: u64) -> Self {
        Self([width, height, depth])
    }
}

/// Physical size of one voxel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoxelDimensions {
    /// Length unit (e.g. "µm")
    pub unit: String,
    /// Voxel extent along x, y and z
    pub size: [f64; 3],
}

impl VoxelDimensions {
    /// Create voxel dimensions; an empty unit falls back to [`DEFAULT_VOXEL_UNIT`]
    pub fn new(unit: &str, size: [f64; 3]) -> Self {
        let unit = if unit.is_empty() { DEFAULT_VOXEL_UNIT } else { unit };
        Self {
            unit: unit.to_string(),
            size,
        }
    }
}

/// One acquisition unit (channel, angle, illumination) at a fixed calibration.
///
/// Id, size and calibration are fixed at construction; only the attributes
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSetup {
    id: i32,
    name: String,
    size: Option<Dimensions>,
    voxel_size: Option<VoxelDimensions>,
    attributes: AttributeStore,
}

impl ViewSetup {
    /// Create a setup without attributes
    pub fn new(
        id: i32,
        name: impl Into<String>,
        size: Option<Dimensions>,
        voxel_size: Option<VoxelDimensions>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            voxel_size,
            attributes: AttributeStore::new(),
        }
    }

    /// Setup id
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Setup name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Volume size, if known
    pub fn size(&self) -> Option<&Dimensions> {
        self.size.as_ref()
    }

    /// Voxel calibration, if known
    pub fn voxel_size(&self) -> Option<&VoxelDimensions> {
        self.voxel_size.as_ref()
    }

    /// Attached attributes
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Attach an attribute, replacing one with the same tag
    pub fn set_attribute(&mut self, attribute: impl Into<Attribute>) -> Option<Attribute> {
        self.attributes.set(attribute)
    }

    /// Look up an attribute by tag
    pub fn get_attribute(&self, tag: &str) -> Option<&Attribute> {
        self.attributes.get(tag)
    }

    /// Remove an attribute by tag; absent tags are ignored
    pub fn remove_attribute(&mut self, tag: &str) -> Option<Attribute> {
        self.attributes.remove(tag)
    }

    /// Remove the attribute of `kind`, if any
    pub fn remove_attribute_kind(&mut self, kind: AttributeKind) -> Option<Attribute> {
        self.attributes.remove_kind(kind)
    }

    /// Remove several attributes by tag; returns how many were present
    pub fn remove_attributes<I, S>(&mut self, tags: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes.remove_all(tags)
    }
}
