use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel representation of a source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelType {
    /// 8-bit grayscale
    #[serde(rename = "GRAY8")]
    Gray8,
    /// 16-bit grayscale
    #[serde(rename = "GRAY16")]
    Gray16,
    /// 32-bit float grayscale
    #[serde(rename = "GRAY32")]
    Gray32,
    /// 8-bit indexed color
    #[serde(rename = "COLOR_256")]
    Color256,
    /// Packed 24-bit RGB
    #[serde(rename = "RGB", alias = "COLOR_RGB")]
    ColorRgb,
}

impl PixelType {
    /// Name used in configuration files and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            PixelType::Gray8 => "GRAY8",
            PixelType::Gray16 => "GRAY16",
            PixelType::Gray32 => "GRAY32",
            PixelType::Color256 => "COLOR_256",
            PixelType::ColorRgb => "RGB",
        }
    }

    /// Whether datasets can be built from images of this type
    pub fn is_supported(&self) -> bool {
        !matches!(self, PixelType::Color256)
    }

    /// Whether the image carries packed color rather than intensities
    pub fn is_rgb(&self) -> bool {
        matches!(self, PixelType::ColorRgb)
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed loader picked for an opened image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoaderKind {
    /// Unsigned 8-bit voxels
    UnsignedByte,
    /// Unsigned 16-bit voxels
    UnsignedShort,
    /// 32-bit float voxels
    Float,
    /// Packed ARGB voxels
    Argb,
}

impl LoaderKind {
    /// Loader for `pixel_type`; anything that is not grayscale reads as ARGB
    pub fn for_pixel_type(pixel_type: PixelType) -> Self {
        match pixel_type {
            PixelType::Gray8 => LoaderKind::UnsignedByte,
            PixelType::Gray16 => LoaderKind::UnsignedShort,
            PixelType::Gray32 => LoaderKind::Float,
            PixelType::Color256 | PixelType::ColorRgb => LoaderKind::Argb,
        }
    }

    /// Size of one voxel in bytes
    pub fn bytes_per_voxel(&self) -> usize {
        match self {
            LoaderKind::UnsignedByte => 1,
            LoaderKind::UnsignedShort => 2,
            LoaderKind::Float | LoaderKind::Argb => 4,
        }
    }
}
