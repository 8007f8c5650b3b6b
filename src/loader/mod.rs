//! # Image Loaders
//!
//! Pixel data is never decoded here. A dataset only stores an image-loader
//! descriptor (the path of the source file and its time origin); when a
//! document is opened, the source is handed to an [`ImageOpener`] and the
//! typed loader is picked from the pixel type of the freshly opened image,
//! not from anything stored on disk.
//!
//! [`TimeShiftedLoader`] maps time points onto source frames: time point
//! `t` reads frame `t - origin`, and the views before the origin are missing.
//! Requesting one of them fails with [`MissingViewError`](crate::sequence::MissingViewError).

mod descriptor;
mod error;
mod pixel;
mod shifted;

#[cfg(test)]
mod tests;

pub use descriptor::{
    ImageLoaderDescriptor, IMAGEPLUS_FILEPATH_TAG, IMAGEPLUS_LOADER_FORMAT,
    IMAGEPLUS_TIME_ORIGIN_TAG, IMAGE_LOADER_TAG,
};
pub use error::LoaderError;
pub use pixel::{LoaderKind, PixelType};
pub use shifted::TimeShiftedLoader;

use std::path::Path;

/// Multi-channel, multi-frame image opened from disk
pub trait FrameSource {
    /// One 3D volume as produced by the source
    type Volume;

    /// Pixel representation of the image
    fn pixel_type(&self) -> PixelType;

    /// Number of acquired frames
    fn frame_count(&self) -> u32;

    /// Number of channels
    fn channel_count(&self) -> u32;

    /// Read the volume of `channel` at source frame `frame`
    fn read_frame(&self, channel: u32, frame: u32) -> Result<Self::Volume, LoaderError>;
}

/// Opens a source image from a file path
pub trait ImageOpener {
    /// Source type produced by this opener
    type Source: FrameSource;

    /// Open the image at `path`
    fn open(&self, path: &Path) -> Result<Self::Source, LoaderError>;
}
