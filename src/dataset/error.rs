use crate::loader::PixelType;
use crate::registration::RegistrationError;
use crate::sequence::SequenceError;

/// Errors that can occur while building a dataset from a source image
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The source image uses a pixel representation datasets cannot hold
    #[error("Error in image {title}: only 8, 16, 32-bit and RGB images are supported, got {pixel_type}")]
    UnsupportedPixelType {
        /// Title of the rejected image
        title: String,
        /// Its pixel type
        pixel_type: PixelType,
    },

    /// The source image description is unusable
    #[error("Invalid source image: {0}")]
    InvalidSource(String),

    /// Per-channel display settings do not match the channel count
    #[error("Source has {channels} channels but {displays} channel display entries")]
    ChannelCountMismatch {
        /// Channels in the source
        channels: u32,
        /// Display entries provided
        displays: usize,
    },

    /// Error assembling the sequence description
    #[error("Sequence error: {0}")]
    SequenceError(#[from] SequenceError),

    /// Error assembling the registrations
    #[error("Registration error: {0}")]
    RegistrationError(#[from] RegistrationError),
}
