use crate::sequence::MissingViewError;

/// Errors raised while reading pixel data through a loader
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The view was never acquired
    #[error(transparent)]
    MissingView(#[from] MissingViewError),

    /// The time point maps outside the frames of the source
    #[error("Time point {timepoint} is outside the {frames} frames of the source")]
    FrameOutOfRange {
        /// Requested time point
        timepoint: i32,
        /// Number of frames in the source
        frames: u32,
    },

    /// The setup does not match any channel of the source
    #[error("Unknown view setup: {0}")]
    UnknownSetup(i32),

    /// I/O error while opening the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error reported by the source itself
    #[error("Source error: {0}")]
    Source(String),
}
