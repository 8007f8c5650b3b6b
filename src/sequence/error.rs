use super::ViewId;

/// Pixel data was requested for a view that was never acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("View {view} is missing from the dataset")]
pub struct MissingViewError {
    /// The missing view
    pub view: ViewId,
}

/// Errors raised while assembling a sequence description
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A view setup id was used twice
    #[error("Duplicate view setup id: {0}")]
    DuplicateSetup(i32),
}
