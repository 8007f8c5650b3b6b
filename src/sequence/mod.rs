//! # Sequence Description
//!
//! The sequence describes which volumes exist in a dataset: the time points,
//! the view setups (one per channel/angle/illumination unit) and the views
//! known to be missing.
//!
//! A view is addressed by a [`ViewId`], the pair of a time point id and a
//! setup id.

mod description;
mod error;
mod missing;
mod setup;
mod timepoints;
mod view_id;

#[cfg(test)]
mod tests;

pub use description::SequenceDescription;
pub use error::{MissingViewError, SequenceError};
pub use missing::{MissingViews, TimeOriginShift};
pub use setup::{Dimensions, ViewSetup, VoxelDimensions, DEFAULT_VOXEL_UNIT};
pub use timepoints::TimePoints;
pub use view_id::ViewId;
