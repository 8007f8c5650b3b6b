//! # Datasets
//!
//! A [`SpimData`] bundles everything a viewer needs to place volumes in
//! space: the base path that relative file names resolve against, the
//! [`SequenceDescription`] and one registration chain per view.
//!
//! Datasets are built once from a [`SourceImage`] by the [`DatasetBuilder`]
//! and afterwards only edited through the helpers on [`SpimData`]: appending
//! a transform to every chain, or stripping attributes from every setup.
//!
//! ```rust
//! use spimdata::dataset::{DatasetBuilder, SourceImage};
//! use spimdata::loader::PixelType;
//!
//! let source = SourceImage::new("embryo", "/data/embryo.tif", PixelType::Gray16)
//!     .with_size(512, 512, 40)
//!     .with_channels(2)
//!     .with_frames(10);
//!
//! let mut data = DatasetBuilder::new().build(&source)?;
//! assert_eq!(data.sequence().setups().count(), 2);
//! assert_eq!(data.registrations().len(), 20);
//!
//! data.scale_uniform("zoom", 0.5);
//! data.remove_entities(["displaysettings"]);
//! # Ok::<(), spimdata::dataset::DatasetError>(())
//! ```

mod builder;
mod data;
mod error;
mod source;
mod summary;

#[cfg(test)]
mod tests;

pub use builder::DatasetBuilder;
pub use data::SpimData;
pub use error::DatasetError;
pub use source::{Calibration, ChannelDisplay, SourceImage};
pub use summary::{DatasetSummary, SetupSummary};
