//! # spimdata - Metadata for Multi-View Microscopy Datasets
//!
//! `spimdata` models the metadata of light-sheet and other multi-view
//! microscope acquisitions in the BigDataViewer XML layout: time points,
//! view setups with typed attributes, per-view registration chains and the
//! views known to be missing.
//!
//! ## Key Features
//!
//! - **Typed attributes**: channels, angles, illuminations and display
//!   settings are keyed by a fixed tag table, at most one per tag and setup.
//!
//! - **Pluggable codecs**: every attribute kind is encoded through a
//!   registry of codecs filled by explicit registration calls; doubles
//!   survive the text round trip bit for bit.
//!
//! - **Append-only registrations**: each view carries an ordered chain of
//!   named affine transforms whose composite is derived, never stored.
//!
//! - **Time-shifted sources**: a time origin marks leading time points as
//!   missing, and loaders refuse to read them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spimdata::dataset::{DatasetBuilder, SourceImage};
//! use spimdata::document::{DocumentIo, DocumentOptions};
//! use spimdata::loader::PixelType;
//!
//! let source = SourceImage::new("embryo", "/data/embryo.tif", PixelType::Gray16)
//!     .with_size(512, 512, 40)
//!     .with_channels(2)
//!     .with_frames(10)
//!     .with_time_origin(3);
//!
//! let mut data = DatasetBuilder::new().build(&source)?;
//! data.scale_uniform("downsample", 0.5);
//!
//! let io = DocumentIo::builtin(DocumentOptions::default())?;
//! io.save(&data, "embryo.xml")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`entity`]: attribute records, the tag table and the per-setup store
//! - [`sequence`]: view ids, time points, view setups and missing views
//! - [`registration`]: affine transforms and registration chains
//! - [`codec`]: element trees, value encodings, codecs and their registry
//! - [`loader`]: image-loader descriptors and time-shifted loading
//! - [`dataset`]: whole datasets, the builder and dataset-wide helpers
//! - [`document`]: XML documents for whole datasets

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod dataset;
pub mod document;
pub mod entity;
pub mod loader;
pub mod registration;
pub mod sequence;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::codec::{AttributeCodec, CodecError, CodecRegistry, Element};
    pub use crate::dataset::{DatasetBuilder, DatasetError, SourceImage, SpimData};
    pub use crate::document::{DocumentError, DocumentIo, DocumentOptions, UnknownAttributePolicy};
    pub use crate::entity::{
        Angle, Attribute, AttributeKind, AttributeStore, Channel, Displaysettings, Entity,
        Illumination,
    };
    pub use crate::loader::{ImageLoaderDescriptor, LoaderError, PixelType, TimeShiftedLoader};
    pub use crate::registration::{AffineTransform3D, ViewRegistration, ViewRegistrations};
    pub use crate::sequence::{
        MissingViewError, MissingViews, SequenceDescription, TimeOriginShift, TimePoints, ViewId,
        ViewSetup,
    };
}
