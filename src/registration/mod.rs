//! # View Registrations
//!
//! Each view carries an ordered chain of named affine transforms that maps
//! its pixel coordinates into world space. The chain only grows: a new
//! transform is always applied after the existing composite, so
//!
//! ```text
//! composite' = transform × composite
//! ```
//!
//! with column vectors on the right (`x' = M·x`) in homogeneous 4×4 form.
//! The composite is derived from the chain and never stored on disk.
//!
//! ```rust
//! use spimdata::registration::{AffineTransform3D, ViewRegistration};
//! use spimdata::sequence::ViewId;
//!
//! let mut reg = ViewRegistration::new(ViewId::new(0, 0));
//! reg.pretransform("zoom", AffineTransform3D::scaling(2.0, 2.0, 2.0));
//! reg.pretransform("shift", AffineTransform3D::translation(1.0, 0.0, 0.0));
//! assert_eq!(reg.model().apply([1.0, 1.0, 1.0]), [3.0, 2.0, 2.0]);
//! ```

mod affine;
mod chain;
mod error;
mod registrations;


pub use affine::AffineTransform3D;
pub use chain::{ViewRegistration, ViewTransform, CALIBRATION_TRANSFORM_NAME};
pub use error::RegistrationError;
pub use registrations::ViewRegistrations;
