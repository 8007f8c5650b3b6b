//! # SpimData Documents
//!
//! Whole-dataset XML documents in the BigDataViewer layout:
//!
//! ```text
//! SpimData version="0.2"
//! ├── BasePath type="relative"
//! ├── SequenceDescription
//! │   ├── ImageLoader format="..."
//! │   ├── ViewSetups
//! │   │   ├── ViewSetup          id, name, size, voxelSize, attributes (by id)
//! │   │   └── Attributes name=   one list per attribute kind, encoded by codecs
//! │   ├── Timepoints type="range" | "list"
//! │   └── MissingViews           absent when nothing is known to be missing
//! └── ViewRegistrations
//!     └── ViewRegistration timepoint= setup=
//!         └── ViewTransform type="affine"   outermost transform first
//! ```
//!
//! Registration chains are written with the last applied transform first
//! and replayed in application order on read; composites are never stored.
//!
//! Attributes go through a [`CodecRegistry`]. An attribute tag the registry
//! does not know is a data error, and [`UnknownAttributePolicy`] decides
//! whether the whole document fails or the attribute is dropped.

mod error;
mod options;
mod read;
mod write;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

pub use error::DocumentError;
pub use options::{DocumentOptions, UnknownAttributePolicy};

use crate::codec::xml::{from_xml_str, read_xml, to_xml_string, write_xml};
use crate::codec::{CodecRegistry, Element};
use crate::dataset::SpimData;

/// Root element
pub const SPIMDATA_TAG: &str = "SpimData";
/// Version written to the root element
pub const DOCUMENT_VERSION: &str = "0.2";

const BASE_PATH_TAG: &str = "BasePath";
const SEQUENCE_TAG: &str = "SequenceDescription";
const VIEW_SETUPS_TAG: &str = "ViewSetups";
const VIEW_SETUP_TAG: &str = "ViewSetup";
const ATTRIBUTES_TAG: &str = "Attributes";
const SETUP_ATTRIBUTES_TAG: &str = "attributes";
const VOXEL_SIZE_TAG: &str = "voxelSize";
const TIMEPOINTS_TAG: &str = "Timepoints";
const MISSING_VIEWS_TAG: &str = "MissingViews";
const MISSING_VIEW_TAG: &str = "MissingView";
const REGISTRATIONS_TAG: &str = "ViewRegistrations";
const REGISTRATION_TAG: &str = "ViewRegistration";
const TRANSFORM_TAG: &str = "ViewTransform";
const TRANSFORM_NAME_TAG: &str = "Name";
const AFFINE_TAG: &str = "affine";

/// Reads and writes [`SpimData`] documents with a given codec registry
#[derive(Debug, Clone, Copy)]
pub struct DocumentIo<'a> {
    registry: &'a CodecRegistry,
    options: DocumentOptions,
}

impl<'a> DocumentIo<'a> {
    /// Document I/O backed by `registry`
    pub fn new(registry: &'a CodecRegistry, options: DocumentOptions) -> Self {
        Self { registry, options }
    }

    /// Options in effect
    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Encode a dataset as a `<SpimData>` tree
    pub fn to_element(&self, data: &SpimData) -> Result<Element, DocumentError> {
        self.write_spimdata(data)
    }

    /// Decode a `<SpimData>` tree
    pub fn from_element(&self, root: &Element) -> Result<SpimData, DocumentError> {
        self.read_spimdata(root)
    }

    /// Render a dataset as XML text
    pub fn to_xml_string(&self, data: &SpimData) -> Result<String, DocumentError> {
        let root = self.to_element(data)?;
        Ok(to_xml_string(&root, self.options.indent)?)
    }

    /// Parse a dataset from XML text
    pub fn from_xml_str(&self, xml: &str) -> Result<SpimData, DocumentError> {
        self.from_element(&from_xml_str(xml)?)
    }

    /// Write a dataset to an XML file
    pub fn save<P: AsRef<Path>>(&self, data: &SpimData, path: P) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let root = self.to_element(data)?;
        let mut out = BufWriter::new(File::create(path)?);
        write_xml(&mut out, &root, self.options.indent)?;
        out.flush()?;
        info!(
            "Saved {} setups, {} registrations to {}",
            data.sequence().setups().count(),
            data.registrations().len(),
            path.display()
        );
        Ok(())
    }

    /// Read a dataset from an XML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<SpimData, DocumentError> {
        let path = path.as_ref();
        let root = read_xml(BufReader::new(File::open(path)?))?;
        let data = self.from_element(&root)?;
        info!(
            "Loaded {} setups, {} registrations from {}",
            data.sequence().setups().count(),
            data.registrations().len(),
            path.display()
        );
        Ok(data)
    }
}

impl DocumentIo<'static> {
    /// Document I/O backed by the process-wide built-in registry
    pub fn builtin(options: DocumentOptions) -> Result<Self, DocumentError> {
        Ok(Self::new(CodecRegistry::global()?, options))
    }
}
