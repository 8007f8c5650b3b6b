//! # Attribute Codecs
//!
//! Attributes are serialized as small self-describing XML subtrees. The root
//! element is named after the attribute's tag and always carries `<id>` and
//! `<name>`; the remaining children are the attribute's own fields.
//!
//! The [`CodecRegistry`] maps tags to codecs. It is filled by an explicit
//! list of `register` calls at startup and is read-only afterwards:
//! registering the same tag twice is a configuration error, decoding an
//! unknown tag is a data error that the document loader may choose to skip.
//!
//! ```rust
//! use spimdata::codec::CodecRegistry;
//! use spimdata::entity::{Attribute, Displaysettings};
//!
//! let registry = CodecRegistry::builtin()?;
//! let mut ds = Displaysettings::with_id(1);
//! ds.is_set = true;
//! ds.max = 4095.0;
//!
//! let tree = registry.encode(&ds.clone().into())?;
//! assert_eq!(tree.name(), "Displaysettings");
//! assert_eq!(registry.decode(&tree)?, Attribute::Displaysettings(ds));
//! # Ok::<(), spimdata::codec::CodecError>(())
//! ```

mod displaysettings;
mod element;
mod entity;
mod error;
mod registry;
pub mod values;
pub mod xml;


pub use displaysettings::{DisplaysettingsCodec, PROJECTION_MODE_TAG};
pub use element::Element;
pub use entity::{entity_element, read_entity, IdentityCodec};
pub use error::CodecError;
pub use registry::CodecRegistry;

use crate::entity::{Attribute, AttributeKind};

/// Encode/decode pair for one attribute kind
pub trait AttributeCodec: Send + Sync {
    /// Kind of attribute handled by this codec
    fn kind(&self) -> AttributeKind;

    /// Encode an attribute of this codec's kind
    fn encode(&self, attribute: &Attribute) -> Result<Element, CodecError>;

    /// Decode a subtree rooted at this codec's tag
    fn decode(&self, element: &Element) -> Result<Attribute, CodecError>;
}
