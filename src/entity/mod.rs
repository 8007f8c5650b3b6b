//! # Entities and Attributes
//!
//! Every piece of metadata attached to a view setup is a small named entity:
//! an integer id plus a display name. Entities are plain records; ordering is
//! provided by [`by_id`] rather than by a shared base type.
//!
//! ## Attribute Tags
//!
//! Attributes are keyed by a type tag taken from a fixed table
//! ([`ATTRIBUTE_TAGS`]). The same tag names the XML element the attribute is
//! serialized to, and a view setup stores at most one attribute per tag.
//!
//! | Kind | Tag | Attribute name |
//! |------|-----|----------------|
//! | Channel | `Channel` | `channel` |
//! | Angle | `Angle` | `angle` |
//! | Illumination | `Illumination` | `illumination` |
//! | Displaysettings | `Displaysettings` | `displaysettings` |

use std::cmp::Ordering;

mod attribute;
mod displaysettings;
mod error;
mod identity;
mod store;


pub use attribute::{Attribute, AttributeKind, ATTRIBUTE_TAGS};
pub use displaysettings::{
    apply_displaysettings, ColorConverterSettings, ConverterSettings, Displaysettings,
    DEFAULT_PROJECTION_MODE,
};
pub use error::UnsupportedConverter;
pub use identity::{Angle, Channel, Illumination};
pub use store::AttributeStore;

/// Identity shared by all attribute entities
pub trait Entity {
    /// Unique id of the entity within its kind
    fn id(&self) -> i32;

    /// Human-readable name
    fn name(&self) -> &str;
}

/// Comparator ordering entities by id
pub fn by_id<E: Entity + ?Sized>(a: &E, b: &E) -> Ordering {
    a.id().cmp(&b.id())
}
