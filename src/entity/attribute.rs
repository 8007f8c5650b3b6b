use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Angle, Channel, Displaysettings, Entity, Illumination};

/// The kinds of attribute a view setup can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeKind {
    /// [`Channel`]
    Channel,
    /// [`Angle`]
    Angle,
    /// [`Illumination`]
    Illumination,
    /// [`Displaysettings`]
    Displaysettings,
}

/// Tag table: kind, element tag, attribute name used in `<attributes>` references
pub const ATTRIBUTE_TAGS: [(AttributeKind, &str, &str); 4] = [
    (AttributeKind::Channel, "Channel", "channel"),
    (AttributeKind::Angle, "Angle", "angle"),
    (AttributeKind::Illumination, "Illumination", "illumination"),
    (AttributeKind::Displaysettings, "Displaysettings", "displaysettings"),
];

impl AttributeKind {
    /// All kinds, in tag-table order
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::Channel,
        AttributeKind::Angle,
        AttributeKind::Illumination,
        AttributeKind::Displaysettings,
    ];

    fn row(self) -> (AttributeKind, &'static str, &'static str) {
        ATTRIBUTE_TAGS[self as usize]
    }

    /// Element tag, e.g. `Displaysettings`
    pub fn tag(self) -> &'static str {
        self.row().1
    }

    /// Lowercase attribute name, e.g. `displaysettings`
    pub fn attribute_name(self) -> &'static str {
        self.row().2
    }

    /// Look up a kind by its exact element tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        ATTRIBUTE_TAGS
            .iter()
            .find(|(_, t, _)| *t == tag)
            .map(|(kind, _, _)| *kind)
    }

    /// Look up a kind by its exact attribute name
    pub fn from_attribute_name(name: &str) -> Option<Self> {
        ATTRIBUTE_TAGS
            .iter()
            .find(|(_, _, n)| *n == name)
            .map(|(kind, _, _)| *kind)
    }

    /// Lenient lookup used for user input: trims and ignores case, and
    /// accepts either the tag or the attribute name.
    pub fn resolve(name: &str) -> Option<Self> {
        let name = name.trim();
        ATTRIBUTE_TAGS
            .iter()
            .find(|(_, tag, attr)| tag.eq_ignore_ascii_case(name) || attr.eq_ignore_ascii_case(name))
            .map(|(kind, _, _)| *kind)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A typed attribute attached to a view setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Attribute {
    /// Channel identity
    Channel(Channel),
    /// Angle identity
    Angle(Angle),
    /// Illumination identity
    Illumination(Illumination),
    /// Display range, color and projection mode
    Displaysettings(Displaysettings),
}

impl Attribute {
    /// Kind of this attribute
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Channel(_) => AttributeKind::Channel,
            Attribute::Angle(_) => AttributeKind::Angle,
            Attribute::Illumination(_) => AttributeKind::Illumination,
            Attribute::Displaysettings(_) => AttributeKind::Displaysettings,
        }
    }

    /// Type tag the attribute is stored and serialized under
    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    fn entity(&self) -> &dyn Entity {
        match self {
            Attribute::Channel(e) => e,
            Attribute::Angle(e) => e,
            Attribute::Illumination(e) => e,
            Attribute::Displaysettings(e) => e,
        }
    }

    /// Entity id
    pub fn id(&self) -> i32 {
        self.entity().id()
    }

    /// Entity name
    pub fn name(&self) -> &str {
        self.entity().name()
    }
}

impl Entity for Attribute {
    fn id(&self) -> i32 {
        Attribute::id(self)
    }

    fn name(&self) -> &str {
        Attribute::name(self)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Channel(e) => fmt::Display::fmt(e, f),
            Attribute::Angle(e) => fmt::Display::fmt(e, f),
            Attribute::Illumination(e) => fmt::Display::fmt(e, f),
            Attribute::Displaysettings(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl From<Channel> for Attribute {
    fn from(value: Channel) -> Self {
        Attribute::Channel(value)
    }
}

impl From<Angle> for Attribute {
    fn from(value: Angle) -> Self {
        Attribute::Angle(value)
    }
}

impl From<Illumination> for Attribute {
    fn from(value: Illumination) -> Self {
        Attribute::Illumination(value)
    }
}

impl From<Displaysettings> for Attribute {
    fn from(value: Displaysettings) -> Self {
        Attribute::Displaysettings(value)
    }
}
