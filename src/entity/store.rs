use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Angle, Attribute, AttributeKind, Channel, Displaysettings, Illumination};

/// Per-setup attribute map holding at most one attribute per type tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeStore {
    entries: BTreeMap<AttributeKind, Attribute>,
}

impl AttributeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an attribute under its tag, replacing any previous one.
    ///
    /// Returns the replaced attribute, if any.
    pub fn set(&mut self, attribute: impl Into<Attribute>) -> Option<Attribute> {
        let attribute = attribute.into();
        self.entries.insert(attribute.kind(), attribute)
    }

    /// Look up an attribute by tag or attribute name
    pub fn get(&self, tag: &str) -> Option<&Attribute> {
        AttributeKind::resolve(tag).and_then(|kind| self.entries.get(&kind))
    }

    /// Look up an attribute by kind
    pub fn get_kind(&self, kind: AttributeKind) -> Option<&Attribute> {
        self.entries.get(&kind)
    }

    /// Remove the attribute stored under `tag`; absent tags are a no-op
    pub fn remove(&mut self, tag: &str) -> Option<Attribute> {
        AttributeKind::resolve(tag).and_then(|kind| self.entries.remove(&kind))
    }

    /// Remove the attribute of the given kind, if present
    pub fn remove_kind(&mut self, kind: AttributeKind) -> Option<Attribute> {
        self.entries.remove(&kind)
    }

    /// Remove several tags one at a time; returns how many were present
    pub fn remove_all<I, S>(&mut self, tags: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .filter(|tag| self.remove(tag.as_ref()).is_some())
            .count()
    }

    /// Channel attribute, if set
    pub fn channel(&self) -> Option<&Channel> {
        match self.entries.get(&AttributeKind::Channel) {
            Some(Attribute::Channel(c)) => Some(c),
            _ => None,
        }
    }

    /// Angle attribute, if set
    pub fn angle(&self) -> Option<&Angle> {
        match self.entries.get(&AttributeKind::Angle) {
            Some(Attribute::Angle(a)) => Some(a),
            _ => None,
        }
    }

    /// Illumination attribute, if set
    pub fn illumination(&self) -> Option<&Illumination> {
        match self.entries.get(&AttributeKind::Illumination) {
            Some(Attribute::Illumination(i)) => Some(i),
            _ => None,
        }
    }

    /// Display settings, if set
    pub fn displaysettings(&self) -> Option<&Displaysettings> {
        match self.entries.get(&AttributeKind::Displaysettings) {
            Some(Attribute::Displaysettings(ds)) => Some(ds),
            _ => None,
        }
    }

    /// Number of stored attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in tag-table order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }
}
