use serde::{Deserialize, Serialize};

/// What to do with an attribute whose tag no codec handles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownAttributePolicy {
    /// Fail the whole document
    #[default]
    Abort,
    /// Drop the attribute with a warning
    Skip,
}

/// Options for reading and writing documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Handling of unknown attribute tags on read
    pub unknown_attributes: UnknownAttributePolicy,
    /// Spaces per nesting level when rendering XML
    pub indent: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            unknown_attributes: UnknownAttributePolicy::Abort,
            indent: 2,
        }
    }
}

impl DocumentOptions {
    /// Set the unknown-attribute policy
    pub fn with_unknown_attributes(mut self, policy: UnknownAttributePolicy) -> Self {
        self.unknown_attributes = policy;
        self
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
