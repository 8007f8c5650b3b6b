use crate::codec::CodecError;
use crate::sequence::SequenceError;

/// Errors that can occur while reading or writing a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error encoding or decoding an element
    #[error("Codec error: {0}")]
    CodecError(#[from] CodecError),

    /// Error assembling the sequence description
    #[error("Sequence error: {0}")]
    SequenceError(#[from] SequenceError),

    /// A required section is absent
    #[error("Missing section <{0}>")]
    MissingSection(&'static str),

    /// The document is not laid out as expected
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),

    /// A setup references an attribute that is not listed
    #[error("View setup {setup} references unknown {name} {id}")]
    UnknownReference {
        /// Referencing setup
        setup: i32,
        /// Attribute name
        name: String,
        /// Referenced id
        id: i32,
    },

    /// Two setups carry different attributes under the same id
    #[error("Conflicting {tag} attributes with id {id}")]
    ConflictingAttribute {
        /// Attribute tag
        tag: &'static str,
        /// Shared id
        id: i32,
    },
}
