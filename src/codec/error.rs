/// Errors that can occur while registering codecs or encoding/decoding
/// attribute trees
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A codec was registered twice for the same tag
    #[error("Codec already registered for tag: {tag}")]
    DuplicateCodec {
        /// The contested tag
        tag: String,
    },

    /// No codec is registered for the tag
    #[error("Unknown attribute type: {0}")]
    UnknownAttributeType(String),

    /// A required child element is absent
    #[error("Missing element <{child}> in <{parent}>")]
    MissingElement {
        /// Element that was searched
        parent: String,
        /// Name of the missing child
        child: String,
    },

    /// Element text could not be parsed as the expected value type
    #[error("Malformed {expected} in <{element}>: {value:?}")]
    MalformedValue {
        /// Element holding the value
        element: String,
        /// Offending text
        value: String,
        /// Expected value type
        expected: &'static str,
    },

    /// A codec was handed an attribute of another kind
    #[error("Codec for {expected} cannot encode attribute {found}")]
    KindMismatch {
        /// Tag the codec handles
        expected: &'static str,
        /// Tag of the attribute it received
        found: &'static str,
    },

    /// Document does not form a single well-nested element tree
    #[error("Invalid XML structure: {0}")]
    InvalidStructure(String),

    /// Error from the XML reader
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// I/O error while writing XML
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// UTF-8 encoding error in names or text
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),
}

impl CodecError {
    /// Registry misconfiguration, raised at startup
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CodecError::DuplicateCodec { .. })
    }

    /// Problem with the data being decoded; the caller decides whether to
    /// skip the fragment or abort
    pub fn is_data_error(&self) -> bool {
        !self.is_configuration_error()
    }
}
