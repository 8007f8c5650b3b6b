/// A converter that cannot hold display settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Converter of kind {kind} cannot store or receive display settings")]
pub struct UnsupportedConverter {
    /// Kind of the offending converter
    pub kind: String,
}
