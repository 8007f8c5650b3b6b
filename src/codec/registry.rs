use std::sync::OnceLock;

use log::debug;

use super::{AttributeCodec, CodecError, DisplaysettingsCodec, Element, IdentityCodec};
use crate::entity::{Attribute, AttributeKind};

static GLOBAL: OnceLock<CodecRegistry> = OnceLock::new();

/// Maps attribute tags to their codecs.
///
/// Populated by explicit `register` calls before any document is processed,
/// read-only afterwards.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: Vec<(String, Box<dyn AttributeCodec>)>,
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}

impl CodecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a codec for every built-in attribute kind
    pub fn builtin() -> Result<Self, CodecError> {
        let mut registry = Self::new();
        for kind in [
            AttributeKind::Channel,
            AttributeKind::Angle,
            AttributeKind::Illumination,
        ] {
            registry.register(kind.tag(), Box::new(IdentityCodec::new(kind)))?;
        }
        registry.register(
            AttributeKind::Displaysettings.tag(),
            Box::new(DisplaysettingsCodec),
        )?;
        Ok(registry)
    }

    /// Process-wide built-in registry, created on first use
    pub fn global() -> Result<&'static CodecRegistry, CodecError> {
        if let Some(registry) = GLOBAL.get() {
            return Ok(registry);
        }
        let registry = Self::builtin()?;
        Ok(GLOBAL.get_or_init(|| registry))
    }

    /// Associate `tag` with `codec`; a tag can only be registered once
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        codec: Box<dyn AttributeCodec>,
    ) -> Result<(), CodecError> {
        let tag = tag.into();
        if self.codec(&tag).is_some() {
            return Err(CodecError::DuplicateCodec { tag });
        }
        debug!("Registered codec for {} ({:?})", tag, codec.kind());
        self.codecs.push((tag, codec));
        Ok(())
    }

    /// Codec registered under `tag`
    pub fn codec(&self, tag: &str) -> Option<&dyn AttributeCodec> {
        self.codecs
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, codec)| codec.as_ref())
    }

    fn codec_for_kind(&self, kind: AttributeKind) -> Option<&dyn AttributeCodec> {
        self.codecs
            .iter()
            .find(|(_, codec)| codec.kind() == kind)
            .map(|(_, codec)| codec.as_ref())
    }

    /// Registered tags in registration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.codecs.iter().map(|(tag, _)| tag.as_str())
    }

    /// Number of registered codecs
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether no codec is registered
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Encode an attribute into its self-describing subtree
    pub fn encode(&self, attribute: &Attribute) -> Result<Element, CodecError> {
        let codec = self
            .codec_for_kind(attribute.kind())
            .ok_or_else(|| CodecError::UnknownAttributeType(attribute.tag().to_string()))?;
        codec.encode(attribute)
    }

    /// Decode a subtree, dispatching on the root element's name
    pub fn decode(&self, element: &Element) -> Result<Attribute, CodecError> {
        let codec = self
            .codec(element.name())
            .ok_or_else(|| CodecError::UnknownAttributeType(element.name().to_string()))?;
        codec.decode(element)
    }
}
