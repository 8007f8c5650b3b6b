use super::values::{get_int, int_element, text_element};
use super::{AttributeCodec, CodecError, Element};
use crate::entity::{Angle, Attribute, AttributeKind, Channel, Displaysettings, Illumination};

/// Root element carrying an entity's `<id>` and `<name>`
pub fn entity_element(tag: &str, id: i32, name: &str) -> Element {
    Element::new(tag)
        .with_child(int_element("id", i64::from(id)))
        .with_child(text_element("name", name))
}

/// Read `<id>` and `<name>`; a missing name falls back to the id
pub fn read_entity(element: &Element) -> Result<(i32, String), CodecError> {
    let id = get_int(element, "id")?;
    let name = match element.child("name") {
        Some(name) => name.text().to_string(),
        None => id.to_string(),
    };
    Ok((id, name))
}

fn check_kind(expected: AttributeKind, attribute: &Attribute) -> Result<(), CodecError> {
    if attribute.kind() == expected {
        Ok(())
    } else {
        Err(CodecError::KindMismatch {
            expected: expected.tag(),
            found: attribute.tag(),
        })
    }
}

/// Codec for attributes that are nothing but an id and a name
#[derive(Debug, Clone, Copy)]
pub struct IdentityCodec {
    kind: AttributeKind,
}

impl IdentityCodec {
    /// Codec for the given kind
    pub fn new(kind: AttributeKind) -> Self {
        Self { kind }
    }
}

impl AttributeCodec for IdentityCodec {
    fn kind(&self) -> AttributeKind {
        self.kind
    }

    fn encode(&self, attribute: &Attribute) -> Result<Element, CodecError> {
        check_kind(self.kind, attribute)?;
        Ok(entity_element(self.kind.tag(), attribute.id(), attribute.name()))
    }

    fn decode(&self, element: &Element) -> Result<Attribute, CodecError> {
        let (id, name) = read_entity(element)?;
        Ok(match self.kind {
            AttributeKind::Channel => Channel::new(id, name).into(),
            AttributeKind::Angle => Angle::new(id, name).into(),
            AttributeKind::Illumination => Illumination::new(id, name).into(),
            AttributeKind::Displaysettings => Displaysettings::new(id, name).into(),
        })
    }
}
