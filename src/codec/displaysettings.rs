use super::entity::{entity_element, read_entity};
use super::values::{
    bool_element, double_element, get_bool, get_double, get_int_array, int_array_element,
    text_element,
};
use super::{AttributeCodec, CodecError, Element};
use crate::entity::{Attribute, AttributeKind, Displaysettings, DEFAULT_PROJECTION_MODE};

/// Element holding the projection mode; underscore keeps it a valid XML name
pub const PROJECTION_MODE_TAG: &str = "Projection_Mode";

/// Codec for [`Displaysettings`]:
///
/// ```xml
/// <Displaysettings>
///   <id>1</id>
///   <name>1</name>
///   <isset>true</isset>
///   <color>255 0 0 255</color>
///   <min>0.0</min>
///   <max>255.0</max>
///   <Projection_Mode>Sum</Projection_Mode>
/// </Displaysettings>
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplaysettingsCodec;

impl AttributeCodec for DisplaysettingsCodec {
    fn kind(&self) -> AttributeKind {
        AttributeKind::Displaysettings
    }

    fn encode(&self, attribute: &Attribute) -> Result<Element, CodecError> {
        let ds = match attribute {
            Attribute::Displaysettings(ds) => ds,
            other => {
                return Err(CodecError::KindMismatch {
                    expected: self.kind().tag(),
                    found: other.tag(),
                })
            }
        };

        let mut element = entity_element(self.kind().tag(), ds.id, &ds.name);
        element.push(bool_element("isset", ds.is_set));
        element.push(int_array_element("color", &ds.color));
        element.push(double_element("min", ds.min));
        element.push(double_element("max", ds.max));
        element.push(text_element(PROJECTION_MODE_TAG, &ds.projection_mode));
        Ok(element)
    }

    fn decode(&self, element: &Element) -> Result<Attribute, CodecError> {
        let (id, name) = read_entity(element)?;
        let mut ds = Displaysettings::new(id, name);

        ds.is_set = get_bool(element, "isset")?;
        let color = get_int_array(element, "color")?;
        ds.color = color.as_slice().try_into().map_err(|_| CodecError::MalformedValue {
            element: "color".to_string(),
            value: format!("{:?}", color),
            expected: "4 integers",
        })?;
        ds.min = get_double(element, "min")?;
        ds.max = get_double(element, "max")?;
        ds.projection_mode = element
            .child(PROJECTION_MODE_TAG)
            .map(|e| e.text().to_string())
            .unwrap_or_else(|| DEFAULT_PROJECTION_MODE.to_string());

        Ok(ds.into())
    }
}
