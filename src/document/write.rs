use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;

use super::{
    DocumentError, DocumentIo, AFFINE_TAG, ATTRIBUTES_TAG, BASE_PATH_TAG, DOCUMENT_VERSION,
    MISSING_VIEWS_TAG, MISSING_VIEW_TAG, REGISTRATIONS_TAG, REGISTRATION_TAG, SEQUENCE_TAG,
    SETUP_ATTRIBUTES_TAG, SPIMDATA_TAG, TIMEPOINTS_TAG, TRANSFORM_NAME_TAG, TRANSFORM_TAG,
    VIEW_SETUPS_TAG, VIEW_SETUP_TAG, VOXEL_SIZE_TAG,
};
use crate::codec::Element;
use crate::dataset::SpimData;
use crate::codec::values::{
    double_array_element, int_array_element, int_element, long_array_element, text_element,
};
use crate::entity::{Attribute, AttributeKind};
use crate::registration::{ViewRegistration, ViewRegistrations};
use crate::sequence::{MissingViews, SequenceDescription, TimePoints, ViewSetup};

impl DocumentIo<'_> {
    pub(super) fn write_spimdata(&self, data: &SpimData) -> Result<Element, DocumentError> {
        let mut root = Element::new(SPIMDATA_TAG).with_attribute("version", DOCUMENT_VERSION);
        root.push(base_path_element(data.base_path()));
        root.push(self.write_sequence(data.sequence())?);
        root.push(registrations_element(data.registrations()));
        Ok(root)
    }

    fn write_sequence(&self, sequence: &SequenceDescription) -> Result<Element, DocumentError> {
        let mut element = Element::new(SEQUENCE_TAG);
        if let Some(loader) = sequence.image_loader() {
            element.push(loader.to_element());
        }
        element.push(self.write_view_setups(sequence)?);
        element.push(timepoints_element(sequence.timepoints()));
        if let Some(missing) = missing_views_element(sequence.missing_views()) {
            element.push(missing);
        }
        Ok(element)
    }

    /// Setups reference attributes by id; each distinct attribute is
    /// written once in the list of its kind
    fn write_view_setups(&self, sequence: &SequenceDescription) -> Result<Element, DocumentError> {
        let mut element = Element::new(VIEW_SETUPS_TAG);
        let mut lists: BTreeMap<AttributeKind, BTreeMap<i32, &Attribute>> = BTreeMap::new();

        for setup in sequence.setups() {
            element.push(view_setup_element(setup));
            for attribute in setup.attributes().iter() {
                match lists.entry(attribute.kind()).or_default().entry(attribute.id()) {
                    Entry::Vacant(slot) => {
                        slot.insert(attribute);
                    }
                    Entry::Occupied(slot) if *slot.get() != attribute => {
                        return Err(DocumentError::ConflictingAttribute {
                            tag: attribute.tag(),
                            id: attribute.id(),
                        });
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        for (kind, attributes) in lists {
            let mut list =
                Element::new(ATTRIBUTES_TAG).with_attribute("name", kind.attribute_name());
            for attribute in attributes.values() {
                list.push(self.registry.encode(attribute)?);
            }
            element.push(list);
        }
        Ok(element)
    }
}

fn base_path_element(base_path: &Path) -> Element {
    let kind = if base_path.is_absolute() {
        "absolute"
    } else {
        "relative"
    };
    Element::new(BASE_PATH_TAG)
        .with_attribute("type", kind)
        .with_text(base_path.to_string_lossy())
}

fn view_setup_element(setup: &ViewSetup) -> Element {
    let mut element = Element::new(VIEW_SETUP_TAG)
        .with_child(int_element("id", i64::from(setup.id())))
        .with_child(text_element("name", setup.name()));
    if let Some(size) = setup.size() {
        element.push(long_array_element("size", &size.0));
    }
    if let Some(voxel_size) = setup.voxel_size() {
        element.push(
            Element::new(VOXEL_SIZE_TAG)
                .with_child(text_element("unit", &voxel_size.unit))
                .with_child(double_array_element("size", &voxel_size.size)),
        );
    }

    let mut attributes = Element::new(SETUP_ATTRIBUTES_TAG);
    for attribute in setup.attributes().iter() {
        attributes.push(int_element(
            attribute.kind().attribute_name(),
            i64::from(attribute.id()),
        ));
    }
    element.push(attributes);
    element
}

fn timepoints_element(timepoints: &TimePoints) -> Element {
    match timepoints.as_range() {
        Some((first, last)) => Element::new(TIMEPOINTS_TAG)
            .with_attribute("type", "range")
            .with_child(int_element("first", i64::from(first)))
            .with_child(int_element("last", i64::from(last))),
        None => {
            let ids: Vec<i32> = timepoints.iter().collect();
            Element::new(TIMEPOINTS_TAG)
                .with_attribute("type", "list")
                .with_child(int_array_element("list", &ids))
        }
    }
}

/// `None` when nothing is known to be missing, so the sentinel survives a
/// round trip
fn missing_views_element(missing: &MissingViews) -> Option<Element> {
    if missing.is_none_known() {
        return None;
    }
    let mut element = Element::new(MISSING_VIEWS_TAG);
    for view in missing.iter() {
        element.push(
            Element::new(MISSING_VIEW_TAG)
                .with_attribute("timepoint", view.timepoint.to_string())
                .with_attribute("setup", view.setup.to_string()),
        );
    }
    Some(element)
}

fn registrations_element(registrations: &ViewRegistrations) -> Element {
    let mut element = Element::new(REGISTRATIONS_TAG);
    for registration in registrations.iter() {
        element.push(registration_element(registration));
    }
    element
}

fn registration_element(registration: &ViewRegistration) -> Element {
    let view = registration.view_id();
    let mut element = Element::new(REGISTRATION_TAG)
        .with_attribute("timepoint", view.timepoint.to_string())
        .with_attribute("setup", view.setup.to_string());
    // outermost first
    for transform in registration.transforms().iter().rev() {
        element.push(
            Element::new(TRANSFORM_TAG)
                .with_attribute("type", "affine")
                .with_child(text_element(TRANSFORM_NAME_TAG, &transform.name))
                .with_child(double_array_element(
                    AFFINE_TAG,
                    transform.affine.row_major(),
                )),
        );
    }
    element
}
