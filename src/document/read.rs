use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use super::{
    DocumentError, DocumentIo, UnknownAttributePolicy, AFFINE_TAG, ATTRIBUTES_TAG, BASE_PATH_TAG,
    MISSING_VIEWS_TAG, MISSING_VIEW_TAG, REGISTRATIONS_TAG, REGISTRATION_TAG, SEQUENCE_TAG,
    SETUP_ATTRIBUTES_TAG, SPIMDATA_TAG, TIMEPOINTS_TAG, TRANSFORM_NAME_TAG, TRANSFORM_TAG,
    VIEW_SETUPS_TAG, VIEW_SETUP_TAG, VOXEL_SIZE_TAG,
};
use crate::codec::values::{get_double_array, get_int, get_int_array, get_long_array, parse_int};
use crate::codec::{CodecError, Element};
use crate::dataset::SpimData;
use crate::entity::{Attribute, AttributeKind};
use crate::loader::{ImageLoaderDescriptor, IMAGEPLUS_LOADER_FORMAT, IMAGE_LOADER_TAG};
use crate::registration::{AffineTransform3D, ViewRegistration, ViewRegistrations, ViewTransform};
use crate::sequence::{
    Dimensions, MissingViews, SequenceDescription, TimePoints, ViewId, ViewSetup, VoxelDimensions,
};

/// Attributes listed under `<ViewSetups>`, keyed by kind and id
#[derive(Default)]
struct AttributeLists {
    lists: BTreeMap<AttributeKind, BTreeMap<i32, Attribute>>,
    skipped: BTreeSet<String>,
}

impl DocumentIo<'_> {
    pub(super) fn read_spimdata(&self, root: &Element) -> Result<SpimData, DocumentError> {
        if root.name() != SPIMDATA_TAG {
            return Err(DocumentError::InvalidStructure(format!(
                "expected <{}> root, found <{}>",
                SPIMDATA_TAG,
                root.name()
            )));
        }

        let base_path = root.child(BASE_PATH_TAG).map_or(".", |e| e.text());
        let sequence = self.read_sequence(
            root.child(SEQUENCE_TAG)
                .ok_or(DocumentError::MissingSection(SEQUENCE_TAG))?,
        )?;
        let registrations = match root.child(REGISTRATIONS_TAG) {
            Some(element) => read_registrations(element)?,
            None => ViewRegistrations::new(),
        };

        Ok(SpimData::new(base_path, sequence, registrations))
    }

    fn read_sequence(&self, element: &Element) -> Result<SequenceDescription, DocumentError> {
        let timepoints = read_timepoints(
            element
                .child(TIMEPOINTS_TAG)
                .ok_or(DocumentError::MissingSection(TIMEPOINTS_TAG))?,
        )?;
        let mut sequence = SequenceDescription::new(timepoints);

        if let Some(setups) = element.child(VIEW_SETUPS_TAG) {
            let lists = self.read_attribute_lists(setups)?;
            for setup in setups.children_named(VIEW_SETUP_TAG) {
                sequence.add_setup(self.read_view_setup(setup, &lists)?)?;
            }
        }

        if let Some(loader) = element.child(IMAGE_LOADER_TAG) {
            let format = loader.attribute("format").unwrap_or_default();
            if format != IMAGEPLUS_LOADER_FORMAT && self.skips_unknown() {
                warn!("Skipping image loader of unknown format {:?}", format);
            } else {
                sequence.set_image_loader(ImageLoaderDescriptor::from_element(loader)?);
            }
        }

        if let Some(missing) = element.child(MISSING_VIEWS_TAG) {
            sequence.set_missing_views(read_missing_views(missing)?);
        }
        Ok(sequence)
    }

    fn skips_unknown(&self) -> bool {
        self.options.unknown_attributes == UnknownAttributePolicy::Skip
    }

    fn read_attribute_lists(&self, setups: &Element) -> Result<AttributeLists, DocumentError> {
        let mut result = AttributeLists::default();

        for list in setups.children_named(ATTRIBUTES_TAG) {
            let name = list.require_attribute("name")?;
            let Some(kind) = AttributeKind::from_attribute_name(name) else {
                self.unknown_attribute(CodecError::UnknownAttributeType(name.to_string()))?;
                result.skipped.insert(name.to_string());
                continue;
            };

            let attributes = result.lists.entry(kind).or_default();
            for child in list.children() {
                let attribute = match self.registry.decode(child) {
                    Ok(attribute) => attribute,
                    Err(e @ CodecError::UnknownAttributeType(_)) => {
                        self.unknown_attribute(e)?;
                        result.skipped.insert(name.to_string());
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                if attribute.kind() != kind {
                    return Err(DocumentError::InvalidStructure(format!(
                        "<{}> listed under {} attributes",
                        attribute.tag(),
                        name
                    )));
                }
                attributes.insert(attribute.id(), attribute);
            }
        }

        debug!(
            "Read {} attribute lists",
            result.lists.len() + result.skipped.len()
        );
        Ok(result)
    }

    fn unknown_attribute(&self, error: CodecError) -> Result<(), DocumentError> {
        match self.options.unknown_attributes {
            UnknownAttributePolicy::Abort => Err(error.into()),
            UnknownAttributePolicy::Skip => {
                warn!("Skipping attribute: {}", error);
                Ok(())
            }
        }
    }

    fn read_view_setup(
        &self,
        element: &Element,
        lists: &AttributeLists,
    ) -> Result<ViewSetup, DocumentError> {
        let id = get_int(element, "id")?;
        let name = match element.child("name") {
            Some(name) => name.text().to_string(),
            None => id.to_string(),
        };

        let size = match element.child("size") {
            Some(_) => {
                let size = get_long_array(element, "size")?;
                let [w, h, d] = triple(VIEW_SETUP_TAG, size)?;
                Some(Dimensions::new(w, h, d))
            }
            None => None,
        };
        let voxel_size = match element.child(VOXEL_SIZE_TAG) {
            Some(voxel) => {
                let unit = voxel.child("unit").map_or("", |u| u.text());
                let size = triple(VOXEL_SIZE_TAG, get_double_array(voxel, "size")?)?;
                Some(VoxelDimensions::new(unit, size))
            }
            None => None,
        };

        let mut setup = ViewSetup::new(id, name, size, voxel_size);
        if let Some(attributes) = element.child(SETUP_ATTRIBUTES_TAG) {
            for reference in attributes.children() {
                let attribute_name = reference.name();
                let attribute_id = parse_int(attribute_name, reference.text())?;
                let found = AttributeKind::from_attribute_name(attribute_name)
                    .and_then(|kind| lists.lists.get(&kind))
                    .and_then(|list| list.get(&attribute_id));

                match found {
                    Some(attribute) => {
                        setup.set_attribute(attribute.clone());
                    }
                    None if self.skips_unknown() || lists.skipped.contains(attribute_name) => {
                        warn!(
                            "View setup {} drops unresolved {} {}",
                            id, attribute_name, attribute_id
                        );
                    }
                    None => {
                        return Err(DocumentError::UnknownReference {
                            setup: id,
                            name: attribute_name.to_string(),
                            id: attribute_id,
                        })
                    }
                }
            }
        }
        Ok(setup)
    }
}

fn triple<T: Copy>(element: &str, values: Vec<T>) -> Result<[T; 3], DocumentError> {
    let len = values.len();
    values.try_into().map_err(|_| {
        DocumentError::InvalidStructure(format!(
            "<{}> needs 3 values, found {}",
            element, len
        ))
    })
}

fn read_timepoints(element: &Element) -> Result<TimePoints, DocumentError> {
    match element.attribute("type").unwrap_or("range") {
        "range" => {
            let first = get_int(element, "first")?;
            let last = get_int(element, "last")?;
            if last < first {
                return Err(DocumentError::InvalidStructure(format!(
                    "time point range {}..={} is empty",
                    first, last
                )));
            }
            Ok(TimePoints::from_ids(first..=last))
        }
        "list" => Ok(TimePoints::from_ids(get_int_array(element, "list")?)),
        other => Err(DocumentError::InvalidStructure(format!(
            "unsupported time point type {:?}",
            other
        ))),
    }
}

fn view_id_attributes(element: &Element) -> Result<ViewId, DocumentError> {
    let timepoint = parse_int("timepoint", element.require_attribute("timepoint")?)?;
    let setup = parse_int("setup", element.require_attribute("setup")?)?;
    Ok(ViewId::new(timepoint, setup))
}

fn read_missing_views(element: &Element) -> Result<MissingViews, DocumentError> {
    let views = element
        .children_named(MISSING_VIEW_TAG)
        .map(view_id_attributes)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MissingViews::from_views(views))
}

fn read_registrations(element: &Element) -> Result<ViewRegistrations, DocumentError> {
    let mut registrations = ViewRegistrations::new();
    for registration in element.children_named(REGISTRATION_TAG) {
        let view = view_id_attributes(registration)?;
        let mut transforms = registration
            .children_named(TRANSFORM_TAG)
            .map(read_transform)
            .collect::<Result<Vec<_>, _>>()?;
        // stored outermost first
        transforms.reverse();
        registrations
            .insert(ViewRegistration::from_transforms(view, transforms))
            .map_err(|e| DocumentError::InvalidStructure(e.to_string()))?;
    }
    Ok(registrations)
}

fn read_transform(element: &Element) -> Result<ViewTransform, DocumentError> {
    let kind = element.attribute("type").unwrap_or("affine");
    if kind != "affine" {
        return Err(DocumentError::InvalidStructure(format!(
            "unsupported view transform type {:?}",
            kind
        )));
    }
    let name = match element.child(TRANSFORM_NAME_TAG) {
        Some(name) => name.text().to_string(),
        None => String::new(),
    };
    let values = get_double_array(element, AFFINE_TAG)?;
    let m: [f64; 12] = values.try_into().map_err(|v: Vec<f64>| CodecError::MalformedValue {
        element: AFFINE_TAG.to_string(),
        value: format!("{:?}", v),
        expected: "12 doubles",
    })?;
    Ok(ViewTransform::new(name, AffineTransform3D::from_row_major(m)))
}
