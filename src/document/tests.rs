use super::*;
use crate::codec::values::{double_array_element, int_element, text_element};
use crate::codec::CodecError;
use crate::dataset::{Calibration, ChannelDisplay, DatasetBuilder, SourceImage};
use crate::entity::{Angle, AttributeKind};
use crate::loader::PixelType;
use crate::registration::AffineTransform3D;
use crate::sequence::{MissingViews, SequenceDescription, TimePoints, ViewId};

fn sample_dataset() -> SpimData {
    let source = SourceImage::new("embryo", "/data/embryo.tif", PixelType::Gray16)
        .with_size(64, 32, 8)
        .with_channels(2)
        .with_frames(2)
        .with_time_origin(1)
        .with_calibration(Calibration {
            pixel_width: 0.1,
            pixel_height: 0.1,
            pixel_depth: 0.3,
            unit: "µm".to_string(),
            origin: [0.0; 3],
        })
        .with_channel_display(ChannelDisplay {
            min: 12.5,
            max: 1.0 / 3.0,
            lut_color: [255, 0, 255, 255],
        })
        .with_channel_display(ChannelDisplay::default());

    let mut data = DatasetBuilder::new().build(&source).unwrap();
    data.translate("shift", 1.0, 2.0, 3.0);
    data.pretransform(
        "rotate",
        AffineTransform3D::from_row_major([
            0.0, -1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        ]),
    );
    data
}

fn io() -> DocumentIo<'static> {
    DocumentIo::builtin(DocumentOptions::default()).unwrap()
}

fn skipping_io() -> DocumentIo<'static> {
    DocumentIo::builtin(
        DocumentOptions::default().with_unknown_attributes(UnknownAttributePolicy::Skip),
    )
    .unwrap()
}

#[test]
fn test_document_roundtrip() {
    let data = sample_dataset();

    let xml = io().to_xml_string(&data).unwrap();
    let parsed = io().from_xml_str(&xml).unwrap();

    assert_eq!(parsed, data);
}

#[test]
fn test_document_layout() {
    let data = sample_dataset();
    let root = io().to_element(&data).unwrap();

    assert_eq!(root.name(), SPIMDATA_TAG);
    assert_eq!(root.attribute("version"), Some(DOCUMENT_VERSION));
    let sequence = root.require_child(SEQUENCE_TAG).unwrap();
    let names: Vec<_> = sequence.children().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec!["ImageLoader", "ViewSetups", "Timepoints", "MissingViews"]
    );

    let setups = sequence.require_child(VIEW_SETUPS_TAG).unwrap();
    let lists: Vec<_> = setups
        .children_named(ATTRIBUTES_TAG)
        .map(|l| l.attribute("name").unwrap())
        .collect();
    assert_eq!(lists, vec!["channel", "displaysettings"]);

    let timepoints = sequence.require_child(TIMEPOINTS_TAG).unwrap();
    assert_eq!(timepoints.attribute("type"), Some("range"));
    assert_eq!(timepoints.require_child("last").unwrap().text(), "2");
}

#[test]
fn test_registrations_written_outermost_first() {
    let data = sample_dataset();
    let root = io().to_element(&data).unwrap();

    let registration = root
        .require_child(REGISTRATIONS_TAG)
        .unwrap()
        .children_named(REGISTRATION_TAG)
        .find(|r| r.attribute("timepoint") == Some("2") && r.attribute("setup") == Some("1"))
        .unwrap();
    let names: Vec<_> = registration
        .children_named(TRANSFORM_TAG)
        .map(|t| t.require_child(TRANSFORM_NAME_TAG).unwrap().text())
        .collect();

    assert_eq!(names, vec!["rotate", "shift", "calibration"]);
}

#[test]
fn test_registration_replayed_on_read() {
    let data = sample_dataset();
    let parsed = io()
        .from_xml_str(&io().to_xml_string(&data).unwrap())
        .unwrap();

    let view = ViewId::new(1, 0);
    let original = data.registrations().get(&view).unwrap();
    let replayed = parsed.registrations().get(&view).unwrap();
    assert_eq!(replayed.transforms(), original.transforms());
    assert_eq!(replayed.model(), original.model());
}

#[test]
fn test_none_known_survives_roundtrip() {
    let mut sequence = SequenceDescription::new(TimePoints::from_ids([0, 3, 7]));
    sequence.set_missing_views(MissingViews::NoneKnown);
    let data = SpimData::new(".", sequence, Default::default());

    let xml = io().to_xml_string(&data).unwrap();
    assert!(!xml.contains(MISSING_VIEWS_TAG));
    assert!(xml.contains("type=\"list\""));
    let parsed = io().from_xml_str(&xml).unwrap();
    assert!(parsed.sequence().missing_views().is_none_known());
    assert_eq!(parsed.sequence().timepoints(), data.sequence().timepoints());

    let mut sequence = SequenceDescription::new(TimePoints::range(1));
    sequence.set_missing_views(MissingViews::from_views(Vec::new()));
    let data = SpimData::new(".", sequence, Default::default());
    let parsed = io().from_xml_str(&io().to_xml_string(&data).unwrap()).unwrap();
    assert_eq!(parsed.sequence().missing_views(), &MissingViews::Known(Default::default()));
}

/// Sample document with an extra attribute list the builtin registry
/// has no codec for, referenced from the first setup
fn with_unknown_attribute() -> String {
    let xml = io().to_xml_string(&sample_dataset()).unwrap();
    xml.replacen(
        "<attributes>",
        "<attributes><tile>0</tile>",
        1,
    )
    .replace(
        "</ViewSetups>",
        "<Attributes name=\"tile\"><Tile><id>0</id><name>0</name></Tile></Attributes></ViewSetups>",
    )
}

#[test]
fn test_unknown_attribute_aborts_by_default() {
    let err = io().from_xml_str(&with_unknown_attribute()).unwrap_err();
    assert!(matches!(
        err,
        DocumentError::CodecError(CodecError::UnknownAttributeType(ref name)) if name == "tile"
    ));
}

#[test]
fn test_unknown_attribute_skipped_on_request() {
    let parsed = skipping_io().from_xml_str(&with_unknown_attribute()).unwrap();
    assert_eq!(parsed, sample_dataset());
}

#[test]
fn test_unknown_tag_in_known_list() {
    let xml = io().to_xml_string(&sample_dataset()).unwrap().replace(
        "</ViewSetups>",
        "<Attributes name=\"angle\"><Tile><id>0</id></Tile></Attributes></ViewSetups>",
    );

    let err = io().from_xml_str(&xml).unwrap_err();
    assert!(matches!(
        err,
        DocumentError::CodecError(CodecError::UnknownAttributeType(ref tag)) if tag == "Tile"
    ));
    assert!(skipping_io().from_xml_str(&xml).is_ok());
}

#[test]
fn test_malformed_attribute_aborts_even_when_skipping() {
    let xml = io()
        .to_xml_string(&sample_dataset())
        .unwrap()
        .replacen("<isset>true</isset>", "<isset>yes</isset>", 1);

    let err = skipping_io().from_xml_str(&xml).unwrap_err();
    assert!(matches!(
        err,
        DocumentError::CodecError(CodecError::MalformedValue { expected: "boolean", .. })
    ));
}

#[test]
fn test_unresolved_reference() {
    let xml = io()
        .to_xml_string(&sample_dataset())
        .unwrap()
        .replacen("<channel>1</channel>", "<channel>9</channel>", 1);

    let err = io().from_xml_str(&xml).unwrap_err();
    assert!(matches!(
        err,
        DocumentError::UnknownReference { setup: 0, id: 9, ref name } if name == "channel"
    ));
}

#[test]
fn test_conflicting_attribute_ids() {
    let mut data = sample_dataset();
    let sequence = data.sequence_mut();
    sequence.setup_mut(0).unwrap().set_attribute(Angle::new(5, "front"));
    sequence.setup_mut(1).unwrap().set_attribute(Angle::new(5, "back"));

    let err = io().to_element(&data).unwrap_err();
    assert!(matches!(
        err,
        DocumentError::ConflictingAttribute { tag: "Angle", id: 5 }
    ));
}

#[test]
fn test_shared_attribute_written_once() {
    let mut data = sample_dataset();
    for setup in data.sequence_mut().setups_mut() {
        setup.set_attribute(Angle::new(0, "0 degrees"));
    }

    let root = io().to_element(&data).unwrap();
    let setups = root
        .require_child(SEQUENCE_TAG)
        .unwrap()
        .require_child(VIEW_SETUPS_TAG)
        .unwrap();
    let angles = setups
        .children_named(ATTRIBUTES_TAG)
        .find(|l| l.attribute("name") == Some(AttributeKind::Angle.attribute_name()))
        .unwrap();
    assert_eq!(angles.children().len(), 1);

    let parsed = io().from_element(&root).unwrap();
    assert_eq!(parsed, data);
}

#[test]
fn test_structure_errors() {
    assert!(matches!(
        io().from_xml_str("<Other/>").unwrap_err(),
        DocumentError::InvalidStructure(_)
    ));
    assert!(matches!(
        io().from_xml_str("<SpimData><BasePath>.</BasePath></SpimData>").unwrap_err(),
        DocumentError::MissingSection("SequenceDescription")
    ));

    let affine = Element::new(SPIMDATA_TAG)
        .with_child(
            Element::new(SEQUENCE_TAG).with_child(
                Element::new(TIMEPOINTS_TAG)
                    .with_attribute("type", "range")
                    .with_child(int_element("first", 0))
                    .with_child(int_element("last", 0)),
            ),
        )
        .with_child(
            Element::new(REGISTRATIONS_TAG).with_child(
                Element::new(REGISTRATION_TAG)
                    .with_attribute("timepoint", "0")
                    .with_attribute("setup", "0")
                    .with_child(
                        Element::new(TRANSFORM_TAG)
                            .with_attribute("type", "affine")
                            .with_child(text_element(TRANSFORM_NAME_TAG, "short"))
                            .with_child(double_array_element(AFFINE_TAG, &[1.0, 0.0, 0.0])),
                    ),
            ),
        );
    assert!(matches!(
        io().from_element(&affine).unwrap_err(),
        DocumentError::CodecError(CodecError::MalformedValue { expected: "12 doubles", .. })
    ));
}

#[test]
fn test_unknown_loader_format() {
    let xml = io().to_xml_string(&sample_dataset()).unwrap().replace(
        crate::loader::IMAGEPLUS_LOADER_FORMAT,
        "bdv.hdf5",
    );

    assert!(io().from_xml_str(&xml).is_err());
    let parsed = skipping_io().from_xml_str(&xml).unwrap();
    assert!(parsed.sequence().image_loader().is_none());
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.xml");
    let data = sample_dataset();

    io().save(&data, &path).unwrap();
    let loaded = io().load(&path).unwrap();

    assert_eq!(loaded, data);
    assert!(matches!(
        io().load(dir.path().join("absent.xml")).unwrap_err(),
        DocumentError::IoError(_)
    ));
}

#[test]
fn test_duplicate_registration_rejected() {
    let xml = io().to_xml_string(&sample_dataset()).unwrap();
    let start = xml.find("<ViewRegistration ").unwrap();
    let end = xml[start..].find("</ViewRegistration>").unwrap() + start + "</ViewRegistration>".len();
    let first = &xml[start..end];
    let doubled = xml.replacen(first, &format!("{}{}", first, first), 1);

    assert!(matches!(
        io().from_xml_str(&doubled).unwrap_err(),
        DocumentError::InvalidStructure(ref msg) if msg.contains("already has a registration")
    ));
}

#[test]
fn test_text_whitespace_survives_document() {
    let mut data = sample_dataset();
    data.set_base_path(" data dir ");
    data.sequence_mut()
        .setup_mut(0)
        .unwrap()
        .set_attribute(Angle::new(4, " 45 deg "));
    data.pretransform(" padded name ", AffineTransform3D::identity());

    let parsed = io().from_xml_str(&io().to_xml_string(&data).unwrap()).unwrap();

    assert_eq!(parsed, data);
    assert_eq!(parsed.base_path(), std::path::Path::new(" data dir "));
    assert_eq!(
        parsed.sequence().setup(0).unwrap().attributes().angle().unwrap().name,
        " 45 deg "
    );
}
