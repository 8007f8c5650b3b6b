use super::*;
use crate::entity::{AttributeKind, DEFAULT_PROJECTION_MODE};
use crate::loader::{PixelType, IMAGEPLUS_LOADER_FORMAT};
use crate::registration::{AffineTransform3D, CALIBRATION_TRANSFORM_NAME};
use crate::sequence::{MissingViews, ViewId, DEFAULT_VOXEL_UNIT};

fn calibrated_source() -> SourceImage {
    SourceImage::new("embryo", "/data/embryo.tif", PixelType::Gray16)
        .with_size(64, 32, 8)
        .with_channels(3)
        .with_frames(4)
        .with_time_origin(2)
        .with_calibration(Calibration {
            pixel_width: 0.5,
            pixel_height: 0.5,
            pixel_depth: 2.0,
            unit: "µm".to_string(),
            origin: [10.0, 0.0, 1.0],
        })
        .with_channel_display(ChannelDisplay {
            min: 100.0,
            max: 4000.0,
            lut_color: [255, 0, 0, 255],
        })
        .with_channel_display(ChannelDisplay {
            min: 0.0,
            max: 1000.0,
            lut_color: [0, 255, 0, 255],
        })
        .with_channel_display(ChannelDisplay::default())
}

#[test]
fn test_build_setups() {
    let data = DatasetBuilder::new().build(&calibrated_source()).unwrap();
    let sequence = data.sequence();

    let names: Vec<_> = sequence.setups().map(|s| s.name().to_string()).collect();
    assert_eq!(
        names,
        vec!["embryo channel 1", "embryo channel 2", "embryo channel 3"]
    );

    let setup = sequence.setup(0).unwrap();
    assert_eq!(setup.size().unwrap().0, [64, 32, 8]);
    assert_eq!(setup.voxel_size().unwrap().unit, "µm");
    assert_eq!(setup.attributes().channel().unwrap().id, 1);

    let ds = setup.attributes().displaysettings().unwrap();
    assert_eq!(ds.id, 1);
    assert!(ds.is_set);
    assert_eq!(ds.color, [255, 0, 0, 255]);
    assert_eq!((ds.min, ds.max), (100.0, 4000.0));
    assert_eq!(ds.projection_mode, DEFAULT_PROJECTION_MODE);
}

#[test]
fn test_build_timepoints_and_missing_views() {
    let data = DatasetBuilder::new().build(&calibrated_source()).unwrap();
    let sequence = data.sequence();

    assert_eq!(sequence.timepoints().as_range(), Some((0, 5)));
    assert_eq!(sequence.missing_views().len(), 6);
    assert!(sequence.missing_views().contains(&ViewId::new(1, 2)));
    assert!(!sequence.missing_views().contains(&ViewId::new(2, 0)));

    let loader = sequence.image_loader().unwrap();
    assert_eq!(loader.format, IMAGEPLUS_LOADER_FORMAT);
    assert_eq!(loader.file_path, "/data/embryo.tif");
    assert_eq!(loader.time_origin, 2);
}

#[test]
fn test_build_calibration_registrations() {
    let data = DatasetBuilder::new().build(&calibrated_source()).unwrap();

    // every view, missing ones included
    assert_eq!(data.registrations().len(), 6 * 3);

    let reg = data.registrations().get(&ViewId::new(3, 1)).unwrap();
    assert_eq!(reg.transforms().len(), 1);
    assert_eq!(reg.transforms()[0].name, CALIBRATION_TRANSFORM_NAME);
    assert_eq!(reg.model().apply([10.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
    assert_eq!(reg.model().apply([12.0, 4.0, 2.0]), [1.0, 2.0, 2.0]);
}

#[test]
fn test_no_time_origin_means_none_known() {
    let source = SourceImage::new("cells", "/data/cells.tif", PixelType::Gray8).with_frames(2);
    let data = DatasetBuilder::new().build(&source).unwrap();

    assert_eq!(data.sequence().missing_views(), &MissingViews::NoneKnown);
    assert_eq!(data.sequence().timepoints().len(), 2);
    assert_eq!(
        data.sequence().setup(0).unwrap().voxel_size().unwrap().unit,
        DEFAULT_VOXEL_UNIT
    );
    assert_eq!(data.base_path(), std::path::Path::new("."));
}

#[test]
fn test_rgb_display_stays_unset() {
    let source = SourceImage::new("rgb", "/data/rgb.tif", PixelType::ColorRgb).with_channel_display(
        ChannelDisplay {
            min: 5.0,
            max: 200.0,
            lut_color: [1, 2, 3, 4],
        },
    );
    let data = DatasetBuilder::new().build(&source).unwrap();

    let ds = data.sequence().setup(0).unwrap().attributes().displaysettings().unwrap();
    assert!(!ds.is_set);
    assert_eq!(ds.color, [255, 255, 255, 0]);
    assert_eq!((ds.min, ds.max), (5.0, 200.0));
}

#[test]
fn test_unsupported_pixel_type() {
    let source = SourceImage::new("indexed", "/data/lut.tif", PixelType::Color256);
    let builder = DatasetBuilder::new();

    let err = builder.build(&source).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::UnsupportedPixelType { ref title, pixel_type: PixelType::Color256 } if title == "indexed"
    ));
    assert!(builder.try_build(&source).is_none());
}

#[test]
fn test_batch_skips_failures() {
    let sources = vec![
        SourceImage::new("a", "/a.tif", PixelType::Gray8),
        SourceImage::new("b", "/b.tif", PixelType::Color256),
        SourceImage::new("c", "/c.tif", PixelType::Gray32).with_channels(0),
        SourceImage::new("d", "/d.tif", PixelType::Gray32),
    ];

    let built = DatasetBuilder::new().base_path("/out").build_batch(&sources);

    assert_eq!(built.len(), 2);
    assert_eq!(built[1].sequence().setup(0).unwrap().name(), "d channel 1");
    assert_eq!(built[0].base_path(), std::path::Path::new("/out"));
}

#[test]
fn test_channel_display_mismatch() {
    let source = SourceImage::new("x", "/x.tif", PixelType::Gray8)
        .with_channels(2)
        .with_channel_display(ChannelDisplay::default());
    assert!(matches!(
        DatasetBuilder::new().build(&source).unwrap_err(),
        DatasetError::ChannelCountMismatch { channels: 2, displays: 1 }
    ));
}

#[test]
fn test_remove_entities_by_name() {
    let mut data = DatasetBuilder::new().build(&calibrated_source()).unwrap();

    let removed = data.remove_entities([" displaysettings ", "tile"]);

    assert_eq!(removed, 3);
    for setup in data.sequence().setups() {
        assert!(setup.attributes().displaysettings().is_none());
        assert!(setup.attributes().channel().is_some());
    }
    assert_eq!(data.remove_entities(["displaysettings"]), 0);
}

#[test]
fn test_remove_entity_kinds() {
    let mut data = DatasetBuilder::new().build(&calibrated_source()).unwrap();

    let removed = data.remove_entity_kinds(&[AttributeKind::Channel, AttributeKind::Angle]);

    assert_eq!(removed, 3);
    assert!(data
        .sequence()
        .setups()
        .all(|s| s.attributes().len() == 1));
}

#[test]
fn test_dataset_wide_transforms() {
    let source = SourceImage::new("s", "/s.tif", PixelType::Gray8)
        .with_channels(2)
        .with_frames(2);
    let mut data = DatasetBuilder::new().build(&source).unwrap();

    data.scale_uniform("zoom", 2.0);
    data.translate("shift", 1.0, -1.0, 0.5);
    data.pretransform("identity", AffineTransform3D::identity());

    for reg in data.registrations().iter() {
        let names: Vec<_> = reg.transforms().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec![CALIBRATION_TRANSFORM_NAME, "zoom", "shift", "identity"]);
        assert_eq!(reg.model().apply([1.0, 1.0, 1.0]), [3.0, 1.0, 2.5]);
    }
}

#[test]
fn test_summary() {
    let data = DatasetBuilder::new().build(&calibrated_source()).unwrap();
    let summary = data.summary();

    assert_eq!(summary.timepoints, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(summary.setups.len(), 3);
    assert_eq!(summary.setups[1].attributes.len(), 2);
    assert!(summary.missing_views_known);
    assert_eq!(summary.missing_views, 6);
    assert_eq!(summary.max_chain_length, 1);
    assert_eq!(summary.image_loader.as_deref(), Some("/data/embryo.tif"));

    let text = summary.to_string();
    assert!(text.contains("Time points: 6 (0..=5)"));
    assert!(text.contains("[2] embryo channel 3, 64x32x8, voxel 0.5x0.5x2 µm"));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["setups"][0]["attributes"][0]["type"], "Channel");
}
