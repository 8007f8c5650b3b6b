use super::*;
use crate::entity::{Channel, Displaysettings};

#[test]
fn test_zero_shift_is_none_known() {
    let missing = MissingViews::from_time_origin_shift(0, [0, 1, 2]);
    assert!(missing.is_none_known());
    assert_ne!(missing, MissingViews::from_views(Vec::new()));
    assert_eq!(missing.len(), 0);
}

#[test]
fn test_shift_two_three_setups() {
    let missing = TimeOriginShift::new(2).missing_views([0, 1, 2]);

    let views: Vec<ViewId> = missing.iter().copied().collect();
    assert_eq!(
        views,
        vec![
            ViewId::new(0, 0),
            ViewId::new(0, 1),
            ViewId::new(0, 2),
            ViewId::new(1, 0),
            ViewId::new(1, 1),
            ViewId::new(1, 2),
        ]
    );
    assert!(!missing.contains(&ViewId::new(2, 0)));
}

#[test]
fn test_empty_enumeration_reads_like_none_known() {
    let empty = MissingViews::from_views(Vec::new());
    let view = ViewId::new(0, 0);
    assert!(!empty.is_none_known());
    assert_eq!(empty.contains(&view), MissingViews::NoneKnown.contains(&view));
    assert!(empty.check(view).is_ok());
}

#[test]
fn test_check_missing_view_fails() {
    let missing = MissingViews::from_time_origin_shift(1, [0]);
    let err = missing.check(ViewId::new(0, 0)).unwrap_err();
    assert_eq!(err.view, ViewId::new(0, 0));
    assert!(missing.check(ViewId::new(1, 0)).is_ok());
}

#[test]
fn test_insert_is_monotonic() {
    let mut missing = MissingViews::NoneKnown;
    missing.insert(ViewId::new(3, 1));
    missing.insert(ViewId::new(3, 1));
    assert_eq!(missing.len(), 1);
    assert!(missing.contains(&ViewId::new(3, 1)));
}

#[test]
fn test_source_frame_mapping() {
    let shift = TimeOriginShift::new(2);
    assert_eq!(shift.source_frame(0), None);
    assert_eq!(shift.source_frame(1), None);
    assert_eq!(shift.source_frame(2), Some(0));
    assert_eq!(shift.source_frame(5), Some(3));
    assert_eq!(shift.source_frame(-1), None);
    assert_eq!(shift.timepoint_count(4), 6);
}

#[test]
fn test_before_origin() {
    let shift = TimeOriginShift::new(2);
    assert!(shift.is_before_origin(0));
    assert!(shift.is_before_origin(1));
    assert!(!shift.is_before_origin(2));
    assert!(!shift.is_before_origin(-1));
    assert!(!TimeOriginShift::new(0).is_before_origin(0));
}

#[test]
fn test_timepoints_range() {
    let tps = TimePoints::range(4);
    assert_eq!(tps.len(), 4);
    assert_eq!(tps.as_range(), Some((0, 3)));

    let sparse = TimePoints::from_ids([0, 2, 5]);
    assert_eq!(sparse.as_range(), None);
    assert!(sparse.contains(5));
    assert_eq!(TimePoints::default().as_range(), None);
}

#[test]
fn test_voxel_unit_defaults_to_px() {
    assert_eq!(VoxelDimensions::new("", [1.0, 1.0, 2.0]).unit, "px");
    assert_eq!(VoxelDimensions::new("µm", [1.0, 1.0, 2.0]).unit, "µm");
}

#[test]
fn test_duplicate_setup_rejected() {
    let mut seq = SequenceDescription::new(TimePoints::range(1));
    seq.add_setup(ViewSetup::new(0, "a", None, None)).unwrap();
    let err = seq.add_setup(ViewSetup::new(0, "b", None, None)).unwrap_err();
    assert_eq!(err, SequenceError::DuplicateSetup(0));
    assert_eq!(seq.setup(0).unwrap().name(), "a");
}

#[test]
fn test_present_view_ids_skip_missing() {
    let mut seq = SequenceDescription::new(TimePoints::range(3));
    seq.add_setup(ViewSetup::new(0, "c1", None, None)).unwrap();
    seq.add_setup(ViewSetup::new(1, "c2", None, None)).unwrap();
    let setup_ids: Vec<i32> = seq.setup_ids().collect();
    seq.set_missing_views(MissingViews::from_time_origin_shift(1, setup_ids));

    assert_eq!(seq.view_ids().len(), 6);
    let present = seq.present_view_ids();
    assert_eq!(present.len(), 4);
    assert!(present.iter().all(|v| v.timepoint >= 1));
}

#[test]
fn test_setup_attribute_operations() {
    let mut setup = ViewSetup::new(0, "setup", Some(Dimensions::new(4, 4, 2)), None);
    setup.set_attribute(Channel::with_id(1));
    setup.set_attribute(Displaysettings::with_id(1));

    assert_eq!(setup.get_attribute("Channel").unwrap().id(), 1);
    assert_eq!(setup.remove_attributes(["Displaysettings", "Angle"]), 1);
    assert!(setup.remove_attribute("Displaysettings").is_none());
    assert_eq!(setup.attributes().len(), 1);
}
