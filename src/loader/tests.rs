use std::path::Path;

use super::*;
use crate::codec::xml::{from_xml_str, to_xml_string};
use crate::codec::values::{int_element, text_element};
use crate::codec::{CodecError, Element};
use crate::sequence::ViewId;

/// Volumes are (channel, frame) pairs so reads are easy to check
#[derive(Debug)]
struct FakeStack {
    pixel_type: PixelType,
    frames: u32,
    channels: u32,
}

impl FrameSource for FakeStack {
    type Volume = (u32, u32);

    fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }

    fn channel_count(&self) -> u32 {
        self.channels
    }

    fn read_frame(&self, channel: u32, frame: u32) -> Result<Self::Volume, LoaderError> {
        Ok((channel, frame))
    }
}

struct FakeOpener(PixelType);

impl ImageOpener for FakeOpener {
    type Source = FakeStack;

    fn open(&self, path: &Path) -> Result<FakeStack, LoaderError> {
        if path.as_os_str().is_empty() {
            return Err(LoaderError::Source("empty path".to_string()));
        }
        Ok(FakeStack {
            pixel_type: self.0,
            frames: 3,
            channels: 2,
        })
    }
}

#[test]
fn test_loader_kind_from_pixel_type() {
    assert_eq!(LoaderKind::for_pixel_type(PixelType::Gray8), LoaderKind::UnsignedByte);
    assert_eq!(LoaderKind::for_pixel_type(PixelType::Gray16), LoaderKind::UnsignedShort);
    assert_eq!(LoaderKind::for_pixel_type(PixelType::Gray32), LoaderKind::Float);
    assert_eq!(LoaderKind::for_pixel_type(PixelType::ColorRgb), LoaderKind::Argb);
    assert_eq!(LoaderKind::for_pixel_type(PixelType::Color256), LoaderKind::Argb);
    assert!(!PixelType::Color256.is_supported());
}

#[test]
fn test_kind_chosen_when_opened() {
    let descriptor = ImageLoaderDescriptor::new("/data/stack.tif", 0);
    let loader = TimeShiftedLoader::open(&FakeOpener(PixelType::Gray16), descriptor).unwrap();
    assert_eq!(loader.kind(), LoaderKind::UnsignedShort);
    assert!(!loader.is_missing(ViewId::new(0, 0)));

    let err = TimeShiftedLoader::open(&FakeOpener(PixelType::Gray8), ImageLoaderDescriptor::new("", 0))
        .unwrap_err();
    assert!(matches!(err, LoaderError::Source(_)));
}

#[test]
fn test_time_shifted_reads() {
    let descriptor = ImageLoaderDescriptor::new("/data/stack.tif", 2);
    let loader = TimeShiftedLoader::open(&FakeOpener(PixelType::Gray8), descriptor).unwrap();

    let missing: Vec<_> = (0..5)
        .flat_map(|t| (0..3).map(move |s| ViewId::new(t, s)))
        .filter(|&view| loader.is_missing(view))
        .collect();
    assert_eq!(
        missing,
        vec![ViewId::new(0, 0), ViewId::new(0, 1), ViewId::new(1, 0), ViewId::new(1, 1)]
    );
    assert_eq!(loader.volume(ViewId::new(2, 0)).unwrap(), (0, 0));
    assert_eq!(loader.volume(ViewId::new(4, 1)).unwrap(), (1, 2));
}

#[test]
fn test_missing_view_is_an_error() {
    let descriptor = ImageLoaderDescriptor::new("/data/stack.tif", 2);
    let loader = TimeShiftedLoader::open(&FakeOpener(PixelType::Gray8), descriptor).unwrap();

    for t in 0..2 {
        let err = loader.volume(ViewId::new(t, 1)).unwrap_err();
        assert!(
            matches!(err, LoaderError::MissingView(e) if e.view == ViewId::new(t, 1)),
            "time point {} must be missing",
            t
        );
    }
}

#[test]
fn test_out_of_range_views() {
    let descriptor = ImageLoaderDescriptor::new("/data/stack.tif", 1);
    let loader = TimeShiftedLoader::open(&FakeOpener(PixelType::Gray32), descriptor).unwrap();

    assert!(matches!(
        loader.volume(ViewId::new(4, 0)).unwrap_err(),
        LoaderError::FrameOutOfRange { timepoint: 4, frames: 3 }
    ));
    assert!(matches!(
        loader.volume(ViewId::new(-1, 0)).unwrap_err(),
        LoaderError::FrameOutOfRange { .. }
    ));
    assert!(matches!(
        loader.volume(ViewId::new(1, 2)).unwrap_err(),
        LoaderError::UnknownSetup(2)
    ));
}

#[test]
fn test_descriptor_xml() {
    let descriptor = ImageLoaderDescriptor::new("/data/a&b.tif", 3);
    let xml = to_xml_string(&descriptor.to_element(), 2).unwrap();
    assert!(xml.contains(IMAGEPLUS_LOADER_FORMAT));
    assert!(xml.contains("<imageplus_time_origin>3</imageplus_time_origin>"));

    let parsed = ImageLoaderDescriptor::from_element(&from_xml_str(&xml).unwrap()).unwrap();
    assert_eq!(parsed, descriptor);
}

#[test]
fn test_descriptor_rejects_other_formats() {
    let mut element = ImageLoaderDescriptor::new("/x.tif", 0).to_element();
    element.set_attribute("format", "bdv.hdf5");
    assert!(matches!(
        ImageLoaderDescriptor::from_element(&element).unwrap_err(),
        CodecError::MalformedValue { .. }
    ));

    let element = Element::new(IMAGE_LOADER_TAG)
        .with_attribute("format", IMAGEPLUS_LOADER_FORMAT)
        .with_child(text_element(IMAGEPLUS_FILEPATH_TAG, "/x.tif"))
        .with_child(int_element(IMAGEPLUS_TIME_ORIGIN_TAG, -1));
    assert!(matches!(
        ImageLoaderDescriptor::from_element(&element).unwrap_err(),
        CodecError::MalformedValue { expected: "non-negative integer", .. }
    ));
}

#[test]
fn test_huge_time_origin_is_cheap() {
    let descriptor = ImageLoaderDescriptor::new("/data/stack.tif", 2_000_000_000);
    let loader = TimeShiftedLoader::open(&FakeOpener(PixelType::Gray8), descriptor).unwrap();

    assert!(loader.is_missing(ViewId::new(1_999_999_999, 1)));
    assert!(matches!(
        loader.volume(ViewId::new(1_000_000, 0)).unwrap_err(),
        LoaderError::MissingView(_)
    ));
    assert_eq!(loader.volume(ViewId::new(2_000_000_002, 1)).unwrap(), (1, 2));
}
