use crate::codec::values::{get_int, get_text, int_element, text_element};
use crate::codec::{CodecError, Element};
use crate::sequence::TimeOriginShift;

/// Element holding the loader descriptor
pub const IMAGE_LOADER_TAG: &str = "ImageLoader";
/// Format of loaders backed by a single image stack with a time origin
pub const IMAGEPLUS_LOADER_FORMAT: &str = "spimreconstruction.biop_imagestackimageplusloader";
/// Path of the source image
pub const IMAGEPLUS_FILEPATH_TAG: &str = "imageplus_filepath";
/// Time point of the first acquired frame
pub const IMAGEPLUS_TIME_ORIGIN_TAG: &str = "imageplus_time_origin";

/// What a document stores about its image loader:
///
/// ```xml
/// <ImageLoader format="spimreconstruction.biop_imagestackimageplusloader">
///   <imageplus_filepath>/data/embryo.tif</imageplus_filepath>
///   <imageplus_time_origin>2</imageplus_time_origin>
/// </ImageLoader>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoaderDescriptor {
    /// Loader format identifier
    pub format: String,
    /// Path of the source image
    pub file_path: String,
    /// Number of leading time points without data
    pub time_origin: u32,
}

impl ImageLoaderDescriptor {
    /// Descriptor for an image stack at `file_path`
    pub fn new(file_path: impl Into<String>, time_origin: u32) -> Self {
        Self {
            format: IMAGEPLUS_LOADER_FORMAT.to_string(),
            file_path: file_path.into(),
            time_origin,
        }
    }

    /// Shift between source frames and time points
    pub fn time_origin_shift(&self) -> TimeOriginShift {
        TimeOriginShift::new(self.time_origin)
    }

    /// Encode as an `<ImageLoader>` element
    pub fn to_element(&self) -> Element {
        Element::new(IMAGE_LOADER_TAG)
            .with_attribute("format", &self.format)
            .with_child(text_element(IMAGEPLUS_FILEPATH_TAG, &self.file_path))
            .with_child(int_element(
                IMAGEPLUS_TIME_ORIGIN_TAG,
                i64::from(self.time_origin),
            ))
    }

    /// Decode an `<ImageLoader>` element of the image stack format
    pub fn from_element(element: &Element) -> Result<Self, CodecError> {
        let format = element.require_attribute("format")?;
        if format != IMAGEPLUS_LOADER_FORMAT {
            return Err(CodecError::MalformedValue {
                element: IMAGE_LOADER_TAG.to_string(),
                value: format.to_string(),
                expected: IMAGEPLUS_LOADER_FORMAT,
            });
        }

        let file_path = get_text(element, IMAGEPLUS_FILEPATH_TAG)?.to_string();
        let origin = get_int(element, IMAGEPLUS_TIME_ORIGIN_TAG)?;
        let time_origin = u32::try_from(origin).map_err(|_| CodecError::MalformedValue {
            element: IMAGEPLUS_TIME_ORIGIN_TAG.to_string(),
            value: origin.to_string(),
            expected: "non-negative integer",
        })?;

        Ok(Self {
            format: format.to_string(),
            file_path,
            time_origin,
        })
    }
}
