use serde::{Deserialize, Serialize};

use crate::loader::PixelType;
use crate::registration::AffineTransform3D;

/// Spatial calibration of a source image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// Pixel width
    pub pixel_width: f64,
    /// Pixel height
    pub pixel_height: f64,
    /// Slice spacing
    pub pixel_depth: f64,
    /// Length unit; empty means pixels
    pub unit: String,
    /// Origin in pixel coordinates
    pub origin: [f64; 3],
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            pixel_width: 1.0,
            pixel_height: 1.0,
            pixel_depth: 1.0,
            unit: String::new(),
            origin: [0.0; 3],
        }
    }
}

impl Calibration {
    /// Pixel to world transform: scale by the pixel size, then shift the
    /// origin to zero
    pub fn to_transform(&self) -> AffineTransform3D {
        let [ox, oy, oz] = self.origin;
        let (pw, ph, pd) = (self.pixel_width, self.pixel_height, self.pixel_depth);
        AffineTransform3D::scaling(pw, ph, pd)
            .preconcatenate(&AffineTransform3D::translation(-ox * pw, -oy * ph, -oz * pd))
    }
}

/// Display state of one channel of a source image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelDisplay {
    /// Lower bound of the display range
    pub min: f64,
    /// Upper bound of the display range
    pub max: f64,
    /// RGBA color of the channel LUT at its top entry
    pub lut_color: [i32; 4],
}

impl Default for ChannelDisplay {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 255.0,
            lut_color: [255, 255, 255, 255],
        }
    }
}

/// What the dataset builder needs to know about an opened image stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceImage {
    /// Image title, used to name the view setups
    pub title: String,
    /// Path of the image file
    pub file_path: String,
    /// Pixel representation
    pub pixel_type: PixelType,
    /// Width in pixels
    #[serde(default = "one")]
    pub width: u64,
    /// Height in pixels
    #[serde(default = "one")]
    pub height: u64,
    /// Number of z slices
    #[serde(default = "one")]
    pub slices: u64,
    /// Number of channels
    #[serde(default = "one_u32")]
    pub channels: u32,
    /// Number of acquired frames
    #[serde(default = "one_u32")]
    pub frames: u32,
    /// Time point of the first acquired frame
    #[serde(default)]
    pub time_origin: u32,
    /// Spatial calibration
    #[serde(default)]
    pub calibration: Calibration,
    /// Per-channel display state; empty means defaults for every channel
    #[serde(default)]
    pub channel_display: Vec<ChannelDisplay>,
}

fn one() -> u64 {
    1
}

fn one_u32() -> u32 {
    1
}

impl SourceImage {
    /// Single-channel, single-frame, single-pixel image; use the `with_*`
    /// methods to fill in the rest
    pub fn new(title: impl Into<String>, file_path: impl Into<String>, pixel_type: PixelType) -> Self {
        Self {
            title: title.into(),
            file_path: file_path.into(),
            pixel_type,
            width: 1,
            height: 1,
            slices: 1,
            channels: 1,
            frames: 1,
            time_origin: 0,
            calibration: Calibration::default(),
            channel_display: Vec::new(),
        }
    }

    /// Set the volume size
    pub fn with_size(mut self, width: u64, height: u64, slices: u64) -> Self {
        self.width = width;
        self.height = height;
        self.slices = slices;
        self
    }

    /// Set the channel count
    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channels = channels;
        self
    }

    /// Set the frame count
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Set the time origin
    pub fn with_time_origin(mut self, time_origin: u32) -> Self {
        self.time_origin = time_origin;
        self
    }

    /// Set the calibration
    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    /// Append the display state of the next channel
    pub fn with_channel_display(mut self, display: ChannelDisplay) -> Self {
        self.channel_display.push(display);
        self
    }

    /// Display state of channel `index`, falling back to the defaults
    pub fn display(&self, index: usize) -> ChannelDisplay {
        self.channel_display.get(index).copied().unwrap_or_default()
    }
}
