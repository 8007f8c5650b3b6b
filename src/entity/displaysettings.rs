use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Entity, UnsupportedConverter};

/// Projection mode stored when none was chosen
pub const DEFAULT_PROJECTION_MODE: &str = "Sum";

/// Display settings of a view setup: a single-color LUT with a min/max range
/// and the projection mode used when several sources overlap.
///
/// When `is_set` is false the rest of the record is carried along but must be
/// treated as "no display metadata".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Displaysettings {
    /// Unique id
    pub id: i32,
    /// Display name
    pub name: String,
    /// RGBA color
    pub color: [i32; 4],
    /// Lower bound of the display range
    pub min: f64,
    /// Upper bound of the display range
    pub max: f64,
    /// Whether the values above carry meaning
    pub is_set: bool,
    /// Projection (blending) mode
    pub projection_mode: String,
}

impl Displaysettings {
    /// Create display settings with default values
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: [255, 255, 255, 0],
            min: 0.0,
            max: 255.0,
            is_set: false,
            projection_mode: DEFAULT_PROJECTION_MODE.to_string(),
        }
    }

    /// Create display settings named after their id
    pub fn with_id(id: i32) -> Self {
        Self::new(id, id.to_string())
    }

    /// Store the state of a viewer converter into these settings.
    ///
    /// Only color converters carry a LUT color and a range; any other
    /// converter leaves the settings untouched.
    pub fn capture(&mut self, converter: &ConverterSettings) -> Result<(), UnsupportedConverter> {
        let cc = converter.as_color()?;
        self.name = format!("vs:{}", self.id);
        self.color = cc.rgba();
        self.min = cc.min;
        self.max = cc.max;
        self.is_set = true;
        Ok(())
    }

    /// Push these settings back into a converter (and its volatile
    /// counterpart, if any).
    ///
    /// Returns the projection mode when the settings are set, `None` when
    /// they are not (the converters are then left untouched). Both
    /// converters are checked before either is changed.
    pub fn pull(
        &self,
        converter: &mut ConverterSettings,
        volatile: Option<&mut ConverterSettings>,
    ) -> Result<Option<&str>, UnsupportedConverter> {
        if !self.is_set {
            return Ok(None);
        }
        let cc = converter.as_color_mut()?;
        let volatile = volatile.map(ConverterSettings::as_color_mut).transpose()?;
        self.apply_to(cc);
        if let Some(volatile) = volatile {
            self.apply_to(volatile);
        }
        Ok(Some(self.projection_mode.as_str()))
    }

    /// Copy color and range into a color converter, regardless of `is_set`
    pub fn apply_to(&self, cc: &mut ColorConverterSettings) {
        cc.min = self.min;
        cc.max = self.max;
        cc.color = ColorConverterSettings::pack_rgba(self.color);
    }
}

impl Entity for Displaysettings {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Displaysettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "set = {}, projection = {}, color = {:?}, min = {}, max = {}",
            self.is_set, self.projection_mode, self.color, self.min, self.max
        )
    }
}

/// Apply settings to several converters; absent settings and converters
/// that are not color converters are ignored.
pub fn apply_displaysettings(converters: &mut [ConverterSettings], ds: Option<&Displaysettings>) {
    let Some(ds) = ds else {
        return;
    };
    for converter in converters {
        if let ConverterSettings::Color(cc) = converter {
            ds.apply_to(cc);
        }
    }
}

/// State of a viewer's single-color converter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorConverterSettings {
    /// Packed ARGB color
    pub color: u32,
    /// Lower bound of the display range
    pub min: f64,
    /// Upper bound of the display range
    pub max: f64,
}

impl ColorConverterSettings {
    /// Pack RGBA components (each clamped to the low byte) into ARGB
    pub fn pack_rgba(rgba: [i32; 4]) -> u32 {
        let [r, g, b, a] = rgba.map(|c| (c & 0xff) as u32);
        (a << 24) | (r << 16) | (g << 8) | b
    }

    /// Unpack the ARGB color into RGBA components
    pub fn rgba(&self) -> [i32; 4] {
        let c = self.color;
        [
            ((c >> 16) & 0xff) as i32,
            ((c >> 8) & 0xff) as i32,
            (c & 0xff) as i32,
            ((c >> 24) & 0xff) as i32,
        ]
    }
}

/// Converter attached to a displayed source
#[derive(Debug, Clone, PartialEq)]
pub enum ConverterSettings {
    /// Single-color LUT with a display range
    Color(ColorConverterSettings),
    /// Any other converter, identified by its kind
    Other(String),
}

impl ConverterSettings {
    fn as_color(&self) -> Result<&ColorConverterSettings, UnsupportedConverter> {
        match self {
            ConverterSettings::Color(cc) => Ok(cc),
            ConverterSettings::Other(kind) => Err(UnsupportedConverter { kind: kind.clone() }),
        }
    }

    fn as_color_mut(&mut self) -> Result<&mut ColorConverterSettings, UnsupportedConverter> {
        match self {
            ConverterSettings::Color(cc) => Ok(cc),
            ConverterSettings::Other(kind) => Err(UnsupportedConverter { kind: kind.clone() }),
        }
    }
}
