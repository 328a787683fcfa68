//! Decoded camera metadata record.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Camera capture metadata decoded from a JPEG's EXIF segment.
///
/// Every field is optional: a missing tag, a structurally invalid value
/// (e.g. zero denominator), or a missing APP1 segment all leave the field
/// `None`. Decoding never fails; the empty record is the worst case.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExifData {
    /// Focal length in millimeters, rounded to one decimal place.
    pub focal_length: Option<f64>,
    /// Camera model, at most 4 ASCII bytes (inline tag slot; model strings
    /// stored via external TIFF offsets are not followed).
    pub model: Option<String>,
    /// ISO sensitivity.
    pub iso: Option<u16>,
    /// Aperture formatted as `f/<N.N>` (f-number from the APEX value).
    pub aperture: Option<String>,
    /// Shutter speed, `<seconds>"` at or above one second, `1/<N>` below.
    pub shutter_speed: Option<String>,
}

impl ExifData {
    /// True when no field was decoded.
    pub fn is_empty(&self) -> bool {
        self.focal_length.is_none()
            && self.model.is_none()
            && self.iso.is_none()
            && self.aperture.is_none()
            && self.shutter_speed.is_none()
    }
}
