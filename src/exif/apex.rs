//! APEX (Additive System of Photographic Exposure) display formatting.
//!
//! EXIF stores shutter speed as `Tv = -log2(seconds)` and aperture as
//! `Av = 2 * log2(f-number)`; both arrive as rationals and are turned into
//! the strings photographers expect.

/// Format an APEX shutter value. At or above one second the result uses
/// seconds notation with a trailing double quote (`2"`, `2.5"`); below one
/// second it uses the reciprocal form (`1/125`). Whole seconds drop the
/// trailing `.0`.
pub fn format_shutter_speed(apex: f64) -> String {
    let shutter = 2f64.powf(-apex);
    if shutter >= 1.0 {
        let rounded = (shutter * 10.0).round() / 10.0;
        if rounded == rounded.trunc() {
            format!("{}\"", rounded as i64)
        } else {
            format!("{:.1}\"", rounded)
        }
    } else {
        format!("1/{}", (1.0 / shutter).round() as i64)
    }
}

/// Format an APEX aperture value as `f/<N.N>`.
pub fn format_aperture(apex: f64) -> String {
    format!("f/{:.1}", 2f64.powf(apex / 2.0))
}
