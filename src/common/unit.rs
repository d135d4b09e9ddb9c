//! DrawingML unit conversion utilities.
//!
//! DrawingML stores lengths in English Metric Units, angles in 60000ths of a
//! degree, and ratios in 100000ths (so `50000` means 50%). The readers in
//! [`crate::ooxml`] use these helpers to bring raw attribute values into the
//! unit-interval ratios and degrees the resolvers work with.

pub const EMUS_PER_PX_96: i64 = 9_525;

/// One degree expressed in DrawingML angle units.
pub const ANGLE_UNITS_PER_DEGREE: f64 = 60_000.0;

/// 100% expressed in DrawingML percentage units.
pub const PERCENT_UNITS: f64 = 100_000.0;

/// One degree of hue in `hslClr` hue units.
pub const HSL_HUE_UNITS_PER_DEGREE: f64 = 100_000.0;

#[inline]
pub fn emu_to_px_96(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PX_96 as f64
}

/// Convert a raw DrawingML angle (60000ths of a degree) to degrees.
#[inline]
pub fn angle_to_degrees(raw: f64) -> f64 {
    raw / ANGLE_UNITS_PER_DEGREE
}

/// Convert a raw DrawingML percentage (100000ths) to a ratio where 1.0 is 100%.
#[inline]
pub fn percentage_to_ratio(raw: f64) -> f64 {
    raw / PERCENT_UNITS
}

/// Convert a raw `hslClr` hue to degrees in `[0, 360)`.
#[inline]
pub fn hsl_hue_to_degrees(raw: f64) -> f64 {
    (raw / HSL_HUE_UNITS_PER_DEGREE).rem_euclid(360.0)
}
