use serde::{Serialize, Serializer};
use std::fmt;

use crate::common::num::write_num;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use shapepaint::common::RGBColor;
///
/// // Create a red color
/// let red = RGBColor::new(255, 0, 0);
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts an optional `#` prefix and an optional trailing alpha pair
    /// (`RRGGBBAA`), which is dropped. Digits are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapepaint::common::RGBColor;
    ///
    /// let red = RGBColor::from_hex("FF0000").unwrap();
    /// let blue = RGBColor::from_hex("#0000ff").unwrap();
    /// let accent = RGBColor::from_hex("#4472C4FF").unwrap();
    /// assert_eq!(accent.to_hex(), "4472C4");
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = normalize_hex(hex)?;

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapepaint::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Normalize a hex color to its six-digit form.
///
/// Strips a leading `#` and a trailing two-digit alpha suffix. Returns `None`
/// unless the remainder is exactly six hex digits.
pub fn normalize_hex(hex: &str) -> Option<&str> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let hex = match hex.len() {
        6 => hex,
        8 => &hex[..6],
        _ => return None,
    };
    hex.bytes().all(|b| b.is_ascii_hexdigit()).then_some(hex)
}

/// A fully resolved paint color with straight (non-premultiplied) alpha.
///
/// This is the output of color resolution. It renders as `rgba(r,g,b,a)` both
/// through [`fmt::Display`] and when serialized.
///
/// # Examples
///
/// ```rust
/// use shapepaint::common::ResolvedColor;
///
/// let c = ResolvedColor::new(68, 114, 196, 0.5);
/// assert_eq!(c.to_string(), "rgba(68,114,196,0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`
    pub a: f64,
}

impl ResolvedColor {
    pub const BLACK: ResolvedColor = ResolvedColor::opaque(0, 0, 0);
    pub const WHITE: ResolvedColor = ResolvedColor::opaque(255, 255, 255);

    /// Create a color; alpha is clamped to `[0, 1]`.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    /// Create a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Return a copy with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: clamp_alpha(a),
            ..self
        }
    }

    /// The RGB part of this color.
    #[inline]
    pub const fn rgb(&self) -> RGBColor {
        RGBColor::new(self.r, self.g, self.b)
    }

    /// Render as `rgba(r,g,b,a)`.
    pub fn to_rgba_string(&self) -> String {
        let mut out = String::with_capacity(24);
        self.write_rgba(&mut out);
        out
    }

    fn write_rgba(&self, out: &mut String) {
        let mut buffer = itoa::Buffer::new();
        out.push_str("rgba(");
        out.push_str(buffer.format(self.r));
        out.push(',');
        out.push_str(buffer.format(self.g));
        out.push(',');
        out.push_str(buffer.format(self.b));
        out.push(',');
        write_num(out, self.a, 3);
        out.push(')');
    }
}

impl Default for ResolvedColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<RGBColor> for ResolvedColor {
    fn from(rgb: RGBColor) -> Self {
        Self::opaque(rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgba_string())
    }
}

impl Serialize for ResolvedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rgba_string())
    }
}

#[inline]
fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_variants() {
        assert_eq!(RGBColor::from_hex("FF0000"), Some(RGBColor::new(255, 0, 0)));
        assert_eq!(RGBColor::from_hex("#00ff00"), Some(RGBColor::new(0, 255, 0)));
        assert_eq!(RGBColor::from_hex("4472C480"), Some(RGBColor::new(68, 114, 196)));
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
    }

    #[test]
    fn test_from_u32() {
        assert_eq!(RGBColor::from_u32(0xF0F8FF), RGBColor::new(0xF0, 0xF8, 0xFF));
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#ABCDEF"), Some("ABCDEF"));
        assert_eq!(normalize_hex("abcdef00"), Some("abcdef"));
        assert_eq!(normalize_hex("#12345"), None);
        // Eight bytes with a multi-byte character straddling the alpha suffix
        assert_eq!(normalize_hex("abcde\u{e9}1"), None);
        assert_eq!(RGBColor::from_hex("#abcde\u{e9}1"), None);
    }

    #[test]
    fn test_rgba_rendering() {
        assert_eq!(ResolvedColor::opaque(255, 0, 0).to_string(), "rgba(255,0,0,1)");
        assert_eq!(ResolvedColor::new(0, 0, 0, 0.25).to_string(), "rgba(0,0,0,0.25)");
        assert_eq!(ResolvedColor::new(1, 2, 3, 0.0).to_string(), "rgba(1,2,3,0)");
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(ResolvedColor::new(0, 0, 0, 1.7).a, 1.0);
        assert_eq!(ResolvedColor::WHITE.with_alpha(-0.5).a, 0.0);
        assert_eq!(ResolvedColor::WHITE.with_alpha(f64::NAN).a, 1.0);
    }

    #[test]
    fn test_serializes_as_rgba_string() {
        let json = serde_json::to_string(&ResolvedColor::new(68, 114, 196, 0.5)).unwrap();
        assert_eq!(json, "\"rgba(68,114,196,0.5)\"");
    }
}
