//! Theme palette loading from a theme part.
//!
//! Reads `a:theme/a:themeElements/a:clrScheme`. Each slot holds either an
//! `a:srgbClr` or an `a:sysClr`; system colors use their cached `lastClr`
//! value, or the static system table when the cache is absent.

use super::node::XmlNode;
use crate::color::presets::system_color;
use crate::common::log::warn;
use crate::common::{Error, RGBColor, Result};
use crate::theme::{ColorMap, SchemeKey, ThemePalette};

impl ThemePalette {
    /// Build a palette from a theme part (`ppt/theme/themeN.xml`).
    ///
    /// # Errors
    ///
    /// Fails on malformed XML or when the part has no `clrScheme`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapepaint::theme::{SchemeKey, ThemePalette};
    ///
    /// let xml = br#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">
    ///   <a:themeElements><a:clrScheme name="Office">
    ///     <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
    ///     <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
    ///   </a:clrScheme></a:themeElements>
    /// </a:theme>"#;
    /// let palette = ThemePalette::from_theme_xml(xml).unwrap();
    /// assert_eq!(palette.get_hex(SchemeKey::Accent1), "4472C4");
    /// ```
    pub fn from_theme_xml(xml: &[u8]) -> Result<ThemePalette> {
        let root = XmlNode::parse(xml)?;
        let scheme = root
            .descendant("clrScheme")
            .ok_or_else(|| Error::InvalidFormat("theme has no clrScheme".to_string()))?;
        Ok(Self::from_clr_scheme(scheme))
    }

    /// Build a palette from an already-parsed `clrScheme` element.
    pub fn from_clr_scheme(scheme: &XmlNode) -> ThemePalette {
        let mut palette = ThemePalette::new();
        for slot in &scheme.children {
            let Some(key) = SchemeKey::parse(&slot.name).filter(|k| !k.is_alias()) else {
                continue;
            };
            match slot.children.first().and_then(scheme_slot_color) {
                Some(color) => palette.set(key, color),
                None => warn!(slot = slot.name.as_str(), "theme color slot has no usable color"),
            }
        }
        palette
    }
}

fn scheme_slot_color(node: &XmlNode) -> Option<RGBColor> {
    match node.name.as_str() {
        "srgbClr" => node.attr("val").and_then(RGBColor::from_hex),
        "sysClr" => node
            .attr("lastClr")
            .and_then(RGBColor::from_hex)
            .or_else(|| node.attr("val").and_then(system_color)),
        _ => None,
    }
}

impl ColorMap {
    /// Read a `p:clrMap` (or `p:clrMapOvr/a:overrideClrMapping`) element.
    pub fn from_node(node: &XmlNode) -> ColorMap {
        ColorMap::from_attributes(node.attr_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: &[u8] = br##"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window"/></a:lt1>
      <a:dk2><a:srgbClr val="#44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6FF"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="not-hex"/></a:accent3>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
    </a:clrScheme>
    <a:fontScheme name="Office"/>
  </a:themeElements>
</a:theme>"##;

    #[test]
    fn test_theme_slots() {
        let palette = ThemePalette::from_theme_xml(THEME).unwrap();
        assert_eq!(palette.get_hex(SchemeKey::Dk1), "000000");
        assert_eq!(palette.get_hex(SchemeKey::Lt1), "FFFFFF");
        assert_eq!(palette.get_hex(SchemeKey::Dk2), "44546A");
        assert_eq!(palette.get_hex(SchemeKey::Lt2), "E7E6E6");
        assert_eq!(palette.get(SchemeKey::Accent1), RGBColor::new(68, 114, 196));
        assert_eq!(palette.get_hex(SchemeKey::Hlink), "0563C1");
        // Malformed and missing slots use defaults
        assert!(!palette.contains(SchemeKey::Accent3));
        assert_eq!(palette.get_hex(SchemeKey::Accent3), "808080");
        assert_eq!(palette.get_hex(SchemeKey::FolHlink), "800080");
    }

    #[test]
    fn test_missing_clr_scheme_is_invalid() {
        let err = ThemePalette::from_theme_xml(b"<a:theme xmlns:a=\"urn:a\"/>").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_color_map_from_node() {
        let node = XmlNode::parse(br#"<p:clrMap xmlns:p="urn:p" bg1="dk1" tx1="lt1" bg2="dk2" tx2="lt2" accent1="accent1"/>"#).unwrap();
        let map = ColorMap::from_node(&node);
        assert_eq!(map.bg1, SchemeKey::Dk1);
        assert_eq!(map.tx2, SchemeKey::Lt2);
    }
}
