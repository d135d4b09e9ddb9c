//! Document theme palette.
//!
//! A [`ThemePalette`] holds the twelve color slots of a theme's color scheme
//! plus the [`ColorMap`] that binds the background/text aliases (`bg1`,
//! `tx1`, ...) to concrete slots. It is built once per document, never
//! mutated afterwards, and shared by reference across resolution calls.
//!
//! # Examples
//!
//! ```
//! use shapepaint::theme::{SchemeKey, ThemePalette};
//!
//! let palette = ThemePalette::from_entries([("accent1", "#4472C4"), ("dk1", "000000FF")]);
//! assert_eq!(palette.get_hex(SchemeKey::Accent1), "4472C4");
//! assert_eq!(palette.get_hex(SchemeKey::Tx1), "000000");
//! // Absent slots use their static defaults
//! assert_eq!(palette.get_hex(SchemeKey::FolHlink), "800080");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::common::log::warn;
use crate::common::{Error, RGBColor, Result};

/// Number of concrete color slots in a theme color scheme.
pub const SLOT_COUNT: usize = 12;

/// Neutral default for accent slots the theme does not define.
pub const DEFAULT_ACCENT: RGBColor = RGBColor::from_u32(0x808080);

/// A theme color slot, or one of the aliases resolved through a [`ColorMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKey {
    Dk1,
    Lt1,
    Dk2,
    Lt2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hlink,
    FolHlink,
    Bg1,
    Tx1,
    Bg2,
    Tx2,
}

impl SchemeKey {
    /// The twelve concrete slots, in scheme order.
    pub const SLOTS: [SchemeKey; SLOT_COUNT] = [
        Self::Dk1,
        Self::Lt1,
        Self::Dk2,
        Self::Lt2,
        Self::Accent1,
        Self::Accent2,
        Self::Accent3,
        Self::Accent4,
        Self::Accent5,
        Self::Accent6,
        Self::Hlink,
        Self::FolHlink,
    ];

    /// Parse a DrawingML scheme color name (`accent1`, `folHlink`, `tx1`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "dk1" => Self::Dk1,
            "lt1" => Self::Lt1,
            "dk2" => Self::Dk2,
            "lt2" => Self::Lt2,
            "accent1" => Self::Accent1,
            "accent2" => Self::Accent2,
            "accent3" => Self::Accent3,
            "accent4" => Self::Accent4,
            "accent5" => Self::Accent5,
            "accent6" => Self::Accent6,
            "hlink" => Self::Hlink,
            "folHlink" => Self::FolHlink,
            "bg1" => Self::Bg1,
            "tx1" => Self::Tx1,
            "bg2" => Self::Bg2,
            "tx2" => Self::Tx2,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dk1 => "dk1",
            Self::Lt1 => "lt1",
            Self::Dk2 => "dk2",
            Self::Lt2 => "lt2",
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Accent4 => "accent4",
            Self::Accent5 => "accent5",
            Self::Accent6 => "accent6",
            Self::Hlink => "hlink",
            Self::FolHlink => "folHlink",
            Self::Bg1 => "bg1",
            Self::Tx1 => "tx1",
            Self::Bg2 => "bg2",
            Self::Tx2 => "tx2",
        }
    }

    /// True for `bg1`, `tx1`, `bg2` and `tx2`.
    #[inline]
    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Bg1 | Self::Tx1 | Self::Bg2 | Self::Tx2)
    }

    /// Static fallback for a slot the theme does not define.
    pub fn default_color(&self) -> RGBColor {
        match self {
            Self::Dk1 | Self::Dk2 | Self::Tx1 | Self::Tx2 => RGBColor::BLACK,
            Self::Lt1 | Self::Lt2 | Self::Bg1 | Self::Bg2 => RGBColor::WHITE,
            Self::Hlink => RGBColor::from_u32(0x0000FF),
            Self::FolHlink => RGBColor::from_u32(0x800080),
            _ => DEFAULT_ACCENT,
        }
    }

    /// Static fallback as a six-digit hex string.
    pub fn default_hex(&self) -> String {
        self.default_color().to_hex()
    }

    fn slot_index(&self) -> Option<usize> {
        Self::SLOTS.iter().position(|k| k == self)
    }
}

impl fmt::Display for SchemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::InvalidFormat(format!("unknown scheme color '{s}'")))
    }
}

/// Binds the background/text aliases to concrete scheme slots (`p:clrMap`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMap {
    pub bg1: SchemeKey,
    pub tx1: SchemeKey,
    pub bg2: SchemeKey,
    pub tx2: SchemeKey,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            bg1: SchemeKey::Lt1,
            tx1: SchemeKey::Dk1,
            bg2: SchemeKey::Lt2,
            tx2: SchemeKey::Dk2,
        }
    }
}

impl ColorMap {
    /// Build from `clrMap`-style attribute pairs, e.g. `("bg1", "dk1")`.
    ///
    /// Pairs that do not map an alias to a concrete slot are ignored.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::default();
        for (name, value) in attributes {
            let Some(target) = SchemeKey::parse(value).filter(|k| !k.is_alias()) else {
                continue;
            };
            match name {
                "bg1" => map.bg1 = target,
                "tx1" => map.tx1 = target,
                "bg2" => map.bg2 = target,
                "tx2" => map.tx2 = target,
                _ => {},
            }
        }
        map
    }

    /// Map an alias to its concrete slot; concrete slots map to themselves.
    pub fn resolve(&self, key: SchemeKey) -> SchemeKey {
        match key {
            SchemeKey::Bg1 => self.bg1,
            SchemeKey::Tx1 => self.tx1,
            SchemeKey::Bg2 => self.bg2,
            SchemeKey::Tx2 => self.tx2,
            other => other,
        }
    }
}

/// The document's theme colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemePalette {
    slots: [Option<RGBColor>; SLOT_COUNT],
    color_map: ColorMap,
}

impl ThemePalette {
    /// An empty palette: every lookup returns the slot's default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(slot name, hex)` pairs.
    ///
    /// Hex values may carry a `#` prefix or a trailing alpha pair. Unknown
    /// slot names and malformed hex values are skipped.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut palette = Self::new();
        for (name, hex) in entries {
            let (name, hex) = (name.as_ref(), hex.as_ref());
            match (SchemeKey::parse(name), RGBColor::from_hex(hex)) {
                (Some(key), Some(color)) if !key.is_alias() => palette.set(key, color),
                _ => warn!(slot = name, value = hex, "ignoring invalid theme color entry"),
            }
        }
        palette
    }

    /// Set a concrete slot. Aliases are ignored.
    pub fn with_color(mut self, key: SchemeKey, color: RGBColor) -> Self {
        self.set(key, color);
        self
    }

    pub fn with_color_map(mut self, color_map: ColorMap) -> Self {
        self.color_map = color_map;
        self
    }

    pub(crate) fn set(&mut self, key: SchemeKey, color: RGBColor) {
        if let Some(idx) = key.slot_index() {
            self.slots[idx] = Some(color);
        }
    }

    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    /// The color for `key`, following the color map for aliases and falling
    /// back to the slot's static default.
    pub fn get(&self, key: SchemeKey) -> RGBColor {
        let slot = self.color_map.resolve(key);
        slot.slot_index()
            .and_then(|idx| self.slots[idx])
            .unwrap_or_else(|| slot.default_color())
    }

    /// [`get`](Self::get) as a six-digit uppercase hex string.
    pub fn get_hex(&self, key: SchemeKey) -> String {
        self.get(key).to_hex()
    }

    /// True when the theme defines `key` (after alias mapping).
    pub fn contains(&self, key: SchemeKey) -> bool {
        self.color_map
            .resolve(key)
            .slot_index()
            .is_some_and(|idx| self.slots[idx].is_some())
    }

    /// Defined slots in scheme order.
    pub fn iter(&self) -> impl Iterator<Item = (SchemeKey, RGBColor)> + '_ {
        SchemeKey::SLOTS
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(k, c)| c.map(|c| (*k, c)))
    }
}
