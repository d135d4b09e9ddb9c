//! Color specification and modifier types.

use smallvec::SmallVec;

use crate::common::RGBColor;
use crate::theme::SchemeKey;

/// Where a paint color comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// Literal `RRGGBB` (`srgbClr`).
    Rgb(RGBColor),
    /// Channel percentages in `0..=100` (`scrgbClr`).
    PercentRgb { r: f64, g: f64, b: f64 },
    /// `hue` in 1/100000 degree; `sat` and `lum` as ratios (`hslClr`).
    Hsl { hue: f64, sat: f64, lum: f64 },
    /// Named preset color (`prstClr`).
    Preset(String),
    /// Operating-system color with an optional cached value (`sysClr`).
    System {
        name: String,
        last_known: Option<RGBColor>,
    },
    /// Theme-indirected color (`schemeClr`).
    Scheme(SchemeKey),
    /// The style context's placeholder color (`phClr`).
    Placeholder,
}

impl ColorSpec {
    /// A literal color from a hex string. `None` if the hex is malformed.
    pub fn rgb_hex(hex: &str) -> Option<Self> {
        RGBColor::from_hex(hex).map(Self::Rgb)
    }

    /// True when resolution needs a theme palette.
    pub fn needs_palette(&self) -> bool {
        matches!(self, Self::Scheme(_))
    }
}

/// A numeric color transform. Values are ratios (`1.0` is 100%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorModifier {
    Alpha(f64),
    HueMod(f64),
    LumMod(f64),
    LumOff(f64),
    SatMod(f64),
    Shade(f64),
    Tint(f64),
}

impl ColorModifier {
    /// Position in the canonical application order. Alpha sorts last but is
    /// applied separately from the RGB transforms.
    pub(crate) fn canonical_rank(&self) -> u8 {
        match self {
            Self::HueMod(_) => 0,
            Self::LumMod(_) => 1,
            Self::LumOff(_) => 2,
            Self::SatMod(_) => 3,
            Self::Shade(_) => 4,
            Self::Tint(_) => 5,
            Self::Alpha(_) => 6,
        }
    }
}

/// Modifier list in document order. Most colors carry at most a few.
pub type ModifierChain = SmallVec<[ColorModifier; 4]>;

/// A color plus the modifiers applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintSpec {
    pub color: ColorSpec,
    pub modifiers: ModifierChain,
}

impl PaintSpec {
    pub fn new(color: ColorSpec) -> Self {
        Self {
            color,
            modifiers: ModifierChain::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: ColorModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

impl From<ColorSpec> for PaintSpec {
    fn from(color: ColorSpec) -> Self {
        Self::new(color)
    }
}

/// The order in which a modifier chain is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModifierOrder {
    /// hue, luminance-mod, luminance-offset, saturation-mod, shade, tint.
    #[default]
    Canonical,
    /// The order the modifiers appear in the document.
    Encounter,
}
