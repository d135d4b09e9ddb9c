//! Paint color resolution.
//!
//! A [`ColorSpec`] names where a color comes from; a modifier chain then
//! transforms it. Resolution is a pure function of the spec, an optional
//! theme palette, and an optional placeholder color. The only failures are a
//! scheme reference with no palette wired in and a `phClr` with no style
//! context to take it from.
//!
//! # Examples
//!
//! ```
//! use shapepaint::color::{ColorModifier, ColorSpec, apply_modifiers, resolve};
//!
//! let red = resolve(&ColorSpec::rgb_hex("FF0000").unwrap(), None, None).unwrap();
//! let dark = apply_modifiers(red, &[ColorModifier::Shade(0.5)]);
//! assert_eq!(dark.to_string(), "rgba(128,0,0,1)");
//! ```

pub mod hsl;
pub mod presets;
pub mod spec;

pub use spec::{ColorModifier, ColorSpec, ModifierChain, ModifierOrder, PaintSpec};

use smallvec::SmallVec;

use self::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::common::log::{debug, warn};
use crate::common::unit::hsl_hue_to_degrees;
use crate::common::{Error, RGBColor, ResolvedColor, Result};
use crate::config::ResolverOptions;
use crate::theme::ThemePalette;

/// Resolve a color specification to an opaque RGBA color.
///
/// # Errors
///
/// - [`Error::MissingTheme`] for a scheme reference when `palette` is `None`.
/// - [`Error::MissingPlaceholder`] for `phClr` when `placeholder` is `None`.
pub fn resolve(
    spec: &ColorSpec,
    palette: Option<&ThemePalette>,
    placeholder: Option<ResolvedColor>,
) -> Result<ResolvedColor> {
    let color = match spec {
        ColorSpec::Rgb(rgb) => ResolvedColor::from(*rgb),
        ColorSpec::PercentRgb { r, g, b } => {
            ResolvedColor::opaque(percent_channel(*r), percent_channel(*g), percent_channel(*b))
        },
        ColorSpec::Hsl { hue, sat, lum } => {
            let (r, g, b) = hsl_to_rgb(hsl::Hsl {
                h: hsl_hue_to_degrees(*hue),
                s: *sat,
                l: *lum,
            });
            ResolvedColor::opaque(to_channel(r), to_channel(g), to_channel(b))
        },
        ColorSpec::Preset(name) => presets::preset_color(name)
            .unwrap_or_else(|| {
                debug!(name = name.as_str(), "unknown preset color, using black");
                RGBColor::BLACK
            })
            .into(),
        ColorSpec::System { name, last_known } => last_known
            .or_else(|| presets::system_color(name))
            .unwrap_or(RGBColor::WHITE)
            .into(),
        ColorSpec::Scheme(key) => match palette {
            Some(palette) => palette.get(*key).into(),
            None => {
                warn!(key = key.as_str(), "scheme color requested without a theme palette");
                return Err(Error::MissingTheme {
                    key: key.as_str().to_string(),
                });
            },
        },
        ColorSpec::Placeholder => placeholder.ok_or(Error::MissingPlaceholder)?,
    };
    Ok(color)
}

/// Apply `chain` in canonical order.
///
/// RGB modifiers run in the order hue, luminance-mod, luminance-offset,
/// saturation-mod, shade, tint; alpha is applied last and the last alpha in
/// the chain wins. An empty chain returns `base` unchanged.
pub fn apply_modifiers(base: ResolvedColor, chain: &[ColorModifier]) -> ResolvedColor {
    apply_modifiers_with_order(base, chain, ModifierOrder::Canonical)
}

/// Apply `chain` in the given order. Alpha is always composed after the
/// RGB transforms regardless of its position.
pub fn apply_modifiers_with_order(base: ResolvedColor, chain: &[ColorModifier], order: ModifierOrder) -> ResolvedColor {
    if chain.is_empty() {
        return base;
    }

    let mut ordered: SmallVec<[ColorModifier; 8]> = chain.iter().copied().collect();
    if order == ModifierOrder::Canonical {
        ordered.sort_by_key(ColorModifier::canonical_rank);
    }

    let mut rgb = [f64::from(base.r), f64::from(base.g), f64::from(base.b)];
    let mut alpha = base.a;

    for modifier in ordered {
        match modifier {
            ColorModifier::Alpha(a) => alpha = a,
            ColorModifier::LumMod(m) => map_channels(&mut rgb, |c| c * m),
            ColorModifier::LumOff(o) => map_channels(&mut rgb, |c| c + o * 255.0),
            ColorModifier::Shade(s) => map_channels(&mut rgb, |c| c * s),
            ColorModifier::Tint(t) => map_channels(&mut rgb, |c| c + (255.0 - c) * (1.0 - t)),
            ColorModifier::HueMod(m) => {
                let mut hsl = rgb_to_hsl(rgb[0], rgb[1], rgb[2]);
                hsl.h = (hsl.h * m).rem_euclid(360.0);
                set_from_hsl(&mut rgb, hsl);
            },
            ColorModifier::SatMod(m) => {
                let mut hsl = rgb_to_hsl(rgb[0], rgb[1], rgb[2]);
                hsl.s = (hsl.s * m).clamp(0.0, 1.0);
                set_from_hsl(&mut rgb, hsl);
            },
        }
    }

    ResolvedColor::new(to_channel(rgb[0]), to_channel(rgb[1]), to_channel(rgb[2]), alpha)
}

#[inline]
fn map_channels(rgb: &mut [f64; 3], f: impl Fn(f64) -> f64) {
    for c in rgb.iter_mut() {
        let v = f(*c);
        *c = if v.is_finite() { v.clamp(0.0, 255.0) } else { 0.0 };
    }
}

#[inline]
fn set_from_hsl(rgb: &mut [f64; 3], hsl: hsl::Hsl) {
    let (r, g, b) = hsl_to_rgb(hsl);
    *rgb = [r, g, b];
}

#[inline]
fn to_channel(v: f64) -> u8 {
    if v.is_finite() { v.round().clamp(0.0, 255.0) as u8 } else { 0 }
}

#[inline]
fn percent_channel(pct: f64) -> u8 {
    to_channel(255.0 * pct / 100.0)
}

/// Color resolution bound to one document's palette and one style context.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorResolver<'a> {
    palette: Option<&'a ThemePalette>,
    placeholder: Option<ResolvedColor>,
    order: ModifierOrder,
}

impl<'a> ColorResolver<'a> {
    pub fn new(palette: Option<&'a ThemePalette>) -> Self {
        Self {
            palette,
            ..Default::default()
        }
    }

    pub fn from_options(palette: Option<&'a ThemePalette>, options: &ResolverOptions) -> Self {
        Self::new(palette).with_order(options.modifier_order)
    }

    /// Set the color `phClr` resolves to.
    pub fn with_placeholder(mut self, placeholder: Option<ResolvedColor>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_order(mut self, order: ModifierOrder) -> Self {
        self.order = order;
        self
    }

    pub fn resolve(&self, spec: &ColorSpec) -> Result<ResolvedColor> {
        resolve(spec, self.palette, self.placeholder)
    }

    /// Resolve a color and apply its modifier chain.
    pub fn resolve_paint(&self, paint: &PaintSpec) -> Result<ResolvedColor> {
        let base = self.resolve(&paint.color)?;
        Ok(apply_modifiers_with_order(base, &paint.modifiers, self.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SchemeKey;
    use proptest::prelude::*;

    fn rgb(hex: &str) -> ColorSpec {
        ColorSpec::rgb_hex(hex).unwrap()
    }

    #[test]
    fn test_shade_halves_channels() {
        let red = resolve(&rgb("FF0000"), None, None).unwrap();
        let shaded = apply_modifiers(red, &[ColorModifier::Shade(0.5)]);
        assert_eq!(shaded, ResolvedColor::new(128, 0, 0, 1.0));
    }

    #[test]
    fn test_scheme_color_from_palette() {
        let palette = ThemePalette::from_entries([("accent1", "4472C4")]);
        let c = resolve(&ColorSpec::Scheme(SchemeKey::Accent1), Some(&palette), None).unwrap();
        assert_eq!(c, ResolvedColor::new(68, 114, 196, 1.0));
    }

    #[test]
    fn test_scheme_color_without_palette_fails() {
        let err = resolve(&ColorSpec::Scheme(SchemeKey::Accent1), None, None).unwrap_err();
        assert_eq!(err, Error::MissingTheme { key: "accent1".into() });
    }

    #[test]
    fn test_absent_theme_slot_uses_default() {
        let palette = ThemePalette::new();
        let c = resolve(&ColorSpec::Scheme(SchemeKey::Hlink), Some(&palette), None).unwrap();
        assert_eq!(c, ResolvedColor::opaque(0, 0, 255));
    }

    #[test]
    fn test_placeholder() {
        let ph = ResolvedColor::opaque(10, 20, 30);
        assert_eq!(resolve(&ColorSpec::Placeholder, None, Some(ph)), Ok(ph));
        assert_eq!(resolve(&ColorSpec::Placeholder, None, None), Err(Error::MissingPlaceholder));
    }

    #[test]
    fn test_percent_and_hsl() {
        let c = resolve(&ColorSpec::PercentRgb { r: 100.0, g: 50.0, b: 0.0 }, None, None).unwrap();
        assert_eq!(c, ResolvedColor::opaque(255, 128, 0));

        // hue 120 degrees in 1/100000 degree units
        let green = ColorSpec::Hsl {
            hue: 12_000_000.0,
            sat: 1.0,
            lum: 0.5,
        };
        assert_eq!(resolve(&green, None, None).unwrap(), ResolvedColor::opaque(0, 255, 0));
    }

    #[test]
    fn test_preset_and_system_colors() {
        assert_eq!(
            resolve(&ColorSpec::Preset("cornflowerBlue".into()), None, None).unwrap(),
            ResolvedColor::opaque(0x64, 0x95, 0xED)
        );
        assert_eq!(
            resolve(&ColorSpec::Preset("noSuchColor".into()), None, None).unwrap(),
            ResolvedColor::BLACK
        );

        let hinted = ColorSpec::System {
            name: "windowText".into(),
            last_known: Some(RGBColor::new(1, 1, 1)),
        };
        assert_eq!(resolve(&hinted, None, None).unwrap(), ResolvedColor::opaque(1, 1, 1));
        let mapped = ColorSpec::System {
            name: "windowText".into(),
            last_known: None,
        };
        assert_eq!(resolve(&mapped, None, None).unwrap(), ResolvedColor::BLACK);
        let unknown = ColorSpec::System {
            name: "nothing".into(),
            last_known: None,
        };
        assert_eq!(resolve(&unknown, None, None).unwrap(), ResolvedColor::WHITE);
    }

    #[test]
    fn test_tint_lum_off_and_alpha() {
        let base = ResolvedColor::opaque(0, 100, 200);
        assert_eq!(
            apply_modifiers(base, &[ColorModifier::Tint(0.5)]),
            ResolvedColor::opaque(128, 178, 228)
        );
        assert_eq!(
            apply_modifiers(base, &[ColorModifier::LumOff(0.5)]),
            ResolvedColor::opaque(128, 228, 255)
        );
        let faded = apply_modifiers(base, &[ColorModifier::Alpha(0.2), ColorModifier::Alpha(0.6)]);
        assert_eq!(faded, ResolvedColor::new(0, 100, 200, 0.6));
    }

    #[test]
    fn test_canonical_versus_encounter_order() {
        let base = ResolvedColor::opaque(200, 200, 200);
        let chain = [ColorModifier::LumOff(0.2), ColorModifier::LumMod(0.5)];
        // Canonical: lumMod first, 200 * 0.5 + 51 = 151
        assert_eq!(apply_modifiers(base, &chain).r, 151);
        // Encounter: lumOff first, (200 + 51) * 0.5 = 125.5
        assert_eq!(apply_modifiers_with_order(base, &chain, ModifierOrder::Encounter).r, 126);
    }

    #[test]
    fn test_sat_mod_zero_gives_gray() {
        let c = apply_modifiers(ResolvedColor::opaque(255, 0, 0), &[ColorModifier::SatMod(0.0)]);
        assert_eq!(c, ResolvedColor::opaque(128, 128, 128));
    }

    #[test]
    fn test_hue_mod_rotates() {
        // Hue 120 * 2 = 240: green becomes blue
        let c = apply_modifiers(ResolvedColor::opaque(0, 255, 0), &[ColorModifier::HueMod(2.0)]);
        assert_eq!(c, ResolvedColor::opaque(0, 0, 255));
    }

    #[test]
    fn test_resolver_applies_chain() {
        let palette = ThemePalette::from_entries([("accent1", "4472C4")]);
        let resolver = ColorResolver::new(Some(&palette));
        let paint = PaintSpec::new(ColorSpec::Scheme(SchemeKey::Accent1)).with_modifier(ColorModifier::Alpha(0.5));
        assert_eq!(resolver.resolve_paint(&paint).unwrap().to_string(), "rgba(68,114,196,0.5)");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_empty_chain_is_identity(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            a in 0.0f64..=1.0,
        ) {
            let c = ResolvedColor::new(r, g, b, a);
            prop_assert_eq!(apply_modifiers(c, &[]), c);
            prop_assert_eq!(apply_modifiers_with_order(c, &[], ModifierOrder::Encounter), c);
        }

        #[test]
        fn prop_shade_darkens_and_tint_lightens(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            ratio in 0.0f64..=1.0,
        ) {
            let base = ResolvedColor::opaque(r, g, b);
            let shaded = apply_modifiers(base, &[ColorModifier::Shade(ratio)]);
            let tinted = apply_modifiers(base, &[ColorModifier::Tint(ratio)]);
            prop_assert!(shaded.r <= r && shaded.g <= g && shaded.b <= b);
            prop_assert!(tinted.r >= r && tinted.g >= g && tinted.b >= b);
        }
    }
}
