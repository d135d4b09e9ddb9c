//! Shapepaint - shape outlines and paint colors for DrawingML presentations
//!
//! This library turns the shape descriptions of a presentation into two
//! independent, deterministic artifacts: a vector outline for each shape and
//! a fully resolved RGBA color for its fill, stroke, and shadow.
//!
//! # Features
//!
//! - **Preset geometry**: A static catalog of preset shape formulas (basic
//!   shapes, arrows, flow-chart symbols, action buttons), with an explicit
//!   rectangle fallback for unknown presets
//! - **Custom geometry**: Rescaling of literal `custGeom` paths from their
//!   design space into the target box
//! - **Color resolution**: Direct, percentage, HSL, preset, system, theme and
//!   placeholder colors composed with `alpha`/`hueMod`/`lumMod`/`lumOff`/
//!   `satMod`/`shade`/`tint` modifier chains
//! - **Theme palette**: Scheme slots with per-key defaults and `clrMap` aliases
//! - **DrawingML adapter** (`ooxml` feature): Read `spPr`, `clrScheme` and
//!   `clrMap` XML into typed requests
//! - **Batch resolution**: Fan out over many shapes with rayon
//!
//! # Example - Resolving geometry
//!
//! ```
//! use shapepaint::geometry::{Adjustments, BoundingBox, resolve_preset};
//!
//! let mut adjustments = Adjustments::new();
//! adjustments.insert("adj".to_string(), 0.2);
//!
//! let path = resolve_preset("roundRect", BoundingBox::new(100.0, 50.0), &adjustments);
//! assert!(path.to_svg_path(2).starts_with("M 10 0 L 90 0 A 10 10 0 0 1 100 10"));
//! assert_eq!(path.view_box, (100.0, 50.0));
//! ```
//!
//! # Example - Resolving colors
//!
//! ```
//! use shapepaint::color::{ColorModifier, ColorResolver, ColorSpec, PaintSpec};
//! use shapepaint::theme::{SchemeKey, ThemePalette};
//!
//! # fn main() -> Result<(), shapepaint::common::Error> {
//! let palette = ThemePalette::from_entries([("accent1", "4472C4")]);
//! let resolver = ColorResolver::new(Some(&palette));
//!
//! let paint = PaintSpec::new(ColorSpec::Scheme(SchemeKey::Accent1))
//!     .with_modifier(ColorModifier::Shade(0.5));
//! assert_eq!(resolver.resolve_paint(&paint)?.to_string(), "rgba(34,57,98,1)");
//!
//! // Without a palette, scheme references fail loudly
//! assert!(ColorResolver::new(None).resolve_paint(&paint).is_err());
//! # Ok(())
//! # }
//! ```

/// Common types shared by the resolvers
///
/// Errors, logging macros, DrawingML units, number formatting, and the RGB
/// color types.
pub mod common;

/// Shape geometry resolution
pub mod geometry;

/// Paint color resolution
pub mod color;

/// Document theme palette
pub mod theme;

/// Resolver configuration
pub mod config;

/// Parallel per-shape resolution
pub mod batch;

/// DrawingML XML readers
///
/// This module reads shape properties and theme parts from raw XML.
#[cfg(feature = "ooxml")]
pub mod ooxml;

// Re-export commonly used types for convenience
pub use batch::{ShapeOutput, ShapeRequest, ShapeResolution, resolve_shape, resolve_shape_paints, resolve_shapes};
pub use color::{ColorModifier, ColorResolver, ColorSpec, ModifierOrder, PaintSpec};
pub use common::{Error, RGBColor, ResolvedColor, Result};
pub use config::ResolverOptions;
pub use geometry::{BoundingBox, GeometryResolver, PathCommand, ResolvedPath, ShapeGeometryRequest, ShapeKindHint};
pub use theme::{SchemeKey, ThemePalette};
