//! Common style and color types.
//!
//! This module provides the color types shared by the theme palette and the
//! color resolver.

// Submodule declarations
pub mod color;

// Re-exports
pub use color::{RGBColor, ResolvedColor, normalize_hex};
