//! Common types, traits, and utilities shared across the resolvers.
//!
//! This module provides the error type, logging macros, DrawingML unit
//! conversions, number formatting, and the RGB color types used by both the
//! geometry and the color engines.

// Submodule declarations
pub mod error;
pub mod log;
pub mod num;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{RGBColor, ResolvedColor};
