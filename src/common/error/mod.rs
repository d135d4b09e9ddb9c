//! Unified error types for shapepaint.
//!
//! This module provides a single error type shared by the color resolver and
//! the DrawingML readers, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
