//! Unified error types for shapepaint.
//!
//! Geometry resolution never produces an error (it always recovers to some
//! path), so every variant here belongs to color resolution or to reading
//! DrawingML input.
use thiserror::Error;

/// Main error type for shapepaint operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scheme color was referenced but the caller supplied no theme palette
    #[error("Scheme color '{key}' requires a theme palette, but none was supplied")]
    MissingTheme { key: String },

    /// A placeholder color (`phClr`) was referenced outside a style context
    #[error("Placeholder color referenced without a style context color")]
    MissingPlaceholder,

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Structurally invalid DrawingML input
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Result type for shapepaint operations.
pub type Result<T> = std::result::Result<T, Error>;
