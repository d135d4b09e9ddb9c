//! Configuration types for shape resolution.
//!
//! This module defines the options shared by the geometry resolver, the
//! color resolver, and the batch driver.

use crate::color::ModifierOrder;
use crate::geometry::BoundingBox;

/// Default `roundRect` corner ratio used by the preset catalog.
pub const ROUND_RECT_ADJ_CATALOG: f64 = 0.1;

/// Default `roundRect` corner ratio used when a rounded rectangle is built
/// directly from a slide element rather than through the catalog.
pub const ROUND_RECT_ADJ_ELEMENT: f64 = 0.5;

/// Number of shapes from which [`crate::batch::resolve_shapes`] fans out
/// across the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10;

/// Configuration options for shape resolution.
///
/// # Examples
///
/// ```rust
/// use shapepaint::color::ModifierOrder;
/// use shapepaint::config::{ResolverOptions, ROUND_RECT_ADJ_ELEMENT};
///
/// // Create with defaults
/// let options = ResolverOptions::default();
/// assert_eq!(options.path_precision, 2);
///
/// // Or customize
/// let options = ResolverOptions::new()
///     .with_round_rect_adj(ROUND_RECT_ADJ_ELEMENT)
///     .with_modifier_order(ModifierOrder::Encounter)
///     .with_parallel(false);
/// ```
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Box used when a shape has no usable size
    pub default_box: BoundingBox,
    /// Default `roundRect` corner ratio when the shape carries no `adj`
    pub round_rect_adj: f64,
    /// Order in which color modifier chains are applied
    pub modifier_order: ModifierOrder,
    /// Decimal places in rendered SVG path data
    pub path_precision: u32,
    /// Whether batch resolution may use the rayon pool
    pub use_parallel: bool,
    /// Minimum batch size before going parallel
    pub parallel_threshold: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            default_box: BoundingBox::default(),
            round_rect_adj: ROUND_RECT_ADJ_CATALOG,
            modifier_order: ModifierOrder::Canonical,
            path_precision: 2,
            use_parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ResolverOptions {
    /// Create a new `ResolverOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the box used for shapes without a size.
    #[inline]
    pub fn with_default_box(mut self, default_box: BoundingBox) -> Self {
        self.default_box = default_box;
        self
    }

    /// Set the default `roundRect` corner ratio.
    ///
    /// The value is clamped to `[0, 0.5]`, the range a corner ratio can take.
    #[inline]
    pub fn with_round_rect_adj(mut self, ratio: f64) -> Self {
        self.round_rect_adj = if ratio.is_finite() {
            ratio.clamp(0.0, 0.5)
        } else {
            ROUND_RECT_ADJ_CATALOG
        };
        self
    }

    /// Set the color modifier application order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapepaint::color::ModifierOrder;
    /// use shapepaint::config::ResolverOptions;
    ///
    /// let options = ResolverOptions::new().with_modifier_order(ModifierOrder::Encounter);
    /// assert_eq!(options.modifier_order, ModifierOrder::Encounter);
    /// ```
    #[inline]
    pub fn with_modifier_order(mut self, order: ModifierOrder) -> Self {
        self.modifier_order = order;
        self
    }

    /// Set the number of decimal places in rendered path data.
    #[inline]
    pub fn with_path_precision(mut self, precision: u32) -> Self {
        self.path_precision = precision;
        self
    }

    /// Enable or disable parallel batch resolution.
    #[inline]
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Set the minimum batch size for parallel resolution.
    #[inline]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
