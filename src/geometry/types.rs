//! Value types for geometry resolution.
//!
//! Requests and results are plain values created per shape and discarded
//! after serialization. All coordinates in a [`PathCommand`] are already in
//! the target coordinate space.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use super::custom::{CustomPath, RawPathCommand};
use super::path::PathExtent;
use super::svg::render_svg_path;

/// Edge length used when a shape's size is unknown.
pub const DEFAULT_BOX_SIZE: f64 = 200.0;

/// Named adjustment ratios (`adj`, `adj1`, ...), expressed as unit-interval values.
pub type Adjustments = HashMap<String, f64>;

/// Target rendering box.
///
/// Width and height are never negative; non-finite or negative inputs are
/// clamped to zero by [`BoundingBox::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a bounding box, clamping invalid dimensions to zero.
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_len(width),
            height: sanitize_len(height),
        }
    }

    /// Create a bounding box from optional dimensions.
    ///
    /// Missing, zero, or invalid dimensions are replaced with the matching
    /// dimension of `fallback`.
    pub fn or_fallback(width: Option<f64>, height: Option<f64>, fallback: BoundingBox) -> Self {
        let pick = |v: Option<f64>, d: f64| match v {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => d,
        };
        Self {
            width: pick(width, fallback.width),
            height: pick(height, fallback.height),
        }
    }

    /// The shorter side of the box.
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOX_SIZE,
            height: DEFAULT_BOX_SIZE,
        }
    }
}

#[inline]
fn sanitize_len(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// A point in path coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale both coordinates independently.
    #[inline]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self {
            x: self.x * sx,
            y: self.y * sy,
        }
    }
}

/// A single vector path command.
///
/// `ArcTo` follows DrawingML semantics: the current point lies on the
/// ellipse at `start_angle`, and the arc sweeps `sweep_angle` degrees
/// (positive is clockwise in y-down space). The end point is implied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicCurveTo { c1: Point, c2: Point, end: Point },
    ArcTo {
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
    Close,
}

impl PathCommand {
    /// Scale every coordinate and radius by `(sx, sy)`. Angles are unchanged.
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        match *self {
            Self::MoveTo(p) => Self::MoveTo(p.scale(sx, sy)),
            Self::LineTo(p) => Self::LineTo(p.scale(sx, sy)),
            Self::CubicCurveTo { c1, c2, end } => Self::CubicCurveTo {
                c1: c1.scale(sx, sy),
                c2: c2.scale(sx, sy),
                end: end.scale(sx, sy),
            },
            Self::ArcTo {
                radius_x,
                radius_y,
                start_angle,
                sweep_angle,
            } => Self::ArcTo {
                radius_x: radius_x * sx,
                radius_y: radius_y * sy,
                start_angle,
                sweep_angle,
            },
            Self::Close => Self::Close,
        }
    }
}

/// The result of geometry resolution: commands plus the coordinate bounds
/// they are expressed against.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    pub commands: Vec<PathCommand>,
    /// `(maxX, maxY)`; never negative and never smaller than any coordinate
    /// the commands reach.
    pub view_box: (f64, f64),
}

impl ResolvedPath {
    /// Build a path whose viewBox covers both `target` and every point the
    /// commands reach.
    pub fn from_commands(commands: Vec<PathCommand>, target: BoundingBox) -> Self {
        let extent = PathExtent::of(&commands);
        let view_box = (
            target.width.max(extent.max_x).max(0.0),
            target.height.max(extent.max_y).max(0.0),
        );
        Self { commands, view_box }
    }

    /// Merge another path into this one, widening the viewBox as needed.
    pub fn extend(&mut self, other: ResolvedPath) {
        self.view_box.0 = self.view_box.0.max(other.view_box.0);
        self.view_box.1 = self.view_box.1.max(other.view_box.1);
        self.commands.extend(other.commands);
    }

    /// Render as SVG path data (`M`/`L`/`C`/`A`/`Z`, absolute coordinates).
    pub fn to_svg_path(&self, precision: u32) -> String {
        render_svg_path(&self.commands, precision)
    }

    /// Render the viewBox as an SVG `viewBox` attribute value.
    pub fn view_box_attr(&self) -> String {
        let mut out = String::with_capacity(24);
        out.push_str("0 0 ");
        crate::common::num::write_num(&mut out, self.view_box.0, 2);
        out.push(' ');
        crate::common::num::write_num(&mut out, self.view_box.1, 2);
        out
    }

    /// End points of every `MoveTo` and `LineTo`, in order.
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl Serialize for ResolvedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResolvedPath", 2)?;
        state.serialize_field("path", &self.to_svg_path(2))?;
        state.serialize_field("viewBox", &[self.view_box.0, self.view_box.1])?;
        state.end()
    }
}

/// Everything needed to resolve one shape's outline.
///
/// When `custom_commands` is present it drives resolution and `preset_id`
/// only serves as the fallback for a degenerate design size.
#[derive(Debug, Clone, Default)]
pub struct ShapeGeometryRequest {
    pub preset_id: Option<String>,
    pub custom_commands: Option<Vec<RawPathCommand>>,
    pub design_size: Option<(f64, f64)>,
    /// Additional custom sub-paths, each with its own design size.
    pub extra_paths: Vec<CustomPath>,
    /// Target box; `None` means the size is unknown.
    pub target: Option<BoundingBox>,
    pub adjustments: Adjustments,
}

impl ShapeGeometryRequest {
    /// A request for a preset shape.
    pub fn preset(preset_id: impl Into<String>, target: BoundingBox) -> Self {
        Self {
            preset_id: Some(preset_id.into()),
            target: Some(target),
            ..Default::default()
        }
    }

    /// A request for a custom path authored in `design_size` units.
    pub fn custom(commands: Vec<RawPathCommand>, design_size: (f64, f64), target: BoundingBox) -> Self {
        Self {
            custom_commands: Some(commands),
            design_size: Some(design_size),
            target: Some(target),
            ..Default::default()
        }
    }

    /// Add a named adjustment ratio.
    pub fn with_adjustment(mut self, name: impl Into<String>, ratio: f64) -> Self {
        self.adjustments.insert(name.into(), ratio);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_clamps_negative() {
        let b = BoundingBox::new(-5.0, f64::NAN);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
        assert!(b.is_degenerate());
    }

    #[test]
    fn test_bounding_box_fallback() {
        let b = BoundingBox::or_fallback(None, Some(0.0), BoundingBox::default());
        assert_eq!(b, BoundingBox::new(200.0, 200.0));
        let b = BoundingBox::or_fallback(Some(40.0), None, BoundingBox::default());
        assert_eq!(b, BoundingBox::new(40.0, 200.0));
    }

    #[test]
    fn test_view_box_covers_overflowing_points() {
        let cmds = vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(150.0, 20.0)),
        ];
        let path = ResolvedPath::from_commands(cmds, BoundingBox::new(100.0, 100.0));
        assert_eq!(path.view_box, (150.0, 100.0));
        assert_eq!(path.view_box_attr(), "0 0 150 100");
    }

    #[test]
    fn test_scaled_command_keeps_angles() {
        let arc = PathCommand::ArcTo {
            radius_x: 10.0,
            radius_y: 5.0,
            start_angle: 90.0,
            sweep_angle: -45.0,
        };
        assert_eq!(
            arc.scaled(2.0, 3.0),
            PathCommand::ArcTo {
                radius_x: 20.0,
                radius_y: 15.0,
                start_angle: 90.0,
                sweep_angle: -45.0,
            }
        );
    }

    #[test]
    fn test_serialize_resolved_path() {
        let path = ResolvedPath::from_commands(
            vec![
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(10.0, 0.0)),
                PathCommand::Close,
            ],
            BoundingBox::new(10.0, 5.0),
        );
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["path"], "M 0 0 L 10 0 Z");
        assert_eq!(json["viewBox"][0], 10.0);
        assert_eq!(json["viewBox"][1], 5.0);
    }
}
