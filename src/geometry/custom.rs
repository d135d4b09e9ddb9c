//! Custom geometry rescaling.
//!
//! Literal path commands are authored in a design space (`<a:path w h>`)
//! and rescaled into the target box with independent horizontal and
//! vertical factors.

use smallvec::SmallVec;

use super::path::PathCursor;
use super::types::{BoundingBox, PathCommand, Point, ResolvedPath};
use crate::common::log::warn;

/// A path command as authored, in design-space coordinates.
///
/// Curve variants keep their points in a list because the source format
/// does; a cubic with anything other than three points is malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicBezTo(SmallVec<[Point; 3]>),
    QuadBezTo(SmallVec<[Point; 2]>),
    /// Angles are in degrees.
    ArcTo {
        width_radius: f64,
        height_radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
    Close,
}

/// One custom sub-path together with its own design size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomPath {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<RawPathCommand>,
}

impl CustomPath {
    pub fn new(width: f64, height: f64, commands: Vec<RawPathCommand>) -> Self {
        Self {
            width,
            height,
            commands,
        }
    }
}

/// Horizontal and vertical scale factors between two spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub sx: f64,
    pub sy: f64,
}

impl ScaleFactors {
    /// Factors mapping `design` onto `target`.
    ///
    /// `None` when a design dimension is zero, negative, or not finite.
    pub fn for_design(design: (f64, f64), target: BoundingBox) -> Option<Self> {
        let (w, h) = design;
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(Self {
            sx: target.width / w,
            sy: target.height / h,
        })
    }

    /// The reciprocal factors. `None` if either factor is zero.
    pub fn inverse(&self) -> Option<Self> {
        if self.sx == 0.0 || self.sy == 0.0 {
            return None;
        }
        Some(Self {
            sx: 1.0 / self.sx,
            sy: 1.0 / self.sy,
        })
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        p.scale(self.sx, self.sy)
    }
}

/// Rescale design-space commands into `target`.
///
/// Returns `None` when `design` has a zero or invalid dimension; the caller
/// then falls back to a preset or rectangle. Cubic commands without exactly
/// three points are skipped. Quadratic curves are elevated to cubics.
pub fn resolve_custom(commands: &[RawPathCommand], design: (f64, f64), target: BoundingBox) -> Option<ResolvedPath> {
    let Some(scale) = ScaleFactors::for_design(design, target) else {
        warn!(
            width = design.0,
            height = design.1,
            "degenerate custom geometry design size"
        );
        return None;
    };
    Some(ResolvedPath::from_commands(scale_commands(commands, scale), target))
}

pub(crate) fn scale_commands(commands: &[RawPathCommand], scale: ScaleFactors) -> Vec<PathCommand> {
    let mut out = Vec::with_capacity(commands.len());
    let mut cursor = PathCursor::default();

    for raw in commands {
        let cmd = match raw {
            RawPathCommand::MoveTo(p) => PathCommand::MoveTo(scale.apply(*p)),
            RawPathCommand::LineTo(p) => PathCommand::LineTo(scale.apply(*p)),
            RawPathCommand::CubicBezTo(pts) => match pts.as_slice() {
                [c1, c2, end] => PathCommand::CubicCurveTo {
                    c1: scale.apply(*c1),
                    c2: scale.apply(*c2),
                    end: scale.apply(*end),
                },
                _ => {
                    warn!(points = pts.len(), "skipping cubic curve without three points");
                    continue;
                },
            },
            RawPathCommand::QuadBezTo(pts) => match pts.as_slice() {
                [ctrl, end] => elevate_quadratic(cursor.current, scale.apply(*ctrl), scale.apply(*end)),
                _ => {
                    warn!(points = pts.len(), "skipping quadratic curve without two points");
                    continue;
                },
            },
            RawPathCommand::ArcTo {
                width_radius,
                height_radius,
                start_angle,
                sweep_angle,
            } => PathCommand::ArcTo {
                radius_x: width_radius * scale.sx,
                radius_y: height_radius * scale.sy,
                start_angle: *start_angle,
                sweep_angle: *sweep_angle,
            },
            RawPathCommand::Close => PathCommand::Close,
        };
        cursor.step(&cmd);
        out.push(cmd);
    }

    out
}

/// Exact cubic form of the quadratic curve `from -> ctrl -> end`.
fn elevate_quadratic(from: Point, ctrl: Point, end: Point) -> PathCommand {
    const TWO_THIRDS: f64 = 2.0 / 3.0;
    PathCommand::CubicCurveTo {
        c1: Point::new(
            from.x + TWO_THIRDS * (ctrl.x - from.x),
            from.y + TWO_THIRDS * (ctrl.y - from.y),
        ),
        c2: Point::new(
            end.x + TWO_THIRDS * (ctrl.x - end.x),
            end.y + TWO_THIRDS * (ctrl.y - end.y),
        ),
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn square_path() -> Vec<RawPathCommand> {
        vec![
            RawPathCommand::MoveTo(Point::new(0.0, 0.0)),
            RawPathCommand::LineTo(Point::new(100.0, 0.0)),
            RawPathCommand::LineTo(Point::new(100.0, 100.0)),
            RawPathCommand::LineTo(Point::new(0.0, 100.0)),
            RawPathCommand::Close,
        ]
    }

    #[test]
    fn test_degenerate_design_size_returns_none() {
        let target = BoundingBox::new(50.0, 50.0);
        assert!(resolve_custom(&square_path(), (0.0, 0.0), target).is_none());
        assert!(resolve_custom(&square_path(), (100.0, 0.0), target).is_none());
        assert!(resolve_custom(&square_path(), (f64::NAN, 10.0), target).is_none());
    }

    #[test]
    fn test_scales_independently() {
        let path = resolve_custom(&square_path(), (100.0, 100.0), BoundingBox::new(200.0, 50.0)).unwrap();
        assert_eq!(path.commands[2], PathCommand::LineTo(Point::new(200.0, 50.0)));
        assert_eq!(path.view_box, (200.0, 50.0));
    }

    #[test]
    fn test_malformed_cubic_is_skipped() {
        let cmds = vec![
            RawPathCommand::MoveTo(Point::new(0.0, 0.0)),
            RawPathCommand::CubicBezTo(smallvec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]),
            RawPathCommand::LineTo(Point::new(10.0, 10.0)),
        ];
        let path = resolve_custom(&cmds, (10.0, 10.0), BoundingBox::new(10.0, 10.0)).unwrap();
        assert_eq!(path.commands.len(), 2);
        assert_eq!(path.commands[1], PathCommand::LineTo(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_quadratic_is_elevated() {
        let cmds = vec![
            RawPathCommand::MoveTo(Point::new(0.0, 0.0)),
            RawPathCommand::QuadBezTo(smallvec![Point::new(3.0, 3.0), Point::new(6.0, 0.0)]),
        ];
        let path = resolve_custom(&cmds, (6.0, 3.0), BoundingBox::new(6.0, 3.0)).unwrap();
        assert_eq!(
            path.commands[1],
            PathCommand::CubicCurveTo {
                c1: Point::new(2.0, 2.0),
                c2: Point::new(4.0, 2.0),
                end: Point::new(6.0, 0.0),
            }
        );
    }

    #[test]
    fn test_arc_radii_are_scaled() {
        let cmds = vec![
            RawPathCommand::MoveTo(Point::new(0.0, 5.0)),
            RawPathCommand::ArcTo {
                width_radius: 5.0,
                height_radius: 5.0,
                start_angle: 180.0,
                sweep_angle: 180.0,
            },
        ];
        let path = resolve_custom(&cmds, (10.0, 10.0), BoundingBox::new(20.0, 10.0)).unwrap();
        assert_eq!(
            path.commands[1],
            PathCommand::ArcTo {
                radius_x: 10.0,
                radius_y: 5.0,
                start_angle: 180.0,
                sweep_angle: 180.0,
            }
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_scale_round_trip(
            x in -1.0e4f64..1.0e4,
            y in -1.0e4f64..1.0e4,
            dw in 0.5f64..5000.0,
            dh in 0.5f64..5000.0,
            tw in 0.5f64..5000.0,
            th in 0.5f64..5000.0,
        ) {
            let scale = ScaleFactors::for_design((dw, dh), BoundingBox::new(tw, th)).unwrap();
            let back = scale.inverse().unwrap().apply(scale.apply(Point::new(x, y)));
            prop_assert!((back.x - x).abs() <= 1e-9 * x.abs().max(1.0));
            prop_assert!((back.y - y).abs() <= 1e-9 * y.abs().max(1.0));
        }

        #[test]
        fn prop_view_box_contains_scaled_points(
            pts in proptest::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), 1..20),
            tw in 1.0f64..500.0,
            th in 1.0f64..500.0,
        ) {
            let mut cmds = vec![RawPathCommand::MoveTo(Point::new(pts[0].0, pts[0].1))];
            cmds.extend(pts[1..].iter().map(|&(x, y)| RawPathCommand::LineTo(Point::new(x, y))));
            let path = resolve_custom(&cmds, (100.0, 100.0), BoundingBox::new(tw, th)).unwrap();
            for p in path.vertices() {
                prop_assert!(p.x <= path.view_box.0 && p.y <= path.view_box.1);
            }
        }
    }
}
