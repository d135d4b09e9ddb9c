//! Path construction and traversal helpers.
//!
//! `PathBuilder` collects [`PathCommand`]s for the preset formulas, and
//! `PathCursor` walks a finished command list while tracking the current
//! point, which is needed wherever an `ArcTo`'s implied end point matters
//! (SVG rendering, extents, quadratic elevation in custom paths).

use super::types::{PathCommand, Point};

/// Control-point distance for approximating a quarter ellipse with one cubic.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Incremental builder for path command lists.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current: Option<Point>,
}

impl PathBuilder {
    /// Create new path builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` commands
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            current: None,
        }
    }

    /// Add MoveTo command
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let p = Point::new(x, y);
        self.commands.push(PathCommand::MoveTo(p));
        self.current = Some(p);
        self
    }

    /// Add LineTo command
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let p = Point::new(x, y);
        self.commands.push(PathCommand::LineTo(p));
        self.current = Some(p);
        self
    }

    /// Add CubicCurveTo (Bezier) command
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        let end = Point::new(x, y);
        self.commands.push(PathCommand::CubicCurveTo {
            c1: Point::new(x1, y1),
            c2: Point::new(x2, y2),
            end,
        });
        self.current = Some(end);
        self
    }

    /// Add an ArcTo command starting from the current point.
    ///
    /// Zero radii degrade to nothing: the arc would not move the pen.
    pub fn arc_to(&mut self, rx: f64, ry: f64, start_angle: f64, sweep_angle: f64) -> &mut Self {
        if rx <= 0.0 || ry <= 0.0 {
            return self;
        }
        let from = self.current.unwrap_or_default();
        self.commands.push(PathCommand::ArcTo {
            radius_x: rx,
            radius_y: ry,
            start_angle,
            sweep_angle,
        });
        self.current = Some(arc_geometry(from, rx, ry, start_angle, sweep_angle).end);
        self
    }

    /// Add Close command
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Add a closed polygon through `points`.
    pub fn polygon(&mut self, points: &[Point]) -> &mut Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
        self.close()
    }

    /// Add an open polyline through `points`.
    pub fn polyline(&mut self, points: &[Point]) -> &mut Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
        self
    }

    /// Add a closed axis-aligned rectangle.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> &mut Self {
        self.polygon(&[
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ])
    }

    /// Add a closed ellipse made of four cubic curves, starting at the top.
    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> &mut Self {
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;
        self.move_to(cx, cy - ry);
        self.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        self.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        self.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        self.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        self.close()
    }

    /// Get the current pen position
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// Number of commands collected so far
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no command has been added
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Finish and return the command list
    pub fn build(self) -> Vec<PathCommand> {
        self.commands
    }
}

/// Center and end point of an `ArcTo` issued from `from`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub end: Point,
}

/// Point on an axis-aligned ellipse at `angle` degrees (clockwise, y-down).
#[inline]
pub fn point_on_ellipse(center: Point, rx: f64, ry: f64, angle: f64) -> Point {
    let rad = angle.to_radians();
    Point::new(center.x + rx * rad.cos(), center.y + ry * rad.sin())
}

/// Locate the ellipse an `ArcTo` runs along and where it ends.
pub fn arc_geometry(from: Point, rx: f64, ry: f64, start_angle: f64, sweep_angle: f64) -> ArcGeometry {
    let rad = start_angle.to_radians();
    let center = Point::new(from.x - rx * rad.cos(), from.y - ry * rad.sin());
    ArcGeometry {
        center,
        end: point_on_ellipse(center, rx, ry, start_angle + sweep_angle),
    }
}

/// Tracks the pen while walking a finished command list.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathCursor {
    pub current: Point,
    pub subpath_start: Point,
}

impl PathCursor {
    /// Advance over `cmd`. Returns the arc geometry for `ArcTo` commands.
    pub fn step(&mut self, cmd: &PathCommand) -> Option<ArcGeometry> {
        match *cmd {
            PathCommand::MoveTo(p) => {
                self.current = p;
                self.subpath_start = p;
                None
            },
            PathCommand::LineTo(p) => {
                self.current = p;
                None
            },
            PathCommand::CubicCurveTo { end, .. } => {
                self.current = end;
                None
            },
            PathCommand::ArcTo {
                radius_x,
                radius_y,
                start_angle,
                sweep_angle,
            } => {
                let geom = arc_geometry(self.current, radius_x, radius_y, start_angle, sweep_angle);
                self.current = geom.end;
                Some(geom)
            },
            PathCommand::Close => {
                self.current = self.subpath_start;
                None
            },
        }
    }
}

/// Axis-aligned extent of every coordinate a command list reaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathExtent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl PathExtent {
    /// Compute the extent of `commands`.
    ///
    /// Includes control points, arc end points, and the axis extremes an arc
    /// passes through. An empty list yields an all-zero extent.
    pub fn of(commands: &[PathCommand]) -> Self {
        let mut ext = Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        let mut cursor = PathCursor::default();

        for cmd in commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => ext.include(p),
                PathCommand::CubicCurveTo { c1, c2, end } => {
                    ext.include(c1);
                    ext.include(c2);
                    ext.include(end);
                },
                _ => {},
            }
            if let PathCommand::ArcTo {
                radius_x,
                radius_y,
                start_angle,
                sweep_angle,
            } = *cmd
            {
                ext.include(cursor.current);
                if let Some(geom) = cursor.step(cmd) {
                    ext.include(geom.end);
                    let lo = start_angle.min(start_angle + sweep_angle);
                    let hi = start_angle.max(start_angle + sweep_angle);
                    let mut k = (lo / 90.0).ceil();
                    // A full turn touches all four extremes; more adds nothing.
                    for _ in 0..5 {
                        if k * 90.0 > hi {
                            break;
                        }
                        ext.include(point_on_ellipse(geom.center, radius_x, radius_y, k * 90.0));
                        k += 1.0;
                    }
                }
                continue;
            }
            cursor.step(cmd);
        }

        if ext.min_x > ext.max_x {
            return Self {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 0.0,
                max_y: 0.0,
            };
        }
        ext
    }

    fn include(&mut self, p: Point) {
        if !p.x.is_finite() || !p.y.is_finite() {
            return;
        }
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }
}
