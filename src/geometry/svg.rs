//! SVG path data rendering.
//!
//! Emits absolute `M`/`L`/`C`/`A`/`Z` commands separated by single spaces.
//! `ArcTo` carries no end point, so the renderer walks the commands with a
//! [`PathCursor`] and computes where each arc lands.

use super::path::{PathCursor, point_on_ellipse};
use super::types::{PathCommand, Point};
use crate::common::num::write_num;

/// Sweeps at least this large are split in two; SVG cannot draw a full
/// ellipse with a single arc whose start and end coincide.
const FULL_SWEEP: f64 = 359.999;

/// Render path commands as SVG path data.
///
/// # Examples
///
/// ```
/// use shapepaint::geometry::{PathCommand, Point};
/// use shapepaint::geometry::svg::render_svg_path;
///
/// let cmds = [
///     PathCommand::MoveTo(Point::new(0.0, 0.0)),
///     PathCommand::LineTo(Point::new(12.5, 4.0)),
///     PathCommand::Close,
/// ];
/// assert_eq!(render_svg_path(&cmds, 2), "M 0 0 L 12.5 4 Z");
/// ```
pub fn render_svg_path(commands: &[PathCommand], precision: u32) -> String {
    let mut out = String::with_capacity(commands.len() * 16);
    let mut cursor = PathCursor::default();

    for cmd in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        match *cmd {
            PathCommand::MoveTo(p) => {
                out.push('M');
                write_point(&mut out, p, precision);
            },
            PathCommand::LineTo(p) => {
                out.push('L');
                write_point(&mut out, p, precision);
            },
            PathCommand::CubicCurveTo { c1, c2, end } => {
                out.push('C');
                write_point(&mut out, c1, precision);
                write_point(&mut out, c2, precision);
                write_point(&mut out, end, precision);
            },
            PathCommand::ArcTo {
                radius_x,
                radius_y,
                start_angle,
                sweep_angle,
            } => {
                let from = cursor.current;
                if let Some(geom) = cursor.step(cmd) {
                    if sweep_angle.abs() >= FULL_SWEEP {
                        // One full turn as two halves, then whatever is left past it
                        let half = sweep_angle.clamp(-360.0, 360.0) / 2.0;
                        let mid = point_on_ellipse(geom.center, radius_x, radius_y, start_angle + half);
                        write_arc(&mut out, radius_x, radius_y, half, mid, precision);
                        out.push(' ');
                        write_arc(&mut out, radius_x, radius_y, half, from, precision);
                        let rest = sweep_angle % 360.0;
                        if rest.abs() > 1e-9 && rest.abs() < FULL_SWEEP {
                            out.push(' ');
                            write_arc(&mut out, radius_x, radius_y, rest, geom.end, precision);
                        }
                    } else if sweep_angle != 0.0 {
                        write_arc(&mut out, radius_x, radius_y, sweep_angle, geom.end, precision);
                    } else {
                        // Zero sweep: keep the pen where it is.
                        out.push('L');
                        write_point(&mut out, from, precision);
                    }
                }
                continue;
            },
            PathCommand::Close => out.push('Z'),
        }
        cursor.step(cmd);
    }

    out
}

fn write_point(out: &mut String, p: Point, precision: u32) {
    out.push(' ');
    write_num(out, p.x, precision);
    out.push(' ');
    write_num(out, p.y, precision);
}

fn write_arc(out: &mut String, rx: f64, ry: f64, sweep: f64, end: Point, precision: u32) {
    out.push_str("A ");
    write_num(out, rx, precision);
    out.push(' ');
    write_num(out, ry, precision);
    out.push_str(" 0 ");
    out.push(if sweep.abs() > 180.0 { '1' } else { '0' });
    out.push(' ');
    out.push(if sweep > 0.0 { '1' } else { '0' });
    write_point(out, end, precision);
}
