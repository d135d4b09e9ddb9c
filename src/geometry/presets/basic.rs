//! Basic shapes: rectangles, ellipses, polygons, stars.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

use super::FormulaContext;
use crate::geometry::path::PathBuilder;
use crate::geometry::types::{PathCommand, Point};

/// Inner radius of a star as a fraction of the outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;
/// Number of vertices (outer and inner) of the star outline.
pub const STAR_VERTICES: usize = 10;

pub fn rect(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let mut b = PathBuilder::with_capacity(5);
    b.rect(0.0, 0.0, ctx.width, ctx.height);
    b.build()
}

pub fn ellipse(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (rx, ry) = (ctx.width / 2.0, ctx.height / 2.0);
    let mut b = PathBuilder::with_capacity(6);
    b.ellipse(rx, ry, rx, ry);
    b.build()
}

pub fn triangle(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let apex = w * ctx.adj("adj", 0.5, 1.0);
    let mut b = PathBuilder::with_capacity(4);
    b.polygon(&[Point::new(apex, 0.0), Point::new(w, h), Point::new(0.0, h)]);
    b.build()
}

pub fn right_triangle(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let mut b = PathBuilder::with_capacity(4);
    b.polygon(&[Point::new(0.0, h), Point::new(0.0, 0.0), Point::new(w, h)]);
    b.build()
}

pub fn diamond(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let mut b = PathBuilder::with_capacity(5);
    b.polygon(&[
        Point::new(w / 2.0, 0.0),
        Point::new(w, h / 2.0),
        Point::new(w / 2.0, h),
        Point::new(0.0, h / 2.0),
    ]);
    b.build()
}

pub fn parallelogram(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let off = (ctx.min_side() * ctx.adj("adj", 0.25, 1.0)).min(w);
    let mut b = PathBuilder::with_capacity(5);
    b.polygon(&[
        Point::new(off, 0.0),
        Point::new(w, 0.0),
        Point::new(w - off, h),
        Point::new(0.0, h),
    ]);
    b.build()
}

pub fn trapezoid(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let off = (ctx.min_side() * ctx.adj("adj", 0.25, 1.0)).min(w / 2.0);
    let mut b = PathBuilder::with_capacity(5);
    b.polygon(&[
        Point::new(0.0, h),
        Point::new(off, 0.0),
        Point::new(w - off, 0.0),
        Point::new(w, h),
    ]);
    b.build()
}

/// `n` vertices on the circle of radius `min(w,h)/2` centered in the box.
fn regular_polygon(ctx: &FormulaContext<'_>, n: usize, phase: f64) -> Vec<PathCommand> {
    let (cx, cy) = (ctx.width / 2.0, ctx.height / 2.0);
    let r = ctx.min_side() / 2.0;
    let points: Vec<Point> = (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n as f64 + phase;
            Point::new(cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect();
    let mut b = PathBuilder::with_capacity(n + 1);
    b.polygon(&points);
    b.build()
}

pub fn pentagon(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    regular_polygon(ctx, 5, -FRAC_PI_2)
}

pub fn hexagon(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    regular_polygon(ctx, 6, 0.0)
}

pub fn heptagon(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    regular_polygon(ctx, 7, -FRAC_PI_2)
}

pub fn octagon(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    regular_polygon(ctx, 8, FRAC_PI_8)
}

pub fn decagon(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    regular_polygon(ctx, 10, 0.0)
}

/// Five-pointed star; the 4- and 6-point variants share this outline.
pub fn star(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (cx, cy) = (ctx.width / 2.0, ctx.height / 2.0);
    let outer = ctx.min_side() / 2.0;
    let inner = outer * STAR_INNER_RATIO;
    let step = 2.0 * PI / STAR_VERTICES as f64;
    let points: Vec<Point> = (0..STAR_VERTICES)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = -FRAC_PI_2 + step * i as f64;
            Point::new(cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect();
    let mut b = PathBuilder::with_capacity(STAR_VERTICES + 1);
    b.polygon(&points);
    b.build()
}

pub fn round_rect(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let r = ctx.min_side() * ctx.adj("adj", ctx.round_rect_adj.clamp(0.0, 0.5), 0.5);
    let mut b = PathBuilder::with_capacity(10);
    b.move_to(r, 0.0)
        .line_to(w - r, 0.0)
        .arc_to(r, r, 270.0, 90.0)
        .line_to(w, h - r)
        .arc_to(r, r, 0.0, 90.0)
        .line_to(r, h)
        .arc_to(r, r, 90.0, 90.0)
        .line_to(0.0, r)
        .arc_to(r, r, 180.0, 90.0)
        .close();
    b.build()
}

pub fn plus(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let off = ctx.min_side() * ctx.adj("adj", 0.25, 0.5);
    let (x2, y2) = (w - off, h - off);
    let mut b = PathBuilder::with_capacity(13);
    b.polygon(&[
        Point::new(0.0, off),
        Point::new(off, off),
        Point::new(off, 0.0),
        Point::new(x2, 0.0),
        Point::new(x2, off),
        Point::new(w, off),
        Point::new(w, y2),
        Point::new(x2, y2),
        Point::new(x2, h),
        Point::new(off, h),
        Point::new(off, y2),
        Point::new(0.0, y2),
    ]);
    b.build()
}

/// Open segment from the top-left to the bottom-right corner.
pub fn line(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let mut b = PathBuilder::with_capacity(2);
    b.move_to(0.0, 0.0).line_to(ctx.width, ctx.height);
    b.build()
}
