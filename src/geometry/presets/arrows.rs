//! Block arrows, chevron, and home plate.
//!
//! Arrow proportions are fixed: the shaft spans the middle 60% of the
//! cross axis and a single head takes the last 30% of the main axis.

use super::FormulaContext;
use crate::geometry::path::PathBuilder;
use crate::geometry::types::{PathCommand, Point};

/// Shaft thickness relative to the cross axis.
pub const SHAFT_RATIO: f64 = 0.6;
/// Where a single head starts along the main axis.
pub const HEAD_START: f64 = 0.7;
/// Head length of each end of a double-headed arrow.
pub const DOUBLE_HEAD: f64 = 0.25;

const SHAFT_LO: f64 = (1.0 - SHAFT_RATIO) / 2.0;
const SHAFT_HI: f64 = 1.0 - SHAFT_LO;

/// Closed polygon from unit-box fractions.
fn unit_polygon(ctx: &FormulaContext<'_>, fractions: &[(f64, f64)]) -> Vec<PathCommand> {
    let points: Vec<Point> = fractions
        .iter()
        .map(|&(fx, fy)| Point::new(fx * ctx.width, fy * ctx.height))
        .collect();
    let mut b = PathBuilder::with_capacity(points.len() + 1);
    b.polygon(&points);
    b.build()
}

pub fn right_arrow(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    unit_polygon(
        ctx,
        &[
            (0.0, SHAFT_LO),
            (HEAD_START, SHAFT_LO),
            (HEAD_START, 0.0),
            (1.0, 0.5),
            (HEAD_START, 1.0),
            (HEAD_START, SHAFT_HI),
            (0.0, SHAFT_HI),
        ],
    )
}

pub fn left_arrow(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let head = 1.0 - HEAD_START;
    unit_polygon(
        ctx,
        &[
            (1.0, SHAFT_LO),
            (head, SHAFT_LO),
            (head, 0.0),
            (0.0, 0.5),
            (head, 1.0),
            (head, SHAFT_HI),
            (1.0, SHAFT_HI),
        ],
    )
}

pub fn up_arrow(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let head = 1.0 - HEAD_START;
    unit_polygon(
        ctx,
        &[
            (SHAFT_LO, 1.0),
            (SHAFT_LO, head),
            (0.0, head),
            (0.5, 0.0),
            (1.0, head),
            (SHAFT_HI, head),
            (SHAFT_HI, 1.0),
        ],
    )
}

pub fn down_arrow(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    unit_polygon(
        ctx,
        &[
            (SHAFT_LO, 0.0),
            (SHAFT_HI, 0.0),
            (SHAFT_HI, HEAD_START),
            (1.0, HEAD_START),
            (0.5, 1.0),
            (0.0, HEAD_START),
            (SHAFT_LO, HEAD_START),
        ],
    )
}

pub fn left_right_arrow(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let far = 1.0 - DOUBLE_HEAD;
    unit_polygon(
        ctx,
        &[
            (0.0, 0.5),
            (DOUBLE_HEAD, 0.0),
            (DOUBLE_HEAD, SHAFT_LO),
            (far, SHAFT_LO),
            (far, 0.0),
            (1.0, 0.5),
            (far, 1.0),
            (far, SHAFT_HI),
            (DOUBLE_HEAD, SHAFT_HI),
            (DOUBLE_HEAD, 1.0),
        ],
    )
}

pub fn up_down_arrow(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let far = 1.0 - DOUBLE_HEAD;
    unit_polygon(
        ctx,
        &[
            (0.5, 0.0),
            (1.0, DOUBLE_HEAD),
            (SHAFT_HI, DOUBLE_HEAD),
            (SHAFT_HI, far),
            (1.0, far),
            (0.5, 1.0),
            (0.0, far),
            (SHAFT_LO, far),
            (SHAFT_LO, DOUBLE_HEAD),
            (0.0, DOUBLE_HEAD),
        ],
    )
}

pub fn chevron(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let off = (ctx.min_side() * ctx.adj("adj", 0.5, 1.0)).min(w);
    let mut b = PathBuilder::with_capacity(7);
    b.polygon(&[
        Point::new(0.0, 0.0),
        Point::new(w - off, 0.0),
        Point::new(w, h / 2.0),
        Point::new(w - off, h),
        Point::new(0.0, h),
        Point::new(off, h / 2.0),
    ]);
    b.build()
}

pub fn home_plate(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let off = (ctx.min_side() * ctx.adj("adj", 0.5, 1.0)).min(w);
    let mut b = PathBuilder::with_capacity(6);
    b.polygon(&[
        Point::new(0.0, 0.0),
        Point::new(w - off, 0.0),
        Point::new(w, h / 2.0),
        Point::new(w - off, h),
        Point::new(0.0, h),
    ]);
    b.build()
}
