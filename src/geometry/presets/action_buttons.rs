//! Action buttons: a frame rectangle plus an icon drawn as extra sub-paths.

use super::FormulaContext;
use crate::geometry::path::PathBuilder;
use crate::geometry::types::{PathCommand, Point};

/// Icon half-extent as a fraction of the shorter side.
const ICON_RATIO: f64 = 0.375;

/// Icon frame centered in the button.
struct Icon {
    cx: f64,
    cy: f64,
    g: f64,
}

impl Icon {
    fn new(ctx: &FormulaContext<'_>) -> Self {
        Self {
            cx: ctx.width / 2.0,
            cy: ctx.height / 2.0,
            g: ctx.min_side() * ICON_RATIO,
        }
    }

    /// Point at `(fx, fy)` in icon units, where `±1` reaches the icon edge.
    #[inline]
    fn at(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.cx + fx * self.g, self.cy + fy * self.g)
    }

    fn polygon(&self, b: &mut PathBuilder, fractions: &[(f64, f64)]) {
        let points: Vec<Point> = fractions.iter().map(|&(fx, fy)| self.at(fx, fy)).collect();
        b.polygon(&points);
    }
}

fn frame(ctx: &FormulaContext<'_>) -> PathBuilder {
    let mut b = PathBuilder::with_capacity(16);
    b.rect(0.0, 0.0, ctx.width, ctx.height);
    b
}

pub fn blank(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    frame(ctx).build()
}

pub fn home(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let mut b = frame(ctx);
    icon.polygon(
        &mut b,
        &[
            (0.0, -1.0),
            (1.0, 0.0),
            (0.6, 0.0),
            (0.6, 1.0),
            (-0.6, 1.0),
            (-0.6, 0.0),
            (-1.0, 0.0),
        ],
    );
    b.build()
}

pub fn help(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let g = icon.g;
    let mut b = frame(ctx);
    let hook = icon.at(-0.5, -0.4);
    let stem = icon.at(0.0, 0.45);
    b.move_to(hook.x, hook.y)
        .arc_to(g * 0.5, g * 0.5, 180.0, 270.0)
        .line_to(stem.x, stem.y);
    let dot = icon.at(0.0, 0.75);
    b.ellipse(dot.x, dot.y, g * 0.12, g * 0.12);
    b.build()
}

pub fn information(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let g = icon.g;
    let mut b = frame(ctx);
    b.ellipse(icon.cx, icon.cy, g, g);
    let dot = icon.at(0.0, -0.5);
    b.ellipse(dot.x, dot.y, g * 0.12, g * 0.12);
    let stem = icon.at(-0.1, -0.25);
    b.rect(stem.x, stem.y, g * 0.2, g * 0.9);
    b.build()
}

pub fn back_previous(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let mut b = frame(ctx);
    icon.polygon(&mut b, &[(-1.0, 0.0), (1.0, -1.0), (1.0, 1.0)]);
    b.build()
}

pub fn forward_next(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let mut b = frame(ctx);
    icon.polygon(&mut b, &[(1.0, 0.0), (-1.0, 1.0), (-1.0, -1.0)]);
    b.build()
}

pub fn beginning(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let mut b = frame(ctx);
    icon.polygon(&mut b, &[(-1.0, -1.0), (-0.75, -1.0), (-0.75, 1.0), (-1.0, 1.0)]);
    icon.polygon(&mut b, &[(-0.75, 0.0), (1.0, -1.0), (1.0, 1.0)]);
    b.build()
}

pub fn end(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let mut b = frame(ctx);
    icon.polygon(&mut b, &[(0.75, 0.0), (-1.0, 1.0), (-1.0, -1.0)]);
    icon.polygon(&mut b, &[(0.75, -1.0), (1.0, -1.0), (1.0, 1.0), (0.75, 1.0)]);
    b.build()
}

pub fn return_button(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let mut b = frame(ctx);
    icon.polygon(
        &mut b,
        &[
            (0.5, -1.0),
            (1.0, -1.0),
            (1.0, 0.8),
            (-0.25, 0.8),
            (-0.25, 1.0),
            (-1.0, 0.65),
            (-0.25, 0.3),
            (-0.25, 0.5),
            (0.5, 0.5),
        ],
    );
    b.build()
}

pub fn document(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let icon = Icon::new(ctx);
    let mut b = frame(ctx);
    icon.polygon(
        &mut b,
        &[
            (-0.75, -1.0),
            (0.35, -1.0),
            (0.75, -0.6),
            (0.75, 1.0),
            (-0.75, 1.0),
        ],
    );
    let fold = [icon.at(0.35, -1.0), icon.at(0.35, -0.6), icon.at(0.75, -0.6)];
    b.polyline(&fold);
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::path::PathExtent;
    use crate::geometry::types::Adjustments;

    #[test]
    fn test_blank_is_frame_only() {
        let adjustments = Adjustments::new();
        let ctx = FormulaContext::new(80.0, 40.0, &adjustments);
        assert_eq!(blank(&ctx).len(), 5);
    }

    #[test]
    fn test_icons_stay_inside_frame() {
        let adjustments = Adjustments::new();
        let ctx = FormulaContext::new(120.0, 60.0, &adjustments);
        for formula in [home, help, information, back_previous, forward_next, beginning, end, return_button, document] {
            let ext = PathExtent::of(&formula(&ctx));
            assert!(ext.min_x >= -1e-9 && ext.max_x <= 120.0 + 1e-9);
            assert!(ext.min_y >= -1e-9 && ext.max_y <= 60.0 + 1e-9);
        }
    }

    #[test]
    fn test_forward_points_right() {
        let adjustments = Adjustments::new();
        let ctx = FormulaContext::new(100.0, 100.0, &adjustments);
        let cmds = forward_next(&ctx);
        assert_eq!(cmds[5], PathCommand::MoveTo(Point::new(87.5, 50.0)));
    }
}
