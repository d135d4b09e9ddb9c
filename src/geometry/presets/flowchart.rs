//! Flow-chart symbols.
//!
//! `flowChartProcess`, `flowChartDecision` and `flowChartConnector` reuse the
//! basic rectangle, diamond and ellipse formulas and are registered directly.

use std::f64::consts::FRAC_1_SQRT_2;

use super::FormulaContext;
use crate::geometry::path::PathBuilder;
use crate::geometry::types::{PathCommand, Point};

fn polygon(points: &[Point]) -> Vec<PathCommand> {
    let mut b = PathBuilder::with_capacity(points.len() + 1);
    b.polygon(points);
    b.build()
}

pub fn alternate_process(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let r = ctx.min_side() / 6.0;
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

pub fn input_output(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[
        Point::new(w / 5.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w * 4.0 / 5.0, h),
        Point::new(0.0, h),
    ])
}

pub fn predefined_process(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let mut b = PathBuilder::with_capacity(9);
    b.rect(0.0, 0.0, w, h)
        .move_to(w / 8.0, 0.0)
        .line_to(w / 8.0, h)
        .move_to(w * 7.0 / 8.0, 0.0)
        .line_to(w * 7.0 / 8.0, h);
    b.build()
}

pub fn internal_storage(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let mut b = PathBuilder::with_capacity(9);
    b.rect(0.0, 0.0, w, h)
        .move_to(w / 8.0, 0.0)
        .line_to(w / 8.0, h)
        .move_to(0.0, h / 8.0)
        .line_to(w, h / 8.0);
    b.build()
}

pub fn document(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let wave = h * 0.85;
    let mut b = PathBuilder::with_capacity(6);
    b.move_to(0.0, 0.0)
        .line_to(w, 0.0)
        .line_to(w, wave)
        .cubic_to(w * 0.85, h * 0.7, w * 0.65, h * 0.7, w * 0.5, wave)
        .cubic_to(w * 0.35, h, w * 0.15, h, 0.0, wave)
        .close();
    b.build()
}

pub fn terminator(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let rx = w * 0.16;
    let ry = h / 2.0;
    let mut b = PathBuilder::with_capacity(6);
    b.move_to(rx, 0.0)
        .line_to(w - rx, 0.0)
        .arc_to(rx, ry, 270.0, 180.0)
        .line_to(rx, h)
        .arc_to(rx, ry, 90.0, 180.0)
        .close();
    b.build()
}

pub fn preparation(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[
        Point::new(0.0, h / 2.0),
        Point::new(w / 5.0, 0.0),
        Point::new(w * 4.0 / 5.0, 0.0),
        Point::new(w, h / 2.0),
        Point::new(w * 4.0 / 5.0, h),
        Point::new(w / 5.0, h),
    ])
}

pub fn manual_input(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[
        Point::new(0.0, h / 5.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ])
}

pub fn manual_operation(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w * 4.0 / 5.0, h),
        Point::new(w / 5.0, h),
    ])
}

pub fn offpage_connector(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h * 0.8),
        Point::new(w / 2.0, h),
        Point::new(0.0, h * 0.8),
    ])
}

pub fn punched_card(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[
        Point::new(w / 5.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
        Point::new(0.0, h / 5.0),
    ])
}

pub fn merge(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[Point::new(0.0, 0.0), Point::new(w, 0.0), Point::new(w / 2.0, h)])
}

pub fn extract(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[Point::new(w / 2.0, 0.0), Point::new(w, h), Point::new(0.0, h)])
}

pub fn delay(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let mut b = PathBuilder::with_capacity(5);
    b.move_to(0.0, 0.0)
        .line_to(w / 2.0, 0.0)
        .arc_to(w / 2.0, h / 2.0, 270.0, 180.0)
        .line_to(0.0, h)
        .close();
    b.build()
}

pub fn sort(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let mut b = PathBuilder::with_capacity(7);
    b.polygon(&[
        Point::new(w / 2.0, 0.0),
        Point::new(w, h / 2.0),
        Point::new(w / 2.0, h),
        Point::new(0.0, h / 2.0),
    ])
    .move_to(0.0, h / 2.0)
    .line_to(w, h / 2.0);
    b.build()
}

pub fn collate(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    polygon(&[
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w / 2.0, h / 2.0),
        Point::new(w, h),
        Point::new(0.0, h),
        Point::new(w / 2.0, h / 2.0),
    ])
}

pub fn or(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (w, h) = (ctx.width, ctx.height);
    let (rx, ry) = (w / 2.0, h / 2.0);
    let mut b = PathBuilder::with_capacity(10);
    b.ellipse(rx, ry, rx, ry)
        .move_to(rx, 0.0)
        .line_to(rx, h)
        .move_to(0.0, ry)
        .line_to(w, ry);
    b.build()
}

pub fn summing_junction(ctx: &FormulaContext<'_>) -> Vec<PathCommand> {
    let (rx, ry) = (ctx.width / 2.0, ctx.height / 2.0);
    let (dx, dy) = (rx * FRAC_1_SQRT_2, ry * FRAC_1_SQRT_2);
    let mut b = PathBuilder::with_capacity(10);
    b.ellipse(rx, ry, rx, ry)
        .move_to(rx - dx, ry - dy)
        .line_to(rx + dx, ry + dy)
        .move_to(rx + dx, ry - dy)
        .line_to(rx - dx, ry + dy);
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::path::PathExtent;
    use crate::geometry::types::Adjustments;

    #[test]
    fn test_delay_arc_reaches_right_edge() {
        let adjustments = Adjustments::new();
        let ctx = FormulaContext::new(100.0, 60.0, &adjustments);
        let ext = PathExtent::of(&delay(&ctx));
        assert!((ext.max_x - 100.0).abs() < 1e-9);
        assert!((ext.max_y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_terminator_stays_in_box() {
        let adjustments = Adjustments::new();
        let ctx = FormulaContext::new(200.0, 50.0, &adjustments);
        let ext = PathExtent::of(&terminator(&ctx));
        assert!(ext.min_x >= -1e-9 && ext.max_x <= 200.0 + 1e-9);
        assert!(ext.max_y <= 50.0 + 1e-9);
    }

    #[test]
    fn test_or_has_two_strokes() {
        let adjustments = Adjustments::new();
        let ctx = FormulaContext::new(40.0, 40.0, &adjustments);
        let moves = or(&ctx)
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count();
        assert_eq!(moves, 3);
    }
}
