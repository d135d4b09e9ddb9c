//! Best-effort shape-kind hints for custom geometry.

use serde::Serialize;

use super::custom::{CustomPath, RawPathCommand};

/// Advisory guess at what a custom outline depicts.
///
/// Downstream code may use it to pick a nicer display mode, but must never
/// rely on it: the outline itself is always the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKindHint {
    Ellipse,
    Rectangle,
    Custom,
}

impl ShapeKindHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Rectangle => "rectangle",
            Self::Custom => "custom",
        }
    }
}

/// Allowed distance of the first move from the horizontal center, as a
/// fraction of the design width.
const CENTER_TOLERANCE: f64 = 0.1;

/// Guess the kind of shape a custom path draws.
///
/// - square box, exactly four cubics, first move near the horizontal center: ellipse
/// - one move, three lines, one close: rectangle
/// - any arc on a square box: ellipse
/// - anything else: custom
pub fn classify_custom_as_known_shape(path: &CustomPath) -> ShapeKindHint {
    let square = path.width > 0.0 && path.width == path.height;

    let mut moves = 0usize;
    let mut lines = 0usize;
    let mut cubics = 0usize;
    let mut closes = 0usize;
    let mut has_arc = false;
    let mut first_move_x = None;

    for cmd in &path.commands {
        match cmd {
            RawPathCommand::MoveTo(p) => {
                moves += 1;
                first_move_x.get_or_insert(p.x);
            },
            RawPathCommand::LineTo(_) => lines += 1,
            RawPathCommand::CubicBezTo(_) => cubics += 1,
            RawPathCommand::ArcTo { .. } => has_arc = true,
            RawPathCommand::Close => closes += 1,
            RawPathCommand::QuadBezTo(_) => {},
        }
    }

    if square && cubics == 4 {
        let centered = first_move_x
            .is_some_and(|x| (x - path.width / 2.0).abs() <= path.width * CENTER_TOLERANCE);
        if centered {
            return ShapeKindHint::Ellipse;
        }
    }

    if moves == 1 && lines == 3 && closes == 1 && path.commands.len() == 5 {
        return ShapeKindHint::Rectangle;
    }

    if has_arc && square {
        return ShapeKindHint::Ellipse;
    }

    ShapeKindHint::Custom
}
