//! Shape geometry resolution.
//!
//! Turns a preset identifier or a literal custom path into a command list in
//! target coordinates plus the viewBox it is expressed against. Resolution
//! never fails: unknown presets become rectangles, bad adjustments fall back
//! to per-formula defaults, and custom paths with a degenerate design size
//! fall back to the request's preset (or a rectangle).
//!
//! # Examples
//!
//! ```
//! use shapepaint::geometry::{BoundingBox, resolve_preset, Adjustments};
//!
//! let path = resolve_preset("rect", BoundingBox::new(100.0, 50.0), &Adjustments::new());
//! assert_eq!(path.to_svg_path(2), "M 0 0 L 100 0 L 100 50 L 0 50 Z");
//! assert_eq!(path.view_box, (100.0, 50.0));
//! ```

pub mod classify;
pub mod custom;
pub mod path;
pub mod presets;
pub mod svg;
pub mod types;

pub use classify::{ShapeKindHint, classify_custom_as_known_shape};
pub use custom::{CustomPath, RawPathCommand, ScaleFactors, resolve_custom};
pub use path::PathBuilder;
pub use types::{Adjustments, BoundingBox, PathCommand, Point, ResolvedPath, ShapeGeometryRequest};

use self::presets::FormulaContext;
use crate::common::log::warn;
use crate::config::{ROUND_RECT_ADJ_CATALOG, ResolverOptions};

/// Resolve a preset shape with the catalog's default `roundRect` ratio.
///
/// Unknown identifiers resolve to the rectangle formula.
pub fn resolve_preset(preset_id: &str, target: BoundingBox, adjustments: &Adjustments) -> ResolvedPath {
    GeometryResolver::default().resolve_preset(preset_id, target, adjustments)
}

/// Stateless geometry resolver carrying its configuration defaults.
#[derive(Debug, Clone, Copy)]
pub struct GeometryResolver {
    /// Default `roundRect` corner ratio when the shape has no `adj`.
    pub round_rect_adj: f64,
    /// Box used when a request has no usable target size.
    pub default_box: BoundingBox,
}

impl Default for GeometryResolver {
    fn default() -> Self {
        Self {
            round_rect_adj: ROUND_RECT_ADJ_CATALOG,
            default_box: BoundingBox::default(),
        }
    }
}

impl GeometryResolver {
    pub fn from_options(options: &ResolverOptions) -> Self {
        Self {
            round_rect_adj: options.round_rect_adj,
            default_box: options.default_box,
        }
    }

    /// Resolve a preset shape.
    pub fn resolve_preset(&self, preset_id: &str, target: BoundingBox, adjustments: &Adjustments) -> ResolvedPath {
        let formula = presets::lookup(preset_id).unwrap_or_else(|| {
            warn!(preset = preset_id, "unknown preset geometry, using rectangle");
            presets::fallback()
        });
        let ctx = FormulaContext::new(target.width, target.height, adjustments).with_round_rect_adj(self.round_rect_adj);
        ResolvedPath::from_commands(formula(&ctx), target)
    }

    /// Resolve a full request.
    ///
    /// Custom commands take precedence over the preset. Extra custom
    /// sub-paths are resolved against their own design sizes and merged in.
    pub fn resolve(&self, request: &ShapeGeometryRequest) -> ResolvedPath {
        let target = self.target_for(request);

        let primary = request
            .custom_commands
            .as_deref()
            .and_then(|cmds| resolve_custom(cmds, request.design_size.unwrap_or((0.0, 0.0)), target));

        let mut path = match primary {
            Some(path) => path,
            None if request.custom_commands.is_some() && request.extra_paths.iter().any(is_usable) => {
                ResolvedPath::from_commands(Vec::new(), target)
            },
            None => {
                let preset_id = request.preset_id.as_deref().unwrap_or("rect");
                self.resolve_preset(preset_id, target, &request.adjustments)
            },
        };

        for extra in &request.extra_paths {
            if let Some(sub) = resolve_custom(&extra.commands, (extra.width, extra.height), target) {
                path.extend(sub);
            }
        }

        if path.commands.is_empty() {
            return self.resolve_preset("rect", target, &request.adjustments);
        }
        path
    }

    fn target_for(&self, request: &ShapeGeometryRequest) -> BoundingBox {
        match request.target {
            Some(b) if !b.is_degenerate() => b,
            Some(b) => BoundingBox::or_fallback(Some(b.width), Some(b.height), self.default_box),
            None => self.default_box,
        }
    }
}

fn is_usable(path: &CustomPath) -> bool {
    ScaleFactors::for_design((path.width, path.height), BoundingBox::default()).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect_commands(w: f64, h: f64) -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(w, 0.0)),
            PathCommand::LineTo(Point::new(w, h)),
            PathCommand::LineTo(Point::new(0.0, h)),
            PathCommand::Close,
        ]
    }

    #[test]
    fn test_round_rect_radius_follows_adjustment() {
        let mut adjustments = Adjustments::new();
        adjustments.insert("adj".into(), 0.2);
        let path = resolve_preset("roundRect", BoundingBox::new(100.0, 50.0), &adjustments);
        let radius = path.commands.iter().find_map(|c| match c {
            PathCommand::ArcTo { radius_x, .. } => Some(*radius_x),
            _ => None,
        });
        assert!((radius.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_rect_default_is_catalog_constant() {
        let path = resolve_preset("roundRect", BoundingBox::new(100.0, 50.0), &Adjustments::new());
        assert_eq!(path.commands[0], PathCommand::MoveTo(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_resolver_round_rect_override() {
        let options = ResolverOptions::new().with_round_rect_adj(crate::config::ROUND_RECT_ADJ_ELEMENT);
        let resolver = GeometryResolver::from_options(&options);
        let path = resolver.resolve_preset("roundRect", BoundingBox::new(100.0, 50.0), &Adjustments::new());
        assert_eq!(path.commands[0], PathCommand::MoveTo(Point::new(25.0, 0.0)));
    }

    #[test]
    fn test_star_has_ten_vertices() {
        let path = resolve_preset("star5", BoundingBox::new(100.0, 80.0), &Adjustments::new());
        assert_eq!(path.vertices().len(), 10);
    }

    #[test]
    fn test_request_without_target_uses_default_box() {
        let request = ShapeGeometryRequest {
            preset_id: Some("rect".into()),
            ..Default::default()
        };
        let path = GeometryResolver::default().resolve(&request);
        assert_eq!(path.commands, rect_commands(200.0, 200.0));
    }

    #[test]
    fn test_degenerate_custom_falls_back_to_preset() {
        let mut request = ShapeGeometryRequest::custom(
            vec![RawPathCommand::MoveTo(Point::new(0.0, 0.0))],
            (0.0, 0.0),
            BoundingBox::new(30.0, 20.0),
        );
        request.preset_id = Some("diamond".into());
        let path = GeometryResolver::default().resolve(&request);
        assert_eq!(path.commands[0], PathCommand::MoveTo(Point::new(15.0, 0.0)));

        request.preset_id = None;
        let path = GeometryResolver::default().resolve(&request);
        assert_eq!(path.commands, rect_commands(30.0, 20.0));
    }

    #[test]
    fn test_extra_paths_are_merged() {
        let mut request = ShapeGeometryRequest::custom(
            vec![
                RawPathCommand::MoveTo(Point::new(0.0, 0.0)),
                RawPathCommand::LineTo(Point::new(10.0, 10.0)),
            ],
            (10.0, 10.0),
            BoundingBox::new(100.0, 100.0),
        );
        request.extra_paths.push(CustomPath::new(
            20.0,
            20.0,
            vec![
                RawPathCommand::MoveTo(Point::new(20.0, 0.0)),
                RawPathCommand::LineTo(Point::new(0.0, 20.0)),
            ],
        ));
        let path = GeometryResolver::default().resolve(&request);
        assert_eq!(path.commands.len(), 4);
        assert_eq!(path.commands[2], PathCommand::MoveTo(Point::new(100.0, 0.0)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_rect_formula(w in 0.0f64..10_000.0, h in 0.0f64..10_000.0) {
            let path = resolve_preset("rect", BoundingBox::new(w, h), &Adjustments::new());
            prop_assert_eq!(path.commands, rect_commands(w, h));
        }

        #[test]
        fn prop_unknown_preset_is_rect(
            id in "[a-z]{3,12}XYZ",
            w in 0.0f64..5_000.0,
            h in 0.0f64..5_000.0,
        ) {
            let target = BoundingBox::new(w, h);
            let unknown = resolve_preset(&id, target, &Adjustments::new());
            let rect = resolve_preset("rect", target, &Adjustments::new());
            prop_assert_eq!(unknown, rect);
        }

        #[test]
        fn prop_view_box_bounds_every_preset(w in 1.0f64..2_000.0, h in 1.0f64..2_000.0) {
            for name in presets::names() {
                let path = resolve_preset(name, BoundingBox::new(w, h), &Adjustments::new());
                let ext = path::PathExtent::of(&path.commands);
                prop_assert!(path.view_box.0 >= ext.max_x && path.view_box.1 >= ext.max_y);
                prop_assert!(path.view_box.0 >= 0.0 && path.view_box.1 >= 0.0);
            }
        }
    }
}
