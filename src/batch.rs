//! Batch resolution of many shapes against one theme.
//!
//! Shapes are independent, so a batch fans out across the rayon pool once
//! it is large enough. The palette is only ever read and is shared by
//! reference. Results keep the input order, and a color failure stays with
//! the shape that caused it.

use rayon::prelude::*;
use serde::Serialize;

use crate::color::{ColorResolver, PaintSpec};
use crate::common::{ResolvedColor, Result};
use crate::config::ResolverOptions;
use crate::geometry::{
    CustomPath, GeometryResolver, ResolvedPath, ShapeGeometryRequest, ShapeKindHint, classify_custom_as_known_shape,
};
use crate::theme::ThemePalette;

/// Everything needed to resolve one shape.
#[derive(Debug, Clone, Default)]
pub struct ShapeRequest {
    pub geometry: ShapeGeometryRequest,
    pub fill: Option<PaintSpec>,
    pub stroke: Option<PaintSpec>,
    pub shadow: Option<PaintSpec>,
    /// The style context's color for `phClr` references.
    pub placeholder: Option<ResolvedColor>,
}

impl ShapeRequest {
    pub fn new(geometry: ShapeGeometryRequest) -> Self {
        Self {
            geometry,
            ..Default::default()
        }
    }

    pub fn with_fill(mut self, fill: PaintSpec) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: PaintSpec) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_shadow(mut self, shadow: PaintSpec) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_placeholder(mut self, placeholder: ResolvedColor) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Resolved outline and paints of one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeOutput {
    #[serde(skip)]
    pub geometry: ResolvedPath,
    /// SVG path data at the configured precision
    pub path: String,
    pub view_box: [f64; 2],
    /// Advisory shape kind, only for custom geometry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShapeKindHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<ResolvedColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<ResolvedColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ResolvedColor>,
}

/// A shape's outline with each paint resolved on its own.
///
/// Geometry never fails, so it is always present. A paint that cannot be
/// resolved keeps its error here and the caller decides what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeResolution {
    pub geometry: ResolvedPath,
    pub path: String,
    pub kind: Option<ShapeKindHint>,
    pub fill: Option<Result<ResolvedColor>>,
    pub stroke: Option<Result<ResolvedColor>>,
    pub shadow: Option<Result<ResolvedColor>>,
}

impl ShapeResolution {
    /// Fail on the first paint error, in fill, stroke, shadow order.
    pub fn into_output(self) -> Result<ShapeOutput> {
        Ok(ShapeOutput {
            view_box: [self.geometry.view_box.0, self.geometry.view_box.1],
            fill: self.fill.transpose()?,
            stroke: self.stroke.transpose()?,
            shadow: self.shadow.transpose()?,
            geometry: self.geometry,
            path: self.path,
            kind: self.kind,
        })
    }

    /// Substitute `fallback` for every paint that failed to resolve.
    pub fn into_output_or(self, fallback: ResolvedColor) -> ShapeOutput {
        let or = |paint: Option<Result<ResolvedColor>>| paint.map(|p| p.unwrap_or(fallback));
        ShapeOutput {
            view_box: [self.geometry.view_box.0, self.geometry.view_box.1],
            fill: or(self.fill),
            stroke: or(self.stroke),
            shadow: or(self.shadow),
            geometry: self.geometry,
            path: self.path,
            kind: self.kind,
        }
    }

    /// Whether any paint failed.
    pub fn has_errors(&self) -> bool {
        [&self.fill, &self.stroke, &self.shadow]
            .into_iter()
            .any(|p| matches!(p, Some(Err(_))))
    }
}

/// Resolve a shape's outline and each of its paints independently.
pub fn resolve_shape_paints(
    request: &ShapeRequest,
    palette: Option<&ThemePalette>,
    options: &ResolverOptions,
) -> ShapeResolution {
    let geometry = GeometryResolver::from_options(options).resolve(&request.geometry);
    let colors = ColorResolver::from_options(palette, options).with_placeholder(request.placeholder);
    let paint = |spec: &Option<PaintSpec>| spec.as_ref().map(|p| colors.resolve_paint(p));

    ShapeResolution {
        path: geometry.to_svg_path(options.path_precision),
        kind: custom_kind(&request.geometry),
        fill: paint(&request.fill),
        stroke: paint(&request.stroke),
        shadow: paint(&request.shadow),
        geometry,
    }
}

/// Resolve a single shape.
///
/// # Errors
///
/// Propagates the first color failure among fill, stroke, and shadow. Use
/// [`resolve_shape_paints`] to keep the outline when a paint fails.
pub fn resolve_shape(
    request: &ShapeRequest,
    palette: Option<&ThemePalette>,
    options: &ResolverOptions,
) -> Result<ShapeOutput> {
    resolve_shape_paints(request, palette, options).into_output()
}

fn custom_kind(request: &ShapeGeometryRequest) -> Option<ShapeKindHint> {
    let commands = request.custom_commands.as_ref()?;
    let (width, height) = request.design_size?;
    let path = CustomPath::new(width, height, commands.clone());
    Some(classify_custom_as_known_shape(&path))
}

/// Resolve many shapes, in parallel when the batch is large enough.
///
/// The output has one entry per request, in request order.
pub fn resolve_shapes(
    requests: &[ShapeRequest],
    palette: Option<&ThemePalette>,
    options: &ResolverOptions,
) -> Vec<Result<ShapeOutput>> {
    if options.use_parallel && requests.len() >= options.parallel_threshold {
        requests
            .par_iter()
            .map(|request| resolve_shape(request, palette, options))
            .collect()
    } else {
        requests
            .iter()
            .map(|request| resolve_shape(request, palette, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorModifier, ColorSpec};
    use crate::common::Error;
    use crate::geometry::{BoundingBox, Point, RawPathCommand};
    use crate::theme::SchemeKey;

    fn accent_fill() -> PaintSpec {
        PaintSpec::new(ColorSpec::Scheme(SchemeKey::Accent1))
    }

    fn requests(n: usize) -> Vec<ShapeRequest> {
        (0..n)
            .map(|i| {
                let size = 10.0 + i as f64;
                ShapeRequest::new(ShapeGeometryRequest::preset("rect", BoundingBox::new(size, size)))
                    .with_fill(accent_fill())
            })
            .collect()
    }

    #[test]
    fn test_single_shape() {
        let palette = ThemePalette::from_entries([("accent1", "4472C4")]);
        let request = ShapeRequest::new(ShapeGeometryRequest::preset("rect", BoundingBox::new(10.0, 5.0)))
            .with_fill(accent_fill())
            .with_stroke(accent_fill().with_modifier(ColorModifier::Shade(0.5)));
        let out = resolve_shape(&request, Some(&palette), &ResolverOptions::default()).unwrap();
        assert_eq!(out.path, "M 0 0 L 10 0 L 10 5 L 0 5 Z");
        assert_eq!(out.fill, Some(ResolvedColor::opaque(68, 114, 196)));
        assert_eq!(out.stroke, Some(ResolvedColor::opaque(34, 57, 98)));
        assert_eq!(out.shadow, None);

        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["viewBox"][0], 10.0);
        assert_eq!(json["fill"], "rgba(68,114,196,1)");
        assert!(json.get("shadow").is_none());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let palette = ThemePalette::from_entries([("accent1", "4472C4")]);
        let reqs = requests(32);
        let parallel = resolve_shapes(&reqs, Some(&palette), &ResolverOptions::new().with_parallel_threshold(4));
        let sequential = resolve_shapes(&reqs, Some(&palette), &ResolverOptions::new().with_parallel(false));
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.len(), 32);
        assert_eq!(parallel[31].as_ref().unwrap().view_box, [41.0, 41.0]);
    }

    #[test]
    fn test_errors_stay_per_shape() {
        let mut reqs = requests(3);
        reqs[1].fill = Some(PaintSpec::new(ColorSpec::rgb_hex("00FF00").unwrap()));
        let results = resolve_shapes(&reqs, None, &ResolverOptions::default());
        assert!(matches!(results[0], Err(Error::MissingTheme { .. })));
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(Error::MissingTheme { .. })));
    }

    #[test]
    fn test_failed_paint_keeps_geometry() {
        let request = ShapeRequest::new(ShapeGeometryRequest::preset("rect", BoundingBox::new(10.0, 5.0)))
            .with_fill(accent_fill())
            .with_stroke(PaintSpec::new(ColorSpec::rgb_hex("00FF00").unwrap()));
        let resolution = resolve_shape_paints(&request, None, &ResolverOptions::default());
        assert!(resolution.has_errors());
        assert_eq!(resolution.path, "M 0 0 L 10 0 L 10 5 L 0 5 Z");
        assert!(matches!(resolution.fill, Some(Err(Error::MissingTheme { .. }))));
        assert_eq!(resolution.stroke, Some(Ok(ResolvedColor::opaque(0, 255, 0))));

        let out = resolution.clone().into_output_or(ResolvedColor::opaque(0, 0, 0));
        assert_eq!(out.fill, Some(ResolvedColor::opaque(0, 0, 0)));
        assert_eq!(out.stroke, Some(ResolvedColor::opaque(0, 255, 0)));
        assert_eq!(out.view_box, [10.0, 5.0]);
        assert!(resolution.into_output().is_err());
    }

    #[test]
    fn test_custom_geometry_carries_kind() {
        let square = ShapeGeometryRequest::custom(
            vec![
                RawPathCommand::MoveTo(Point::new(0.0, 0.0)),
                RawPathCommand::LineTo(Point::new(10.0, 0.0)),
                RawPathCommand::LineTo(Point::new(10.0, 10.0)),
                RawPathCommand::LineTo(Point::new(0.0, 10.0)),
                RawPathCommand::Close,
            ],
            (10.0, 10.0),
            BoundingBox::new(20.0, 20.0),
        );
        let out = resolve_shape(&ShapeRequest::new(square), None, &ResolverOptions::default()).unwrap();
        assert_eq!(out.kind, Some(ShapeKindHint::Rectangle));
        assert_eq!(serde_json::to_value(&out).unwrap()["kind"], "rectangle");

        let preset = ShapeRequest::new(ShapeGeometryRequest::preset("rect", BoundingBox::new(4.0, 4.0)));
        let out = resolve_shape(&preset, None, &ResolverOptions::default()).unwrap();
        assert_eq!(out.kind, None);
        assert!(serde_json::to_value(&out).unwrap().get("kind").is_none());
    }

    #[test]
    fn test_placeholder_is_per_shape() {
        let request = ShapeRequest::new(ShapeGeometryRequest::preset("ellipse", BoundingBox::new(4.0, 4.0)))
            .with_fill(PaintSpec::new(ColorSpec::Placeholder))
            .with_placeholder(ResolvedColor::opaque(9, 9, 9));
        let out = resolve_shape(&request, None, &ResolverOptions::default()).unwrap();
        assert_eq!(out.fill, Some(ResolvedColor::opaque(9, 9, 9)));
    }
}
