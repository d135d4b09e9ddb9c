//! DrawingML readers.
//!
//! Turn `a:*Clr` elements, `p:spPr` shape properties and `p:sp` shapes into
//! the typed requests the resolvers consume. Readers are lenient: unknown
//! elements are skipped and unparsable values drop the command or modifier
//! that carried them.

use smallvec::SmallVec;

use super::node::XmlNode;
use crate::batch::ShapeRequest;
use crate::color::{ColorModifier, ColorSpec, PaintSpec};
use crate::common::log::{debug, warn};
use crate::common::num::parse_number;
use crate::common::unit::{angle_to_degrees, emu_to_px_96, percentage_to_ratio};
use crate::common::RGBColor;
use crate::geometry::{Adjustments, BoundingBox, CustomPath, Point, RawPathCommand, ShapeGeometryRequest};
use crate::theme::SchemeKey;

/// `scrgbClr` channels are in 1000ths of a percent.
const SCRGB_UNITS_PER_PERCENT: f64 = 1_000.0;

/// Read a color element with its modifier children.
///
/// Supports `srgbClr`, `scrgbClr`, `hslClr`, `prstClr`, `sysClr` and
/// `schemeClr` (with `phClr` as the placeholder). Returns `None` for any
/// other element or when the color value is unusable.
///
/// # Examples
///
/// ```
/// use shapepaint::color::{ColorModifier, ColorSpec};
/// use shapepaint::ooxml::{XmlNode, drawingml::color_from_node};
/// use shapepaint::theme::SchemeKey;
///
/// let node = XmlNode::parse(br#"<a:schemeClr val="accent1"><a:lumMod val="75000"/></a:schemeClr>"#).unwrap();
/// let paint = color_from_node(&node).unwrap();
/// assert_eq!(paint.color, ColorSpec::Scheme(SchemeKey::Accent1));
/// assert_eq!(paint.modifiers[0], ColorModifier::LumMod(0.75));
/// ```
pub fn color_from_node(node: &XmlNode) -> Option<PaintSpec> {
    let color = match node.name.as_str() {
        "srgbClr" => ColorSpec::Rgb(node.attr("val").and_then(RGBColor::from_hex)?),
        "scrgbClr" => ColorSpec::PercentRgb {
            r: node.attr_f64("r")? / SCRGB_UNITS_PER_PERCENT,
            g: node.attr_f64("g")? / SCRGB_UNITS_PER_PERCENT,
            b: node.attr_f64("b")? / SCRGB_UNITS_PER_PERCENT,
        },
        "hslClr" => ColorSpec::Hsl {
            hue: node.attr_f64("hue")?,
            sat: percentage_to_ratio(node.attr_f64("sat")?),
            lum: percentage_to_ratio(node.attr_f64("lum")?),
        },
        "prstClr" => ColorSpec::Preset(node.attr("val")?.to_string()),
        "sysClr" => ColorSpec::System {
            name: node.attr("val")?.to_string(),
            last_known: node.attr("lastClr").and_then(RGBColor::from_hex),
        },
        "schemeClr" => match node.attr("val")? {
            "phClr" => ColorSpec::Placeholder,
            val => match SchemeKey::parse(val) {
                Some(key) => ColorSpec::Scheme(key),
                None => {
                    warn!(val, "unknown scheme color");
                    return None;
                },
            },
        },
        _ => return None,
    };

    let modifiers = node.children.iter().filter_map(modifier_from_node).collect();
    Some(PaintSpec { color, modifiers })
}

fn modifier_from_node(node: &XmlNode) -> Option<ColorModifier> {
    let ctor: fn(f64) -> ColorModifier = match node.name.as_str() {
        "alpha" => ColorModifier::Alpha,
        "hueMod" => ColorModifier::HueMod,
        "lumMod" => ColorModifier::LumMod,
        "lumOff" => ColorModifier::LumOff,
        "satMod" => ColorModifier::SatMod,
        "shade" => ColorModifier::Shade,
        "tint" => ColorModifier::Tint,
        _ => {
            debug!(modifier = node.name.as_str(), "ignoring unsupported color modifier");
            return None;
        },
    };
    node.attr_f64("val").map(|v| ctor(percentage_to_ratio(v)))
}

/// First color child of `parent`.
fn first_color(parent: &XmlNode) -> Option<PaintSpec> {
    parent.children.iter().find_map(color_from_node)
}

/// Paint of an `a:solidFill` element.
pub fn solid_fill_color(fill: &XmlNode) -> Option<PaintSpec> {
    first_color(fill)
}

/// Fill paint declared directly in `spPr`. `None` for `noFill`, gradient,
/// picture and pattern fills, or when no fill is declared.
pub fn fill_paint(sp_pr: &XmlNode) -> Option<PaintSpec> {
    sp_pr.child("solidFill").and_then(solid_fill_color)
}

/// Outline paint from `spPr/a:ln/a:solidFill`.
pub fn line_paint(sp_pr: &XmlNode) -> Option<PaintSpec> {
    sp_pr
        .child("ln")
        .and_then(|ln| ln.child("solidFill"))
        .and_then(solid_fill_color)
}

/// Shadow paint from `spPr/a:effectLst/a:outerShdw`.
pub fn shadow_paint(sp_pr: &XmlNode) -> Option<PaintSpec> {
    sp_pr
        .child("effectLst")
        .and_then(|fx| fx.child("outerShdw"))
        .and_then(first_color)
}

/// Shape size in 96-dpi pixels from `spPr/a:xfrm/a:ext`.
pub fn bounding_box_from_xfrm(sp_pr: &XmlNode) -> Option<BoundingBox> {
    let ext = sp_pr.child("xfrm")?.child("ext")?;
    let cx = ext.attr("cx").and_then(parse_emu)?;
    let cy = ext.attr("cy").and_then(parse_emu)?;
    Some(BoundingBox::new(emu_to_px_96(cx), emu_to_px_96(cy)))
}

fn parse_emu(value: &str) -> Option<i64> {
    atoi_simd::parse::<i64, false, false>(value.trim().as_bytes()).ok()
}

/// Build a geometry request from `spPr`.
///
/// `prstGeom` supplies the preset and its `avLst` adjustments; `custGeom`
/// supplies literal paths, the first driving resolution and the rest merged
/// in. A path without `w`/`h` is authored in the shape's own EMU space.
pub fn geometry_request_from_sppr(sp_pr: &XmlNode) -> ShapeGeometryRequest {
    let mut request = ShapeGeometryRequest {
        target: bounding_box_from_xfrm(sp_pr),
        ..Default::default()
    };

    if let Some(prst) = sp_pr.child("prstGeom") {
        request.preset_id = prst.attr("prst").map(str::to_string);
        if let Some(av_lst) = prst.child("avLst") {
            request.adjustments = adjustments_from_av_lst(av_lst);
        }
    }

    if let Some(path_lst) = sp_pr.child("custGeom").and_then(|g| g.child("pathLst")) {
        let shape_size = shape_size_emu(sp_pr);
        let mut paths = path_lst
            .children_named("path")
            .map(|p| custom_path_from_node(p, shape_size));
        if let Some(first) = paths.next() {
            request.design_size = Some((first.width, first.height));
            request.custom_commands = Some(first.commands);
        }
        request.extra_paths = paths.collect();
    }

    request
}

/// Read `a:gd name="adj" fmla="val 50000"` guides as ratios.
pub fn adjustments_from_av_lst(av_lst: &XmlNode) -> Adjustments {
    av_lst
        .children_named("gd")
        .filter_map(|gd| {
            let name = gd.attr("name")?;
            let fmla = gd.attr("fmla")?;
            match fmla.trim().strip_prefix("val").and_then(parse_number) {
                Some(raw) => Some((name.to_string(), percentage_to_ratio(raw))),
                None => {
                    debug!(guide = name, fmla, "ignoring non-constant adjustment guide");
                    None
                },
            }
        })
        .collect()
}

fn shape_size_emu(sp_pr: &XmlNode) -> (f64, f64) {
    let ext = sp_pr.child("xfrm").and_then(|x| x.child("ext"));
    let dim = |name: &str| ext.and_then(|e| e.attr_f64(name)).unwrap_or(0.0);
    (dim("cx"), dim("cy"))
}

fn custom_path_from_node(path: &XmlNode, shape_size: (f64, f64)) -> CustomPath {
    let width = path.attr_f64("w").unwrap_or(shape_size.0);
    let height = path.attr_f64("h").unwrap_or(shape_size.1);
    let commands = path.children.iter().filter_map(raw_command_from_node).collect();
    CustomPath::new(width, height, commands)
}

fn raw_command_from_node(node: &XmlNode) -> Option<RawPathCommand> {
    let cmd = match node.name.as_str() {
        "moveTo" => RawPathCommand::MoveTo(first_point(node)?),
        "lnTo" => RawPathCommand::LineTo(first_point(node)?),
        "cubicBezTo" => RawPathCommand::CubicBezTo(points(node)),
        "quadBezTo" => RawPathCommand::QuadBezTo(points(node).into_iter().collect()),
        "arcTo" => RawPathCommand::ArcTo {
            width_radius: node.attr_f64("wR")?,
            height_radius: node.attr_f64("hR")?,
            start_angle: angle_to_degrees(node.attr_f64("stAng")?),
            sweep_angle: angle_to_degrees(node.attr_f64("swAng")?),
        },
        "close" => RawPathCommand::Close,
        _ => {
            debug!(command = node.name.as_str(), "ignoring unsupported path command");
            return None;
        },
    };
    Some(cmd)
}

fn point_from_node(pt: &XmlNode) -> Option<Point> {
    Some(Point::new(pt.attr_f64("x")?, pt.attr_f64("y")?))
}

fn first_point(node: &XmlNode) -> Option<Point> {
    node.child("pt").and_then(point_from_node)
}

fn points(node: &XmlNode) -> SmallVec<[Point; 3]> {
    node.children_named("pt").filter_map(point_from_node).collect()
}

/// Build a full shape request from a `p:sp` element.
///
/// Paints declared in `spPr` win; otherwise the `p:style` references
/// (`fillRef`, `lnRef`) supply the color, unless their `idx` is `0`. The
/// shadow only comes from `spPr/a:effectLst`.
pub fn shape_request_from_sp(sp: &XmlNode) -> ShapeRequest {
    let sp_pr = sp.child("spPr");
    let style = sp.child("style");
    let style_color = |name: &str| {
        style
            .and_then(|s| s.child(name))
            .filter(|r| r.attr("idx").is_none_or(|idx| idx.trim() != "0"))
            .and_then(first_color)
    };

    let no_fill = sp_pr.is_some_and(|p| p.child("noFill").is_some());
    let no_line = sp_pr
        .and_then(|p| p.child("ln"))
        .is_some_and(|ln| ln.child("noFill").is_some());

    ShapeRequest {
        geometry: sp_pr.map(geometry_request_from_sppr).unwrap_or_default(),
        fill: if no_fill {
            None
        } else {
            sp_pr.and_then(fill_paint).or_else(|| style_color("fillRef"))
        },
        stroke: if no_line {
            None
        } else {
            sp_pr.and_then(line_paint).or_else(|| style_color("lnRef"))
        },
        shadow: sp_pr.and_then(shadow_paint),
        placeholder: None,
    }
}
