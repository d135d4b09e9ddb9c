//! Preset shape catalog.
//!
//! Each preset is a plain function from a [`FormulaContext`] to a command
//! list, registered under its DrawingML `prst` name in a static perfect-hash
//! map. Formulas never fail: adjustments are validated here and replaced by
//! per-formula defaults when absent or out of range.

mod action_buttons;
mod arrows;
mod basic;
mod flowchart;

use phf::phf_map;

use super::types::{Adjustments, PathCommand};
use crate::common::log::debug;
use crate::config::ROUND_RECT_ADJ_CATALOG;

/// Inputs available to a preset formula.
#[derive(Debug, Clone, Copy)]
pub struct FormulaContext<'a> {
    pub width: f64,
    pub height: f64,
    pub adjustments: &'a Adjustments,
    /// Default corner ratio for `roundRect` when no `adj` is given.
    pub round_rect_adj: f64,
}

impl<'a> FormulaContext<'a> {
    pub fn new(width: f64, height: f64, adjustments: &'a Adjustments) -> Self {
        Self {
            width,
            height,
            adjustments,
            round_rect_adj: ROUND_RECT_ADJ_CATALOG,
        }
    }

    pub fn with_round_rect_adj(mut self, ratio: f64) -> Self {
        self.round_rect_adj = ratio;
        self
    }

    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Read adjustment `name` as a ratio in `[0, max]`.
    ///
    /// Missing, non-finite, or out-of-range values yield `default`.
    pub fn adj(&self, name: &str, default: f64, max: f64) -> f64 {
        match self.adjustments.get(name) {
            None => default,
            Some(&v) if v.is_finite() && (0.0..=max).contains(&v) => v,
            Some(_) => {
                debug!(adjustment = name, default, "invalid adjustment value, using default");
                default
            },
        }
    }
}

/// A preset formula.
pub type PresetFormula = fn(&FormulaContext<'_>) -> Vec<PathCommand>;

static PRESETS: phf::Map<&'static str, PresetFormula> = phf_map! {
    // Basic shapes
    "rect" => basic::rect,
    "ellipse" => basic::ellipse,
    "circle" => basic::ellipse,
    "oval" => basic::ellipse,
    "triangle" => basic::triangle,
    "rtTriangle" => basic::right_triangle,
    "diamond" => basic::diamond,
    "parallelogram" => basic::parallelogram,
    "trapezoid" => basic::trapezoid,
    "pentagon" => basic::pentagon,
    "hexagon" => basic::hexagon,
    "heptagon" => basic::heptagon,
    "octagon" => basic::octagon,
    "decagon" => basic::decagon,
    "star" => basic::star,
    "star4" => basic::star,
    "star5" => basic::star,
    "star6" => basic::star,
    "roundRect" => basic::round_rect,
    "plus" => basic::plus,
    "line" => basic::line,
    "straightConnector1" => basic::line,

    // Block arrows
    "rightArrow" => arrows::right_arrow,
    "leftArrow" => arrows::left_arrow,
    "upArrow" => arrows::up_arrow,
    "downArrow" => arrows::down_arrow,
    "leftRightArrow" => arrows::left_right_arrow,
    "upDownArrow" => arrows::up_down_arrow,
    "chevron" => arrows::chevron,
    "homePlate" => arrows::home_plate,

    // Flow chart
    "flowChartProcess" => basic::rect,
    "flowChartAlternateProcess" => flowchart::alternate_process,
    "flowChartDecision" => basic::diamond,
    "flowChartInputOutput" => flowchart::input_output,
    "flowChartPredefinedProcess" => flowchart::predefined_process,
    "flowChartInternalStorage" => flowchart::internal_storage,
    "flowChartDocument" => flowchart::document,
    "flowChartTerminator" => flowchart::terminator,
    "flowChartPreparation" => flowchart::preparation,
    "flowChartManualInput" => flowchart::manual_input,
    "flowChartManualOperation" => flowchart::manual_operation,
    "flowChartConnector" => basic::ellipse,
    "flowChartOffpageConnector" => flowchart::offpage_connector,
    "flowChartPunchedCard" => flowchart::punched_card,
    "flowChartMerge" => flowchart::merge,
    "flowChartExtract" => flowchart::extract,
    "flowChartDelay" => flowchart::delay,
    "flowChartSort" => flowchart::sort,
    "flowChartCollate" => flowchart::collate,
    "flowChartOr" => flowchart::or,
    "flowChartSummingJunction" => flowchart::summing_junction,

    // Action buttons
    "actionButtonBlank" => action_buttons::blank,
    "actionButtonHome" => action_buttons::home,
    "actionButtonHelp" => action_buttons::help,
    "actionButtonInformation" => action_buttons::information,
    "actionButtonBackPrevious" => action_buttons::back_previous,
    "actionButtonForwardNext" => action_buttons::forward_next,
    "actionButtonBeginning" => action_buttons::beginning,
    "actionButtonEnd" => action_buttons::end,
    "actionButtonReturn" => action_buttons::return_button,
    "actionButtonDocument" => action_buttons::document,
};

/// Look up the formula registered for `preset_id`.
#[inline]
pub fn lookup(preset_id: &str) -> Option<PresetFormula> {
    PRESETS.get(preset_id).copied()
}

/// True when `preset_id` has its own formula.
#[inline]
pub fn is_known(preset_id: &str) -> bool {
    PRESETS.contains_key(preset_id)
}

/// Names of every registered preset.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.keys().copied()
}

/// The formula used for unknown presets.
pub fn fallback() -> PresetFormula {
    basic::rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_core_presets() {
        for id in [
            "rect", "ellipse", "circle", "oval", "triangle", "diamond", "parallelogram", "trapezoid",
            "pentagon", "hexagon", "octagon", "star", "rightArrow", "leftArrow", "upArrow",
            "downArrow", "roundRect",
        ] {
            assert!(is_known(id), "missing preset {id}");
        }
        assert!(!is_known("unknownXYZ"));
    }

    #[test]
    fn test_every_preset_starts_with_move_and_stays_finite() {
        let adjustments = Adjustments::new();
        let ctx = FormulaContext::new(120.0, 80.0, &adjustments);
        for name in names() {
            let formula = lookup(name).unwrap();
            let cmds = formula(&ctx);
            assert!(matches!(cmds.first(), Some(PathCommand::MoveTo(_))), "{name}");
            for cmd in &cmds {
                if let PathCommand::MoveTo(p) | PathCommand::LineTo(p) = cmd {
                    assert!(p.x.is_finite() && p.y.is_finite(), "{name}");
                    assert!(p.x >= -1e-9 && p.x <= 120.0 + 1e-9, "{name} x={}", p.x);
                    assert!(p.y >= -1e-9 && p.y <= 80.0 + 1e-9, "{name} y={}", p.y);
                }
            }
        }
    }

    #[test]
    fn test_adj_validation() {
        let mut adjustments = Adjustments::new();
        adjustments.insert("adj".into(), 0.3);
        adjustments.insert("adj1".into(), f64::NAN);
        adjustments.insert("adj2".into(), 2.0);
        let ctx = FormulaContext::new(10.0, 10.0, &adjustments);
        assert_eq!(ctx.adj("adj", 0.1, 0.5), 0.3);
        assert_eq!(ctx.adj("adj1", 0.1, 0.5), 0.1);
        assert_eq!(ctx.adj("adj2", 0.1, 0.5), 0.1);
        assert_eq!(ctx.adj("missing", 0.25, 1.0), 0.25);
    }
}
