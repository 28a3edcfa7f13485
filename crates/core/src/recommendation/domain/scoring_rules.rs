//! Style weight adjustments per face shape.
//!
//! Each shape adds or subtracts fixed weights on specific styles; a sharp
//! chin adds a further adjustment on top, independent of shape.

use crate::recommendation::domain::eyewear_catalog::style_id::*;

/// Weight deltas applied to styles for one face shape.
pub struct ShapeRule {
    /// Face shape name, matched case-insensitively.
    pub shape: &'static str,
    pub deltas: &'static [(u32, f64)],
}

pub const SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule {
        shape: "Oval",
        deltas: &[
            (RECTANGLE, 2.0),
            (SQUARE, 2.0),
            (AVIATOR, 2.0),
            (WAYFARER, 1.5),
            (RIMLESS, 1.0),
            (ROUND, 0.5),
        ],
    },
    ShapeRule {
        shape: "Round",
        deltas: &[
            (RECTANGLE, 3.0),
            (SQUARE, 3.0),
            (WAYFARER, 2.0),
            (CAT_EYE, 2.0),
            (CLUBMASTER, 1.5),
            (OVAL, -3.0),
            (ROUND, -3.0),
        ],
    },
    ShapeRule {
        shape: "Square",
        deltas: &[
            (ROUND, 3.0),
            (OVAL, 2.5),
            (AVIATOR, 2.5),
            (CAT_EYE, 1.0),
            (RIMLESS, 1.0),
            (RECTANGLE, -3.0),
            (SQUARE, -3.0),
        ],
    },
    ShapeRule {
        shape: "Heart",
        deltas: &[
            (WAYFARER, 3.0),
            (AVIATOR, 2.0),
            (CLUBMASTER, 2.0),
            (RIMLESS, 1.5),
            (OVAL, 1.0),
        ],
    },
    ShapeRule {
        shape: "Diamond",
        deltas: &[
            (CAT_EYE, 3.0),
            (OVAL, 2.0),
            (RIMLESS, 2.0),
            (CLUBMASTER, 1.5),
            (RECTANGLE, -1.0),
            (SQUARE, -1.0),
        ],
    },
    ShapeRule {
        shape: "Oblong",
        deltas: &[
            (AVIATOR, 3.0),
            (SQUARE, 2.0),
            (WAYFARER, 1.5),
            (RECTANGLE, -1.0),
        ],
    },
];

/// Chin angles below this count as sharp.
pub const SHARP_CHIN_ANGLE: f64 = 100.0;

pub const SHARP_CHIN_DELTAS: &[(u32, f64)] = &[(CLUBMASTER, 1.0), (SQUARE, -1.0)];

/// The rule block for `shape`, matched case-insensitively.
pub fn rule_for(shape: &str) -> Option<&'static ShapeRule> {
    let shape = shape.trim();
    SHAPE_RULES
        .iter()
        .find(|r| r.shape.eq_ignore_ascii_case(shape))
}
