//! Traffic-light classification of a value against its target.

use serde::{Deserialize, Serialize};

/// Amber band width: within 5% of target on the unfavourable side.
pub const AMBER_TOLERANCE: f64 = 0.05;

/// Qualitative band for a (value, target) comparison. Ordered best to worst,
/// with `Gray` (no data) sorting after everything measurable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    Green,
    Amber,
    Red,
    /// No data: the simulated value is undefined.
    Gray,
}

impl Status {
    /// Display label for the band.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Status::Green => "Green",
            Status::Amber => "Amber",
            Status::Red => "Red",
            Status::Gray => "N/D",
        }
    }
}

/// Classify a possibly-undefined value against a target.
///
/// Higher-is-better: Green at or above target, Amber down to 95% of target,
/// Red below. Lower-is-better mirrors with a 105% tolerance. Pure function.
#[must_use]
pub fn classify(value: Option<f64>, target: f64, higher_is_better: bool) -> Status {
    let Some(value) = value else {
        return Status::Gray;
    };
    if higher_is_better {
        if value >= target {
            Status::Green
        } else if value >= (1.0 - AMBER_TOLERANCE) * target {
            Status::Amber
        } else {
            Status::Red
        }
    } else if value <= target {
        Status::Green
    } else if value <= (1.0 + AMBER_TOLERANCE) * target {
        Status::Amber
    } else {
        Status::Red
    }
}
