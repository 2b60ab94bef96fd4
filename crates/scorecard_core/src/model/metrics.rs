//! Metric (KPI) catalog types

use serde::{Deserialize, Serialize};

use super::MetricKey;

/// Balanced-scorecard perspective a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    Financial,
    Customer,
    Process,
    Learning,
}

impl Perspective {
    /// All perspectives in conventional top-down scorecard order.
    pub const ALL: [Perspective; 4] = [
        Perspective::Financial,
        Perspective::Customer,
        Perspective::Process,
        Perspective::Learning,
    ];

    /// Display label for the perspective.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Perspective::Financial => "Financial",
            Perspective::Customer => "Customer",
            Perspective::Process => "Internal Process",
            Perspective::Learning => "Learning & Growth",
        }
    }
}

/// Unit family of a metric's values. Drives post-simulation clamping and
/// display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Fraction in [0, 1]; rendered as a percentage.
    Percentage,
    Currency,
    Count,
    Hours,
    Days,
    Years,
    Ratio,
}

impl UnitKind {
    /// Clamp a simulated value to the range this unit family admits.
    ///
    /// Percentages are fractions and stay in [0, 1]; counts, hours and days
    /// cannot go negative. Currency, years and ratios are left alone here
    /// (ratios may still be bounded by the stabilizer, see
    /// [`crate::simulation`]).
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        match self {
            UnitKind::Percentage => value.clamp(0.0, 1.0),
            UnitKind::Count | UnitKind::Hours | UnitKind::Days => value.max(0.0),
            UnitKind::Currency | UnitKind::Years | UnitKind::Ratio => value,
        }
    }
}

/// A catalog entry: one named, unit-typed quantity tracked per period.
///
/// Immutable within one computation; the catalog's order is the engine's
/// deterministic metric iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub key: MetricKey,
    pub name: String,
    pub perspective: Perspective,
    pub objective: String,
    pub unit: UnitKind,
    pub higher_is_better: bool,
    /// Target used when no per-period target fact exists.
    pub default_target: f64,
}
