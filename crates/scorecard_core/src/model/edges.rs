//! Causal influence relationships between metrics

use serde::{Deserialize, Serialize};

use super::MetricKey;

/// Direction of an influence: does a positive change in the source push the
/// target up or down?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Source up → target up.
    Direct,
    /// Source up → target down.
    Inverse,
}

impl Polarity {
    /// Multiplicative sign carried into the propagation sum.
    #[must_use]
    pub fn factor(&self) -> f64 {
        match self {
            Polarity::Direct => 1.0,
            Polarity::Inverse => -1.0,
        }
    }
}

/// A directed, signed, weighted, lagged causal edge `from → to`.
///
/// Multiple edges may share endpoints (fan-in and fan-out are both normal).
/// An edge naming a metric key absent from the catalog is inert: it
/// contributes nothing and is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceEdge {
    pub from: MetricKey,
    pub to: MetricKey,
    pub polarity: Polarity,
    /// Fraction of the source's fractional change transferred to the target.
    /// Non-negative; magnitude lives here, sign lives in `polarity`.
    pub elasticity: f64,
    /// How many periods the effect takes to arrive. Zero means same period.
    pub lag_periods: usize,
}

impl InfluenceEdge {
    pub fn new(
        from: impl Into<MetricKey>,
        to: impl Into<MetricKey>,
        polarity: Polarity,
        elasticity: f64,
        lag_periods: usize,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            polarity,
            elasticity,
            lag_periods,
        }
    }
}
