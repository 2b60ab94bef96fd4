//! Fluent builder for assembling a scorecard model.
//!
//! # Example
//!
//! ```
//! use scorecard_core::config::ModelBuilder;
//! use scorecard_core::model::{Perspective, Polarity, UnitKind};
//!
//! let card = ModelBuilder::new()
//!     .months(2024, 1, 3)
//!     .metric("K001", "Conversion rate", Perspective::Customer, UnitKind::Percentage)
//!     .metric("K002", "Monthly revenue", Perspective::Financial, UnitKind::Currency)
//!     .target_default("K001", 0.25)
//!     .fact("2024-01", "K002", 120_000.0)
//!     .edge("K001", "K002", Polarity::Direct, 0.4, 1)
//!     .build();
//!
//! assert!(card.validate().is_empty());
//! ```

use crate::model::{
    BaseFacts, InfluenceEdge, Metric, MetricKey, Period, Perspective, Polarity, ScenarioInputs,
    TargetFacts, UnitKind,
};
use crate::periods::PeriodIndex;
use crate::scorecard::Scorecard;
use crate::simulation::DEFAULT_SWEEPS;

/// Accumulates catalog entries, periods, facts and edges, then produces a
/// [`Scorecard`] (or the raw parts) at `build` time.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    metrics: Vec<Metric>,
    periods: Vec<Period>,
    base: BaseFacts,
    targets: TargetFacts,
    edges: Vec<InfluenceEdge>,
    sweeps: usize,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self {
            metrics: Vec::new(),
            periods: Vec::new(),
            base: BaseFacts::new(),
            targets: TargetFacts::new(),
            edges: Vec::new(),
            sweeps: DEFAULT_SWEEPS,
        }
    }
}

impl ModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one period label. Order of calls is chronological order.
    #[must_use]
    pub fn period(mut self, label: &str) -> Self {
        self.periods.push(Period::from(label));
        self
    }

    /// Append `count` contiguous monthly labels starting at `year`-`month`.
    #[must_use]
    pub fn months(mut self, mut year: i32, mut month: u32, count: usize) -> Self {
        for _ in 0..count {
            self.periods.push(Period::new(format!("{year}-{month:02}")));
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
        self
    }

    /// Append a catalog entry with a neutral objective, higher-is-better
    /// preference and a zero default target. Refine with
    /// [`ModelBuilder::target_default`] / [`ModelBuilder::lower_is_better`].
    #[must_use]
    pub fn metric(
        mut self,
        key: &str,
        name: &str,
        perspective: Perspective,
        unit: UnitKind,
    ) -> Self {
        self.metrics.push(Metric {
            key: MetricKey::from(key),
            name: name.to_string(),
            perspective,
            objective: String::new(),
            unit,
            higher_is_better: true,
            default_target: 0.0,
        });
        self
    }

    /// Append a fully specified catalog entry.
    #[must_use]
    pub fn metric_full(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Set the default target of the most recently added metric with `key`.
    #[must_use]
    pub fn target_default(mut self, key: &str, target: f64) -> Self {
        if let Some(m) = self.metrics.iter_mut().rev().find(|m| m.key.as_str() == key) {
            m.default_target = target;
        }
        self
    }

    /// Mark a metric as lower-is-better.
    #[must_use]
    pub fn lower_is_better(mut self, key: &str) -> Self {
        if let Some(m) = self.metrics.iter_mut().rev().find(|m| m.key.as_str() == key) {
            m.higher_is_better = false;
        }
        self
    }

    /// Record an observed value.
    #[must_use]
    pub fn fact(mut self, period: &str, key: &str, value: f64) -> Self {
        self.base.insert(Period::from(period), MetricKey::from(key), value);
        self
    }

    /// Record an explicit "no data" observation.
    #[must_use]
    pub fn fact_undefined(mut self, period: &str, key: &str) -> Self {
        self.base
            .insert_undefined(Period::from(period), MetricKey::from(key));
        self
    }

    /// Record a per-period target.
    #[must_use]
    pub fn target(mut self, period: &str, key: &str, value: f64) -> Self {
        self.targets
            .insert(Period::from(period), MetricKey::from(key), value);
        self
    }

    /// Record an influence edge.
    #[must_use]
    pub fn edge(
        mut self,
        from: &str,
        to: &str,
        polarity: Polarity,
        elasticity: f64,
        lag_periods: usize,
    ) -> Self {
        self.edges
            .push(InfluenceEdge::new(from, to, polarity, elasticity, lag_periods));
        self
    }

    /// Override the relaxation sweep count of the built scorecard.
    #[must_use]
    pub fn sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    /// Produce the owning scorecard (computes the zero-shock table).
    #[must_use]
    pub fn build(self) -> Scorecard {
        Scorecard::with_sweeps(
            self.metrics,
            PeriodIndex::new(self.periods),
            self.base,
            self.targets,
            self.edges,
            self.sweeps,
        )
    }

    /// Produce the raw parts for callers driving the engine directly.
    #[must_use]
    #[allow(clippy::type_complexity)]
    pub fn build_parts(
        self,
    ) -> (
        Vec<Metric>,
        PeriodIndex,
        BaseFacts,
        TargetFacts,
        Vec<InfluenceEdge>,
        ScenarioInputs,
    ) {
        (
            self.metrics,
            PeriodIndex::new(self.periods),
            self.base,
            self.targets,
            self.edges,
            ScenarioInputs::new(),
        )
    }
}
