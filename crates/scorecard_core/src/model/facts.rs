//! Sparse fact tables keyed by (period, metric)
//!
//! Both tables distinguish "no entry" from "entry with value": for base facts
//! an absent or explicitly-undefined entry means "no data" and is never
//! treated as zero; for target facts an absent entry falls back to the
//! metric's default target.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Metric, MetricKey, Period};

/// Composite key for the per-(period, metric) association tables.
pub type FactKey = (Period, MetricKey);

/// Observed values: `(period, metric) → value | no data`.
///
/// An explicit `None` entry records "we looked, there is no data" (the
/// original source's N/D rows); a missing entry means the same thing to every
/// reader. Undefined base forces an undefined simulated value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseFacts {
    entries: FxHashMap<FactKey, Option<f64>>,
}

impl BaseFacts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, period: Period, metric: MetricKey, value: f64) {
        self.entries.insert((period, metric), Some(value));
    }

    /// Record an explicit "no data" fact for the pair.
    pub fn insert_undefined(&mut self, period: Period, metric: MetricKey) {
        self.entries.insert((period, metric), None);
    }

    /// Observed value, or `None` when the pair has no data (whether the entry
    /// is absent or explicitly undefined).
    #[must_use]
    pub fn get(&self, period: &Period, metric: &MetricKey) -> Option<f64> {
        self.entries
            .get(&(period.clone(), metric.clone()))
            .copied()
            .flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FactKey, Option<f64>)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Period, MetricKey, f64)> for BaseFacts {
    fn from_iter<I: IntoIterator<Item = (Period, MetricKey, f64)>>(iter: I) -> Self {
        let mut facts = Self::new();
        for (period, metric, value) in iter {
            facts.insert(period, metric, value);
        }
        facts
    }
}

/// Target values: `(period, metric) → target`, falling back to the metric's
/// default target when no per-period entry exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetFacts {
    entries: FxHashMap<FactKey, f64>,
}

impl TargetFacts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, period: Period, metric: MetricKey, value: f64) {
        self.entries.insert((period, metric), value);
    }

    /// Per-period target if one was supplied.
    #[must_use]
    pub fn get(&self, period: &Period, metric: &MetricKey) -> Option<f64> {
        self.entries.get(&(period.clone(), metric.clone())).copied()
    }

    /// Target for the pair, defaulting to the metric's own target.
    #[must_use]
    pub fn target_for(&self, period: &Period, metric: &Metric) -> f64 {
        self.get(period, &metric.key).unwrap_or(metric.default_target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FactKey, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
