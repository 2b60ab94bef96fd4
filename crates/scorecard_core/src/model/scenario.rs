//! Scenario inputs: the exogenous shocks driving a simulation

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{FactKey, MetricKey, Period};

/// Sparse table of user-asserted fractional deltas, e.g. +0.10 for "+10%".
///
/// At most one shock exists per (period, metric): `set` replaces, it never
/// accumulates. Absence reads as zero, but a stored zero is still a distinct
/// entry — callers that want "zero means no shock" remove the entry instead
/// (see `Scorecard::set_shock`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    entries: FxHashMap<FactKey, f64>,
}

impl ScenarioInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the shock for a (period, metric) pair.
    pub fn set(&mut self, period: Period, metric: MetricKey, delta: f64) {
        self.entries.insert((period, metric), delta);
    }

    /// Remove the shock for a pair, returning the previous delta if any.
    pub fn remove(&mut self, period: &Period, metric: &MetricKey) -> Option<f64> {
        self.entries.remove(&(period.clone(), metric.clone()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored delta for the pair; `None` when no shock was entered.
    #[must_use]
    pub fn get(&self, period: &Period, metric: &MetricKey) -> Option<f64> {
        self.entries.get(&(period.clone(), metric.clone())).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FactKey, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Shocks entered at one period.
    pub fn at_period<'a>(
        &'a self,
        period: &'a Period,
    ) -> impl Iterator<Item = (&'a MetricKey, f64)> + 'a {
        self.entries
            .iter()
            .filter(move |((p, _), _)| p == period)
            .map(|((_, m), v)| (m, *v))
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
