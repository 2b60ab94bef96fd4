//! Simulated value table produced by the propagation engine

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{MetricKey, Period};

/// One output row: the resulting value of a metric at a period, or `None`
/// when the base fact was undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedFact {
    pub period: Period,
    pub metric: MetricKey,
    pub value: Option<f64>,
}

/// Dense `(period, metric) → value | undefined` table.
///
/// Always rebuilt wholesale by [`crate::simulation::simulate`]; never
/// mutated in place. Comparable with `==` so callers can assert the engine's
/// referential transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedValues {
    periods: Vec<Period>,
    metrics: Vec<MetricKey>,
    metric_index: FxHashMap<MetricKey, usize>,
    period_index: FxHashMap<Period, usize>,
    /// Period-major: `values[period_idx * metrics.len() + metric_idx]`.
    values: Vec<Option<f64>>,
}

impl SimulatedValues {
    pub(crate) fn new(
        periods: Vec<Period>,
        metrics: Vec<MetricKey>,
        values: Vec<Option<f64>>,
    ) -> Self {
        debug_assert_eq!(values.len(), periods.len() * metrics.len());
        let metric_index = metrics
            .iter()
            .enumerate()
            .map(|(i, m)| (m.clone(), i))
            .collect();
        let period_index = periods
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();
        Self {
            periods,
            metrics,
            metric_index,
            period_index,
            values,
        }
    }

    /// Simulated value for the pair; `None` when the pair is outside the
    /// table or its base fact was undefined.
    #[must_use]
    pub fn get(&self, period: &Period, metric: &MetricKey) -> Option<f64> {
        let p = *self.period_index.get(period)?;
        let m = *self.metric_index.get(metric)?;
        self.values[p * self.metrics.len() + m]
    }

    /// All rows in period-major, catalog order.
    pub fn iter(&self) -> impl Iterator<Item = SimulatedFact> + '_ {
        self.values.iter().enumerate().map(|(i, v)| {
            let n = self.metrics.len();
            SimulatedFact {
                period: self.periods[i / n].clone(),
                metric: self.metrics[i % n].clone(),
                value: *v,
            }
        })
    }

    /// Time series of one metric across all periods, in chronological order.
    pub fn series<'a>(
        &'a self,
        metric: &MetricKey,
    ) -> impl Iterator<Item = (&'a Period, Option<f64>)> + 'a {
        let m = self.metric_index.get(metric).copied();
        let n = self.metrics.len();
        self.periods.iter().enumerate().map(move |(p, period)| {
            let value = m.and_then(|m| self.values[p * n + m]);
            (period, value)
        })
    }

    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    #[must_use]
    pub fn metrics(&self) -> &[MetricKey] {
        &self.metrics
    }
}
