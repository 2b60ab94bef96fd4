//! Single owner of one model's input tables and derived output.
//!
//! A [`Scorecard`] holds the catalog, period sequence, facts and edges as an
//! immutable snapshot, mutates scenario inputs one entry at a time, and
//! recomputes the full simulated table synchronously after every mutation.
//! There is no incremental update path and no observable intermediate state:
//! readers only ever see a table published in full.

use crate::error::ValidationIssue;
use crate::impacts::{self, Impact};
use crate::model::{
    BaseFacts, InfluenceEdge, Metric, MetricKey, Period, ScenarioInputs, SimulatedValues,
    TargetFacts,
};
use crate::periods::PeriodIndex;
use crate::simulation;
use crate::status::{self, Status};
use crate::validate;

/// One model plus its current scenario and up-to-date simulated values.
#[derive(Debug, Clone)]
pub struct Scorecard {
    metrics: Vec<Metric>,
    periods: PeriodIndex,
    base: BaseFacts,
    targets: TargetFacts,
    edges: Vec<InfluenceEdge>,
    inputs: ScenarioInputs,
    sweeps: usize,
    simulated: SimulatedValues,
}

impl Scorecard {
    /// Take ownership of an input snapshot and compute its initial (zero
    /// shock) simulated table.
    #[must_use]
    pub fn new(
        metrics: Vec<Metric>,
        periods: PeriodIndex,
        base: BaseFacts,
        targets: TargetFacts,
        edges: Vec<InfluenceEdge>,
    ) -> Self {
        Self::with_sweeps(metrics, periods, base, targets, edges, simulation::DEFAULT_SWEEPS)
    }

    /// Like [`Scorecard::new`] with an explicit relaxation sweep count.
    #[must_use]
    pub fn with_sweeps(
        metrics: Vec<Metric>,
        periods: PeriodIndex,
        base: BaseFacts,
        targets: TargetFacts,
        edges: Vec<InfluenceEdge>,
        sweeps: usize,
    ) -> Self {
        let inputs = ScenarioInputs::new();
        let simulated =
            simulation::simulate_with_sweeps(&periods, &metrics, &base, &edges, &inputs, sweeps);
        Self {
            metrics,
            periods,
            base,
            targets,
            edges,
            inputs,
            sweeps,
            simulated,
        }
    }

    /// Enter or replace a shock, then recompute. A zero delta removes the
    /// entry instead, so clearing a shock and never having entered one are
    /// indistinguishable downstream.
    pub fn set_shock(&mut self, period: Period, metric: MetricKey, delta: f64) {
        if delta == 0.0 {
            self.inputs.remove(&period, &metric);
        } else {
            self.inputs.set(period, metric, delta);
        }
        self.recompute();
    }

    /// Remove one shock, then recompute.
    pub fn remove_shock(&mut self, period: &Period, metric: &MetricKey) {
        if self.inputs.remove(period, metric).is_some() {
            self.recompute();
        }
    }

    /// Drop all shocks, then recompute.
    pub fn clear_shocks(&mut self) {
        self.inputs.clear();
        self.recompute();
    }

    /// Change the relaxation sweep count and recompute.
    pub fn set_sweeps(&mut self, sweeps: usize) {
        self.sweeps = sweeps;
        self.recompute();
    }

    /// Rebuild the simulated table from the current inputs. Mutators call
    /// this themselves; it is public for callers that replace `inputs`
    /// wholesale via [`Scorecard::inputs_mut`].
    pub fn recompute(&mut self) {
        self.simulated = simulation::simulate_with_sweeps(
            &self.periods,
            &self.metrics,
            &self.base,
            &self.edges,
            &self.inputs,
            self.sweeps,
        );
    }

    /// The current simulated table.
    #[must_use]
    pub fn simulated(&self) -> &SimulatedValues {
        &self.simulated
    }

    /// Traffic-light band for a metric at a period, against its per-period
    /// target or default. `None` when the key is not in the catalog.
    #[must_use]
    pub fn status_of(&self, period: &Period, key: &MetricKey) -> Option<Status> {
        let metric = self.metric(key)?;
        let value = self.simulated.get(period, key);
        let target = self.targets.target_for(period, metric);
        Some(status::classify(value, target, metric.higher_is_better))
    }

    /// Simulated minus base, when both are defined.
    #[must_use]
    pub fn variance(&self, period: &Period, key: &MetricKey) -> Option<f64> {
        let simulated = self.simulated.get(period, key)?;
        let base = self.base.get(period, key)?;
        Some(simulated - base)
    }

    /// Resolved target for a metric at a period.
    #[must_use]
    pub fn target_for(&self, period: &Period, key: &MetricKey) -> Option<f64> {
        let metric = self.metric(key)?;
        Some(self.targets.target_for(period, metric))
    }

    /// Same-period one-hop effects of this period's shocks.
    #[must_use]
    pub fn direct_impacts(&self, period: &Period) -> Vec<Impact> {
        impacts::direct_impacts(period, &self.edges, &self.inputs)
    }

    /// Lag-respecting one-hop effects arriving at this period.
    #[must_use]
    pub fn lagged_impacts(&self, period: &Period) -> Vec<Impact> {
        impacts::lagged_impacts(period, &self.periods, &self.edges, &self.inputs)
    }

    /// Enumerate everything the engine would silently ignore.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate::validate(
            &self.periods,
            &self.metrics,
            &self.base,
            &self.targets,
            &self.edges,
            &self.inputs,
        )
    }

    #[must_use]
    pub fn metric(&self, key: &MetricKey) -> Option<&Metric> {
        self.metrics.iter().find(|m| &m.key == key)
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    #[must_use]
    pub fn periods(&self) -> &PeriodIndex {
        &self.periods
    }

    #[must_use]
    pub fn base(&self) -> &BaseFacts {
        &self.base
    }

    #[must_use]
    pub fn targets(&self) -> &TargetFacts {
        &self.targets
    }

    #[must_use]
    pub fn edges(&self) -> &[InfluenceEdge] {
        &self.edges
    }

    #[must_use]
    pub fn inputs(&self) -> &ScenarioInputs {
        &self.inputs
    }

    /// Mutable access to the shock table for bulk edits. Call
    /// [`Scorecard::recompute`] afterwards; the table is not watched.
    pub fn inputs_mut(&mut self) -> &mut ScenarioInputs {
        &mut self.inputs
    }
}
