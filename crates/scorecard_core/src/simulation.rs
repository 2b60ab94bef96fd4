//! Causal propagation engine.
//!
//! Given the metric catalog, the ordered period sequence, base facts, the
//! influence graph and a sparse shock set, [`simulate`] computes the
//! resulting value of every metric at every period.
//!
//! The algorithm is a fixed-sweep Gauss–Seidel relaxation over a mutable
//! `delta[period][metric]` table: each sweep walks periods in chronological
//! order and metrics in catalog order, overwriting each cell with
//! `shock + Σ incoming` in place. Within a sweep, a lag-0 edge therefore
//! reads partially-updated same-period state (depending on catalog order),
//! while lag ≥ 1 edges always read a fully-processed earlier period. This
//! exact ordering is deliberate: it must be reproduced for bit-compatible
//! output, though for acyclic or weakly-coupled graphs it only affects
//! convergence speed, not the fixed point.
//!
//! The engine is total: malformed edges, missing facts and unknown keys are
//! absorbed as "no effect" rather than raised. Callers wanting strict input
//! checking run [`crate::validate`] first.

use rustc_hash::FxHashMap;

use crate::model::{BaseFacts, InfluenceEdge, Metric, ScenarioInputs, SimulatedValues};
use crate::periods::PeriodIndex;

/// Number of relaxation sweeps run by [`simulate`].
///
/// Chosen empirically to cover realistic chain depths for graphs of this
/// size (tens of metrics, tens of edges). It is a tuning constant, not a
/// correctness parameter: causal chains (or cycles) deeper than the sweep
/// count will not have fully converged, which matches the behavior consumers
/// already depend on. Use [`simulate_with_sweeps`] to override.
pub const DEFAULT_SWEEPS: usize = 5;

/// Display names of the project-health ratios held inside [`RATIO_BAND`]
/// regardless of what the feedback loops around them produce.
const STABILIZED_RATIOS: [&str; 2] = ["SPI", "CPI"];

/// Plausibility band for the stabilized ratios.
const RATIO_BAND: (f64, f64) = (0.5, 1.5);

/// An influence edge with both endpoints resolved to catalog positions.
/// Edges that reference unknown metric keys never make it here, which is
/// what makes them inert.
struct ResolvedEdge {
    from: usize,
    lag: usize,
    /// `polarity.factor() * elasticity`, folded once up front.
    weight: f64,
}

/// Run the propagation with [`DEFAULT_SWEEPS`] sweeps.
#[must_use]
pub fn simulate(
    periods: &PeriodIndex,
    metrics: &[Metric],
    base: &BaseFacts,
    edges: &[InfluenceEdge],
    inputs: &ScenarioInputs,
) -> SimulatedValues {
    simulate_with_sweeps(periods, metrics, base, edges, inputs, DEFAULT_SWEEPS)
}

/// Run the propagation with an explicit sweep count.
///
/// A pure function of its inputs: identical snapshots produce identical
/// tables, and each call owns its own working state.
#[must_use]
pub fn simulate_with_sweeps(
    periods: &PeriodIndex,
    metrics: &[Metric],
    base: &BaseFacts,
    edges: &[InfluenceEdge],
    inputs: &ScenarioInputs,
    sweeps: usize,
) -> SimulatedValues {
    let n_periods = periods.len();
    let n_metrics = metrics.len();

    let positions: FxHashMap<_, _> = metrics
        .iter()
        .enumerate()
        .map(|(i, m)| (&m.key, i))
        .collect();

    // Incoming adjacency per target metric, unknown endpoints dropped.
    let mut incoming: Vec<Vec<ResolvedEdge>> = (0..n_metrics).map(|_| Vec::new()).collect();
    for edge in edges {
        let (Some(&from), Some(&to)) = (positions.get(&edge.from), positions.get(&edge.to)) else {
            continue;
        };
        incoming[to].push(ResolvedEdge {
            from,
            lag: edge.lag_periods,
            weight: edge.polarity.factor() * edge.elasticity,
        });
    }

    // Shocks densified once; entries outside the catalog or the period
    // sequence are inert.
    let mut shocks = vec![0.0_f64; n_periods * n_metrics];
    for ((period, metric), delta) in inputs.iter() {
        if let (Some(p), Some(&m)) = (periods.index_of(period), positions.get(metric)) {
            shocks[p * n_metrics + m] = delta;
        }
    }

    // Gauss-Seidel sweeps: overwrite delta cells in place, periods ascending,
    // metrics in catalog order.
    let mut delta = vec![0.0_f64; n_periods * n_metrics];
    for _ in 0..sweeps {
        for p in 0..n_periods {
            for (m, sources) in incoming.iter().enumerate() {
                let mut acc = 0.0;
                for edge in sources {
                    // A lag reaching before the first period contributes nothing.
                    if let Some(src) = p.checked_sub(edge.lag) {
                        acc += delta[src * n_metrics + edge.from] * edge.weight;
                    }
                }
                delta[p * n_metrics + m] = shocks[p * n_metrics + m] + acc;
            }
        }
    }

    // Final value pass: undefined base stays undefined unconditionally,
    // everything else is base * (1 + delta), clamped per unit kind.
    let mut values = Vec::with_capacity(n_periods * n_metrics);
    for (p, period) in periods.periods().iter().enumerate() {
        for (m, metric) in metrics.iter().enumerate() {
            values.push(base.get(period, &metric.key).map(|b| {
                let raw = b * (1.0 + delta[p * n_metrics + m]);
                clamp_value(metric, raw)
            }));
        }
    }

    SimulatedValues::new(
        periods.periods().to_vec(),
        metrics.iter().map(|m| m.key.clone()).collect(),
        values,
    )
}

/// Unit-kind clamp plus the named-ratio stabilizer.
fn clamp_value(metric: &Metric, value: f64) -> f64 {
    let value = metric.unit.clamp(value);
    if STABILIZED_RATIOS.contains(&metric.name.as_str()) {
        value.clamp(RATIO_BAND.0, RATIO_BAND.1)
    } else {
        value
    }
}
