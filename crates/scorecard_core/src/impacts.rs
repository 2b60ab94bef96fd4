//! One-hop impact views: "what is driving this period".
//!
//! These answer the analyst's attribution question directly from the edge
//! list and the shock set, independent of the engine's converged table. They
//! are deliberately first-order: a shock's knock-on effects through longer
//! chains show up in [`crate::simulation`] output, not here.

use crate::model::{InfluenceEdge, MetricKey, Period, ScenarioInputs};
use crate::periods::PeriodIndex;

/// How many lagged impacts [`lagged_impacts`] reports.
const MAX_LAGGED_IMPACTS: usize = 10;

/// A single first-order effect of a shock travelling one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Impact {
    pub from: MetricKey,
    pub to: MetricKey,
    /// `shock delta × polarity × elasticity`, a fractional change on `to`.
    pub effect: f64,
}

/// Same-period effects of the shocks entered at `period`, strongest first.
///
/// One entry per (shock, outgoing edge) pair, regardless of the edge's lag:
/// this view shows what the entered shocks push on, not when it lands.
#[must_use]
pub fn direct_impacts(
    period: &Period,
    edges: &[InfluenceEdge],
    inputs: &ScenarioInputs,
) -> Vec<Impact> {
    let mut impacts: Vec<Impact> = inputs
        .at_period(period)
        .flat_map(|(metric, delta)| {
            edges
                .iter()
                .filter(move |e| &e.from == metric)
                .map(move |e| Impact {
                    from: e.from.clone(),
                    to: e.to.clone(),
                    effect: delta * e.polarity.factor() * e.elasticity,
                })
        })
        .collect();
    sort_by_strength(&mut impacts);
    impacts
}

/// Effects arriving at `period` from shocks entered `lag` periods earlier,
/// strongest first, truncated to the top [`MAX_LAGGED_IMPACTS`].
///
/// For every edge, the shock is looked up at `offset(period, lag)` for the
/// edge's source; edges whose lag reaches before the first period, and
/// zero-valued shocks, contribute nothing.
#[must_use]
pub fn lagged_impacts(
    period: &Period,
    index: &PeriodIndex,
    edges: &[InfluenceEdge],
    inputs: &ScenarioInputs,
) -> Vec<Impact> {
    let Some(period_idx) = index.index_of(period) else {
        return Vec::new();
    };

    let mut impacts: Vec<Impact> = edges
        .iter()
        .filter_map(|e| {
            let source_period = index.offset(period_idx, e.lag_periods)?;
            let delta = inputs.get(source_period, &e.from)?;
            if delta == 0.0 {
                return None;
            }
            Some(Impact {
                from: e.from.clone(),
                to: e.to.clone(),
                effect: delta * e.polarity.factor() * e.elasticity,
            })
        })
        .collect();
    sort_by_strength(&mut impacts);
    impacts.truncate(MAX_LAGGED_IMPACTS);
    impacts
}

fn sort_by_strength(impacts: &mut [Impact]) {
    impacts.sort_by(|a, b| b.effect.abs().total_cmp(&a.effect.abs()));
}
