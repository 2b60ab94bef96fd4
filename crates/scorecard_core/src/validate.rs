//! Pre-flight checks on an input snapshot.
//!
//! The engine absorbs every malformed input as "no effect"; this pass is the
//! strict counterpart, enumerating everything the engine would silently
//! ignore so a caller can surface it before simulating.

use rustc_hash::FxHashSet;

use crate::error::{TableKind, ValidationIssue};
use crate::model::{BaseFacts, InfluenceEdge, Metric, MetricKey, Period, ScenarioInputs, TargetFacts};
use crate::periods::PeriodIndex;

/// Check a full snapshot. An empty result means the engine will ignore
/// nothing it is given.
#[must_use]
pub fn validate(
    periods: &PeriodIndex,
    metrics: &[Metric],
    base: &BaseFacts,
    targets: &TargetFacts,
    edges: &[InfluenceEdge],
    inputs: &ScenarioInputs,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut known: FxHashSet<&MetricKey> = FxHashSet::default();
    for metric in metrics {
        if !known.insert(&metric.key) {
            issues.push(ValidationIssue::DuplicateMetricKey(metric.key.clone()));
        }
    }

    check_period_sequence(periods, &mut issues);

    for edge in edges {
        if !known.contains(&edge.from) {
            issues.push(ValidationIssue::UnknownEdgeSource {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
        if !known.contains(&edge.to) {
            issues.push(ValidationIssue::UnknownEdgeTarget {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
        if edge.elasticity < 0.0 {
            issues.push(ValidationIssue::NegativeElasticity {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
    }

    for ((period, metric), _) in base.iter() {
        check_key(TableKind::BaseFacts, periods, &known, period, metric, &mut issues);
    }
    for ((period, metric), _) in targets.iter() {
        check_key(TableKind::TargetFacts, periods, &known, period, metric, &mut issues);
    }
    for ((period, metric), _) in inputs.iter() {
        check_key(
            TableKind::ScenarioInputs,
            periods,
            &known,
            period,
            metric,
            &mut issues,
        );
    }

    issues
}

fn check_key(
    table: TableKind,
    periods: &PeriodIndex,
    known: &FxHashSet<&MetricKey>,
    period: &Period,
    metric: &MetricKey,
    issues: &mut Vec<ValidationIssue>,
) {
    if !known.contains(metric) {
        issues.push(ValidationIssue::UnknownMetric {
            table,
            period: period.clone(),
            metric: metric.clone(),
        });
    }
    if periods.index_of(period).is_none() {
        issues.push(ValidationIssue::UnknownPeriod {
            table,
            period: period.clone(),
            metric: metric.clone(),
        });
    }
}

/// Labels must parse as `YYYY-MM` and advance by exactly one month per step.
/// Lag offsets are index subtractions, so a gap or misordering silently
/// changes what "one period back" means.
fn check_period_sequence(periods: &PeriodIndex, issues: &mut Vec<ValidationIssue>) {
    let mut previous: Option<(&Period, (i32, u32))> = None;
    for period in periods.periods() {
        let Some(ym) = parse_year_month(period.as_str()) else {
            issues.push(ValidationIssue::MalformedPeriodLabel(period.clone()));
            previous = None;
            continue;
        };
        if let Some((prev_period, prev_ym)) = previous
            && next_month(prev_ym) != ym
        {
            issues.push(ValidationIssue::NonContiguousPeriods {
                previous: prev_period.clone(),
                next: period.clone(),
            });
        }
        previous = Some((period, ym));
    }
}

fn parse_year_month(label: &str) -> Option<(i32, u32)> {
    let (year, month) = label.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}
