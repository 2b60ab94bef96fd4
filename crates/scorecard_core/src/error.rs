//! Issue types reported by the pre-flight validation pass.
//!
//! The engine itself is total and never raises; these types exist for
//! callers that want referential problems enumerated before simulating
//! instead of silently absorbed as "no effect".

use std::fmt;

use crate::model::{MetricKey, Period};

/// Which input table an issue was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    BaseFacts,
    TargetFacts,
    ScenarioInputs,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::BaseFacts => write!(f, "base facts"),
            TableKind::TargetFacts => write!(f, "target facts"),
            TableKind::ScenarioInputs => write!(f, "scenario inputs"),
        }
    }
}

/// A single problem found in an input snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// Two catalog entries share a key; lookups resolve to the first.
    DuplicateMetricKey(MetricKey),
    /// Edge source names no catalog entry; the edge is inert.
    UnknownEdgeSource { from: MetricKey, to: MetricKey },
    /// Edge target names no catalog entry; the edge is inert.
    UnknownEdgeTarget { from: MetricKey, to: MetricKey },
    /// Edge carries a negative elasticity; sign belongs in the polarity.
    NegativeElasticity { from: MetricKey, to: MetricKey },
    /// A fact or shock names a metric outside the catalog.
    UnknownMetric {
        table: TableKind,
        period: Period,
        metric: MetricKey,
    },
    /// A fact or shock names a period outside the sequence.
    UnknownPeriod {
        table: TableKind,
        period: Period,
        metric: MetricKey,
    },
    /// A period label is not of the `YYYY-MM` form, so contiguity cannot
    /// be checked for it.
    MalformedPeriodLabel(Period),
    /// Two adjacent labels are not consecutive calendar months; lag offsets
    /// across this boundary will not mean what they appear to mean.
    NonContiguousPeriods { previous: Period, next: Period },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateMetricKey(key) => {
                write!(f, "duplicate metric key {key}")
            }
            ValidationIssue::UnknownEdgeSource { from, to } => {
                write!(f, "edge {from} -> {to}: source metric is not in the catalog")
            }
            ValidationIssue::UnknownEdgeTarget { from, to } => {
                write!(f, "edge {from} -> {to}: target metric is not in the catalog")
            }
            ValidationIssue::NegativeElasticity { from, to } => {
                write!(f, "edge {from} -> {to}: elasticity is negative")
            }
            ValidationIssue::UnknownMetric {
                table,
                period,
                metric,
            } => {
                write!(f, "{table}: metric {metric} at {period} is not in the catalog")
            }
            ValidationIssue::UnknownPeriod {
                table,
                period,
                metric,
            } => {
                write!(
                    f,
                    "{table}: period {period} for metric {metric} is not in the period sequence"
                )
            }
            ValidationIssue::MalformedPeriodLabel(period) => {
                write!(f, "period label {period} is not of the form YYYY-MM")
            }
            ValidationIssue::NonContiguousPeriods { previous, next } => {
                write!(f, "periods {previous} and {next} are not consecutive months")
            }
        }
    }
}

impl std::error::Error for ValidationIssue {}
