//! Bundled IT balanced-scorecard model.
//!
//! A realistic factory-default dataset: 44 metrics across the four
//! perspectives, 24 monthly periods (2024-01 through 2025-12) with flat base
//! and target facts, and a 40-edge influence matrix. Used by the CLI and by
//! tests that want a full-size model without any external data source.

use crate::model::{Metric, MetricKey, Period, Perspective, Polarity, UnitKind};
use crate::scorecard::Scorecard;

use Perspective::{Customer, Financial, Learning, Process};
use Polarity::{Direct, Inverse};
use UnitKind::{Count, Currency, Hours, Percentage, Ratio, Years};

/// (key, name, perspective, objective, unit, higher_is_better,
/// default_target, base_value)
type CatalogRow = (
    &'static str,
    &'static str,
    Perspective,
    &'static str,
    UnitKind,
    bool,
    f64,
    f64,
);

#[rustfmt::skip]
const CATALOG: &[CatalogRow] = &[
    // Learning & Growth
    ("K001", "% staff trained", Learning, "Improve competencies", Percentage, true, 0.85, 0.86),
    ("K002", "% climate survey score", Learning, "Improve workplace climate", Percentage, true, 0.80, 0.82),
    ("K003", "% specialized IT staff", Learning, "Specialization", Percentage, true, 0.50, 0.52),
    ("K004", "% processes documented", Learning, "Knowledge management", Percentage, true, 0.90, 0.88),
    ("K005", "One-to-one feedback sessions", Learning, "Continuous feedback", Percentage, true, 1.0, 0.95),
    ("K006", "% plans achieved", Learning, "Effectiveness", Percentage, true, 0.90, 0.92),
    ("K007", "Knowledge reuse rate", Learning, "Efficiency", Percentage, true, 0.40, 0.38),
    ("K008", "Users trained", Learning, "Security awareness", Count, true, 200.0, 210.0),
    // Customer
    ("K010", "% adoption", Customer, "Tool usage", Percentage, true, 0.70, 0.72),
    ("K011", "% users trained", Customer, "User enablement", Percentage, true, 0.80, 0.81),
    ("K012", "% business-knowledge-gap tickets", Customer, "Close the knowledge gap", Percentage, false, 0.05, 0.04),
    ("K013", "Announcements sent", Customer, "Communication", Count, true, 10.0, 12.0),
    // Financial
    ("K020", "IT ROI (project level)", Financial, "Profitability", Percentage, true, 1.20, 1.25),
    ("K021", "Budget variance (%)", Financial, "Cost control", Percentage, false, 0.05, 0.04),
    ("K022", "Demand ROI", Financial, "Value delivery", Percentage, true, 1.15, 1.16),
    ("K023", "Cost per user", Financial, "Cost efficiency", Currency, false, 50.0, 48.0),
    ("K024", "Overdue invoices", Financial, "Financial health", Count, false, 0.0, 0.0),
    ("K025", "Unlicensed assets", Financial, "Compliance", Count, false, 0.0, 1.0),
    // Internal Process
    ("K030", "MTTR (mean time to restore service)", Process, "Agility", Hours, false, 4.0, 3.8),
    ("K031", "% recurring-incident reduction", Process, "Quality", Percentage, true, 0.20, 0.22),
    ("K032", "% successful changes", Process, "Stability", Percentage, true, 0.98, 0.985),
    ("K033", "Standard-time compliance level", Process, "Efficiency", Percentage, true, 0.90, 0.92),
    ("K034", "% SLA compliance", Process, "Service", Percentage, true, 0.95, 0.96),
    ("K035", "Service availability (%)", Process, "Continuity", Percentage, true, 0.999, 0.9995),
    ("K036", "% services without saturation", Process, "Capacity", Percentage, true, 0.95, 0.96),
    ("K037", "% successful continuity tests (ITSCM)", Process, "Resilience", Percentage, true, 1.0, 1.0),
    ("K038", "High-impact security incidents", Process, "Security", Count, false, 0.0, 0.0),
    ("K039", "Devices patched", Process, "Security", Count, true, 1000.0, 1020.0),
    ("K040", "Equipment age", Process, "Renewal", Years, false, 3.0, 2.8),
    ("K041", "Expired contracts", Process, "Vendor management", Count, false, 0.0, 0.0),
    ("K042", "% suppliers meeting SLA", Process, "Suppliers", Percentage, true, 0.95, 0.94),
    ("K043", "SPI", Process, "Projects", Ratio, true, 1.0, 1.05),
    ("K044", "CPI", Process, "Projects", Ratio, true, 1.0, 0.98),
    ("K045", "% risks mitigated", Process, "Risk", Percentage, true, 0.90, 0.92),
    ("K046", "Supplier performance index", Process, "Suppliers", Ratio, true, 0.90, 0.92),
    ("K047", "Test compliance", Process, "Quality", Percentage, true, 0.95, 0.96),
    ("K048", "Defects found", Process, "Quality", Count, false, 10.0, 8.0),
    ("K049", "% audit compliance", Process, "Compliance", Percentage, true, 1.0, 1.0),
    ("K050", "% audits closed", Process, "Compliance", Percentage, true, 1.0, 0.95),
    ("K051", "Users with MFA", Process, "Security", Count, true, 500.0, 550.0),
    ("K052", "Users with incorrect privileges", Process, "Security", Count, false, 0.0, 2.0),
    ("K053", "Unprotected endpoints", Process, "Security", Count, false, 0.0, 1.0),
    ("K054", "% vulnerability remediation compliance", Process, "Security", Percentage, true, 1.0, 0.98),
    ("K055", "% backup compliance", Process, "Operations", Percentage, true, 1.0, 1.0),
];

/// (from, to, polarity, elasticity, lag in months)
#[rustfmt::skip]
const EDGES: &[(&str, &str, Polarity, f64, usize)] = &[
    ("K004", "K030", Inverse, 0.25, 1),
    ("K007", "K030", Inverse, 0.20, 0),
    ("K032", "K030", Inverse, 0.15, 0),
    ("K047", "K032", Direct,  0.30, 0),
    ("K048", "K032", Inverse, 0.20, 0),
    ("K030", "K034", Inverse, 0.25, 0),
    ("K035", "K034", Direct,  0.25, 0),
    ("K036", "K030", Inverse, 0.20, 0),
    ("K012", "K036", Inverse, 0.30, 0),
    ("K011", "K010", Direct,  0.30, 1),
    ("K013", "K011", Direct,  0.25, 0),
    ("K007", "K012", Inverse, 0.25, 0),
    ("K010", "K020", Direct,  0.35, 2),
    ("K010", "K022", Direct,  0.30, 2),
    ("K008", "K038", Inverse, 0.25, 1),
    ("K051", "K038", Inverse, 0.20, 1),
    ("K052", "K038", Direct,  0.30, 0),
    ("K039", "K038", Inverse, 0.25, 0),
    ("K054", "K038", Inverse, 0.25, 0),
    ("K053", "K038", Direct,  0.30, 0),
    ("K038", "K035", Inverse, 0.30, 0),
    ("K055", "K037", Direct,  0.35, 0),
    ("K037", "K035", Direct,  0.20, 0),
    ("K042", "K034", Direct,  0.20, 0),
    ("K046", "K042", Direct,  0.25, 0),
    ("K041", "K035", Inverse, 0.25, 0),
    ("K024", "K035", Inverse, 0.20, 0),
    ("K040", "K030", Direct,  0.15, 0),
    ("K040", "K035", Inverse, 0.15, 0),
    ("K023", "K021", Direct,  0.20, 0),
    ("K025", "K049", Inverse, 0.30, 0),
    ("K049", "K050", Direct,  0.25, 0),
    ("K043", "K022", Direct,  0.20, 1),
    ("K044", "K021", Inverse, 0.20, 1),
    ("K045", "K043", Direct,  0.20, 1),
    ("K006", "K043", Direct,  0.20, 1),
    ("K005", "K006", Direct,  0.25, 0),
    ("K001", "K047", Direct,  0.25, 1),
    ("K003", "K048", Inverse, 0.20, 1),
];

/// First month of the demo period range.
const START: (i32, u32) = (2024, 1);
/// Number of monthly periods.
const MONTHS: usize = 24;

/// Build the demo scorecard: every metric carries its flat base value and
/// default target in every period.
#[must_use]
pub fn model() -> Scorecard {
    let mut builder = crate::config::ModelBuilder::new().months(START.0, START.1, MONTHS);

    for &(key, name, perspective, objective, unit, higher_is_better, target, _) in CATALOG {
        builder = builder.metric_full(Metric {
            key: MetricKey::from(key),
            name: name.to_string(),
            perspective,
            objective: objective.to_string(),
            unit,
            higher_is_better,
            default_target: target,
        });
    }

    let periods: Vec<Period> = {
        let (mut year, mut month) = START;
        (0..MONTHS)
            .map(|_| {
                let p = Period::new(format!("{year}-{month:02}"));
                month += 1;
                if month > 12 {
                    month = 1;
                    year += 1;
                }
                p
            })
            .collect()
    };

    for period in &periods {
        for &(key, _, _, _, _, _, target, base) in CATALOG {
            builder = builder
                .fact(period.as_str(), key, base)
                .target(period.as_str(), key, target);
        }
    }

    for &(from, to, polarity, elasticity, lag) in EDGES {
        builder = builder.edge(from, to, polarity, elasticity, lag);
    }

    builder.build()
}
