//! Plain-text rendering of a scorecard period.
//!
//! Formatting (percent text, currency symbols, traffic lights, variance
//! arrows) is a display concern and lives here, outside the core engine.

use std::fmt::Write;

use scorecard_core::Scorecard;
use scorecard_core::impacts::Impact;
use scorecard_core::model::{Metric, MetricKey, Period, Perspective, UnitKind};
use scorecard_core::status::Status;

/// Format a value in the metric's unit family; `None` renders as "N/D".
pub fn format_value(metric: &Metric, value: Option<f64>) -> String {
    let Some(v) = value else {
        return "N/D".to_string();
    };
    match metric.unit {
        UnitKind::Percentage => format!("{:.1}%", v * 100.0),
        UnitKind::Currency => format!("${v:.0}"),
        UnitKind::Count => format!("{v:.0}"),
        UnitKind::Hours => format!("{v:.1} h"),
        UnitKind::Days => format!("{v:.1} d"),
        UnitKind::Years => format!("{v:.1} y"),
        UnitKind::Ratio => format!("{v:.2}"),
    }
}

fn status_glyph(status: Status) -> &'static str {
    match status {
        Status::Green => "●",
        Status::Amber => "◐",
        Status::Red => "○",
        Status::Gray => "·",
    }
}

fn variance_arrow(card: &Scorecard, period: &Period, metric: &Metric) -> &'static str {
    match card.variance(period, &metric.key) {
        Some(v) if v > 0.0 => {
            if metric.higher_is_better { "▲" } else { "▲!" }
        }
        Some(v) if v < 0.0 => {
            if metric.higher_is_better { "▼!" } else { "▼" }
        }
        _ => " ",
    }
}

/// One period of the scorecard, grouped by perspective.
pub fn render_period(card: &Scorecard, period: &Period) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scorecard — {period}");

    for perspective in Perspective::ALL {
        let metrics: Vec<&Metric> = card
            .metrics()
            .iter()
            .filter(|m| m.perspective == perspective)
            .collect();
        if metrics.is_empty() {
            continue;
        }

        let _ = writeln!(out, "\n{}", perspective.label());
        for metric in metrics {
            let simulated = card.simulated().get(period, &metric.key);
            let status = card
                .status_of(period, &metric.key)
                .unwrap_or(Status::Gray);
            let target = card.target_for(period, &metric.key).unwrap_or(0.0);
            let _ = writeln!(
                out,
                "  {} {:<6} {:<42} {:>10}  target {:>10} {:>2} [{}]",
                status_glyph(status),
                metric.key,
                metric.name,
                format_value(metric, simulated),
                format_value(metric, Some(target)),
                variance_arrow(card, period, metric),
                status.label(),
            );
        }
    }
    out
}

/// Render an impact list with display names resolved from the catalog.
pub fn render_impacts(card: &Scorecard, title: &str, impacts: &[Impact]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{title}");
    if impacts.is_empty() {
        let _ = writeln!(out, "  (none)");
        return out;
    }
    for impact in impacts {
        let _ = writeln!(
            out,
            "  {:<42} → {:<42} {:+.2}%",
            metric_name(card, &impact.from),
            metric_name(card, &impact.to),
            impact.effect * 100.0,
        );
    }
    out
}

fn metric_name<'a>(card: &'a Scorecard, key: &'a MetricKey) -> &'a str {
    card.metric(key).map_or(key.as_str(), |m| m.name.as_str())
}
