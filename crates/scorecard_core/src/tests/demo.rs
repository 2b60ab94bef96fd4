//! Tests against the bundled factory-default model

use crate::demo;
use crate::model::{MetricKey, Period};
use crate::status::Status;

#[test]
fn demo_model_is_referentially_clean() {
    let card = demo::model();
    let issues = card.validate();
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn demo_model_shape() {
    let card = demo::model();
    assert_eq!(card.periods().len(), 24);
    assert_eq!(card.metrics().len(), 44);
    assert_eq!(card.edges().len(), 39);
    assert_eq!(
        card.periods().period_at(0),
        Some(&Period::from("2024-01"))
    );
    assert_eq!(
        card.periods().period_at(23),
        Some(&Period::from("2025-12"))
    );
}

/// With no shocks every simulated value equals its flat base fact, modulo
/// the unit-kind clamp (the ROI-style percentages sit above 1.0 in the base
/// data and are clamped even unshocked).
#[test]
fn demo_zero_shock_equals_clamped_base() {
    let card = demo::model();
    for row in card.simulated().iter() {
        let metric = card.metric(&row.metric).unwrap();
        let expected = card
            .base()
            .get(&row.period, &row.metric)
            .map(|b| metric.unit.clamp(b));
        assert_eq!(row.value, expected, "{} at {}", row.metric, row.period);
    }
}

/// Training drives test compliance with a one-month lag: a shock on K001 in
/// January lands on K047 in February (clamped at 100%).
#[test]
fn demo_training_shock_reaches_test_compliance() {
    let mut card = demo::model();
    card.set_shock(Period::from("2024-01"), MetricKey::from("K001"), 0.20);

    let feb = Period::from("2024-02");
    let k047 = MetricKey::from("K047");
    // 0.96 * (1 + 0.20 * 0.25) = 1.008, clamped to 1.0
    assert_eq!(card.simulated().get(&feb, &k047), Some(1.0));
    // January is untouched by the lag-1 edge
    assert_eq!(
        card.simulated().get(&Period::from("2024-01"), &k047),
        Some(0.96)
    );

    let impacts = card.lagged_impacts(&feb);
    assert!(
        impacts
            .iter()
            .any(|i| i.from == MetricKey::from("K001") && i.to == k047)
    );
}

/// The SPI/CPI stabilizer holds under an aggressive planning shock chain.
#[test]
fn demo_spi_cpi_stay_in_band() {
    let mut card = demo::model();
    for period in ["2024-01", "2024-02", "2024-03"] {
        card.set_shock(Period::from(period), MetricKey::from("K045"), 2.0);
        card.set_shock(Period::from(period), MetricKey::from("K006"), 2.0);
    }

    for row in card.simulated().iter() {
        let metric = card.metric(&row.metric).unwrap();
        if metric.name == "SPI" || metric.name == "CPI" {
            let v = row.value.unwrap();
            assert!((0.5..=1.5).contains(&v), "{} out of band: {v}", metric.name);
        }
    }
}

#[test]
fn demo_status_overview_is_mostly_healthy() {
    let card = demo::model();
    let p = Period::from("2024-01");
    let statuses: Vec<Status> = card
        .metrics()
        .iter()
        .map(|m| card.status_of(&p, &m.key).unwrap())
        .collect();

    // The factory data is tuned so nothing reads as missing and the bulk of
    // the scorecard is green.
    assert!(statuses.iter().all(|s| *s != Status::Gray));
    let green = statuses.iter().filter(|s| **s == Status::Green).count();
    assert!(green * 2 > statuses.len(), "expected a majority of greens");
}
