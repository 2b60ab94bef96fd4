//! Tests for the owning Scorecard state
//!
//! These verify the explicit ownership model: every shock mutation is
//! followed synchronously by a full recompute, and readers only ever see a
//! coherent table.

use crate::config::ModelBuilder;
use crate::model::{MetricKey, Period, Perspective, Polarity, UnitKind};
use crate::status::Status;

fn card() -> crate::Scorecard {
    ModelBuilder::new()
        .period("2024-01")
        .period("2024-02")
        .metric("A", "Driver", Perspective::Learning, UnitKind::Percentage)
        .metric("B", "Outcome", Perspective::Process, UnitKind::Count)
        .target_default("B", 100.0)
        .fact("2024-01", "A", 0.5)
        .fact("2024-01", "B", 100.0)
        .fact("2024-02", "B", 100.0)
        .edge("A", "B", Polarity::Direct, 0.5, 0)
        .build()
}

#[test]
fn set_shock_recomputes_synchronously() {
    let mut card = card();
    let p1 = Period::from("2024-01");
    let b = MetricKey::from("B");

    assert_eq!(card.simulated().get(&p1, &b), Some(100.0));
    card.set_shock(p1.clone(), MetricKey::from("A"), 0.10);
    assert_eq!(card.simulated().get(&p1, &b), Some(105.0));
    card.remove_shock(&p1, &MetricKey::from("A"));
    assert_eq!(card.simulated().get(&p1, &b), Some(100.0));
}

/// A zero delta removes the entry rather than storing a zero shock, matching
/// the entry-form behavior the views expect.
#[test]
fn zero_delta_removes_entry() {
    let mut card = card();
    let p1 = Period::from("2024-01");
    let a = MetricKey::from("A");

    card.set_shock(p1.clone(), a.clone(), 0.10);
    assert_eq!(card.inputs().len(), 1);
    card.set_shock(p1.clone(), a.clone(), 0.0);
    assert!(card.inputs().is_empty());
}

#[test]
fn clear_shocks_restores_baseline() {
    let mut card = card();
    card.set_shock(Period::from("2024-01"), MetricKey::from("A"), 0.10);
    card.set_shock(Period::from("2024-02"), MetricKey::from("A"), -0.20);
    card.clear_shocks();
    assert!(card.inputs().is_empty());
    assert_eq!(
        card.simulated()
            .get(&Period::from("2024-01"), &MetricKey::from("B")),
        Some(100.0)
    );
}

/// Per-period targets win over the metric's default target.
#[test]
fn target_falls_back_to_default() {
    let card = ModelBuilder::new()
        .period("2024-01")
        .period("2024-02")
        .metric("B", "Outcome", Perspective::Process, UnitKind::Count)
        .target_default("B", 100.0)
        .target("2024-02", "B", 120.0)
        .build();

    let b = MetricKey::from("B");
    assert_eq!(card.target_for(&Period::from("2024-01"), &b), Some(100.0));
    assert_eq!(card.target_for(&Period::from("2024-02"), &b), Some(120.0));
}

#[test]
fn status_uses_resolved_target() {
    let mut card = card();
    let p1 = Period::from("2024-01");
    let b = MetricKey::from("B");

    // At target
    assert_eq!(card.status_of(&p1, &b), Some(Status::Green));
    // Push B below 95% of its 100.0 target
    card.set_shock(p1.clone(), MetricKey::from("A"), -0.20);
    assert_eq!(card.status_of(&p1, &b), Some(Status::Red));
    // Unknown keys classify as nothing, not as Gray
    assert_eq!(card.status_of(&p1, &MetricKey::from("NOPE")), None);
}

#[test]
fn variance_is_simulated_minus_base() {
    let mut card = card();
    card.set_shock(Period::from("2024-01"), MetricKey::from("A"), 0.10);
    let v = card
        .variance(&Period::from("2024-01"), &MetricKey::from("B"))
        .unwrap();
    assert!((v - 5.0).abs() < 1e-9);
}
