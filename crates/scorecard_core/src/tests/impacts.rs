//! Tests for the one-hop impact attribution views

use crate::config::ModelBuilder;
use crate::impacts::{direct_impacts, lagged_impacts};
use crate::model::{MetricKey, Period, Perspective, Polarity, ScenarioInputs, UnitKind};
use crate::tests::assert_close;

/// Direct impacts fan a period's shocks across every outgoing edge and sort
/// by descending strength, regardless of edge lag.
#[test]
fn direct_impacts_sorted_by_strength() {
    let (_, _, _, _, edges, mut inputs) = ModelBuilder::new()
        .period("P1")
        .metric("A", "Driver A", Perspective::Learning, UnitKind::Percentage)
        .metric("B", "Driver B", Perspective::Learning, UnitKind::Percentage)
        .metric("X", "Sink X", Perspective::Process, UnitKind::Count)
        .metric("Y", "Sink Y", Perspective::Process, UnitKind::Count)
        .edge("A", "X", Polarity::Direct, 0.2, 0)
        .edge("A", "Y", Polarity::Inverse, 0.6, 2)
        .edge("B", "X", Polarity::Direct, 0.3, 0)
        .build_parts();

    inputs.set(Period::from("P1"), MetricKey::from("A"), 0.10);
    inputs.set(Period::from("P1"), MetricKey::from("B"), 0.10);

    let impacts = direct_impacts(&Period::from("P1"), &edges, &inputs);
    assert_eq!(impacts.len(), 3);

    // Strongest first: |−0.06| > |0.03| > |0.02|
    assert_eq!(impacts[0].to, MetricKey::from("Y"));
    assert_close(impacts[0].effect, -0.06);
    assert_eq!(impacts[1].from, MetricKey::from("B"));
    assert_close(impacts[1].effect, 0.03);
    assert_close(impacts[2].effect, 0.02);
}

/// Shocks at other periods do not appear in a period's direct view.
#[test]
fn direct_impacts_scoped_to_period() {
    let (_, _, _, _, edges, mut inputs) = ModelBuilder::new()
        .period("P1")
        .period("P2")
        .metric("A", "Driver", Perspective::Learning, UnitKind::Percentage)
        .metric("X", "Sink", Perspective::Process, UnitKind::Count)
        .edge("A", "X", Polarity::Direct, 0.5, 0)
        .build_parts();

    inputs.set(Period::from("P2"), MetricKey::from("A"), 0.10);
    assert!(direct_impacts(&Period::from("P1"), &edges, &inputs).is_empty());
}

/// A lag-1 edge's effect shows up in the lagged view one period after the
/// shock, and not in the shock period itself (no source before the first
/// period).
#[test]
fn lagged_impacts_respect_lag_and_sequence_start() {
    let (_, periods, _, _, edges, mut inputs) = ModelBuilder::new()
        .period("P1")
        .period("P2")
        .metric("A", "Driver", Perspective::Learning, UnitKind::Percentage)
        .metric("X", "Sink", Perspective::Process, UnitKind::Count)
        .edge("A", "X", Polarity::Direct, 0.5, 1)
        .build_parts();

    inputs.set(Period::from("P1"), MetricKey::from("A"), 0.20);

    let at_p2 = lagged_impacts(&Period::from("P2"), &periods, &edges, &inputs);
    assert_eq!(at_p2.len(), 1);
    assert_close(at_p2[0].effect, 0.10);

    let at_p1 = lagged_impacts(&Period::from("P1"), &periods, &edges, &inputs);
    assert!(at_p1.is_empty(), "lag-1 edge has no valid source at P1");
}

/// Explicitly stored zero shocks are skipped, and the view truncates to the
/// ten strongest effects.
#[test]
fn lagged_impacts_skip_zeros_and_truncate() {
    let mut builder = ModelBuilder::new()
        .period("P1")
        .metric("A", "Driver", Perspective::Learning, UnitKind::Percentage)
        .metric("Z", "Zeroed driver", Perspective::Learning, UnitKind::Percentage);
    for i in 0..12 {
        let key = format!("S{i:02}");
        builder = builder
            .metric(&key, "Sink", Perspective::Process, UnitKind::Count)
            .edge("A", &key, Polarity::Direct, 0.1 + 0.01 * i as f64, 0)
            .edge("Z", &key, Polarity::Direct, 0.9, 0);
    }
    let (_, periods, _, _, edges, _) = builder.build_parts();

    let mut inputs = ScenarioInputs::new();
    inputs.set(Period::from("P1"), MetricKey::from("A"), 0.10);
    inputs.set(Period::from("P1"), MetricKey::from("Z"), 0.0);

    let impacts = lagged_impacts(&Period::from("P1"), &periods, &edges, &inputs);
    assert_eq!(impacts.len(), 10, "twelve candidates, top ten reported");
    assert!(impacts.iter().all(|i| i.from == MetricKey::from("A")));
    // The two weakest outgoing edges (S00, S01) fell off the end
    assert!(impacts.iter().all(|i| i.to != MetricKey::from("S00")));
    assert!(impacts.iter().all(|i| i.to != MetricKey::from("S01")));
}
