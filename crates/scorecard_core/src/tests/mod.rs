//! Integration tests for the scorecard engine
//!
//! Tests are organized by topic:
//! - `propagation` - Core relaxation mechanics, clamps, undefined handling
//! - `impacts` - Direct and lagged one-hop attribution views
//! - `status` - Traffic-light classification bands
//! - `scorecard` - Owner state, shock mutation and recompute coherence
//! - `validate` - Pre-flight referential and period-sequence checks
//! - `demo` - The bundled factory-default model

mod demo;
mod impacts;
mod scorecard;
mod status;

/// Tolerance for comparing propagated values that go through non-exact
/// float products.
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
