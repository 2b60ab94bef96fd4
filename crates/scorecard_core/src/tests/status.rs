//! Tests for the traffic-light classifier

use crate::status::{Status, classify};

#[test]
fn higher_is_better_bands() {
    // Green at or above target
    assert_eq!(classify(Some(1.00), 1.0, true), Status::Green);
    assert_eq!(classify(Some(1.20), 1.0, true), Status::Green);
    // Amber down to 95% of target, boundary included
    assert_eq!(classify(Some(0.95), 1.0, true), Status::Amber);
    assert_eq!(classify(Some(0.97), 1.0, true), Status::Amber);
    // Red below
    assert_eq!(classify(Some(0.94), 1.0, true), Status::Red);
}

#[test]
fn lower_is_better_bands() {
    assert_eq!(classify(Some(4.0), 4.0, false), Status::Green);
    assert_eq!(classify(Some(3.5), 4.0, false), Status::Green);
    assert_eq!(classify(Some(4.2), 4.0, false), Status::Amber);
    assert_eq!(classify(Some(4.3), 4.0, false), Status::Red);
}

/// Undefined values are Gray no matter the target or direction.
#[test]
fn undefined_is_gray() {
    assert_eq!(classify(None, 1.0, true), Status::Gray);
    assert_eq!(classify(None, 0.0, false), Status::Gray);
}

/// The bands order best-to-worst, with "no data" after everything measurable.
#[test]
fn bands_are_totally_ordered() {
    assert!(Status::Green < Status::Amber);
    assert!(Status::Amber < Status::Red);
    assert!(Status::Red < Status::Gray);
}
