//! Balanced-scorecard causal simulation library
//!
//! This crate models how shocks to driver metrics propagate through a
//! declared causal graph into other metrics over time. It provides:
//! - A metric catalog with perspectives, unit kinds and targets
//! - Sparse base/target fact tables with explicit "no data" semantics
//! - A directed, signed, weighted, lagged influence graph
//! - A fixed-sweep Gauss–Seidel propagation engine
//! - One-hop impact attribution views and a traffic-light status classifier
//! - A validation pass for everything the engine silently absorbs
//!
//! # Quick start
//!
//! ```
//! use scorecard_core::config::ModelBuilder;
//! use scorecard_core::model::{Perspective, Polarity, UnitKind};
//!
//! let mut card = ModelBuilder::new()
//!     .months(2024, 1, 2)
//!     .metric("A", "Driver", Perspective::Learning, UnitKind::Percentage)
//!     .metric("B", "Outcome", Perspective::Financial, UnitKind::Count)
//!     .fact("2024-01", "B", 100.0)
//!     .edge("A", "B", Polarity::Direct, 0.5, 0)
//!     .build();
//!
//! card.set_shock("2024-01".into(), "A".into(), 0.10);
//! let b = card.simulated().get(&"2024-01".into(), &"B".into());
//! assert_eq!(b, Some(105.0));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod demo;
pub mod error;
pub mod impacts;
pub mod periods;
pub mod scorecard;
pub mod simulation;
pub mod status;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::ModelBuilder;
pub use periods::PeriodIndex;
pub use scorecard::Scorecard;
pub use simulation::{DEFAULT_SWEEPS, simulate, simulate_with_sweeps};
pub use status::{Status, classify};
