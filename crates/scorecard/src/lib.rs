//! CLI front end for the scorecard simulation library.
//!
//! Loads the bundled demo model, applies shocks given on the command line,
//! and prints the resulting scorecard and impact attribution for a period.
//! All modelling logic lives in `scorecard_core`; this crate is display and
//! argument plumbing only.

mod logging;
pub mod report;
mod shock;

pub use logging::init_logging;
pub use shock::ShockSpec;
