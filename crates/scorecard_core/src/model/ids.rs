//! Identifiers for scorecard entities
//!
//! Metrics and periods are keyed by opaque labels supplied by the external
//! data source. Each gets its own newtype so a period can never be used
//! where a metric key is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a metric (KPI) within a catalog, e.g. `"K030"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MetricKey(pub String);

impl MetricKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MetricKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// Chronological period label, e.g. `"2024-03"`.
///
/// Periods are opaque to the engine: lag arithmetic is done on positions in
/// the ordered period sequence, never on the label text. The sequence must be
/// contiguous at monthly granularity for lags to mean calendar months
/// (checked by [`crate::validate`], not by the engine).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period(pub String);

impl Period {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Period {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}
