//! Command-line shock syntax: `KEY=DELTA@PERIOD`, e.g. `K001=+0.10@2024-01`.

use std::str::FromStr;

use scorecard_core::model::{MetricKey, Period};

/// A parsed `--shock` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ShockSpec {
    pub metric: MetricKey,
    pub period: Period,
    pub delta: f64,
}

impl FromStr for ShockSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (metric, rest) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=DELTA@PERIOD, got `{s}`"))?;
        let (delta, period) = rest
            .split_once('@')
            .ok_or_else(|| format!("expected KEY=DELTA@PERIOD, got `{s}`"))?;
        let delta: f64 = delta
            .parse()
            .map_err(|_| format!("delta `{delta}` is not a number"))?;
        if metric.is_empty() || period.is_empty() {
            return Err(format!("expected KEY=DELTA@PERIOD, got `{s}`"));
        }
        Ok(Self {
            metric: MetricKey::from(metric),
            period: Period::from(period),
            delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_deltas() {
        let spec: ShockSpec = "K001=+0.10@2024-01".parse().unwrap();
        assert_eq!(spec.metric, MetricKey::from("K001"));
        assert_eq!(spec.period, Period::from("2024-01"));
        assert!((spec.delta - 0.10).abs() < 1e-12);

        let spec: ShockSpec = "K030=-0.25@2025-06".parse().unwrap();
        assert!(spec.delta < 0.0);
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!("K001".parse::<ShockSpec>().is_err());
        assert!("K001=abc@2024-01".parse::<ShockSpec>().is_err());
        assert!("=0.1@2024-01".parse::<ShockSpec>().is_err());
        assert!("K001=0.1@".parse::<ShockSpec>().is_err());
    }
}
