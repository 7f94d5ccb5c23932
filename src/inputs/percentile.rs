//! Percentile-driven parameter adjustment
//!
//! A single 10-90 percentile drives all six tunable inputs. Each field is
//! interpolated linearly between its p10/p50/p90 anchors, with the two halves
//! of the range interpolated separately so p50 always lands on the anchor.

use super::ModelInputs;
use crate::error::{ModelError, Result};
use crate::round_half_up;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Percentile the calculator starts from and resets to on scenario load
pub const DEFAULT_PERCENTILE: f64 = 50.0;

const MIN_PERCENTILE: f64 = 10.0;
const MAX_PERCENTILE: f64 = 90.0;

/// Anchor values for one parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

impl ParameterRange {
    pub const fn new(p10: f64, p50: f64, p90: f64) -> Self {
        Self { p10, p50, p90 }
    }

    /// Interpolated value at `percentile`, rounded half-up to a whole number
    ///
    /// Callers are expected to have checked the 10-90 range; values outside
    /// it extrapolate along the nearer segment.
    pub fn at(&self, percentile: f64) -> f64 {
        if percentile <= 50.0 {
            let ratio = (percentile - 10.0) / 40.0;
            round_half_up(self.p10 + (self.p50 - self.p10) * ratio)
        } else {
            let ratio = (percentile - 50.0) / 40.0;
            round_half_up(self.p50 + (self.p90 - self.p50) * ratio)
        }
    }
}

/// Anchor table for the six tunable inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentileRanges {
    #[serde(default = "default_orders_per_day")]
    pub orders_per_day: ParameterRange,
    #[serde(default = "default_aov")]
    pub aov: ParameterRange,
    #[serde(default = "default_cac")]
    pub cac: ParameterRange,
    #[serde(default = "default_monthly_churn")]
    pub monthly_churn: ParameterRange,
    #[serde(default = "default_contribution_margin")]
    pub contribution_margin: ParameterRange,
    #[serde(default = "default_fixed_costs")]
    pub fixed_costs_per_month: ParameterRange,
}

fn default_orders_per_day() -> ParameterRange { ParameterRange::new(20.0, 100.0, 200.0) }
fn default_aov() -> ParameterRange { ParameterRange::new(50.0, 95.0, 150.0) }
fn default_cac() -> ParameterRange { ParameterRange::new(40.0, 75.0, 120.0) }
fn default_monthly_churn() -> ParameterRange { ParameterRange::new(5.0, 10.0, 20.0) }
fn default_contribution_margin() -> ParameterRange { ParameterRange::new(25.0, 36.0, 50.0) }
fn default_fixed_costs() -> ParameterRange { ParameterRange::new(50_000.0, 85_000.0, 150_000.0) }

impl Default for PercentileRanges {
    fn default() -> Self {
        Self {
            orders_per_day: default_orders_per_day(),
            aov: default_aov(),
            cac: default_cac(),
            monthly_churn: default_monthly_churn(),
            contribution_margin: default_contribution_margin(),
            fixed_costs_per_month: default_fixed_costs(),
        }
    }
}

impl PercentileRanges {
    /// Load anchors from JSON; parameters missing from the file keep the
    /// default table
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let ranges = serde_json::from_reader(BufReader::new(file))?;
        debug!("loaded percentile ranges from {}", path.as_ref().display());
        Ok(ranges)
    }

    /// Replace the six tunable fields of `base` with their values at
    /// `percentile`. Investment is carried over unchanged.
    pub fn apply(&self, base: &ModelInputs, percentile: f64) -> Result<ModelInputs> {
        check_percentile(percentile)?;
        Ok(ModelInputs {
            investment: base.investment,
            orders_per_day: self.orders_per_day.at(percentile),
            aov: self.aov.at(percentile),
            cac: self.cac.at(percentile),
            monthly_churn: self.monthly_churn.at(percentile),
            contribution_margin: self.contribution_margin.at(percentile),
            fixed_costs_per_month: self.fixed_costs_per_month.at(percentile),
        })
    }
}

pub fn check_percentile(percentile: f64) -> Result<()> {
    if !(MIN_PERCENTILE..=MAX_PERCENTILE).contains(&percentile) {
        return Err(ModelError::PercentileOutOfRange(percentile));
    }
    Ok(())
}

/// Display label for a percentile position
pub fn percentile_label(percentile: f64) -> &'static str {
    if percentile <= 25.0 {
        "Conservative"
    } else if percentile <= 75.0 {
        "Balanced"
    } else {
        "Aggressive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Scenario;

    #[test]
    fn test_anchor_points() {
        let ranges = PercentileRanges::default();
        let base = Scenario::Balanced.inputs();

        let p10 = ranges.apply(&base, 10.0).unwrap();
        assert_eq!(p10.orders_per_day, 20.0);
        assert_eq!(p10.aov, 50.0);
        assert_eq!(p10.cac, 40.0);
        assert_eq!(p10.monthly_churn, 5.0);
        assert_eq!(p10.contribution_margin, 25.0);
        assert_eq!(p10.fixed_costs_per_month, 50_000.0);

        // p50 reproduces the balanced preset
        let p50 = ranges.apply(&base, 50.0).unwrap();
        assert_eq!(p50, base);

        let p90 = ranges.apply(&base, 90.0).unwrap();
        assert_eq!(p90.orders_per_day, 200.0);
        assert_eq!(p90.aov, 150.0);
        assert_eq!(p90.cac, 120.0);
        assert_eq!(p90.monthly_churn, 20.0);
        assert_eq!(p90.contribution_margin, 50.0);
        assert_eq!(p90.fixed_costs_per_month, 150_000.0);
    }

    #[test]
    fn test_interpolation_rounds_half_up() {
        let ranges = PercentileRanges::default();
        let base = Scenario::Balanced.inputs();

        // aov at p30: 50 + 45 * 0.5 = 72.5 -> 73
        let p30 = ranges.apply(&base, 30.0).unwrap();
        assert_eq!(p30.orders_per_day, 60.0);
        assert_eq!(p30.aov, 73.0);
        assert_eq!(p30.contribution_margin, 31.0); // 30.5 -> 31

        let p70 = ranges.apply(&base, 70.0).unwrap();
        assert_eq!(p70.monthly_churn, 15.0);
        assert_eq!(p70.fixed_costs_per_month, 117_500.0);
        assert_eq!(p70.cac, 98.0); // 97.5 -> 98
    }

    #[test]
    fn test_investment_preserved() {
        let ranges = PercentileRanges::default();
        let base = Scenario::Aggressive.inputs();
        let adjusted = ranges.apply(&base, 20.0).unwrap();
        assert_eq!(adjusted.investment, 500_000.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let ranges = PercentileRanges::default();
        let base = ModelInputs::default();
        assert!(matches!(
            ranges.apply(&base, 5.0),
            Err(ModelError::PercentileOutOfRange(p)) if p == 5.0
        ));
        assert!(ranges.apply(&base, 95.0).is_err());
        assert!(ranges.apply(&base, f64::NAN).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(percentile_label(10.0), "Conservative");
        assert_eq!(percentile_label(25.0), "Conservative");
        assert_eq!(percentile_label(50.0), "Balanced");
        assert_eq!(percentile_label(75.0), "Balanced");
        assert_eq!(percentile_label(76.0), "Aggressive");
    }

    #[test]
    fn test_partial_ranges_json_uses_defaults() {
        let json = r#"{ "aov": { "p10": 60.0, "p50": 100.0, "p90": 160.0 } }"#;
        let ranges: PercentileRanges = serde_json::from_str(json).unwrap();
        assert_eq!(ranges.aov.p50, 100.0);
        assert_eq!(ranges.cac, ParameterRange::new(40.0, 75.0, 120.0));
    }

    #[test]
    fn test_ranges_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranges.json");
        std::fs::write(
            &path,
            r#"{ "ordersPerDay": { "p10": 40.0, "p50": 120.0, "p90": 300.0 } }"#,
        )
        .unwrap();

        let ranges = PercentileRanges::from_json_file(&path).unwrap();
        assert_eq!(ranges.orders_per_day.at(90.0), 300.0);
        assert_eq!(ranges.monthly_churn, ParameterRange::new(5.0, 10.0, 20.0));

        let missing = PercentileRanges::from_json_file(dir.path().join("absent.json"));
        assert!(matches!(missing, Err(ModelError::Io { .. })));
    }
}
