//! Sensitivity sweeps across percentiles and scenarios
//!
//! Each point is an independent projection, so the sweep fans out over the
//! rayon pool and collects results back in request order.

use crate::error::Result;
use crate::inputs::{ModelInputs, PercentileRanges, Scenario};
use crate::projection::{CashTrough, ProjectionEngine, ProjectionResult};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

/// Percentiles swept when the caller does not choose
pub const DEFAULT_SWEEP_PERCENTILES: [f64; 9] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// Headline outcome of one projection in a sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub label: String,
    pub inputs: ModelInputs,
    pub break_even_month: Option<u32>,
    pub cash_trough: Option<CashTrough>,
    pub final_revenue: f64,
    pub final_active_customers: u64,
    pub ltv_cac_ratio: f64,
}

impl SweepPoint {
    fn from_result(label: String, result: &ProjectionResult) -> Self {
        let last = result.months.last();
        Self {
            label,
            inputs: result.inputs,
            break_even_month: result.summary.break_even_month,
            cash_trough: result.summary.cash_trough,
            final_revenue: last.map(|m| m.revenue).unwrap_or(0.0),
            final_active_customers: last.map(|m| m.active_customers).unwrap_or(0),
            ltv_cac_ratio: last.map(|m| m.ltv_cac_ratio).unwrap_or(0.0),
        }
    }
}

/// Project `base` adjusted to each percentile
///
/// Fails if any percentile is out of range or adjusts `base` into an
/// invalid input set.
pub fn percentile_sweep(
    engine: &ProjectionEngine,
    ranges: &PercentileRanges,
    base: &ModelInputs,
    percentiles: &[f64],
) -> Result<Vec<SweepPoint>> {
    debug!("sweeping {} percentiles", percentiles.len());
    percentiles
        .par_iter()
        .map(|&p| {
            let inputs = ranges.apply(base, p)?;
            let result = engine.run(&inputs)?;
            Ok(SweepPoint::from_result(format!("p{}", p), &result))
        })
        .collect()
}

/// Project the three presets side by side
pub fn compare_scenarios(engine: &ProjectionEngine) -> Result<Vec<SweepPoint>> {
    Scenario::ALL
        .par_iter()
        .map(|&scenario| {
            let result = engine.run(&scenario.inputs())?;
            Ok(SweepPoint::from_result(scenario.to_string(), &result))
        })
        .collect()
}
