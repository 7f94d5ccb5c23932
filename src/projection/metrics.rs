//! Monthly output rows

use serde::{Deserialize, Serialize};
use std::fmt;

/// Months of cash left at the current burn rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Runway {
    Months(f64),
    /// Not burning cash (EBITDA is zero or positive)
    Unbounded,
}

impl Runway {
    pub fn months(&self) -> Option<f64> {
        match self {
            Runway::Months(m) => Some(*m),
            Runway::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Runway::Unbounded)
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runway::Months(m) => write!(f, "{:.1}", m),
            Runway::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// One simulated month. Currency amounts are in AED.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetrics {
    /// Projection month (1-indexed)
    pub month: u32,
    pub new_customers: u64,
    pub active_customers: u64,
    pub revenue: f64,
    pub gross_profit: f64,
    /// Acquisition spend for the month (new customers × CAC)
    pub customer_acquisition_cost: f64,
    pub ebitda: f64,
    pub cumulative_cash: f64,
    pub ltv: f64,
    pub ltv_cac_ratio: f64,

    /// Monthly recurring revenue; equal to revenue in this model
    pub mrr: f64,
    pub arpu: f64,
    /// Gross margin percent (the contribution margin input)
    pub gross_margin: f64,
    pub burn_rate: f64,
    pub runway: Runway,
    /// Annualised revenue as a percent of TAM
    pub market_penetration: f64,
    /// Revenue / fixed costs
    pub operating_leverage: f64,
    /// No depreciation, interest or tax, so this equals EBITDA
    pub net_income: f64,
    /// Active customers × LTV
    pub customer_cohort_value: f64,
}

/// Every `step`-th row starting from month 1, the series a chart plots
pub fn sample_every(rows: &[MonthlyMetrics], step: usize) -> impl Iterator<Item = &MonthlyMetrics> {
    rows.iter()
        .enumerate()
        .filter(move |(idx, _)| step != 0 && idx % step == 0)
        .map(|(_, row)| row)
}
