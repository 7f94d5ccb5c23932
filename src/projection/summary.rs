//! Projection results and headline figures

use super::{MonthlyMetrics, HEADLINE_MONTH};
use crate::inputs::ModelInputs;
use serde::{Deserialize, Serialize};

/// Lowest cumulative cash position and when it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashTrough {
    pub month: u32,
    pub cumulative_cash: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    /// Month 12, or the last month of a shorter projection
    pub headline: Option<MonthlyMetrics>,
    /// First month with non-negative EBITDA
    pub break_even_month: Option<u32>,
    pub cash_trough: Option<CashTrough>,
    pub final_cumulative_cash: Option<f64>,
    pub total_revenue: f64,
}

impl ProjectionSummary {
    pub fn from_months(months: &[MonthlyMetrics]) -> Self {
        let headline = months
            .iter()
            .find(|m| m.month == HEADLINE_MONTH)
            .or_else(|| months.last())
            .cloned();

        let break_even_month = months.iter().find(|m| m.ebitda >= 0.0).map(|m| m.month);

        let cash_trough = months
            .iter()
            .min_by(|a, b| a.cumulative_cash.total_cmp(&b.cumulative_cash))
            .map(|m| CashTrough {
                month: m.month,
                cumulative_cash: m.cumulative_cash,
            });

        Self {
            headline,
            break_even_month,
            cash_trough,
            final_cumulative_cash: months.last().map(|m| m.cumulative_cash),
            total_revenue: months.iter().map(|m| m.revenue).sum(),
        }
    }
}

/// Output of a validated projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub inputs: ModelInputs,
    pub months: Vec<MonthlyMetrics>,
    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    pub fn new(inputs: ModelInputs, months: Vec<MonthlyMetrics>) -> Self {
        let summary = ProjectionSummary::from_months(&months);
        Self { inputs, months, summary }
    }

    /// Month lookup (1-indexed)
    pub fn month(&self, month: u32) -> Option<&MonthlyMetrics> {
        month
            .checked_sub(1)
            .and_then(|idx| self.months.get(idx as usize))
    }
}
