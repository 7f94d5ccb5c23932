//! Input parameter set for a single projection

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Business parameters driving the projection
///
/// All currency amounts are in the base currency (AED). Percentages are
/// expressed on a 0-100 scale, not as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInputs {
    /// Up-front capital; seeds cumulative cash at `-investment`
    pub investment: f64,

    /// Orders per day in month 1, before growth
    pub orders_per_day: f64,

    /// Average order value
    pub aov: f64,

    /// Cost to acquire one new customer
    pub cac: f64,

    /// Monthly churn (percent, 0-100)
    pub monthly_churn: f64,

    /// Contribution margin (percent, 0-100)
    pub contribution_margin: f64,

    pub fixed_costs_per_month: f64,
}

impl Default for ModelInputs {
    fn default() -> Self {
        super::Scenario::Balanced.inputs()
    }
}

impl ModelInputs {
    /// Check the parameter set before it reaches the engine
    ///
    /// The engine divides by churn and CAC, so both must be strictly
    /// positive. Returns the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields: [(&'static str, f64); 7] = [
            ("investment", self.investment),
            ("ordersPerDay", self.orders_per_day),
            ("aov", self.aov),
            ("cac", self.cac),
            ("monthlyChurn", self.monthly_churn),
            ("contributionMargin", self.contribution_margin),
            ("fixedCostsPerMonth", self.fixed_costs_per_month),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, value, "must be a finite number"));
            }
        }

        non_negative("investment", self.investment)?;
        non_negative("ordersPerDay", self.orders_per_day)?;
        non_negative("aov", self.aov)?;
        non_negative("fixedCostsPerMonth", self.fixed_costs_per_month)?;

        if self.cac <= 0.0 {
            return Err(invalid("cac", self.cac, "must be greater than zero"));
        }
        if self.monthly_churn <= 0.0 || self.monthly_churn > 100.0 {
            return Err(invalid(
                "monthlyChurn",
                self.monthly_churn,
                "must be in the range (0, 100]",
            ));
        }
        if !(0.0..=100.0).contains(&self.contribution_margin) {
            return Err(invalid(
                "contributionMargin",
                self.contribution_margin,
                "must be in the range [0, 100]",
            ));
        }
        Ok(())
    }

    /// Apply partial slider changes on top of this parameter set
    pub fn with_overrides(&self, overrides: &InputOverrides) -> Self {
        Self {
            investment: overrides.investment.unwrap_or(self.investment),
            orders_per_day: overrides.orders_per_day.unwrap_or(self.orders_per_day),
            aov: overrides.aov.unwrap_or(self.aov),
            cac: overrides.cac.unwrap_or(self.cac),
            monthly_churn: overrides.monthly_churn.unwrap_or(self.monthly_churn),
            contribution_margin: overrides
                .contribution_margin
                .unwrap_or(self.contribution_margin),
            fixed_costs_per_month: overrides
                .fixed_costs_per_month
                .unwrap_or(self.fixed_costs_per_month),
        }
    }
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> ModelError {
    ModelError::InvalidParameter { field, value, reason }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(invalid(field, value, "must not be negative"));
    }
    Ok(())
}

/// Partial update of [`ModelInputs`]; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputOverrides {
    pub investment: Option<f64>,
    pub orders_per_day: Option<f64>,
    pub aov: Option<f64>,
    pub cac: Option<f64>,
    pub monthly_churn: Option<f64>,
    pub contribution_margin: Option<f64>,
    pub fixed_costs_per_month: Option<f64>,
}

impl InputOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
