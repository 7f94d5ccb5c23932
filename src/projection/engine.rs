//! Month-by-month projection
//!
//! The engine is a fold over the projection months. Only the active customer
//! count and cumulative cash carry from one month to the next; everything else
//! is derived from the inputs and that month's carried state.

use super::{
    GrowthSchedule, MonthlyMetrics, ProjectionResult, ProjectionState, Runway,
    DEFAULT_DAYS_PER_MONTH, DEFAULT_NEW_CUSTOMER_ORDER_MULTIPLE,
    DEFAULT_ORDERS_PER_ACTIVE_CUSTOMER, DEFAULT_PROJECTION_MONTHS, DEFAULT_TAM,
};
use crate::error::Result;
use crate::inputs::ModelInputs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Model constants; the defaults reproduce the published calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionConfig {
    #[serde(default = "default_projection_months")]
    pub projection_months: u32,

    #[serde(default = "default_days_per_month")]
    pub days_per_month: f64,

    #[serde(default = "default_orders_per_active_customer")]
    pub orders_per_active_customer: f64,

    #[serde(default = "default_new_customer_order_multiple")]
    pub new_customer_order_multiple: f64,

    /// Total addressable market (AED)
    #[serde(default = "default_tam")]
    pub tam: f64,

    #[serde(default)]
    pub growth: GrowthSchedule,
}

fn default_projection_months() -> u32 { DEFAULT_PROJECTION_MONTHS }
fn default_days_per_month() -> f64 { DEFAULT_DAYS_PER_MONTH }
fn default_orders_per_active_customer() -> f64 { DEFAULT_ORDERS_PER_ACTIVE_CUSTOMER }
fn default_new_customer_order_multiple() -> f64 { DEFAULT_NEW_CUSTOMER_ORDER_MULTIPLE }
fn default_tam() -> f64 { DEFAULT_TAM }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            projection_months: DEFAULT_PROJECTION_MONTHS,
            days_per_month: DEFAULT_DAYS_PER_MONTH,
            orders_per_active_customer: DEFAULT_ORDERS_PER_ACTIVE_CUSTOMER,
            new_customer_order_multiple: DEFAULT_NEW_CUSTOMER_ORDER_MULTIPLE,
            tam: DEFAULT_TAM,
            growth: GrowthSchedule::default(),
        }
    }
}

impl ProjectionConfig {
    /// Load from a JSON file; fields missing from the file keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        debug!("loaded projection config from {}", path.as_ref().display());
        Ok(config)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Validate `inputs`, then project them
    pub fn run(&self, inputs: &ModelInputs) -> Result<ProjectionResult> {
        if let Err(err) = inputs.validate() {
            warn!("rejecting projection inputs: {}", err);
            return Err(err);
        }
        let months = self.project(inputs);
        Ok(ProjectionResult::new(*inputs, months))
    }

    /// Project every month without validating
    ///
    /// Total and deterministic. Zero churn or CAC is not caught here and
    /// shows up as non-finite LTV figures; use [`run`](Self::run) at
    /// boundaries that accept user input.
    pub fn project(&self, inputs: &ModelInputs) -> Vec<MonthlyMetrics> {
        let mut state = ProjectionState::initial(inputs);
        let rows: Vec<MonthlyMetrics> = (1..=self.config.projection_months)
            .map(|month| self.project_month(inputs, month, &mut state))
            .collect();

        debug!(
            "projected {} months: final active customers {}, cumulative cash {:.0}",
            rows.len(),
            state.active_customers,
            state.cumulative_cash
        );
        rows
    }

    fn project_month(
        &self,
        inputs: &ModelInputs,
        month: u32,
        state: &mut ProjectionState,
    ) -> MonthlyMetrics {
        let cfg = &self.config;
        let churn = inputs.monthly_churn / 100.0;
        let margin = inputs.contribution_margin / 100.0;

        // Order volume
        let monthly_orders = cfg.growth.daily_orders(inputs.orders_per_day, month) * cfg.days_per_month;

        // Customer dynamics: replace at least the churned base, otherwise
        // acquire enough to cover orders the existing base does not place
        let active_before = state.active_customers as f64;
        let churned = (active_before * churn).round() as u64;
        let orders_from_active = active_before * cfg.orders_per_active_customer;
        let orders_from_new = (monthly_orders - orders_from_active).max(0.0);
        let acquired = (orders_from_new / cfg.new_customer_order_multiple).round() as u64;
        let new_customers = churned.max(acquired);

        // P&L
        let revenue = monthly_orders * inputs.aov;
        let gross_profit = revenue * margin;
        let customer_acquisition_cost = new_customers as f64 * inputs.cac;
        let ebitda = gross_profit - customer_acquisition_cost - inputs.fixed_costs_per_month;
        let net_income = gross_profit - (customer_acquisition_cost + inputs.fixed_costs_per_month);

        state.advance(churned, new_customers, ebitda);
        let active_customers = state.active_customers;
        let cumulative_cash = state.cumulative_cash;

        // Unit economics
        let avg_lifespan_months = 1.0 / churn;
        let ltv = inputs.aov * margin * avg_lifespan_months;
        let ltv_cac_ratio = ltv / inputs.cac;

        let arpu = if active_customers > 0 {
            revenue / active_customers as f64
        } else {
            0.0
        };
        let burn_rate = if ebitda < 0.0 { -ebitda } else { 0.0 };
        let runway = if burn_rate > 0.0 {
            Runway::Months((cumulative_cash / burn_rate).max(0.0))
        } else {
            Runway::Unbounded
        };
        let operating_leverage = if inputs.fixed_costs_per_month > 0.0 {
            revenue / inputs.fixed_costs_per_month
        } else {
            0.0
        };

        MonthlyMetrics {
            month,
            new_customers,
            active_customers,
            revenue,
            gross_profit,
            customer_acquisition_cost,
            ebitda,
            cumulative_cash,
            ltv,
            ltv_cac_ratio,
            mrr: revenue,
            arpu,
            gross_margin: inputs.contribution_margin,
            burn_rate,
            runway,
            market_penetration: revenue * 12.0 / cfg.tam * 100.0,
            operating_leverage,
            net_income,
            customer_cohort_value: active_customers as f64 * ltv,
        }
    }
}
