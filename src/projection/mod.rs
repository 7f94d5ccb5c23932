//! Projection engine for the monthly unit-economics model

mod growth;
mod state;
mod engine;
mod metrics;
mod summary;

pub use growth::{GrowthSchedule, GrowthTier};
pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use metrics::{MonthlyMetrics, Runway, sample_every};
pub use summary::{ProjectionResult, ProjectionSummary, CashTrough};

// ============================================================================
// Model Constants
// ============================================================================
// Defaults for ProjectionConfig. The growth tiers live in GrowthSchedule.
// - Order volume is converted to months at a flat 30 days
// - Active customers place 2.5 orders a month; new ones 1.2 in their first

/// Number of months simulated by default
pub const DEFAULT_PROJECTION_MONTHS: u32 = 60;

/// Days per month used to convert daily orders to monthly volume
pub const DEFAULT_DAYS_PER_MONTH: f64 = 30.0;

/// Orders placed per active customer per month
pub const DEFAULT_ORDERS_PER_ACTIVE_CUSTOMER: f64 = 2.5;

/// Orders placed by a newly acquired customer in their first month
pub const DEFAULT_NEW_CUSTOMER_ORDER_MULTIPLE: f64 = 1.2;

/// Total addressable market (AED), used for market penetration only
pub const DEFAULT_TAM: f64 = 4_200_000_000.0;

/// Month whose metrics headline the summary
pub const HEADLINE_MONTH: u32 = 12;

/// Step between chart samples
pub const CHART_SAMPLE_STEP: usize = 6;
