//! State carried from one projection month to the next

use crate::inputs::ModelInputs;

/// Running totals threaded through the monthly fold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    pub active_customers: u64,
    /// Seeded at `-investment`
    pub cumulative_cash: f64,
}

impl ProjectionState {
    pub fn initial(inputs: &ModelInputs) -> Self {
        Self {
            active_customers: 0,
            cumulative_cash: -inputs.investment,
        }
    }

    /// Roll the customer base and cash balance forward one month
    ///
    /// `new_customers` is never below `churned`, so adding before
    /// subtracting cannot underflow.
    pub fn advance(&mut self, churned: u64, new_customers: u64, ebitda: f64) {
        self.active_customers = (self.active_customers + new_customers).saturating_sub(churned);
        self.cumulative_cash += ebitda;
    }
}
