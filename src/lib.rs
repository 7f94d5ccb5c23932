//! Growth projection model for a food-commerce investment pitch
//!
//! Turns a handful of business parameters (orders per day, order value,
//! acquisition cost, churn, margin, fixed costs) into a monthly projection of
//! customers, revenue, profitability and cash. Presets, percentile-driven
//! adjustment, currency conversion and report export sit around the engine.

pub mod error;
pub mod inputs;
pub mod projection;
pub mod currency;
pub mod export;
pub mod session;
pub mod store;
pub mod sweep;

pub use error::{ModelError, Result};
pub use inputs::{ModelInputs, InputOverrides, Scenario, PercentileRanges};
pub use projection::{ProjectionEngine, ProjectionConfig, MonthlyMetrics, ProjectionResult, Runway};
pub use currency::Currency;
pub use session::Session;
pub use store::{InputStore, SavedSession};

/// Round to the nearest integer with halves going up (towards +∞)
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::round_half_up;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(72.5), 73.0);
    }

    #[test]
    fn test_round_half_up_just_below_half() {
        // Adding 0.5 first would round this up to 1
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.49999999999999994), 0.0);
        assert_eq!(round_half_up(4_503_599_627_370_495.5), 4_503_599_627_370_496.0);
    }
}
