//! Calculator session
//!
//! Holds what the user has currently selected and recomputes the projection
//! on demand. Every change replaces the whole input set, so a partially
//! applied scenario or percentile is never visible.

use crate::currency::Currency;
use crate::error::Result;
use crate::inputs::percentile::check_percentile;
use crate::inputs::{InputOverrides, ModelInputs, PercentileRanges, Scenario, DEFAULT_PERCENTILE};
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::store::SavedSession;
use crate::sweep::{self, SweepPoint};
use log::debug;

#[derive(Debug, Clone)]
pub struct Session {
    engine: ProjectionEngine,
    ranges: PercentileRanges,
    scenario: Scenario,
    percentile: f64,
    currency: Currency,
    inputs: ModelInputs,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ProjectionEngine::default())
    }
}

impl Session {
    /// Start from the balanced preset at the 50th percentile, in AED
    pub fn new(engine: ProjectionEngine) -> Self {
        Self {
            engine,
            ranges: PercentileRanges::default(),
            scenario: Scenario::default(),
            percentile: DEFAULT_PERCENTILE,
            currency: Currency::default(),
            inputs: Scenario::default().inputs(),
        }
    }

    /// Rebuild a session from a persisted echo
    pub fn restore(engine: ProjectionEngine, saved: &SavedSession) -> Self {
        Self {
            scenario: saved.scenario,
            percentile: saved.percentile,
            currency: saved.currency,
            inputs: saved.inputs,
            ..Self::new(engine)
        }
    }

    pub fn with_ranges(mut self, ranges: PercentileRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn inputs(&self) -> &ModelInputs {
        &self.inputs
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Anchor table used by [`set_percentile`](Self::set_percentile)
    pub fn ranges(&self) -> &PercentileRanges {
        &self.ranges
    }

    /// Replace all inputs with a preset and reset the percentile
    pub fn load_scenario(&mut self, scenario: Scenario) {
        debug!("loading {} scenario", scenario);
        self.scenario = scenario;
        self.inputs = scenario.inputs();
        self.percentile = DEFAULT_PERCENTILE;
    }

    /// Move all six tunable inputs to `percentile`
    ///
    /// On error the session is left unchanged.
    pub fn set_percentile(&mut self, percentile: f64) -> Result<()> {
        check_percentile(percentile)?;
        self.inputs = self.ranges.apply(&self.inputs, percentile)?;
        self.percentile = percentile;
        debug!("percentile set to {}", percentile);
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &InputOverrides) {
        self.inputs = self.inputs.with_overrides(overrides);
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// Validate the current inputs and project them
    pub fn project(&self) -> Result<ProjectionResult> {
        self.engine.run(&self.inputs)
    }

    /// Project the current inputs moved to each percentile, using this
    /// session's anchor table
    pub fn sweep(&self, percentiles: &[f64]) -> Result<Vec<SweepPoint>> {
        sweep::percentile_sweep(&self.engine, &self.ranges, &self.inputs, percentiles)
    }

    /// Snapshot for the input store
    pub fn snapshot(&self) -> SavedSession {
        SavedSession::new(self.inputs, self.scenario, self.percentile, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::inputs::ParameterRange;

    #[test]
    fn test_defaults() {
        let session = Session::default();
        assert_eq!(session.scenario(), Scenario::Balanced);
        assert_eq!(session.percentile(), 50.0);
        assert_eq!(session.currency(), Currency::Aed);
        assert_eq!(*session.inputs(), Scenario::Balanced.inputs());
    }

    #[test]
    fn test_load_scenario_resets_percentile() {
        let mut session = Session::default();
        session.set_percentile(80.0).unwrap();
        session.load_scenario(Scenario::Aggressive);

        assert_eq!(session.percentile(), 50.0);
        assert_eq!(*session.inputs(), Scenario::Aggressive.inputs());
    }

    #[test]
    fn test_set_percentile_keeps_investment() {
        let mut session = Session::default();
        session.load_scenario(Scenario::Conservative);
        session.set_percentile(90.0).unwrap();

        let inputs = session.inputs();
        assert_eq!(inputs.investment, 300_000.0);
        assert_eq!(inputs.orders_per_day, 200.0);
        assert_eq!(inputs.fixed_costs_per_month, 150_000.0);
    }

    #[test]
    fn test_invalid_percentile_leaves_session_untouched() {
        let mut session = Session::default();
        let before = *session.inputs();
        let err = session.set_percentile(95.0).unwrap_err();

        assert!(matches!(err, ModelError::PercentileOutOfRange(_)));
        assert_eq!(*session.inputs(), before);
        assert_eq!(session.percentile(), 50.0);
    }

    #[test]
    fn test_overrides_then_project() {
        let mut session = Session::default();
        session.apply_overrides(&InputOverrides {
            orders_per_day: Some(200.0),
            ..Default::default()
        });
        let result = session.project().unwrap();
        assert_eq!(result.inputs.orders_per_day, 200.0);
        assert_eq!(result.months[0].new_customers, 5000);

        session.apply_overrides(&InputOverrides {
            monthly_churn: Some(0.0),
            ..Default::default()
        });
        assert!(session.project().is_err());
    }

    fn wide_order_ranges() -> PercentileRanges {
        PercentileRanges {
            orders_per_day: ParameterRange::new(40.0, 120.0, 300.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_custom_ranges_drive_percentile() {
        let mut session = Session::default().with_ranges(wide_order_ranges());
        session.set_percentile(90.0).unwrap();
        assert_eq!(session.inputs().orders_per_day, 300.0);
        assert_eq!(session.ranges().orders_per_day.p90, 300.0);
    }

    #[test]
    fn test_sweep_uses_session_ranges() {
        let mut session = Session::default().with_ranges(wide_order_ranges());
        session.set_percentile(90.0).unwrap();

        let points = session.sweep(&[10.0, 90.0]).unwrap();
        assert_eq!(points[0].inputs.orders_per_day, 40.0);
        // Same table as the slider, so p90 reproduces the current inputs
        assert_eq!(points[1].inputs, *session.inputs());

        let default_points = Session::default().sweep(&[90.0]).unwrap();
        assert_eq!(default_points[0].inputs.orders_per_day, 200.0);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut session = Session::default();
        session.load_scenario(Scenario::Aggressive);
        session.set_percentile(30.0).unwrap();
        session.set_currency(Currency::Usd);

        let restored = Session::restore(ProjectionEngine::default(), &session.snapshot());
        assert_eq!(restored.scenario(), Scenario::Aggressive);
        assert_eq!(restored.percentile(), 30.0);
        assert_eq!(restored.currency(), Currency::Usd);
        assert_eq!(restored.inputs(), session.inputs());
    }
}
