//! Named investment scenarios
//!
//! Three calibrated starting points for the calculator. Each preset is a
//! complete parameter set, so switching scenario replaces every field at once.

use super::ModelInputs;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Lean launch
    Conservative,
    #[default]
    Balanced,
    /// Rapid scale
    Aggressive,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Balanced,
        Scenario::Aggressive,
    ];

    /// Preset parameter set for this scenario
    pub fn inputs(self) -> ModelInputs {
        match self {
            Scenario::Conservative => ModelInputs {
                investment: 300_000.0,
                orders_per_day: 60.0,
                aov: 80.0,
                cac: 90.0,
                monthly_churn: 12.0,
                contribution_margin: 32.0,
                fixed_costs_per_month: 65_000.0,
            },
            Scenario::Balanced => ModelInputs {
                investment: 400_000.0,
                orders_per_day: 100.0,
                aov: 95.0,
                cac: 75.0,
                monthly_churn: 10.0,
                contribution_margin: 36.0,
                fixed_costs_per_month: 85_000.0,
            },
            Scenario::Aggressive => ModelInputs {
                investment: 500_000.0,
                orders_per_day: 150.0,
                aov: 110.0,
                cac: 60.0,
                monthly_churn: 7.0,
                contribution_margin: 42.0,
                fixed_costs_per_month: 110_000.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Conservative => "conservative",
            Scenario::Balanced => "balanced",
            Scenario::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = ModelError;

    /// Accepts the preset names and the older bear/base/bull aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" | "bear" => Ok(Scenario::Conservative),
            "balanced" | "base" => Ok(Scenario::Balanced),
            "aggressive" | "bull" => Ok(Scenario::Aggressive),
            _ => Err(ModelError::UnknownScenario(s.to_string())),
        }
    }
}
