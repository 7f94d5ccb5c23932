//! Model inputs, scenario presets and percentile-based adjustment

mod data;
pub mod scenarios;
pub mod percentile;

pub use data::{ModelInputs, InputOverrides};
pub use scenarios::Scenario;
pub use percentile::{ParameterRange, PercentileRanges, DEFAULT_PERCENTILE};
