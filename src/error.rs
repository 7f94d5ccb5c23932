//! Error types for the projection library

use thiserror::Error;

/// Errors raised at the boundaries of the projection engine.
///
/// The engine itself is total; these come from input validation, preset
/// lookup, and the export/store I/O around it.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("percentile {0} is outside the supported 10-90 range")]
    PercentileOutOfRange(f64),

    #[error("unknown scenario '{0}' (expected conservative, balanced or aggressive)")]
    UnknownScenario(String),

    #[error("unknown currency '{0}' (expected AED, USD or EUR)")]
    UnknownCurrency(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
