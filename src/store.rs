//! Persisted echo of the last calculator inputs
//!
//! One JSON document at an explicit path. Nothing is cached in process;
//! callers load at start-up and save after a change.

use crate::currency::Currency;
use crate::error::Result;
use crate::inputs::{ModelInputs, Scenario};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    pub inputs: ModelInputs,
    #[serde(default)]
    pub scenario: Scenario,
    #[serde(default = "default_percentile")]
    pub percentile: f64,
    #[serde(default)]
    pub currency: Currency,
    pub saved_at: DateTime<Utc>,
}

fn default_percentile() -> f64 { crate::inputs::DEFAULT_PERCENTILE }

impl SavedSession {
    pub fn new(inputs: ModelInputs, scenario: Scenario, percentile: f64, currency: Currency) -> Self {
        Self {
            inputs,
            scenario,
            percentile,
            currency,
            saved_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputStore {
    path: PathBuf,
}

impl InputStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the last saved session; `Ok(None)` when nothing has been saved
    pub fn load(&self) -> Result<Option<SavedSession>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let saved: SavedSession = serde_json::from_reader(BufReader::new(file))?;
        info!(
            "loaded inputs saved at {} from {}",
            saved.saved_at.to_rfc3339(),
            self.path.display()
        );
        Ok(Some(saved))
    }

    /// Write `session`, replacing any previous echo
    pub fn save(&self, session: &SavedSession) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        info!("saved inputs to {}", self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
