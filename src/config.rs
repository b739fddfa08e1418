// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration configuration.
//!
//! Defaults reproduce the settings the mode listings were first produced
//! with: patterns 73 through 144, at most 100 per batch, and a hand-picked
//! selection.

use crate::error::{ModeError, ModeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for an enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Largest number of descriptors a range or selection may request.
    /// Default: 100.
    pub max_batch: usize,

    /// Highest k to try. `None` walks k without bound.
    pub k_limit: Option<u64>,

    /// First position of the range listing (1-based). Default: 73.
    pub start: i64,

    /// Last position of the range listing, inclusive. Default: 144.
    pub end: i64,

    /// Positions for the selection listing, printed in this order.
    pub selected: Vec<i64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_batch: 100,
            k_limit: None,
            start: 73,
            end: 144,
            selected: vec![21, 17, 33, 22, 62, 52, 233],
        }
    }
}

impl SearchConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> ModeResult<()> {
        if self.max_batch == 0 {
            return Err(ModeError::Config("max_batch must be at least 1".to_string()));
        }
        if self.start < 1 {
            return Err(ModeError::Config(format!(
                "start must be at least 1, got {}",
                self.start
            )));
        }
        if self.end <= self.start {
            return Err(ModeError::Config(format!(
                "end ({}) must be greater than start ({})",
                self.end, self.start
            )));
        }
        if let Some(position) = self.selected.iter().find(|&&p| p < 1) {
            return Err(ModeError::Config(format!(
                "selected positions must be at least 1, got {}",
                position
            )));
        }
        Ok(())
    }

    /// Parse from JSON and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ModeResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ModeError::Config(format!("JSON parse: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> ModeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ModeError::Config(format!("reading {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}
