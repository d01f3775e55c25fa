//! Scoring configuration loaded from a JSON document. Weights and thresholds
//! only; file paths are CLI concerns, not config.

use crate::error::TriageError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Weighted-scoring parameters for one triage run. Loaded once, read-only.
///
/// The three scalar weights carry defaults; the map-valued fields default to
/// empty so an unknown key simply falls back to the scorer's default weight.
/// `frequency_threshold` stays optional here: its absence is reported by the
/// scorer, not the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Per-alert-type weight (unknown types score 1.0)
    #[serde(default)]
    pub alert_type_weights: HashMap<String, f64>,
    /// Multiplier applied to the record's severity value
    #[serde(default = "default_severity_weight")]
    pub severity_weight: f64,
    /// Flat bonus granted when the frequency threshold is met
    #[serde(default = "default_frequency_weight")]
    pub frequency_weight: f64,
    /// Multiplier applied to the role lookup
    #[serde(default = "default_role_weight")]
    pub role_weight: f64,
    /// Alert-count threshold gating the frequency bonus
    pub frequency_threshold: Option<FrequencyThreshold>,
    /// Per-role weight (unknown roles score 1.0)
    #[serde(default)]
    pub role_weights: HashMap<String, f64>,
    /// Source IPs that earn the fixed blacklist bonus
    #[serde(default)]
    pub ip_blacklist: HashSet<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyThreshold {
    pub count: u64,
}

fn default_severity_weight() -> f64 {
    0.4
}

fn default_frequency_weight() -> f64 {
    0.3
}

fn default_role_weight() -> f64 {
    0.3
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            alert_type_weights: HashMap::new(),
            severity_weight: default_severity_weight(),
            frequency_weight: default_frequency_weight(),
            role_weight: default_role_weight(),
            frequency_threshold: None,
            role_weights: HashMap::new(),
            ip_blacklist: HashSet::new(),
        }
    }
}

impl ScoringConfig {
    /// Load from a JSON file. Missing file and malformed JSON are distinct
    /// errors; required nested keys are not validated here.
    pub fn load(path: &Path) -> Result<Self, TriageError> {
        if !path.exists() {
            return Err(TriageError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|source| TriageError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
