//! Additive weighted risk scoring. The score is a pure function of one
//! record and the loaded config; records never influence each other.

use crate::alerts::AlertRecord;
use crate::config::ScoringConfig;
use crate::error::TriageError;
use std::collections::HashMap;

/// Weight applied when an alert type or user role is absent from its
/// config map. Unknown categories are deliberately not an error.
const DEFAULT_CATEGORY_WEIGHT: f64 = 1.0;

/// Fixed bonus for a blacklisted source IP.
const BLACKLIST_SCORE: f64 = 5.0;

/// Total lookup with an explicit fallback, never a partial-map failure.
fn lookup_or(map: &HashMap<String, f64>, key: &str, default: f64) -> f64 {
    map.get(key).copied().unwrap_or(default)
}

/// Round to 2 decimal places, half away from zero.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Sum the five signal terms for one record:
    /// alert-type weight, weighted severity, binary frequency bonus,
    /// weighted role, and the fixed blacklist bonus.
    ///
    /// Fails only when `frequency_threshold.count` is absent from the config;
    /// unknown alert types and roles silently take the default weight.
    pub fn score(&self, record: &AlertRecord) -> Result<f64, TriageError> {
        let alert_type_weight = lookup_or(
            &self.config.alert_type_weights,
            &record.alert_type,
            DEFAULT_CATEGORY_WEIGHT,
        );

        let severity_score = record.severity * self.config.severity_weight;

        let threshold = self
            .config
            .frequency_threshold
            .as_ref()
            .ok_or(TriageError::MissingConfigKey {
                key: "frequency_threshold.count",
            })?;
        let frequency_score = if record.alert_count >= threshold.count {
            self.config.frequency_weight
        } else {
            0.0
        };

        let role_score = lookup_or(
            &self.config.role_weights,
            &record.user_role,
            DEFAULT_CATEGORY_WEIGHT,
        ) * self.config.role_weight;

        let source_ip_score = if self.config.ip_blacklist.contains(&record.source_ip) {
            BLACKLIST_SCORE
        } else {
            0.0
        };

        Ok(round2(
            alert_type_weight + severity_score + frequency_score + role_score + source_ip_score,
        ))
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
