//! Risk scoring engine and priority classification.

mod engine;

pub use engine::RiskEngine;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority tier derived from a risk score. Thresholds are fixed, not
/// configurable: >= 8 is High, >= 5 is Medium, everything below is Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

const HIGH_THRESHOLD: f64 = 8.0;
const MEDIUM_THRESHOLD: f64 = 5.0;

impl Priority {
    /// Total over all finite scores; boundaries are inclusive on the lower
    /// bound of each tier.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Priority::High
        } else if score >= MEDIUM_THRESHOLD {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
