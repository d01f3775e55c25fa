//! Alert records: CSV input loading, typed record structs, output writing.

mod loader;
mod writer;

pub use loader::load_alerts;
pub use writer::write_scored;

use crate::risk::Priority;
use serde::{Deserialize, Serialize};

/// One input row. Fields beyond these six are ignored by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub alert_id: String,
    pub alert_type: String,
    /// Pre-normalized severity value from the source system
    pub severity: f64,
    pub alert_count: u64,
    pub user_role: String,
    pub source_ip: String,
}

/// Terminal result of the per-record transform: the record plus its derived
/// risk score (2-decimal rounded) and priority tier.
#[derive(Debug, Clone)]
pub struct ScoredAlert {
    pub record: AlertRecord,
    pub risk_score: f64,
    pub priority: Priority,
}
