//! Alert triage — config-driven risk scoring and priority classification
//! for batches of security alerts.
//!
//! Modular structure:
//! - [`config`] — JSON scoring configuration (weights, thresholds, blacklist)
//! - [`alerts`] — CSV alert loading, record types, output writing
//! - [`risk`] — additive weighted risk scoring and priority tiers
//! - [`processor`] — single-pass batch orchestration
//! - [`logging`] — structured tracing setup
//!
//! One run is a deterministic transform: every record's score depends only on
//! that record and the loaded config, and output rows keep the input order.

pub mod alerts;
pub mod config;
pub mod error;
pub mod logging;
pub mod processor;
pub mod risk;

pub use alerts::{AlertRecord, ScoredAlert};
pub use config::ScoringConfig;
pub use error::TriageError;
pub use processor::{AlertProcessor, RunOutcome};
pub use risk::{Priority, RiskEngine};
