//! Batch orchestration: load config and alerts, score and classify every
//! record in input order, write the output projection, tally priorities.
//!
//! Fail-fast by design: any load or scoring error aborts the run before the
//! output file is created.

use crate::alerts::{self, ScoredAlert};
use crate::config::ScoringConfig;
use crate::error::TriageError;
use crate::risk::{Priority, RiskEngine};
use std::path::Path;
use tracing::info;

/// Result of one completed run: per-priority tally plus the scored rows,
/// kept so callers (and tests) can inspect the batch without re-reading the
/// output file.
#[derive(Debug)]
pub struct RunOutcome {
    pub scored: Vec<ScoredAlert>,
    /// (priority, count) sorted by descending count, ties broken by tier
    /// rank High > Medium > Low. Unobserved priorities are omitted.
    pub summary: Vec<(Priority, usize)>,
}

impl RunOutcome {
    /// Print the console tally: a `Priority Summary:` line followed by one
    /// `<Label>: <count>` line per observed priority.
    pub fn print_summary(&self) {
        println!("Priority Summary:");
        for (priority, count) in &self.summary {
            println!("{priority}: {count}");
        }
    }
}

fn tally(scored: &[ScoredAlert]) -> Vec<(Priority, usize)> {
    let mut counts = [
        (Priority::High, 0usize),
        (Priority::Medium, 0),
        (Priority::Low, 0),
    ];
    for alert in scored {
        for entry in counts.iter_mut() {
            if entry.0 == alert.priority {
                entry.1 += 1;
            }
        }
    }
    let mut observed: Vec<(Priority, usize)> =
        counts.into_iter().filter(|(_, n)| *n > 0).collect();
    // Descending count; the array above is already in tier-rank order, and
    // the sort is stable, so ties keep High before Medium before Low.
    observed.sort_by(|a, b| b.1.cmp(&a.1));
    observed
}

pub struct AlertProcessor;

impl AlertProcessor {
    /// Run the whole pass. Row order in the output equals row order in the
    /// input; an empty input produces a header-only output file.
    pub fn run(
        config_path: &Path,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<RunOutcome, TriageError> {
        let config = ScoringConfig::load(config_path)?;
        info!(path = ?config_path, "loaded scoring config");

        let records = alerts::load_alerts(input_path)?;
        info!(count = records.len(), path = ?input_path, "loaded alerts");

        let engine = RiskEngine::new(config);
        let mut scored = Vec::with_capacity(records.len());
        for record in records {
            let risk_score = engine.score(&record)?;
            let priority = Priority::from_score(risk_score);
            scored.push(ScoredAlert {
                record,
                risk_score,
                priority,
            });
        }

        alerts::write_scored(output_path, &scored)?;
        info!(rows = scored.len(), path = ?output_path, "run complete");

        let summary = tally(&scored);
        Ok(RunOutcome { scored, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertRecord;

    fn scored(priority: Priority) -> ScoredAlert {
        ScoredAlert {
            record: AlertRecord {
                alert_id: "a".to_string(),
                alert_type: "t".to_string(),
                severity: 0.0,
                alert_count: 0,
                user_role: "r".to_string(),
                source_ip: "ip".to_string(),
            },
            risk_score: 0.0,
            priority,
        }
    }

    #[test]
    fn tally_sorts_by_descending_count() {
        let batch = vec![
            scored(Priority::Low),
            scored(Priority::Low),
            scored(Priority::High),
        ];
        let summary = tally(&batch);
        assert_eq!(summary, vec![(Priority::Low, 2), (Priority::High, 1)]);
    }

    #[test]
    fn tally_breaks_ties_by_tier_rank() {
        let batch = vec![
            scored(Priority::Low),
            scored(Priority::Medium),
            scored(Priority::High),
        ];
        let summary = tally(&batch);
        assert_eq!(
            summary,
            vec![
                (Priority::High, 1),
                (Priority::Medium, 1),
                (Priority::Low, 1)
            ]
        );
    }

    #[test]
    fn tally_of_empty_batch_is_empty() {
        assert!(tally(&[]).is_empty());
    }
}
