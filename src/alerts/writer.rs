//! Output CSV writing: the `alert_id,risk_score,priority` projection, one row
//! per input row in the original order.

use super::ScoredAlert;
use crate::error::TriageError;
use crate::risk::Priority;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

#[derive(Serialize)]
struct OutputRow<'a> {
    alert_id: &'a str,
    risk_score: f64,
    priority: Priority,
}

/// Write the scored projection. An empty batch still produces the header row.
pub fn write_scored(path: &Path, scored: &[ScoredAlert]) -> Result<(), TriageError> {
    let to_write_err = |source| TriageError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(to_write_err)?;
    // Written explicitly so a zero-row batch still gets its header
    writer
        .write_record(["alert_id", "risk_score", "priority"])
        .map_err(to_write_err)?;
    for alert in scored {
        writer
            .serialize(OutputRow {
                alert_id: &alert.record.alert_id,
                risk_score: alert.risk_score,
                priority: alert.priority,
            })
            .map_err(to_write_err)?;
    }
    writer.flush().map_err(TriageError::Io)?;

    debug!(rows = scored.len(), path = ?path, "wrote scored alerts");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertRecord;

    fn scored(id: &str, score: f64, priority: Priority) -> ScoredAlert {
        ScoredAlert {
            record: AlertRecord {
                alert_id: id.to_string(),
                alert_type: "malware".to_string(),
                severity: 1.0,
                alert_count: 1,
                user_role: "user".to_string(),
                source_ip: "10.0.0.1".to_string(),
            },
            risk_score: score,
            priority,
        }
    }

    #[test]
    fn writes_projection_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let batch = vec![
            scored("a1", 11.9, Priority::High),
            scored("a2", 2.3, Priority::Low),
        ];
        write_scored(&path, &batch).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("alert_id,risk_score,priority"));
        assert_eq!(lines.next(), Some("a1,11.9,High"));
        assert_eq!(lines.next(), Some("a2,2.3,Low"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_batch_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_scored(&path, &[]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "alert_id,risk_score,priority");
    }
}
