//! CSV input loading. Column positions are resolved from the header row, and
//! each numeric cell is parsed explicitly so a bad value names its row and
//! column instead of surfacing as a silent coercion.

use super::AlertRecord;
use crate::error::TriageError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Indices of the required columns within the input header.
struct ColumnMap {
    alert_id: usize,
    alert_type: usize,
    severity: usize,
    alert_count: usize,
    user_role: usize,
    source_ip: usize,
}

impl ColumnMap {
    fn from_header(header: &StringRecord) -> Result<Self, TriageError> {
        let find = |column: &'static str| {
            header
                .iter()
                .position(|h| h == column)
                .ok_or(TriageError::MissingColumn { column })
        };
        Ok(Self {
            alert_id: find("alert_id")?,
            alert_type: find("alert_type")?,
            severity: find("severity")?,
            alert_count: find("alert_count")?,
            user_role: find("user_role")?,
            source_ip: find("source_ip")?,
        })
    }
}

fn cell<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

fn parse_cell<T: FromStr>(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<T, TriageError> {
    let raw = cell(record, idx);
    raw.parse().map_err(|_| TriageError::FieldParse {
        row,
        column,
        value: raw.to_string(),
    })
}

/// Load alert records from a CSV file, preserving file row order.
/// Extra columns are ignored; row numbering in errors is 1-based over data
/// rows (the header is row 0).
pub fn load_alerts(path: &Path) -> Result<Vec<AlertRecord>, TriageError> {
    if !path.exists() {
        return Err(TriageError::DataNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| TriageError::DataParse {
            path: path.to_path_buf(),
            source,
        })?;

    let header = reader
        .headers()
        .map_err(|source| TriageError::DataParse {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let columns = ColumnMap::from_header(&header)?;

    let mut alerts = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|source| TriageError::DataParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row = i + 1;
        alerts.push(AlertRecord {
            alert_id: cell(&record, columns.alert_id).to_string(),
            alert_type: cell(&record, columns.alert_type).to_string(),
            severity: parse_cell(&record, columns.severity, "severity", row)?,
            alert_count: parse_cell(&record, columns.alert_count, "alert_count", row)?,
            user_role: cell(&record, columns.user_role).to_string(),
            source_ip: cell(&record, columns.source_ip).to_string(),
        });
    }

    debug!(count = alerts.len(), path = ?path, "loaded alert records");
    Ok(alerts)
}
