//! Crate-wide error taxonomy. Every variant is fatal: a run either fully
//! succeeds or aborts before the output file is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("config file {path} is not valid JSON: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Required nested config key absent. Only raised at scoring time, never
    /// during config load.
    #[error("missing required config key: {key}")]
    MissingConfigKey { key: &'static str },

    #[error("alert data file not found: {path}")]
    DataNotFound { path: PathBuf },

    #[error("failed to read alert data from {path}: {source}")]
    DataParse { path: PathBuf, source: csv::Error },

    #[error("input header is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("row {row}: cannot parse column '{column}' from {value:?}")]
    FieldParse {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("failed to write output to {path}: {source}")]
    OutputWrite { path: PathBuf, source: csv::Error },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
