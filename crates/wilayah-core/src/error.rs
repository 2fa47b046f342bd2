// crates/wilayah-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a build.
///
/// None of these are recoverable: the first one encountered aborts the run.
#[derive(Debug, Error)]
pub enum WilayahError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read header row of {}: source is empty", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("malformed record in {} at line {line}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("malformed quoting in {} at line {line}: {reason}", .path.display())]
    Quote {
        path: PathBuf,
        line: u64,
        reason: &'static str,
    },

    #[error(
        "record in {} at line {line} has {found} columns, expected at least {expected}",
        .path.display()
    )]
    ShortRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WilayahError>;
