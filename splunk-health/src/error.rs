use std::io;

use thiserror::Error;

/// Every way a check can fail. The message is what the operator sees
/// after `UNKNOWN: `.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Error running 'tail' command: {stderr}")]
    TailFailed { stderr: String },

    #[error("Error: 'tail' command not found. Is this a standard Linux system?")]
    TailNotFound,

    #[error("Error reading log file: {0}")]
    TailIo(#[from] io::Error),

    #[error("No 'PeriodicHealthReporter' entries found in the last {lines} lines of the log.")]
    NoEntries { lines: usize },

    #[error("Could not determine timestamp from the last log entry.")]
    TimestampParse,

    #[error("No attributes parsed from the latest report.")]
    NoAttributes,
}
