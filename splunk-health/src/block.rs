use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{error::CheckError, invariants::TimestampPrefix};

pub const MARKER: &str = "PeriodicHealthReporter";

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2}\.\d{3} [+-]\d{4}").expect("valid const regex")
});

/// Lines of the most recent health snapshot, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthBlock {
    pub lines: Vec<String>,
    pub timestamp: TimestampPrefix,
}

/// Keeps reporter lines, then takes the trailing run that starts with the
/// last line's timestamp. Scanning stops at the first older line, so an
/// earlier line with the same stamp is never pulled in.
///
/// `window` is only used to describe the tail window in the error.
pub fn select_latest_block(lines: Vec<String>, window: usize) -> Result<HealthBlock, CheckError> {
    let mut matching: Vec<String> = lines.into_iter().filter(|l| l.contains(MARKER)).collect();
    let last = matching
        .last()
        .ok_or(CheckError::NoEntries { lines: window })?;
    let timestamp = TIMESTAMP
        .find(last)
        .map(|m| TimestampPrefix::from(m.as_str()))
        .ok_or(CheckError::TimestampParse)?;

    let start = matching
        .iter()
        .rposition(|l| !l.starts_with(timestamp.as_str()))
        .map_or(0, |i| i + 1);
    let lines = matching.split_off(start);
    debug!(size = lines.len(), %timestamp, "selected latest block");
    Ok(HealthBlock { lines, timestamp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    const T1: &str = "14-11-2025 10:15:00.001 +0100";
    const T2: &str = "14-11-2025 10:16:00.002 +0100";

    fn line(ts: &str, attrs: &str) -> String {
        format!("{ts} INFO  PeriodicHealthReporter - {attrs}")
    }

    #[test]
    fn selects_only_the_latest_timestamp() {
        let lines = vec![
            line(T1, "feature=a"),
            line(T1, "feature=b"),
            line(T2, "feature=c"),
            line(T2, "feature=d"),
            line(T2, "feature=e"),
        ];
        let block = select_latest_block(lines.clone(), 200).unwrap();
        assert_that!(block.lines).is_equal_to(lines[2..].to_vec());
        assert_that!(block.timestamp.as_str()).is_equal_to(T2);
    }

    #[test]
    fn scan_stops_at_first_older_line() {
        let lines = vec![
            line(T2, "feature=stale"),
            line(T1, "feature=a"),
            line(T2, "feature=b"),
            line(T2, "feature=c"),
        ];
        let block = select_latest_block(lines.clone(), 200).unwrap();
        assert_that!(block.lines).is_equal_to(lines[2..].to_vec());
    }

    #[test]
    fn unrelated_lines_do_not_break_the_block() {
        let lines = vec![
            line(T2, "feature=a"),
            format!("{T1} INFO  TailReader - batch done"),
            line(T2, "feature=b"),
        ];
        let block = select_latest_block(lines, 200).unwrap();
        assert_that!(block.lines).has_length(2);
    }

    #[test]
    fn no_reporter_lines() {
        let err = select_latest_block(vec!["hello".into(), String::new()], 200).unwrap_err();
        assert!(matches!(err, CheckError::NoEntries { lines: 200 }));
        assert_that!(err.to_string()).is_equal_to(
            "No 'PeriodicHealthReporter' entries found in the last 200 lines of the log."
                .to_string(),
        );
    }

    #[test]
    fn last_line_without_timestamp() {
        let lines = vec![
            line(T1, "feature=a"),
            "INFO PeriodicHealthReporter - feature=b".to_string(),
        ];
        let err = select_latest_block(lines, 200).unwrap_err();
        assert!(matches!(err, CheckError::TimestampParse));
    }

    #[test]
    fn timestamp_must_be_at_line_start() {
        let lines = vec![format!("  {}", line(T1, "feature=a"))];
        let err = select_latest_block(lines, 200).unwrap_err();
        assert!(matches!(err, CheckError::TimestampParse));
    }
}
