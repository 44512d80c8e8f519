use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::{error::CheckError, models::Entry};

const SEPARATOR: &str = "PeriodicHealthReporter - ";

// key=value or key="quoted value"; quotes inside values are not supported
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z0-9_]+)=(?:"([^"]*)"|([^"\s]+))"#).expect("valid const regex")
});

/// Collects every `key=value` pair found anywhere in `s`; text that does not
/// match is skipped and a repeated key keeps its last value.
pub fn parse_attributes(s: &str) -> HashMap<String, String> {
    ATTRIBUTE
        .captures_iter(s)
        .filter_map(|caps| {
            let value = caps.get(2).or_else(|| caps.get(3))?;
            Some((caps[1].to_string(), value.as_str().to_string()))
        })
        .collect()
}

/// `None` when the line has no reporter separator.
pub fn parse_entry(line: &str) -> Option<Entry> {
    let (_, rest) = line.split_once(SEPARATOR)?;
    let raw = rest.trim();
    Some(Entry {
        attributes: parse_attributes(raw),
        raw: raw.to_string(),
    })
}

pub fn parse_block(lines: &[String]) -> Result<Vec<Entry>, CheckError> {
    let entries: Vec<Entry> = lines.iter().filter_map(|l| parse_entry(l)).collect();
    if entries.is_empty() {
        return Err(CheckError::NoAttributes);
    }
    Ok(entries)
}
