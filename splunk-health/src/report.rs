use tracing::debug;

use crate::{
    error::CheckError,
    invariants::{Status, TimestampPrefix},
    models::Entry,
    severity::worst_color,
};

const ISSUE_PREVIEW: usize = 2;
// Literal backslash-n; the agent reads a single physical line.
const DETAIL_SEPARATOR: &str = "\\n";

/// Status plus free text, ready to be rendered as a local check line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub body: String,
}

impl Report {
    pub fn from_entries(entries: &[Entry], timestamp: &TimestampPrefix) -> Self {
        let overall = worst_color(entries);
        let status = Status::from(overall);
        let mut body = format!(
            "{}: Overall status is {} (Log Time: {timestamp})",
            status.text(),
            overall.to_string().to_uppercase()
        );

        let problems: Vec<&Entry> = if status.code() > 0 {
            entries.iter().filter(|e| e.color() != "green").collect()
        } else {
            Vec::new()
        };
        debug!(%overall, problems = problems.len(), "classified block");

        if !problems.is_empty() {
            let preview = problems
                .iter()
                .take(ISSUE_PREVIEW)
                .map(|e| format!("[{}] {}", problem_color(e), e.display_name()))
                .collect::<Vec<_>>()
                .join(", ");
            body.push_str(&format!(" (Issues: {preview}...)"));
            for entry in &problems {
                body.push_str(DETAIL_SEPARATOR);
                body.push_str(&entry.raw);
            }
        }

        Self { status, body }
    }

    pub fn unknown(err: &CheckError) -> Self {
        Self {
            status: Status::Unknown,
            body: format!("{}: {err}", Status::Unknown.text()),
        }
    }

    pub fn render(&self, service: &str) -> String {
        format!("{} \"{service}\" - {}", self.status.code(), self.body)
    }
}

fn problem_color(entry: &Entry) -> String {
    entry
        .attributes
        .get("color")
        .map_or_else(|| "N/A".into(), |c| c.to_uppercase())
}
