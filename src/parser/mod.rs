//! MongoDB structured log parser.
//!
//! Accepts newline-delimited JSON log content, keeps slow COMMAND entries
//! that carry a positive `durationMillis`, and normalizes them into
//! [`QueryRecord`]s. Rejected lines never fail the batch: they are dropped
//! and reported through `tracing`.

mod extract;

pub use extract::{collection_name, extract, operation_type};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::model::{MongoLog, QueryRecord};

/// Literal marker of a COMMAND component entry.
const COMMAND_MARKER: &str = r#""c":"COMMAND""#;

/// Literal marker of a duration attribute.
const DURATION_MARKER: &str = "durationMillis";

const COMMAND_COMPONENT: &str = "COMMAND";

/// Why a line did not produce a record.
#[derive(Debug)]
pub enum LineRejection {
    /// Empty or whitespace-only line.
    Blank,
    /// Missing the COMMAND or duration marker; JSON was not parsed.
    Prefiltered,
    /// Not valid JSON.
    Syntax(serde_json::Error),
    /// Valid JSON that does not match the log schema.
    Schema(serde_json::Error),
    /// Component other than COMMAND.
    NotCommand { component: String },
    /// `durationMillis` absent or not positive.
    NoDuration,
}

impl std::fmt::Display for LineRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineRejection::Blank => write!(f, "blank line"),
            LineRejection::Prefiltered => write!(f, "not a COMMAND entry with a duration"),
            LineRejection::Syntax(e) => write!(f, "invalid JSON: {}", e),
            LineRejection::Schema(e) => write!(f, "schema mismatch: {}", e),
            LineRejection::NotCommand { component } => {
                write!(f, "component is {}, expected COMMAND", component)
            }
            LineRejection::NoDuration => write!(f, "durationMillis missing or not positive"),
        }
    }
}

impl std::error::Error for LineRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineRejection::Syntax(e) | LineRejection::Schema(e) => Some(e),
            _ => None,
        }
    }
}

/// Parse one log line, returning the reason when no record is produced.
pub fn try_parse_line(line: &str) -> Result<QueryRecord, LineRejection> {
    let line = line.trim();
    if line.is_empty() {
        return Err(LineRejection::Blank);
    }

    // Cheap substring check before paying for JSON parsing.
    if !line.contains(COMMAND_MARKER) || !line.contains(DURATION_MARKER) {
        return Err(LineRejection::Prefiltered);
    }

    let value: Value = serde_json::from_str(line).map_err(LineRejection::Syntax)?;
    let log = MongoLog::deserialize(value).map_err(LineRejection::Schema)?;

    if log.c != COMMAND_COMPONENT {
        return Err(LineRejection::NotCommand { component: log.c });
    }

    match log.attr.duration_millis {
        Some(ms) if ms > 0.0 => Ok(extract(&log, line)),
        _ => Err(LineRejection::NoDuration),
    }
}

/// Parse one log line.
///
/// Returns `None` for every rejected line. Malformed JSON and schema
/// mismatches are logged at WARN; other rejections at DEBUG or not at all.
pub fn parse_line(line: &str) -> Option<QueryRecord> {
    match try_parse_line(line) {
        Ok(record) => Some(record),
        Err(LineRejection::Blank | LineRejection::Prefiltered) => None,
        Err(e @ (LineRejection::Syntax(_) | LineRejection::Schema(_))) => {
            warn!(error = %e, "failed to parse log line");
            None
        }
        Err(e) => {
            debug!(reason = %e, "skipping log line");
            None
        }
    }
}

/// Parse a whole log buffer, keeping valid records in input order.
pub fn process_file(content: &str) -> Vec<QueryRecord> {
    let mut lines = 0usize;
    let records: Vec<QueryRecord> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .inspect(|_| lines += 1)
        .filter_map(parse_line)
        .collect();

    debug!(
        lines,
        records = records.len(),
        dropped = lines - records.len(),
        "processed log content"
    );
    records
}
