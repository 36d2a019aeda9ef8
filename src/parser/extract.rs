//! Field extraction from a validated log line into a [`QueryRecord`].

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::model::{MongoLog, NOT_AVAILABLE, QueryRecord, UNKNOWN};

/// Command keys recognized as a known operation, in match priority.
/// The first key present wins, regardless of its position in the document.
const KNOWN_OPERATIONS: &[&str] = &["find", "aggregate", "insert", "update", "delete"];

/// Build a normalized record from a validated log line.
///
/// Missing attributes fall back to their defaults. Every call assigns a new
/// id, so extracting the same line twice yields two distinct records.
pub fn extract(log: &MongoLog, raw_line: &str) -> QueryRecord {
    let attr = &log.attr;

    let docs_examined = attr.docs_examined.unwrap_or(0);
    let docs_returned = attr.n_returned.unwrap_or(0);
    let efficiency_ratio = if docs_examined > 0 {
        docs_returned as f64 / docs_examined as f64 * 100.0
    } else {
        0.0
    };

    QueryRecord {
        id: Uuid::new_v4().to_string(),
        timestamp: log.t.date.clone(),
        collection: collection_name(attr.ns.as_deref()),
        operation: operation_type(attr.command.as_ref()),
        duration: attr.duration_millis.unwrap_or(0.0),
        plan_summary: or_not_available(attr.plan_summary.as_deref()),
        docs_examined,
        docs_returned,
        keys_examined: attr.keys_examined.unwrap_or(0),
        efficiency_ratio,
        query_hash: or_not_available(attr.query_hash.as_deref()),
        command_json: command_json(attr.command.as_ref()),
        raw_log: raw_line.to_string(),
    }
}

/// Classify the command document.
///
/// Known operations are checked in fixed priority (`find`, `aggregate`,
/// `insert`, `update`, `delete`). Anything else falls back to the first key
/// in document order, e.g. `getMore` or `count`.
pub fn operation_type(command: Option<&Map<String, Value>>) -> String {
    let Some(command) = command else {
        return UNKNOWN.to_string();
    };

    if let Some(op) = KNOWN_OPERATIONS
        .iter()
        .find(|op| command.contains_key(**op))
    {
        return (*op).to_string();
    }

    command
        .keys()
        .next()
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Strip the database segment from a namespace.
///
/// `"shop.orders"` -> `"orders"`, `"shop.system.views"` -> `"system.views"`.
/// A namespace without a collection part is returned as is.
pub fn collection_name(ns: Option<&str>) -> String {
    match ns {
        None | Some("") => UNKNOWN.to_string(),
        Some(ns) => match ns.split_once('.') {
            Some((_, rest)) if !rest.is_empty() => rest.to_string(),
            _ => ns.to_string(),
        },
    }
}

fn command_json(command: Option<&Map<String, Value>>) -> String {
    command
        .and_then(|cmd| serde_json::to_string_pretty(cmd).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
