//! Normalized query record produced by the parser.

use serde::{Deserialize, Serialize};

/// Placeholder for absent plan summaries, query hashes and commands.
pub const NOT_AVAILABLE: &str = "Not available";

/// Placeholder for absent namespaces and unclassifiable commands.
pub const UNKNOWN: &str = "Unknown";

/// One slow COMMAND entry, flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRecord {
    /// Random UUID assigned at parse time.
    pub id: String,
    /// ISO-8601 timestamp as written in the log.
    pub timestamp: String,
    pub collection: String,
    pub operation: String,
    /// Milliseconds, always positive.
    pub duration: f64,
    pub plan_summary: String,
    pub docs_examined: u64,
    pub docs_returned: u64,
    pub keys_examined: u64,
    /// `docs_returned / docs_examined * 100`, or 0 when nothing was examined.
    pub efficiency_ratio: f64,
    pub query_hash: String,
    /// Pretty-printed command document.
    pub command_json: String,
    /// Source line, trimmed.
    pub raw_log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let record = QueryRecord {
            id: "id-1".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            collection: "orders".to_string(),
            operation: "find".to_string(),
            duration: 150.0,
            plan_summary: "COLLSCAN".to_string(),
            docs_examined: 1000,
            docs_returned: 10,
            keys_examined: 0,
            efficiency_ratio: 1.0,
            query_hash: NOT_AVAILABLE.to_string(),
            command_json: NOT_AVAILABLE.to_string(),
            raw_log: "{}".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["planSummary"], "COLLSCAN");
        assert_eq!(json["docsExamined"], 1000);
        assert_eq!(json["docsReturned"], 10);
        assert_eq!(json["efficiencyRatio"], 1.0);
        assert_eq!(json["rawLog"], "{}");
    }
}
