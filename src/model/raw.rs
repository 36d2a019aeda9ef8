//! Raw MongoDB structured log schema (4.4+ JSON log format).
//!
//! Only the fields the dashboard reads are declared; everything else in a
//! log line is ignored during deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One line of a MongoDB diagnostic log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MongoLog {
    /// Timestamp wrapper (`{"$date": "..."}`).
    pub t: LogTime,
    /// Severity (`I`, `W`, `E`, `F`, `D1`..`D5`).
    pub s: String,
    /// Component (`COMMAND`, `NETWORK`, `STORAGE`, ...).
    pub c: String,
    /// Unique message id.
    pub id: i64,
    /// Thread or connection context.
    pub ctx: String,
    /// Log message.
    pub msg: String,
    pub attr: LogAttr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogTime {
    #[serde(rename = "$date")]
    pub date: String,
}

/// Attributes of a slow-operation entry. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogAttr {
    /// Operation type (`command`, `query`, `getmore`, ...).
    #[serde(rename = "type")]
    pub op_type: Option<String>,
    /// Namespace, `database.collection`.
    pub ns: Option<String>,
    /// Command document. Key order follows the log line.
    pub command: Option<Map<String, Value>>,
    pub duration_millis: Option<f64>,
    pub plan_summary: Option<String>,
    pub docs_examined: Option<u64>,
    /// Documents returned.
    #[serde(rename = "nreturned")]
    pub n_returned: Option<u64>,
    pub keys_examined: Option<u64>,
    pub query_hash: Option<String>,
}
