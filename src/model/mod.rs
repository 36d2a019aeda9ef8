//! Data models: raw MongoDB structured log lines and normalized query records.

mod raw;
mod record;

pub use raw::{LogAttr, LogTime, MongoLog};
pub use record::{NOT_AVAILABLE, QueryRecord, UNKNOWN};
