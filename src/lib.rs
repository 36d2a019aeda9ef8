//! mongolog - MongoDB slow-query log analysis library.
//!
//! Provides:
//! - `model` — raw structured-log schema and the normalized query record
//! - `parser` — line validation and extraction, whole-buffer processing
//! - `fmt` — shared formatting helpers (timestamps, bytes, nanoseconds, scan efficiency)
//! - `styling` — presentation classes for operations, plans, durations, scores
//! - `analysis` — query complexity tiers and record-set summaries
//! - `dashboard` — filter and pagination state for the query table
//!
//! Diagnostics are emitted through `tracing`; the host installs the subscriber.

pub mod analysis;
pub mod dashboard;
pub mod fmt;
pub mod model;
pub mod parser;
pub mod styling;

pub use dashboard::{Dashboard, DashboardConfig};
pub use model::{MongoLog, QueryRecord};
pub use parser::{LineRejection, parse_line, process_file, try_parse_line};
