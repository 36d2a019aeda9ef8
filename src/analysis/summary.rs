//! Aggregate statistics over a set of parsed queries.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::QueryRecord;
use crate::styling::{PlanClass, Tone, duration_class};

/// Header numbers for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSummary {
    pub total: usize,
    pub total_duration_ms: f64,
    pub avg_duration_ms: f64,
    pub max_duration_ms: f64,
    /// Queries whose plan contains a collection scan.
    pub collection_scans: usize,
    /// Queries over the warning duration threshold.
    pub slow_queries: usize,
    pub by_operation: BTreeMap<String, usize>,
    /// Id of the longest-running query; the first one wins on ties.
    pub slowest_id: Option<String>,
}

impl LogSummary {
    pub fn from_records(records: &[QueryRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            summary.total_duration_ms += record.duration;

            if summary.slowest_id.is_none() || record.duration > summary.max_duration_ms {
                summary.max_duration_ms = record.duration;
                summary.slowest_id = Some(record.id.clone());
            }

            if PlanClass::from_plan_summary(&record.plan_summary) == PlanClass::CollectionScan {
                summary.collection_scans += 1;
            }
            if duration_class(record.duration) != Tone::Good {
                summary.slow_queries += 1;
            }

            *summary
                .by_operation
                .entry(record.operation.clone())
                .or_insert(0) += 1;
        }

        if summary.total > 0 {
            summary.avg_duration_ms = summary.total_duration_ms / summary.total as f64;
        }
        summary
    }
}
