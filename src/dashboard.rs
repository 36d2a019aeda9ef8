//! Filter and pagination state for the query table.
//!
//! Changing any filter sends the view back to the first page; moving
//! between pages leaves the filters alone. Values are stored as given,
//! so a minimum above the maximum simply matches nothing.

use serde::Deserialize;

use crate::model::QueryRecord;

/// Operation filter value that disables operation filtering.
pub const ALL_OPERATIONS: &str = "all";

const DEFAULT_PAGE_SIZE: usize = 10;

/// Host-provided table settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Rows per page.
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Search, filter and page state of one dashboard view.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    search: String,
    operation: String,
    /// 0 disables the bound.
    min_duration: f64,
    /// 0 disables the bound.
    max_duration: f64,
    /// 1-based.
    current_page: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            config,
            search: String::new(),
            operation: ALL_OPERATIONS.to_string(),
            min_duration: 0.0,
            max_duration: 0.0,
            current_page: 1,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, value: impl Into<String>) {
        self.search = value.into();
        self.current_page = 1;
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn set_operation(&mut self, value: impl Into<String>) {
        self.operation = value.into();
        self.current_page = 1;
    }

    pub fn min_duration(&self) -> f64 {
        self.min_duration
    }

    pub fn set_min_duration(&mut self, value: f64) {
        self.min_duration = value;
        self.current_page = 1;
    }

    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }

    pub fn set_max_duration(&mut self, value: f64) {
        self.max_duration = value;
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Jump to a page. Filters are untouched.
    pub fn set_current_page(&mut self, value: usize) {
        self.current_page = value;
    }

    /// Whether a record passes the search text, operation and duration filters.
    ///
    /// Search is a case-insensitive substring match over collection,
    /// operation, plan summary, query hash and command JSON.
    pub fn matches(&self, record: &QueryRecord) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = [
                &record.collection,
                &record.operation,
                &record.plan_summary,
                &record.query_hash,
                &record.command_json,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if self.operation != ALL_OPERATIONS && record.operation != self.operation {
            return false;
        }

        if self.min_duration > 0.0 && record.duration < self.min_duration {
            return false;
        }
        if self.max_duration > 0.0 && record.duration > self.max_duration {
            return false;
        }

        true
    }

    /// Records passing the filters, in input order.
    pub fn filter<'a>(&self, records: &'a [QueryRecord]) -> Vec<&'a QueryRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Number of pages for `count` rows. An empty table still has one page.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size()).max(1)
    }

    /// Filtered records on the current page. Past the last page this is empty.
    pub fn page<'a>(&self, records: &'a [QueryRecord]) -> Vec<&'a QueryRecord> {
        let size = self.page_size();
        let skip = self.current_page.saturating_sub(1).saturating_mul(size);
        records
            .iter()
            .filter(|r| self.matches(r))
            .skip(skip)
            .take(size)
            .collect()
    }

    fn page_size(&self) -> usize {
        self.config.page_size.max(1)
    }
}
