//! Query analysis: complexity tiers and record-set summaries.

mod summary;

pub use summary::LogSummary;

use serde::Serialize;

use crate::model::QueryRecord;

/// Documents examined above which a query counts as complex.
const COMPLEX_DOCS_EXAMINED: u64 = 10_000_000;

/// Duration (ms) above which a query counts as complex.
const COMPLEX_DURATION_MS: f64 = 60_000.0;

/// Documents examined above which a collection scan is very complex.
const VERY_COMPLEX_DOCS_EXAMINED: u64 = 100_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QueryComplexity {
    Simple,
    Moderate,
    Complex,
    #[serde(rename = "Very Complex")]
    VeryComplex,
}

impl QueryComplexity {
    /// Classify a record. Checks run in order and the last one that
    /// matches sets the tier.
    pub fn of(record: &QueryRecord) -> Self {
        let plan = record.plan_summary.as_str();
        let mut complexity = Self::Simple;

        if plan.contains("SORT") || plan.contains("GROUP") {
            complexity = Self::Moderate;
        }

        if record.docs_examined > COMPLEX_DOCS_EXAMINED || record.duration > COMPLEX_DURATION_MS {
            complexity = Self::Complex;
        }

        if plan.contains("COLLSCAN") && record.docs_examined > VERY_COMPLEX_DOCS_EXAMINED {
            complexity = Self::VeryComplex;
        }

        complexity
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Moderate => "Moderate",
            Self::Complex => "Complex",
            Self::VeryComplex => "Very Complex",
        }
    }
}

impl std::fmt::Display for QueryComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
