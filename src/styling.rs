//! Presentation classes for query table cells and badges.
//!
//! Each classifier returns a small enum; `css_class()` maps it to the
//! dashboard's utility classes so the thresholds live in one place.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Operation badge
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationClass {
    Find,
    Insert,
    Update,
    Delete,
    Aggregate,
    GetMore,
    Other,
}

impl OperationClass {
    /// Classify an operation name. Matching is exact (`getmore`, not `getMore`).
    pub fn from_operation(operation: &str) -> Self {
        match operation {
            "find" => Self::Find,
            "insert" => Self::Insert,
            "update" => Self::Update,
            "delete" => Self::Delete,
            "aggregate" => Self::Aggregate,
            "getmore" => Self::GetMore,
            _ => Self::Other,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Find => "bg-blue-100 text-blue-800",
            Self::Insert => "bg-green-100 text-green-800",
            Self::Update => "bg-orange-100 text-orange-800",
            Self::Delete => "bg-red-100 text-red-800",
            Self::Aggregate => "bg-purple-100 text-purple-800",
            Self::GetMore | Self::Other => "bg-gray-100 text-gray-800",
        }
    }

    /// Tag as serialized for the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Aggregate => "aggregate",
            Self::GetMore => "get-more",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for OperationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Plan badge
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanClass {
    CollectionScan,
    IndexScan,
    Other,
}

impl PlanClass {
    /// A plan that mentions `COLLSCAN` anywhere is a collection scan, even
    /// when it also uses an index for another stage.
    pub fn from_plan_summary(plan_summary: &str) -> Self {
        if plan_summary.contains("COLLSCAN") {
            Self::CollectionScan
        } else if plan_summary.contains("IXSCAN") {
            Self::IndexScan
        } else {
            Self::Other
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::CollectionScan => "bg-red-100 text-red-800",
            Self::IndexScan => "bg-green-100 text-green-800",
            Self::Other => "bg-orange-100 text-orange-800",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CollectionScan => "collection-scan",
            Self::IndexScan => "index-scan",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PlanClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Metric tone (efficiency, duration)
// ---------------------------------------------------------------------------

/// Traffic-light tone for a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Good,
    Warning,
    Critical,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "text-green-600",
            Self::Warning => "text-orange-600",
            Self::Critical => "text-red-600",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone for an efficiency percentage: below 1% critical, below 10% warning.
pub fn efficiency_class(efficiency: f64) -> Tone {
    if efficiency < 1.0 {
        Tone::Critical
    } else if efficiency < 10.0 {
        Tone::Warning
    } else {
        Tone::Good
    }
}

/// Tone for a duration in ms: over 5s critical, over 1s warning.
pub fn duration_class(duration_ms: f64) -> Tone {
    if duration_ms > 5000.0 {
        Tone::Critical
    } else if duration_ms > 1000.0 {
        Tone::Warning
    } else {
        Tone::Good
    }
}

// ---------------------------------------------------------------------------
// Performance score
// ---------------------------------------------------------------------------

/// Tier of a 0-100 performance score. Badge class and label both derive
/// from the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceTier {
    Poor,
    NeedsImprovement,
    Good,
    Excellent,
}

impl PerformanceTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "bg-green-100 text-green-800",
            Self::Good => "bg-blue-100 text-blue-800",
            Self::NeedsImprovement => "bg-yellow-100 text-yellow-800",
            Self::Poor => "bg-red-100 text-red-800",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
