//! Shared data models for the catalog and validation outputs.

pub mod catalog;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Finding severity. Errors are integrity violations, warnings are style.
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// The checks run over every catalog, in run order.
pub enum CheckKind {
    Uniqueness,
    Sequence,
    Formatting,
}

impl CheckKind {
    pub const ALL: [CheckKind; 3] = [
        CheckKind::Uniqueness,
        CheckKind::Sequence,
        CheckKind::Formatting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Uniqueness => "uniqueness",
            CheckKind::Sequence => "sequence",
            CheckKind::Formatting => "formatting",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single validation finding.
pub struct Finding {
    pub check: CheckKind,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Per-check tally; a check with no findings passed.
pub struct CheckReport {
    pub check: CheckKind,
    pub errors: usize,
    pub warnings: usize,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Aggregated run summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub classes: usize,
    pub objects: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Validation results container for one catalog.
pub struct ValidationResult {
    pub findings: Vec<Finding>,
    pub checks: Vec<CheckReport>,
    pub summary: Summary,
}

impl ValidationResult {
    /// Findings produced by one check, in report order.
    pub fn findings_for(&self, check: CheckKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.check == check)
    }
}
