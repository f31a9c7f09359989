//! Severity reporter: the single channel checks record findings through.
//!
//! A `Reporter` is built per validation run so counts never leak between
//! runs. It only records; rendering lives in `output`.

use crate::models::{CheckKind, CheckReport, Finding, Severity, Summary, ValidationResult};

#[derive(Debug)]
pub struct Reporter {
    findings: Vec<Finding>,
    checks: Vec<CheckReport>,
    current: Option<CheckReport>,
    errors: usize,
    warnings: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            findings: Vec::new(),
            checks: Vec::new(),
            current: None,
            errors: 0,
            warnings: 0,
        }
    }

    /// Start attributing findings to `check`. Closes any check left open.
    pub fn begin(&mut self, check: CheckKind) {
        self.end();
        self.current = Some(CheckReport {
            check,
            errors: 0,
            warnings: 0,
        });
    }

    /// Close the current check and return its tally.
    pub fn end(&mut self) -> Option<CheckReport> {
        let done = self.current.take()?;
        self.checks.push(done);
        Some(done)
    }

    /// Record a finding against the open check and bump the matching counter.
    ///
    /// Every finding belongs to a check, so one reported before `begin` is
    /// dropped and logged.
    pub fn report(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        let Some(current) = self.current.as_mut() else {
            log::warn!("finding reported outside a check was dropped: {}", message);
            return;
        };
        match severity {
            Severity::Error => {
                self.errors += 1;
                current.errors += 1;
            }
            Severity::Warning => {
                self.warnings += 1;
                current.warnings += 1;
            }
        }
        self.findings.push(Finding {
            check: current.check,
            severity,
            message,
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.report(Severity::Error, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.report(Severity::Warning, message);
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Consume the reporter into a result for a catalog of the given size.
    pub fn finish(mut self, classes: usize, objects: usize) -> ValidationResult {
        self.end();
        ValidationResult {
            findings: self.findings,
            checks: self.checks,
            summary: Summary {
                errors: self.errors,
                warnings: self.warnings,
                classes,
                objects,
            },
        }
    }
}
