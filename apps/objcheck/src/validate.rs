//! Validation runner.
//!
//! `validate_catalog` is the pure core: a fresh `Reporter` per call, the
//! three checks in fixed order, findings and summary returned to the caller.
//! `run_validation` adds file loading for the CLI. Every catalog is loaded
//! before any is validated, so a load failure never yields partial results.

use crate::checks::run_checks;
use crate::loader::{self, LoadError};
use crate::models::catalog::Catalog;
use crate::models::{Summary, ValidationResult};
use crate::report::Reporter;
use crate::utils;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
/// Result for one catalog file.
pub struct CatalogReport {
    pub catalog: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Validate an already loaded catalog.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut reporter = Reporter::new();
    run_checks(catalog, &mut reporter);
    let res = reporter.finish(catalog.classes.len(), catalog.object_count());
    log::info!(
        "validated {} class(es) and {} object(s): {} error(s), {} warning(s)",
        res.summary.classes,
        res.summary.objects,
        res.summary.errors,
        res.summary.warnings
    );
    res
}

/// Load every catalog matched by `patterns` under `root`, then validate each
/// independently.
pub fn run_validation(root: &Path, patterns: &[String]) -> Result<Vec<CatalogReport>, LoadError> {
    let paths = loader::resolve_catalogs(root, patterns)?;
    let mut loaded = Vec::with_capacity(paths.len());
    for p in &paths {
        loaded.push((utils::rel_to_wd(p), loader::load_catalog(p)?));
    }
    Ok(loaded
        .into_iter()
        .map(|(catalog, c)| CatalogReport {
            catalog,
            result: validate_catalog(&c),
        })
        .collect())
}

/// Process exit code when every catalog was clean.
pub const EXIT_CLEAN: i32 = 0;
/// Errors were found, or warnings under `strict`.
pub const EXIT_FINDINGS: i32 = 1;
/// Configuration problem or a catalog that could not be loaded.
pub const EXIT_LOAD_FAILURE: i32 = 2;

/// Exit code for a finished validation run.
pub fn exit_code(total: &Summary, strict: bool) -> i32 {
    if total.errors > 0 || (strict && total.warnings > 0) {
        EXIT_FINDINGS
    } else {
        EXIT_CLEAN
    }
}

/// Exit code for the outcome of `run_validation`.
pub fn outcome_exit_code(outcome: &Result<Vec<CatalogReport>, LoadError>, strict: bool) -> i32 {
    match outcome {
        Ok(reports) => exit_code(&total_summary(reports), strict),
        Err(_) => EXIT_LOAD_FAILURE,
    }
}

/// Sum of all per-catalog summaries.
pub fn total_summary(reports: &[CatalogReport]) -> Summary {
    reports.iter().fold(Summary::default(), |acc, r| Summary {
        errors: acc.errors + r.result.summary.errors,
        warnings: acc.warnings + r.result.summary.warnings,
        classes: acc.classes + r.result.summary.classes,
        objects: acc.objects + r.result.summary.objects,
    })
}
