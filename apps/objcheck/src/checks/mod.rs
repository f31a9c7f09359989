//! Catalog checks. Each check tags its findings by calling
//! `Reporter::begin` before reporting anything.

pub mod formatting;
pub mod sequence;
pub mod uniqueness;

pub use formatting::check_formatting;
pub use sequence::check_sequence;
pub use uniqueness::check_uniqueness;

use crate::models::catalog::Catalog;
use crate::models::CheckKind;
use crate::report::Reporter;

/// Run all checks in `CheckKind::ALL` order against `catalog`.
pub fn run_checks(catalog: &Catalog, reporter: &mut Reporter) {
    let objects = catalog.flatten();
    for kind in CheckKind::ALL {
        match kind {
            CheckKind::Uniqueness => check_uniqueness(&objects, reporter),
            CheckKind::Sequence => check_sequence(&objects, reporter),
            CheckKind::Formatting => check_formatting(&catalog.classes, &objects, reporter),
        }
        if let Some(done) = reporter.end() {
            log::debug!(
                "check {} finished: {} error(s), {} warning(s)",
                done.check,
                done.errors,
                done.warnings
            );
        }
    }
}
