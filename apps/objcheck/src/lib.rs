//! objcheck core library.
//!
//! Validates object catalogs: classes of named objects with numeric ids,
//! loaded from YAML, JSON or TOML files.
//!
//! High-level modules:
//! - `checks`: uniqueness, sequence and formatting checks.
//! - `report`: per-run severity reporter the checks write to.
//! - `validate`: runner producing findings plus a summary.
//! - `loader`: catalog pattern resolution and deserialization.
//! - `listing`: sorted object listing.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `models`: Catalog and result data models.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod listing;
pub mod loader;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
pub mod validate;

pub use models::catalog::{Catalog, Object, ObjectClass};
pub use models::{Finding, Severity, Summary, ValidationResult};
pub use validate::validate_catalog;
