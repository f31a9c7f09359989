//! CLI argument parsing via `clap`.

use crate::listing::SortKey;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "objcheck",
    version,
    about = "Validate object catalogs",
    long_about = "objcheck — checks YAML/JSON/TOML object catalogs for duplicate ids and names, gaps in the id sequence, and naming conventions.\n\nConfiguration precedence: CLI > objcheck.toml > defaults.",
    after_help = "Examples:\n  objcheck check --catalog objects.yaml\n  objcheck check --catalog 'catalogs/*.yaml' --output json\n  objcheck list --catalog objects.yaml --sort name",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error); RUST_LOG wins when set"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current objcheck version.")]
    Version,
    /// Validate catalogs
    #[command(
        about = "Run catalog checks",
        long_about = "Run the uniqueness, sequence and formatting checks over every matched catalog. Exits 1 when errors are found (or warnings with --strict), 2 when a catalog cannot be loaded.",
        after_help = "Examples:\n  objcheck check --catalog objects.yaml\n  objcheck check --catalog 'data/*.yml' --strict"
    )]
    Check {
        #[arg(long, help = "Project root (default: current dir)")]
        root: Option<String>,
        #[arg(long = "catalog", help = "Catalog path or glob pattern (repeatable)")]
        catalogs: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero on warnings too")]
        strict: bool,
    },
    /// List catalog objects
    #[command(
        about = "List objects",
        long_about = "Print every object with its class, sorted by id, name or class.",
        after_help = "Examples:\n  objcheck list --catalog objects.yaml --sort class"
    )]
    List {
        #[arg(long, help = "Project root (default: current dir)")]
        root: Option<String>,
        #[arg(long = "catalog", help = "Catalog path or glob pattern (repeatable)")]
        catalogs: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Sort key: id|name|class (default: id)")]
        sort: Option<SortKey>,
    },
}
