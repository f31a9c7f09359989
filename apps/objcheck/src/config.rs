//! Configuration discovery and effective settings resolution.
//!
//! objcheck reads `objcheck.toml|yaml|yml` from the project root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `catalogs`: none (must come from CLI or config)
//! - `output`: `human`
//! - `strict`: false
//! - `list.sort`: `id`
//!
//! Overrides precedence: CLI > config file > defaults.
//!
//! Catalog patterns given on the CLI resolve against `--root` (or the working
//! directory); patterns from the config file resolve against the directory
//! holding that file.

use crate::listing::SortKey;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["objcheck.toml", "objcheck.yaml", "objcheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Listing section under `[list]`.
pub struct ListCfg {
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `objcheck.toml|yaml`.
pub struct ObjcheckConfig {
    /// Catalog paths or glob patterns, relative to the project root.
    #[serde(default)]
    pub catalogs: Option<Vec<String>>,
    pub output: Option<String>,
    /// Treat warnings as failures for the exit code.
    pub strict: Option<bool>,
    #[serde(default)]
    pub list: Option<ListCfg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    /// Unknown values fall back to human output.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    /// Discovered project root, where the config file is looked up.
    pub root: PathBuf,
    /// Directory `catalogs` patterns are relative to.
    pub catalog_base: PathBuf,
    pub catalogs: Vec<String>,
    pub catalogs_from_cli: bool,
    pub output: OutputMode,
    pub strict: bool,
    pub sort: SortKey,
    pub config_found: bool,
}

impl Effective {
    /// True when no CLI catalogs were given and no config file was found.
    pub fn using_defaults(&self) -> bool {
        !self.config_found && !self.catalogs_from_cli
    }
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when an `objcheck.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ObjcheckConfig` from the first config file present in `root`.
///
/// A file that cannot be read or parsed is skipped with a warning in the log.
pub fn load_config(root: &Path) -> Option<ObjcheckConfig> {
    for name in CONFIG_NAMES {
        let p = root.join(name);
        if !p.exists() {
            continue;
        }
        let s = match fs::read_to_string(&p) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("ignoring {}: {}", p.to_string_lossy(), e);
                return None;
            }
        };
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<ObjcheckConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<ObjcheckConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                log::warn!("ignoring {}: {}", p.to_string_lossy(), e);
                None
            }
        };
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_catalogs: &[String],
    cli_output: Option<&str>,
    cli_strict: Option<bool>,
    cli_sort: Option<SortKey>,
) -> Effective {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    // walk real ancestors even when `start` is relative
    let root = detect_root(&fs::canonicalize(&start).unwrap_or_else(|_| start.clone()));
    let loaded = load_config(&root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let catalogs_from_cli = !cli_catalogs.is_empty();
    let (catalogs, catalog_base) = if catalogs_from_cli {
        (cli_catalogs.to_vec(), start)
    } else {
        (cfg.catalogs.unwrap_or_default(), root.clone())
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .map(|s| OutputMode::parse(&s))
        .unwrap_or(OutputMode::Human);

    let strict = cli_strict.or(cfg.strict).unwrap_or(false);

    let sort = cli_sort
        .or_else(|| {
            cfg.list
                .as_ref()
                .and_then(|l| l.sort.as_deref())
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or_default();

    log::debug!(
        "effective config: root={} base={} catalogs={:?} output={:?} strict={} sort={:?}",
        root.to_string_lossy(),
        catalog_base.to_string_lossy(),
        catalogs,
        output,
        strict,
        sort
    );

    Effective {
        root,
        catalog_base,
        catalogs,
        catalogs_from_cli,
        output,
        strict,
        sort,
        config_found,
    }
}
