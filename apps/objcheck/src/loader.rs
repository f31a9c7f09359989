//! Catalog loading: pattern resolution, file reading and deserialization.
//!
//! The document format follows the file extension (`.yaml`/`.yml`, `.json`,
//! `.toml`); anything else is read as YAML. A failure here aborts before any
//! check runs.

use crate::models::catalog::{Catalog, ObjectClass};
use crate::utils;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => CatalogFormat::Json,
            Some("toml") => CatalogFormat::Toml,
            _ => CatalogFormat::Yaml,
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CatalogFormat::Yaml => "YAML",
            CatalogFormat::Json => "JSON",
            CatalogFormat::Toml => "TOML",
        })
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog not found: {0}")]
    NotFound(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid {format}: {message}")]
    Parse {
        path: String,
        format: CatalogFormat,
        message: String,
    },
    #[error("invalid catalog pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

// TOML needs a table at the root.
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    classes: Vec<ObjectClass>,
}

/// Read and deserialize one catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let shown = utils::rel_to_wd(path);
    if !path.is_file() {
        return Err(LoadError::NotFound(shown));
    }
    let src = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: shown.clone(),
        source,
    })?;
    let format = CatalogFormat::from_path(path);
    log::debug!("read {} ({} bytes) as {}", shown, src.len(), format);
    let catalog = parse_catalog(&src, format).map_err(|message| LoadError::Parse {
        path: shown.clone(),
        format,
        message,
    })?;
    log::debug!(
        "parsed {}: {} class(es), {} object(s)",
        shown,
        catalog.classes.len(),
        catalog.object_count()
    );
    Ok(catalog)
}

/// Deserialize catalog text. The error is the parser's message.
pub fn parse_catalog(src: &str, format: CatalogFormat) -> Result<Catalog, String> {
    let classes = match format {
        CatalogFormat::Yaml => {
            // an empty YAML document is an empty catalog
            if src.trim().is_empty() {
                Vec::new()
            } else {
                serde_yaml::from_str::<Vec<ObjectClass>>(src).map_err(|e| e.to_string())?
            }
        }
        CatalogFormat::Json => {
            serde_json::from_str::<Vec<ObjectClass>>(src).map_err(|e| e.to_string())?
        }
        CatalogFormat::Toml => {
            toml::from_str::<TomlCatalog>(src)
                .map_err(|e| e.to_string())?
                .classes
        }
    };
    Ok(Catalog::new(classes))
}

/// Expand catalog patterns relative to `root` into a sorted, de-duplicated
/// file list. A pattern that matches nothing is an error.
pub fn resolve_catalogs(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, LoadError> {
    let mut out: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs = root.join(pat);
        let pattern = abs.to_string_lossy().to_string();
        let entries = glob::glob(&pattern).map_err(|e| LoadError::Pattern {
            pattern: pat.clone(),
            message: e.to_string(),
        })?;
        let mut matched = false;
        for p in entries.flatten() {
            if p.is_file() {
                matched = true;
                out.push(p);
            }
        }
        if !matched {
            return Err(LoadError::NotFound(utils::rel_to_wd(&abs)));
        }
    }
    out.sort();
    out.dedup();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("a.yml")), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_path(Path::new("a.JSON")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("a.toml")), CatalogFormat::Toml);
        assert_eq!(CatalogFormat::from_path(Path::new("objects")), CatalogFormat::Yaml);
    }

    #[test]
    fn test_parse_each_format() {
        let yaml = "- name: Weapons\n  objects:\n    - id: 1\n      name: Sword\n      tags: blade\n";
        let c = parse_catalog(yaml, CatalogFormat::Yaml).unwrap();
        assert_eq!(c.classes[0].objects[0].name, "Sword");

        let json = r#"[{"class":"Armor","objects":[{"id":2,"name":"Helm"}]}]"#;
        let c = parse_catalog(json, CatalogFormat::Json).unwrap();
        assert_eq!(c.classes[0].name, "Armor");
        assert_eq!(c.classes[0].objects[0].tags, "");

        let toml_src = r#"
[[classes]]
name = "Potions"
[[classes.objects]]
id = 3
name = "Elixir"
"#;
        let c = parse_catalog(toml_src, CatalogFormat::Toml).unwrap();
        assert_eq!(c.classes[0].objects[0].id, 3);

        assert!(parse_catalog("", CatalogFormat::Yaml).unwrap().classes.is_empty());
    }

    #[test]
    fn test_parse_failure_is_reported() {
        assert!(parse_catalog("- id: [oops", CatalogFormat::Yaml).is_err());
        assert!(parse_catalog(r#"[{"name":"A","objects":[{"id":"x"}]}]"#, CatalogFormat::Json).is_err());
    }

    #[test]
    fn test_load_missing_and_invalid_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(load_catalog(&missing), Err(LoadError::NotFound(_))));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        match load_catalog(&bad) {
            Err(LoadError::Parse { format, .. }) => assert_eq!(format, CatalogFormat::Json),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_catalogs_globs_sorted() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("data")).unwrap();
        fs::write(root.join("data/b.yaml"), "[]").unwrap();
        fs::write(root.join("data/a.yaml"), "[]").unwrap();

        let found = resolve_catalogs(
            root,
            &["data/*.yaml".to_string(), "data/a.yaml".to_string()],
        )
        .unwrap();
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("a.yaml"));

        let err = resolve_catalogs(root, &["data/*.json".to_string()]);
        assert!(matches!(err, Err(LoadError::NotFound(_))));
    }
}
