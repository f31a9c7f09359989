//! Supporting helpers: colored message prefixes and path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are on unless `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if colors_enabled() {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.cyan().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info:", |s| s.blue().bold().to_string())
}

/// Display `p` relative to the working directory when that is shorter.
pub fn rel_to_wd(p: &Path) -> String {
    let rel = std::env::current_dir()
        .ok()
        .and_then(|wd| pathdiff::diff_paths(p, wd));
    match rel {
        Some(r) if !r.as_os_str().is_empty() && !r.starts_with("..") => {
            r.to_string_lossy().to_string()
        }
        _ => p.to_string_lossy().to_string(),
    }
}
