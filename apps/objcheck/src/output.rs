//! Output rendering for the check and list commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-catalog results and a top-level summary.

use crate::config::OutputMode;
use crate::models::catalog::ClassedObject;
use crate::models::{Finding, Severity, Summary};
use crate::utils;
use crate::validate::{total_summary, CatalogReport};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: OutputMode) -> bool {
    output != OutputMode::Json && utils::colors_enabled()
}

/// Print validation results in the requested format.
pub fn print_check(reports: &[CatalogReport], output: OutputMode) -> serde_json::Result<()> {
    match output {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&compose_check_json(reports)?)?
            );
        }
        OutputMode::Human => {
            let color = use_colors(output);
            for rep in reports {
                print!("{}", render_catalog(rep, color));
            }
            if reports.len() > 1 {
                println!("{}", summary_line("Total", &total_summary(reports), color));
            }
        }
    }
    Ok(())
}

/// Human rendering of one catalog: per-check sections then the summary.
pub fn render_catalog(rep: &CatalogReport, color: bool) -> String {
    let mut out = String::new();
    if color {
        out.push_str(&format!("{}\n", rep.catalog.bold()));
    } else {
        out.push_str(&format!("{}\n", rep.catalog));
    }
    for check in &rep.result.checks {
        let label = format!("❲{}❳", check.check);
        if check.passed() {
            if color {
                out.push_str(&format!(
                    "  {} {} no issues found\n",
                    label.bright_black(),
                    "✔".green()
                ));
            } else {
                out.push_str(&format!("  {} ✔ no issues found\n", label));
            }
            continue;
        }
        if color {
            out.push_str(&format!("  {}\n", label.bright_black()));
        } else {
            out.push_str(&format!("  {}\n", label));
        }
        for f in rep.result.findings_for(check.check) {
            out.push_str(&format!("    {}\n", render_finding(f, color)));
        }
    }
    out.push_str(&summary_line("Summary", &rep.result.summary, color));
    out.push('\n');
    out
}

fn render_finding(f: &Finding, color: bool) -> String {
    let (icon, sev) = match f.severity {
        Severity::Error => {
            if color {
                ("✖".red().to_string(), "⟦error⟧".red().bold().to_string())
            } else {
                ("✖".to_string(), "⟦error⟧".to_string())
            }
        }
        Severity::Warning => {
            if color {
                ("▲".yellow().to_string(), "⟦warn⟧".yellow().bold().to_string())
            } else {
                ("▲".to_string(), "⟦warn⟧".to_string())
            }
        }
    };
    format!("{} {} {}", icon, sev, f.message)
}

fn summary_line(title: &str, s: &Summary, color: bool) -> String {
    let line = format!(
        "— {} — errors={} warnings={} classes={} objects={}",
        title, s.errors, s.warnings, s.classes, s.objects
    );
    if !color {
        return line;
    }
    if s.errors > 0 {
        line.red().bold().to_string()
    } else if s.warnings > 0 {
        line.yellow().bold().to_string()
    } else {
        line.green().bold().to_string()
    }
}

/// Print the object listing.
pub fn print_list(rows: &[ClassedObject<'_>], output: OutputMode) -> serde_json::Result<()> {
    match output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&compose_list_json(rows)?)?);
        }
        OutputMode::Human => {
            let color = use_colors(output);
            let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(0);
            let class_w = rows.iter().map(|r| r.class.chars().count()).max().unwrap_or(0);
            for r in rows {
                let id = format!("{:>id_w$}", r.id);
                let class = format!("{:<class_w$}", r.class);
                if color {
                    println!("{}  {}  {}", id.bold(), class.bright_black(), r.name);
                } else {
                    println!("{}  {}  {}", id, class, r.name);
                }
            }
        }
    }
    Ok(())
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(reports: &[CatalogReport]) -> serde_json::Result<JsonVal> {
    Ok(json!({
        "results": serde_json::to_value(reports)?,
        "summary": serde_json::to_value(total_summary(reports))?,
    }))
}

/// Compose list JSON array (pure) for testing/snapshot purposes.
pub fn compose_list_json(rows: &[ClassedObject<'_>]) -> serde_json::Result<JsonVal> {
    serde_json::to_value(rows)
}
