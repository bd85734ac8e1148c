// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of lookups, listings and export bundles

pub mod export;
pub mod output;

use crate::table::{Availability, TerritoryNames};
use crate::validate::{Severity, ValidationReport};
use anyhow::{anyhow, Result};
use colored::*;

pub use export::ExportBundle;
pub use output::OutputFormat;

/// Print the languages a registry carries.
pub fn print_languages(names: &TerritoryNames) {
    println!("{}", "Languages".bold().cyan());
    for (language, availability) in names.languages() {
        let state = match availability {
            Availability::Enabled => "enabled".green(),
            Availability::Disabled => "disabled".yellow(),
        };
        println!(
            "  {}  {:<10} {:<12} {}",
            language,
            state,
            language.english_name().unwrap_or("-"),
            language.native_name().unwrap_or("-")
        );
    }
    println!("  {} territories", names.territory_count());
}

/// Print validation findings, errors first.
pub fn print_validation(report: &ValidationReport) {
    println!(
        "{} {} territories, languages: {}",
        "Validated".bold().cyan(),
        report.territories,
        if report.languages.is_empty() {
            "none".to_string()
        } else {
            report.languages.join(", ")
        }
    );
    let mut findings: Vec<_> = report.findings.iter().collect();
    findings.sort_by(|a, b| b.severity.cmp(&a.severity));
    for finding in findings {
        let tag = match finding.severity {
            Severity::Error => "ERR ".red().bold(),
            Severity::Warning => "WARN".yellow(),
        };
        println!("  [{}] {}", tag, finding);
    }
    println!(
        "  {} error(s), {} warning(s)",
        report.errors().count(),
        report.warnings().count()
    );
}

/// Serialized validation report, or `None` for the coloured text report.
pub fn validation_output(report: &ValidationReport, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json | OutputFormat::Yaml => Ok(Some(format.serialize(report)?)),
        OutputFormat::Tsv => Err(anyhow!(
            "validation findings support text, json or yaml, not {}",
            format.extension()
        )),
    }
}

/// Language list for a human-readable unsupported-language hint.
pub fn available_summary(names: &TerritoryNames) -> String {
    let available: Vec<String> = names
        .languages()
        .filter(|(_, availability)| *availability == Availability::Enabled)
        .map(|(language, _)| language.to_string())
        .collect();
    if available.is_empty() {
        "no languages are enabled".to_string()
    } else {
        format!("available: {}", available.join(", "))
    }
}
