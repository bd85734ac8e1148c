// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor`: self-checks for configuration and dataset health.

use crate::config::{Settings, SettingsSource, CONFIG_ENV, DATA_ENV};
use crate::table::{Availability, TerritoryNames};
use crate::validate;
use anyhow::{anyhow, Result};
use colored::*;
use std::env;
use std::path::Path;

pub fn run_self_diagnostics(settings: &Settings, source: &SettingsSource) -> Result<()> {
    println!("territory-names self-diagnostics");

    let checks = collect(settings, source);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(settings: &Settings, source: &SettingsSource) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("territory-names {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(match source {
        SettingsSource::File(path) => Diagnostic::ok("settings", format!("{}", path.display())),
        SettingsSource::Defaults => {
            Diagnostic::warning("settings", "no settings file, using defaults".to_string())
        }
    });
    checks.push(check_override("settings override", CONFIG_ENV, env::var(CONFIG_ENV).ok()));
    checks.push(check_override("dataset override", DATA_ENV, env::var(DATA_ENV).ok()));

    let dataset = match settings.load_dataset() {
        Ok(dataset) => {
            let origin = settings
                .data
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded".to_string());
            checks.push(Diagnostic::ok(
                "dataset",
                format!("{} ({} territories)", origin, dataset.territory_count()),
            ));
            dataset
        }
        Err(err) => {
            checks.push(Diagnostic::error("dataset", format!("{:#}", err)));
            return checks;
        }
    };

    let report = validate::validate(&dataset);
    checks.push(if report.is_ok() {
        Diagnostic::ok(
            "validation",
            format!("{} warning(s)", report.warnings().count()),
        )
    } else {
        Diagnostic::error(
            "validation",
            format!(
                "{} error(s), run `territory-names validate` for details",
                report.errors().count()
            ),
        )
    });

    match TerritoryNames::build(&dataset, &settings.languages) {
        Ok(names) => {
            for (language, availability) in names.languages() {
                checks.push(check_table(&names, language, availability));
            }
            let default = settings.language(None);
            checks.push(if names.is_available(default) {
                Diagnostic::ok("default language", default.to_string())
            } else {
                Diagnostic::error(
                    "default language",
                    format!("{} has no enabled table", default),
                )
            });
        }
        Err(err) => checks.push(Diagnostic::error("registry", err.to_string())),
    }

    checks
}

fn check_table(
    names: &TerritoryNames,
    language: crate::i18n::LanguageId,
    availability: Availability,
) -> Diagnostic {
    let label = "language table";
    match names.table(language) {
        Ok(table) => Diagnostic::ok(label, format!("{}: {} entries", language, table.len())),
        Err(_) if availability == Availability::Disabled => {
            Diagnostic::warning(label, format!("{}: disabled", language))
        }
        Err(err) => Diagnostic::error(label, err.to_string()),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:18} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

/// An override variable that names a missing file is an error.
fn check_override(label: &'static str, env_key: &str, value: Option<String>) -> Diagnostic {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(value) if Path::new(&value).is_file() => {
            Diagnostic::ok(label, format!("{}={}", env_key, value))
        }
        Some(value) => Diagnostic::error(label, format!("{}={} (file not found)", env_key, value)),
        None => Diagnostic::ok(label, format!("{} not set", env_key)),
    }
}
