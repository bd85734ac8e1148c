// SPDX-License-Identifier: PMPL-1.0-or-later

//! Data-integrity checks for a territory dataset.
//!
//! Run once when the registry is built and on demand through the
//! `validate` command. Errors block loading; warnings are reported only.

use crate::dataset::Dataset;
use crate::i18n::is_valid_iso639_1;
use crate::names::{self, DELIMITER};
use crate::territory::TerritoryCode;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Territory code (or parent prefix) the finding is about.
    pub code: Option<String>,
    pub language: Option<String>,
    pub message: String,
}

impl Finding {
    fn error(code: Option<&str>, language: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code: code.map(str::to_string),
            language: language.map(str::to_string),
            message,
        }
    }

    fn warning(code: Option<&str>, language: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.map(str::to_string),
            language: language.map(str::to_string),
            message,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.language) {
            (Some(code), Some(lang)) => write!(f, "{} [{}]: {}", code, lang, self.message),
            (Some(code), None) => write!(f, "{}: {}", code, self.message),
            (None, Some(lang)) => write!(f, "[{}]: {}", lang, self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub territories: usize,
    pub languages: Vec<String>,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// Errors always fail; under `strict` warnings fail too.
    pub fn passes(&self, strict: bool) -> bool {
        self.is_ok() && !(strict && self.warnings().next().is_some())
    }
}

/// Check every structural rule the lookup path relies on.
pub fn validate(dataset: &Dataset) -> ValidationReport {
    let mut findings = Vec::new();
    let languages = dataset.language_keys();

    if dataset.territories.is_empty() {
        findings.push(Finding::error(None, None, "dataset has no territories".to_string()));
    } else if languages.is_empty() {
        findings.push(Finding::error(None, None, "dataset carries no languages".to_string()));
    }

    for lang in languages.iter().copied() {
        if !is_valid_iso639_1(lang) {
            findings.push(Finding::error(
                None,
                Some(lang),
                "language key is not a lowercase ISO 639-1 code".to_string(),
            ));
        }
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut prefixes_used = BTreeSet::new();
    for (ordinal, record) in dataset.territories.iter().enumerate() {
        let code = record.code.as_str();
        match TerritoryCode::parse(code) {
            Some(parsed) if parsed.as_str() == code => {
                if let Some(prefix) = parsed.parent_prefix() {
                    prefixes_used.insert(prefix.to_string());
                    if !dataset.parents.contains_key(prefix) {
                        findings.push(Finding::error(
                            Some(code),
                            None,
                            format!("subdivision prefix `{}` has no parent territory", prefix),
                        ));
                    }
                }
            }
            Some(_) => findings.push(Finding::error(
                Some(code),
                None,
                "territory code is not in canonical uppercase form".to_string(),
            )),
            None => findings.push(Finding::error(
                Some(code),
                None,
                "malformed territory code".to_string(),
            )),
        }
        if let Some(first) = seen.insert(code.to_ascii_uppercase(), ordinal) {
            findings.push(Finding::error(
                Some(code),
                None,
                format!("duplicate territory code (ordinals {} and {})", first, ordinal),
            ));
        }

        for lang in languages.iter().copied() {
            match record.names.get(lang) {
                Some(raw) => check_entry(code, lang, raw, &mut findings),
                None => findings.push(Finding::error(
                    Some(code),
                    Some(lang),
                    "missing translation, table would be shorter than the territory list"
                        .to_string(),
                )),
            }
        }
    }

    for (prefix, country) in &dataset.parents {
        if !seen.contains_key(country.as_str()) {
            findings.push(Finding::error(
                Some(prefix.as_str()),
                None,
                format!("parent territory `{}` is not in the dataset", country),
            ));
        }
        if !prefixes_used.contains(prefix) {
            findings.push(Finding::warning(
                Some(prefix.as_str()),
                None,
                "parent mapping has no subdivisions".to_string(),
            ));
        }
    }

    ValidationReport {
        territories: dataset.territories.len(),
        languages: languages.iter().map(|l| l.to_string()).collect(),
        findings,
    }
}

fn check_entry(code: &str, lang: &str, raw: &str, findings: &mut Vec<Finding>) {
    if let Err(err) = names::check(raw) {
        findings.push(Finding::error(Some(code), Some(lang), err.to_string()));
        return;
    }
    let mut distinct = BTreeSet::new();
    for name in raw.split(DELIMITER) {
        if !distinct.insert(name) {
            findings.push(Finding::warning(
                Some(code),
                Some(lang),
                format!("name `{}` is listed more than once", name),
            ));
        }
    }
}
