// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types shared by the lookup, loading and validation paths.

use crate::i18n::LanguageId;
use crate::names::EntryError;

/// Why a language has no table in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// The dataset ships the language but configuration switched it off.
    Disabled,
    /// The dataset has no names for the language at all.
    NotInDataset,
}

impl std::fmt::Display for Unsupported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unsupported::Disabled => write!(f, "disabled by configuration"),
            Unsupported::NotInDataset => write!(f, "not present in the dataset"),
        }
    }
}

/// Errors returned by name and territory lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("`{0}` is not an ISO 639-1 language code")]
    InvalidLanguage(String),
    #[error("territory names are not available in `{language}` ({reason})")]
    LanguageUnsupported {
        language: LanguageId,
        reason: Unsupported,
    },
    #[error("territory ordinal {ordinal} out of range (territory count {count})")]
    OrdinalOutOfRange { ordinal: usize, count: usize },
    #[error("unknown territory `{0}`")]
    UnknownTerritory(String),
    #[error("territory `{input}` is ambiguous, candidates: {}", .candidates.join(", "))]
    AmbiguousTerritory {
        input: String,
        candidates: Vec<String>,
    },
}

/// Errors raised while reading a dataset or building the registry from it.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read dataset {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported dataset schema `{found}` (expected `{expected}`)")]
    Schema { found: String, expected: &'static str },
    #[error("unsupported dataset version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },
    #[error("unsupported name delimiter `{0}` (expected `|`)")]
    Delimiter(String),
    #[error("dataset failed validation with {count} error(s), first: {first}")]
    Invalid { count: usize, first: String },
    #[error("entry for `{code}` in `{language}` is malformed")]
    Entry {
        code: String,
        language: String,
        #[source]
        source: EntryError,
    },
}
