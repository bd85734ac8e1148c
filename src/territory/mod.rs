// SPDX-License-Identifier: PMPL-1.0-or-later

//! Territory enumeration and code resolution.
//!
//! The position of a territory in the dataset is its ordinal, and every
//! language table is indexed by that ordinal. Subdivision codes carry a
//! two-letter parent prefix (`US-CA`); the dataset maps each prefix to the
//! owning country (`US -> USA`).

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Fixed position of a territory in the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ordinal(pub usize);

impl Ordinal {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A syntactically valid territory code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TerritoryCode(String);

impl TerritoryCode {
    /// Normalize and check a code.
    ///
    /// Accepts `USA`, `aaa`, `us-ca`, `US_CA`. Returns `None` when the input
    /// is neither a 2-3 character country code nor a `XX-YYY` subdivision.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = normalize(input);
        if is_country_code(&normalized) || is_subdivision_code(&normalized) {
            Some(Self(normalized))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_subdivision(&self) -> bool {
        self.0.contains('-')
    }

    /// `US` for `US-CA`, `None` for country codes.
    pub fn parent_prefix(&self) -> Option<&str> {
        self.0.split_once('-').map(|(prefix, _)| prefix)
    }

    /// `CA` for `US-CA`, `None` for country codes.
    pub fn subdivision(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, sub)| sub)
    }
}

impl std::fmt::Display for TerritoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_uppercase().replace('_', "-")
}

fn is_country_code(code: &str) -> bool {
    (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_subdivision_code(code: &str) -> bool {
    match code.split_once('-') {
        Some((prefix, sub)) => {
            prefix.len() == 2
                && prefix.bytes().all(|b| b.is_ascii_uppercase())
                && (1..=3).contains(&sub.len())
                && sub.bytes().all(|b| b.is_ascii_alphanumeric())
        }
        None => false,
    }
}

/// Ordered territory codes with O(1) lookups in both directions.
#[derive(Debug, Clone)]
pub struct TerritoryIndex {
    codes: Vec<TerritoryCode>,
    by_code: HashMap<String, Ordinal>,
    // Subdivision prefix -> ordinal of the owning country.
    parents: BTreeMap<String, Ordinal>,
}

impl TerritoryIndex {
    /// Build from codes already checked for syntax and uniqueness.
    pub(crate) fn new(codes: Vec<TerritoryCode>, parents: &BTreeMap<String, String>) -> Self {
        let by_code = codes
            .iter()
            .enumerate()
            .map(|(idx, code)| (code.as_str().to_string(), Ordinal(idx)))
            .collect::<HashMap<_, _>>();
        let parents = parents
            .iter()
            .filter_map(|(prefix, country)| {
                by_code
                    .get(country.as_str())
                    .map(|ordinal| (prefix.clone(), *ordinal))
            })
            .collect();
        Self {
            codes,
            by_code,
            parents,
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Exact lookup of a normalized code.
    pub fn ordinal_of(&self, code: &str) -> Option<Ordinal> {
        self.by_code.get(normalize(code).as_str()).copied()
    }

    pub fn code_of(&self, ordinal: Ordinal) -> Result<&TerritoryCode, LookupError> {
        self.codes
            .get(ordinal.0)
            .ok_or(LookupError::OrdinalOutOfRange {
                ordinal: ordinal.0,
                count: self.codes.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ordinal, &TerritoryCode)> {
        self.codes
            .iter()
            .enumerate()
            .map(|(idx, code)| (Ordinal(idx), code))
    }

    /// The country owning a subdivision, `None` for countries.
    pub fn parent_of(&self, ordinal: Ordinal) -> Option<Ordinal> {
        let code = self.codes.get(ordinal.0)?;
        self.parents.get(code.parent_prefix()?).copied()
    }

    /// Subdivisions belonging to a country.
    pub fn subdivisions_of(&self, country: Ordinal) -> Vec<Ordinal> {
        self.iter()
            .filter(|(ordinal, _)| self.parent_of(*ordinal) == Some(country))
            .map(|(ordinal, _)| ordinal)
            .collect()
    }

    /// Resolve user input to an ordinal.
    ///
    /// An exact code wins. A bare subdivision code (`CA`) is then tried
    /// against the context country (`USA` or its prefix `US`), and finally
    /// against every parent; more than one hit there is ambiguous.
    pub fn resolve(&self, input: &str, context: Option<&str>) -> Result<Ordinal, LookupError> {
        let normalized = normalize(input);
        if let Some(ordinal) = self.by_code.get(normalized.as_str()) {
            return Ok(*ordinal);
        }
        if normalized.contains('-') || normalized.is_empty() {
            return Err(LookupError::UnknownTerritory(input.trim().to_string()));
        }

        if let Some(prefix) = context.and_then(|ctx| self.context_prefix(ctx)) {
            let candidate = format!("{}-{}", prefix, normalized);
            if let Some(ordinal) = self.by_code.get(candidate.as_str()) {
                return Ok(*ordinal);
            }
        }

        let matches: Vec<Ordinal> = self
            .iter()
            .filter(|(_, code)| code.subdivision() == Some(normalized.as_str()))
            .map(|(ordinal, _)| ordinal)
            .collect();
        match matches.as_slice() {
            [single] => Ok(*single),
            [] => Err(LookupError::UnknownTerritory(input.trim().to_string())),
            many => Err(LookupError::AmbiguousTerritory {
                input: input.trim().to_string(),
                candidates: many
                    .iter()
                    .map(|ordinal| self.codes[ordinal.0].as_str().to_string())
                    .collect(),
            }),
        }
    }

    // Accepts either a parent prefix (`US`) or the country code (`USA`).
    fn context_prefix(&self, context: &str) -> Option<String> {
        let context = normalize(context);
        if self.parents.contains_key(context.as_str()) {
            return Some(context);
        }
        let country = self.by_code.get(context.as_str())?;
        self.parents
            .iter()
            .find(|(_, ordinal)| *ordinal == country)
            .map(|(prefix, _)| prefix.clone())
    }
}
