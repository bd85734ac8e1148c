// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-language name tables and the registry that serves lookups.
//!
//! [`TerritoryNames`] is built once from a validated [`Dataset`] and never
//! mutated afterwards, so a shared reference can be read from any number of
//! threads. Each language the dataset carries has a slot that is either a
//! loaded table or an explicit disabled marker.

use crate::dataset::Dataset;
use crate::error::{DataError, LookupError, Unsupported};
use crate::i18n::LanguageId;
use crate::names::{NameEntry, TerritoryName};
use crate::territory::{Ordinal, TerritoryCode, TerritoryIndex};
use crate::validate;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Whether a language's table is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Enabled,
    Disabled,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Enabled => f.write_str("enabled"),
            Availability::Disabled => f.write_str("disabled"),
        }
    }
}

/// All names for one language, indexed by territory ordinal.
#[derive(Debug, Clone)]
pub struct NameTable {
    entries: Vec<NameEntry>,
}

impl NameTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, ordinal: Ordinal) -> Option<&NameEntry> {
        self.entries.get(ordinal.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ordinal, &NameEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (Ordinal(idx), entry))
    }
}

#[derive(Debug, Clone)]
pub enum LanguageSlot {
    Loaded(NameTable),
    Disabled,
}

impl LanguageSlot {
    pub fn availability(&self) -> Availability {
        match self {
            LanguageSlot::Loaded(_) => Availability::Enabled,
            LanguageSlot::Disabled => Availability::Disabled,
        }
    }
}

/// Immutable registry of territory names in every configured language.
#[derive(Debug, Clone)]
pub struct TerritoryNames {
    territories: TerritoryIndex,
    slots: BTreeMap<LanguageId, LanguageSlot>,
    fingerprint: String,
}

impl TerritoryNames {
    /// Validate `dataset` and build the registry.
    ///
    /// Languages absent from `availability` are enabled. Entries in
    /// `availability` for languages the dataset lacks are ignored; lookups
    /// in those languages report [`Unsupported::NotInDataset`].
    pub fn build(
        dataset: &Dataset,
        availability: &BTreeMap<LanguageId, Availability>,
    ) -> Result<Self, DataError> {
        let report = validate::validate(dataset);
        if let Some(first) = report.errors().next() {
            return Err(DataError::Invalid {
                count: report.errors().count(),
                first: first.to_string(),
            });
        }

        let mut codes = Vec::with_capacity(dataset.territory_count());
        for record in &dataset.territories {
            // Validation already rejected malformed codes.
            let code = TerritoryCode::parse(&record.code)
                .ok_or_else(|| DataError::Invalid {
                    count: 1,
                    first: format!("{}: malformed territory code", record.code),
                })?;
            codes.push(code);
        }
        let territories = TerritoryIndex::new(codes, &dataset.parents);

        let mut slots = BTreeMap::new();
        for language in dataset.languages() {
            let wanted = availability
                .get(&language)
                .copied()
                .unwrap_or(Availability::Enabled);
            let slot = match wanted {
                Availability::Enabled => LanguageSlot::Loaded(load_table(dataset, language)?),
                Availability::Disabled => LanguageSlot::Disabled,
            };
            debug!(language = %language, availability = %wanted, "configured name table");
            slots.insert(language, slot);
        }

        info!(
            territories = territories.len(),
            languages = slots.len(),
            "territory names loaded"
        );
        Ok(Self {
            territories,
            slots,
            fingerprint: dataset.fingerprint().to_string(),
        })
    }

    pub fn territories(&self) -> &TerritoryIndex {
        &self.territories
    }

    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Languages the dataset carries, with their configured availability.
    pub fn languages(&self) -> impl Iterator<Item = (LanguageId, Availability)> + '_ {
        self.slots
            .iter()
            .map(|(language, slot)| (*language, slot.availability()))
    }

    pub fn is_available(&self, language: LanguageId) -> bool {
        matches!(self.slots.get(&language), Some(LanguageSlot::Loaded(_)))
    }

    /// The loaded table for `language`, or why there is none.
    pub fn table(&self, language: LanguageId) -> Result<&NameTable, LookupError> {
        match self.slots.get(&language) {
            Some(LanguageSlot::Loaded(table)) => Ok(table),
            Some(LanguageSlot::Disabled) => Err(LookupError::LanguageUnsupported {
                language,
                reason: Unsupported::Disabled,
            }),
            None => Err(LookupError::LanguageUnsupported {
                language,
                reason: Unsupported::NotInDataset,
            }),
        }
    }

    /// Raw entry for a territory. The language is checked before the ordinal.
    pub fn entry(&self, ordinal: Ordinal, language: LanguageId) -> Result<&NameEntry, LookupError> {
        let table = self.table(language)?;
        table.get(ordinal).ok_or(LookupError::OrdinalOutOfRange {
            ordinal: ordinal.0,
            count: table.len(),
        })
    }

    /// Primary and alternate names of the territory at `ordinal`.
    pub fn lookup(&self, ordinal: Ordinal, language: LanguageId) -> Result<TerritoryName, LookupError> {
        let entry = self.entry(ordinal, language)?;
        let code = self.territories.code_of(ordinal)?;
        Ok(TerritoryName::from_entry(
            code.as_str(),
            ordinal.0,
            language.code(),
            entry,
        ))
    }

    /// Resolve a territory code (see [`TerritoryIndex::resolve`]) and look it up.
    pub fn lookup_code(
        &self,
        code: &str,
        language: LanguageId,
        context: Option<&str>,
    ) -> Result<TerritoryName, LookupError> {
        // Fail on the language first so a disabled table never leaks partial answers.
        self.table(language)?;
        let ordinal = self.territories.resolve(code, context)?;
        self.lookup(ordinal, language)
    }

    /// Every territory in ordinal order for one language.
    pub fn all(&self, language: LanguageId) -> Result<Vec<TerritoryName>, LookupError> {
        let table = self.table(language)?;
        table
            .iter()
            .map(|(ordinal, entry)| {
                let code = self.territories.code_of(ordinal)?;
                Ok(TerritoryName::from_entry(
                    code.as_str(),
                    ordinal.0,
                    language.code(),
                    entry,
                ))
            })
            .collect()
    }
}

fn load_table(dataset: &Dataset, language: LanguageId) -> Result<NameTable, DataError> {
    let entries = dataset
        .territories
        .iter()
        .map(|record| {
            let raw = record.names.get(language.code()).cloned().unwrap_or_default();
            NameEntry::parse(raw).map_err(|source| DataError::Entry {
                code: record.code.clone(),
                language: language.code().to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(NameTable { entries })
}

static EMBEDDED: OnceCell<TerritoryNames> = OnceCell::new();

/// Process-wide registry built from the compiled-in dataset, all languages enabled.
pub fn embedded() -> Result<&'static TerritoryNames, DataError> {
    EMBEDDED.get_or_try_init(|| {
        let dataset = Dataset::embedded()?;
        TerritoryNames::build(&dataset, &BTreeMap::new())
    })
}
