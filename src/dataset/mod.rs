// SPDX-License-Identifier: PMPL-1.0-or-later

//! The territory name data file.
//!
//! One row per territory, in ordinal order, each with a language-keyed map
//! of delimiter-joined names:
//!
//! ```json
//! {
//!   "schema": "mapcode.territory-names",
//!   "version": 1,
//!   "delimiter": "|",
//!   "parents": { "US": "USA" },
//!   "territories": [
//!     { "code": "VAT", "names": { "ko": "바티칸 시국|교황청" } }
//!   ]
//! }
//! ```
//!
//! The shipped file is compiled in; a replacement can be loaded from disk.
//! The file is generated from the canonical Mapcode sources and is not
//! edited by hand.

use crate::error::DataError;
use crate::i18n::LanguageId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

pub const DATASET_SCHEMA: &str = "mapcode.territory-names";
pub const DATASET_VERSION: u32 = 1;

const EMBEDDED_DATASET: &str = include_str!("../../data/territory_names.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryRecord {
    pub code: String,
    #[serde(default)]
    pub names: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub schema: String,
    pub version: u32,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub parents: BTreeMap<String, String>,
    pub territories: Vec<TerritoryRecord>,
    #[serde(skip)]
    fingerprint: String,
}

fn default_delimiter() -> String {
    crate::names::DELIMITER.to_string()
}

impl Dataset {
    /// Parse a dataset from JSON text and check its header.
    pub fn parse(text: &str) -> Result<Self, DataError> {
        let mut dataset: Dataset = serde_json::from_str(text)?;
        if dataset.schema != DATASET_SCHEMA {
            return Err(DataError::Schema {
                found: dataset.schema,
                expected: DATASET_SCHEMA,
            });
        }
        if dataset.version != DATASET_VERSION {
            return Err(DataError::Version {
                found: dataset.version,
                expected: DATASET_VERSION,
            });
        }
        if dataset.delimiter != default_delimiter() {
            return Err(DataError::Delimiter(dataset.delimiter));
        }
        dataset.fingerprint = hex::encode(Sha256::digest(text.as_bytes()));
        debug!(
            territories = dataset.territories.len(),
            fingerprint = %dataset.fingerprint,
            "parsed territory dataset"
        );
        Ok(dataset)
    }

    /// Read and parse a dataset file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loading territory dataset");
        Self::parse(&text)
    }

    /// The dataset compiled into the crate.
    pub fn embedded() -> Result<Self, DataError> {
        Self::parse(EMBEDDED_DATASET)
    }

    /// Every language key that appears in any row, valid or not.
    pub fn language_keys(&self) -> BTreeSet<&str> {
        self.territories
            .iter()
            .flat_map(|record| record.names.keys().map(String::as_str))
            .collect()
    }

    /// Language keys that are valid ISO 639-1 codes.
    pub fn languages(&self) -> BTreeSet<LanguageId> {
        self.language_keys()
            .into_iter()
            .filter_map(|key| LanguageId::parse(key).ok())
            .collect()
    }

    /// SHA-256 of the source text, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "schema": "mapcode.territory-names",
        "version": 1,
        "territories": [ { "code": "KOR", "names": { "ko": "대한민국" } } ]
    }"#;

    #[test]
    fn minimal_dataset_parses_with_default_delimiter() {
        let dataset = Dataset::parse(MINIMAL).unwrap();
        assert_eq!(dataset.delimiter, "|");
        assert_eq!(dataset.territory_count(), 1);
        assert_eq!(dataset.fingerprint().len(), 64);
        assert!(dataset.languages().contains(&LanguageId::KOREAN));
    }

    #[test]
    fn wrong_schema_rejected() {
        let text = MINIMAL.replace("mapcode.territory-names", "other");
        assert!(matches!(
            Dataset::parse(&text),
            Err(DataError::Schema { .. })
        ));
    }

    #[test]
    fn wrong_version_rejected() {
        let text = MINIMAL.replace("\"version\": 1", "\"version\": 2");
        assert!(matches!(
            Dataset::parse(&text),
            Err(DataError::Version { found: 2, .. })
        ));
    }

    #[test]
    fn other_delimiters_rejected() {
        let text = MINIMAL.replace("\"version\": 1,", "\"version\": 1, \"delimiter\": \";\",");
        assert!(matches!(Dataset::parse(&text), Err(DataError::Delimiter(_))));
    }

    #[test]
    fn embedded_dataset_parses() {
        let dataset = Dataset::embedded().unwrap();
        assert_eq!(dataset.territory_count(), 533);
        assert_eq!(dataset.territories[0].code, "VAT");
        assert_eq!(dataset.parents.get("US").map(String::as_str), Some("USA"));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Dataset::parse(MINIMAL).unwrap();
        let b = Dataset::parse(&MINIMAL.replace("대한민국", "한국")).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
