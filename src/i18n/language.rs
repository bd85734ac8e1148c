// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language identifiers used to key the name tables.

use super::iso639::{is_valid_iso639_1, language_name, native_name};
use crate::error::LookupError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated ISO 639-1 language code, stored lowercase.
///
/// Parsing trims whitespace and lowercases the input, so `"KO"` and `" ko"`
/// both give `ko`. Three-letter and unknown codes are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageId([u8; 2]);

impl LanguageId {
    pub const KOREAN: LanguageId = LanguageId(*b"ko");
    pub const ENGLISH: LanguageId = LanguageId(*b"en");

    pub fn parse(code: &str) -> Result<Self, LookupError> {
        let normalized = code.trim().to_ascii_lowercase();
        if !is_valid_iso639_1(&normalized) {
            return Err(LookupError::InvalidLanguage(code.to_string()));
        }
        let bytes = normalized.as_bytes();
        Ok(LanguageId([bytes[0], bytes[1]]))
    }

    pub fn code(&self) -> &str {
        // Only ASCII letters pass `parse`.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    /// English name of the language, when known.
    pub fn english_name(&self) -> Option<&'static str> {
        language_name(self.code())
    }

    /// The language's name for itself, when known.
    pub fn native_name(&self) -> Option<&'static str> {
        native_name(self.code())
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for LanguageId {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageId::parse(s)
    }
}

impl Serialize for LanguageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for LanguageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LanguageId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
