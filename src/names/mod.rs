// SPDX-License-Identifier: PMPL-1.0-or-later

//! Delimiter-joined territory names.
//!
//! A single table entry such as `"바티칸 시국|교황청"` holds every accepted
//! name for one territory. The first segment is the primary display name,
//! the rest are alternates. Entries are checked when they are parsed, so
//! lookups never see an empty segment.

use serde::{Deserialize, Serialize};

/// Separator between alternate names inside one entry.
pub const DELIMITER: char = '|';

/// Ways a raw entry can violate the delimiter format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry is empty")]
    Empty,
    #[error("entry starts with the `|` delimiter")]
    LeadingDelimiter,
    #[error("entry ends with the `|` delimiter")]
    TrailingDelimiter,
    #[error("entry has an empty name at position {0}")]
    EmptySegment(usize),
    #[error("name `{0}` has surrounding whitespace")]
    PaddedSegment(String),
}

/// One validated, delimiter-joined table entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameEntry {
    raw: String,
    // Byte offset where the primary name ends; `raw.len()` when there are no alternates.
    primary_end: usize,
}

impl NameEntry {
    /// Parse and check a raw entry.
    pub fn parse(raw: impl Into<String>) -> Result<Self, EntryError> {
        let raw = raw.into();
        check(&raw)?;
        let primary_end = raw.find(DELIMITER).unwrap_or(raw.len());
        Ok(Self { raw, primary_end })
    }

    /// The first name in the entry.
    pub fn primary(&self) -> &str {
        &self.raw[..self.primary_end]
    }

    /// Names after the primary one, in table order.
    pub fn alternates(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw.split(DELIMITER).skip(1)
    }

    /// Every name, primary first.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw.split(DELIMITER)
    }

    /// Number of names (always at least one).
    pub fn name_count(&self) -> usize {
        self.raw.matches(DELIMITER).count() + 1
    }

    pub fn has_alternates(&self) -> bool {
        self.primary_end < self.raw.len()
    }

    /// The entry exactly as stored in the table.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when `name` is one of the accepted names.
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|candidate| candidate == name)
    }
}

impl std::fmt::Display for NameEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for NameEntry {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameEntry::parse(s)
    }
}

/// Join names back into the stored entry format.
pub fn join<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for (idx, name) in names.into_iter().enumerate() {
        if idx > 0 {
            joined.push(DELIMITER);
        }
        joined.push_str(name);
    }
    joined
}

/// Check a raw entry without keeping it.
pub fn check(raw: &str) -> Result<(), EntryError> {
    if raw.is_empty() {
        return Err(EntryError::Empty);
    }
    if raw.starts_with(DELIMITER) {
        return Err(EntryError::LeadingDelimiter);
    }
    if raw.ends_with(DELIMITER) {
        return Err(EntryError::TrailingDelimiter);
    }
    for (position, segment) in raw.split(DELIMITER).enumerate() {
        if segment.is_empty() {
            return Err(EntryError::EmptySegment(position));
        }
        if segment.trim() != segment {
            return Err(EntryError::PaddedSegment(segment.to_string()));
        }
    }
    Ok(())
}

/// A resolved lookup: one territory's names in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryName {
    pub code: String,
    pub ordinal: usize,
    pub language: String,
    pub primary: String,
    pub alternates: Vec<String>,
}

impl TerritoryName {
    pub fn from_entry(code: &str, ordinal: usize, language: &str, entry: &NameEntry) -> Self {
        Self {
            code: code.to_string(),
            ordinal,
            language: language.to_string(),
            primary: entry.primary().to_string(),
            alternates: entry.alternates().map(str::to_string).collect(),
        }
    }

    /// Primary name followed by the alternates.
    pub fn all_names(&self) -> Vec<&str> {
        std::iter::once(self.primary.as_str())
            .chain(self.alternates.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_name_has_no_alternates() {
        let entry = NameEntry::parse("대한민국").unwrap();
        assert_eq!(entry.primary(), "대한민국");
        assert_eq!(entry.alternates().count(), 0);
        assert!(!entry.has_alternates());
        assert_eq!(entry.name_count(), 1);
    }

    #[test]
    fn alternates_follow_primary() {
        let entry = NameEntry::parse("국제|세계|지구").unwrap();
        assert_eq!(entry.primary(), "국제");
        assert_eq!(entry.alternates().collect::<Vec<_>>(), vec!["세계", "지구"]);
        assert_eq!(entry.name_count(), 3);
        assert!(entry.contains("지구"));
        assert!(!entry.contains("국"));
    }

    #[test]
    fn rejoin_reproduces_entry() {
        let raw = "보네르, 세인트 유스 타티 우스 및 사바|사바|세인트 유스 타티 우스";
        let entry = NameEntry::parse(raw).unwrap();
        assert_eq!(join(entry.names()), raw);
    }

    #[test]
    fn malformed_entries_rejected() {
        assert_eq!(NameEntry::parse(""), Err(EntryError::Empty));
        assert_eq!(NameEntry::parse("|a"), Err(EntryError::LeadingDelimiter));
        assert_eq!(NameEntry::parse("a|"), Err(EntryError::TrailingDelimiter));
        assert_eq!(NameEntry::parse("a||b"), Err(EntryError::EmptySegment(1)));
        assert_eq!(
            NameEntry::parse("a| b"),
            Err(EntryError::PaddedSegment(" b".to_string()))
        );
    }

    #[test]
    fn lone_delimiter_is_leading() {
        assert_eq!(NameEntry::parse("|"), Err(EntryError::LeadingDelimiter));
    }

    #[test]
    fn resolved_name_lists_all() {
        let entry = NameEntry::parse("바티칸 시국|교황청").unwrap();
        let name = TerritoryName::from_entry("VAT", 0, "ko", &entry);
        assert_eq!(name.all_names(), vec!["바티칸 시국", "교황청"]);
    }
}
