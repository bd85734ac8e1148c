// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language handling for the name tables.
//!
//! Every table is keyed by a [`LanguageId`], a validated ISO 639-1 code.
//! There is no fallback between languages: asking for a language the
//! registry does not carry is an error, never another language's names.

mod iso639;
mod language;

pub use iso639::{is_valid_iso639_1, language_name, native_name};
pub use language::LanguageId;
