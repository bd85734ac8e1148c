// SPDX-License-Identifier: PMPL-1.0-or-later

//! Territory-Names — localized names for Mapcode territory codes.
//!
//! Every Mapcode territory (`VAT`, `KOR`, `US-CA`, `RU-KB`, `AAA`, ...) has
//! a fixed ordinal. For each language the crate keeps one table indexed by
//! that ordinal, where an entry lists every accepted name joined by `|`.
//!
//! PIECES:
//! 1. **Dataset**: the JSON data file, compiled in or loaded from disk, and
//!    validated before use.
//! 2. **Registry**: [`TerritoryNames`], an immutable per-language table set
//!    in which each language is either loaded or explicitly disabled.
//! 3. **Lookup**: ordinal or code in, primary name plus alternates out, or
//!    a typed error. No fallback to another language, no clamping.
//!
//! ```
//! use territory_names::{embedded, LanguageId};
//!
//! let names = embedded().unwrap();
//! let vat = names.lookup_code("VAT", LanguageId::KOREAN, None).unwrap();
//! assert_eq!(vat.primary, "바티칸 시국");
//! assert_eq!(vat.alternates, vec!["교황청"]);
//! ```

pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod names;
pub mod report;
pub mod table;
pub mod territory;
pub mod validate;

pub use error::{DataError, LookupError, Unsupported};
pub use i18n::LanguageId;
pub use names::{NameEntry, TerritoryName, DELIMITER};
pub use table::{embedded, Availability, TerritoryNames};
pub use territory::{Ordinal, TerritoryCode};
