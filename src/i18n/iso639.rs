// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and metadata.
//!
//! Name tables are keyed by two-letter ISO 639-1 codes. Anything else in a
//! dataset or on the command line is rejected before it reaches a lookup.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// Case-sensitive: codes must already be lowercase.
///
/// # Examples
/// ```
/// assert!(territory_names::i18n::is_valid_iso639_1("ko"));
/// assert!(territory_names::i18n::is_valid_iso639_1("ja"));
/// assert!(!territory_names::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Returns the English name of an ISO 639-1 code.
///
/// Covers the languages Mapcode publishes territory names in. Returns
/// `None` for anything else.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "af" => Some("Afrikaans"),
        "ar" => Some("Arabic"),
        "be" => Some("Belarusian"),
        "cs" => Some("Czech"),
        "da" => Some("Danish"),
        "de" => Some("German"),
        "el" => Some("Greek"),
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fi" => Some("Finnish"),
        "fr" => Some("French"),
        "he" => Some("Hebrew"),
        "hi" => Some("Hindi"),
        "hr" => Some("Croatian"),
        "hu" => Some("Hungarian"),
        "id" => Some("Indonesian"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "ko" => Some("Korean"),
        "nl" => Some("Dutch"),
        "no" | "nb" => Some("Norwegian"),
        "pl" => Some("Polish"),
        "pt" => Some("Portuguese"),
        "ru" => Some("Russian"),
        "sv" => Some("Swedish"),
        "sw" => Some("Swahili"),
        "th" => Some("Thai"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "vi" => Some("Vietnamese"),
        "zh" => Some("Chinese"),
        _ => None,
    }
}

/// Returns the native name of an ISO 639-1 language code.
///
/// Shown by the `languages` command next to the code.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "af" => Some("Afrikaans"),
        "ar" => Some("العربية"),
        "be" => Some("Беларуская"),
        "cs" => Some("Čeština"),
        "da" => Some("Dansk"),
        "de" => Some("Deutsch"),
        "el" => Some("Ελληνικά"),
        "en" => Some("English"),
        "es" => Some("Español"),
        "fi" => Some("Suomi"),
        "fr" => Some("Français"),
        "he" => Some("עברית"),
        "hi" => Some("हिन्दी"),
        "hr" => Some("Hrvatski"),
        "hu" => Some("Magyar"),
        "id" => Some("Bahasa Indonesia"),
        "it" => Some("Italiano"),
        "ja" => Some("日本語"),
        "ko" => Some("한국어"),
        "nl" => Some("Nederlands"),
        "no" | "nb" => Some("Norsk"),
        "pl" => Some("Polski"),
        "pt" => Some("Português"),
        "ru" => Some("Русский"),
        "sv" => Some("Svenska"),
        "sw" => Some("Kiswahili"),
        "th" => Some("ไทย"),
        "tr" => Some("Türkçe"),
        "uk" => Some("Українська"),
        "vi" => Some("Tiếng Việt"),
        "zh" => Some("中文"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("ko"));
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("zh"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("kor"));
        assert!(!is_valid_iso639_1("KO"));
    }

    #[test]
    fn language_names_resolve() {
        assert_eq!(language_name("ko"), Some("Korean"));
        assert_eq!(language_name("nb"), Some("Norwegian"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn native_names_resolve() {
        assert_eq!(native_name("ko"), Some("한국어"));
        assert_eq!(native_name("uk"), Some("Українська"));
        assert_eq!(native_name("xx"), None);
    }
}
