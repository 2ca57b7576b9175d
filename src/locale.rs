// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifiers and ISO 639-1 language metadata.
//!
//! A [`LocaleId`] is a language plus an optional region, written either in
//! resource-bundle form (`hi_IN`) or as a BCP 47 tag (`hi-IN`). Only the
//! subset of the grammar needed to name symbol tables is accepted; scripts
//! and variants are rejected rather than silently dropped.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("empty locale identifier")]
    Empty,
    #[error("unknown ISO 639-1 language code {0:?}")]
    UnknownLanguage(String),
    #[error("malformed region subtag {0:?}")]
    InvalidRegion(String),
    #[error("unsupported locale subtags in {0:?}")]
    Unsupported(String),
}

/// Language and optional region of a symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId {
    language: String,
    region: Option<String>,
}

impl LocaleId {
    /// Parse `xx`, `xx_YY` or `xx-YY`.
    ///
    /// # Examples
    /// ```
    /// use locale_symbols::LocaleId;
    /// let id = LocaleId::parse("hi-IN").unwrap();
    /// assert_eq!(id.to_string(), "hi_IN");
    /// assert_eq!(id.tag(), "hi-IN");
    /// assert!(LocaleId::parse("xx_IN").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, LocaleError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut parts = trimmed.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        if !is_valid_iso639_1(language) {
            return Err(LocaleError::UnknownLanguage(language.to_string()));
        }

        let region = match parts.next() {
            None => None,
            Some(region) if is_valid_region(region) => Some(region.to_string()),
            Some(region) => return Err(LocaleError::InvalidRegion(region.to_string())),
        };

        if parts.next().is_some() {
            return Err(LocaleError::Unsupported(trimmed.to_string()));
        }

        Ok(Self {
            language: language.to_string(),
            region,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// BCP 47 form (`hi-IN`).
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }

    /// English name of the language, if known.
    pub fn language_name(&self) -> Option<&'static str> {
        language_name(&self.language)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for LocaleId {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LocaleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocaleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LocaleId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Region subtags are two uppercase letters (ISO 3166-1) or three digits
/// (UN M.49).
fn is_valid_region(region: &str) -> bool {
    let bytes = region.as_bytes();
    match bytes.len() {
        2 => bytes.iter().all(u8::is_ascii_uppercase),
        3 => bytes.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// Codes must be lowercase.
///
/// # Examples
/// ```
/// assert!(locale_symbols::locale::is_valid_iso639_1("hi"));
/// assert!(!locale_symbols::locale::is_valid_iso639_1("xx"));
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

/// English name of an ISO 639-1 code, for the languages this crate is
/// likely to ship tables for.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "hi" => Some("Hindi"),
        "bn" => Some("Bengali"),
        "mr" => Some("Marathi"),
        "ta" => Some("Tamil"),
        "te" => Some("Telugu"),
        "ur" => Some("Urdu"),
        "ar" => Some("Arabic"),
        "ja" => Some("Japanese"),
        "zh" => Some("Chinese"),
        "th" => Some("Thai"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        _ => None,
    }
}

/// Native name of an ISO 639-1 code.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "hi" => Some("हिन्दी"),
        "bn" => Some("বাংলা"),
        "mr" => Some("मराठी"),
        "ta" => Some("தமிழ்"),
        "ur" => Some("اردو"),
        "ar" => Some("العربية"),
        "ja" => Some("日本語"),
        "zh" => Some("中文"),
        "th" => Some("ไทย"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_and_hyphen_forms_agree() {
        assert_eq!(
            LocaleId::parse("hi_IN").unwrap(),
            LocaleId::parse("hi-IN").unwrap()
        );
    }

    #[test]
    fn language_only_locale() {
        let id = LocaleId::parse("hi").unwrap();
        assert_eq!(id.language(), "hi");
        assert_eq!(id.region(), None);
        assert_eq!(id.to_string(), "hi");
    }

    #[test]
    fn numeric_region_accepted() {
        let id = LocaleId::parse("es_419").unwrap();
        assert_eq!(id.region(), Some("419"));
    }

    #[test]
    fn malformed_locales_rejected() {
        assert_eq!(LocaleId::parse("  "), Err(LocaleError::Empty));
        assert_eq!(
            LocaleId::parse("HI_IN"),
            Err(LocaleError::UnknownLanguage("HI".to_string()))
        );
        assert_eq!(
            LocaleId::parse("hi_in"),
            Err(LocaleError::InvalidRegion("in".to_string()))
        );
        assert!(matches!(
            LocaleId::parse("sr_Latn_RS"),
            Err(LocaleError::InvalidRegion(_))
        ));
        assert!(matches!(
            LocaleId::parse("hi_IN_x"),
            Err(LocaleError::Unsupported(_))
        ));
    }

    #[test]
    fn names_resolve() {
        assert_eq!(language_name("hi"), Some("Hindi"));
        assert_eq!(native_name("hi"), Some("हिन्दी"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn serde_uses_display_form() {
        let id = LocaleId::parse("hi-IN").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"hi_IN\"");
        let back: LocaleId = serde_json::from_str("\"hi-IN\"").unwrap();
        assert_eq!(back, id);
    }
}
