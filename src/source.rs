// SPDX-License-Identifier: PMPL-1.0-or-later

//! On-disk bundle documents
//!
//! A bundle document is the JSON or YAML form of a symbol table. Lists that
//! several keys share are declared once under `shared` and referenced by
//! name, so loading a document reproduces the sharing of the table it came
//! from:
//!
//! ```yaml
//! locale: hi_IN
//! calendar: gregorian
//! shared:
//!   quarters: [Q1, Q2, Q3, Q4]
//! entries:
//!   field.year: Year
//!   DayNames: [Sun, Mon, Tue, Wed, Thu, Fri, Sat]
//!   QuarterNames: { shared: quarters }
//! ```

use crate::locale::LocaleId;
use crate::table::{SymbolList, SymbolTable, SymbolTableBuilder, SymbolValue};
use crate::types::CalendarSystem;
use anyhow::{anyhow, bail, Context, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const BUNDLE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Serialized form of a [`SymbolTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    pub locale: LocaleId,
    #[serde(default)]
    pub calendar: CalendarSystem,
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "scalar_lists"
    )]
    pub shared: BTreeMap<String, Vec<String>>,
    pub entries: BTreeMap<String, EntryDocument>,
}

/// One entry of a bundle document.
///
/// Plain YAML scalars are accepted as text, so `QuarterNarrows: [1, 2, 3, 4]`
/// reads as the strings `"1"` to `"4"`. Nulls, maps and nested lists are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryDocument {
    Text(#[serde(deserialize_with = "scalar_text")] String),
    List(#[serde(deserialize_with = "scalar_list")] Vec<String>),
    Shared { shared: String },
}

/// A string, number or boolean, kept as its text.
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = ScalarText;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ScalarText, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ScalarText, E> {
                Ok(ScalarText(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ScalarText, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ScalarText, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ScalarText, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ScalarText, E> {
                Ok(ScalarText(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    ScalarText::deserialize(deserializer).map(|s| s.0)
}

fn scalar_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = Vec::<ScalarText>::deserialize(deserializer)?;
    Ok(items.into_iter().map(|s| s.0).collect())
}

fn scalar_lists<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<String>>, D::Error> {
    let lists = BTreeMap::<String, Vec<ScalarText>>::deserialize(deserializer)?;
    Ok(lists
        .into_iter()
        .map(|(name, items)| (name, items.into_iter().map(|s| s.0).collect()))
        .collect())
}

/// Just the `locale` of a bundle document.
#[derive(Deserialize)]
struct DocumentHeader {
    locale: LocaleId,
}

/// Document encodings recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

impl BundleDocument {
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Json => {
                serde_json::from_str(content).context("parsing JSON bundle document")
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).context("parsing YAML bundle document")
            }
        }
    }

    /// Build the table this document describes.
    ///
    /// Every `{ shared: name }` entry receives the same list handle. Shared
    /// lists no entry refers to are ignored.
    pub fn into_table(self) -> Result<SymbolTable> {
        let shared: HashMap<String, SymbolList> = self
            .shared
            .into_iter()
            .map(|(name, values)| (name, SymbolTableBuilder::share(values)))
            .collect();

        let mut builder = SymbolTableBuilder::new(self.locale, self.calendar);
        for (key, entry) in self.entries {
            builder = match entry {
                EntryDocument::Text(text) => builder.text(key, text),
                EntryDocument::List(values) => builder.list(key, values),
                EntryDocument::Shared { shared: name } => {
                    let list = shared
                        .get(&name)
                        .ok_or_else(|| anyhow!("entry '{}' references unknown shared list '{}'", key, name))?;
                    builder.value(key, SymbolValue::List(list.clone()))
                }
            };
        }

        Ok(builder.build()?)
    }
}

/// Load one bundle file. The encoding follows the file extension.
pub fn load_file(path: &Path) -> Result<SymbolTable> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| anyhow!("unsupported bundle file type: {}", path.display()))?;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading bundle {}", path.display()))?;
    let table = BundleDocument::parse(&raw, format)
        .and_then(BundleDocument::into_table)
        .with_context(|| format!("loading bundle {}", path.display()))?;
    debug!(
        path = %path.display(),
        locale = %table.locale(),
        entries = table.len(),
        "loaded bundle file"
    );
    Ok(table)
}

/// Load every bundle file under `dir`, recursively, sorted by path.
pub fn load_dir(dir: &Path) -> Result<Vec<SymbolTable>> {
    if !dir.is_dir() {
        bail!("bundle directory not found: {}", dir.display());
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && DocumentFormat::from_path(entry.path()).is_some() {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    paths.iter().map(|path| load_file(path)).collect()
}

/// First file named `<locale>.{json,yaml,yml}` in `dirs`, searched in
/// order. Both `hi_IN` and `hi-IN` spellings of the stem are accepted.
pub fn find_bundle(dirs: &[PathBuf], locale: &LocaleId) -> Option<PathBuf> {
    let stems = [locale.to_string(), locale.tag()];
    for dir in dirs {
        for stem in &stems {
            for ext in BUNDLE_EXTENSIONS {
                let candidate = dir.join(format!("{stem}.{ext}"));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

/// Load the bundle [`find_bundle`] picks for `locale`.
///
/// The locale declared inside the document must be the requested one; a
/// file whose name and content disagree is an error.
pub fn load_bundle(dirs: &[PathBuf], locale: &LocaleId) -> Result<Option<SymbolTable>> {
    let Some(path) = find_bundle(dirs, locale) else {
        return Ok(None);
    };
    let table = load_file(&path)?;
    if table.locale() != locale {
        bail!(
            "bundle {} declares locale {}, expected {}",
            path.display(),
            table.locale(),
            locale
        );
    }
    Ok(Some(table))
}

/// Locale declared by a bundle document, without building its table.
pub fn document_locale(path: &Path) -> Result<LocaleId> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| anyhow!("unsupported bundle file type: {}", path.display()))?;
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading bundle {}", path.display()))?;
    let header: DocumentHeader = match format {
        DocumentFormat::Json => serde_json::from_str(&raw)?,
        DocumentFormat::Yaml => serde_yaml::from_str(&raw)?,
    };
    Ok(header.locale)
}

/// Bundle files directly inside `dirs`, keyed by the locale each document
/// declares.
///
/// A file whose name does not match its declared locale is still listed,
/// under the declared locale, with a warning. Files that cannot be read as
/// bundle documents are skipped.
pub fn list_bundles(dirs: &[PathBuf]) -> Vec<(LocaleId, PathBuf)> {
    let mut found = Vec::new();
    for dir in dirs {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || DocumentFormat::from_path(&path).is_none() {
                continue;
            }
            let locale = match document_locale(&path) {
                Ok(locale) => locale,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable bundle");
                    continue;
                }
            };
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| LocaleId::parse(stem).ok());
            if stem.as_ref() != Some(&locale) {
                warn!(
                    path = %path.display(),
                    declared = %locale,
                    "bundle file name does not match its declared locale"
                );
            }
            found.push((locale, path));
        }
    }
    found.sort();
    found
}
