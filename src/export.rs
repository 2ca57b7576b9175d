// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of symbol tables for export

use crate::source::{BundleDocument, EntryDocument};
use crate::table::{SymbolList, SymbolTable, SymbolValue};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUNDLE_SCHEMA: &str = "locale-symbols.bundle";
const BUNDLE_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Nickel,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            "nickel" | "ncl" => Some(ExportFormat::Nickel),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Nickel => "ncl",
        }
    }

    pub fn serialize(&self, table: &SymbolTable) -> Result<String> {
        let document = to_document(table);
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&document)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(&document)?),
            ExportFormat::Nickel => Ok(format_document_as_nickel(&document)),
        }
    }
}

/// Document form of `table`, with entries sorted by key.
///
/// A list handle stored under two or more keys is written once under
/// `shared`, named after the first of those keys in sort order, and each
/// key refers to it by that name.
pub fn to_document(table: &SymbolTable) -> BundleDocument {
    let mut sorted: Vec<(&str, &SymbolValue)> = table.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    // (name, handle, reference count), in first-seen order
    let mut groups: Vec<(&str, &SymbolList, usize)> = Vec::new();
    for &(key, value) in &sorted {
        if let SymbolValue::List(list) = value {
            match groups.iter_mut().find(|g| g.1.shares_storage_with(list)) {
                Some(group) => group.2 += 1,
                None => groups.push((key, list, 1)),
            }
        }
    }

    let mut shared = BTreeMap::new();
    for (name, list, refs) in &groups {
        if *refs > 1 {
            shared.insert(name.to_string(), list.to_vec());
        }
    }

    let mut entries = BTreeMap::new();
    for (key, value) in sorted {
        let entry = match value {
            SymbolValue::Text(text) => EntryDocument::Text(text.to_string()),
            SymbolValue::List(list) => {
                match groups
                    .iter()
                    .find(|g| g.2 > 1 && g.1.shares_storage_with(list))
                {
                    Some((name, _, _)) => EntryDocument::Shared {
                        shared: name.to_string(),
                    },
                    None => EntryDocument::List(list.to_vec()),
                }
            }
        };
        entries.insert(key.to_string(), entry);
    }

    BundleDocument {
        schema: Some(BUNDLE_SCHEMA.to_string()),
        version: Some(BUNDLE_VERSION),
        exported_at: Some(chrono::Utc::now().to_rfc3339()),
        locale: table.locale().clone(),
        calendar: table.calendar(),
        shared,
        entries,
    }
}

/// Write `table` to `path` in `format`, creating parent directories.
pub fn write(table: &SymbolTable, format: ExportFormat, path: &Path) -> Result<()> {
    let content = format.serialize(table)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), locale = %table.locale(), ?format, "exported table");
    Ok(())
}

/// Quote a string as a Nickel string literal.
pub fn nickel_escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `%{` opens an interpolation in Nickel strings
            '%' if chars.peek() == Some(&'{') => out.push_str("\\%"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

fn nickel_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| nickel_escape_string(v)).collect();
    format!("[{}]", items.join(", "))
}

fn format_document_as_nickel(document: &BundleDocument) -> String {
    let mut lines = Vec::new();
    lines.push("let bundle = {".to_string());
    lines.push(format!(
        "  locale = {},",
        nickel_escape_string(&document.locale.to_string())
    ));
    lines.push(format!(
        "  calendar = {},",
        nickel_escape_string(document.calendar.id())
    ));

    if !document.shared.is_empty() {
        lines.push("  shared = {".to_string());
        for (name, values) in &document.shared {
            lines.push(format!(
                "    {} = {},",
                nickel_escape_string(name),
                nickel_list(values)
            ));
        }
        lines.push("  },".to_string());
    }

    lines.push("  entries = {".to_string());
    for (key, entry) in &document.entries {
        let value = match entry {
            EntryDocument::Text(text) => nickel_escape_string(text),
            EntryDocument::List(values) => nickel_list(values),
            EntryDocument::Shared { shared } => {
                format!("shared.{}", nickel_escape_string(shared))
            }
        };
        lines.push(format!("    {} = {},", nickel_escape_string(key), value));
    }
    lines.push("  },".to_string());
    lines.push("} in".to_string());
    lines.push("bundle".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleId;
    use crate::table::SymbolTableBuilder;
    use crate::types::CalendarSystem;

    fn sample() -> SymbolTable {
        let quarters = SymbolTableBuilder::share(["Q1", "Q2", "Q3", "Q4"]);
        SymbolTableBuilder::new(LocaleId::parse("en_US").unwrap(), CalendarSystem::Gregorian)
            .text("field.year", "Year")
            .shared("roc.QuarterNames", &quarters)
            .shared("QuarterNames", &quarters)
            .list("DayNarrows", ["S", "M", "T", "W", "T", "F", "S"])
            .build()
            .unwrap()
    }

    #[test]
    fn shared_lists_are_named_after_first_key() {
        let doc = to_document(&sample());
        assert_eq!(doc.shared.len(), 1);
        assert!(doc.shared.contains_key("QuarterNames"));
        assert_eq!(
            doc.entries["roc.QuarterNames"],
            EntryDocument::Shared {
                shared: "QuarterNames".to_string()
            }
        );
        assert!(matches!(doc.entries["DayNarrows"], EntryDocument::List(_)));
        assert_eq!(doc.schema.as_deref(), Some(BUNDLE_SCHEMA));
    }

    #[test]
    fn equal_but_distinct_lists_are_not_merged() {
        let table =
            SymbolTableBuilder::new(LocaleId::parse("en").unwrap(), CalendarSystem::Gregorian)
                .list("AmPmMarkers", ["AM", "PM"])
                .list("roc.AmPmMarkers", ["AM", "PM"])
                .build()
                .unwrap();
        let doc = to_document(&table);
        assert!(doc.shared.is_empty());
    }

    #[test]
    fn nickel_output_references_shared_lists() {
        let out = ExportFormat::Nickel.serialize(&sample()).unwrap();
        assert!(out.starts_with("let bundle = {"));
        assert!(out.contains(r#""roc.QuarterNames" = shared."QuarterNames","#));
        assert!(out.contains(r#""field.year" = "Year","#));
        assert!(out.ends_with("bundle"));
    }

    #[test]
    fn nickel_escapes_interpolation() {
        assert_eq!(nickel_escape_string("a%{b}\"c"), r#""a\%{b}\"c""#);
    }

    #[test]
    fn formats_parse() {
        assert_eq!(ExportFormat::parse("YML"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("ncl"), Some(ExportFormat::Nickel));
        assert_eq!(ExportFormat::parse("toml"), None);
        assert_eq!(ExportFormat::Nickel.extension(), "ncl");
    }
}
