// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structural checks for symbol tables
//!
//! Calendar list symbols have fixed shapes: seven day names, twelve month
//! names (plus an optional empty 13th slot), four quarters, two AM/PM
//! markers, four date or time patterns. [`check`] walks a table and reports
//! every entry that breaks its category's shape.

use crate::key::{category_of, validate_key};
use crate::table::{SymbolTable, SymbolValue, ValueKind};
use crate::types::SymbolCategory;
use colored::*;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }

    fn colored_tag(&self) -> ColoredString {
        match self {
            Level::Ok => self.tag().green(),
            Level::Warn => self.tag().yellow(),
            Level::Error => self.tag().red().bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: Level,
    pub key: String,
    pub detail: String,
}

impl Finding {
    fn new(level: Level, key: &str, detail: String) -> Self {
        Self {
            level,
            key: key.to_string(),
            detail,
        }
    }

    fn warning(key: &str, detail: String) -> Self {
        Self::new(Level::Warn, key, detail)
    }

    fn error(key: &str, detail: String) -> Self {
        Self::new(Level::Error, key, detail)
    }

    pub fn print(&self) {
        println!("  [{}] {:36} {}", self.level.colored_tag(), self.key, self.detail);
    }
}

/// Check every entry of `table`. Findings are sorted by key; entries with
/// nothing to report produce no finding.
pub fn check(table: &SymbolTable) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut entries: Vec<(&str, &SymbolValue)> = table.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, value) in entries {
        if !validate_key(key) {
            findings.push(Finding::error(key, "malformed key".to_string()));
            continue;
        }

        if key.starts_with("field.") || key.starts_with("calendarname.") {
            check_display_name(key, value, &mut findings);
            continue;
        }

        if let Some(category) = category_of(key) {
            check_list(key, category, value, &mut findings);
        }
    }

    findings
}

/// Whether any finding is an error.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.level == Level::Error)
}

fn check_display_name(key: &str, value: &SymbolValue, findings: &mut Vec<Finding>) {
    match value {
        SymbolValue::Text(text) if text.trim().is_empty() => {
            findings.push(Finding::error(key, "empty display name".to_string()));
        }
        SymbolValue::Text(_) => {}
        SymbolValue::List(_) => findings.push(kind_mismatch(key, ValueKind::Text)),
    }
}

fn check_list(
    key: &str,
    category: SymbolCategory,
    value: &SymbolValue,
    findings: &mut Vec<Finding>,
) {
    let values = match value {
        SymbolValue::List(list) => list.as_slice(),
        SymbolValue::Text(_) => {
            findings.push(kind_mismatch(key, ValueKind::List));
            return;
        }
    };

    let len = values.len();
    match (category, category.expected_len()) {
        (SymbolCategory::Months, Some(expected)) => {
            // an empty 13th slot is a placeholder, not a missing month
            let placeholder = len == expected + 1 && values[expected].is_empty();
            if len != expected && !placeholder {
                findings.push(Finding::error(
                    key,
                    format!(
                        "expected {} months (or {} with an empty last slot), found {}",
                        expected,
                        expected + 1,
                        len
                    ),
                ));
                return;
            }
        }
        (_, Some(expected)) if len != expected => {
            findings.push(Finding::error(
                key,
                format!("expected {} entries, found {}", expected, len),
            ));
            return;
        }
        (SymbolCategory::Eras, None) if len == 0 => {
            findings.push(Finding::error(key, "no eras".to_string()));
            return;
        }
        _ => {}
    }

    let patterns = matches!(
        category,
        SymbolCategory::DatePatterns | SymbolCategory::TimePatterns
    );
    let significant = match category {
        SymbolCategory::Months => len.min(12),
        _ => len,
    };
    // a trailing empty name is tolerated; patterns must all be present
    let checked = if patterns {
        significant
    } else {
        significant.saturating_sub(1)
    };
    for (idx, item) in values[..checked].iter().enumerate() {
        if item.is_empty() {
            let finding = if patterns {
                Finding::error(key, format!("pattern {} is empty", idx))
            } else {
                Finding::warning(key, format!("slot {} is empty", idx))
            };
            findings.push(finding);
        }
    }
}

fn kind_mismatch(key: &str, expected: ValueKind) -> Finding {
    Finding::error(key, format!("expected a {}", expected))
}

/// SHA-256 over the table's locale, base calendar and sorted entries.
///
/// Sharing and construction order do not affect the digest.
pub fn fingerprint(table: &SymbolTable) -> String {
    let mut entries: Vec<(&str, &SymbolValue)> = table.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut hasher = Sha256::new();
    hasher.update(table.locale().to_string().as_bytes());
    hasher.update([0u8]);
    hasher.update(table.calendar().id().as_bytes());
    hasher.update([0u8]);
    for (key, value) in entries {
        hasher.update(key.as_bytes());
        hasher.update([0u8]);
        match value {
            SymbolValue::Text(text) => {
                hasher.update([b'T']);
                hasher.update(text.as_bytes());
                hasher.update([0u8]);
            }
            SymbolValue::List(list) => {
                hasher.update([b'L']);
                hasher.update((list.len() as u64).to_le_bytes());
                for item in list.iter() {
                    hasher.update(item.as_bytes());
                    hasher.update([0u8]);
                }
            }
        }
    }
    hex::encode(hasher.finalize())
}

/// Print a findings summary.
pub fn print_findings(table: &SymbolTable, findings: &[Finding]) {
    println!(
        "{} {} ({} entries, base calendar {})",
        "Verifying".bold().cyan(),
        table.locale(),
        table.len(),
        table.calendar()
    );
    println!("  fingerprint {}", fingerprint(table).dimmed());
    println!();

    if findings.is_empty() {
        println!("  [{}] all {} entries well-formed", Level::Ok.colored_tag(), table.len());
        return;
    }
    for finding in findings {
        finding.print();
    }
    let errors = findings.iter().filter(|f| f.level == Level::Error).count();
    let warnings = findings.len() - errors;
    println!();
    println!("  {} error(s), {} warning(s)", errors, warnings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleId;
    use crate::table::SymbolTableBuilder;
    use crate::types::CalendarSystem;

    fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::new(LocaleId::parse("en").unwrap(), CalendarSystem::Gregorian)
    }

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    #[test]
    fn well_formed_table_has_no_findings() {
        let table = builder()
            .list("DayNames", ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"])
            .list("MonthNames", MONTHS)
            .list("roc.MonthNames", MONTHS.iter().copied().chain([""]))
            .list("AmPmMarkers", ["AM", "PM"])
            .list("java.time.long.Eras", ["Before Christ", "Anno Domini"])
            .text("field.year", "Year")
            .build()
            .unwrap();
        assert!(check(&table).is_empty());
    }

    #[test]
    fn wrong_lengths_are_errors() {
        let table = builder()
            .list("DayNames", ["Sun", "Mon"])
            .list("QuarterNames", ["Q1", "Q2", "Q3"])
            .list("roc.MonthNames", MONTHS.iter().copied().chain(["Extra"]))
            .build()
            .unwrap();
        let findings = check(&table);
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.level == Level::Error));
        assert!(has_errors(&findings));
    }

    #[test]
    fn kind_mismatches_are_errors() {
        let table = builder()
            .text("DayNames", "Sunday")
            .list("field.year", ["Year"])
            .build()
            .unwrap();
        let findings = check(&table);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].key, "DayNames");
        assert_eq!(findings[1].key, "field.year");
    }

    #[test]
    fn empty_name_slot_warns_but_empty_pattern_errors() {
        let table = builder()
            .list("DayNarrows", ["S", "", "T", "W", "T", "F", "S"])
            .list("TimePatterns", ["h:mm:ss a zzzz", "h:mm:ss a z", "", "h:mm a"])
            .build()
            .unwrap();
        let findings = check(&table);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].level, Level::Warn);
        assert_eq!(findings[1].level, Level::Error);
    }

    #[test]
    fn empty_trailing_name_slot_is_tolerated() {
        let table = builder()
            .list("DayNarrows", ["S", "M", "T", "W", "T", "F", ""])
            .list("QuarterAbbreviations", ["Q1", "Q2", "Q3", ""])
            .list("MonthNames", MONTHS.iter().copied().take(11).chain([""]))
            .build()
            .unwrap();
        assert!(check(&table).is_empty());
    }

    #[test]
    fn empty_trailing_pattern_is_still_an_error() {
        let table = builder()
            .list("DatePatterns", ["EEEE, d MMMM y", "d MMMM y", "d MMM y", ""])
            .build()
            .unwrap();
        let findings = check(&table);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, Level::Error);
        assert!(findings[0].detail.contains("pattern 3"));
    }

    #[test]
    fn fingerprint_ignores_sharing_and_order() {
        let quarters = SymbolTableBuilder::share(["Q1", "Q2", "Q3", "Q4"]);
        let shared = builder()
            .shared("QuarterNames", &quarters)
            .shared("roc.QuarterNames", &quarters)
            .text("field.year", "Year")
            .build()
            .unwrap();
        let copied = builder()
            .text("field.year", "Year")
            .list("roc.QuarterNames", ["Q1", "Q2", "Q3", "Q4"])
            .list("QuarterNames", ["Q1", "Q2", "Q3", "Q4"])
            .build()
            .unwrap();
        assert_eq!(fingerprint(&shared), fingerprint(&copied));
        assert_eq!(fingerprint(&shared).len(), 64);

        let changed = builder()
            .text("field.year", "Yr")
            .list("roc.QuarterNames", ["Q1", "Q2", "Q3", "Q4"])
            .list("QuarterNames", ["Q1", "Q2", "Q3", "Q4"])
            .build()
            .unwrap();
        assert_ne!(fingerprint(&shared), fingerprint(&changed));
    }
}
