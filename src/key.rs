// SPDX-License-Identifier: PMPL-1.0-or-later

//! Symbol key syntax and synthesis
//!
//! Keys are dot-separated segments of ASCII letters, digits and `-`. A
//! formatter asks for symbols by (calendar, category, style); [`SymbolKey`]
//! turns that request into the key string a table stores it under.
//!
//! | Request | Key |
//! |---------|-----|
//! | base calendar, days, full | `DayNames` |
//! | islamic, days, narrow | `islamic.DayNarrows` |
//! | roc, AM/PM, abbreviated | `roc.abbreviated.AmPmMarkers` |
//! | java.time japanese, eras, full | `java.time.japanese.long.Eras` |
//! | field hour | `field.hour` |

use crate::types::{CalendarSystem, FieldName, SymbolCategory, SymbolStyle};
use regex::Regex;
use std::sync::OnceLock;

const JAVA_TIME_PREFIX: &str = "java.time";

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*$").expect("key pattern is a valid regex")
    })
}

/// Whether `key` is syntactically acceptable as a table key.
pub fn validate_key(key: &str) -> bool {
    key_pattern().is_match(key)
}

/// Key synthesis for the calendar, field and java.time namespaces.
pub struct SymbolKey;

impl SymbolKey {
    /// Key for a list symbol in a table whose base calendar is `base`.
    ///
    /// # Examples
    /// ```
    /// use locale_symbols::key::SymbolKey;
    /// use locale_symbols::types::{CalendarSystem, SymbolCategory, SymbolStyle};
    ///
    /// let key = SymbolKey::symbol(
    ///     CalendarSystem::Gregorian,
    ///     CalendarSystem::Islamic,
    ///     SymbolCategory::Days,
    ///     SymbolStyle::Abbreviated,
    /// );
    /// assert_eq!(key, "islamic.DayAbbreviations");
    /// ```
    pub fn symbol(
        base: CalendarSystem,
        calendar: CalendarSystem,
        category: SymbolCategory,
        style: SymbolStyle,
    ) -> String {
        let stem = category_stem(category, style, false);
        if calendar == base {
            stem
        } else {
            format!("{}.{}", calendar.id(), stem)
        }
    }

    /// Key in the `java.time` namespace. Gregorian omits its calendar
    /// segment there regardless of the table's base calendar.
    pub fn java_time(
        calendar: CalendarSystem,
        category: SymbolCategory,
        style: SymbolStyle,
    ) -> String {
        let stem = category_stem(category, style, true);
        match calendar {
            CalendarSystem::Gregorian => format!("{}.{}", JAVA_TIME_PREFIX, stem),
            other => format!("{}.{}.{}", JAVA_TIME_PREFIX, other.id(), stem),
        }
    }

    pub fn field(field: FieldName) -> String {
        format!("field.{}", field.id())
    }

    /// Display name of a calendar. Gregorian is listed under both
    /// `gregorian` and its CLDR alias `gregory` in shipped data; this
    /// returns the primary form.
    pub fn calendar_name(calendar: CalendarSystem) -> String {
        format!("calendarname.{}", calendar.id())
    }
}

fn category_stem(category: SymbolCategory, style: SymbolStyle, java_time: bool) -> String {
    let stem = match (category, style) {
        (SymbolCategory::Days, SymbolStyle::Full) => "DayNames",
        (SymbolCategory::Days, SymbolStyle::Abbreviated) => "DayAbbreviations",
        (SymbolCategory::Days, SymbolStyle::Narrow) => "DayNarrows",
        (SymbolCategory::Months, SymbolStyle::Full) => "MonthNames",
        (SymbolCategory::Months, SymbolStyle::Abbreviated) => "MonthAbbreviations",
        (SymbolCategory::Months, SymbolStyle::Narrow) => "MonthNarrows",
        (SymbolCategory::Quarters, SymbolStyle::Full) => "QuarterNames",
        (SymbolCategory::Quarters, SymbolStyle::Abbreviated) => "QuarterAbbreviations",
        (SymbolCategory::Quarters, SymbolStyle::Narrow) => "QuarterNarrows",
        (SymbolCategory::AmPmMarkers, SymbolStyle::Full) => "AmPmMarkers",
        (SymbolCategory::AmPmMarkers, SymbolStyle::Abbreviated) => "abbreviated.AmPmMarkers",
        (SymbolCategory::AmPmMarkers, SymbolStyle::Narrow) => "narrow.AmPmMarkers",
        (SymbolCategory::Eras, SymbolStyle::Full) => "long.Eras",
        (SymbolCategory::Eras, SymbolStyle::Abbreviated) if java_time => "short.Eras",
        (SymbolCategory::Eras, SymbolStyle::Abbreviated) => "Eras",
        (SymbolCategory::Eras, SymbolStyle::Narrow) => "narrow.Eras",
        (SymbolCategory::DatePatterns, _) => "DatePatterns",
        (SymbolCategory::TimePatterns, _) => "TimePatterns",
    };
    stem.to_string()
}

/// Split a key into its calendar prefix (if any) and the remainder.
///
/// The `java.time` namespace is reported as no calendar prefix.
pub fn calendar_prefix(key: &str) -> (Option<CalendarSystem>, &str) {
    match key.split_once('.') {
        Some((head, rest)) => match CalendarSystem::parse(head) {
            Some(calendar) => (Some(calendar), rest),
            None => (None, key),
        },
        None => (None, key),
    }
}

/// Category of the final key segment, if it is a calendar list symbol.
pub fn category_of(key: &str) -> Option<SymbolCategory> {
    let last = key.rsplit('.').next().unwrap_or(key);
    SymbolCategory::from_key_suffix(last)
}
