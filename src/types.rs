// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared vocabulary for symbol tables
//!
//! Calendar systems, symbol styles and symbol categories are closed sets
//! here. Their string ids are the segments that appear in table keys
//! (`islamic.DayNames`, `calendarname.roc`, `field.weekday`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported calendar systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarSystem {
    #[default]
    Gregorian,
    Buddhist,
    Islamic,
    IslamicCivil,
    Japanese,
    Roc,
}

impl CalendarSystem {
    /// Key segment used for this calendar.
    pub fn id(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "gregorian",
            CalendarSystem::Buddhist => "buddhist",
            CalendarSystem::Islamic => "islamic",
            CalendarSystem::IslamicCivil => "islamic-civil",
            CalendarSystem::Japanese => "japanese",
            CalendarSystem::Roc => "roc",
        }
    }

    /// Parse a calendar id. `gregory` is accepted as the CLDR alias of
    /// `gregorian`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gregorian" | "gregory" => Some(CalendarSystem::Gregorian),
            "buddhist" => Some(CalendarSystem::Buddhist),
            "islamic" => Some(CalendarSystem::Islamic),
            "islamic-civil" => Some(CalendarSystem::IslamicCivil),
            "japanese" => Some(CalendarSystem::Japanese),
            "roc" => Some(CalendarSystem::Roc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CalendarSystem] {
        &[
            CalendarSystem::Gregorian,
            CalendarSystem::Buddhist,
            CalendarSystem::Islamic,
            CalendarSystem::IslamicCivil,
            CalendarSystem::Japanese,
            CalendarSystem::Roc,
        ]
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Width of a rendered symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    #[default]
    Full,
    Abbreviated,
    Narrow,
}

/// Kinds of list-valued calendar symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolCategory {
    Days,
    Months,
    Quarters,
    AmPmMarkers,
    Eras,
    DatePatterns,
    TimePatterns,
}

impl SymbolCategory {
    /// Expected list length, when the category has a fixed one.
    ///
    /// Months report 12; a trailing 13th slot is checked separately.
    pub fn expected_len(&self) -> Option<usize> {
        match self {
            SymbolCategory::Days => Some(7),
            SymbolCategory::Months => Some(12),
            SymbolCategory::Quarters => Some(4),
            SymbolCategory::AmPmMarkers => Some(2),
            SymbolCategory::DatePatterns | SymbolCategory::TimePatterns => Some(4),
            SymbolCategory::Eras => None,
        }
    }

    /// Classify the final segment of a key (`DayNarrows`, `Eras`, ...).
    pub fn from_key_suffix(segment: &str) -> Option<Self> {
        match segment {
            "DayNames" | "DayAbbreviations" | "DayNarrows" => Some(SymbolCategory::Days),
            "MonthNames" | "MonthAbbreviations" | "MonthNarrows" => Some(SymbolCategory::Months),
            "QuarterNames" | "QuarterAbbreviations" | "QuarterNarrows" => {
                Some(SymbolCategory::Quarters)
            }
            "AmPmMarkers" => Some(SymbolCategory::AmPmMarkers),
            "Eras" => Some(SymbolCategory::Eras),
            "DatePatterns" => Some(SymbolCategory::DatePatterns),
            "TimePatterns" => Some(SymbolCategory::TimePatterns),
            _ => None,
        }
    }
}

/// Calendar-agnostic field whose display name lives under `field.<name>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Era,
    Year,
    Month,
    Week,
    Weekday,
    DayPeriod,
    Hour,
    Minute,
    Second,
    Zone,
}

impl FieldName {
    pub fn id(&self) -> &'static str {
        match self {
            FieldName::Era => "era",
            FieldName::Year => "year",
            FieldName::Month => "month",
            FieldName::Week => "week",
            FieldName::Weekday => "weekday",
            FieldName::DayPeriod => "dayperiod",
            FieldName::Hour => "hour",
            FieldName::Minute => "minute",
            FieldName::Second => "second",
            FieldName::Zone => "zone",
        }
    }

    pub fn all() -> &'static [FieldName] {
        &[
            FieldName::Era,
            FieldName::Year,
            FieldName::Month,
            FieldName::Week,
            FieldName::Weekday,
            FieldName::DayPeriod,
            FieldName::Hour,
            FieldName::Minute,
            FieldName::Second,
            FieldName::Zone,
        ]
    }
}
