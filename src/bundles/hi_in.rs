// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hindi (India) supplementary calendar and date-time symbols.
//!
//! Gregorian is the base calendar. Islamic and ROC symbols live under
//! their calendar prefix and mostly reuse the Gregorian lists; month
//! lists carry an empty 13th slot.

use crate::locale::LocaleId;
use crate::table::{SymbolError, SymbolTable, SymbolTableBuilder};
use crate::types::CalendarSystem;

pub const LOCALE: &str = "hi_IN";

const QUARTER_ABBREVIATIONS: &[&str] = &["ति1", "ति2", "ति3", "ति4"];

const QUARTER_NAMES: &[&str] = &[
    "पहली तिमाही",
    "दूसरी तिमाही",
    "तीसरी तिमाही",
    "चौथी तिमाही",
];

const AM_PM_MARKERS: &[&str] = &["पूर्वाह्न", "अपराह्न"];
const ABBREVIATED_AM_PM_MARKERS: &[&str] = &["पूर्व", "अपर"];
const NARROW_AM_PM_MARKERS: &[&str] = &["पू", "अ"];

const DATE_PATTERNS: &[&str] = &[
    "GGGG EEEE, d MMMM y",
    "GGGG d MMMM y",
    "GGGG d MMM y",
    "GGGG d/M/y",
];

const JAVA_TIME_DATE_PATTERNS: &[&str] = &[
    "G EEEE, d MMMM y",
    "G d MMMM y",
    "G d MMM y",
    "G d/M/y",
];

const TIME_PATTERNS: &[&str] = &["h:mm:ss a zzzz", "h:mm:ss a z", "h:mm:ss a", "h:mm a"];

const DAY_NAMES: &[&str] = &[
    "रविवार",
    "सोमवार",
    "मंगलवार",
    "बुधवार",
    "गुरुवार",
    "शुक्रवार",
    "शनिवार",
];

const DAY_ABBREVIATIONS: &[&str] = &["रवि", "सोम", "मंगल", "बुध", "गुरु", "शुक्र", "शनि"];

const DAY_NARROWS: &[&str] = &["र", "सो", "मं", "बु", "गु", "शु", "श"];

const ISLAMIC_MONTH_NAMES: &[&str] = &[
    "मुहर्रम",
    "सफर",
    "राबी प्रथम",
    "राबी द्वितीय",
    "जुम्डा प्रथम",
    "जुम्डा द्वितीय",
    "रजब",
    "शावन",
    "रमजान",
    "शव्व्ल",
    "जिल-क्दाह",
    "जिल्-हिज्जाह",
    "",
];

const ROC_MONTH_NAMES: &[&str] = &[
    "जनवरी",
    "फ़रवरी",
    "मार्च",
    "अप्रैल",
    "मई",
    "जून",
    "जुलाई",
    "अगस्त",
    "सितंबर",
    "अक्तूबर",
    "नवंबर",
    "दिसंबर",
    "",
];

const ROC_MONTH_ABBREVIATIONS: &[&str] = &[
    "जन॰", "फ़र॰", "मार्च", "अप्रैल", "मई", "जून", "जुल॰", "अग॰", "सित॰", "अक्तू॰", "नव॰",
    "दिस॰", "",
];

const ROC_MONTH_NARROWS: &[&str] = &[
    "ज", "फ़", "मा", "अ", "म", "जू", "जु", "अ", "सि", "अ", "न", "दि", "",
];

const JAPANESE_LONG_ERAS: &[&str] = &["ईसवी सन", "मेजी", "ताईशो", "शोवा", "हेईसेई"];
const JAPANESE_SHORT_ERAS: &[&str] = &["ईस्वी", "मेजी", "ताईशो", "शोवा", "हेईसेई"];
const LONG_ERAS: &[&str] = &["ईसा-पूर्व", "ईसवी सन"];
const SHORT_ERAS: &[&str] = &["ईसापूर्व", "सन"];

const TEXT_ENTRIES: &[(&str, &str)] = &[
    ("calendarname.buddhist", "बौद्ध पंचांग"),
    ("calendarname.gregorian", "ग्रेगोरियन कैलेंडर"),
    ("calendarname.gregory", "ग्रेगोरियन कैलेंडर"),
    ("calendarname.islamic", "इस्लामी पंचांग"),
    ("calendarname.islamic-civil", "इस्लामी नागरिक पंचांग"),
    ("calendarname.japanese", "जापानी पंचांग"),
    ("calendarname.roc", "चीनी गणतंत्र पंचांग"),
    ("field.dayperiod", "पूर्वाह्न/अपराह्न"),
    ("field.era", "युग"),
    ("field.hour", "घंटा"),
    ("field.minute", "मिनट"),
    ("field.month", "माह"),
    ("field.second", "सेकंड"),
    ("field.week", "सप्ताह"),
    ("field.weekday", "सप्ताह का दिन"),
    ("field.year", "वर्ष"),
    ("field.zone", "समय क्षेत्र"),
];

/// Build the `hi_IN` table.
pub fn load() -> Result<SymbolTable, SymbolError> {
    let locale = LocaleId::parse(LOCALE)?;

    let quarter_abbreviations = SymbolTableBuilder::share(QUARTER_ABBREVIATIONS.iter().copied());
    let quarter_names = SymbolTableBuilder::share(QUARTER_NAMES.iter().copied());
    let am_pm = SymbolTableBuilder::share(AM_PM_MARKERS.iter().copied());
    let abbreviated_am_pm = SymbolTableBuilder::share(ABBREVIATED_AM_PM_MARKERS.iter().copied());
    let narrow_am_pm = SymbolTableBuilder::share(NARROW_AM_PM_MARKERS.iter().copied());
    let date_patterns = SymbolTableBuilder::share(DATE_PATTERNS.iter().copied());
    let java_time_date_patterns =
        SymbolTableBuilder::share(JAVA_TIME_DATE_PATTERNS.iter().copied());
    let time_patterns = SymbolTableBuilder::share(TIME_PATTERNS.iter().copied());
    let day_names = SymbolTableBuilder::share(DAY_NAMES.iter().copied());
    let day_abbreviations = SymbolTableBuilder::share(DAY_ABBREVIATIONS.iter().copied());
    let day_narrows = SymbolTableBuilder::share(DAY_NARROWS.iter().copied());

    let mut builder = SymbolTableBuilder::new(locale, CalendarSystem::Gregorian)
        .shared("QuarterAbbreviations", &quarter_abbreviations)
        .shared("QuarterNames", &quarter_names);

    for &(key, value) in TEXT_ENTRIES {
        builder = builder.text(key, value);
    }

    for calendar in [CalendarSystem::Islamic, CalendarSystem::Roc] {
        let prefix = calendar.id();
        builder = builder
            .shared(format!("{prefix}.AmPmMarkers"), &am_pm)
            .shared(format!("{prefix}.DatePatterns"), &date_patterns)
            .shared(format!("{prefix}.DayAbbreviations"), &day_abbreviations)
            .shared(format!("{prefix}.DayNames"), &day_names)
            .shared(format!("{prefix}.DayNarrows"), &day_narrows)
            .shared(format!("{prefix}.QuarterAbbreviations"), &quarter_abbreviations)
            .shared(format!("{prefix}.QuarterNames"), &quarter_names)
            .shared(format!("{prefix}.TimePatterns"), &time_patterns)
            .shared(format!("{prefix}.abbreviated.AmPmMarkers"), &abbreviated_am_pm)
            .shared(format!("{prefix}.narrow.AmPmMarkers"), &narrow_am_pm);
    }

    builder
        .list("islamic.MonthNames", ISLAMIC_MONTH_NAMES.iter().copied())
        .list("roc.MonthAbbreviations", ROC_MONTH_ABBREVIATIONS.iter().copied())
        .list("roc.MonthNames", ROC_MONTH_NAMES.iter().copied())
        .list("roc.MonthNarrows", ROC_MONTH_NARROWS.iter().copied())
        .shared("java.time.buddhist.DatePatterns", &java_time_date_patterns)
        .shared("java.time.islamic.DatePatterns", &java_time_date_patterns)
        .shared("java.time.japanese.DatePatterns", &java_time_date_patterns)
        .shared("java.time.roc.DatePatterns", &java_time_date_patterns)
        .list("java.time.japanese.long.Eras", JAPANESE_LONG_ERAS.iter().copied())
        .list("java.time.japanese.short.Eras", JAPANESE_SHORT_ERAS.iter().copied())
        .list("java.time.long.Eras", LONG_ERAS.iter().copied())
        .list("java.time.short.Eras", SHORT_ERAS.iter().copied())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::SymbolKey;
    use crate::table::SymbolValue;
    use crate::types::{FieldName, SymbolCategory, SymbolStyle};

    #[test]
    fn loads_every_entry() {
        let table = load().unwrap();
        // 2 bare quarter lists, 17 text entries, 10 per calendar prefix,
        // 4 month lists, 4 java.time pattern lists and 4 era lists.
        assert_eq!(table.len(), 2 + 17 + 20 + 4 + 4 + 4);
        assert_eq!(table.locale().to_string(), "hi_IN");
        assert_eq!(table.calendar(), CalendarSystem::Gregorian);
    }

    #[test]
    fn lists_hold_their_own_values() {
        let table = load().unwrap();
        let cases: &[(&str, usize, &str, &str)] = &[
            ("QuarterAbbreviations", 4, "ति1", "ति4"),
            ("QuarterNames", 4, "पहली तिमाही", "चौथी तिमाही"),
            ("islamic.AmPmMarkers", 2, "पूर्वाह्न", "अपराह्न"),
            ("roc.abbreviated.AmPmMarkers", 2, "पूर्व", "अपर"),
            ("islamic.narrow.AmPmMarkers", 2, "पू", "अ"),
            ("roc.DatePatterns", 4, "GGGG EEEE, d MMMM y", "GGGG d/M/y"),
            ("java.time.japanese.DatePatterns", 4, "G EEEE, d MMMM y", "G d/M/y"),
            ("islamic.TimePatterns", 4, "h:mm:ss a zzzz", "h:mm a"),
            ("roc.DayNames", 7, "रविवार", "शनिवार"),
            ("islamic.DayAbbreviations", 7, "रवि", "शनि"),
            ("roc.DayNarrows", 7, "र", "श"),
            ("islamic.MonthNames", 13, "मुहर्रम", ""),
            ("roc.MonthAbbreviations", 13, "जन॰", ""),
            ("roc.MonthNarrows", 13, "ज", ""),
            ("java.time.japanese.long.Eras", 5, "ईसवी सन", "हेईसेई"),
            ("java.time.japanese.short.Eras", 5, "ईस्वी", "हेईसेई"),
            ("java.time.long.Eras", 2, "ईसा-पूर्व", "ईसवी सन"),
            ("java.time.short.Eras", 2, "ईसापूर्व", "सन"),
        ];
        for &(key, len, first, last) in cases {
            let list = table.get_list(key).unwrap();
            assert_eq!(list.len(), len, "{}", key);
            assert_eq!(list[0], first, "{}", key);
            assert_eq!(list[len - 1], last, "{}", key);
        }
        assert_eq!(table.get_list("islamic.MonthNames").unwrap()[11], "जिल्-हिज्जाह");
        assert_eq!(table.get_list("roc.MonthNames").unwrap()[11], "दिसंबर");
        assert_eq!(table.get_list("roc.MonthAbbreviations").unwrap()[11], "दिस॰");
        assert_eq!(table.get_list("roc.MonthNarrows").unwrap()[11], "दि");
    }

    #[test]
    fn field_names_resolve() {
        let table = load().unwrap();
        assert_eq!(table.get_text(&SymbolKey::field(FieldName::Year)).unwrap(), "वर्ष");
        for field in FieldName::all() {
            assert!(table.contains_key(&SymbolKey::field(*field)), "{:?}", field);
        }
    }

    #[test]
    fn islamic_and_roc_share_day_names() {
        let table = load().unwrap();
        match (
            table.get("islamic.DayNames").unwrap(),
            table.get("roc.DayNames").unwrap(),
        ) {
            (SymbolValue::List(a), SymbolValue::List(b)) => assert!(a.shares_storage_with(b)),
            other => panic!("expected lists, got {:?}", other),
        }
    }

    #[test]
    fn month_lists_keep_placeholder_slot() {
        let table = load().unwrap();
        let months = table.get_list("roc.MonthNames").unwrap();
        assert_eq!(months.len(), 13);
        assert_eq!(months[0], "जनवरी");
        assert_eq!(months[12], "");
    }

    #[test]
    fn synthesized_keys_exist() {
        let table = load().unwrap();
        let base = table.calendar();
        for calendar in [CalendarSystem::Islamic, CalendarSystem::Roc] {
            for style in [SymbolStyle::Full, SymbolStyle::Abbreviated, SymbolStyle::Narrow] {
                for category in [SymbolCategory::Days, SymbolCategory::AmPmMarkers] {
                    let key = SymbolKey::symbol(base, calendar, category, style);
                    assert!(table.contains_key(&key), "missing {}", key);
                }
            }
        }
        assert!(table.contains_key(&SymbolKey::java_time(
            CalendarSystem::Japanese,
            SymbolCategory::Eras,
            SymbolStyle::Abbreviated
        )));
    }
}
