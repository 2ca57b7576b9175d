// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-symbols: immutable calendar and date-time symbol tables.
//!
//! A [`SymbolTable`] answers one question for one locale: "what is stored
//! under `islamic.DayNames`?" Values are either a single display string
//! (`field.year`) or an ordered list (day, month, quarter and era names,
//! date and time patterns). Tables are built once and read-only after,
//! so they can be shared freely across threads.
//!
//! MODULES:
//! 1. **table**: the table, its builder, and the shared read-only lists.
//! 2. **key**: key syntax, and the keys a formatter asks for given a
//!    calendar, a symbol category and a style.
//! 3. **bundles**: tables that ship with the crate, built lazily once.
//! 4. **source** / **export**: JSON, YAML and Nickel bundle documents.
//! 5. **verify**: shape checks and content fingerprints.

pub mod bundles;
pub mod config;
pub mod export;
pub mod key;
pub mod locale;
pub mod source;
pub mod table;
pub mod types;
pub mod verify;

pub use locale::{LocaleError, LocaleId};
pub use table::{SymbolError, SymbolList, SymbolTable, SymbolTableBuilder, SymbolValue, ValueKind};
pub use types::{CalendarSystem, FieldName, SymbolCategory, SymbolStyle};
