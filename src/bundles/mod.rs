// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in symbol tables.
//!
//! Each bundle is a loader function over static data. [`table_for`] builds
//! a bundle the first time it is asked for and hands out the same
//! `&'static` table afterwards; concurrent first callers block on the same
//! [`OnceLock`] so a bundle is constructed at most once per process.
//!
//! Lookups are exact. Asking for `hi` does not find `hi_IN`; choosing a
//! fallback locale is the caller's decision.

pub mod hi_in;

use crate::locale::LocaleId;
use crate::table::{SymbolError, SymbolTable};
use std::sync::OnceLock;
use tracing::{debug, error};

struct Builtin {
    locale: &'static str,
    load: fn() -> Result<SymbolTable, SymbolError>,
    table: OnceLock<Option<SymbolTable>>,
}

impl Builtin {
    const fn new(locale: &'static str, load: fn() -> Result<SymbolTable, SymbolError>) -> Self {
        Self {
            locale,
            load,
            table: OnceLock::new(),
        }
    }

    fn get(&'static self) -> Option<&'static SymbolTable> {
        self.table
            .get_or_init(|| match (self.load)() {
                Ok(table) => {
                    debug!(locale = self.locale, entries = table.len(), "loaded built-in bundle");
                    Some(table)
                }
                Err(err) => {
                    error!(locale = self.locale, error = %err, "built-in bundle failed to build");
                    None
                }
            })
            .as_ref()
    }
}

static BUILTINS: [Builtin; 1] = [Builtin::new(hi_in::LOCALE, hi_in::load)];

/// Locales with a built-in table, in `xx_YY` form.
pub fn available() -> Vec<&'static str> {
    BUILTINS.iter().map(|b| b.locale).collect()
}

/// The built-in table for `locale`, if one ships with the crate.
pub fn table_for(locale: &LocaleId) -> Option<&'static SymbolTable> {
    let wanted = locale.to_string();
    BUILTINS
        .iter()
        .find(|b| b.locale == wanted)
        .and_then(Builtin::get)
}
