// SPDX-License-Identifier: PMPL-1.0-or-later

//! Immutable locale-scoped symbol tables
//!
//! A [`SymbolTable`] maps namespaced keys (`field.year`, `islamic.DayNames`,
//! `java.time.short.Eras`) to either one display string or an ordered list
//! of display strings. Tables are assembled once through
//! [`SymbolTableBuilder`] and never change afterwards, so a table can be read
//! from any number of threads without locking.
//!
//! Lists are held behind [`SymbolList`], a reference-counted read-only
//! slice. Several keys may carry the same handle (the same quarter names
//! under `QuarterNames`, `islamic.QuarterNames`, `roc.QuarterNames`); since
//! no handle hands out mutable access, that sharing cannot be observed.

use crate::key::validate_key;
use crate::locale::{LocaleError, LocaleId};
use crate::types::CalendarSystem;
use serde::{Serialize, Serializer};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised by table construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("symbol key not found: {0}")]
    KeyNotFound(String),
    #[error("symbol '{key}' is not a {expected}")]
    WrongKind { key: String, expected: ValueKind },
    #[error("duplicate symbol key: {0}")]
    DuplicateKey(String),
    #[error("invalid symbol key: {0:?}")]
    InvalidKey(String),
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Shape of a [`SymbolValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => f.write_str("text value"),
            ValueKind::List => f.write_str("list value"),
        }
    }
}

/// Read-only ordered list of display strings.
///
/// Cloning copies the handle, not the strings. Equality compares contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolList(Arc<[String]>);

impl SymbolList {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether two handles point at the same underlying storage.
    pub fn shares_storage_with(&self, other: &SymbolList) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SymbolList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl Serialize for SymbolList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

/// A single table value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolValue {
    Text(Arc<str>),
    List(SymbolList),
}

impl SymbolValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            SymbolValue::Text(_) => ValueKind::Text,
            SymbolValue::List(_) => ValueKind::List,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SymbolValue::Text(text) => Some(text),
            SymbolValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SymbolValue::Text(_) => None,
            SymbolValue::List(list) => Some(list.as_slice()),
        }
    }
}

impl Serialize for SymbolValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SymbolValue::Text(text) => serializer.serialize_str(text),
            SymbolValue::List(list) => list.serialize(serializer),
        }
    }
}

impl From<&str> for SymbolValue {
    fn from(text: &str) -> Self {
        SymbolValue::Text(Arc::from(text))
    }
}

impl From<SymbolList> for SymbolValue {
    fn from(list: SymbolList) -> Self {
        SymbolValue::List(list)
    }
}

/// Immutable mapping from symbol keys to values for one locale.
///
/// Identified by its locale and base calendar. Unprefixed calendar keys
/// (`DayNames`) describe the base calendar; other calendars use prefixed
/// keys (`roc.DayNames`).
///
/// # Example
///
/// ```
/// use locale_symbols::{LocaleId, SymbolTableBuilder, CalendarSystem};
///
/// let locale = LocaleId::parse("en_US").unwrap();
/// let table = SymbolTableBuilder::new(locale, CalendarSystem::Gregorian)
///     .text("field.year", "Year")
///     .list("DayNames", ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.get_text("field.year").unwrap(), "Year");
/// assert_eq!(table.get_list("DayNames").unwrap()[0], "Sun");
/// assert!(table.get("field.month").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    locale: LocaleId,
    calendar: CalendarSystem,
    entries: HashMap<String, SymbolValue>,
}

impl SymbolTable {
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<&SymbolValue, SymbolError> {
        self.entries
            .get(key)
            .ok_or_else(|| SymbolError::KeyNotFound(key.to_string()))
    }

    /// Look up a text value.
    pub fn get_text(&self, key: &str) -> Result<&str, SymbolError> {
        self.get(key)?
            .as_text()
            .ok_or_else(|| SymbolError::WrongKind {
                key: key.to_string(),
                expected: ValueKind::Text,
            })
    }

    /// Look up a list value.
    pub fn get_list(&self, key: &str) -> Result<&[String], SymbolError> {
        self.get(key)?
            .as_list()
            .ok_or_else(|| SymbolError::WrongKind {
                key: key.to_string(),
                expected: ValueKind::List,
            })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys in the table, in no particular order.
    ///
    /// The iterator borrows the table and can be cloned to walk the keys
    /// again.
    pub fn keys(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolValue)> + Clone + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assembles a [`SymbolTable`] from literal data.
///
/// Key problems are collected and reported by [`build`](Self::build) so the
/// builder methods can chain.
#[derive(Debug, Clone)]
pub struct SymbolTableBuilder {
    locale: LocaleId,
    calendar: CalendarSystem,
    entries: Vec<(String, SymbolValue)>,
}

impl SymbolTableBuilder {
    pub fn new(locale: LocaleId, calendar: CalendarSystem) -> Self {
        Self {
            locale,
            calendar,
            entries: Vec::new(),
        }
    }

    /// Create a list handle meant to be stored under several keys.
    pub fn share<I, S>(values: I) -> SymbolList
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SymbolList::new(values)
    }

    pub fn text(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.entries
            .push((key.into(), SymbolValue::from(value.as_ref())));
        self
    }

    pub fn list<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((key.into(), SymbolValue::List(SymbolList::new(values))));
        self
    }

    /// Store an existing list handle under `key` without copying it.
    pub fn shared(mut self, key: impl Into<String>, list: &SymbolList) -> Self {
        self.entries
            .push((key.into(), SymbolValue::List(list.clone())));
        self
    }

    pub fn value(mut self, key: impl Into<String>, value: SymbolValue) -> Self {
        self.entries.push((key.into(), value));
        self
    }

    pub fn build(self) -> Result<SymbolTable, SymbolError> {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            if !validate_key(&key) {
                return Err(SymbolError::InvalidKey(key));
            }
            match entries.entry(key) {
                Entry::Occupied(slot) => {
                    return Err(SymbolError::DuplicateKey(slot.key().clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }

        debug!(
            locale = %self.locale,
            calendar = %self.calendar,
            entries = entries.len(),
            "built symbol table"
        );

        Ok(SymbolTable {
            locale: self.locale,
            calendar: self.calendar,
            entries,
        })
    }
}
