//! Parsed translations for a single locale.
//!
//! A [`Catalog`] is built once from parsed properties and never mutated
//! afterwards; reloading a locale produces a new catalog that supersedes the
//! cached one.

use std::collections::HashMap;

use log::warn;

use crate::locale::Locale;
use crate::properties::{self, Property};

const CATALOG_TARGET: &str = "protrans::catalog";

/// A key that appeared more than once in the same source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKey {
    /// Spelling of the key at the repeated occurrence.
    pub key: String,
    /// Line of the occurrence that was superseded.
    pub first_line: usize,
    /// Line of the occurrence whose value was kept.
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    key: String,
    value: String,
    line: usize,
}

/// Case-insensitive key/value translations for one locale.
///
/// The base catalog has no locale of its own and reports `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    locale: Option<Locale>,
    entries: HashMap<String, Entry>,
    order: Vec<String>,
    duplicates: Vec<DuplicateKey>,
}

impl Catalog {
    /// Parse properties text into a catalog.
    ///
    /// ```
    /// use protrans_common::{Catalog, Locale};
    ///
    /// let locale = Locale::parse("de").unwrap();
    /// let catalog = Catalog::parse("Greeting = Hallo\n", Some(locale));
    /// assert_eq!(catalog.get("greeting"), Some("Hallo"));
    /// assert_eq!(catalog.get("GREETING"), Some("Hallo"));
    /// ```
    #[must_use]
    pub fn parse(text: &str, locale: Option<Locale>) -> Self {
        Self::from_properties(properties::parse(text), locale)
    }

    /// Build a catalog from parsed entries.
    ///
    /// Later entries win over earlier ones with the same key (compared
    /// case-insensitively). Each repetition is logged and recorded in
    /// [`Catalog::duplicates`].
    #[must_use]
    pub fn from_properties<I>(properties: I, locale: Option<Locale>) -> Self
    where
        I: IntoIterator<Item = Property>,
    {
        let mut catalog = Self {
            locale,
            entries: HashMap::new(),
            order: Vec::new(),
            duplicates: Vec::new(),
        };
        for property in properties {
            catalog.insert(property);
        }
        catalog
    }

    fn insert(&mut self, property: Property) {
        let folded = property.key.to_lowercase();
        if let Some(existing) = self.entries.get_mut(&folded) {
            warn!(
                target: CATALOG_TARGET,
                "duplicate key `{}` in {} translations on line {} supersedes line {}",
                property.key,
                describe_locale(self.locale.as_ref()),
                property.line,
                existing.line,
            );
            self.duplicates.push(DuplicateKey {
                key: property.key,
                first_line: existing.line,
                line: property.line,
            });
            existing.value = property.value;
            existing.line = property.line;
            return;
        }

        self.order.push(folded.clone());
        self.entries.insert(
            folded,
            Entry {
                key: property.key,
                value: property.value,
                line: property.line,
            },
        );
    }

    /// Locale the catalog was loaded for; `None` for the base catalog.
    #[must_use]
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Look up a translation, ignoring key case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_lowercase())
            .map(|entry| entry.value.as_str())
    }

    /// Whether the catalog defines `key`, ignoring case.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    /// Keys in first-seen order, spelled as they first appeared.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order
            .iter()
            .filter_map(|folded| self.entries.get(folded))
            .map(|entry| entry.key.as_str())
    }

    /// Repeated keys found while building the catalog.
    #[must_use]
    pub fn duplicates(&self) -> &[DuplicateKey] {
        &self.duplicates
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn describe_locale(locale: Option<&Locale>) -> String {
    locale.map_or_else(|| String::from("base"), ToString::to_string)
}
