//! Sources held in memory, for embedded bundles and tests.

use std::collections::HashMap;

use super::SourceLoader;
use crate::error::SourceError;
use crate::locale::Locale;
use crate::locales;

/// Properties text keyed by locale, with an optional base source.
///
/// Enumeration lists locales in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    base: Option<String>,
    sources: HashMap<Locale, String>,
    order: Vec<Locale>,
}

impl InMemorySource {
    /// Create a source with no texts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base text.
    #[must_use]
    pub fn with_base(mut self, text: impl Into<String>) -> Self {
        self.base = Some(text.into());
        self
    }

    /// Add or replace the text for `locale`.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale, text: impl Into<String>) -> Self {
        if !self.sources.contains_key(&locale) {
            self.order.push(locale.clone());
        }
        self.sources.insert(locale, text.into());
        self
    }
}

impl SourceLoader for InMemorySource {
    fn load_source(&self, locale: Option<&Locale>) -> Result<Option<String>, SourceError> {
        Ok(match locale {
            Some(locale) => self.sources.get(locale).cloned(),
            None => self.base.clone(),
        })
    }

    fn known_locales(&self) -> Result<Vec<Locale>, SourceError> {
        if self.order.is_empty() {
            return Ok(locales::known_locales().to_vec());
        }
        Ok(self.order.clone())
    }
}
