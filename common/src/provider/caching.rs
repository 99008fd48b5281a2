//! Thread-safe catalog cache over a [`SourceLoader`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use super::{CatalogProvider, PROVIDER_TARGET, SourceLoader};
use crate::catalog::Catalog;
use crate::error::TranslationError;
use crate::locale::Locale;

type CachedCatalog = Option<Arc<Catalog>>;

/// Parses each locale's source at most once and shares the result.
///
/// Lookups take a read lock. On a miss the source is loaded and parsed with
/// no lock held, then inserted under the write lock; if another thread won
/// the race its catalog is kept and returned to both callers. Absent
/// catalogs are cached as well, so a missing file is only probed once.
///
/// ```
/// use protrans_common::{CachingCatalogProvider, CatalogProvider, InMemorySource, Locale};
///
/// let source = InMemorySource::new()
///     .with_base("hello = Hello")
///     .with_locale(Locale::parse("de").unwrap(), "hello = Hallo");
/// let provider = CachingCatalogProvider::new(source);
///
/// let german = provider.catalog(Locale::parse("de").ok().as_ref()).unwrap().unwrap();
/// assert_eq!(german.get("hello"), Some("Hallo"));
/// assert!(provider.catalog(Locale::parse("fr").ok().as_ref()).unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct CachingCatalogProvider<S> {
    source: S,
    base: RwLock<Option<CachedCatalog>>,
    locales: RwLock<HashMap<Locale, CachedCatalog>>,
}

impl<S: SourceLoader> CachingCatalogProvider<S> {
    /// Wrap `source` with an empty cache.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            base: RwLock::new(None),
            locales: RwLock::new(HashMap::new()),
        }
    }

    /// Borrow the underlying backend.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    fn base_catalog(&self) -> Result<CachedCatalog, TranslationError> {
        if let Some(cached) = self
            .base
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(cached.clone());
        }

        let loaded = self
            .source
            .load_source(None)?
            .map(|text| Arc::new(Catalog::parse(&text, None)));

        let mut slot = self.base.write().unwrap_or_else(PoisonError::into_inner);
        Ok(slot.get_or_insert(loaded).clone())
    }

    fn locale_catalog(&self, locale: &Locale) -> CachedCatalog {
        if let Some(cached) = self
            .locales
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(locale)
        {
            return cached.clone();
        }

        let loaded = match self.source.load_source(Some(locale)) {
            Ok(text) => text.map(|text| Arc::new(Catalog::parse(&text, Some(locale.clone())))),
            Err(error) => {
                debug!(
                    target: PROVIDER_TARGET,
                    "treating translations for `{locale}` as absent: {error}"
                );
                None
            }
        };

        self.locales
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(locale.clone())
            .or_insert(loaded)
            .clone()
    }
}

impl<S: SourceLoader> CatalogProvider for CachingCatalogProvider<S> {
    fn catalog(&self, locale: Option<&Locale>) -> Result<Option<Arc<Catalog>>, TranslationError> {
        match locale {
            Some(locale) => Ok(self.locale_catalog(locale)),
            None => self.base_catalog(),
        }
    }

    fn clear_cache(&self) {
        *self.base.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.locales
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        debug!(target: PROVIDER_TARGET, "cleared catalog cache");
    }

    fn known_locales(&self) -> Result<Vec<Locale>, TranslationError> {
        Ok(self.source.known_locales()?)
    }
}
