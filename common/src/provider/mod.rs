//! Catalog providers and the storage backends they load from.
//!
//! A [`SourceLoader`] knows where locale text lives and nothing else. A
//! [`CatalogProvider`] turns that text into shared [`Catalog`] values; the
//! provided implementation, [`CachingCatalogProvider`], parses each locale at
//! most once until [`CatalogProvider::clear_cache`] is called.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::{SourceError, TranslationError};
use crate::locale::Locale;
use crate::locales;

mod caching;
mod filesystem;
mod memory;

pub use caching::CachingCatalogProvider;
pub use filesystem::{DEFAULT_BASE_PATH, FileSystemSource, locale_from_file_name};
pub use memory::InMemorySource;

pub(crate) const PROVIDER_TARGET: &str = "protrans::provider";

/// Storage backend yielding raw properties text per locale.
///
/// `None` as the locale addresses the base source, which carries no locale
/// suffix.
#[cfg_attr(test, mockall::automock)]
pub trait SourceLoader: Send + Sync {
    /// Read the source for `locale`, or `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the source exists but cannot be read, or
    /// when `locale` cannot be mapped onto a source name.
    fn load_source<'a>(&self, locale: Option<&'a Locale>) -> Result<Option<String>, SourceError>;

    /// Locales this backend may hold sources for, in presentation order.
    ///
    /// Backends that cannot enumerate their sources return the built-in
    /// table of known locales.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when enumeration fails.
    fn known_locales(&self) -> Result<Vec<Locale>, SourceError> {
        Ok(locales::known_locales().to_vec())
    }
}

/// Supplies parsed catalogs to the resolution engine.
pub trait CatalogProvider: Send + Sync {
    /// Catalog for `locale`, or the base catalog when `locale` is `None`.
    ///
    /// `Ok(None)` means no catalog exists for that locale.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Source`] when the base catalog exists but
    /// cannot be loaded.
    fn catalog(&self, locale: Option<&Locale>) -> Result<Option<Arc<Catalog>>, TranslationError>;

    /// Drop every cached catalog so the next request reloads it.
    fn clear_cache(&self);

    /// Locales worth probing when listing available translations.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Source`] when the backend cannot enumerate
    /// its sources.
    fn known_locales(&self) -> Result<Vec<Locale>, TranslationError>;
}
