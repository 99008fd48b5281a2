//! The resolution engine.
//!
//! [`Translator::resolve`] walks the current locale and its fallbacks, then
//! the base catalog, and substitutes placeholders into the first translation
//! it finds. Each call works on one snapshot of the configuration, so a
//! concurrent [`Translator::replace_config`] never yields a half-applied
//! setting.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::{PoisonError, RwLock};

use log::{debug, log};

use crate::config::{MissingLocalePolicy, TranslationConfig};
use crate::error::TranslationError;
use crate::locale::Locale;
use crate::placeholders::{Placeholders, substitute};

const RESOLVE_TARGET: &str = "protrans::resolve";

/// Resolves translation keys against the configured catalogs.
///
/// ```
/// use std::sync::Arc;
/// use protrans_common::{
///     CachingCatalogProvider, InMemorySource, Locale, Placeholders, TranslationConfig, Translator,
/// };
///
/// let source = InMemorySource::new()
///     .with_base("hello = Hello {name}!")
///     .with_locale(Locale::parse("de").unwrap(), "hello = Hallo {name}!");
/// let config = TranslationConfig::new(Arc::new(CachingCatalogProvider::new(source)))
///     .with_current_locale(Locale::parse("de-AT").unwrap());
/// let translator = Translator::new(config);
///
/// let text = translator.get_with_sequence("hello", &["name", "Alice"]).unwrap();
/// assert_eq!(text, "Hallo Alice!");
/// assert_eq!(translator.get("missing").unwrap(), "missing");
/// ```
#[derive(Debug)]
pub struct Translator {
    config: RwLock<TranslationConfig>,
}

impl Translator {
    /// Create a translator owning `config`.
    #[must_use]
    pub fn new(config: TranslationConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> TranslationConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole configuration.
    pub fn replace_config(&self, config: TranslationConfig) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// Switch the current locale, keeping every other setting.
    pub fn set_current_locale(&self, locale: Locale) {
        debug!(target: RESOLVE_TARGET, "current locale set to `{locale}`");
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .current_locale = locale;
    }

    /// The locale translations are currently resolved for.
    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .current_locale
            .clone()
    }

    /// Drop cached catalogs so edited sources are picked up.
    pub fn clear_cache(&self) {
        self.config().provider.clear_cache();
    }

    /// Translate `key` without placeholders.
    ///
    /// # Errors
    ///
    /// See [`Translator::resolve`].
    pub fn get(&self, key: &str) -> Result<String, TranslationError> {
        self.resolve(key, None)
    }

    /// Translate `key`, substituting `placeholders`.
    ///
    /// # Errors
    ///
    /// See [`Translator::resolve`].
    pub fn get_with(&self, key: &str, placeholders: &Placeholders) -> Result<String, TranslationError> {
        self.resolve(key, Some(placeholders))
    }

    /// Translate `key`, substituting the values of `placeholders`.
    ///
    /// # Errors
    ///
    /// See [`Translator::resolve`].
    pub fn get_with_map<H: BuildHasher>(
        &self,
        key: &str,
        placeholders: &HashMap<String, String, H>,
    ) -> Result<String, TranslationError> {
        let placeholders: Placeholders = placeholders
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        self.resolve(key, Some(&placeholders))
    }

    /// Translate `key` with placeholders given as `[name, value, ...]`.
    ///
    /// An odd trailing item is dropped with a warning.
    ///
    /// # Errors
    ///
    /// See [`Translator::resolve`].
    pub fn get_with_sequence<S: AsRef<str>>(
        &self,
        key: &str,
        sequence: &[S],
    ) -> Result<String, TranslationError> {
        self.resolve(key, Some(&Placeholders::from_sequence(key, sequence)))
    }

    /// Translate `key`, returning the key itself when no catalog defines it.
    ///
    /// # Errors
    ///
    /// - [`TranslationError::MissingBaseCatalog`] when the fallback chain is
    ///   exhausted and neither the default locale nor the base has a catalog.
    /// - [`TranslationError::MissingCatalog`] under
    ///   [`MissingLocalePolicy::FailFast`] when the current locale has no
    ///   catalog.
    /// - [`TranslationError::MissingPlaceholder`] and
    ///   [`TranslationError::UnexpectedPlaceholder`] under the strict
    ///   placeholder strategy.
    /// - [`TranslationError::Source`] when the base catalog cannot be read.
    pub fn resolve(
        &self,
        key: &str,
        placeholders: Option<&Placeholders>,
    ) -> Result<String, TranslationError> {
        let config = self.config();
        match translate(&config, key, placeholders)? {
            Some(text) => Ok(text),
            None => {
                log!(
                    target: RESOLVE_TARGET,
                    config.missing_translation_level,
                    "missing translation for `{key}` in locale `{}`",
                    config.current_locale,
                );
                Ok(key.to_owned())
            }
        }
    }

    /// Translate `key`, returning `Ok(None)` when no catalog defines it.
    ///
    /// # Errors
    ///
    /// As [`Translator::resolve`].
    pub fn try_resolve(
        &self,
        key: &str,
        placeholders: Option<&Placeholders>,
    ) -> Result<Option<String>, TranslationError> {
        translate(&self.config(), key, placeholders)
    }

    /// Locales that have translations, default locale first.
    ///
    /// The default locale counts as available when either its own catalog or
    /// the base catalog exists. Every other locale the provider enumerates is
    /// checked and kept when its catalog exists. Meant for populating a
    /// language picker, not for per-frame use.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Source`] when the provider cannot
    /// enumerate its locales or read the base catalog.
    pub fn available_locales(&self) -> Result<Vec<Locale>, TranslationError> {
        let config = self.config();
        let provider = &config.provider;
        let default = &config.default_locale;

        let mut available = Vec::new();
        if provider.catalog(Some(default))?.is_some() || provider.catalog(None)?.is_some() {
            available.push(default.clone());
        }

        for locale in provider.known_locales()? {
            if &locale == default || available.contains(&locale) {
                continue;
            }
            if provider.catalog(Some(&locale))?.is_some() {
                available.push(locale);
            }
        }
        Ok(available)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslationConfig::default())
    }
}

/// Find the translation template for `key` and substitute placeholders.
fn translate(
    config: &TranslationConfig,
    key: &str,
    placeholders: Option<&Placeholders>,
) -> Result<Option<String>, TranslationError> {
    let Some(template) = lookup(config, key)? else {
        return Ok(None);
    };
    substitute(key, &template, placeholders, config.placeholder_policy()).map(Some)
}

/// Walk the fallback chain, then the default locale, then the base catalog.
fn lookup(config: &TranslationConfig, key: &str) -> Result<Option<String>, TranslationError> {
    let default = &config.default_locale;
    let mut visited: Vec<Locale> = Vec::new();
    let mut next = Some(config.current_locale.clone());
    let mut found_catalog = false;
    let mut found_default = false;

    while let Some(locale) = next.take() {
        if visited.contains(&locale) {
            break;
        }
        if let Some(catalog) = config.provider.catalog(Some(&locale))? {
            found_catalog = true;
            found_default |= &locale == default;
            if let Some(value) = catalog.get(key) {
                return Ok(Some(value.to_owned()));
            }
        }
        next = config.fallback.fallback_of(&locale);
        visited.push(locale);
    }

    if !found_catalog
        && config.missing_locale == MissingLocalePolicy::FailFast
        && &config.current_locale != default
    {
        return Err(TranslationError::MissingCatalog {
            locale: config.current_locale.to_string(),
        });
    }

    if !visited.contains(default) {
        if let Some(catalog) = config.provider.catalog(Some(default))? {
            found_default = true;
            if let Some(value) = catalog.get(key) {
                return Ok(Some(value.to_owned()));
            }
        }
    }

    match config.provider.catalog(None)? {
        Some(base) => Ok(base.get(key).map(str::to_owned)),
        None if found_default => Ok(None),
        None => Err(TranslationError::MissingBaseCatalog),
    }
}
