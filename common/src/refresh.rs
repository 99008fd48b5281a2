//! Hook for host components that display translated text.
//!
//! Hosts call [`UpdateTranslation::update_translation`] on their components
//! after switching locales or clearing the cache. Nothing in this crate
//! walks a component tree on its own.

use log::warn;

use crate::engine::Translator;
use crate::error::TranslationError;
use crate::placeholders::Placeholders;

const RESOLVE_TARGET: &str = "protrans::resolve";

/// A component whose text depends on the current translations.
pub trait UpdateTranslation {
    /// Re-render using `translator`.
    fn update_translation(&mut self, translator: &Translator);
}

/// A translated label: a key, its placeholders, and the last rendered text.
///
/// ```
/// use std::sync::Arc;
/// use protrans_common::{
///     CachingCatalogProvider, InMemorySource, Locale, TranslatedText, TranslationConfig,
///     Translator, UpdateTranslation,
/// };
///
/// let source = InMemorySource::new()
///     .with_base("title = Settings")
///     .with_locale(Locale::parse("de").unwrap(), "title = Einstellungen");
/// let translator = Translator::new(TranslationConfig::new(Arc::new(
///     CachingCatalogProvider::new(source),
/// )));
///
/// let mut title = TranslatedText::new("title");
/// title.update_translation(&translator);
/// assert_eq!(title.text(), "Settings");
///
/// translator.set_current_locale(Locale::parse("de").unwrap());
/// title.update_translation(&translator);
/// assert_eq!(title.text(), "Einstellungen");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslatedText {
    key: String,
    placeholders: Placeholders,
    text: String,
}

impl TranslatedText {
    /// Create a label for `key`; its text stays empty until the first update.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Attach placeholder values used on every update.
    #[must_use]
    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Translation key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Text from the last update.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Re-render, surfacing resolution failures instead of logging them.
    ///
    /// # Errors
    ///
    /// Propagates any [`TranslationError`] from [`Translator::resolve`]; the
    /// previous text is kept.
    pub fn try_update(&mut self, translator: &Translator) -> Result<(), TranslationError> {
        self.text = translator.resolve(&self.key, Some(&self.placeholders))?;
        Ok(())
    }
}

impl UpdateTranslation for TranslatedText {
    /// Failures are logged and fall back to showing the key.
    fn update_translation(&mut self, translator: &Translator) {
        if let Err(error) = self.try_update(translator) {
            warn!(target: RESOLVE_TARGET, "cannot translate `{}`: {error}", self.key);
            self.text.clone_from(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::TranslationConfig;
    use crate::provider::{CachingCatalogProvider, InMemorySource};

    fn translator(source: InMemorySource) -> Translator {
        Translator::new(TranslationConfig::new(Arc::new(CachingCatalogProvider::new(
            source,
        ))))
    }

    #[test]
    fn renders_placeholders_on_update() {
        let translator = translator(InMemorySource::new().with_base("welcome = Welcome, {user}"));
        let mut placeholders = Placeholders::new();
        placeholders.insert("user", "Ada");
        let mut label = TranslatedText::new("welcome").with_placeholders(placeholders);

        label.update_translation(&translator);
        assert_eq!(label.text(), "Welcome, Ada");
    }

    #[test]
    fn shows_the_key_when_resolution_fails() {
        let translator = translator(InMemorySource::new());
        let mut label = TranslatedText::new("welcome");

        assert!(label.try_update(&translator).is_err());
        label.update_translation(&translator);
        assert_eq!(label.text(), "welcome");
    }
}
