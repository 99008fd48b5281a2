//! Settings that steer resolution.
//!
//! A [`TranslationConfig`] is a plain value. The [`Translator`] owns one and
//! replaces it wholesale, so there is no process-wide mutable state.
//!
//! [`Translator`]: crate::Translator

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::Level;
use thiserror::Error;
use unic_langid::langid;

use crate::fallback::{FallbackPolicy, IgnoreRegionFallback};
use crate::locale::Locale;
use crate::placeholders::{PlaceholderPolicy, PlaceholderStrategy};
use crate::provider::{CachingCatalogProvider, CatalogProvider, FileSystemSource};

/// Behaviour when the current locale has no catalog anywhere along its
/// fallback chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MissingLocalePolicy {
    /// Resolve from the base catalog.
    #[default]
    Fallback,
    /// Fail with [`TranslationError::MissingCatalog`] unless the current
    /// locale is the default locale.
    ///
    /// [`TranslationError::MissingCatalog`]: crate::TranslationError::MissingCatalog
    FailFast,
}

impl MissingLocalePolicy {
    /// Kebab-case name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::FailFast => "fail-fast",
        }
    }
}

impl fmt::Display for MissingLocalePolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Raised when a policy name is neither `fallback` nor `fail-fast`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown missing-locale policy `{0}` (expected fallback or fail-fast)")]
pub struct UnknownPolicy(pub String);

impl FromStr for MissingLocalePolicy {
    type Err = UnknownPolicy;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "fallback" => Ok(Self::Fallback),
            "fail-fast" | "failfast" => Ok(Self::FailFast),
            _ => Err(UnknownPolicy(input.to_owned())),
        }
    }
}

/// Complete, replaceable resolution settings.
#[derive(Clone)]
pub struct TranslationConfig {
    /// Locale requested by the host application.
    pub current_locale: Locale,
    /// Locale the base catalog is written in.
    pub default_locale: Locale,
    /// Reaction to a `{token}` the caller did not supply.
    pub missing_placeholder: PlaceholderStrategy,
    /// Reaction to a supplied placeholder the translation does not use.
    pub unexpected_placeholder: PlaceholderStrategy,
    /// Reaction to a current locale with no catalog at all.
    pub missing_locale: MissingLocalePolicy,
    /// Severity of the diagnostic emitted for an untranslated key.
    pub missing_translation_level: Level,
    /// Source of parsed catalogs.
    pub provider: Arc<dyn CatalogProvider>,
    /// Next locale to try when a catalog lacks a key.
    pub fallback: Arc<dyn FallbackPolicy>,
}

impl TranslationConfig {
    /// Default settings reading catalogs from `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        let english = english();
        Self {
            current_locale: english.clone(),
            default_locale: english,
            missing_placeholder: PlaceholderStrategy::default(),
            unexpected_placeholder: PlaceholderStrategy::default(),
            missing_locale: MissingLocalePolicy::default(),
            missing_translation_level: Level::Warn,
            provider,
            fallback: Arc::new(IgnoreRegionFallback),
        }
    }

    /// Set the current locale.
    #[must_use]
    pub fn with_current_locale(mut self, locale: Locale) -> Self {
        self.current_locale = locale;
        self
    }

    /// Set the default locale.
    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Use `strategy` for both missing and unexpected placeholders.
    #[must_use]
    pub fn with_placeholder_strategy(mut self, strategy: PlaceholderStrategy) -> Self {
        self.missing_placeholder = strategy;
        self.unexpected_placeholder = strategy;
        self
    }

    /// Set the missing-locale policy.
    #[must_use]
    pub fn with_missing_locale(mut self, policy: MissingLocalePolicy) -> Self {
        self.missing_locale = policy;
        self
    }

    /// Replace the fallback policy.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackPolicy>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Placeholder strategies bundled for substitution.
    #[must_use]
    pub fn placeholder_policy(&self) -> PlaceholderPolicy {
        PlaceholderPolicy {
            missing: self.missing_placeholder,
            unexpected: self.unexpected_placeholder,
        }
    }
}

impl Default for TranslationConfig {
    /// Files under `translations/` named `messages[_ll[_RR]].properties`.
    fn default() -> Self {
        Self::new(Arc::new(CachingCatalogProvider::new(
            FileSystemSource::default(),
        )))
    }
}

impl fmt::Debug for TranslationConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TranslationConfig")
            .field("current_locale", &self.current_locale)
            .field("default_locale", &self.default_locale)
            .field("missing_placeholder", &self.missing_placeholder)
            .field("unexpected_placeholder", &self.unexpected_placeholder)
            .field("missing_locale", &self.missing_locale)
            .field("missing_translation_level", &self.missing_translation_level)
            .finish_non_exhaustive()
    }
}

fn english() -> Locale {
    Locale::from(langid!("en"))
}
