//! Core of ProTrans: `.properties` parsing, per-locale catalog caching, and
//! key resolution with locale fallback and `{name}` placeholder substitution.
//!
//! A [`Translator`] owns a [`TranslationConfig`], which names the current and
//! default locales, the placeholder strategies, a [`CatalogProvider`], and a
//! [`FallbackPolicy`]. Resolving a key walks the current locale, its
//! fallbacks, and finally the base catalog; unknown keys come back verbatim.
//!
//! ```
//! use std::sync::Arc;
//! use protrans_common::{
//!     CachingCatalogProvider, InMemorySource, Locale, TranslationConfig, Translator,
//! };
//!
//! let source = InMemorySource::new()
//!     .with_base("farewell = Goodbye")
//!     .with_locale(Locale::parse("de").unwrap(), "farewell = Auf Wiedersehen");
//! let translator = Translator::new(
//!     TranslationConfig::new(Arc::new(CachingCatalogProvider::new(source)))
//!         .with_current_locale(Locale::parse("de-CH").unwrap()),
//! );
//! assert_eq!(translator.get("farewell").unwrap(), "Auf Wiedersehen");
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod locale;
pub mod locales;
pub mod placeholders;
pub mod properties;
pub mod provider;
pub mod refresh;
pub mod selection;
pub mod testing;

pub use catalog::{Catalog, DuplicateKey};
pub use config::{MissingLocalePolicy, TranslationConfig, UnknownPolicy};
pub use engine::Translator;
pub use error::{LocaleError, SourceError, TranslationError};
pub use fallback::{FallbackPolicy, IgnoreRegionFallback, MappedFallback};
pub use locale::Locale;
pub use locales::{is_known_locale, known_locales};
pub use placeholders::{
    PlaceholderPolicy, PlaceholderStrategy, Placeholders, UnknownStrategy, substitute,
};
pub use properties::{Property, parse};
pub use provider::{
    CachingCatalogProvider, CatalogProvider, FileSystemSource, InMemorySource, SourceLoader,
    locale_from_file_name,
};
pub use refresh::{TranslatedText, UpdateTranslation};
pub use selection::{
    LOCALE_ENV_VAR, LocaleCandidates, LocaleSelection, LocaleSource, RejectedCandidate,
    locale_from_environment, normalise_locale, resolve_locale,
};
