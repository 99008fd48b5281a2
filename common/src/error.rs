//! Error types shared across the translation core.
//!
//! Parsing never fails at the line level, so the errors here describe the
//! structural problems callers must handle: malformed locales and file names,
//! unreadable sources, missing base catalogs, and placeholder violations when
//! the strict strategy is selected.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while parsing locale tags or locale-suffixed file names.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag is empty, undetermined, or not a valid language identifier.
    #[error("invalid locale `{tag}`")]
    Invalid {
        /// The rejected input.
        tag: String,
    },

    /// A file name carries a language or region suffix that is not made of
    /// exactly two ASCII letters.
    #[error("malformed locale suffix in `{file_name}`: {reason}")]
    MalformedSuffix {
        /// File name that failed to resolve.
        file_name: String,
        /// Description of the offending suffix segment.
        reason: String,
    },
}

/// Errors raised by storage backends when reading locale sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source exists but could not be read.
    #[error("failed to read translations from {path}")]
    Read {
        /// Path of the unreadable source.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The locale cannot be mapped onto a source name.
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// Source discovery failed to build its search pattern.
    #[error("invalid source pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Errors surfaced by the resolution engine.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The translation uses `{placeholder}` but the caller did not supply it
    /// and the missing-placeholder strategy is `Throw`.
    #[error("translation `{key}` expects placeholder `{placeholder}` but none was supplied")]
    MissingPlaceholder {
        /// Translation key being resolved.
        key: String,
        /// Name of the unsatisfied placeholder.
        placeholder: String,
    },

    /// The caller supplied a placeholder the translation does not use and the
    /// unexpected-placeholder strategy is `Throw`.
    #[error("translation `{key}` has no placeholder `{placeholder}`")]
    UnexpectedPlaceholder {
        /// Translation key being resolved.
        key: String,
        /// Name of the superfluous placeholder.
        placeholder: String,
    },

    /// The base catalog is absent, so no key can ever resolve.
    #[error("no base translations are available")]
    MissingBaseCatalog,

    /// No catalog exists for the current locale or any of its fallbacks and
    /// the fail-fast policy is active.
    #[error("no translations for locale `{locale}` and falling back is disabled")]
    MissingCatalog {
        /// The current locale that has no catalog.
        locale: String,
    },

    /// A storage backend failed while loading the base catalog or
    /// enumerating locales.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<LocaleError> for TranslationError {
    fn from(error: LocaleError) -> Self {
        Self::Source(SourceError::Locale(error))
    }
}
