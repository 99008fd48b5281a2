//! Test doubles for exercising providers and the resolution engine.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use camino::Utf8PathBuf;

use crate::error::SourceError;
use crate::locale::Locale;
use crate::provider::SourceLoader;

/// Wraps a [`SourceLoader`] and counts how often it is asked for text.
///
/// Shared across cache tests to prove that sources are read once per
/// locale until the cache is cleared.
#[derive(Debug, Default)]
pub struct CountingSource<S> {
    inner: S,
    loads: AtomicUsize,
}

impl<S> CountingSource<S> {
    /// Count the loads served by `inner`.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of [`SourceLoader::load_source`] calls so far.
    #[must_use]
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl<S: SourceLoader> SourceLoader for CountingSource<S> {
    fn load_source(&self, locale: Option<&Locale>) -> Result<Option<String>, SourceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load_source(locale)
    }

    fn known_locales(&self) -> Result<Vec<Locale>, SourceError> {
        self.inner.known_locales()
    }
}

/// Source whose every read fails with an I/O error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailingSource {
    path: Utf8PathBuf,
}

impl FailingSource {
    /// Fail every read, reporting `path` as the unreadable file.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourceLoader for FailingSource {
    fn load_source(&self, _locale: Option<&Locale>) -> Result<Option<String>, SourceError> {
        Err(SourceError::Read {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read refused by test double"),
        })
    }
}
