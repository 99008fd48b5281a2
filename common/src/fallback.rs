//! Fallback policies mapping a locale to the next locale to try.

use std::collections::HashMap;
use std::sync::Arc;

use crate::locale::Locale;

/// Maps a locale onto its fallback, or `None` when the chain ends.
///
/// Any `Fn(&Locale) -> Option<Locale>` closure is a policy:
///
/// ```
/// use protrans_common::{FallbackPolicy, Locale};
///
/// let to_english = |_: &Locale| Locale::parse("en").ok();
/// let french = Locale::parse("fr").unwrap();
/// assert_eq!(to_english.fallback_of(&french), Locale::parse("en").ok());
/// ```
pub trait FallbackPolicy: Send + Sync {
    /// Locale to consult after `locale` has no translation.
    fn fallback_of(&self, locale: &Locale) -> Option<Locale>;
}

impl<F> FallbackPolicy for F
where
    F: Fn(&Locale) -> Option<Locale> + Send + Sync,
{
    fn fallback_of(&self, locale: &Locale) -> Option<Locale> {
        self(locale)
    }
}

/// Drops the region: `de-AT` falls back to `de`, and neutral locales end the
/// chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreRegionFallback;

impl FallbackPolicy for IgnoreRegionFallback {
    fn fallback_of(&self, locale: &Locale) -> Option<Locale> {
        (!locale.is_neutral()).then(|| locale.without_region())
    }
}

/// Explicit fallback edges layered over another policy.
///
/// Locales with an explicit edge follow it; all others defer to the inner
/// policy. This expresses graphs such as `pt-BR -> es -> en`.
#[derive(Clone)]
pub struct MappedFallback {
    edges: HashMap<Locale, Option<Locale>>,
    inner: Arc<dyn FallbackPolicy>,
}

impl MappedFallback {
    /// Start from `inner` with no explicit edges.
    #[must_use]
    pub fn new(inner: Arc<dyn FallbackPolicy>) -> Self {
        Self {
            edges: HashMap::new(),
            inner,
        }
    }

    /// Make `from` fall back to `to`.
    #[must_use]
    pub fn with_edge(mut self, from: Locale, to: Locale) -> Self {
        self.edges.insert(from, Some(to));
        self
    }

    /// End the chain at `locale` regardless of the inner policy.
    #[must_use]
    pub fn with_terminal(mut self, locale: Locale) -> Self {
        self.edges.insert(locale, None);
        self
    }
}

impl Default for MappedFallback {
    fn default() -> Self {
        Self::new(Arc::new(IgnoreRegionFallback))
    }
}

impl std::fmt::Debug for MappedFallback {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MappedFallback")
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}

impl FallbackPolicy for MappedFallback {
    fn fallback_of(&self, locale: &Locale) -> Option<Locale> {
        match self.edges.get(locale) {
            Some(edge) => edge.clone(),
            None => self.inner.fallback_of(locale),
        }
    }
}
