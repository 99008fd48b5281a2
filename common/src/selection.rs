//! Choosing the current locale from the places a host may name one.
//!
//! Candidates are tried in precedence order. Blank values are skipped
//! silently; values that fail [`Locale::parse`] are skipped too but kept in
//! [`LocaleSelection::rejected`] so hosts can report them.

use std::fmt;

use log::{debug, warn};

use crate::error::LocaleError;
use crate::locale::Locale;

const SELECTION_TARGET: &str = "protrans::selection";

/// Environment variable consulted by [`resolve_locale`].
pub const LOCALE_ENV_VAR: &str = "PROTRANS_LOCALE";

/// Where the current locale came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Passed in by the caller, e.g. `--locale` on the command line.
    Explicit,
    /// Read from `PROTRANS_LOCALE`.
    Environment,
    /// The `locale` setting in `protrans.toml`.
    Configuration,
    /// No candidate applied, so the default locale stands.
    Default,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Explicit => "requested locale",
            Self::Environment => LOCALE_ENV_VAR,
            Self::Configuration => "`locale` setting",
            Self::Default => "default locale",
        };
        formatter.write_str(label)
    }
}

/// A candidate that was present but not a usable locale tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectedCandidate {
    /// Where the value came from.
    pub source: LocaleSource,
    /// The trimmed value as supplied.
    pub value: String,
    /// Why [`Locale::parse`] refused it.
    pub error: LocaleError,
}

/// The chosen locale together with its provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleSelection {
    /// The locale to translate into.
    pub locale: Locale,
    /// Which candidate supplied [`LocaleSelection::locale`].
    pub source: LocaleSource,
    /// Candidates skipped before the choice was made, in precedence order.
    pub rejected: Vec<RejectedCandidate>,
}

impl LocaleSelection {
    /// Whether every candidate was absent or rejected.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.source == LocaleSource::Default
    }

    /// Consumes the selection, yielding the [`Locale`].
    #[must_use]
    pub fn into_locale(self) -> Locale {
        self.locale
    }
}

/// Raw locale candidates in precedence order.
///
/// ```
/// use protrans_common::{Locale, LocaleCandidates, LocaleSource};
///
/// let default = Locale::parse("fr").unwrap();
/// let selection = LocaleCandidates::default()
///     .environment(Some("de_AT"))
///     .configuration(Some("it"))
///     .select(&default);
/// assert_eq!(selection.source, LocaleSource::Environment);
/// assert_eq!(selection.locale.to_string(), "de-AT");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LocaleCandidates<'a> {
    explicit: Option<&'a str>,
    environment: Option<&'a str>,
    configuration: Option<&'a str>,
}

impl<'a> LocaleCandidates<'a> {
    /// Set the caller's own choice, which outranks everything else.
    #[must_use]
    pub const fn explicit(mut self, value: Option<&'a str>) -> Self {
        self.explicit = value;
        self
    }

    /// Set the value read from [`LOCALE_ENV_VAR`].
    #[must_use]
    pub const fn environment(mut self, value: Option<&'a str>) -> Self {
        self.environment = value;
        self
    }

    /// Set the value from `protrans.toml`.
    #[must_use]
    pub const fn configuration(mut self, value: Option<&'a str>) -> Self {
        self.configuration = value;
        self
    }

    /// Pick the first candidate that parses, or `default` when none does.
    #[must_use]
    pub fn select(self, default: &Locale) -> LocaleSelection {
        let ordered = [
            (LocaleSource::Explicit, self.explicit),
            (LocaleSource::Environment, self.environment),
            (LocaleSource::Configuration, self.configuration),
        ];

        let mut rejected = Vec::new();
        let mut chosen = None;
        for (source, raw) in ordered {
            let Some(value) = normalise_locale(raw) else {
                continue;
            };
            match Locale::parse(value) {
                Ok(locale) => {
                    chosen = Some((locale, source));
                    break;
                }
                Err(error) => {
                    warn!(target: SELECTION_TARGET, "ignoring {source} `{value}`: {error}");
                    rejected.push(RejectedCandidate {
                        source,
                        value: value.to_owned(),
                        error,
                    });
                }
            }
        }

        let (locale, source) = chosen.unwrap_or_else(|| (default.clone(), LocaleSource::Default));
        debug!(target: SELECTION_TARGET, "current locale `{locale}` from {source}");
        LocaleSelection {
            locale,
            source,
            rejected,
        }
    }
}

/// Resolve the current locale from the explicit value, then the environment
/// value, then the configuration value, falling back to `default`.
#[must_use]
pub fn resolve_locale(
    explicit: Option<&str>,
    environment: Option<&str>,
    configuration: Option<&str>,
    default: &Locale,
) -> LocaleSelection {
    LocaleCandidates::default()
        .explicit(explicit)
        .environment(environment)
        .configuration(configuration)
        .select(default)
}

/// Read [`LOCALE_ENV_VAR`], ignoring unset and non-Unicode values.
#[must_use]
pub fn locale_from_environment() -> Option<String> {
    std::env::var(LOCALE_ENV_VAR).ok()
}

/// Trim whitespace and discard empty values.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tag(value: &str) -> Locale {
        Locale::parse(value).unwrap_or_else(|error| panic!("{error}"))
    }

    #[rstest]
    #[case::nothing_set(None, None, None, LocaleSource::Default, "pt-BR")]
    #[case::explicit_first(Some("cy"), Some("de"), Some("fr"), LocaleSource::Explicit, "cy")]
    #[case::underscore_env(None, Some("de_at"), Some("fr"), LocaleSource::Environment, "de-AT")]
    #[case::configuration_last(None, Some("\t"), Some(" fr "), LocaleSource::Configuration, "fr")]
    fn picks_the_first_usable_candidate(
        #[case] explicit: Option<&str>,
        #[case] environment: Option<&str>,
        #[case] configuration: Option<&str>,
        #[case] source: LocaleSource,
        #[case] expected: &str,
    ) {
        let selection = resolve_locale(explicit, environment, configuration, &tag("pt-BR"));

        assert_eq!(selection.source, source);
        assert_eq!(selection.locale, tag(expected));
        assert!(selection.rejected.is_empty());
    }

    #[rstest]
    fn records_each_rejected_candidate() {
        let selection = LocaleCandidates::default()
            .explicit(Some(" und "))
            .environment(Some("not a locale"))
            .configuration(Some("nl"))
            .select(&tag("en"));

        assert_eq!(selection.locale, tag("nl"));
        assert_eq!(
            selection.rejected,
            vec![
                RejectedCandidate {
                    source: LocaleSource::Explicit,
                    value: String::from("und"),
                    error: LocaleError::Invalid {
                        tag: String::from("und"),
                    },
                },
                RejectedCandidate {
                    source: LocaleSource::Environment,
                    value: String::from("not a locale"),
                    error: LocaleError::Invalid {
                        tag: String::from("not a locale"),
                    },
                },
            ]
        );
    }

    #[rstest]
    fn candidates_after_the_choice_are_not_inspected() {
        let selection = resolve_locale(Some("sv"), None, Some("???"), &tag("en"));

        assert_eq!(selection.source, LocaleSource::Explicit);
        assert!(selection.rejected.is_empty());
    }

    #[rstest]
    fn all_rejected_keeps_the_default() {
        let selection = resolve_locale(Some("x"), Some("und"), None, &tag("ja"));

        assert!(selection.is_default());
        assert_eq!(selection.into_locale(), tag("ja"));
    }

    #[rstest]
    #[case(LocaleSource::Explicit, "requested locale")]
    #[case(LocaleSource::Environment, "PROTRANS_LOCALE")]
    #[case(LocaleSource::Configuration, "`locale` setting")]
    #[case(LocaleSource::Default, "default locale")]
    fn sources_describe_themselves(#[case] source: LocaleSource, #[case] label: &str) {
        assert_eq!(source.to_string(), label);
    }
}
