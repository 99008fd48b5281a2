//! Named placeholder values and `{name}` substitution.
//!
//! Substitution is literal: every `{name}` occurrence of a supplied name is
//! replaced with its value. Two independent [`PlaceholderStrategy`] settings
//! decide what happens when the caller supplies a name the template does not
//! use, or leaves a `{token}` in the template unsatisfied.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::error::TranslationError;

const RESOLVE_TARGET: &str = "protrans::resolve";

/// Reaction to a placeholder mismatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaceholderStrategy {
    /// Carry on without a diagnostic.
    Ignore,
    /// Emit a warning and carry on.
    #[default]
    Log,
    /// Abort resolution with an error naming the key and placeholder.
    Throw,
}

impl PlaceholderStrategy {
    /// Lower-case name used in configuration files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Log => "log",
            Self::Throw => "throw",
        }
    }
}

impl fmt::Display for PlaceholderStrategy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Raised when a strategy name is not `ignore`, `log`, or `throw`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown placeholder strategy `{0}` (expected ignore, log or throw)")]
pub struct UnknownStrategy(pub String);

impl FromStr for PlaceholderStrategy {
    type Err = UnknownStrategy;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "log" => Ok(Self::Log),
            "throw" => Ok(Self::Throw),
            _ => Err(UnknownStrategy(input.to_owned())),
        }
    }
}

/// Placeholder values keyed by name.
///
/// Names are kept sorted so diagnostics come out in a stable order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: BTreeMap<String, String>,
}

impl Placeholders {
    /// Create an empty placeholder set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build placeholders from a flattened `[name, value, name, value, ...]`
    /// sequence.
    ///
    /// An odd-length sequence logs a warning naming `key` and drops its final
    /// element.
    ///
    /// ```
    /// use protrans_common::Placeholders;
    ///
    /// let placeholders = Placeholders::from_sequence("greeting", &["name", "Alice", "stray"]);
    /// assert_eq!(placeholders.get("name"), Some("Alice"));
    /// assert_eq!(placeholders.len(), 1);
    /// ```
    #[must_use]
    pub fn from_sequence<S: AsRef<str>>(key: &str, sequence: &[S]) -> Self {
        if sequence.len() % 2 == 1 {
            warn!(
                target: RESOLVE_TARGET,
                "placeholders for `{key}` have an odd number of items ({}); the last item is ignored",
                sequence.len()
            );
        }

        sequence
            .chunks_exact(2)
            .filter_map(|pair| match pair {
                [name, value] => Some((name.as_ref(), value.as_ref())),
                _ => None,
            })
            .collect()
    }

    /// Set `name` to `value`, replacing any earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set `name` to `value`, storing an absent value as the empty string.
    pub fn insert_optional(
        &mut self,
        name: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> &mut Self {
        let value = value.map(Into::into).unwrap_or_default();
        self.insert(name, value)
    }

    /// Value supplied for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of supplied names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no placeholder was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Placeholders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Placeholders {
    fn from(values: HashMap<String, String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Placeholders {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

/// Strategies applied during [`substitute`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaceholderPolicy {
    /// Reaction to a `{token}` left without a value.
    pub missing: PlaceholderStrategy,
    /// Reaction to a supplied name the template never mentions.
    pub unexpected: PlaceholderStrategy,
}

/// Substitute `placeholders` into `template`, the translation of `key`.
///
/// Supplied names that never appear in `template` are reported under
/// `policy.unexpected`. Any `{identifier}` token still present afterwards is
/// reported once under `policy.missing` and left in place.
///
/// ```
/// use protrans_common::{PlaceholderPolicy, Placeholders, substitute};
///
/// let placeholders: Placeholders = [("name", "Alice")].into_iter().collect();
/// let text = substitute("greeting", "Hello {name}!", Some(&placeholders), PlaceholderPolicy::default());
/// assert_eq!(text.unwrap(), "Hello Alice!");
/// ```
///
/// # Errors
///
/// Returns [`TranslationError::UnexpectedPlaceholder`] or
/// [`TranslationError::MissingPlaceholder`] when the corresponding strategy is
/// [`PlaceholderStrategy::Throw`].
pub fn substitute(
    key: &str,
    template: &str,
    placeholders: Option<&Placeholders>,
    policy: PlaceholderPolicy,
) -> Result<String, TranslationError> {
    let mut text = template.to_owned();

    for (name, value) in placeholders.into_iter().flat_map(|values| values.iter()) {
        let token = format!("{{{name}}}");
        if !template.contains(&token) {
            report(policy.unexpected, || TranslationError::UnexpectedPlaceholder {
                key: key.to_owned(),
                placeholder: name.to_owned(),
            })?;
            continue;
        }
        text = text.replace(&token, value);
    }

    for name in remaining_tokens(&text) {
        report(policy.missing, || TranslationError::MissingPlaceholder {
            key: key.to_owned(),
            placeholder: name.to_owned(),
        })?;
    }

    Ok(text)
}

fn report(
    strategy: PlaceholderStrategy,
    error: impl FnOnce() -> TranslationError,
) -> Result<(), TranslationError> {
    match strategy {
        PlaceholderStrategy::Ignore => Ok(()),
        PlaceholderStrategy::Log => {
            warn!(target: RESOLVE_TARGET, "{}", error());
            Ok(())
        }
        PlaceholderStrategy::Throw => Err(error()),
    }
}

/// Distinct `{identifier}` tokens in `text`, in order of first appearance.
///
/// Identifiers are non-empty runs of alphanumerics, `_`, `-`, and `.`.
fn remaining_tokens(text: &str) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let after = rest.get(open + 1..).unwrap_or_default();
        let length = after
            .find(|character: char| !is_identifier_char(character))
            .unwrap_or(after.len());
        let (name, tail) = after.split_at(length);
        if !name.is_empty() && tail.starts_with('}') && seen.insert(name) {
            tokens.push(name);
        }
        rest = after;
    }

    tokens
}

fn is_identifier_char(character: char) -> bool {
    character.is_alphanumeric() || matches!(character, '_' | '-' | '.')
}
