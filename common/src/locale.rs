//! Locale identifiers used to select catalogs.
//!
//! A [`Locale`] wraps a canonicalised [`LanguageIdentifier`], so `DE-at`,
//! `de_AT`, and `de-AT` compare equal and hash identically. That makes the
//! locale safe to use directly as a cache key.

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::error::LocaleError;

/// Language plus optional region identifying one catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// Parse a locale tag such as `en`, `de-AT`, or `pt_BR`.
    ///
    /// ```
    /// use protrans_common::Locale;
    ///
    /// let locale = Locale::parse("de_at").unwrap();
    /// assert_eq!(locale.to_string(), "de-AT");
    /// assert_eq!(locale, Locale::parse("DE-AT").unwrap());
    /// assert!(Locale::parse("").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Invalid`] when the tag is blank, malformed, or
    /// names the undetermined language `und`.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let trimmed = tag.trim();
        let invalid = || LocaleError::Invalid {
            tag: tag.to_owned(),
        };
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let identifier = LanguageIdentifier::from_str(trimmed).map_err(|_| invalid())?;
        if identifier.language.is_empty() {
            return Err(invalid());
        }
        Ok(Self(identifier))
    }

    /// Build a locale from a language and optional region code.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Invalid`] when either part is not a valid
    /// subtag.
    pub fn from_parts(language: &str, region: Option<&str>) -> Result<Self, LocaleError> {
        match region {
            Some(region) => Self::parse(&format!("{language}-{region}")),
            None => Self::parse(language),
        }
    }

    /// Lower-case language subtag, e.g. `de`.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// Upper-case region subtag, e.g. `AT`, when present.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.0.region.as_ref().map(|region| region.as_str())
    }

    /// Whether the locale carries no region.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.0.region.is_none()
    }

    /// The same locale with its region removed.
    #[must_use]
    pub fn without_region(&self) -> Self {
        let mut identifier = self.0.clone();
        identifier.region = None;
        Self(identifier)
    }

    /// Borrow the underlying language identifier.
    #[must_use]
    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.0
    }

    /// File-name suffix for this locale: `_de` or `_de_AT`.
    ///
    /// ```
    /// use protrans_common::Locale;
    ///
    /// let locale = Locale::parse("de-AT").unwrap();
    /// assert_eq!(locale.file_suffix().unwrap(), "_de_AT");
    /// assert!(Locale::parse("fil").unwrap().file_suffix().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::MalformedSuffix`] when the language or region
    /// is not exactly two letters or the locale carries a script, since the
    /// file naming convention cannot express either.
    pub fn file_suffix(&self) -> Result<String, LocaleError> {
        let malformed = |reason: String| LocaleError::MalformedSuffix {
            file_name: self.to_string(),
            reason,
        };

        if self.0.script.is_some() {
            return Err(malformed(String::from("script subtags have no file suffix")));
        }
        let language = self.language();
        if !is_two_letter_code(language) {
            return Err(malformed(format!(
                "language `{language}` is not a two-letter code"
            )));
        }

        match self.region() {
            Some(region) if is_two_letter_code(region) => Ok(format!("_{language}_{region}")),
            Some(region) => Err(malformed(format!(
                "region `{region}` is not a two-letter code"
            ))),
            None => Ok(format!("_{language}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(identifier: LanguageIdentifier) -> Self {
        Self(identifier)
    }
}

/// Whether `code` consists of exactly two ASCII letters.
pub(crate) fn is_two_letter_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|character| character.is_ascii_alphabetic())
}
