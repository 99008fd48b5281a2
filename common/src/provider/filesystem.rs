//! Properties files on disk.
//!
//! Sources live side by side in one directory and differ only in their
//! locale suffix: `messages.properties` is the base source,
//! `messages_de.properties` and `messages_de_AT.properties` hold German and
//! Austrian German.

use std::fs;
use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

use super::{PROVIDER_TARGET, SourceLoader};
use crate::error::{LocaleError, SourceError};
use crate::locale::{Locale, is_two_letter_code};

/// Default location of the base translations file.
pub const DEFAULT_BASE_PATH: &str = "translations/messages.properties";

/// Loads `{directory}/{base_name}{suffix}.{extension}` files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSystemSource {
    directory: Utf8PathBuf,
    base_name: String,
    extension: String,
}

impl FileSystemSource {
    /// Create a source for files named `{base_name}[_ll[_RR]].{extension}`
    /// inside `directory`.
    #[must_use]
    pub fn new(
        directory: impl Into<Utf8PathBuf>,
        base_name: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            base_name: base_name.into(),
            extension: extension.into(),
        }
    }

    /// Derive directory, base name, and extension from the path of the base
    /// file, e.g. `translations/messages.properties`.
    ///
    /// ```
    /// use protrans_common::FileSystemSource;
    ///
    /// let source = FileSystemSource::from_base_path("translations/messages.properties");
    /// assert_eq!(source.directory().as_str(), "translations");
    /// assert_eq!(source.base_name(), "messages");
    /// assert_eq!(source.extension(), "properties");
    /// ```
    #[must_use]
    pub fn from_base_path(path: impl AsRef<Utf8Path>) -> Self {
        let path = path.as_ref();
        Self::new(
            path.parent().map(Utf8Path::to_path_buf).unwrap_or_default(),
            path.file_stem().unwrap_or_default(),
            path.extension().unwrap_or_default(),
        )
    }

    /// Directory holding the translation files.
    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// File name shared by every source before the locale suffix.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Extension without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Glob for files named `{base_name}{wildcard}.{extension}` in the
    /// directory. Everything except `wildcard` matches literally.
    ///
    /// ```
    /// use protrans_common::FileSystemSource;
    ///
    /// let source = FileSystemSource::new("", "messages", "properties");
    /// assert_eq!(source.file_pattern("_*").as_str(), "messages_*.properties");
    /// ```
    #[must_use]
    pub fn file_pattern(&self, wildcard: &str) -> Utf8PathBuf {
        let directory = glob::Pattern::escape(self.directory.as_str());
        Utf8Path::new(&directory).join(format!(
            "{}{wildcard}.{}",
            glob::Pattern::escape(&self.base_name),
            glob::Pattern::escape(&self.extension),
        ))
    }

    /// Path of the source for `locale`; `None` addresses the base file.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::MalformedSuffix`] when `locale` has no
    /// two-letter file suffix.
    pub fn path_for(&self, locale: Option<&Locale>) -> Result<Utf8PathBuf, LocaleError> {
        let suffix = match locale {
            Some(locale) => locale.file_suffix()?,
            None => String::new(),
        };
        Ok(self
            .directory
            .join(format!("{}{suffix}.{}", self.base_name, self.extension)))
    }

    fn discover(&self) -> Result<Vec<Locale>, SourceError> {
        let pattern = self.file_pattern("_*");

        let mut locales = Vec::new();
        for path in glob::glob(pattern.as_str())? {
            let path = match path {
                Ok(path) => path,
                Err(error) => {
                    debug!(target: PROVIDER_TARGET, "skipping unreadable entry: {error}");
                    continue;
                }
            };
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            match locale_from_file_name(file_name, &self.base_name, &self.extension) {
                Ok(Some(locale)) if !locales.contains(&locale) => locales.push(locale),
                Ok(_) => {}
                Err(error) => debug!(target: PROVIDER_TARGET, "skipping `{file_name}`: {error}"),
            }
        }
        Ok(locales)
    }
}

impl Default for FileSystemSource {
    fn default() -> Self {
        Self::from_base_path(DEFAULT_BASE_PATH)
    }
}

impl SourceLoader for FileSystemSource {
    fn load_source(&self, locale: Option<&Locale>) -> Result<Option<String>, SourceError> {
        let path = self.path_for(locale)?;
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(target: PROVIDER_TARGET, "loaded translations from {path}");
                Ok(Some(text))
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SourceError::Read { path, source }),
        }
    }

    fn known_locales(&self) -> Result<Vec<Locale>, SourceError> {
        self.discover()
    }
}

/// Recover the locale encoded in a translation file name.
///
/// Returns `Ok(None)` for the base file (no suffix).
///
/// ```
/// use protrans_common::{Locale, locale_from_file_name};
///
/// let parsed = locale_from_file_name("messages_de_AT.properties", "messages", "properties");
/// assert_eq!(parsed, Ok(Some(Locale::parse("de-AT").unwrap())));
/// assert_eq!(locale_from_file_name("messages.properties", "messages", "properties"), Ok(None));
/// assert!(locale_from_file_name("messages_deu.properties", "messages", "properties").is_err());
/// ```
///
/// # Errors
///
/// Returns [`LocaleError::MalformedSuffix`] when the name does not follow
/// `{base_name}[_ll[_RR]].{extension}` with two-letter codes.
pub fn locale_from_file_name(
    file_name: &str,
    base_name: &str,
    extension: &str,
) -> Result<Option<Locale>, LocaleError> {
    let malformed = |reason: String| LocaleError::MalformedSuffix {
        file_name: file_name.to_owned(),
        reason,
    };

    let stem = file_name
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .ok_or_else(|| malformed(format!("expected the `.{extension}` extension")))?;
    let suffix = stem
        .strip_prefix(base_name)
        .ok_or_else(|| malformed(format!("expected the `{base_name}` base name")))?;
    if suffix.is_empty() {
        return Ok(None);
    }

    let codes = suffix
        .strip_prefix('_')
        .ok_or_else(|| malformed(String::from("the locale suffix must start with `_`")))?;
    let (language, region) = match codes.split_once('_') {
        Some((language, region)) => (language, Some(region)),
        None => (codes, None),
    };

    if !is_two_letter_code(language) {
        return Err(malformed(format!(
            "language `{language}` is not a two-letter code"
        )));
    }
    if let Some(region) = region.filter(|region| !is_two_letter_code(region)) {
        return Err(malformed(format!(
            "region `{region}` is not a two-letter code"
        )));
    }

    Locale::from_parts(language, region)
        .map(Some)
        .map_err(|error| malformed(error.to_string()))
}
