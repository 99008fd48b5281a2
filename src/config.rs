//! Workspace-wide configuration loaded from `protrans.toml`.
//!
//! `SharedConfig` captures everything a host needs to build a [`Translator`]
//! without code: where the properties files live, which locales to use, and
//! how strictly placeholders are validated. Every field is optional; an empty
//! or missing file yields the library defaults.
//!
//! ```toml
//! locale = "de-AT"
//! default_locale = "en"
//! missing_placeholder = "throw"
//! unexpected_placeholder = "log"
//! missing_locale = "fallback"
//! missing_translation_level = "warn"
//!
//! [translations]
//! directory = "translations"
//! base_name = "messages"
//! extension = "properties"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use log::Level;
use protrans_common::{
    CachingCatalogProvider, FileSystemSource, Locale, LocaleError, LocaleSelection,
    MissingLocalePolicy, PlaceholderStrategy, TranslationConfig, Translator, UnknownPolicy,
    UnknownStrategy, normalise_locale, resolve_locale,
};
use serde::Deserialize;
use thiserror::Error;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "protrans.toml";

/// Errors raised while loading or applying `protrans.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`SharedConfig`].
    #[error("failed to parse {path}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// The default locale is not a valid locale tag.
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// A placeholder strategy name is not recognised.
    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),

    /// The missing-locale policy name is not recognised.
    #[error(transparent)]
    Policy(#[from] UnknownPolicy),

    /// The missing-translation level is not a log level.
    #[error("unknown log level `{value}` for missing translations")]
    Level {
        /// The rejected value.
        value: String,
    },
}

/// Shared configuration for hosts and the command-line tool.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfig {
    /// Preferred locale when neither the caller nor `PROTRANS_LOCALE` pick
    /// one.
    ///
    /// The resolver trims whitespace and ignores blank values, so
    /// configuration such as `locale = ""` falls back cleanly to the default
    /// locale.
    pub locale: Option<String>,
    /// Locale the base catalog is written in (`en` when omitted).
    pub default_locale: Option<String>,
    /// `ignore`, `log`, or `throw` for placeholders the caller left out.
    pub missing_placeholder: Option<String>,
    /// `ignore`, `log`, or `throw` for placeholders the template lacks.
    pub unexpected_placeholder: Option<String>,
    /// `fallback` or `fail-fast` for locales without any catalog.
    pub missing_locale: Option<String>,
    /// Log level for untranslated keys, e.g. `warn` or `debug`.
    pub missing_translation_level: Option<String>,
    /// Location and naming of the properties files.
    pub translations: TranslationsConfig,
}

impl SharedConfig {
    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid configuration.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load configuration from `path`, or the defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// As [`SharedConfig::load`], except that a missing file is not an error.
    pub fn load_or_default(path: &Utf8Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn parse(text: &str, path: &Utf8Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Returns the configured locale override, if present.
    ///
    /// Whitespace-only values are treated as absent to avoid surprising
    /// behaviour when `protrans.toml` is templated or patched.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }

    /// The configured default locale, `en` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Locale`] when the value is not a locale tag.
    pub fn default_locale(&self) -> Result<Locale, ConfigError> {
        let tag = normalise_locale(self.default_locale.as_deref()).unwrap_or("en");
        Ok(Locale::parse(tag)?)
    }

    /// File-system source described by the `[translations]` table.
    #[must_use]
    pub fn source(&self) -> FileSystemSource {
        FileSystemSource::new(
            self.translations.directory.clone(),
            self.translations.base_name.clone(),
            self.translations.extension.clone(),
        )
    }

    /// Pick the current locale from `explicit`, `environment`, and this
    /// configuration, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Locale`] when the default locale is invalid.
    pub fn select_locale(
        &self,
        explicit: Option<&str>,
        environment: Option<String>,
    ) -> Result<LocaleSelection, ConfigError> {
        let default = self.default_locale()?;
        Ok(resolve_locale(
            explicit,
            environment.as_deref(),
            self.locale(),
            &default,
        ))
    }

    /// Build resolution settings reading from [`SharedConfig::source`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first invalid setting.
    pub fn translation_config(
        &self,
        explicit: Option<&str>,
        environment: Option<String>,
    ) -> Result<TranslationConfig, ConfigError> {
        let selection = self.select_locale(explicit, environment)?;
        let provider = Arc::new(CachingCatalogProvider::new(self.source()));

        let mut config = TranslationConfig::new(provider)
            .with_default_locale(self.default_locale()?)
            .with_current_locale(selection.into_locale())
            .with_missing_locale(parse_or_default::<MissingLocalePolicy>(
                self.missing_locale.as_deref(),
            )?);
        config.missing_placeholder =
            parse_or_default::<PlaceholderStrategy>(self.missing_placeholder.as_deref())?;
        config.unexpected_placeholder =
            parse_or_default::<PlaceholderStrategy>(self.unexpected_placeholder.as_deref())?;
        if let Some(value) = normalise_locale(self.missing_translation_level.as_deref()) {
            config.missing_translation_level =
                value.parse::<Level>().map_err(|_| ConfigError::Level {
                    value: value.to_owned(),
                })?;
        }
        Ok(config)
    }

    /// Build a [`Translator`] for this configuration.
    ///
    /// # Errors
    ///
    /// As [`SharedConfig::translation_config`].
    pub fn translator(
        &self,
        explicit: Option<&str>,
        environment: Option<String>,
    ) -> Result<Translator, ConfigError> {
        Ok(Translator::new(self.translation_config(explicit, environment)?))
    }
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default,
    ConfigError: From<T::Err>,
{
    normalise_locale(value).map_or_else(
        || Ok(T::default()),
        |value| value.parse::<T>().map_err(ConfigError::from),
    )
}

/// Where the properties files live and how they are named.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TranslationsConfig {
    /// Directory holding the properties files.
    pub directory: Utf8PathBuf,
    /// File name shared by every properties file before the locale suffix.
    pub base_name: String,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        let source = FileSystemSource::default();
        Self {
            directory: source.directory().to_path_buf(),
            base_name: source.base_name().to_owned(),
            extension: source.extension().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(source: &str) -> Result<SharedConfig, toml::de::Error> {
        toml::from_str(source)
    }

    #[rstest]
    fn defaults_match_the_library_baseline() {
        let config = SharedConfig::default();

        assert!(config.locale().is_none());
        assert_eq!(config.translations.directory, "translations");
        assert_eq!(config.translations.base_name, "messages");
        assert_eq!(config.translations.extension, "properties");

        let translation = config
            .translation_config(None, None)
            .unwrap_or_else(|error| panic!("defaults should build: {error}"));
        assert_eq!(translation.current_locale.to_string(), "en");
        assert_eq!(translation.missing_placeholder, PlaceholderStrategy::Log);
    }

    #[rstest]
    fn deserialises_overrides_from_toml() {
        let source = concat!(
            "locale = \"de-AT\"\n",
            "missing_placeholder = \"throw\"\n",
            "missing_locale = \"fail-fast\"\n",
            "missing_translation_level = \"debug\"\n",
            "[translations]\n",
            "directory = \"i18n\"\n",
        );

        let config = parse(source).unwrap_or_else(|error| panic!("should parse: {error}"));
        assert_eq!(config.locale(), Some("de-AT"));
        assert_eq!(config.translations.directory, "i18n");
        assert_eq!(config.translations.base_name, "messages");

        let translation = config
            .translation_config(None, None)
            .unwrap_or_else(|error| panic!("should build: {error}"));
        assert_eq!(translation.current_locale.to_string(), "de-AT");
        assert_eq!(translation.missing_placeholder, PlaceholderStrategy::Throw);
        assert_eq!(translation.unexpected_placeholder, PlaceholderStrategy::Log);
        assert_eq!(translation.missing_locale, MissingLocalePolicy::FailFast);
        assert_eq!(translation.missing_translation_level, Level::Debug);
    }

    #[rstest]
    #[case("locale = \"  \"\n")]
    #[case("locale = \"\"\n")]
    fn trims_whitespace_only_locale_entries(#[case] source: &str) {
        let config = parse(source).unwrap_or_else(|error| panic!("should parse: {error}"));
        assert!(config.locale().is_none());
    }

    #[rstest]
    #[case("unexpected = true\n")]
    #[case("[translations]\nsuffix = \"x\"\n")]
    #[case("locale = 42\n")]
    fn rejects_malformed_configuration(#[case] source: &str) {
        assert!(parse(source).is_err(), "`{source}` should be rejected");
    }

    #[rstest]
    #[case("missing_placeholder = \"panic\"\n")]
    #[case("missing_locale = \"maybe\"\n")]
    #[case("missing_translation_level = \"loud\"\n")]
    #[case("default_locale = \"not a locale\"\n")]
    fn rejects_invalid_setting_values(#[case] source: &str) {
        let config = parse(source).unwrap_or_else(|error| panic!("should parse: {error}"));
        assert!(config.translation_config(None, None).is_err());
    }

    #[rstest]
    fn explicit_locale_beats_configuration() {
        let config = parse("locale = \"fr\"\n").unwrap_or_else(|error| panic!("{error}"));
        let translation = config
            .translation_config(Some("de"), Some(String::from("it")))
            .unwrap_or_else(|error| panic!("should build: {error}"));
        assert_eq!(translation.current_locale.to_string(), "de");
    }
}
