//! ProTrans: `.properties` translations with locale fallback and placeholder
//! validation.
//!
//! This crate adds workspace configuration (`protrans.toml`) on top of the
//! core in [`protrans_common`], which it re-exports in full.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use protrans::{CONFIG_FILE_NAME, load_translator};
//!
//! let translator = load_translator(Utf8Path::new(CONFIG_FILE_NAME), None)?;
//! println!("{}", translator.get("hello")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;

use camino::Utf8Path;

pub use config::{CONFIG_FILE_NAME, ConfigError, SharedConfig, TranslationsConfig};
pub use protrans_common::*;

/// Build a [`Translator`] from the configuration file at `path`.
///
/// A missing file yields the defaults. The current locale is taken from
/// `explicit`, then `PROTRANS_LOCALE`, then the file's `locale` setting.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the file is unreadable or holds invalid
/// settings.
pub fn load_translator(path: &Utf8Path, explicit: Option<&str>) -> Result<Translator, ConfigError> {
    SharedConfig::load_or_default(path)?.translator(explicit, locale_from_environment())
}
