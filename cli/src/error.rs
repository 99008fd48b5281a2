//! Error types for the `protrans` command-line tool.

use camino::Utf8PathBuf;
use protrans::ConfigError;
use protrans_common::{SourceError, TranslationError};
use thiserror::Error;

/// Errors that stop a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be loaded or applied.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Resolution failed under the active policies.
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// A properties file or directory could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// No catalog on the fallback chain defines the key.
    #[error("no translation for `{key}` in locale `{locale}`")]
    MissingKey {
        /// The requested key.
        key: String,
        /// The current locale at the time of the lookup.
        locale: String,
    },

    /// A file named on the command line could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A path returned by the directory scan is not valid UTF-8.
    #[error("path {path} is not valid UTF-8")]
    NonUtf8Path {
        /// Lossy rendering of the rejected path.
        path: String,
    },

    /// `check` found problems in at least one file.
    #[error("{problems} problem(s) found in properties files")]
    CheckFailed {
        /// Number of problems reported.
        problems: usize,
    },

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// JSON serialisation of command output failed.
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CliError>;
