//! Validation of properties files for the `check` command.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use protrans_common::{Catalog, DuplicateKey, FileSystemSource, Locale, locale_from_file_name};

use crate::error::{CliError, Result};

/// Something wrong with a single properties file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    /// A key was defined more than once.
    Duplicate(DuplicateKey),
    /// The file name does not encode a locale the loader would accept.
    MalformedName {
        /// Why the name was rejected.
        reason: String,
    },
}

/// Outcome of checking one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// The checked file.
    pub path: Utf8PathBuf,
    /// Locale encoded in the file name; `None` for the base file or a
    /// malformed name.
    pub locale: Option<Locale>,
    /// Number of distinct keys.
    pub entries: usize,
    /// Problems found, in line order.
    pub problems: Vec<Problem>,
}

impl FileReport {
    /// Whether the file passed every check.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Every file in the source directory that shares its base name and
/// extension, sorted by path.
///
/// # Errors
///
/// Returns an error when the directory cannot be scanned.
pub fn discover(source: &FileSystemSource) -> Result<Vec<Utf8PathBuf>> {
    let pattern = source.file_pattern("*");
    let entries = glob::glob(pattern.as_str()).map_err(protrans_common::SourceError::from)?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|error| CliError::Read {
            path: Utf8PathBuf::from(error.path().to_string_lossy().into_owned()),
            source: error.into_error(),
        })?;
        let path = Utf8PathBuf::from_path_buf(path).map_err(|path| CliError::NonUtf8Path {
            path: path.display().to_string(),
        })?;
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

/// Parse `path` and collect its problems.
///
/// # Errors
///
/// Returns [`CliError::Read`] when the file cannot be read.
pub fn check_file(path: &Utf8Path, source: &FileSystemSource) -> Result<FileReport> {
    let text = fs::read_to_string(path).map_err(|error| CliError::Read {
        path: path.to_path_buf(),
        source: error,
    })?;

    let mut problems = Vec::new();
    let file_name = path.file_name().unwrap_or(path.as_str());
    let locale = match locale_from_file_name(file_name, source.base_name(), source.extension()) {
        Ok(locale) => locale,
        Err(error) => {
            problems.push(Problem::MalformedName {
                reason: error.to_string(),
            });
            None
        }
    };

    let catalog = Catalog::parse(&text, locale.clone());
    problems.extend(catalog.duplicates().iter().cloned().map(Problem::Duplicate));

    Ok(FileReport {
        path: path.to_path_buf(),
        locale,
        entries: catalog.len(),
        problems,
    })
}
