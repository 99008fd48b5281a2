//! Rendering of command results for humans and scripts.

use protrans_common::Locale;
use serde::Serialize;

use crate::check::{FileReport, Problem};

/// Format available locales one per line, marking the default.
///
/// # Examples
///
/// ```
/// use protrans_cli::output::format_locales_human;
/// use protrans_common::Locale;
///
/// let locales = [Locale::parse("en").unwrap(), Locale::parse("de").unwrap()];
/// assert_eq!(format_locales_human(&locales, &locales[0]), "en (default)\nde\n");
/// ```
#[must_use]
pub fn format_locales_human(locales: &[Locale], default: &Locale) -> String {
    if locales.is_empty() {
        return String::from("No translations found.\n");
    }

    let mut output = String::new();
    for locale in locales {
        let marker = if locale == default { " (default)" } else { "" };
        output.push_str(&format!("{locale}{marker}\n"));
    }
    output
}

/// JSON-serialisable list of available locales.
#[derive(Debug, Serialize)]
pub struct LocalesJson {
    /// Tag of the default locale.
    pub default: String,
    /// Tags of every available locale, default first.
    pub locales: Vec<String>,
}

impl LocalesJson {
    /// Build the JSON view of `locales`.
    #[must_use]
    pub fn new(locales: &[Locale], default: &Locale) -> Self {
        Self {
            default: default.to_string(),
            locales: locales.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Format one `check` report as indented human-readable lines.
#[must_use]
pub fn format_report(report: &FileReport) -> String {
    let locale = report
        .locale
        .as_ref()
        .map_or_else(|| String::from("base"), ToString::to_string);
    let mut output = format!("{} ({locale}): {} entries", report.path, report.entries);
    if report.is_clean() {
        output.push_str(", ok\n");
        return output;
    }

    output.push('\n');
    for problem in &report.problems {
        let line = match problem {
            Problem::Duplicate(duplicate) => format!(
                "  line {}: duplicate key `{}` supersedes line {}\n",
                duplicate.line, duplicate.key, duplicate.first_line
            ),
            Problem::MalformedName { reason } => format!("  {reason}\n"),
        };
        output.push_str(&line);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use protrans_common::DuplicateKey;
    use rstest::rstest;

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap_or_else(|error| panic!("valid locale: {error}"))
    }

    #[rstest]
    fn empty_locale_lists_say_so() {
        assert_eq!(
            format_locales_human(&[], &locale("en")),
            "No translations found.\n"
        );
    }

    #[rstest]
    fn json_lists_tags_in_order() {
        let json = serde_json::to_string(&LocalesJson::new(
            &[locale("en"), locale("de-AT")],
            &locale("en"),
        ))
        .unwrap_or_else(|error| panic!("serialise: {error}"));
        assert_eq!(json, r#"{"default":"en","locales":["en","de-AT"]}"#);
    }

    #[rstest]
    fn reports_list_each_problem() {
        let report = FileReport {
            path: Utf8PathBuf::from("translations/messages_de.properties"),
            locale: Some(locale("de")),
            entries: 3,
            problems: vec![Problem::Duplicate(DuplicateKey {
                key: String::from("Title"),
                first_line: 2,
                line: 7,
            })],
        };

        assert_eq!(
            format_report(&report),
            concat!(
                "translations/messages_de.properties (de): 3 entries\n",
                "  line 7: duplicate key `Title` supersedes line 2\n",
            )
        );
    }

    #[rstest]
    fn clean_reports_fit_on_one_line() {
        let report = FileReport {
            path: Utf8PathBuf::from("messages.properties"),
            locale: None,
            entries: 1,
            problems: Vec::new(),
        };
        assert_eq!(
            format_report(&report),
            "messages.properties (base): 1 entries, ok\n"
        );
    }
}
