//! Command-line argument definitions for the `protrans` tool.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Resolve and inspect `.properties` translations.
#[derive(Parser, Debug)]
#[command(name = "protrans")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Resolve a key for the German locale:\n",
    "    $ protrans get greeting -l de -p name=Alice\n\n",
    "  List locales with a catalog on disk:\n",
    "    $ protrans locales --json\n\n",
    "  Check every properties file in the translations directory:\n",
    "    $ protrans check\n\n",
    "The current locale defaults to PROTRANS_LOCALE, then the `locale` setting ",
    "in protrans.toml.",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file [default: protrans.toml when present].
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Directory holding the properties files, overriding the configuration.
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<Utf8PathBuf>,

    /// Base file name of the properties files, overriding the configuration.
    #[arg(long, global = true, value_name = "NAME")]
    pub base_name: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a key and print the translation.
    Get(GetArgs),

    /// List locales that have a catalog.
    Locales(LocalesArgs),

    /// Parse properties files and report problems.
    Check(CheckArgs),
}

/// Arguments for the `get` command.
#[derive(Args, Debug, Clone, Default)]
pub struct GetArgs {
    /// Translation key, matched case-insensitively.
    pub key: String,

    /// Locale to resolve for, e.g. `de-AT`.
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Placeholder value as `name=value` (can be repeated).
    #[arg(short, long = "placeholder", value_name = "NAME=VALUE", value_parser = parse_placeholder)]
    pub placeholders: Vec<(String, String)>,

    /// Fail on missing or unexpected placeholders.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `locales` command.
#[derive(Args, Debug, Clone, Default)]
pub struct LocalesArgs {
    /// Output in JSON format for scripting.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check [default: every properties file in the translations
    /// directory].
    #[arg(value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,
}

/// Split a `name=value` placeholder argument at the first `=`.
///
/// # Examples
///
/// ```
/// use protrans_cli::cli::parse_placeholder;
///
/// assert_eq!(
///     parse_placeholder("query=a=b"),
///     Ok((String::from("query"), String::from("a=b")))
/// );
/// assert!(parse_placeholder("name").is_err());
/// ```
///
/// # Errors
///
/// Returns a message when the argument has no `=` or an empty name.
pub fn parse_placeholder(argument: &str) -> Result<(String, String), String> {
    match argument.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.to_owned()))
        }
        _ => Err(format!("expected `name=value`, got `{argument}`")),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
