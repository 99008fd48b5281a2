//! Command execution.
//!
//! Every command writes its results to an injected writer so the binary and
//! the tests share one code path.

use std::io::Write;

use camino::Utf8Path;
use log::debug;
use protrans::{CONFIG_FILE_NAME, SharedConfig};
use protrans_common::{
    PlaceholderStrategy, Placeholders, Translator, locale_from_environment,
};

use crate::check::{check_file, discover};
use crate::cli::{CheckArgs, Cli, Command, GetArgs, LocalesArgs};
use crate::error::{CliError, Result};
use crate::output::{LocalesJson, format_locales_human, format_report};

const CLI_TARGET: &str = "protrans::cli";

/// Run the parsed command, writing results to `stdout`.
///
/// # Errors
///
/// Returns a [`CliError`] when configuration, resolution, or output fails,
/// and [`CliError::CheckFailed`] when `check` finds problems.
pub fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let config = load_config(cli)?;
    match &cli.command {
        Command::Get(args) => get(&config, args, stdout),
        Command::Locales(args) => locales(&config, args, stdout),
        Command::Check(args) => check(&config, args, stdout),
    }
}

/// Load the configuration named by `--config`, or `protrans.toml` when it
/// exists, then apply the `--dir` and `--base-name` overrides.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the file is unreadable or invalid. An
/// explicitly named file must exist.
pub fn load_config(cli: &Cli) -> Result<SharedConfig> {
    let mut config = match &cli.config {
        Some(path) => SharedConfig::load(path)?,
        None => SharedConfig::load_or_default(Utf8Path::new(CONFIG_FILE_NAME))?,
    };
    if let Some(directory) = &cli.dir {
        config.translations.directory.clone_from(directory);
    }
    if let Some(base_name) = &cli.base_name {
        config.translations.base_name.clone_from(base_name);
    }
    debug!(
        target: CLI_TARGET,
        "reading translations from {}/{}.{}",
        config.translations.directory,
        config.translations.base_name,
        config.translations.extension,
    );
    Ok(config)
}

fn get(config: &SharedConfig, args: &GetArgs, stdout: &mut dyn Write) -> Result<()> {
    let mut settings = config.translation_config(args.locale.as_deref(), locale_from_environment())?;
    if args.strict {
        settings = settings.with_placeholder_strategy(PlaceholderStrategy::Throw);
    }
    let translator = Translator::new(settings);

    let placeholders: Placeholders = args.placeholders.iter().cloned().collect();
    let supplied = (!placeholders.is_empty()).then_some(&placeholders);
    let text = translator
        .try_resolve(&args.key, supplied)?
        .ok_or_else(|| CliError::MissingKey {
            key: args.key.clone(),
            locale: translator.current_locale().to_string(),
        })?;
    writeln!(stdout, "{text}")?;
    Ok(())
}

fn locales(config: &SharedConfig, args: &LocalesArgs, stdout: &mut dyn Write) -> Result<()> {
    let translator = config.translator(None, None)?;
    let available = translator.available_locales()?;
    let default = config.default_locale()?;

    if args.json {
        serde_json::to_writer_pretty(&mut *stdout, &LocalesJson::new(&available, &default))?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", format_locales_human(&available, &default))?;
    }
    Ok(())
}

fn check(config: &SharedConfig, args: &CheckArgs, stdout: &mut dyn Write) -> Result<()> {
    let source = config.source();
    let files = if args.files.is_empty() {
        discover(&source)?
    } else {
        args.files.clone()
    };

    let mut problems = 0;
    for path in &files {
        let report = check_file(path, &source)?;
        problems += report.problems.len();
        write!(stdout, "{}", format_report(&report))?;
    }

    if problems == 0 {
        writeln!(stdout, "{} file(s) checked, no problems", files.len())?;
        Ok(())
    } else {
        Err(CliError::CheckFailed { problems })
    }
}
