//! End-to-end runs of the `protrans` commands against temporary catalogs.

use std::fs;

use camino::Utf8PathBuf;
use clap::Parser;
use protrans_cli::cli::Cli;
use protrans_cli::commands::run;
use protrans_cli::error::CliError;
use protrans_common::TranslationError;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct Workspace {
    _directory: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn write(&self, name: &str, contents: &str) {
        fs::write(self.root.join(name), contents)
            .unwrap_or_else(|error| panic!("write {name}: {error}"));
    }

    fn run(&self, arguments: &[&str]) -> (Result<(), CliError>, String) {
        let mut full = vec!["protrans", "--dir", self.root.as_str()];
        full.extend_from_slice(arguments);
        let cli = Cli::try_parse_from(full).unwrap_or_else(|error| panic!("{error}"));

        let mut stdout = Vec::new();
        let result = run(&cli, &mut stdout);
        let output = String::from_utf8(stdout).unwrap_or_else(|error| panic!("{error}"));
        (result, output)
    }
}

#[fixture]
fn workspace() -> Workspace {
    let directory = tempfile::tempdir().unwrap_or_else(|error| panic!("temp dir: {error}"));
    let root = Utf8PathBuf::from_path_buf(directory.path().to_path_buf())
        .unwrap_or_else(|path| panic!("non UTF-8 temp dir {}", path.display()));
    let workspace = Workspace {
        _directory: directory,
        root,
    };
    workspace.write("messages.properties", "greeting = Hello {name}!\nbye = Bye\n");
    workspace.write("messages_de.properties", "greeting = Hallo {name}!\n");
    workspace
}

#[rstest]
#[case::translated(&["get", "greeting", "-l", "de", "-p", "name=Alice"][..], "Hallo Alice!\n")]
#[case::falls_back_to_base(&["get", "BYE", "-l", "de"][..], "Bye\n")]
#[case::relaxed_placeholders(&["get", "greeting", "-l", "en"][..], "Hello {name}!\n")]
fn get_prints_the_translation(
    workspace: Workspace,
    #[case] arguments: &[&str],
    #[case] expected: &str,
) {
    let (result, output) = workspace.run(arguments);
    assert!(result.is_ok(), "expected success, got {result:?}");
    assert_eq!(output, expected);
}

#[rstest]
fn strict_get_rejects_missing_placeholders(workspace: Workspace) {
    let (result, output) = workspace.run(&["get", "greeting", "-l", "de", "--strict"]);
    assert!(matches!(
        result,
        Err(CliError::Translation(TranslationError::MissingPlaceholder { .. }))
    ));
    assert!(output.is_empty());
}

#[rstest]
fn unknown_keys_are_errors(workspace: Workspace) {
    let (result, _) = workspace.run(&["get", "absent", "-l", "de"]);
    assert!(matches!(result, Err(CliError::MissingKey { ref key, .. }) if key == "absent"));
}

#[rstest]
fn locales_lists_the_default_first(workspace: Workspace) {
    let (result, output) = workspace.run(&["locales"]);
    assert!(result.is_ok(), "expected success, got {result:?}");
    assert_eq!(output, "en (default)\nde\n");

    let (result, output) = workspace.run(&["locales", "--json"]);
    assert!(result.is_ok(), "expected success, got {result:?}");
    let json: serde_json::Value =
        serde_json::from_str(&output).unwrap_or_else(|error| panic!("invalid JSON: {error}"));
    assert_eq!(json["locales"], serde_json::json!(["en", "de"]));
}

#[rstest]
fn check_passes_clean_directories(workspace: Workspace) {
    let (result, output) = workspace.run(&["check"]);
    assert!(result.is_ok(), "expected success, got {result:?}");
    assert!(output.ends_with("2 file(s) checked, no problems\n"), "{output}");
}

#[rstest]
fn check_reports_problems(workspace: Workspace) {
    workspace.write("messages_deu.properties", "a = 1\na = 2\n");

    let (result, output) = workspace.run(&["check"]);
    assert!(matches!(result, Err(CliError::CheckFailed { problems: 2 })));
    assert!(output.contains("duplicate key `a` supersedes line 1"), "{output}");
    assert!(output.contains("two-letter"), "{output}");
}
