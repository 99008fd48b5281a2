//! Behaviour-driven coverage for key resolution.
//!
//! Scenarios exercise the fallback chain, base-catalog handling, placeholder
//! validation strategies, and the missing-locale policy against in-memory
//! catalogs.

use protrans_common::{
    CachingCatalogProvider, InMemorySource, Locale, MissingLocalePolicy, PlaceholderStrategy,
    Placeholders, TranslationConfig, TranslationError, Translator,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};
use std::sync::Arc;

const BASE: &str = "hello = Hello {name}!\ngreeting = Hello\npartial_translation = Base text\n";
const GERMAN: &str = "hello = Hallo {name}!\ngreeting = Hallo\n";
const AUSTRIAN: &str = "greeting = Servus\n";

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap_or_else(|error| panic!("valid locale `{tag}`: {error}"))
}

#[derive(Debug, Default)]
struct ResolutionWorld {
    current: RefCell<Option<Locale>>,
    strict: Cell<bool>,
    fail_fast: Cell<bool>,
    without_base: Cell<bool>,
    outcome: RefCell<Option<Result<String, TranslationError>>>,
    available: RefCell<Option<Vec<Locale>>>,
}

impl ResolutionWorld {
    fn translator(&self) -> Translator {
        let mut source = InMemorySource::new()
            .with_locale(locale("de"), GERMAN)
            .with_locale(locale("de-AT"), AUSTRIAN);
        if !self.without_base.get() {
            source = source.with_base(BASE);
        }

        let mut config = TranslationConfig::new(Arc::new(CachingCatalogProvider::new(source)));
        if let Some(current) = self.current.borrow().clone() {
            config = config.with_current_locale(current);
        }
        if self.strict.get() {
            config = config.with_placeholder_strategy(PlaceholderStrategy::Throw);
        }
        if self.fail_fast.get() {
            config = config.with_missing_locale(MissingLocalePolicy::FailFast);
        }
        Translator::new(config)
    }

    fn resolve(&self, key: &str, placeholders: Option<&Placeholders>) {
        let outcome = self.translator().resolve(key, placeholders);
        self.outcome.replace(Some(outcome));
    }

    fn with_error<T>(&self, check: impl FnOnce(&TranslationError) -> T) -> T {
        match self.outcome.borrow().as_ref() {
            Some(Err(error)) => check(error),
            other => panic!("expected a resolution error, got {other:?}"),
        }
    }
}

/// Parses `name=value` pairs separated by commas.
fn parse_pairs(pairs: &str) -> Placeholders {
    pairs
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split_once('=')
                .unwrap_or_else(|| panic!("`{pair}` should be written as name=value"))
        })
        .collect()
}

#[fixture]
fn world() -> ResolutionWorld {
    ResolutionWorld::default()
}

#[given("the current locale {tag}")]
fn given_current_locale(world: &ResolutionWorld, tag: String) {
    world.current.replace(Some(locale(&tag)));
}

#[given("strict placeholder validation")]
fn given_strict(world: &ResolutionWorld) {
    world.strict.set(true);
}

#[given("the fail-fast missing-locale policy")]
fn given_fail_fast(world: &ResolutionWorld) {
    world.fail_fast.set(true);
}

#[given("no base catalog")]
fn given_no_base(world: &ResolutionWorld) {
    world.without_base.set(true);
}

#[when("the key {key} is resolved")]
fn when_resolved(world: &ResolutionWorld, key: String) {
    world.resolve(&key, None);
}

#[when("the key {key} is resolved with {pairs}")]
fn when_resolved_with(world: &ResolutionWorld, key: String, pairs: String) {
    let placeholders = parse_pairs(&pairs);
    world.resolve(&key, Some(&placeholders));
}

#[when("the available locales are listed")]
fn when_listed(world: &ResolutionWorld) {
    let available = world
        .translator()
        .available_locales()
        .unwrap_or_else(|error| panic!("locales should be listed: {error}"));
    world.available.replace(Some(available));
}

#[then("the translation is {expected}")]
fn then_translation(world: &ResolutionWorld, expected: String) {
    match world.outcome.borrow().as_ref() {
        Some(Ok(text)) => assert_eq!(text, &expected),
        other => panic!("expected a translation, got {other:?}"),
    }
}

#[then("resolution fails naming the missing placeholder {name}")]
fn then_missing_placeholder(world: &ResolutionWorld, name: String) {
    world.with_error(|error| match error {
        TranslationError::MissingPlaceholder { placeholder, .. } => assert_eq!(placeholder, &name),
        other => panic!("unexpected error: {other}"),
    });
}

#[then("resolution fails naming the unexpected placeholder {name}")]
fn then_unexpected_placeholder(world: &ResolutionWorld, name: String) {
    world.with_error(|error| match error {
        TranslationError::UnexpectedPlaceholder { placeholder, .. } => {
            assert_eq!(placeholder, &name);
        }
        other => panic!("unexpected error: {other}"),
    });
}

#[then("resolution fails because locale {tag} has no catalog")]
fn then_missing_catalog(world: &ResolutionWorld, tag: String) {
    world.with_error(|error| match error {
        TranslationError::MissingCatalog { locale } => assert_eq!(locale, &tag),
        other => panic!("unexpected error: {other}"),
    });
}

#[then("resolution fails because the base catalog is missing")]
fn then_missing_base(world: &ResolutionWorld) {
    world.with_error(|error| {
        assert!(
            matches!(error, TranslationError::MissingBaseCatalog),
            "unexpected error: {error}"
        );
    });
}

#[then("the available locales are {expected}")]
fn then_available(world: &ResolutionWorld, expected: String) {
    let expected: Vec<Locale> = expected.split(',').map(|tag| locale(tag.trim())).collect();
    let available = world
        .available
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("available locales must be listed first"));
    assert_eq!(available, expected);
}

#[scenario(path = "tests/features/resolution.feature", index = 0)]
fn scenario_regional_catalog_wins(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 1)]
fn scenario_region_falls_back_to_language(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 2)]
fn scenario_unknown_locale_uses_base(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 3)]
fn scenario_case_insensitive_keys(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 4)]
fn scenario_unknown_key_verbatim(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 5)]
fn scenario_strict_missing_placeholder(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 6)]
fn scenario_strict_unexpected_placeholder(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 7)]
fn scenario_fail_fast(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 8)]
fn scenario_missing_base_catalog(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/resolution.feature", index = 9)]
fn scenario_available_locales(world: ResolutionWorld) {
    let _ = world;
}
