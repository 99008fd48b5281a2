//! Behaviour-driven coverage for the properties parser and catalog assembly.

use protrans_common::Catalog;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct PropertiesWorld {
    lines: RefCell<Vec<String>>,
    catalog: RefCell<Option<Catalog>>,
}

impl PropertiesWorld {
    fn catalog(&self) -> Catalog {
        self.catalog
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("properties must be parsed first"))
    }
}

#[fixture]
fn world() -> PropertiesWorld {
    PropertiesWorld::default()
}

#[given("the properties line {line}")]
fn given_line(world: &PropertiesWorld, line: String) {
    world.lines.borrow_mut().push(line);
}

#[when("the properties are parsed")]
fn when_parsed(world: &PropertiesWorld) {
    let text = world.lines.borrow().join("\n");
    world.catalog.replace(Some(Catalog::parse(&text, None)));
}

#[then("the value of {key} is {expected}")]
fn then_value(world: &PropertiesWorld, key: String, expected: String) {
    assert_eq!(world.catalog().get(&key), Some(expected.as_str()));
}

#[then("the catalog holds {count} entries")]
fn then_entry_count(world: &PropertiesWorld, count: usize) {
    assert_eq!(world.catalog().len(), count);
}

#[then("the catalog reports {count} duplicate keys")]
fn then_duplicate_count(world: &PropertiesWorld, count: usize) {
    assert_eq!(world.catalog().duplicates().len(), count);
}

#[scenario(path = "tests/features/properties.feature", index = 0)]
fn scenario_continuation(world: PropertiesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/properties.feature", index = 1)]
fn scenario_escaped_trailing_backslash(world: PropertiesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/properties.feature", index = 2)]
fn scenario_first_separator(world: PropertiesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/properties.feature", index = 3)]
fn scenario_comments_skipped(world: PropertiesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/properties.feature", index = 4)]
fn scenario_duplicates(world: PropertiesWorld) {
    let _ = world;
}
