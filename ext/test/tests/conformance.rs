//! Conformance tests that run the bundled YAML fixtures
//!
//! Run with: cargo test -p globtrie-test --test conformance

use globtrie_test::fixture::Fixture;
use globtrie_test::fixtures_dir;
use std::fs;
use std::path::Path;

/// Load and run every fixture in one file
fn run_fixture_file(path: &Path) {
    println!("Running fixture: {}", path.display());

    let yaml = fs::read_to_string(path).expect("read yaml");

    // Parse potentially multiple fixtures (separated by ---)
    let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.display(), e);
    });
    assert!(!fixtures.is_empty(), "{} holds no fixtures", path.display());

    for fixture in fixtures {
        println!("  Running: {}", fixture.name);
        fixture.run_and_assert();
    }
}

#[test]
fn test_literals() {
    run_fixture_file(&fixtures_dir().join("01_literals.yaml"));
}

#[test]
fn test_wildcards() {
    run_fixture_file(&fixtures_dir().join("02_wildcards.yaml"));
}

#[test]
fn test_case_folding() {
    run_fixture_file(&fixtures_dir().join("03_case.yaml"));
}

#[test]
fn every_fixture_file_is_covered() {
    let mut names: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".yaml") || name.ends_with(".yml"))
        .collect();
    names.sort();

    assert_eq!(
        names,
        ["01_literals.yaml", "02_wildcards.yaml", "03_case.yaml"]
    );
}
