//! Conformance fixture runner
//!
//! Loads YAML fixtures and runs them against the glob trie.

use globtrie::{GlobError, GlobTrie, TrieConfig};
use serde::Deserialize;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Raw config; deserialized as [`TrieConfig`] when the fixture runs, so
    /// that malformed configs can be fixtures too.
    pub config: serde_json::Value,
    #[serde(default)]
    pub cases: Vec<TestCase>,
    /// The config must be rejected at load time.
    #[serde(default)]
    pub expect_error: bool,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub candidate: String,
    pub expect: bool,
}

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub candidate: String,
    pub passed: bool,
    pub expected: bool,
    pub actual: bool,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Deserialize, validate and build the fixture's config.
    pub fn load(&self) -> Result<GlobTrie, GlobError> {
        let config: TrieConfig =
            serde_json::from_value(self.config.clone()).map_err(|e| GlobError::InvalidConfig {
                source: e.to_string(),
            })?;
        config.build()
    }

    /// Run all test cases and return results
    ///
    /// # Errors
    ///
    /// Returns the load error if the config does not build.
    pub fn run(&self) -> Result<Vec<CaseResult>, GlobError> {
        let trie = self.load()?;
        Ok(self
            .cases
            .iter()
            .map(|case| {
                let actual = trie.is_match(&case.candidate);
                CaseResult {
                    case_name: case.name.clone(),
                    candidate: case.candidate.clone(),
                    passed: actual == case.expect,
                    expected: case.expect,
                    actual,
                }
            })
            .collect())
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = match self.run() {
            Ok(results) => results,
            Err(e) if self.expect_error => {
                println!("    rejected as expected: {e}");
                return;
            }
            Err(e) => panic!("Fixture '{}' failed to load: {e}", self.name),
        };

        assert!(
            !self.expect_error,
            "Fixture '{}' expected a load error, but the config built",
            self.name
        );

        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' ({:?}) failed: expected {}, got {}",
                self.name, result.case_name, result.candidate, result.expected, result.actual
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DOCS: &str = r#"
name: first
config:
  patterns: ["/a"]
cases:
  - name: hit
    candidate: /a
    expect: true
---
name: second
config:
  case_insensitive: true
  patterns: ["/B"]
cases:
  - name: folded
    candidate: /b
    expect: true
  - name: miss
    candidate: /c
    expect: false
"#;

    #[test]
    fn parses_multiple_documents() {
        let fixtures = Fixture::from_yaml_multi(TWO_DOCS).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].name, "first");
        assert_eq!(fixtures[1].cases.len(), 2);
        assert!(!fixtures[1].expect_error);
    }

    #[test]
    fn run_reports_each_case() {
        let fixtures = Fixture::from_yaml_multi(TWO_DOCS).unwrap();
        let results = fixtures[1].run().unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert!(results[0].actual);
        assert!(!results[1].actual);
    }

    #[test]
    fn failing_case_is_reported_not_hidden() {
        let fixture = Fixture::from_yaml(
            r#"
name: wrong expectation
config: { patterns: ["/a/*/c"] }
cases:
  - { name: needs a slash before c, candidate: /a/c, expect: true }
"#,
        )
        .unwrap();

        let results = fixture.run().unwrap();
        assert!(!results[0].passed);
        assert!(!results[0].actual);
    }

    #[test]
    fn malformed_config_is_a_load_error() {
        let fixture = Fixture::from_yaml(
            r#"
name: bad
config: { patterns: ["/a"], unknown: 1 }
expect_error: true
"#,
        )
        .unwrap();

        assert!(matches!(fixture.load(), Err(GlobError::InvalidConfig { .. })));
        fixture.run_and_assert();
    }

    #[test]
    #[should_panic(expected = "expected a load error")]
    fn expect_error_on_valid_config_panics() {
        let fixture = Fixture::from_yaml(
            r#"
name: actually fine
config: { patterns: ["/a"] }
expect_error: true
"#,
        )
        .unwrap();

        fixture.run_and_assert();
    }
}
