//! globtrie-test: conformance fixtures for the glob trie
//!
//! Fixtures are YAML documents that pair a pattern config with candidates and
//! the expected verdict. They exercise the full load path: YAML →
//! [`TrieConfig`](globtrie::TrieConfig) → [`GlobTrie`](globtrie::GlobTrie) →
//! `is_match`.
//!
//! # Example
//!
//! ```
//! use globtrie_test::fixture::Fixture;
//!
//! let fixture = Fixture::from_yaml(
//!     r#"
//! name: static assets
//! config:
//!   patterns: ["/static/*"]
//! cases:
//!   - { name: file, candidate: /static/app.js, expect: true }
//!   - { name: sibling, candidate: /assets/app.js, expect: false }
//! "#,
//! )
//! .unwrap();
//!
//! fixture.run_and_assert();
//! ```

pub mod fixture;

use std::path::{Path, PathBuf};

/// Directory holding the bundled fixture files.
#[must_use]
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}
