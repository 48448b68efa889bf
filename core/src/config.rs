//! `TrieConfig` - declarative pattern set
//!
//! A config is what a user writes down: the case mode plus a list of
//! patterns. It is validated and compiled into a [`GlobTrie`] with
//! [`build()`](TrieConfig::build). Limits are enforced here, at load time,
//! so that [`GlobTrie::add_path`] itself stays infallible.
//!
//! With the `serde` feature the type derives `Serialize`/`Deserialize`; the
//! `config` feature adds a JSON loader.
//!
//! ```yaml
//! case_insensitive: true
//! patterns:
//!   - /static/*
//!   - /api/*/health
//! ```

use crate::{GlobError, GlobTrie, MAX_PATTERNS, MAX_PATTERN_LENGTH};

/// A pattern set and the case mode to compile it with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct TrieConfig {
    /// Fold ASCII case in patterns and candidates.
    #[cfg_attr(feature = "serde", serde(default))]
    pub case_insensitive: bool,

    /// Patterns to insert, in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub patterns: Vec<String>,
}

impl TrieConfig {
    /// Create a config from patterns.
    pub fn new<I, S>(case_insensitive: bool, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            case_insensitive,
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GlobError::InvalidConfig`] if the document does not
    /// deserialize.
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> Result<Self, GlobError> {
        serde_json::from_str(json).map_err(|e| GlobError::InvalidConfig {
            source: e.to_string(),
        })
    }

    /// Check the config against the load-time limits.
    ///
    /// # Errors
    ///
    /// - [`GlobError::TooManyPatterns`] if there are more than [`MAX_PATTERNS`].
    /// - [`GlobError::PatternTooLong`] for the first pattern longer than
    ///   [`MAX_PATTERN_LENGTH`] bytes.
    pub fn validate(&self) -> Result<(), GlobError> {
        if self.patterns.len() > MAX_PATTERNS {
            return Err(GlobError::TooManyPatterns {
                count: self.patterns.len(),
                max: MAX_PATTERNS,
            });
        }

        if let Some(pattern) = self
            .patterns
            .iter()
            .find(|p| p.len() > MAX_PATTERN_LENGTH)
        {
            return Err(GlobError::PatternTooLong {
                len: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        Ok(())
    }

    /// Validate and compile into a trie.
    ///
    /// # Errors
    ///
    /// Any error from [`validate()`](Self::validate).
    pub fn build(&self) -> Result<GlobTrie, GlobError> {
        self.validate()?;

        let trie = GlobTrie::from_patterns(self.case_insensitive, &self.patterns);
        tracing::debug!(
            patterns = self.patterns.len(),
            nodes = trie.node_count(),
            case_insensitive = self.case_insensitive,
            "built glob trie"
        );
        Ok(trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_inserts_every_pattern() {
        let config = TrieConfig::new(false, ["/static/*", "/api/*/health"]);
        let trie = config.build().unwrap();

        assert!(trie.is_match("/static/x.css"));
        assert!(trie.is_match("/api/v1/health"));
        assert!(!trie.is_match("/api/v1/ready"));
    }

    #[test]
    fn build_honors_case_mode() {
        let trie = TrieConfig::new(true, ["/Admin"]).build().unwrap();
        assert!(trie.case_insensitive());
        assert!(trie.is_match("/ADMIN"));
    }

    #[test]
    fn empty_config_matches_nothing() {
        let trie = TrieConfig::default().build().unwrap();
        assert!(!trie.is_match(""));
        assert!(!trie.is_match("/"));
    }

    #[test]
    fn pattern_too_long() {
        let long = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = TrieConfig::new(false, ["/ok", long.as_str()])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GlobError::PatternTooLong {
                len: MAX_PATTERN_LENGTH + 1,
                max: MAX_PATTERN_LENGTH,
            }
        );
    }

    #[test]
    fn pattern_at_limit_is_accepted() {
        let exact = "a".repeat(MAX_PATTERN_LENGTH);
        assert!(TrieConfig::new(false, [exact]).validate().is_ok());
    }

    #[test]
    fn too_many_patterns() {
        let config = TrieConfig::new(false, vec!["/x"; MAX_PATTERNS + 1]);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GlobError::TooManyPatterns { count, .. } if count == MAX_PATTERNS + 1));
    }

    #[cfg(feature = "config")]
    #[test]
    fn from_json_defaults() {
        let config = TrieConfig::from_json(r#"{ "patterns": ["/a/*"] }"#).unwrap();
        assert!(!config.case_insensitive);
        assert_eq!(config.patterns, vec!["/a/*".to_string()]);
    }

    #[cfg(feature = "config")]
    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = TrieConfig::from_json(r#"{ "patterns": [], "extra": 1 }"#).unwrap_err();
        assert!(matches!(err, GlobError::InvalidConfig { .. }));
        assert!(err.to_string().contains("extra"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn from_json_rejects_wrong_types() {
        let err = TrieConfig::from_json(r#"{ "patterns": "/a" }"#).unwrap_err();
        assert!(matches!(err, GlobError::InvalidConfig { .. }));
    }
}
