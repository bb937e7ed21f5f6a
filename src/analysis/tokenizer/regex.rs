//! Regex-based tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{TokenCounts, count_tokens};
use crate::error::{DoxaError, Result};
use regex::Regex;
use std::sync::Arc;

/// A regex-based tokenizer that extracts and counts tokens matching a pattern.
///
/// The default pattern `r"\w+"` matches runs of word characters, which
/// strips punctuation without a separate filtering pass. Matches are
/// lowercased before counting.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default `r"\w+"` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| DoxaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenCounts> {
        Ok(count_tokens(
            self.pattern
                .find_iter(text)
                .map(|mat| mat.as_str().to_lowercase()),
        ))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer_default_pattern() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let counts = tokenizer.tokenize("Hello, world... hello?").unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("hello"), Some(&2));
        assert_eq!(counts.get("world"), Some(&1));
    }

    #[test]
    fn test_regex_tokenizer_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z]+").unwrap();
        let counts = tokenizer.tokenize("abc123def abc").unwrap();

        assert_eq!(counts.get("abc"), Some(&2));
        assert_eq!(counts.get("def"), Some(&1));
        assert_eq!(counts.get("123"), None);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RegexTokenizer::with_pattern("[unclosed");
        assert!(matches!(result, Err(DoxaError::Analysis(_))));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
