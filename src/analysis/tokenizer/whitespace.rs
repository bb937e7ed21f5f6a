//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{TokenCounts, count_tokens};
use crate::error::Result;

/// A tokenizer that splits text on whitespace and folds case.
///
/// This is the default tokenizer for [`NaiveBayesClassifier`]. Every
/// whitespace-separated word is lowercased and counted; punctuation attached
/// to a word is kept as part of it.
///
/// [`NaiveBayesClassifier`]: crate::bayes::NaiveBayesClassifier
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenCounts> {
        Ok(count_tokens(
            text.split_whitespace().map(|word| word.to_lowercase()),
        ))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let counts = tokenizer.tokenize("hello  world\thello").unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("hello"), Some(&2));
        assert_eq!(counts.get("world"), Some(&1));
    }

    #[test]
    fn test_case_folding() {
        let tokenizer = WhitespaceTokenizer::new();
        let counts = tokenizer.tokenize("Chinese chinese CHINESE").unwrap();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("chinese"), Some(&3));
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = WhitespaceTokenizer::new();
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize("   \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
