//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29). It properly handles international text and
//! drops non-word segments like punctuation and whitespace before counting.
//!
//! # Examples
//!
//! ```
//! use doxa::analysis::tokenizer::Tokenizer;
//! use doxa::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let counts = tokenizer.tokenize("Hello, world! Hello again.").unwrap();
//!
//! // Punctuation and whitespace are automatically filtered out,
//! // and tokens are case folded.
//! assert_eq!(counts.get("hello"), Some(&2));
//! assert_eq!(counts.get("world"), Some(&1));
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{TokenCounts, count_tokens};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Uses the Unicode Text Segmentation algorithm (UAX #29) to identify word
/// boundaries, which makes it the right choice for international text where
/// whitespace splitting is not enough. Tokens are lowercased before counting.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenCounts> {
        Ok(count_tokens(
            text.unicode_words().map(|word| word.to_lowercase()),
        ))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
