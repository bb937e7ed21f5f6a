//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenCounts;
use crate::error::Result;

/// Trait for tokenizers that convert text into word-frequency counts.
///
/// A tokenizer owns the normalization policy: case folding, splitting, and
/// any stemming or stopword handling happen here. The classifier engine
/// consumes only the resulting token-to-count mapping. Implementations must
/// be deterministic for a given input.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a map from word token to occurrence count.
    fn tokenize(&self, text: &str) -> Result<TokenCounts>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod regex;
pub mod unicode_word;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
