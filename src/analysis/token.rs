//! Token count types for text analysis.
//!
//! Tokenizers reduce a document to a [`TokenCounts`] map from normalized
//! word token to its number of occurrences in that document. The map is the
//! only representation the classifier engine ever sees; the original text,
//! token order, and offsets are not retained.
//!
//! # Examples
//!
//! ```
//! use doxa::analysis::token::count_tokens;
//!
//! let counts = count_tokens(["chinese", "beijing", "chinese"]);
//! assert_eq!(counts.get("chinese"), Some(&2));
//! assert_eq!(counts.get("beijing"), Some(&1));
//! ```

use ahash::AHashMap;

/// A mapping from word token to its occurrence count within one document.
///
/// Counts are always positive; a word that does not occur has no entry.
pub type TokenCounts = AHashMap<String, u64>;

/// Accumulate an iterator of word tokens into a [`TokenCounts`] map.
pub fn count_tokens<I>(words: I) -> TokenCounts
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut counts = TokenCounts::new();
    for word in words {
        *counts.entry(word.into()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tokens() {
        let counts = count_tokens(["to", "be", "or", "not", "to", "be"]);

        assert_eq!(counts.len(), 4);
        assert_eq!(counts.get("to"), Some(&2));
        assert_eq!(counts.get("be"), Some(&2));
        assert_eq!(counts.get("or"), Some(&1));
        assert_eq!(counts.get("not"), Some(&1));
    }

    #[test]
    fn test_count_tokens_empty() {
        let counts = count_tokens(Vec::<String>::new());
        assert!(counts.is_empty());
    }
}
