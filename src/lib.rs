//! # Doxa
//!
//! An incremental naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Incremental training and untraining
//! - Per-category log-likelihood scores
//! - Pluggable tokenizers (whitespace, Unicode word boundaries, regex)
//! - No smoothing: absent words contribute nothing to a category's score
//!
//! ## Example
//!
//! ```
//! use doxa::bayes::NaiveBayesClassifier;
//!
//! let mut classifier = NaiveBayesClassifier::default();
//! classifier.add_category("spam");
//! classifier.add_category("ham");
//!
//! classifier.train("spam", "cheap cheap cheap offer").unwrap();
//! classifier.train("ham", "cheap meeting notes").unwrap();
//!
//! assert_eq!(classifier.classify("cheap").unwrap(), "spam");
//! ```

pub mod analysis;
pub mod bayes;
pub mod error;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::analysis::token::TokenCounts;
    pub use crate::analysis::tokenizer::{
        RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
    };
    pub use crate::bayes::{BayesModel, NaiveBayesClassifier};
    pub use crate::error::{DoxaError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
