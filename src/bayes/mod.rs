//! Multinomial naive Bayes classification.
//!
//! This module contains the statistical engine of the crate:
//!
//! - [`BayesModel`]: the owned aggregate of category registry, per-category
//!   word ledgers, document counts, and the global word total. It operates
//!   purely on token-count maps and knows nothing about raw text.
//! - [`NaiveBayesClassifier`]: the public engine, pairing a model with a
//!   pluggable [`Tokenizer`](crate::analysis::tokenizer::Tokenizer). This is
//!   the surface most callers use: `train`, `untrain`, `score_all`,
//!   `classify`, plus the category registry operations.
//! - A name-based dispatch layer resolving `"train_<category>"` and
//!   `"untrain_<category>"` operation names (see
//!   [`NaiveBayesClassifier::dispatch`]).
//!
//! Scores are unsmoothed log likelihoods: a word absent from a category's
//! ledger contributes nothing to that category's score, and degenerate
//! inputs (untrained categories, empty ledgers) produce non-finite scores
//! rather than errors.
//!
//! # Example
//!
//! ```
//! use doxa::bayes::NaiveBayesClassifier;
//!
//! let mut classifier = NaiveBayesClassifier::with_categories(
//!     std::sync::Arc::new(doxa::analysis::tokenizer::WhitespaceTokenizer::new()),
//!     ["rust", "cooking"],
//! );
//!
//! classifier.train("rust", "rust rust rust compiler").unwrap();
//! classifier.train("cooking", "rust on cast iron").unwrap();
//!
//! assert_eq!(classifier.classify("rust").unwrap(), "rust");
//! ```

mod classifier;
mod dispatch;
mod model;

// Public exports
pub use classifier::NaiveBayesClassifier;
pub use model::BayesModel;
