//! Text analysis module for Doxa.
//!
//! This module provides the tokenization side of the classifier: converting
//! raw text into a word-frequency map ([`token::TokenCounts`]) that the
//! Bayes engine consumes. Case folding and splitting policy live here, not
//! in the engine.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
