//! The classifier engine: a tokenizer paired with a Bayes model.

use std::sync::Arc;

use ahash::AHashMap;

use super::model::BayesModel;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// An incremental multinomial naive Bayes text classifier.
///
/// The engine owns a [`BayesModel`] (category registry, word ledgers,
/// counters) and a tokenizer that turns raw text into word-frequency counts.
/// Training and untraining mutate the model incrementally; scoring and
/// classification are read-only queries over its current state.
///
/// # Examples
///
/// ```
/// use doxa::bayes::NaiveBayesClassifier;
///
/// let mut classifier = NaiveBayesClassifier::default();
/// classifier.add_category("in_china");
/// classifier.add_category("not_in_china");
///
/// classifier.train("in_china", "Chinese Beijing Chinese").unwrap();
/// classifier.train("not_in_china", "Tokyo Japan Chinese").unwrap();
///
/// assert_eq!(classifier.classify("Chinese Chinese").unwrap(), "in_china");
/// ```
pub struct NaiveBayesClassifier {
    /// Tokenizer for turning documents into word counts.
    tokenizer: Arc<dyn Tokenizer>,
    /// The classifier state.
    model: BayesModel,
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("tokenizer", &self.tokenizer.name())
            .field("model", &self.model)
            .finish()
    }
}

impl Default for NaiveBayesClassifier {
    /// An empty classifier using the [`WhitespaceTokenizer`].
    fn default() -> Self {
        Self::new(Arc::new(WhitespaceTokenizer::new()))
    }
}

impl NaiveBayesClassifier {
    /// Create an empty classifier with the specified tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        NaiveBayesClassifier {
            tokenizer,
            model: BayesModel::new(),
        }
    }

    /// Create a classifier pre-populated with the given categories.
    pub fn with_categories<I, S>(tokenizer: Arc<dyn Tokenizer>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NaiveBayesClassifier {
            tokenizer,
            model: BayesModel::with_categories(categories),
        }
    }

    /// Add a category, returning its name.
    ///
    /// See [`BayesModel::add_category`] for the re-insertion semantics.
    pub fn add_category(&mut self, name: &str) -> String {
        self.model.add_category(name)
    }

    /// Remove a category and its word ledger.
    ///
    /// Returns `None` if the category was never registered (not an error).
    pub fn remove_category(&mut self, name: &str) -> Option<String> {
        self.model.remove_category(name)
    }

    /// The registered categories in insertion order.
    pub fn categories(&self) -> &[String] {
        self.model.categories()
    }

    /// Train `category` with one document of text.
    ///
    /// Fails with [`DoxaError::UnknownCategory`] if the category is not
    /// registered.
    ///
    /// [`DoxaError::UnknownCategory`]: crate::error::DoxaError::UnknownCategory
    pub fn train(&mut self, category: &str, text: &str) -> Result<()> {
        let tokens = self.tokenizer.tokenize(text)?;
        self.model.train(category, &tokens)
    }

    /// Reverse a prior [`train`](Self::train) call with the same text.
    ///
    /// Fails with [`DoxaError::UnknownCategory`] if the category is not
    /// registered. Untraining text that was never trained is not guarded;
    /// see [`BayesModel::untrain`].
    ///
    /// [`DoxaError::UnknownCategory`]: crate::error::DoxaError::UnknownCategory
    pub fn untrain(&mut self, category: &str, text: &str) -> Result<()> {
        let tokens = self.tokenizer.tokenize(text)?;
        self.model.untrain(category, &tokens)
    }

    /// Score the text against every registered category.
    ///
    /// Higher (closer to zero) means a stronger match. Degenerate categories
    /// yield non-finite scores rather than errors; an empty registry yields
    /// an empty map. See [`BayesModel::scores`] for the formula.
    pub fn score_all(&self, text: &str) -> Result<AHashMap<String, f64>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(self.model.scores(&tokens))
    }

    /// Return the best-matching category for the text.
    ///
    /// Fails with [`DoxaError::EmptyRegistry`] when no categories are
    /// registered. Ties go to the earliest-registered category.
    ///
    /// [`DoxaError::EmptyRegistry`]: crate::error::DoxaError::EmptyRegistry
    pub fn classify(&self, text: &str) -> Result<String> {
        let tokens = self.tokenizer.tokenize(text)?;
        self.model.classify(&tokens).map(|name| name.to_string())
    }

    /// The underlying model aggregate.
    pub fn model(&self) -> &BayesModel {
        &self.model
    }

    /// The tokenizer in use.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}
