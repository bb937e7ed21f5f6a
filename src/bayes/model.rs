//! The naive Bayes model aggregate: registry, ledgers, and counters.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenCounts;
use crate::error::{DoxaError, Result};

/// Per-category training state.
///
/// `words` maps a token to its accumulated training count; an entry exists
/// only while its count is greater than zero. `documents` is the net number
/// of training calls for the category and may go negative if `untrain` is
/// called without a matching `train`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CategoryLedger {
    words: AHashMap<String, u64>,
    documents: i64,
}

impl CategoryLedger {
    fn total_words(&self) -> u64 {
        self.words.values().sum()
    }
}

/// The owned state of a naive Bayes classifier.
///
/// A model bundles the category registry (insertion-ordered), one word
/// ledger and document counter per category, and a global word total. It is
/// independently constructible and disposable; no global state is involved.
/// All operations take token-count maps, so the model can be driven by any
/// tokenizer or by precomputed counts.
///
/// Mutating operations are multi-step read-modify-write sequences with no
/// internal locking. Hosts sharing a model across threads must serialize
/// access themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BayesModel {
    /// Registry in insertion order; used for enumeration and tie-breaking.
    categories: Vec<String>,
    ledgers: AHashMap<String, CategoryLedger>,
    total_words: i64,
}

impl BayesModel {
    /// Create an empty model with no categories.
    pub fn new() -> Self {
        BayesModel::default()
    }

    /// Create a model pre-populated with the given categories.
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut model = BayesModel::new();
        for category in categories {
            model.add_category(&category.into());
        }
        model
    }

    /// Add a category to the registry, returning its name.
    ///
    /// Re-adding an existing category resets its word ledger to empty, so
    /// the word history for that name is lost. Callers must not rely on this
    /// being a no-op for existing categories. The document counter and the
    /// global word total are left untouched.
    pub fn add_category(&mut self, name: &str) -> String {
        match self.ledgers.get_mut(name) {
            Some(ledger) => {
                ledger.words = AHashMap::new();
            }
            None => {
                self.categories.push(name.to_string());
                self.ledgers.insert(name.to_string(), CategoryLedger::default());
            }
        }
        name.to_string()
    }

    /// Remove a category and its ledger from the registry.
    ///
    /// Returns the removed name, or `None` if the category was never
    /// registered (not an error). The global word total is not adjusted.
    pub fn remove_category(&mut self, name: &str) -> Option<String> {
        self.ledgers.remove(name)?;
        let index = self.categories.iter().position(|c| c == name)?;
        Some(self.categories.remove(index))
    }

    /// The registered categories in insertion order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether `name` is a registered category.
    pub fn contains(&self, name: &str) -> bool {
        self.ledgers.contains_key(name)
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The accumulated training count for `word` under `category`.
    ///
    /// Returns 0 for absent words and unregistered categories alike.
    pub fn word_count(&self, category: &str, word: &str) -> u64 {
        self.ledgers
            .get(category)
            .and_then(|ledger| ledger.words.get(word).copied())
            .unwrap_or(0)
    }

    /// The net number of documents trained into `category`.
    pub fn document_count(&self, category: &str) -> i64 {
        self.ledgers
            .get(category)
            .map(|ledger| ledger.documents)
            .unwrap_or(0)
    }

    /// The legacy global word total.
    ///
    /// Tracks the sum of all ledger counts under train/untrain, modulo the
    /// untrain bookkeeping described on [`untrain`](Self::untrain). Scoring
    /// never consults it.
    pub fn total_words(&self) -> i64 {
        self.total_words
    }

    /// Record one document's token counts under `category`.
    ///
    /// Increments the category's document counter and adds every token count
    /// to its word ledger and to the global word total. Fails with
    /// [`DoxaError::UnknownCategory`] if the category is not registered.
    pub fn train(&mut self, category: &str, tokens: &TokenCounts) -> Result<()> {
        let ledger = self
            .ledgers
            .get_mut(category)
            .ok_or_else(|| DoxaError::unknown_category(category))?;

        ledger.documents += 1;
        for (word, &count) in tokens {
            *ledger.words.entry(word.clone()).or_insert(0) += count;
            self.total_words += count as i64;
        }
        Ok(())
    }

    /// Reverse a prior [`train`](Self::train) with the same token counts.
    ///
    /// Decrements the category's document counter and subtracts every token
    /// count from its word ledger. A ledger entry driven to zero or below is
    /// removed outright, and in that case the *pre-subtraction* stored count
    /// is debited from the global word total instead of the requested
    /// decrement. The global total is only debited while it is still
    /// positive; once non-positive, the remaining words of this call skip
    /// the global debit (their ledger updates still happen).
    ///
    /// Untraining without a matching prior train is not guarded: document
    /// counters can go negative and no error is raised.
    pub fn untrain(&mut self, category: &str, tokens: &TokenCounts) -> Result<()> {
        let ledger = self
            .ledgers
            .get_mut(category)
            .ok_or_else(|| DoxaError::unknown_category(category))?;

        ledger.documents -= 1;
        for (word, &count) in tokens {
            let stored = ledger.words.get(word).copied().unwrap_or(0);
            let remaining = stored as i64 - count as i64;
            let debit = if remaining <= 0 {
                ledger.words.remove(word);
                stored as i64
            } else {
                ledger.words.insert(word.clone(), remaining as u64);
                count as i64
            };
            if self.total_words > 0 {
                self.total_words -= debit;
            }
        }
        Ok(())
    }

    /// Compute the unsmoothed log-likelihood score of every category for the
    /// given token counts.
    ///
    /// For each category `c` the score is the sum over the *distinct* tokens
    /// present in `c`'s ledger of `ln(ledger_count / total_words_c)`, plus
    /// the log prior `ln(documents_c / total_documents)`. Tokens absent from
    /// the ledger contribute nothing. Degenerate states are not guarded: a
    /// category with no trained documents scores `-inf`, and a model with a
    /// zero document total propagates IEEE-754 division results.
    pub fn scores(&self, tokens: &TokenCounts) -> AHashMap<String, f64> {
        let total_documents: i64 = self.ledgers.values().map(|ledger| ledger.documents).sum();

        let mut scores = AHashMap::with_capacity(self.categories.len());
        for category in &self.categories {
            let Some(ledger) = self.ledgers.get(category) else {
                continue;
            };
            let total_words = ledger.total_words() as f64;

            let mut score = 0.0;
            for word in tokens.keys() {
                if let Some(&count) = ledger.words.get(word) {
                    score += (count as f64 / total_words).ln();
                }
            }
            score += (ledger.documents as f64 / total_documents as f64).ln();

            scores.insert(category.clone(), score);
        }
        scores
    }

    /// Return the maximum-score category for the given token counts.
    ///
    /// Ties are broken in favor of the earliest-registered category, and a
    /// `NaN` score never displaces the current best, so the result is
    /// deterministic for a fixed registration order. Fails with
    /// [`DoxaError::EmptyRegistry`] if no categories are registered.
    pub fn classify(&self, tokens: &TokenCounts) -> Result<&str> {
        if self.categories.is_empty() {
            return Err(DoxaError::EmptyRegistry);
        }

        let scores = self.scores(tokens);
        let mut best = self.categories[0].as_str();
        let mut best_score = scores.get(best).copied().unwrap_or(f64::NAN);
        for category in &self.categories[1..] {
            let score = scores.get(category.as_str()).copied().unwrap_or(f64::NAN);
            if score > best_score {
                best = category;
                best_score = score;
            }
        }
        Ok(best)
    }
}
