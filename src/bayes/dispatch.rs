//! Name-based dispatch for train/untrain convenience operations.
//!
//! Some callers address the classifier through operation names of the shape
//! `"train_<category>"` or `"untrain_<category>"` rather than through the
//! typed API. This layer resolves such names with an explicit prefix match
//! against the live registry at call time; there is no reflection involved
//! and no algorithmic content here.

use super::classifier::NaiveBayesClassifier;
use crate::error::{DoxaError, Result};

impl NaiveBayesClassifier {
    /// Dispatch a named operation against the classifier.
    ///
    /// `"train_<category>"` and `"untrain_<category>"` resolve to
    /// [`train`](Self::train) and [`untrain`](Self::untrain) with
    /// `<category>` looked up against the live registry, so an unregistered
    /// category fails with [`DoxaError::UnknownCategory`]. Any other name
    /// fails with [`DoxaError::InvalidOperation`].
    pub fn dispatch(&mut self, operation: &str, text: &str) -> Result<()> {
        if let Some(category) = operation.strip_prefix("train_") {
            self.train(category, text)
        } else if let Some(category) = operation.strip_prefix("untrain_") {
            self.untrain(category, text)
        } else {
            Err(DoxaError::invalid_operation(operation))
        }
    }
}
