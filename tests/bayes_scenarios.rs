//! Integration tests for end-to-end classifier behavior.

use doxa::prelude::*;

fn china_classifier() -> NaiveBayesClassifier {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.add_category("in_china");
    classifier.add_category("not_in_china");

    classifier.train("in_china", "Chinese Beijing Chinese").unwrap();
    classifier.train("in_china", "Chinese Chinese Shanghai").unwrap();
    classifier.train("in_china", "Chinese Macao").unwrap();
    classifier.train("not_in_china", "Tokyo Japan Chinese").unwrap();
    classifier
}

#[test]
fn test_china_scenario_classification() -> Result<()> {
    let classifier = china_classifier();
    assert_eq!(classifier.classify("Chinese Chinese Chinese Tokyo Japan")?, "in_china");
    Ok(())
}

#[test]
fn test_china_scenario_scores() -> Result<()> {
    let classifier = china_classifier();
    let scores = classifier.score_all("Chinese Chinese Chinese Tokyo Japan")?;

    // in_china: "chinese" appears 5 times out of 8 ledger words, 3 of 4
    // documents; "tokyo" and "japan" are absent and contribute nothing.
    let in_china = (5.0f64 / 8.0).ln() + (3.0f64 / 4.0).ln();
    // not_in_china: each distinct query word appears once out of 3 ledger
    // words, 1 of 4 documents.
    let not_in_china = 3.0 * (1.0f64 / 3.0).ln() + (1.0f64 / 4.0).ln();

    assert!((scores.get("in_china").unwrap() - in_china).abs() < 1e-12);
    assert!((scores.get("not_in_china").unwrap() - not_in_china).abs() < 1e-12);
    assert!(scores.get("in_china").unwrap() > scores.get("not_in_china").unwrap());
    Ok(())
}

#[test]
fn test_untrain_flips_classification() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.add_category("in_china");
    classifier.add_category("not_in_china");

    classifier.train("in_china", "Chinese Chinese")?;
    classifier.train("not_in_china", "Chinese Macao")?;
    assert_eq!(classifier.classify("Chinese")?, "in_china");

    classifier.untrain("in_china", "Chinese Chinese")?;
    assert_eq!(classifier.classify("Chinese")?, "not_in_china");
    Ok(())
}

#[test]
fn test_train_untrain_restores_state() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.add_category("a");
    classifier.add_category("b");
    classifier.train("a", "alpha beta")?;
    classifier.train("b", "gamma delta")?;

    let before = classifier.classify("alpha gamma")?;

    classifier.train("b", "alpha alpha gamma")?;
    classifier.untrain("b", "alpha alpha gamma")?;

    assert_eq!(classifier.model().word_count("b", "alpha"), 0);
    assert_eq!(classifier.model().word_count("b", "gamma"), 1);
    assert_eq!(classifier.model().document_count("b"), 1);
    assert_eq!(classifier.classify("alpha gamma")?, before);
    Ok(())
}

#[test]
fn test_initial_category_set_is_listed() {
    let tokenizer = std::sync::Arc::new(WhitespaceTokenizer::new());
    let classifier =
        NaiveBayesClassifier::with_categories(tokenizer, ["one", "two", "three"]);
    assert_eq!(classifier.categories(), &["one", "two", "three"]);

    let empty = NaiveBayesClassifier::default();
    assert!(empty.categories().is_empty());
}

#[test]
fn test_registry_return_values() {
    let mut classifier = NaiveBayesClassifier::default();
    assert_eq!(classifier.add_category("sports"), "sports");
    assert_eq!(classifier.remove_category("sports"), Some("sports".to_string()));
    assert_eq!(classifier.remove_category("sports"), None);
}

#[test]
fn test_unknown_category_for_any_text() {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.add_category("known");

    for text in ["", "some words here"] {
        assert!(matches!(
            classifier.train("unknown", text),
            Err(DoxaError::UnknownCategory(_))
        ));
        assert!(matches!(
            classifier.untrain("unknown", text),
            Err(DoxaError::UnknownCategory(_))
        ));
    }
}

#[test]
fn test_classify_with_empty_registry_is_an_error() {
    let classifier = NaiveBayesClassifier::default();
    assert!(matches!(
        classifier.classify("anything at all"),
        Err(DoxaError::EmptyRegistry)
    ));
}

#[test]
fn test_untrained_category_scores_negative_infinity() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.add_category("trained");
    classifier.add_category("untrained");
    classifier.train("trained", "some words")?;

    let scores = classifier.score_all("some words")?;
    let untrained = *scores.get("untrained").unwrap();
    assert!(untrained.is_infinite() && untrained < 0.0);
    assert_eq!(classifier.classify("some words")?, "trained");
    Ok(())
}

#[test]
fn test_dispatch_sugar_end_to_end() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::default();
    classifier.add_category("spam");
    classifier.add_category("ham");

    classifier.dispatch("train_spam", "cheap cheap pills")?;
    classifier.dispatch("train_ham", "cheap report")?;
    assert_eq!(classifier.classify("cheap")?, "spam");

    classifier.dispatch("untrain_spam", "cheap cheap pills")?;
    assert!(matches!(
        classifier.dispatch("classify_spam", "x"),
        Err(DoxaError::InvalidOperation(_))
    ));
    Ok(())
}

#[test]
fn test_model_round_trips_through_json() -> Result<()> {
    let classifier = china_classifier();

    let json = serde_json::to_string(classifier.model()).unwrap();
    let restored: BayesModel = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.categories(), classifier.categories());
    assert_eq!(restored.word_count("in_china", "chinese"), 5);
    assert_eq!(restored.document_count("in_china"), 3);
    assert_eq!(restored.total_words(), 11);
    Ok(())
}
