use super::semantic::tfidf_cosine;
use super::text_similarity::sequence_ratio;
use super::*;

fn number(metrics: &Metrics, name: &str) -> f64 {
    metrics
        .get(name)
        .and_then(MetricValue::as_f64)
        .unwrap_or_else(|| panic!("missing numeric metric {name}"))
}

#[test]
fn word_count_matches_reference_example() {
    let metrics = WordCountStrategy.evaluate("a b c", "a b");
    assert_eq!(metrics.get("words_response1"), Some(&MetricValue::Count(3)));
    assert_eq!(metrics.get("words_response2"), Some(&MetricValue::Count(2)));
    assert_eq!(metrics.get("difference"), Some(&MetricValue::Count(1)));
    assert_eq!(metrics.get("ratio"), Some(&MetricValue::Number(1.5)));
}

#[test]
fn word_count_ratio_is_infinite_for_empty_second_answer() {
    let metrics = WordCountStrategy.evaluate("one two", "");
    assert!(number(&metrics, "ratio").is_infinite());
    assert_eq!(metrics.get("ratio").unwrap().to_string(), "inf");
    assert_eq!(metrics.get("difference"), Some(&MetricValue::Count(2)));
}

#[test]
fn word_count_keeps_abbreviations_whole() {
    let metrics = WordCountStrategy.evaluate("e.g. U.S.A. costs $3.50!", "");
    assert_eq!(metrics.get("words_response1"), Some(&MetricValue::Count(8)));
}

#[test]
fn word_count_counts_punctuation_tokens() {
    let metrics = WordCountStrategy.evaluate("Hello, world!", "Hello world");
    assert_eq!(metrics.get("words_response1"), Some(&MetricValue::Count(4)));
    assert_eq!(metrics.get("words_response2"), Some(&MetricValue::Count(2)));
}

#[test]
fn text_ratio_is_one_for_identical_strings() {
    assert_eq!(sequence_ratio("the same answer", "the same answer"), 1.0);
    assert_eq!(sequence_ratio("", ""), 1.0);
}

#[test]
fn text_ratio_stays_in_unit_interval() {
    let pairs = [
        ("abc", "xyz"),
        ("Rust is fast.", "Python is friendly."),
        ("a", "a much longer answer that shares one letter"),
    ];
    for (first, second) in pairs {
        let ratio = sequence_ratio(first, second);
        assert!((0.0..=1.0).contains(&ratio), "{first:?} vs {second:?} gave {ratio}");
    }
    assert_eq!(sequence_ratio("abc", "xyz"), 0.0);
    assert_eq!(sequence_ratio("abc", ""), 0.0);
}

#[test]
fn text_ratio_matches_longest_block_reference_values() {
    assert_eq!(sequence_ratio("kitten", "sitting"), 0.6153846153846154);
    assert_eq!(
        sequence_ratio(
            "The capital of France is Paris.",
            "Paris is the capital city of France."
        ),
        0.6268656716417911
    );
}

#[test]
fn text_ratio_on_long_answers_uses_longest_blocks_not_edit_script() {
    let first = "Paris is the capital of France. ".repeat(10);
    let second = "The capital city of France is Paris, a large city. ".repeat(6);
    assert_eq!(sequence_ratio(&first, &second), 0.5878594249201278);
}

#[test]
fn text_similarity_renders_without_float_noise() {
    let metrics = TextSimilarityStrategy.evaluate("abxcd", "cdxab");
    assert_eq!(metrics.get("text_similarity"), Some(&MetricValue::Number(0.4)));
    assert_eq!(metrics.get("text_similarity").unwrap().to_string(), "0.4");
    assert_eq!(
        metrics.get("similarity_percentage"),
        Some(&MetricValue::Text("40.00%".to_string()))
    );
}

#[test]
fn text_strategy_formats_percentage() {
    let metrics = TextSimilarityStrategy.evaluate("abcd", "abcd");
    assert_eq!(
        metrics.get("similarity_percentage"),
        Some(&MetricValue::Text("100.00%".to_string()))
    );
}

#[test]
fn semantic_similarity_of_text_with_itself_is_one() {
    let text = "Paris is the capital of France and its largest city.";
    assert!((tfidf_cosine(text, text) - 1.0).abs() < 1e-9);
}

#[test]
fn semantic_similarity_ignores_case_and_order() {
    let similarity = tfidf_cosine(
        "Rust makes systems programming safe",
        "SAFE programming systems makes rust",
    );
    assert!((similarity - 1.0).abs() < 1e-9);
}

#[test]
fn semantic_similarity_is_zero_without_shared_terms() {
    assert_eq!(tfidf_cosine("red green blue", "cats and dogs"), 0.0);
}

#[test]
fn semantic_similarity_of_empty_input_is_zero() {
    assert_eq!(tfidf_cosine("", ""), 0.0);
    assert_eq!(tfidf_cosine("", "something here"), 0.0);
    assert_eq!(tfidf_cosine("a b c", "x y z"), 0.0);
}

#[test]
fn semantic_similarity_for_partial_overlap_is_between_bounds() {
    let similarity = tfidf_cosine("the cat sat on the mat", "the dog sat on the log");
    assert!(similarity > 0.0 && similarity < 1.0, "got {similarity}");
}

#[test]
fn semantic_strategy_reports_both_metrics() {
    let metrics = SemanticSimilarityStrategy.evaluate("same words", "same words");
    assert!((number(&metrics, "semantic_similarity") - 1.0).abs() < 1e-9);
    assert_eq!(
        metrics.get("similarity_percentage"),
        Some(&MetricValue::Text("100.00%".to_string()))
    );
}

#[test]
fn evaluate_all_reports_three_strategies_in_fixed_order() {
    let evaluator = ResponseEvaluator::with_default_strategies();
    for (first, second) in [("", ""), ("a b c", "a b"), ("one", "")] {
        let report = evaluator.evaluate_all(first, second);
        assert_eq!(report.names(), vec!["word_count", "semantic", "text"]);
    }
}

#[test]
fn evaluate_one_runs_the_named_strategy() {
    let evaluator = ResponseEvaluator::default();
    let metrics = evaluator.evaluate_one("a b c", "a b", "word_count").unwrap();
    assert_eq!(metrics, WordCountStrategy.evaluate("a b c", "a b"));
}

#[test]
fn evaluate_one_rejects_unknown_strategy() {
    let evaluator = ResponseEvaluator::default();
    let err = evaluator.evaluate_one("a", "b", "bleu").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownStrategy(ref name) if name == "bleu"));
    assert_eq!(evaluator.strategy_names(), vec!["word_count", "semantic", "text"]);
}

#[test]
fn metric_values_render_like_their_source_numbers() {
    assert_eq!(MetricValue::Number(1.5).to_string(), "1.5");
    assert_eq!(MetricValue::Number(1.0).to_string(), "1.0");
    assert_eq!(MetricValue::Count(7).to_string(), "7");
}

#[test]
fn metrics_keep_insertion_order_and_replace_duplicates() {
    let metrics = Metrics::new()
        .with("b", MetricValue::Count(1))
        .with("a", MetricValue::Count(2))
        .with("b", MetricValue::Count(3));
    let names = metrics.iter().map(|(name, _)| name).collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(metrics.get("b"), Some(&MetricValue::Count(3)));
}
