use super::tokenize::word_tokens;
use super::{EvaluationStrategy, MetricValue, Metrics};

/// Compares answer length in tokens.
pub struct WordCountStrategy;

impl EvaluationStrategy for WordCountStrategy {
    fn name(&self) -> &'static str {
        "word_count"
    }

    fn evaluate(&self, first: &str, second: &str) -> Metrics {
        let first_count = word_tokens(first).len();
        let second_count = word_tokens(second).len();
        let ratio = if second_count > 0 {
            first_count as f64 / second_count as f64
        } else {
            f64::INFINITY
        };

        Metrics::new()
            .with("words_response1", MetricValue::Count(first_count))
            .with("words_response2", MetricValue::Count(second_count))
            .with(
                "difference",
                MetricValue::Count(first_count.abs_diff(second_count)),
            )
            .with("ratio", MetricValue::Number(ratio))
    }
}
