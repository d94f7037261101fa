mod semantic;
mod text_similarity;
mod tokenize;
mod word_count;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::ConfigError;

pub use semantic::SemanticSimilarityStrategy;
pub use text_similarity::TextSimilarityStrategy;
pub use word_count::WordCountStrategy;

/// A pure comparison of two answers. No state, no I/O.
pub trait EvaluationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, first: &str, second: &str) -> Metrics;
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Number(f64),
    Text(String),
}

impl MetricValue {
    #[cfg(test)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Count(value) => Some(*value as f64),
            MetricValue::Number(value) => Some(*value),
            MetricValue::Text(_) => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(value) => write!(f, "{value}"),
            MetricValue::Number(value) => write!(f, "{value:?}"),
            MetricValue::Text(value) => f.write_str(value),
        }
    }
}

/// Metric name to value, in the order the strategy produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    entries: Vec<(&'static str, MetricValue)>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: MetricValue) -> Self {
        self.entries.retain(|(existing, _)| *existing != name);
        self.entries.push((name, value));
        self
    }

    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &MetricValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

/// Strategy name to metrics, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    results: Vec<(&'static str, Metrics)>,
}

impl EvaluationReport {
    pub fn get(&self, strategy: &str) -> Option<&Metrics> {
        self.results
            .iter()
            .find(|(name, _)| *name == strategy)
            .map(|(_, metrics)| metrics)
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<&'static str> {
        self.results.iter().map(|(name, _)| *name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Metrics)> {
        self.results.iter().map(|(name, metrics)| (*name, metrics))
    }
}

pub struct ResponseEvaluator {
    strategies: Vec<Box<dyn EvaluationStrategy>>,
}

impl ResponseEvaluator {
    pub fn new(strategies: Vec<Box<dyn EvaluationStrategy>>) -> Self {
        Self { strategies }
    }

    /// Word count, semantic, text: the order `evaluate_all` reports in.
    pub fn with_default_strategies() -> Self {
        Self::new(vec![
            Box::new(WordCountStrategy),
            Box::new(SemanticSimilarityStrategy),
            Box::new(TextSimilarityStrategy),
        ])
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|strategy| strategy.name()).collect()
    }

    pub fn evaluate_one(
        &self,
        first: &str,
        second: &str,
        strategy_name: &str,
    ) -> Result<Metrics, ConfigError> {
        let strategy = self
            .strategies
            .iter()
            .find(|strategy| strategy.name() == strategy_name)
            .ok_or_else(|| ConfigError::UnknownStrategy(strategy_name.to_string()))?;
        Ok(strategy.evaluate(first, second))
    }

    pub fn evaluate_all(&self, first: &str, second: &str) -> EvaluationReport {
        let results = self
            .strategies
            .iter()
            .map(|strategy| (strategy.name(), strategy.evaluate(first, second)))
            .collect();
        EvaluationReport { results }
    }
}

impl Default for ResponseEvaluator {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}

pub(crate) fn percentage(value: f64) -> MetricValue {
    MetricValue::Text(format!("{:.2}%", value * 100.0))
}
