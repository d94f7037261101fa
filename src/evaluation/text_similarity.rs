use std::collections::HashMap;

use super::{EvaluationStrategy, MetricValue, Metrics, percentage};

/// Character-level Ratcliff/Obershelp similarity:
/// `2 * matches / (len_a + len_b)`, where matches come from recursively
/// taking the longest common block and repeating on both sides of it.
pub struct TextSimilarityStrategy;

impl EvaluationStrategy for TextSimilarityStrategy {
    fn name(&self) -> &'static str {
        "text"
    }

    fn evaluate(&self, first: &str, second: &str) -> Metrics {
        let similarity = sequence_ratio(first, second);
        Metrics::new()
            .with("text_similarity", MetricValue::Number(similarity))
            .with("similarity_percentage", percentage(similarity))
    }
}

pub(crate) fn sequence_ratio(first: &str, second: &str) -> f64 {
    let a = first.chars().collect::<Vec<_>>();
    let b = second.chars().collect::<Vec<_>>();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Sum of the sizes of all matching blocks. No junk heuristic is applied.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (index, c) in b.iter().enumerate() {
        positions.entry(*c).or_default().push(index);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &positions, a_lo, a_hi, b_lo, b_hi);
        if size == 0 {
            continue;
        }
        matched += size;
        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            pending.push((i + size, a_hi, j + size, b_hi));
        }
    }
    matched
}

/// Longest block with `a[i..i+size] == b[j..j+size]` inside the given
/// windows. Ties go to the smallest `i`, then the smallest `j`.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);
    // run length of the match ending at (i - 1, j), keyed by j
    let mut previous: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        let mut current = HashMap::new();
        for &j in positions.get(c).map(Vec::as_slice).unwrap_or_default() {
            if j < b_lo {
                continue;
            }
            if j >= b_hi {
                break;
            }
            let size = j
                .checked_sub(1)
                .and_then(|prev| previous.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            current.insert(j, size);
            if size > best_size {
                best_i = i + 1 - size;
                best_j = j + 1 - size;
                best_size = size;
            }
        }
        previous = current;
    }

    (best_i, best_j, best_size)
}
