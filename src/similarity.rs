//! Term-frequency text similarity.
//!
//! Text is reduced to lowercase alphanumeric tokens and compared as bags of
//! words. Scores fall in `[0, 1]` since term counts are never negative.

use std::collections::HashMap;

/// Split text into lowercase alphanumeric runs.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity of the two texts' term-frequency vectors.
///
/// Returns 0.0 when either text has no tokens.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let tf_a = term_frequencies(a);
    let tf_b = term_frequencies(b);

    let dot: f64 = tf_a
        .iter()
        .filter_map(|(term, count)| tf_b.get(term).map(|other| count * other))
        .sum();
    let norm_a = tf_a.values().map(|c| c * c).sum::<f64>().sqrt();
    let norm_b = tf_b.values().map(|c| c * c).sum::<f64>().sqrt();

    if norm_a < 1e-10 || norm_b < 1e-10 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).min(1.0)
}

/// Pairwise scores by index. Callers check that the slices have equal length.
pub fn score_pairs(ground_truth: &[String], generated: &[String]) -> Vec<f64> {
    ground_truth
        .iter()
        .zip(generated)
        .map(|(truth, answer)| cosine_similarity(truth, answer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_drops_punctuation() {
        assert_eq!(tokenize("What is X?  X-ray."), vec!["what", "is", "x", "x", "ray"]);
        assert!(tokenize("  ...  ").is_empty());
    }

    #[test]
    fn identical_text_scores_one() {
        let score = cosine_similarity("The cat sat.", "the CAT sat");
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_text_scores_zero() {
        assert_eq!(cosine_similarity("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(cosine_similarity("", "anything"), 0.0);
        assert_eq!(cosine_similarity("", ""), 0.0);
    }

    #[test]
    fn score_is_symmetric_and_partial() {
        let ab = cosine_similarity("paris is the capital", "the capital is paris france");
        let ba = cosine_similarity("the capital is paris france", "paris is the capital");
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 0.0 && ab < 1.0);
    }

    #[test]
    fn score_pairs_is_index_aligned() {
        let truth = vec!["a b".to_string(), "c".to_string()];
        let generated = vec!["a b".to_string(), "d".to_string()];
        let scores = score_pairs(&truth, &generated);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 1.0).abs() < 1e-9);
        assert_eq!(scores[1], 0.0);
    }
}
