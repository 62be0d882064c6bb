//! Fuzzy similarity between category spellings.

use rapidfuzz::distance::indel;

/// Lowercase, split on whitespace, sort the words and rejoin them.
pub fn token_sort(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut words: Vec<&str> = lowered.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

/// Similarity of two categories in `0.0..=1.0`, ignoring case.
///
/// Takes the better of the plain indel ratio and the ratio after sorting
/// words, so reordered phrases ("Heart Fetal") score as equal.
pub fn category_similarity(a: &str, b: &str) -> f64 {
    let (left, right) = (a.to_lowercase(), b.to_lowercase());
    let plain = indel::normalized_similarity(left.chars(), right.chars());

    let (left, right) = (token_sort(a), token_sort(b));
    let sorted = indel::normalized_similarity(left.chars(), right.chars());

    plain.max(sorted)
}

/// Best similarity of the shorter category against every same-length
/// window of the longer one, ignoring case.
pub fn partial_similarity(a: &str, b: &str) -> f64 {
    let left: Vec<char> = a.to_lowercase().chars().collect();
    let right: Vec<char> = b.to_lowercase().chars().collect();
    let (shorter, longer) = if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    };
    if shorter.is_empty() {
        return 0.0;
    }

    longer
        .windows(shorter.len())
        .map(|w| indel::normalized_similarity(shorter.iter().copied(), w.iter().copied()))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_sort() {
        assert_eq!(token_sort("Heart  Fetal"), "fetal heart");
        assert_eq!(token_sort(""), "");
    }

    #[test]
    fn test_reordered_words_match() {
        assert!((category_similarity("Fetal Heart", "heart fetal") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_typo_scores_high() {
        // One substitution in seven characters
        let score = category_similarity("Cardiac", "Cardiak");
        assert!(score > 0.85 && score < 0.86, "score was {score}");
    }

    #[test]
    fn test_unrelated_scores_low() {
        assert!(category_similarity("Cardiac", "Fetal") < 0.3);
    }

    #[test]
    fn test_partial_similarity() {
        assert!(category_similarity("Cardiac", "Cardiac Imaging") < 0.65);
        assert!((partial_similarity("Cardiac", "cardiac imaging") - 1.0).abs() < f64::EPSILON);
        assert!((partial_similarity("Cardiac Imaging", "Cardiac") - 1.0).abs() < f64::EPSILON);
        assert!(partial_similarity("", "Cardiac").abs() < f64::EPSILON);
    }
}
