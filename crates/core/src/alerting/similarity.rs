//! Token-overlap similarity between alert messages.
//!
//! Messages embed the live measured value, so two alerts for the same
//! condition rarely match exactly. Instead the messages are compared by the
//! share of whitespace-separated tokens they have in common.

use std::collections::HashSet;

/// Minimum score for two messages to count as the same condition.
pub const SIMILARITY_THRESHOLD: f64 = 0.70;

/// Fraction of the shorter message's tokens found in the longer message.
///
/// Tokens are lowercased and split on whitespace. The shorter message is the
/// one with fewer tokens; duplicated tokens count once per occurrence. Two
/// empty messages score `1.0`, a single empty message scores `0.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_tokens = tokenize(a);
    let b_tokens = tokenize(b);

    let (shorter, longer) = if a_tokens.len() <= b_tokens.len() {
        (a_tokens, b_tokens)
    } else {
        (b_tokens, a_tokens)
    };

    if shorter.is_empty() {
        return if longer.is_empty() { 1.0 } else { 0.0 };
    }

    let longer: HashSet<&str> = longer.iter().map(String::as_str).collect();
    let matched = shorter
        .iter()
        .filter(|token| longer.contains(token.as_str()))
        .count();

    matched as f64 / shorter.len() as f64
}

/// Whether two messages describe the same underlying condition.
pub fn is_similar(a: &str, b: &str) -> bool {
    similarity(a, b) >= SIMILARITY_THRESHOLD
}

fn tokenize(message: &str) -> Vec<String> {
    message.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_condition_with_different_value_is_similar() {
        let score = similarity(
            "Temperature is too high (38.2°C)",
            "Temperature is too high (37.9°C)",
        );
        assert!((score - 0.8).abs() < f64::EPSILON);
        assert!(is_similar(
            "Temperature is too high (38.2°C)",
            "Temperature is too high (37.9°C)"
        ));
    }

    #[test]
    fn opposite_direction_is_not_similar() {
        assert!(!is_similar(
            "Temperature is too high (38.0°C)",
            "Temperature is too low (30.0°C)"
        ));
    }

    #[test]
    fn different_metric_is_not_similar() {
        assert!(!is_similar(
            "Temperature is too high (38.0°C)",
            "Humidity is too low (30.0%)"
        ));
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert_eq!(similarity("SOUND IS TOO LOW", "sound is too low"), 1.0);
    }

    #[test]
    fn normalises_by_the_shorter_message() {
        // All 4 tokens of the short message appear in the 8-token message.
        let short = "weight is too low";
        let long = "weight is too low on the north stand";
        assert_eq!(similarity(short, long), 1.0);
        assert_eq!(similarity(long, short), 1.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        // 7 of 10 tokens shared.
        let a = "a b c d e f g h i j";
        let b = "a b c d e f g x y z";
        assert_eq!(similarity(a, b), 0.7);
        assert!(is_similar(a, b));

        // 6 of 10 tokens shared.
        let c = "a b c d e f w x y z";
        assert!(!is_similar(a, c));
    }

    #[test]
    fn empty_messages() {
        assert_eq!(similarity("", "   "), 1.0);
        assert_eq!(similarity("", "Humidity is too low"), 0.0);
        assert_eq!(similarity("Humidity is too low", ""), 0.0);
    }
}
