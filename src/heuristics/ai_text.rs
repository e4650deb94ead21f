//! Surface features common in machine-generated review text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::cap_score;

static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

static BALANCED_STRUCTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(pros|advantages|benefits).{1,50}(cons|disadvantages|drawbacks)\b").unwrap()
});

const TYPICAL_PHRASES: &[&str] = &[
    "i would recommend",
    "i highly recommend",
    "in conclusion",
    "overall experience",
    "in summary",
    "in my opinion",
];

const STOCK_ADJECTIVES: &[&str] = &[
    "great",
    "good",
    "amazing",
    "excellent",
    "wonderful",
    "fantastic",
    "awesome",
];

const ADJECTIVE_RATIO_LIMIT: f64 = 0.1;
const STARTER_RATIO_LIMIT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiTextSignals {
    pub word_count: usize,
    pub avg_word_len: f64,
    pub sentence_count: usize,
    pub avg_sentence_len: f64,
    pub has_typical_phrase: bool,
    pub has_balanced_structure: bool,
    /// Stock adjective occurrences per word
    pub adjective_ratio: f64,
    /// Distinct sentence openers over sentence count
    pub unique_starters_ratio: f64,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl AiTextSignals {
    pub fn analyze(text: &str) -> Self {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        let word_count = words.len();

        let avg_word_len = if word_count > 0 {
            words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
        } else {
            0.0
        };

        let sentences: Vec<&str> = SENTENCE_SPLIT
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let sentence_count = sentences.len();
        let avg_sentence_len = if sentence_count > 0 {
            word_count as f64 / sentence_count as f64
        } else {
            0.0
        };

        let has_typical_phrase = TYPICAL_PHRASES.iter().any(|p| lower.contains(p));
        let has_balanced_structure = BALANCED_STRUCTURE.is_match(&lower);

        let adjective_hits: usize = STOCK_ADJECTIVES
            .iter()
            .map(|adj| lower.matches(adj).count())
            .sum();
        let adjective_ratio = if word_count > 0 {
            adjective_hits as f64 / word_count as f64
        } else {
            0.0
        };

        let starters: Vec<String> = sentences
            .iter()
            .map(|s| {
                s.split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_lowercase()
            })
            .collect();
        let unique_starters_ratio = if starters.is_empty() {
            0.0
        } else {
            starters.iter().collect::<HashSet<_>>().len() as f64 / starters.len() as f64
        };

        let repetitive_openers = sentence_count >= 3 && unique_starters_ratio < STARTER_RATIO_LIMIT;

        let mut score: f64 = 0.0;
        let mut reasons = Vec::new();

        if sentence_count == 1 {
            score += 0.1;
        } else if sentence_count > 10 {
            score += 0.2;
            reasons.push("Unusually long review".to_string());
        }
        if 15.0 < avg_sentence_len && avg_sentence_len < 25.0 {
            score += 0.15;
            reasons.push("Uniform sentence length".to_string());
        }
        if has_typical_phrase {
            score += 0.2;
            reasons.push("Stock recommendation phrasing".to_string());
        }
        if has_balanced_structure {
            score += 0.15;
            reasons.push("Formulaic pros/cons structure".to_string());
        }
        if adjective_ratio > ADJECTIVE_RATIO_LIMIT {
            score += 0.2;
            reasons.push("Heavy use of stock adjectives".to_string());
        }
        if repetitive_openers {
            score += 0.15;
            reasons.push("Repetitive sentence openers".to_string());
        }

        Self {
            word_count,
            avg_word_len,
            sentence_count,
            avg_sentence_len,
            has_typical_phrase,
            has_balanced_structure,
            adjective_ratio,
            unique_starters_ratio,
            score: cap_score(score),
            reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_and_word_counts() {
        let signals = AiTextSignals::analyze("One two three. Four five! Six?");
        assert_eq!(signals.word_count, 6);
        assert_eq!(signals.sentence_count, 3);
        assert_eq!(signals.avg_sentence_len, 2.0);
        assert_eq!(signals.unique_starters_ratio, 1.0);
    }

    #[test]
    fn test_typical_phrase() {
        let signals = AiTextSignals::analyze(
            "It is fine. I would recommend it to everyone who needs a lamp.",
        );
        assert!(signals.has_typical_phrase);
        assert!(
            signals
                .reasons
                .contains(&"Stock recommendation phrasing".to_string())
        );
    }

    #[test]
    fn test_balanced_structure() {
        let signals =
            AiTextSignals::analyze("It has some pros and cons. The screen is dim at night.");
        assert!(signals.has_balanced_structure);
    }

    #[test]
    fn test_adjective_ratio() {
        let signals = AiTextSignals::analyze("Great, great, amazing and fantastic stuff.");
        assert!(signals.adjective_ratio > ADJECTIVE_RATIO_LIMIT);
        assert_eq!(signals.sentence_count, 1);
        // single sentence + adjectives
        assert!((signals.score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_repetitive_openers() {
        let signals = AiTextSignals::analyze("It works. It ships. It lasts. It charges.");
        assert_eq!(signals.unique_starters_ratio, 0.25);
        assert!(
            signals
                .reasons
                .contains(&"Repetitive sentence openers".to_string())
        );
    }

    #[test]
    fn test_empty_text() {
        let signals = AiTextSignals::analyze("");
        assert_eq!(signals.word_count, 0);
        assert_eq!(signals.sentence_count, 0);
        assert_eq!(signals.avg_word_len, 0.0);
        assert_eq!(signals.score, 0.0);
        assert!(signals.reasons.is_empty());
    }

    #[test]
    fn test_score_is_capped() {
        let text = "In conclusion it has pros and great cons. ".repeat(12);
        let signals = AiTextSignals::analyze(&text);
        assert!(signals.score <= 0.95);
    }
}
