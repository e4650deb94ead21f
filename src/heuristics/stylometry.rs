//! Writing-style signals: superlatives, missing detail, exclamation spam.

use serde::{Deserialize, Serialize};

use super::{SUSPICION_THRESHOLD, cap_score};

const SUPERLATIVES: &[&str] = &[
    "best",
    "amazing",
    "incredible",
    "perfect",
    "awesome",
    "excellent",
];

const DETAIL_WORDS: &[&str] = &[
    "feature",
    "battery",
    "design",
    "quality",
    "price",
    "performance",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylometrySignals {
    pub word_count: usize,
    /// Number of distinct superlatives present
    pub superlative_count: usize,
    pub exclamation_count: usize,
    pub has_specific_details: bool,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl StylometrySignals {
    pub fn analyze(text: &str) -> Self {
        let lower = text.to_lowercase();
        let word_count = text.split_whitespace().count();
        let superlative_count = SUPERLATIVES.iter().filter(|w| lower.contains(*w)).count();
        let exclamation_count = text.matches('!').count();
        let has_specific_details = DETAIL_WORDS.iter().any(|w| lower.contains(*w));
        let generic_praise = lower.contains("product") && !has_specific_details;

        let mut score: f64 = 0.0;
        if superlative_count >= 2 && word_count < 50 {
            score += 0.35;
        }
        if word_count < 20 {
            score += 0.25;
        } else if generic_praise {
            score += 0.2;
        }
        if exclamation_count > 2 {
            score += 0.2;
        }
        // short gushing text
        if lower.contains("amazing") && lower.contains("best") && text.chars().count() < 100 {
            score = score.max(0.8);
        }
        let score = cap_score(score);

        let mut reasons = Vec::new();
        if score >= SUSPICION_THRESHOLD {
            if superlative_count >= 2 && word_count < 50 {
                reasons.push("Excessive superlatives".to_string());
            }
            if word_count < 20 {
                reasons.push("Too short, lacks details".to_string());
            } else if generic_praise {
                reasons.push("Generic praise without specific details".to_string());
            }
            if exclamation_count > 2 {
                reasons.push("Excessive exclamation marks".to_string());
            }
        }

        Self {
            word_count,
            superlative_count,
            exclamation_count,
            has_specific_details,
            score,
            reasons,
        }
    }
}
