//! Lexicon-based sentiment and emotion signals.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::cap_score;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "love",
    "best",
    "perfect",
    "awesome",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "awful",
    "hate",
    "worst",
    "horrible",
    "disappointing",
];

const EMOTION_LEXICON: &[(&str, &[&str])] = &[
    (
        "joy",
        &["happy", "joy", "delighted", "pleased", "glad", "thrilled", "excited"],
    ),
    (
        "sadness",
        &["sad", "unhappy", "disappointed", "depressed", "miserable", "heartbroken"],
    ),
    (
        "anger",
        &["angry", "furious", "annoyed", "irritated", "frustrated"],
    ),
    (
        "fear",
        &["afraid", "scared", "frightened", "terrified", "worried"],
    ),
    ("surprise", &["surprised", "shocked", "amazed", "astonished"]),
    ("disgust", &["disgusted", "repulsed", "revolted", "dislike"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSignals {
    /// Sentiment in [-1, 1]; 0 when no lexicon word appears
    pub sentiment_score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    /// Emotion name -> matching word count, only emotions that appear
    pub emotions: BTreeMap<String, usize>,
    pub rating_mismatch: bool,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl SentimentSignals {
    pub fn analyze(text: &str, rating: Option<u8>) -> Self {
        let lower = text.to_lowercase();
        let words: Vec<&str> = WORD_PATTERN.find_iter(&lower).map(|m| m.as_str()).collect();
        let word_count = text.split_whitespace().count();

        let positive_count = words.iter().filter(|w| POSITIVE_WORDS.contains(*w)).count();
        let negative_count = words.iter().filter(|w| NEGATIVE_WORDS.contains(*w)).count();
        let total = positive_count + negative_count;
        let sentiment_score = if total > 0 {
            (positive_count as f64 - negative_count as f64) / total as f64
        } else {
            0.0
        };

        let mut emotions = BTreeMap::new();
        for (emotion, lexicon) in EMOTION_LEXICON {
            let count = words.iter().filter(|w| lexicon.contains(*w)).count();
            if count > 0 {
                emotions.insert(emotion.to_string(), count);
            }
        }

        let mut mismatch_severity = 0.0;
        let mut rating_mismatch = false;
        if let Some(rating) = rating {
            let scaled = f64::from(rating) / 5.0;
            if rating >= 4 && sentiment_score < -0.3 {
                rating_mismatch = true;
                mismatch_severity = (sentiment_score + scaled).abs();
            } else if rating <= 2 && sentiment_score > 0.3 {
                rating_mismatch = true;
                mismatch_severity = (sentiment_score - scaled).abs();
            }
        }

        let mut score: f64 = 0.0;
        if sentiment_score.abs() > 0.7 {
            score += 0.3;
        }
        if emotions.len() <= 1 {
            score += 0.2;
        }
        if rating_mismatch {
            score += f64::min(0.4, mismatch_severity);
        }
        let score = cap_score(score);

        let mut reasons = Vec::new();
        if sentiment_score.abs() > 0.7 && word_count < 30 {
            if sentiment_score > 0.0 {
                reasons.push("Extreme positive sentiment without supporting details".to_string());
            } else {
                reasons.push("Extreme negative sentiment without supporting details".to_string());
            }
        }
        if let (true, Some(rating)) = (rating_mismatch, rating) {
            if rating >= 4 {
                reasons.push(format!(
                    "Positive rating ({}★) but negative sentiment in text",
                    rating
                ));
            } else {
                reasons.push(format!(
                    "Negative rating ({}★) but positive sentiment in text",
                    rating
                ));
            }
        }
        if word_count > 50 {
            match emotions.keys().next() {
                None => reasons.push("No emotional language in a long review".to_string()),
                Some(only) if emotions.len() == 1 => {
                    reasons.push(format!("Limited emotional range (only {})", only))
                }
                Some(_) => {}
            }
        }

        Self {
            sentiment_score,
            positive_count,
            negative_count,
            emotions,
            rating_mismatch,
            score,
            reasons,
        }
    }
}
