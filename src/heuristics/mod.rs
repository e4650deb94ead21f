//! Rule-based review text signals.
//!
//! Each signal family scores a single review text in [0, 0.95] from fixed
//! word lists and surface features, and explains the score with short
//! reasons. No trained model is involved; the same text always yields the
//! same signals.
//!
//! ## Families
//! - `stylometry`: superlatives, missing detail, exclamation marks
//! - `sentiment`: lexicon sentiment, emotions, rating mismatch
//! - `ai_text`: sentence structure and stock phrasing

pub mod ai_text;
pub mod sentiment;
pub mod stylometry;

pub use ai_text::AiTextSignals;
pub use sentiment::SentimentSignals;
pub use stylometry::StylometrySignals;

use serde::{Deserialize, Serialize};

/// Score above which a text counts as suspicious.
pub const SUSPICION_THRESHOLD: f64 = 0.7;
const MAX_SIGNAL_SCORE: f64 = 0.95;

pub(crate) fn cap_score(score: f64) -> f64 {
    score.min(MAX_SIGNAL_SCORE)
}

/// All signal families for one review text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSignals {
    pub stylometry: StylometrySignals,
    pub sentiment: SentimentSignals,
    pub ai_text: AiTextSignals,
}

impl TextSignals {
    pub fn analyze(text: &str, rating: Option<u8>) -> Self {
        Self {
            stylometry: StylometrySignals::analyze(text),
            sentiment: SentimentSignals::analyze(text, rating),
            ai_text: AiTextSignals::analyze(text),
        }
    }

    /// Highest score across the families.
    pub fn suspicion(&self) -> f64 {
        self.stylometry
            .score
            .max(self.sentiment.score)
            .max(self.ai_text.score)
    }

    pub fn is_suspicious(&self) -> bool {
        self.suspicion() > SUSPICION_THRESHOLD
    }

    /// Reasons from every family, deduplicated, in family order.
    pub fn reasons(&self) -> Vec<&str> {
        let mut reasons: Vec<&str> = Vec::new();
        for reason in self
            .stylometry
            .reasons
            .iter()
            .chain(&self.sentiment.reasons)
            .chain(&self.ai_text.reasons)
        {
            if !reasons.contains(&reason.as_str()) {
                reasons.push(reason);
            }
        }
        reasons
    }
}
