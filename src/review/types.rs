use crate::types::ReviewId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// A single user-submitted product review.
///
/// Records are supplied wholesale by a review source and are never mutated
/// by the aggregator. `is_fake` is assigned upstream; `fake_score` is carried
/// for display only and does not feed any aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub text: String,
    pub rating: u8,
    pub author: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub verified: bool,
    #[serde(alias = "isFake")]
    pub is_fake: bool,
    #[serde(default, alias = "fakeScore")]
    pub fake_score: f64,
    #[serde(default, alias = "fakeReasons")]
    pub fake_reasons: Vec<String>,
}

impl Review {
    pub fn is_genuine(&self) -> bool {
        !self.is_fake
    }

    /// Whether the rating falls in the accepted star range.
    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    /// Whether the fake score is a finite probability.
    pub fn has_valid_fake_score(&self) -> bool {
        self.fake_score.is_finite() && (0.0..=1.0).contains(&self.fake_score)
    }

    /// Fake score as a whole percentage, for display.
    pub fn fake_score_percent(&self) -> u32 {
        (self.fake_score * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

/// A named scoring dimension (stylometry, sentiment, ...) with its
/// suspicion score and the reviews it flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisModule {
    pub name: String,
    pub description: String,
    /// Module-specific suspicion score, 0-100.
    pub score: u8,
    #[serde(default, alias = "flaggedReviews")]
    pub flagged_reviews: Vec<ReviewId>,
    #[serde(default)]
    pub insights: Vec<String>,
}

impl AnalysisModule {
    /// Leading insight, shown in overview cards.
    pub fn headline(&self) -> Option<&str> {
        self.insights.first().map(String::as_str)
    }
}
