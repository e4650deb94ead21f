//! Authenticity summary for a set of reviews.
//!
//! Everything here is a pure reduction over the review slice: no I/O, no
//! logging, no hidden state. Ratings keep full precision internally and are
//! rounded to one decimal only when rendered or serialized.

use crate::review::Review;
use serde::{Deserialize, Serialize, Serializer};

/// Mean rating over all reviews, fake and genuine alike. Zero when empty.
pub fn original_rating(reviews: &[Review]) -> f64 {
    mean_rating(reviews.iter())
}

/// Mean rating over genuine reviews only. Zero when none are genuine.
pub fn real_rating(reviews: &[Review]) -> f64 {
    mean_rating(reviews.iter().filter(|r| r.is_genuine()))
}

/// Number of reviews classified as fake.
pub fn count_fake(reviews: &[Review]) -> usize {
    reviews.iter().filter(|r| r.is_fake).count()
}

/// Round to one decimal place for presentation.
pub fn round_for_display(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean_rating<'a>(reviews: impl Iterator<Item = &'a Review>) -> f64 {
    let (sum, count) = reviews.fold((0u64, 0u64), |(sum, count), r| {
        (sum + u64::from(r.rating), count + 1)
    });
    ratio(sum, count)
}

fn ratio(sum: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

fn serialize_display_rating<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_for_display(*value))
}

/// Derived summary of a review set. Recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    #[serde(serialize_with = "serialize_display_rating")]
    pub original_rating: f64,
    #[serde(serialize_with = "serialize_display_rating")]
    pub real_rating: f64,
    pub total_reviews: usize,
    pub fake_review_count: usize,
}

impl AnalysisSummary {
    /// Aggregate a review slice in a single pass.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        SummaryBuilder::new().with_reviews(reviews).build()
    }

    pub fn genuine_review_count(&self) -> usize {
        self.total_reviews.saturating_sub(self.fake_review_count)
    }

    /// Original rating rounded for display.
    pub fn display_original_rating(&self) -> f64 {
        round_for_display(self.original_rating)
    }

    /// Real rating rounded for display.
    pub fn display_real_rating(&self) -> f64 {
        round_for_display(self.real_rating)
    }

    pub fn is_empty(&self) -> bool {
        self.total_reviews == 0
    }
}

/// Builder for creating review summaries.
///
/// Accumulates integer sums so the final means carry full precision.
#[derive(Debug, Default, Clone)]
pub struct SummaryBuilder {
    total: u64,
    fake: u64,
    rating_sum: u64,
    genuine_rating_sum: u64,
}

impl SummaryBuilder {
    /// Create a new summary builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single review.
    pub fn add(&mut self, review: &Review) {
        let rating = u64::from(review.rating);
        self.total += 1;
        self.rating_sum += rating;
        if review.is_fake {
            self.fake += 1;
        } else {
            self.genuine_rating_sum += rating;
        }
    }

    /// Add reviews to the summary.
    pub fn with_reviews<'a>(mut self, reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        for review in reviews {
            self.add(review);
        }
        self
    }

    /// Get the number of reviews added so far.
    pub fn total_reviews(&self) -> usize {
        self.total as usize
    }

    /// Build the summary.
    pub fn build(self) -> AnalysisSummary {
        AnalysisSummary {
            original_rating: ratio(self.rating_sum, self.total),
            real_rating: ratio(self.genuine_rating_sum, self.total - self.fake),
            total_reviews: self.total as usize,
            fake_review_count: self.fake as usize,
        }
    }
}
