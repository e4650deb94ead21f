//! Review collector for grouping a source batch.

use crate::aggregator::summary::{AnalysisSummary, SummaryBuilder};
use crate::review::{MAX_RATING, MIN_RATING, Review};
use std::collections::BTreeMap;

/// Collects reviews and indexes them by star rating.
#[derive(Debug, Default)]
pub struct ReviewCollector {
    reviews: Vec<Review>,
    by_rating: BTreeMap<u8, Vec<usize>>,
}

impl ReviewCollector {
    /// Create a new review collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a review to the collector.
    pub fn add(&mut self, review: Review) {
        let index = self.reviews.len();
        self.by_rating.entry(review.rating).or_default().push(index);

        self.reviews.push(review);
    }

    /// Add multiple reviews.
    pub fn add_all(&mut self, reviews: impl IntoIterator<Item = Review>) {
        for review in reviews {
            self.add(review);
        }
    }

    /// Count of reviews per star, index 0 holding one-star reviews.
    pub fn rating_histogram(&self) -> [usize; MAX_RATING as usize] {
        let mut histogram = [0usize; MAX_RATING as usize];
        for (rating, indices) in &self.by_rating {
            if (MIN_RATING..=MAX_RATING).contains(rating) {
                histogram[(*rating - MIN_RATING) as usize] = indices.len();
            }
        }
        histogram
    }

    /// Get the total number of reviews.
    pub fn total(&self) -> usize {
        self.reviews.len()
    }

    /// Check if there are any reviews.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Summarize the collected reviews.
    pub fn summary(&self) -> AnalysisSummary {
        SummaryBuilder::new().with_reviews(&self.reviews).build()
    }

    /// Consume the collector and return all reviews.
    pub fn into_reviews(self) -> Vec<Review> {
        self.reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixture::fixture_reviews;
    use crate::test_utils::fixtures::create_review;

    #[test]
    fn test_collector_add() {
        let mut collector = ReviewCollector::new();
        collector.add(create_review("r1", 5, false));
        collector.add(create_review("r2", 5, true));

        assert_eq!(collector.total(), 2);
        assert_eq!(collector.rating_histogram(), [0, 0, 0, 0, 2]);
    }

    #[test]
    fn test_collector_rating_histogram() {
        let mut collector = ReviewCollector::new();
        collector.add_all(fixture_reviews());
        assert_eq!(collector.rating_histogram(), [1, 1, 0, 2, 4]);
    }

    #[test]
    fn test_collector_summary_matches_aggregate() {
        let reviews = fixture_reviews();
        let mut collector = ReviewCollector::new();
        collector.add_all(reviews.clone());
        assert_eq!(collector.summary(), AnalysisSummary::from_reviews(&reviews));
    }

    #[test]
    fn test_collector_is_empty() {
        let collector = ReviewCollector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.rating_histogram(), [0; 5]);

        let mut collector2 = ReviewCollector::new();
        collector2.add(create_review("r1", 3, false));
        assert!(!collector2.is_empty());
    }

    #[test]
    fn test_collector_into_reviews_keeps_order() {
        let mut collector = ReviewCollector::new();
        collector.add(create_review("b", 2, true));
        collector.add(create_review("a", 4, false));

        let reviews = collector.into_reviews();
        assert_eq!(reviews[0].id.as_str(), "b");
        assert_eq!(reviews[1].id.as_str(), "a");
    }

    #[test]
    fn test_collector_default() {
        let collector = ReviewCollector::default();
        assert!(collector.is_empty());
    }
}
