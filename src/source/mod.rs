//! Review sources.
//!
//! A source supplies the review records and analysis modules for one
//! analysis request. Record validation is the source's job; the aggregator
//! assumes well-formed input.

pub mod fixture;
pub mod json;

use crate::review::{AnalysisModule, Review};
use crate::types::{ProductUrl, ReviewId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub use fixture::FixtureSource;
pub use json::JsonFileSource;

/// Product name used when a source does not know one.
pub const UNKNOWN_PRODUCT: &str = "Unknown product";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read review source: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse review source {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Review {id} has rating {rating}, expected 1-5")]
    RatingOutOfRange { id: String, rating: i64 },

    #[error("Review {id} has fake score {score}, expected 0.0-1.0")]
    FakeScoreOutOfRange { id: String, score: f64 },

    #[error("Duplicate review id: {0}")]
    DuplicateReviewId(String),

    #[error("Module '{module}' has score {score}, expected 0-100")]
    ModuleScoreOutOfRange { module: String, score: u8 },

    #[error("Module '{module}' flags unknown review id: {id}")]
    UnknownFlaggedReview { module: String, id: String },
}

/// Everything a source returns for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceBatch {
    #[serde(default = "default_product_name", alias = "productName")]
    pub product_name: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub modules: Vec<AnalysisModule>,
}

fn default_product_name() -> String {
    UNKNOWN_PRODUCT.to_string()
}

impl SourceBatch {
    pub fn new(
        product_name: impl Into<String>,
        reviews: Vec<Review>,
        modules: Vec<AnalysisModule>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            reviews,
            modules,
        }
    }

    /// Check record invariants: rating range, fake score range, unique ids,
    /// module scores, and that modules only flag known reviews.
    pub fn validate(&self) -> Result<(), SourceError> {
        let mut ids: HashSet<&ReviewId> = HashSet::with_capacity(self.reviews.len());

        for review in &self.reviews {
            if !review.has_valid_rating() {
                return Err(SourceError::RatingOutOfRange {
                    id: review.id.to_string(),
                    rating: i64::from(review.rating),
                });
            }
            if !review.has_valid_fake_score() {
                return Err(SourceError::FakeScoreOutOfRange {
                    id: review.id.to_string(),
                    score: review.fake_score,
                });
            }
            if !ids.insert(&review.id) {
                return Err(SourceError::DuplicateReviewId(review.id.to_string()));
            }
        }

        for module in &self.modules {
            if module.score > 100 {
                return Err(SourceError::ModuleScoreOutOfRange {
                    module: module.name.clone(),
                    score: module.score,
                });
            }
            if let Some(unknown) = module.flagged_reviews.iter().find(|id| !ids.contains(id)) {
                return Err(SourceError::UnknownFlaggedReview {
                    module: module.name.clone(),
                    id: unknown.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Supplies review records for a product.
pub trait ReviewSource {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetch the review batch for a product URL.
    fn fetch(&self, url: &ProductUrl) -> Result<SourceBatch, SourceError>;
}

impl<S: ReviewSource + ?Sized> ReviewSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self, url: &ProductUrl) -> Result<SourceBatch, SourceError> {
        (**self).fetch(url)
    }
}
