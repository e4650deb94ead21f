use crate::review::Review;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which reviews the review list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewFilter {
    #[default]
    All,
    Genuine,
    Fake,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Genuine => review.is_genuine(),
            ReviewFilter::Fake => review.is_fake,
        }
    }

    /// Reviews passing the filter, in input order.
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        reviews.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn count(&self, reviews: &[Review]) -> usize {
        reviews.iter().filter(|r| self.matches(r)).count()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewFilter::All => "All Reviews",
            ReviewFilter::Genuine => "Genuine",
            ReviewFilter::Fake => "Fake",
        }
    }

    pub fn all() -> [ReviewFilter; 3] {
        [ReviewFilter::All, ReviewFilter::Genuine, ReviewFilter::Fake]
    }
}

/// Result page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultTab {
    Overview,
    Reviews,
    Modules,
    Insights,
}

impl ResultTab {
    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Overview => "Overview",
            ResultTab::Reviews => "Reviews",
            ResultTab::Modules => "Analysis Modules",
            ResultTab::Insights => "Insights",
        }
    }

    pub fn all() -> [ResultTab; 4] {
        [
            ResultTab::Overview,
            ResultTab::Reviews,
            ResultTab::Modules,
            ResultTab::Insights,
        ]
    }
}
