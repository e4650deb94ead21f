//! Built-in demo data set.
//!
//! Eight reviews for a smart-home product, half of them fake, plus the five
//! analysis modules that flagged them. Every analysis served without a
//! review file uses this batch.

use super::{ReviewSource, SourceBatch, SourceError};
use crate::review::{AnalysisModule, Review};
use crate::types::{ProductUrl, ReviewId};
use chrono::NaiveDate;

pub const FIXTURE_PRODUCT_NAME: &str = "Smart Home Assistant Pro";

/// Review source backed by the built-in demo data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }
}

impl ReviewSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch(&self, _url: &ProductUrl) -> Result<SourceBatch, SourceError> {
        Ok(fixture_batch())
    }
}

/// The complete demo batch.
pub fn fixture_batch() -> SourceBatch {
    SourceBatch::new(FIXTURE_PRODUCT_NAME, fixture_reviews(), fixture_modules())
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    text: &str,
    rating: u8,
    author: &str,
    (year, month, day): (i32, u32, u32),
    verified: bool,
    fake_score: f64,
    fake_reasons: &[&str],
) -> Review {
    Review {
        id: ReviewId::new(id),
        text: text.to_string(),
        rating,
        author: author.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        verified,
        is_fake: !fake_reasons.is_empty(),
        fake_score,
        fake_reasons: fake_reasons.iter().map(|s| s.to_string()).collect(),
    }
}

fn module(
    name: &str,
    description: &str,
    score: u8,
    flagged: &[&str],
    insights: &[&str],
) -> AnalysisModule {
    AnalysisModule {
        name: name.to_string(),
        description: description.to_string(),
        score,
        flagged_reviews: flagged.iter().map(|&id| ReviewId::new(id)).collect(),
        insights: insights.iter().map(|s| s.to_string()).collect(),
    }
}

/// The eight demo reviews, in display order.
pub fn fixture_reviews() -> Vec<Review> {
    vec![
        review(
            "r1",
            "This product is absolutely amazing! I've been using it for a week and it has completely changed my life. I would recommend it to everyone!",
            5,
            "JohnDoe123",
            (2023, 12, 15),
            true,
            0.12,
            &[],
        ),
        review(
            "r2",
            "I cannot believe how incredible this product is. It's the best purchase I've ever made. Everyone needs to buy this right now!",
            5,
            "ReviewMaster42",
            (2023, 12, 10),
            false,
            0.86,
            &["Excessive enthusiasm", "Generic praise", "No specific details"],
        ),
        review(
            "r3",
            "The product works well for what I need. Battery life is good and the build quality is decent. Would have given 5 stars but the app is a bit buggy.",
            4,
            "TechUser2022",
            (2023, 11, 28),
            true,
            0.08,
            &[],
        ),
        review(
            "r4",
            "Absolutely terrible product. Broke after one day. Don't waste your money!",
            1,
            "AngryCustomer99",
            (2023, 12, 5),
            false,
            0.79,
            &["Extreme negativity", "No specific details", "New account"],
        ),
        review(
            "r5",
            "I've been using this product for about a month now. It has some pros and cons. The interface is intuitive and the performance is good, but I've noticed it gets hot when used for extended periods. Overall satisfied with the purchase.",
            4,
            "RealisticReviewer",
            (2023, 11, 15),
            true,
            0.05,
            &[],
        ),
        review(
            "r6",
            "This product is amazing! I've been using it for a week and it has completely changed my life. I would recommend it to everyone!",
            5,
            "SuspiciousUser123",
            (2023, 12, 14),
            false,
            0.92,
            &["Duplicate content", "Similar to other reviews", "New account"],
        ),
        review(
            "r7",
            "Not worth the money. There are better alternatives available for less.",
            2,
            "ValueSeeker",
            (2023, 10, 30),
            true,
            0.15,
            &[],
        ),
        review(
            "r8",
            "I bought this product yesterday and I'm already in love with it! It's perfect in every way and worth every penny! Life-changing purchase!",
            5,
            "NewAccount2023",
            (2023, 12, 12),
            false,
            0.88,
            &["Excessive enthusiasm", "New account", "No specific details"],
        ),
    ]
}

/// The five demo analysis modules.
pub fn fixture_modules() -> Vec<AnalysisModule> {
    vec![
        module(
            "Language Stylometry",
            "Detects unnatural and robotic writing styles",
            78,
            &["r2", "r6", "r8"],
            &[
                "3 reviews showed patterns consistent with AI-generated text",
                "Excessive use of superlatives detected in multiple reviews",
                "Lack of specific product details in flagged reviews",
            ],
        ),
        module(
            "Sentiment & Emotion Analysis",
            "Identifies reviews lacking genuine sentiment or emotional tone",
            82,
            &["r2", "r4", "r8"],
            &[
                "Extreme sentiment without supporting details detected",
                "Emotional language patterns inconsistent with genuine reviews",
                "Lack of nuanced emotional expression in flagged reviews",
            ],
        ),
        module(
            "GAN-Based Text Detection",
            "Detects AI-generated review content",
            91,
            &["r2", "r6", "r8"],
            &[
                "High probability of AI generation in 3 reviews",
                "Text patterns match known AI writing styles",
                "Lack of human linguistic variations in flagged content",
            ],
        ),
        module(
            "Cross-Platform Review Matching",
            "Spots duplicated reviews across other e-commerce sites",
            65,
            &["r6"],
            &[
                "1 review found duplicated across multiple platforms",
                "Similar review patterns detected on competitor products",
                "Review text shows minimal customization between platforms",
            ],
        ),
        module(
            "Reviewer Behavior Analysis",
            "Detects suspicious users and spam-bots",
            87,
            &["r2", "r4", "r6", "r8"],
            &[
                "4 reviewers show suspicious activity patterns",
                "Multiple 5-star reviews from new accounts detected",
                "Unusual reviewing frequency detected in flagged accounts",
            ],
        ),
    ]
}
