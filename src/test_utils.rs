#[cfg(test)]
pub mod fixtures {
    use crate::analysis::{AnalysisReport, AnalysisSettings, Analyzer};
    use crate::review::{AnalysisModule, Review};
    use crate::source::FixtureSource;
    use crate::types::ReviewId;
    use chrono::NaiveDate;

    pub fn create_review(id: &str, rating: u8, is_fake: bool) -> Review {
        Review {
            id: ReviewId::new(id),
            text: "test review".to_string(),
            rating,
            author: "tester".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            verified: !is_fake,
            is_fake,
            fake_score: if is_fake { 0.9 } else { 0.1 },
            fake_reasons: if is_fake {
                vec!["test reason".to_string()]
            } else {
                Vec::new()
            },
        }
    }

    pub fn create_module(name: &str, score: u8, flagged: &[&str]) -> AnalysisModule {
        AnalysisModule {
            name: name.to_string(),
            description: "test module".to_string(),
            score,
            flagged_reviews: flagged.iter().map(|&id| ReviewId::new(id)).collect(),
            insights: vec!["test insight".to_string()],
        }
    }

    /// Report over the built-in demo data with default settings.
    pub fn create_test_report() -> AnalysisReport {
        Analyzer::new(FixtureSource::new(), AnalysisSettings::default())
            .analyze("https://www.example.com/product/123")
            .unwrap()
    }
}
