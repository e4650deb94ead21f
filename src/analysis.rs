//! Request orchestration: validate a product URL, fetch its reviews, and
//! assemble the report.

use crate::aggregator::{AnalysisSummary, ModuleScores, ReviewCollector, TrustLevel};
use crate::config::Config;
use crate::error::Result;
use crate::review::{AnalysisModule, Review};
use crate::scoring::{
    DEFAULT_FAKE_ALERT_THRESHOLD, DEFAULT_MODULE_ALERT_SCORE, fake_percentage, rating_inflation,
};
use crate::source::ReviewSource;
use crate::types::{AnalysisId, ProductUrl};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub fake_alert_threshold: f64,
    pub module_alert_score: u8,
    pub product_name: Option<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            fake_alert_threshold: DEFAULT_FAKE_ALERT_THRESHOLD,
            module_alert_score: DEFAULT_MODULE_ALERT_SCORE,
            product_name: None,
        }
    }
}

impl From<&Config> for AnalysisSettings {
    fn from(config: &Config) -> Self {
        Self {
            fake_alert_threshold: config.analysis.fake_alert_threshold,
            module_alert_score: config.analysis.module_alert_score,
            product_name: config.analysis.product_name.clone(),
        }
    }
}

/// Result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: AnalysisId,
    pub url: ProductUrl,
    pub product_name: String,
    pub summary: AnalysisSummary,
    pub module_scores: ModuleScores,
    pub trust_level: TrustLevel,
    pub fake_percentage: f64,
    /// Fake share above which the alert is raised, for display.
    pub fake_alert_threshold: f64,
    /// Review counts per star rating, 1 through 5.
    pub rating_histogram: [usize; 5],
    pub reviews: Vec<Review>,
    pub modules: Vec<AnalysisModule>,
    /// RFC 3339, UTC.
    pub analysis_date: String,
}

impl AnalysisReport {
    pub fn rating_inflation(&self) -> f64 {
        rating_inflation(&self.summary)
    }

    pub fn is_alert(&self) -> bool {
        self.trust_level.is_alert()
    }

    /// Insights of every module, in module order.
    pub fn insights(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().flat_map(|m| {
            m.insights
                .iter()
                .map(move |insight| (m.name.as_str(), insight.as_str()))
        })
    }
}

pub struct Analyzer<S> {
    source: S,
    settings: AnalysisSettings,
}

impl<S: ReviewSource> Analyzer<S> {
    pub fn new(source: S, settings: AnalysisSettings) -> Self {
        Self { source, settings }
    }

    /// Validate `raw_url`, fetch its reviews and build the report.
    pub fn analyze(&self, raw_url: &str) -> Result<AnalysisReport> {
        let url = ProductUrl::parse(raw_url)?;
        let id = AnalysisId::generate();
        info!(id = %id.short(), url = %url, source = self.source.name(), "Starting analysis");

        let batch = self.source.fetch(&url)?;
        let product_name = self
            .settings
            .product_name
            .clone()
            .unwrap_or(batch.product_name);

        let mut collector = ReviewCollector::new();
        collector.add_all(batch.reviews);
        if collector.is_empty() {
            warn!(id = %id.short(), "Source returned no reviews");
        }
        let summary = collector.summary();
        let rating_histogram = collector.rating_histogram();
        let total = collector.total();
        let reviews = collector.into_reviews();

        let module_scores =
            ModuleScores::from_modules(&batch.modules, &reviews, self.settings.module_alert_score);
        let fake_percentage = fake_percentage(&summary);
        let trust_level =
            TrustLevel::from_fake_percentage(fake_percentage, self.settings.fake_alert_threshold);

        debug!(
            total,
            fake = summary.fake_review_count,
            modules = batch.modules.len(),
            consensus = module_scores.consensus.len(),
            "Aggregated reviews"
        );
        info!(
            id = %id.short(),
            trust = %trust_level,
            original = summary.display_original_rating(),
            real = summary.display_real_rating(),
            "Analysis complete"
        );

        Ok(AnalysisReport {
            id,
            url,
            product_name,
            summary,
            module_scores,
            trust_level,
            fake_percentage,
            fake_alert_threshold: self.settings.fake_alert_threshold,
            rating_histogram,
            reviews,
            modules: batch.modules,
            analysis_date: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}
