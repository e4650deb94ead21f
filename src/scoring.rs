use crate::aggregator::AnalysisSummary;
use crate::review::{AnalysisModule, Review};
use crate::types::ReviewId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fake share (percent) above which a review set is flagged as suspicious
pub const DEFAULT_FAKE_ALERT_THRESHOLD: f64 = 30.0;
/// Module score above which a module is highlighted
pub const DEFAULT_MODULE_ALERT_SCORE: u8 = 75;
const MAX_MODULE_SCORE: u8 = 100;

/// Trust level of a review set, based on its fake share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    Trusted,
    MostlyGenuine,
    Suspicious,
}

impl TrustLevel {
    pub fn from_fake_percentage(percentage: f64, threshold: f64) -> Self {
        if percentage <= 0.0 {
            TrustLevel::Trusted
        } else if percentage > threshold {
            TrustLevel::Suspicious
        } else {
            TrustLevel::MostlyGenuine
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::Trusted => "TRUSTED",
            TrustLevel::MostlyGenuine => "MOSTLY GENUINE",
            TrustLevel::Suspicious => "SUSPICIOUS",
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, TrustLevel::Suspicious)
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Share of fake reviews in percent. Zero for an empty set.
pub fn fake_percentage(summary: &AnalysisSummary) -> f64 {
    if summary.total_reviews == 0 {
        0.0
    } else {
        summary.fake_review_count as f64 / summary.total_reviews as f64 * 100.0
    }
}

/// How far fake reviews pushed the rating up (negative when they dragged it down).
pub fn rating_inflation(summary: &AnalysisSummary) -> f64 {
    summary.original_rating - summary.real_rating
}

/// Rollup of a single analysis module against the review set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRollup {
    pub name: String,
    pub score: u8,
    pub flagged_count: usize,
    /// Flagged reviews that ended up classified as genuine
    pub flagged_genuine: usize,
    pub alert: bool,
}

/// Score rollups across all modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleScores {
    pub modules: Vec<ModuleRollup>,
    /// Mean module score (0-100)
    pub average_score: f64,
    pub max_score: u8,
    /// Reviews flagged by a strict majority of modules
    pub consensus: Vec<ReviewId>,
}

impl ModuleScores {
    /// Roll up module scores against the reviews they refer to
    pub fn from_modules(modules: &[AnalysisModule], reviews: &[Review], alert_score: u8) -> Self {
        let genuine: HashMap<&ReviewId, bool> =
            reviews.iter().map(|r| (&r.id, r.is_genuine())).collect();

        let rollups: Vec<ModuleRollup> = modules
            .iter()
            .map(|module| {
                let flagged_genuine = module
                    .flagged_reviews
                    .iter()
                    .filter(|id| genuine.get(id).copied().unwrap_or(false))
                    .count();
                let score = module.score.min(MAX_MODULE_SCORE);

                ModuleRollup {
                    name: module.name.clone(),
                    score,
                    flagged_count: module.flagged_reviews.len(),
                    flagged_genuine,
                    alert: score > alert_score,
                }
            })
            .collect();

        let average_score = if rollups.is_empty() {
            0.0
        } else {
            rollups.iter().map(|r| f64::from(r.score)).sum::<f64>() / rollups.len() as f64
        };
        let max_score = rollups.iter().map(|r| r.score).max().unwrap_or(0);

        ModuleScores {
            modules: rollups,
            average_score,
            max_score,
            consensus: consensus(modules),
        }
    }

    pub fn alert_count(&self) -> usize {
        self.modules.iter().filter(|m| m.alert).count()
    }
}

/// Review ids flagged by more than half of the modules, first-seen order
fn consensus(modules: &[AnalysisModule]) -> Vec<ReviewId> {
    let mut order: Vec<&ReviewId> = Vec::new();
    let mut votes: HashMap<&ReviewId, usize> = HashMap::new();

    for module in modules {
        let mut seen_in_module: Vec<&ReviewId> = Vec::new();
        for id in &module.flagged_reviews {
            if seen_in_module.contains(&id) {
                continue;
            }
            seen_in_module.push(id);

            let count = votes.entry(id).or_insert(0);
            if *count == 0 {
                order.push(id);
            }
            *count += 1;
        }
    }

    order
        .into_iter()
        .filter(|id| votes.get(id).copied().unwrap_or(0) * 2 > modules.len())
        .cloned()
        .collect()
}

/// Generate a visual bar for a score (10 chars wide)
pub fn score_bar(score: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((score / max) * 10.0).round().clamp(0.0, 10.0) as usize
    } else {
        0
    };
    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
