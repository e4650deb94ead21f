//! Configuration type definitions.

use crate::cli::OutputFormat;
use crate::scoring::{DEFAULT_FAKE_ALERT_THRESHOLD, DEFAULT_MODULE_ALERT_SCORE};
use crate::view::{ResultTab, ReviewFilter};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::ConfigError;

/// Main configuration structure for deceptiscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alert thresholds and naming.
    pub analysis: AnalysisConfig,
    /// Default report settings.
    pub output: OutputConfig,
    /// Where reviews come from.
    pub source: SourceConfig,
}

impl Config {
    /// Reject values outside their meaningful range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.analysis.fake_alert_threshold;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::InvalidValue {
                key: "analysis.fake_alert_threshold".to_string(),
                message: format!("{} is not a percentage between 0 and 100", threshold),
            });
        }
        if self.analysis.module_alert_score > 100 {
            return Err(ConfigError::InvalidValue {
                key: "analysis.module_alert_score".to_string(),
                message: format!("{} is above 100", self.analysis.module_alert_score),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fake review share (percent) above which the alert is raised.
    pub fake_alert_threshold: f64,
    /// Module score above which a module is highlighted.
    pub module_alert_score: u8,
    /// Product name shown instead of the one the source reports.
    pub product_name: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            fake_alert_threshold: DEFAULT_FAKE_ALERT_THRESHOLD,
            module_alert_score: DEFAULT_MODULE_ALERT_SCORE,
            product_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub filter: ReviewFilter,
    /// Single tab to render; all tabs when unset.
    pub tab: Option<ResultTab>,
    /// Prepend a trust badge to Markdown reports.
    pub badge: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON review file used instead of the built-in demo data.
    pub reviews_file: Option<PathBuf>,
}
