//! Configuration template generation.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::types::Config;

impl Config {
    /// Generate a YAML configuration template with comments.
    pub fn generate_template() -> String {
        r#"# deceptiscan Configuration File
# Place this file as .deceptiscan.yaml in your working directory

# =============================================================================
# ANALYSIS
# =============================================================================
analysis:
  # Fake review share (percent) above which the alert is raised.
  # With --strict, exceeding it also makes the exit code 1.
  fake_alert_threshold: 30.0

  # Module score (0-100) above which a module is highlighted
  module_alert_score: 75

  # Product name shown instead of the one the review source reports
  # product_name: "Smart Home Assistant Pro"

# =============================================================================
# OUTPUT
# =============================================================================
output:
  # Report format: terminal, json, markdown, html
  format: terminal

  # Reviews listed in the report: all, genuine, fake
  filter: all

  # Render a single section: overview, reviews, modules, insights
  # tab: overview

  # Prepend a trust badge to Markdown reports
  badge: false

# =============================================================================
# SOURCE
# =============================================================================
source:
  # JSON review file used instead of the built-in demo data.
  # Either {"product_name": ..., "reviews": [...], "modules": [...]}
  # or a bare array of reviews.
  # reviews_file: ./reviews.json
"#
        .to_string()
    }

    /// Write the template to `path`, or to `path/.deceptiscan.yaml` when
    /// `path` is a directory. Existing files are never overwritten.
    pub fn write_template(path: &Path) -> Result<PathBuf, ConfigError> {
        let output_path = if path.is_dir() {
            path.join(".deceptiscan.yaml")
        } else {
            path.to_path_buf()
        };

        if output_path.exists() {
            return Err(ConfigError::AlreadyExists(
                output_path.display().to_string(),
            ));
        }

        fs::write(&output_path, Self::generate_template()).map_err(|e| ConfigError::WriteFile {
            path: output_path.display().to_string(),
            source: e,
        })?;
        Ok(output_path)
    }
}
