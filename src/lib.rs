pub mod aggregator;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod heuristics;
pub mod reporter;
pub mod review;
pub mod scoring;
pub mod source;
pub mod types;
pub mod view;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{AnalysisSummary, ReviewCollector, SummaryBuilder};
pub use analysis::{AnalysisReport, AnalysisSettings, Analyzer};
pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, ConfigError};
pub use error::{AnalysisError, Result};
pub use heuristics::TextSignals;
pub use reporter::{
    Reporter, html::HtmlReporter, json::JsonReporter, markdown::MarkdownReporter,
    terminal::TerminalReporter,
};
pub use review::{AnalysisModule, Review};
pub use scoring::{ModuleScores, TrustLevel};
pub use source::{FixtureSource, JsonFileSource, ReviewSource, SourceError};
pub use types::{AnalysisId, ProductUrl, ReviewId};
pub use view::{ResultTab, ReviewFilter, ThemePreference, ViewState};
