//! Aggregation layer.
//!
//! This module reduces a review batch to its authenticity summary:
//! - Original rating over every review
//! - Real rating over genuine reviews only
//! - Fake/genuine counts
//! - Per-module score rollups (via `scoring`)
//!
//! The aggregator takes records from a review source and produces the
//! summary consumed by the output layer. It performs no I/O.

pub mod collector;
pub mod summary;

pub use crate::scoring::{ModuleRollup, ModuleScores, TrustLevel};

pub use collector::ReviewCollector;
pub use summary::{
    AnalysisSummary, SummaryBuilder, count_fake, original_rating, real_rating, round_for_display,
};
