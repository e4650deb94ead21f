//! Review and analysis module records.

mod types;

pub use types::{AnalysisModule, MAX_RATING, MIN_RATING, Review};
