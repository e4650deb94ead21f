use crate::config::ConfigError;
use crate::source::SourceError;
use crate::types::UrlValidationError;
use crate::view::PreferenceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Please enter a product URL")]
    EmptyUrl,

    #[error("Please enter a valid URL")]
    InvalidUrl { input: String, reason: String },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output to {path}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<UrlValidationError> for AnalysisError {
    fn from(err: UrlValidationError) -> Self {
        match err {
            UrlValidationError::Empty => AnalysisError::EmptyUrl,
            UrlValidationError::Invalid { input, reason } => {
                AnalysisError::InvalidUrl { input, reason }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
