//! JSON file review source.
//!
//! Accepts either a full batch object
//! (`{"product_name": .., "reviews": [..], "modules": [..]}`) or a bare
//! array of reviews.

use super::{ReviewSource, SourceBatch, SourceError, UNKNOWN_PRODUCT};
use crate::review::{AnalysisModule, MAX_RATING, MIN_RATING, Review};
use crate::types::{ProductUrl, ReviewId};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Review as written in a file. The rating is read wide so out-of-range
/// values reach validation instead of failing deserialization.
#[derive(Deserialize)]
struct ReviewRecord {
    id: ReviewId,
    text: String,
    rating: i64,
    author: String,
    date: NaiveDate,
    #[serde(default)]
    verified: bool,
    #[serde(alias = "isFake")]
    is_fake: bool,
    #[serde(default, alias = "fakeScore")]
    fake_score: f64,
    #[serde(default, alias = "fakeReasons")]
    fake_reasons: Vec<String>,
}

impl TryFrom<ReviewRecord> for Review {
    type Error = SourceError;

    fn try_from(record: ReviewRecord) -> Result<Self, Self::Error> {
        let rating = u8::try_from(record.rating)
            .ok()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| SourceError::RatingOutOfRange {
                id: record.id.to_string(),
                rating: record.rating,
            })?;

        Ok(Review {
            id: record.id,
            text: record.text,
            rating,
            author: record.author,
            date: record.date,
            verified: record.verified,
            is_fake: record.is_fake,
            fake_score: record.fake_score,
            fake_reasons: record.fake_reasons,
        })
    }
}

#[derive(Deserialize)]
struct BatchRecord {
    #[serde(default = "unknown_product", alias = "productName")]
    product_name: String,
    #[serde(default)]
    reviews: Vec<ReviewRecord>,
    #[serde(default)]
    modules: Vec<AnalysisModule>,
}

fn unknown_product() -> String {
    UNKNOWN_PRODUCT.to_string()
}

/// Review source reading a batch from a local JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate a batch from JSON text.
    pub fn parse(content: &str, origin: &str) -> Result<SourceBatch, SourceError> {
        let parse_error = |e| SourceError::ParseError {
            path: origin.to_string(),
            source: e,
        };

        // Dispatch on the top-level shape so serde reports the real field error
        let record = if content.trim_start().starts_with('[') {
            BatchRecord {
                product_name: unknown_product(),
                reviews: serde_json::from_str(content).map_err(parse_error)?,
                modules: Vec::new(),
            }
        } else {
            serde_json::from_str(content).map_err(parse_error)?
        };

        let reviews = record
            .reviews
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let batch = SourceBatch::new(record.product_name, reviews, record.modules);

        batch.validate()?;
        Ok(batch)
    }
}

impl ReviewSource for JsonFileSource {
    fn name(&self) -> &str {
        "json"
    }

    fn fetch(&self, _url: &ProductUrl) -> Result<SourceBatch, SourceError> {
        let origin = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|e| SourceError::ReadError {
            path: origin.clone(),
            source: e,
        })?;

        let batch = Self::parse(&content, &origin)?;
        debug!(
            path = %origin,
            reviews = batch.reviews.len(),
            modules = batch.modules.len(),
            "Loaded review batch"
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn url() -> ProductUrl {
        ProductUrl::parse("https://www.example.com/product/123").unwrap()
    }

    const BATCH_JSON: &str = r#"{
        "product_name": "Desk Lamp",
        "reviews": [
            {"id": "a", "text": "Bright and sturdy.", "rating": 4, "author": "u1",
             "date": "2024-01-02", "verified": true, "is_fake": false},
            {"id": "b", "text": "BEST LAMP EVER!!!", "rating": 5, "author": "u2",
             "date": "2024-01-03", "isFake": true, "fakeScore": 0.9,
             "fakeReasons": ["Excessive enthusiasm"]}
        ],
        "modules": [
            {"name": "Stylometry", "description": "Style", "score": 70,
             "flaggedReviews": ["b"], "insights": ["1 review flagged"]}
        ]
    }"#;

    #[test]
    fn test_parse_full_batch() {
        let batch = JsonFileSource::parse(BATCH_JSON, "inline").unwrap();
        assert_eq!(batch.product_name, "Desk Lamp");
        assert_eq!(batch.reviews.len(), 2);
        assert_eq!(batch.modules.len(), 1);
        assert!(batch.reviews[1].is_fake);
    }

    #[test]
    fn test_parse_bare_review_array() {
        let json = r#"[
            {"id": "a", "text": "ok", "rating": 3, "author": "u", "date": "2024-02-01", "is_fake": false}
        ]"#;
        let batch = JsonFileSource::parse(json, "inline").unwrap();
        assert_eq!(batch.product_name, UNKNOWN_PRODUCT);
        assert_eq!(batch.reviews.len(), 1);
        assert!(batch.modules.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = JsonFileSource::parse("{not json", "broken.json").unwrap_err();
        assert!(matches!(err, SourceError::ParseError { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_parse_validates_records() {
        let json = r#"[
            {"id": "a", "text": "ok", "rating": 9, "author": "u", "date": "2024-02-01", "is_fake": false}
        ]"#;
        let err = JsonFileSource::parse(json, "inline").unwrap_err();
        assert!(matches!(err, SourceError::RatingOutOfRange { .. }));
    }

    #[test]
    fn test_parse_reports_rating_beyond_u8() {
        let json = r#"[
            {"id": "r1", "text": "ok", "rating": 9000, "author": "u", "date": "2024-02-01", "is_fake": false}
        ]"#;
        let err = JsonFileSource::parse(json, "inline").unwrap_err();
        assert!(matches!(err, SourceError::RatingOutOfRange { rating: 9000, .. }));
        assert_eq!(err.to_string(), "Review r1 has rating 9000, expected 1-5");
    }

    #[test]
    fn test_parse_reports_negative_rating() {
        let json = r#"{"reviews": [
            {"id": "r1", "text": "ok", "rating": -1, "author": "u", "date": "2024-02-01", "is_fake": false}
        ]}"#;
        let err = JsonFileSource::parse(json, "inline").unwrap_err();
        assert!(matches!(err, SourceError::RatingOutOfRange { rating: -1, .. }));
    }

    #[test]
    fn test_parse_batch_missing_field_names_it() {
        let json = r#"{"product_name": "Lamp", "reviews": [
            {"id": "r1", "text": "ok", "rating": 4, "author": "u", "is_fake": false}
        ]}"#;
        let err = JsonFileSource::parse(json, "reviews.json").unwrap_err();
        assert!(matches!(err, SourceError::ParseError { .. }));
        let message = err.to_string();
        assert!(message.contains("reviews.json"));
        assert!(message.contains("missing field `date`"));
    }

    #[test]
    fn test_parse_array_missing_field_names_it() {
        let json = r#"[{"id": "r1", "text": "ok", "rating": 4, "date": "2024-02-01", "is_fake": false}]"#;
        let err = JsonFileSource::parse(json, "inline").unwrap_err();
        assert!(err.to_string().contains("missing field `author`"));
    }

    #[test]
    fn test_fetch_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reviews.json");
        fs::write(&path, BATCH_JSON).unwrap();

        let source = JsonFileSource::new(&path);
        assert_eq!(source.path(), path.as_path());
        let batch = source.fetch(&url()).unwrap();
        assert_eq!(batch.product_name, "Desk Lamp");
        assert_eq!(source.name(), "json");
    }

    #[test]
    fn test_fetch_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));
        let err = source.fetch(&url()).unwrap_err();
        assert!(matches!(err, SourceError::ReadError { .. }));
    }
}
