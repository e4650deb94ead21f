//! Type-safe wrapper types for improved compile-time guarantees.
//!
//! This module provides NewType pattern implementations to prevent
//! primitive type misuse and improve API clarity.

mod newtypes;

pub use newtypes::{AnalysisId, ProductUrl, ReviewId, UrlValidationError};
