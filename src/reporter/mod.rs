//! Report rendering.
//!
//! Every reporter turns an [`AnalysisReport`] into a string. The copy that
//! several formats share (alert text, inflation note, insight lists) lives
//! here so the formats cannot drift apart.

pub mod html;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::aggregator::round_for_display;
use crate::analysis::AnalysisReport;
use crate::cli::OutputFormat;
use crate::view::ViewState;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use terminal::TerminalReporter;

pub trait Reporter {
    fn report(&self, report: &AnalysisReport) -> String;
}

/// Build the reporter for an output format.
pub fn reporter_for(format: OutputFormat, view: ViewState) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalReporter::new(view)),
        OutputFormat::Json => Box::new(JsonReporter::new()),
        OutputFormat::Markdown => Box::new(MarkdownReporter::new(view)),
        OutputFormat::Html => Box::new(HtmlReporter::new(view)),
    }
}

pub const FAKE_REVIEW_PATTERNS: &[&str] = &[
    "Excessive use of superlatives and generic praise",
    "Lack of specific details about product usage",
    "Reviews from new accounts with limited history",
    "Similar or duplicate content across multiple reviews",
    "Extreme ratings (1 or 5 stars) without substantive feedback",
];

pub const RECOMMENDATIONS: &[&str] = &[
    "Focus on reviews with verified purchases",
    "Look for detailed reviews that mention specific use cases",
    "Consider reviews that mention both pros and cons",
    "Pay attention to reviews with photos or videos of the product in use",
    "Check for reviews from established accounts with review history",
];

pub const NO_MATCHING_REVIEWS: &str = "No reviews match the selected filter.";

pub fn alert_title(report: &AnalysisReport) -> &'static str {
    if report.is_alert() {
        "High number of fake reviews detected!"
    } else {
        "Analysis complete"
    }
}

pub fn alert_message(report: &AnalysisReport) -> String {
    if report.is_alert() {
        format!(
            "We found that {:.1}% of reviews for this product may be fake.",
            report.fake_percentage
        )
    } else {
        format!(
            "We found that {:.1}% of reviews for this product appear to be genuine.",
            genuine_percentage(report)
        )
    }
}

pub fn genuine_percentage(report: &AnalysisReport) -> f64 {
    if report.summary.total_reviews == 0 {
        0.0
    } else {
        100.0 - report.fake_percentage
    }
}

/// Difference between the displayed ratings, as shown to the user.
pub fn displayed_inflation(report: &AnalysisReport) -> f64 {
    round_for_display(
        report.summary.display_original_rating() - report.summary.display_real_rating(),
    )
}

pub fn inflation_message(report: &AnalysisReport) -> String {
    let inflation = displayed_inflation(report);
    if inflation > 0.0 {
        format!("Rating inflated by {:.1} stars due to fake reviews", inflation)
    } else {
        "Rating is accurate and reflects genuine customer experiences".to_string()
    }
}

pub fn review_quality_message(report: &AnalysisReport) -> &'static str {
    if report.is_alert() {
        "This product has a concerning number of fake reviews that artificially inflate its rating."
    } else {
        "This product has mostly genuine reviews that accurately reflect customer experiences."
    }
}

/// Five-star string: full stars for the whole part, a half star for any
/// remaining fraction, empty stars for the rest.
pub fn star_string(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = usize::from(rating > rating.floor());
    format!(
        "{}{}{}",
        "★".repeat(full),
        "⯪".repeat(half),
        "☆".repeat(5 - full - half)
    )
}
