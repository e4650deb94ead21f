//! Markdown reporter for analysis results
//!
//! Generates a Markdown report suitable for issues, wiki pages and
//! shopping notes.

use crate::aggregator::TrustLevel;
use crate::analysis::AnalysisReport;
use crate::reporter::{
    FAKE_REVIEW_PATTERNS, NO_MATCHING_REVIEWS, RECOMMENDATIONS, Reporter, alert_message,
    alert_title, genuine_percentage, inflation_message, review_quality_message, star_string,
};
use crate::scoring::score_bar;
use crate::view::{ResultTab, ViewState};

pub struct MarkdownReporter {
    view: ViewState,
    include_badge: bool,
}

impl MarkdownReporter {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            include_badge: false,
        }
    }

    pub fn with_badge(mut self, include_badge: bool) -> Self {
        self.include_badge = include_badge;
        self
    }

    fn trust_emoji(&self, level: &TrustLevel) -> &'static str {
        match level {
            TrustLevel::Trusted => "\u{2705}",       // ✅
            TrustLevel::MostlyGenuine => "\u{1F7E2}", // 🟢
            TrustLevel::Suspicious => "\u{1F6A8}",    // 🚨
        }
    }

    fn format_badge(&self, report: &AnalysisReport) -> String {
        if !self.include_badge {
            return String::new();
        }

        let (status, color) = match report.trust_level {
            TrustLevel::Trusted => ("trusted", "brightgreen"),
            TrustLevel::MostlyGenuine => ("mostly%20genuine", "green"),
            TrustLevel::Suspicious => ("suspicious", "red"),
        };

        format!(
            "![deceptiscan](https://img.shields.io/badge/deceptiscan-{}-{})\n\n",
            status, color
        )
    }

    fn format_header(&self, report: &AnalysisReport) -> String {
        let mut output = format!("# {}\n\n", escape_cell(&report.product_name));
        output.push_str(&format!("- **URL:** <{}>\n", report.url));
        output.push_str(&format!("- **Analysis ID:** `{}`\n", report.id));
        output.push_str(&format!("- **Analyzed:** {}\n\n", report.analysis_date));
        output.push_str(&format!(
            "> {} **{}**\n> {}\n\n",
            self.trust_emoji(&report.trust_level),
            alert_title(report),
            alert_message(report)
        ));
        output
    }

    fn format_summary(&self, report: &AnalysisReport) -> String {
        let summary = &report.summary;
        let genuine = genuine_percentage(report);
        let mut output = String::new();

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Original rating | {} {:.1} |\n",
            star_string(summary.original_rating),
            summary.display_original_rating()
        ));
        output.push_str(&format!(
            "| Real rating | {} {:.1} |\n",
            star_string(summary.real_rating),
            summary.display_real_rating()
        ));
        output.push_str(&format!(
            "| Total reviews | {} |\n",
            summary.total_reviews
        ));
        output.push_str(&format!(
            "| Genuine reviews | {} ({:.1}%) |\n",
            summary.genuine_review_count(),
            genuine
        ));
        output.push_str(&format!(
            "| Fake reviews | {} ({:.1}%) |\n",
            summary.fake_review_count, report.fake_percentage
        ));
        output.push_str(&format!(
            "| Trust level | {} {} |\n\n",
            self.trust_emoji(&report.trust_level),
            report.trust_level
        ));
        output.push_str(&format!("*{}*\n\n", inflation_message(report)));

        output.push_str("### Rating Distribution\n\n");
        output.push_str("| Stars | Reviews |\n");
        output.push_str("|-------|---------|\n");
        for (index, count) in report.rating_histogram.iter().enumerate().rev() {
            output.push_str(&format!("| {} | {} |\n", index + 1, count));
        }
        output.push('\n');
        output
    }

    fn format_reviews(&self, report: &AnalysisReport) -> String {
        let filter = self.view.filter;
        let reviews = filter.apply(&report.reviews);
        let mut output = format!(
            "## Reviews: {} ({})\n\n",
            filter.label(),
            reviews.len()
        );

        if reviews.is_empty() {
            output.push_str(&format!("{}\n\n", NO_MATCHING_REVIEWS));
            return output;
        }

        output.push_str("| ID | Rating | Author | Date | Verified | Status | Fake score |\n");
        output.push_str("|----|--------|--------|------|----------|--------|------------|\n");
        for review in &reviews {
            let status = if review.is_fake { "Fake" } else { "Genuine" };
            output.push_str(&format!(
                "| `{}` | {} | {} | {} | {} | {} | {}% |\n",
                review.id,
                star_string(f64::from(review.rating)),
                escape_cell(&review.author),
                review.date,
                if review.verified { "yes" } else { "no" },
                status,
                review.fake_score_percent()
            ));
        }
        output.push('\n');

        output.push_str("### Review Text\n\n");
        for review in &reviews {
            output.push_str(&format!(
                "<details>\n<summary><code>{}</code> {}</summary>\n\n",
                review.id,
                escape_cell(&review.author)
            ));
            output.push_str(&format!("{}\n\n", review.text));
            if !review.fake_reasons.is_empty() {
                output.push_str(&format!(
                    "**Reasons:** {}\n\n",
                    review.fake_reasons.join(", ")
                ));
            }
            output.push_str("</details>\n\n");
        }
        output
    }

    fn format_modules(&self, report: &AnalysisReport) -> String {
        let scores = &report.module_scores;
        let mut output = String::from("## Analysis Modules\n\n");

        if scores.modules.is_empty() {
            output.push_str("No analysis modules reported.\n\n");
            return output;
        }

        output.push_str("| Module | Score | Flagged | Flagged but genuine |\n");
        output.push_str("|--------|-------|---------|---------------------|\n");
        for rollup in &scores.modules {
            let marker = if rollup.alert { " \u{26A0}\u{FE0F}" } else { "" };
            output.push_str(&format!(
                "| {}{} | {} `{}` | {} | {} |\n",
                escape_cell(&rollup.name),
                marker,
                rollup.score,
                score_bar(f64::from(rollup.score), 100.0),
                rollup.flagged_count,
                rollup.flagged_genuine
            ));
        }
        output.push('\n');
        output.push_str(&format!(
            "Average score **{:.1}**, highest **{}**, {} module(s) above the alert score.\n\n",
            scores.average_score,
            scores.max_score,
            scores.alert_count()
        ));
        if !scores.consensus.is_empty() {
            let ids: Vec<String> = scores
                .consensus
                .iter()
                .map(|id| format!("`{}`", id))
                .collect();
            output.push_str(&format!(
                "Flagged by most modules: {}\n\n",
                ids.join(", ")
            ));
        }
        output
    }

    fn format_insights(&self, report: &AnalysisReport) -> String {
        let summary = &report.summary;
        let mut output = String::from("## Key Insights\n\n");

        output.push_str("### Review Quality\n\n");
        output.push_str(&format!("{}\n\n", review_quality_message(report)));
        output.push_str(&format!(
            "After filtering out fake reviews, the product's actual rating is {:.1} compared to the original {:.1}.\n\n",
            summary.display_real_rating(),
            summary.display_original_rating()
        ));

        if !report.modules.is_empty() {
            output.push_str("### Module Findings\n\n");
            for (module, insight) in report.insights() {
                output.push_str(&format!("- **{}:** {}\n", escape_cell(module), insight));
            }
            output.push('\n');
        }

        output.push_str("### Common Patterns in Fake Reviews\n\n");
        for pattern in FAKE_REVIEW_PATTERNS {
            output.push_str(&format!("- {}\n", pattern));
        }
        output.push('\n');

        output.push_str("### Recommendations\n\n");
        for recommendation in RECOMMENDATIONS {
            output.push_str(&format!("- {}\n", recommendation));
        }
        output.push('\n');
        output
    }

    fn format_footer(&self) -> String {
        format!(
            "---\n\n*Generated by deceptiscan v{}*\n",
            env!("CARGO_PKG_VERSION")
        )
    }
}

/// Keep table cells intact.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

impl Reporter for MarkdownReporter {
    fn report(&self, report: &AnalysisReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_badge(report));
        output.push_str(&self.format_header(report));

        for tab in ResultTab::all() {
            if !self.view.shows(tab) {
                continue;
            }
            let section = match tab {
                ResultTab::Overview => self.format_summary(report),
                ResultTab::Reviews => self.format_reviews(report),
                ResultTab::Modules => self.format_modules(report),
                ResultTab::Insights => self.format_insights(report),
            };
            output.push_str(&section);
        }

        output.push_str(&self.format_footer());
        output
    }
}
