use crate::aggregator::TrustLevel;
use crate::analysis::AnalysisReport;
use crate::reporter::{
    FAKE_REVIEW_PATTERNS, NO_MATCHING_REVIEWS, RECOMMENDATIONS, Reporter, alert_message,
    alert_title, displayed_inflation, genuine_percentage, inflation_message,
    review_quality_message, star_string,
};
use crate::review::Review;
use crate::scoring::{ModuleRollup, score_bar};
use crate::view::{ResultTab, ReviewFilter, ViewState};
use colored::Colorize;

pub struct TerminalReporter {
    view: ViewState,
    /// Show module descriptions and full insight lists
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn trust_color(&self, level: &TrustLevel) -> colored::ColoredString {
        let label = level.as_str();
        match level {
            TrustLevel::Trusted => label.green().bold(),
            TrustLevel::MostlyGenuine => label.cyan().bold(),
            TrustLevel::Suspicious => label.red().bold(),
        }
    }

    fn section(&self, title: &str) -> String {
        format!("{}\n", format!("━━━ {} ━━━", title).bold())
    }

    fn format_header(&self, report: &AnalysisReport) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n\n",
            format!(
                "deceptiscan v{} - Review Authenticity Analyzer",
                env!("CARGO_PKG_VERSION")
            )
            .bold()
        ));
        output.push_str(&format!("Product: {}\n", report.product_name.bold()));
        output.push_str(&format!("URL: {}\n", report.url.as_str().dimmed()));
        output.push_str(&format!("Analysis ID: {}\n", report.id));
        output.push_str(&format!("Analyzed: {}\n\n", report.analysis_date));

        let title = alert_title(report);
        if report.is_alert() {
            output.push_str(&format!("{} {}\n", "✗".red().bold(), title.red().bold()));
        } else {
            output.push_str(&format!("{} {}\n", "✓".green().bold(), title.green().bold()));
        }
        output.push_str(&format!("  {}\n\n", alert_message(report)));
        output
    }

    fn format_overview(&self, report: &AnalysisReport) -> String {
        let summary = &report.summary;
        let mut output = self.section("RATING COMPARISON");

        output.push_str(&format!(
            "  Original Rating: {} {:.1}\n",
            star_string(summary.original_rating).yellow(),
            summary.display_original_rating()
        ));
        output.push_str(&format!(
            "  Real Rating:     {} {:.1}\n",
            star_string(summary.real_rating).green(),
            summary.display_real_rating()
        ));
        let arrow = if displayed_inflation(report) > 0.0 {
            "↓".red()
        } else {
            "↑".green()
        };
        output.push_str(&format!("  {} {}\n\n", arrow, inflation_message(report)));

        output.push_str(&self.section("REVIEW AUTHENTICITY"));
        let genuine = genuine_percentage(report);
        output.push_str(&format!(
            "  Genuine Reviews: {} {:>5.1}%\n",
            score_bar(genuine, 100.0).green(),
            genuine
        ));
        output.push_str(&format!(
            "  Fake Reviews:    {} {:>5.1}%\n",
            score_bar(report.fake_percentage, 100.0).red(),
            report.fake_percentage
        ));
        output.push_str(&format!(
            "  Total Reviews Analyzed: {}\n",
            summary.total_reviews
        ));
        output.push_str(&format!(
            "  Trust Level: {}\n\n",
            self.trust_color(&report.trust_level)
        ));

        output.push_str("  Rating Distribution:\n");
        let max_count = report.rating_histogram.iter().copied().max().unwrap_or(0) as f64;
        for (index, count) in report.rating_histogram.iter().enumerate().rev() {
            output.push_str(&format!(
                "    {}★ {} {}\n",
                index + 1,
                score_bar(*count as f64, max_count).dimmed(),
                count
            ));
        }
        output.push('\n');

        if !report.module_scores.modules.is_empty() {
            output.push_str(&self.section("ANALYSIS SUMMARY"));
            for (rollup, module) in report.module_scores.modules.iter().zip(&report.modules) {
                output.push_str(&format!(
                    "  {:32} {}\n",
                    rollup.name,
                    self.module_score_label(rollup)
                ));
                if let Some(headline) = module.headline() {
                    output.push_str(&format!("    {}\n", headline.dimmed()));
                }
            }
            output.push('\n');
        }

        output
    }

    fn module_score_label(&self, rollup: &ModuleRollup) -> colored::ColoredString {
        let label = format!("{:>3}%", rollup.score);
        if rollup.alert {
            label.red().bold()
        } else {
            label.normal()
        }
    }

    fn format_review(&self, review: &Review) -> String {
        let mut output = String::new();
        let badge = if review.is_fake {
            "[FAKE]".red().bold()
        } else {
            "[GENUINE]".green().bold()
        };
        let verified = if review.verified {
            format!(" {}", "Verified Purchase".cyan())
        } else {
            String::new()
        };

        output.push_str(&format!(
            "  {} {} {} {} {}{}\n",
            badge,
            review.id.as_str().dimmed(),
            star_string(f64::from(review.rating)).yellow(),
            review.author.bold(),
            review.date,
            verified
        ));
        output.push_str(&format!("    {}\n", review.text));

        if review.is_fake {
            output.push_str(&format!(
                "    {}\n",
                format!("Fake score: {}%", review.fake_score_percent()).red()
            ));
            if !review.fake_reasons.is_empty() {
                output.push_str(&format!(
                    "    Reasons: {}\n",
                    review.fake_reasons.join(", ").yellow()
                ));
            }
        }
        output
    }

    fn format_reviews(&self, report: &AnalysisReport) -> String {
        let filter = self.view.filter;
        let mut output = self.section(&format!("REVIEWS: {}", filter.label().to_uppercase()));

        let tabs: Vec<String> = ReviewFilter::all()
            .iter()
            .map(|f| {
                let label = format!("{} ({})", f.label(), f.count(&report.reviews));
                if *f == filter {
                    label.bold().underline().to_string()
                } else {
                    label.dimmed().to_string()
                }
            })
            .collect();
        output.push_str(&format!("  {}\n\n", tabs.join(" | ")));

        let reviews = filter.apply(&report.reviews);
        if reviews.is_empty() {
            output.push_str(&format!("  {}\n", NO_MATCHING_REVIEWS.dimmed()));
        } else {
            for review in reviews {
                output.push_str(&self.format_review(review));
                output.push('\n');
            }
        }
        output.push('\n');
        output
    }

    fn format_modules(&self, report: &AnalysisReport) -> String {
        let scores = &report.module_scores;
        let mut output = self.section("ANALYSIS MODULES");

        if report.modules.is_empty() {
            output.push_str("  No analysis modules reported.\n\n");
            return output;
        }

        for (rollup, module) in scores.modules.iter().zip(&report.modules) {
            output.push_str(&format!(
                "  {:32} {} {}\n",
                rollup.name.bold(),
                score_bar(f64::from(rollup.score), 100.0).dimmed(),
                self.module_score_label(rollup)
            ));
            if self.verbose {
                output.push_str(&format!("    {}\n", module.description.dimmed()));
            }
            output.push_str(&format!(
                "    Flagged: {} review(s)",
                rollup.flagged_count
            ));
            if rollup.flagged_genuine > 0 {
                output.push_str(&format!(
                    " ({} {})",
                    rollup.flagged_genuine,
                    "classified genuine".yellow()
                ));
            }
            output.push('\n');

            let insights: Vec<&String> = if self.verbose {
                module.insights.iter().collect()
            } else {
                module.insights.iter().take(1).collect()
            };
            for insight in insights {
                output.push_str(&format!("    - {}\n", insight));
            }
        }

        output.push('\n');
        output.push_str(&format!(
            "  Average module score: {:.1}  Highest: {}  Alerts: {}\n",
            scores.average_score,
            scores.max_score,
            scores.alert_count()
        ));
        if !scores.consensus.is_empty() {
            let ids: Vec<&str> = scores.consensus.iter().map(|id| id.as_str()).collect();
            output.push_str(&format!(
                "  Flagged by most modules: {}\n",
                ids.join(", ").red()
            ));
        }
        output.push('\n');
        output
    }

    fn format_insights(&self, report: &AnalysisReport) -> String {
        let summary = &report.summary;
        let mut output = self.section("KEY INSIGHTS");

        output.push_str(&format!("  {}\n", "Review Quality".bold()));
        output.push_str(&format!("  {}\n", review_quality_message(report)));
        output.push_str(&format!(
            "  Real Rating: {:.1} / 5 (original {:.1})\n\n",
            summary.display_real_rating(),
            summary.display_original_rating()
        ));

        output.push_str(&format!("  {}\n", "Common Patterns in Fake Reviews".bold()));
        for pattern in FAKE_REVIEW_PATTERNS {
            output.push_str(&format!("  - {}\n", pattern));
        }
        output.push('\n');

        output.push_str(&format!("  {}\n", "Recommendations".bold()));
        for recommendation in RECOMMENDATIONS {
            output.push_str(&format!("  - {}\n", recommendation));
        }

        if self.verbose {
            output.push('\n');
            output.push_str(&format!("  {}\n", "Module Insights".bold()));
            for (module, insight) in report.insights() {
                output.push_str(&format!("  - [{}] {}\n", module.dimmed(), insight));
            }
        }
        output.push('\n');
        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &AnalysisReport) -> String {
        let mut output = self.format_header(report);

        for tab in ResultTab::all() {
            if !self.view.shows(tab) {
                continue;
            }
            let section = match tab {
                ResultTab::Overview => self.format_overview(report),
                ResultTab::Reviews => self.format_reviews(report),
                ResultTab::Modules => self.format_modules(report),
                ResultTab::Insights => self.format_insights(report),
            };
            output.push_str(&section);
        }

        output.push_str(&format!("{}\n", "━".repeat(50)));
        output.push_str(&format!(
            "Summary: {} reviews, {} fake, {} genuine\n",
            report.summary.total_reviews,
            report.summary.fake_review_count.to_string().red().bold(),
            report.summary.genuine_review_count().to_string().green()
        ));
        output.push_str(&format!(
            "Result: {} ({:.1}% fake, alert above {:.1}%)\n",
            self.trust_color(&report.trust_level),
            report.fake_percentage,
            report.fake_alert_threshold
        ));

        output
    }
}
