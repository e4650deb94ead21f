use crate::analysis::AnalysisReport;
use crate::reporter::{
    FAKE_REVIEW_PATTERNS, NO_MATCHING_REVIEWS, RECOMMENDATIONS, Reporter, alert_message,
    alert_title, displayed_inflation, genuine_percentage, inflation_message,
    review_quality_message, star_string,
};
use crate::review::Review;
use crate::view::{ResultTab, ReviewFilter, ViewState};

const STYLE: &str = r#"
        :root {
            --fake: #dc2626;
            --genuine: #16a34a;
            --star: #eab308;
            --bg: #f3f4f6;
            --card: #ffffff;
            --text: #1f2937;
            --muted: #6b7280;
            --border: #e5e7eb;
        }

        body.dark {
            --bg: #0f172a;
            --card: #1e293b;
            --text: #e5e7eb;
            --muted: #94a3b8;
            --border: #334155;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: var(--text);
            background: var(--bg);
            padding: 2rem;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
        }

        .card {
            background: var(--card);
            border-radius: 12px;
            padding: 1.5rem;
            margin-bottom: 2rem;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }

        .card h2 {
            margin-bottom: 1rem;
        }

        .muted {
            color: var(--muted);
            font-size: 0.9rem;
        }

        .badge {
            display: inline-block;
            padding: 0.25rem 0.6rem;
            border-radius: 9999px;
            font-size: 0.75rem;
            font-weight: 600;
            border: 1px solid var(--border);
        }

        .badge.destructive {
            background: var(--fake);
            border-color: var(--fake);
            color: white;
        }

        .alert {
            border: 1px solid var(--genuine);
            border-radius: 8px;
            padding: 1rem;
            margin-bottom: 2rem;
            background: var(--card);
        }

        .alert.destructive {
            border-color: var(--fake);
        }

        .alert h3 {
            margin-bottom: 0.25rem;
        }

        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 1rem;
        }

        .rating-value {
            font-size: 2rem;
            font-weight: 700;
        }

        .stars {
            color: var(--star);
            font-size: 1.5rem;
            letter-spacing: 0.1rem;
        }

        .stars.real {
            color: var(--genuine);
        }

        .progress {
            height: 8px;
            background: var(--border);
            border-radius: 4px;
            overflow: hidden;
            margin: 0.25rem 0 1rem;
        }

        .progress-fill {
            height: 100%;
            border-radius: 4px;
        }

        .progress-fill.genuine { background: var(--genuine); }
        .progress-fill.fake { background: var(--fake); }
        .progress-fill.module { background: var(--muted); }
        .progress-fill.module.alert { background: var(--fake); }

        .module, .review {
            border: 1px solid var(--border);
            border-radius: 8px;
            padding: 1rem;
            margin-bottom: 1rem;
        }

        .module-header, .review-header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 0.5rem;
            margin-bottom: 0.5rem;
        }

        .review.fake {
            border-left: 4px solid var(--fake);
        }

        .review.genuine {
            border-left: 4px solid var(--genuine);
        }

        .review-meta {
            color: var(--muted);
            font-size: 0.875rem;
        }

        .fake-score {
            color: var(--fake);
            font-size: 0.875rem;
        }

        .filters {
            display: flex;
            gap: 0.5rem;
            margin-bottom: 1rem;
        }

        .filters .active {
            font-weight: 700;
            text-decoration: underline;
        }

        ul {
            padding-left: 1.25rem;
        }

        .footer {
            text-align: center;
            margin-top: 2rem;
            color: var(--muted);
            font-size: 0.875rem;
        }
"#;

pub struct HtmlReporter {
    view: ViewState,
}

impl HtmlReporter {
    pub fn new(view: ViewState) -> Self {
        Self { view }
    }

    fn format_overview(&self, report: &AnalysisReport) -> String {
        let summary = &report.summary;
        let genuine = genuine_percentage(report);
        let arrow = if displayed_inflation(report) > 0.0 {
            "&darr;"
        } else {
            "&uarr;"
        };

        let modules_html: String = report
            .module_scores
            .modules
            .iter()
            .zip(&report.modules)
            .map(|(rollup, module)| {
                format!(
                    r#"
                <div class="module">
                    <div class="module-header">
                        <strong>{}</strong>
                        <span class="badge{}">{}%</span>
                    </div>
                    <p class="muted">{}</p>
                </div>"#,
                    html_escape(&rollup.name),
                    if rollup.alert { " destructive" } else { "" },
                    rollup.score,
                    html_escape(module.headline().unwrap_or_default())
                )
            })
            .collect();

        format!(
            r#"
        <div class="grid">
            <div class="card">
                <h2>Rating Comparison</h2>
                <p class="muted">Original vs. Real Rating (after removing fake reviews)</p>
                <div class="grid">
                    <div>
                        <p class="muted">Original Rating</p>
                        <div class="stars">{}</div>
                        <div class="rating-value">{:.1}</div>
                    </div>
                    <div>
                        <p class="muted">Real Rating</p>
                        <div class="stars real">{}</div>
                        <div class="rating-value">{:.1}</div>
                    </div>
                </div>
                <p>{} {}</p>
            </div>
            <div class="card">
                <h2>Review Authenticity</h2>
                <p class="muted">Breakdown of genuine vs. fake reviews</p>
                <div>Genuine Reviews <strong>{:.1}%</strong></div>
                <div class="progress"><div class="progress-fill genuine" style="width: {:.1}%"></div></div>
                <div>Fake Reviews <strong>{:.1}%</strong></div>
                <div class="progress"><div class="progress-fill fake" style="width: {:.1}%"></div></div>
                <div>Total Reviews Analyzed <strong>{}</strong></div>
            </div>
        </div>
        <div class="card">
            <h2>Analysis Summary</h2>
            <div class="grid">{}
            </div>
        </div>"#,
            star_string(summary.original_rating),
            summary.display_original_rating(),
            star_string(summary.real_rating),
            summary.display_real_rating(),
            arrow,
            inflation_message(report),
            genuine,
            genuine,
            report.fake_percentage,
            report.fake_percentage,
            summary.total_reviews,
            modules_html
        )
    }

    fn format_review(&self, review: &Review) -> String {
        let (class, status) = if review.is_fake {
            ("fake", "Fake Review")
        } else {
            ("genuine", "Genuine Review")
        };
        let verified = if review.verified {
            r#" <span class="badge">Verified Purchase</span>"#
        } else {
            ""
        };
        let fake_details = if review.is_fake {
            let reasons: String = review
                .fake_reasons
                .iter()
                .map(|r| format!("<li>{}</li>", html_escape(r)))
                .collect();
            format!(
                r#"
                    <div class="fake-score">Fake score: {}%</div>
                    <ul>{}</ul>"#,
                review.fake_score_percent(),
                reasons
            )
        } else {
            String::new()
        };

        format!(
            r#"
                <div class="review {}">
                    <div class="review-header">
                        <div><strong>{}</strong>{}</div>
                        <span class="badge{}">{}</span>
                    </div>
                    <div class="stars">{}</div>
                    <div class="review-meta">{}</div>
                    <p>{}</p>{}
                </div>"#,
            class,
            html_escape(&review.author),
            verified,
            if review.is_fake { " destructive" } else { "" },
            status,
            star_string(f64::from(review.rating)),
            review.date,
            html_escape(&review.text),
            fake_details
        )
    }

    fn format_reviews(&self, report: &AnalysisReport) -> String {
        let filter = self.view.filter;
        let filters: String = ReviewFilter::all()
            .iter()
            .map(|f| {
                format!(
                    r#"<span class="{}">{} ({})</span>"#,
                    if *f == filter { "active" } else { "" },
                    f.label(),
                    f.count(&report.reviews)
                )
            })
            .collect();

        let reviews = filter.apply(&report.reviews);
        let body = if reviews.is_empty() {
            format!(r#"<p class="muted">{}</p>"#, NO_MATCHING_REVIEWS)
        } else {
            reviews.iter().map(|r| self.format_review(r)).collect()
        };

        format!(
            r#"
        <div class="card">
            <h2>Reviews</h2>
            <div class="filters">{}</div>{}
        </div>"#,
            filters, body
        )
    }

    fn format_modules(&self, report: &AnalysisReport) -> String {
        let modules: String = report
            .module_scores
            .modules
            .iter()
            .zip(&report.modules)
            .map(|(rollup, module)| {
                let insights: String = module
                    .insights
                    .iter()
                    .map(|i| format!("<li>{}</li>", html_escape(i)))
                    .collect();
                format!(
                    r#"
            <div class="module">
                <div class="module-header">
                    <strong>{}</strong>
                    <span class="badge{}">{}%</span>
                </div>
                <p class="muted">{}</p>
                <div class="progress"><div class="progress-fill module{}" style="width: {}%"></div></div>
                <p>{} review(s) flagged</p>
                <ul>{}</ul>
            </div>"#,
                    html_escape(&rollup.name),
                    if rollup.alert { " destructive" } else { "" },
                    rollup.score,
                    html_escape(&module.description),
                    if rollup.alert { " alert" } else { "" },
                    rollup.score,
                    rollup.flagged_count,
                    insights
                )
            })
            .collect();

        let body = if modules.is_empty() {
            r#"<p class="muted">No analysis modules reported.</p>"#.to_string()
        } else {
            modules
        };

        format!(
            r#"
        <div class="card">
            <h2>Analysis Modules</h2>{}
        </div>"#,
            body
        )
    }

    fn format_insights(&self, report: &AnalysisReport) -> String {
        let summary = &report.summary;
        let list = |items: &[&str]| -> String {
            items
                .iter()
                .map(|i| format!("<li>{}</li>", html_escape(i)))
                .collect()
        };

        format!(
            r#"
        <div class="card">
            <h2>Key Insights</h2>
            <h3>Review Quality</h3>
            <p>{}</p>
            <div class="alert">
                <h3>Real Rating: {:.1} / 5</h3>
                <p>After filtering out fake reviews, the product's actual rating is {:.1} compared to the original {:.1}.</p>
            </div>
            <h3>Common Patterns in Fake Reviews</h3>
            <ul>{}</ul>
            <h3>Recommendations</h3>
            <ul>{}</ul>
        </div>"#,
            review_quality_message(report),
            summary.display_real_rating(),
            summary.display_real_rating(),
            summary.display_original_rating(),
            list(FAKE_REVIEW_PATTERNS),
            list(RECOMMENDATIONS)
        )
    }
}

impl Reporter for HtmlReporter {
    fn report(&self, report: &AnalysisReport) -> String {
        let alert_class = if report.is_alert() { " destructive" } else { "" };

        let sections: String = ResultTab::all()
            .into_iter()
            .filter(|tab| self.view.shows(*tab))
            .map(|tab| match tab {
                ResultTab::Overview => self.format_overview(report),
                ResultTab::Reviews => self.format_reviews(report),
                ResultTab::Modules => self.format_modules(report),
                ResultTab::Insights => self.format_insights(report),
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>deceptiscan - {}</title>
    <style>{}</style>
</head>
<body class="{}">
    <div class="container">
        <div class="card">
            <span class="badge{}">Analysis ID: {}</span>
            <h1>{}</h1>
            <p class="muted">{}</p>
            <p class="muted">Analyzed {}</p>
        </div>

        <div class="alert{}">
            <h3>{}</h3>
            <p>{}</p>
        </div>
{}
        <div class="footer">
            Generated by deceptiscan v{}
        </div>
    </div>
</body>
</html>"#,
            html_escape(&report.product_name),
            STYLE,
            self.view.theme.as_str(),
            alert_class,
            report.id,
            html_escape(&report.product_name),
            html_escape(report.url.as_str()),
            report.analysis_date,
            alert_class,
            alert_title(report),
            alert_message(report),
            sections,
            env!("CARGO_PKG_VERSION")
        )
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::create_test_report;
    use crate::view::ThemePreference;

    #[test]
    fn test_html_output_structure() {
        let output = HtmlReporter::new(ViewState::new()).report(&create_test_report());
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("<title>deceptiscan - Smart Home Assistant Pro</title>"));
        assert!(output.contains("<body class=\"light\">"));
        assert!(output.contains("High number of fake reviews detected!"));
        assert!(output.contains("Rating Comparison"));
        assert!(output.contains("Key Insights"));
        assert!(output.ends_with("</html>"));
    }

    #[test]
    fn test_html_ratings_and_breakdown() {
        let output = HtmlReporter::new(ViewState::new().with_tab(Some(ResultTab::Overview)))
            .report(&create_test_report());
        assert!(output.contains("<div class=\"rating-value\">3.9</div>"));
        assert!(output.contains("<div class=\"rating-value\">3.8</div>"));
        assert!(output.contains("&darr; Rating inflated by 0.1 stars due to fake reviews"));
        assert!(output.contains("style=\"width: 50.0%\""));
        assert!(output.contains("<span class=\"badge destructive\">91%</span>"));
        assert!(output.contains("<span class=\"badge\">65%</span>"));
        assert!(!output.contains("Key Insights"));
    }

    #[test]
    fn test_html_dark_theme() {
        let view = ViewState::new().with_theme(ThemePreference::Dark);
        let output = HtmlReporter::new(view).report(&create_test_report());
        assert!(output.contains("<body class=\"dark\">"));
    }

    #[test]
    fn test_html_review_filter() {
        let view = ViewState::new()
            .with_tab(Some(ResultTab::Reviews))
            .with_filter(ReviewFilter::Fake);
        let output = HtmlReporter::new(view).report(&create_test_report());
        assert!(output.contains("<span class=\"active\">Fake (4)</span>"));
        assert!(output.contains("ReviewMaster42"));
        assert!(output.contains("Fake score: 92%"));
        assert!(!output.contains("TechUser2022"));
    }

    #[test]
    fn test_html_escapes_special_chars() {
        let mut report = create_test_report();
        report.product_name = "<script>alert('x')</script>".to_string();
        report.reviews[0].text = "Works & <b>bold</b>".to_string();

        let output = HtmlReporter::new(ViewState::new()).report(&report);
        assert!(!output.contains("<script>"));
        assert!(output.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(output.contains("Works &amp; &lt;b&gt;bold&lt;/b&gt;"));
        assert!(output.contains("Sentiment &amp; Emotion Analysis"));
    }

    #[test]
    fn test_html_empty_filter_result() {
        let mut report = create_test_report();
        report.reviews.retain(|r| r.is_fake);
        let view = ViewState::new()
            .with_tab(Some(ResultTab::Reviews))
            .with_filter(ReviewFilter::Genuine);
        let output = HtmlReporter::new(view).report(&report);
        assert!(output.contains(NO_MATCHING_REVIEWS));
    }
}
