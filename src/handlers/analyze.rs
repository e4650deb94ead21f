//! `analyze` subcommand handler.

use crate::analysis::{AnalysisReport, AnalysisSettings, Analyzer};
use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::reporter::{MarkdownReporter, Reporter, TerminalReporter, reporter_for};
use crate::source::{FixtureSource, JsonFileSource, ReviewSource};
use crate::view::{FilePreferenceStore, PreferenceStore, ThemePreference, ViewState};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};

use super::HandlerResult;

/// Settings after merging CLI flags over the loaded config.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveOptions {
    pub format: OutputFormat,
    pub view: ViewState,
    pub settings: AnalysisSettings,
    pub reviews_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub badge: bool,
}

impl EffectiveOptions {
    /// Merge `args` over `config`. The theme is resolved separately.
    pub fn resolve(args: &AnalyzeArgs, config: &Config) -> Self {
        let view = ViewState::new()
            .with_filter(args.filter.unwrap_or(config.output.filter))
            .with_tab(args.tab.or(config.output.tab));

        Self {
            format: args.format.unwrap_or(config.output.format),
            view,
            settings: AnalysisSettings::from(config),
            reviews_file: args
                .reviews
                .clone()
                .or_else(|| config.source.reviews_file.clone()),
            output: args.output.clone(),
            strict: args.strict,
            badge: args.badge || config.output.badge,
        }
    }
}

/// Handle `analyze`.
pub fn handle_analyze(args: &AnalyzeArgs, verbose: bool) -> ExitCode {
    match run_analyze(args, verbose, Path::new(".")) {
        Ok(result) => result.into(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

pub(crate) fn run_analyze(
    args: &AnalyzeArgs,
    verbose: bool,
    project_root: &Path,
) -> Result<HandlerResult> {
    let config = Config::load(args.config.as_deref(), Some(project_root))?;
    let mut options = EffectiveOptions::resolve(args, &config);
    if options.format == OutputFormat::Html {
        options.view = options.view.with_theme(resolve_theme(args.theme));
    }

    let report = analyze(&options, &args.url)?;
    let output = render(&options, &report, verbose);

    match &options.output {
        Some(path) => {
            fs::write(path, &output).map_err(|e| AnalysisError::WriteOutput {
                path: path.display().to_string(),
                source: e,
            })?;
            println!("Output written to {}", path.display());
        }
        None => println!("{}", output),
    }

    debug!(
        strict = options.strict,
        alert = report.is_alert(),
        "Analyze finished"
    );

    if options.strict && report.is_alert() {
        Ok(HandlerResult::Error(1))
    } else {
        Ok(HandlerResult::Success)
    }
}

fn analyze(options: &EffectiveOptions, url: &str) -> Result<AnalysisReport> {
    let source: Box<dyn ReviewSource> = match &options.reviews_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(FixtureSource::new()),
    };
    info!(source = source.name(), "Using review source");

    Analyzer::new(source, options.settings.clone()).analyze(url)
}

fn render(options: &EffectiveOptions, report: &AnalysisReport, verbose: bool) -> String {
    match options.format {
        OutputFormat::Terminal => TerminalReporter::new(options.view)
            .with_verbose(verbose)
            .report(report),
        OutputFormat::Markdown => MarkdownReporter::new(options.view)
            .with_badge(options.badge)
            .report(report),
        format => reporter_for(format, options.view).report(report),
    }
}

/// Explicit flag, else the stored preference, else light.
fn resolve_theme(flag: Option<ThemePreference>) -> ThemePreference {
    if let Some(theme) = flag {
        return theme;
    }

    let stored = FilePreferenceStore::open_default().and_then(|store| store.theme());
    match stored {
        Ok(theme) => theme,
        Err(e) => {
            warn!(error = %e, "Could not read theme preference, using light");
            ThemePreference::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::view::{ResultTab, ReviewFilter};
    use clap::Parser;
    use tempfile::TempDir;

    fn parse_args(args: &[&str]) -> AnalyzeArgs {
        let mut full = vec!["deceptiscan", "analyze"];
        full.extend(args);
        match Cli::parse_from(full).command {
            Command::Analyze(args) => args,
            other => panic!("expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_uses_config_defaults() {
        let args = parse_args(&["https://example.com/p"]);
        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;
        config.output.filter = ReviewFilter::Fake;
        config.output.tab = Some(ResultTab::Reviews);
        config.source.reviews_file = Some(PathBuf::from("cfg.json"));

        let options = EffectiveOptions::resolve(&args, &config);
        assert_eq!(options.format, OutputFormat::Markdown);
        assert_eq!(options.view.filter, ReviewFilter::Fake);
        assert_eq!(options.view.tab, Some(ResultTab::Reviews));
        assert_eq!(options.reviews_file, Some(PathBuf::from("cfg.json")));
        assert!(!options.badge);
    }

    #[test]
    fn test_resolve_badge_from_flag_or_config() {
        let args = parse_args(&["https://example.com/p", "--badge"]);
        assert!(EffectiveOptions::resolve(&args, &Config::default()).badge);

        let args = parse_args(&["https://example.com/p"]);
        let mut config = Config::default();
        config.output.badge = true;
        assert!(EffectiveOptions::resolve(&args, &config).badge);
    }

    #[test]
    fn test_run_analyze_markdown_badge() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.md");
        let args = parse_args(&[
            "https://example.com/p",
            "--format",
            "markdown",
            "--badge",
            "--output",
            out.to_str().unwrap(),
        ]);

        run_analyze(&args, false, dir.path()).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("img.shields.io"));
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let args = parse_args(&[
            "https://example.com/p",
            "--format",
            "json",
            "--filter",
            "genuine",
            "--tab",
            "modules",
            "--reviews",
            "cli.json",
        ]);
        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;
        config.source.reviews_file = Some(PathBuf::from("cfg.json"));

        let options = EffectiveOptions::resolve(&args, &config);
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.view.filter, ReviewFilter::Genuine);
        assert_eq!(options.view.tab, Some(ResultTab::Modules));
        assert_eq!(options.reviews_file, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_resolve_theme_flag_wins() {
        assert_eq!(
            resolve_theme(Some(ThemePreference::Dark)),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_run_analyze_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.json");
        let args = parse_args(&[
            "https://example.com/p",
            "--format",
            "json",
            "--output",
            out.to_str().unwrap(),
        ]);

        let result = run_analyze(&args, false, dir.path()).unwrap();
        assert_eq!(result, HandlerResult::Success);

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(parsed["summary"]["fake_review_count"], 4);
    }

    #[test]
    fn test_run_analyze_strict_alert() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.md");
        let args = parse_args(&[
            "https://example.com/p",
            "--strict",
            "--format",
            "markdown",
            "--output",
            out.to_str().unwrap(),
        ]);

        let result = run_analyze(&args, false, dir.path()).unwrap();
        assert_eq!(result, HandlerResult::Error(1));
    }

    #[test]
    fn test_run_analyze_uses_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".deceptiscan.yaml"),
            "analysis:\n  fake_alert_threshold: 60\n",
        )
        .unwrap();
        let out = dir.path().join("report.json");
        let args = parse_args(&[
            "https://example.com/p",
            "--strict",
            "--format",
            "json",
            "--output",
            out.to_str().unwrap(),
        ]);

        // 50% fake stays under a 60% threshold
        let result = run_analyze(&args, false, dir.path()).unwrap();
        assert_eq!(result, HandlerResult::Success);
    }

    #[test]
    fn test_run_analyze_invalid_url() {
        let dir = TempDir::new().unwrap();
        let args = parse_args(&["not a url"]);
        let err = run_analyze(&args, false, dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUrl { .. }));
    }

    #[test]
    fn test_run_analyze_missing_review_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let args = parse_args(&[
            "https://example.com/p",
            "--reviews",
            missing.to_str().unwrap(),
        ]);
        let err = run_analyze(&args, false, dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::Source(_)));
    }

    #[test]
    fn test_run_analyze_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("no-such-dir").join("report.json");
        let args = parse_args(&[
            "https://example.com/p",
            "--format",
            "json",
            "--output",
            out.to_str().unwrap(),
        ]);
        let err = run_analyze(&args, false, dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::WriteOutput { .. }));
    }
}
