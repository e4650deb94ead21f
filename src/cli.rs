use crate::view::{ResultTab, ReviewFilter, ThemePreference};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum InspectFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "deceptiscan",
    version,
    about = "Review authenticity analyzer",
    long_about = "deceptiscan separates genuine from fake product reviews and shows how much fake reviews distort the star rating."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the reviews of a product page
    Analyze(AnalyzeArgs),

    /// Run the text heuristics over a single review
    Inspect(InspectArgs),

    /// Show or change the stored theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Write a configuration template
    Init {
        /// Target file or directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Product page URL
    pub url: String,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reviews to list (overrides config)
    #[arg(long, value_enum)]
    pub filter: Option<ReviewFilter>,

    /// Render a single section (overrides config)
    #[arg(short, long, value_enum)]
    pub tab: Option<ResultTab>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON review file to analyze instead of the demo data
    #[arg(short, long)]
    pub reviews: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the fake share exceeds the alert threshold
    #[arg(short, long)]
    pub strict: bool,

    /// Theme for HTML output (overrides the stored preference)
    #[arg(long, value_enum)]
    pub theme: Option<ThemePreference>,

    /// Prepend a trust badge to Markdown output
    #[arg(long)]
    pub badge: bool,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Review text
    pub text: String,

    /// Star rating given with the text
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = InspectFormat::Terminal)]
    pub format: InspectFormat,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the stored theme
    Show,
    /// Flip between light and dark
    Toggle,
    /// Store a theme
    Set {
        #[arg(value_enum)]
        theme: ThemePreference,
    },
}
