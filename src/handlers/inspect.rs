//! `inspect` subcommand handler.

use crate::cli::{InspectArgs, InspectFormat};
use crate::heuristics::{SUSPICION_THRESHOLD, TextSignals};
use colored::Colorize;
use std::process::ExitCode;
use tracing::debug;

/// Handle `inspect`.
pub fn handle_inspect(args: &InspectArgs) -> ExitCode {
    let signals = TextSignals::analyze(&args.text, args.rating);
    debug!(
        suspicion = signals.suspicion(),
        reasons = signals.reasons().len(),
        "Inspected review text"
    );

    match args.format {
        InspectFormat::Terminal => {
            println!("{}", format_signals(&signals));
            ExitCode::SUCCESS
        }
        InspectFormat::Json => match serde_json::to_string_pretty(&signals) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: Failed to serialize signals: {}", e);
                ExitCode::from(2)
            }
        },
    }
}

pub(crate) fn format_signals(signals: &TextSignals) -> String {
    let mut output = String::new();

    let verdict = if signals.is_suspicious() {
        "SUSPICIOUS".red().bold()
    } else {
        "LIKELY GENUINE".green().bold()
    };
    output.push_str(&format!(
        "Verdict: {} (score {:.2}, threshold {:.2})\n\n",
        verdict,
        signals.suspicion(),
        SUSPICION_THRESHOLD
    ));

    let style = &signals.stylometry;
    output.push_str(&format!("{}\n", "Stylometry".bold()));
    output.push_str(&format!(
        "  score {:.2}: {} words, {} superlative(s), {} exclamation mark(s), specific details: {}\n",
        style.score,
        style.word_count,
        style.superlative_count,
        style.exclamation_count,
        if style.has_specific_details { "yes" } else { "no" }
    ));

    let sentiment = &signals.sentiment;
    output.push_str(&format!("{}\n", "Sentiment & Emotion".bold()));
    output.push_str(&format!(
        "  score {:.2}: sentiment {:+.2} ({} positive, {} negative), rating mismatch: {}\n",
        sentiment.score,
        sentiment.sentiment_score,
        sentiment.positive_count,
        sentiment.negative_count,
        if sentiment.rating_mismatch { "yes" } else { "no" }
    ));
    if !sentiment.emotions.is_empty() {
        let emotions: Vec<String> = sentiment
            .emotions
            .iter()
            .map(|(name, count)| format!("{} x{}", name, count))
            .collect();
        output.push_str(&format!("  emotions: {}\n", emotions.join(", ")));
    }

    let ai = &signals.ai_text;
    output.push_str(&format!("{}\n", "AI Text Patterns".bold()));
    output.push_str(&format!(
        "  score {:.2}: {} sentence(s), {:.1} words/sentence, adjective ratio {:.2}, unique openers {:.2}\n",
        ai.score, ai.sentence_count, ai.avg_sentence_len, ai.adjective_ratio, ai.unique_starters_ratio
    ));

    let reasons = signals.reasons();
    if !reasons.is_empty() {
        output.push_str(&format!("\n{}\n", "Reasons".bold()));
        for reason in reasons {
            output.push_str(&format!("  - {}\n", reason.yellow()));
        }
    }

    output
}
