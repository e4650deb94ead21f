use clap::Parser;
use deceptiscan::{
    Cli, Command,
    handlers::{handle_analyze, handle_init, handle_inspect, handle_theme},
};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay pipeable
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    match &cli.command {
        Command::Analyze(args) => handle_analyze(args, cli.verbose),
        Command::Inspect(args) => handle_inspect(args),
        Command::Theme { action } => handle_theme(*action),
        Command::Init { path } => handle_init(path),
    }
}
