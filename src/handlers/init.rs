//! `init` subcommand handler.

use crate::config::Config;
use std::path::Path;
use std::process::ExitCode;

/// Handle `init`.
pub fn handle_init(path: &Path) -> ExitCode {
    match Config::write_template(path) {
        Ok(output_path) => {
            println!(
                "Created configuration file template at {}",
                output_path.display()
            );
            println!("\nYou can customize this file to:");
            println!("  - Set the fake review alert threshold");
            println!("  - Pick the default output format, filter and section");
            println!("  - Point analysis at a local review file");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
