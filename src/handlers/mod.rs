//! CLI command handlers.
//!
//! This module contains all the handler functions for CLI commands,
//! separated from main.rs to enable unit testing.

mod analyze;
mod init;
mod inspect;
mod theme;

use std::process::ExitCode;

pub use analyze::{EffectiveOptions, handle_analyze};
pub use init::handle_init;
pub use inspect::handle_inspect;
pub use theme::handle_theme;

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}
