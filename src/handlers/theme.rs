//! `theme` subcommand handler.

use crate::cli::ThemeAction;
use crate::view::{FilePreferenceStore, PreferenceError, PreferenceStore, ThemePreference};
use std::process::ExitCode;
use tracing::debug;

/// Handle `theme`.
pub fn handle_theme(action: Option<ThemeAction>) -> ExitCode {
    let store = match FilePreferenceStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    debug!(path = %store.path().display(), "Using preference file");

    match run_theme(&store, action) {
        Ok(theme) => {
            println!("Theme: {}", theme);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Apply `action` to `store` and return the resulting theme.
pub(crate) fn run_theme(
    store: &dyn PreferenceStore,
    action: Option<ThemeAction>,
) -> Result<ThemePreference, PreferenceError> {
    match action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => store.theme(),
        ThemeAction::Toggle => store.toggle_theme(),
        ThemeAction::Set { theme } => {
            store.set_theme(theme)?;
            Ok(theme)
        }
    }
}
