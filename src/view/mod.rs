//! Presentation state.
//!
//! Review filter, selected result tab, and the persisted theme preference.
//! Reporters read this state; nothing here touches the aggregate numbers.

mod preferences;
mod state;

pub use preferences::{
    DARK_MODE_KEY, FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore,
    ThemePreference,
};
pub use state::{ResultTab, ReviewFilter};

/// Everything a reporter needs besides the report itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: ReviewFilter,
    /// `None` renders every tab.
    pub tab: Option<ResultTab>,
    pub theme: ThemePreference,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: ReviewFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_tab(mut self, tab: Option<ResultTab>) -> Self {
        self.tab = tab;
        self
    }

    pub fn with_theme(mut self, theme: ThemePreference) -> Self {
        self.theme = theme;
        self
    }

    pub fn shows(&self, tab: ResultTab) -> bool {
        self.tab.is_none_or(|selected| selected == tab)
    }
}
