//! Searchbox - interactive search box for the terminal
//!
//! A text input filters a small in-memory list of names as you type.
//!
//! # Features
//!
//! - **Debounced input**: results update once typing pauses, not on every key
//! - **Case-insensitive matching**: plain substring search, list order kept
//! - **Highlighting**: the matched part of each result is marked
//! - **Three view states**: hint, match list, or an explicit "no results"
//!
//! # Example
//!
//! ```no_run
//! use searchbox::{tui, CandidateList, WidgetConfig};
//!
//! fn main() -> searchbox::Result<()> {
//!     let mut terminal = ratatui::init();
//!     let mut app = tui::App::new(CandidateList::default(), WidgetConfig::default());
//!     let result = app.run(&mut terminal);
//!     ratatui::restore();
//!     result
//! }
//! ```

pub mod candidates;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod logging;
pub mod tui;
pub mod widget;

// Re-export main types
pub use candidates::{CandidateList, DEFAULT_CANDIDATES};
pub use debounce::{Debouncer, TaskId, DEFAULT_QUIET_INTERVAL};
pub use error::{Result, SearchBoxError};
pub use filter::{filter_indices, ResultSet};
pub use highlight::{find_match, Highlight};
pub use widget::{FilterWidget, View};

use std::time::Duration;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest quiet interval accepted from configuration
pub const MAX_QUIET_INTERVAL: Duration = Duration::from_secs(10);

/// Widget configuration
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Pause after the last keystroke before results update
    pub quiet_interval: Duration,
    /// How many candidates the hint lists as examples
    pub hint_count: usize,
    /// Placeholder shown in the empty input
    pub placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            quiet_interval: DEFAULT_QUIET_INTERVAL,
            hint_count: 3,
            placeholder: "Search".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Reject settings the widget cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.quiet_interval > MAX_QUIET_INTERVAL {
            return Err(SearchBoxError::invalid_option(
                "--debounce-ms",
                format!(
                    "{} ms exceeds the maximum of {} ms",
                    self.quiet_interval.as_millis(),
                    MAX_QUIET_INTERVAL.as_millis()
                ),
            ));
        }
        Ok(())
    }
}
