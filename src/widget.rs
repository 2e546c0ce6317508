//! The filter widget
//!
//! Owns the raw query typed by the user, the debounced query committed
//! after a quiet interval, and the result set derived from it. All state
//! changes happen through the event methods below, one event at a time:
//! [`FilterWidget::set_query`] for keystrokes, [`FilterWidget::tick`] for
//! the timer, [`FilterWidget::clear`] for the clear control.
//!
//! ```
//! use searchbox::{CandidateList, FilterWidget, View, WidgetConfig};
//! use std::time::Instant;
//!
//! let start = Instant::now();
//! let mut widget = FilterWidget::new(
//!     CandidateList::new(["Siri", "Alexa", "Google"]),
//!     WidgetConfig::default(),
//! );
//! widget.set_query("al", start);
//! widget.tick(start + widget.quiet_interval());
//!
//! match widget.view() {
//!     View::Matches { results, .. } => assert_eq!(results.get(0), Some("Alexa")),
//!     _ => unreachable!(),
//! }
//! ```

use crate::candidates::CandidateList;
use crate::debounce::Debouncer;
use crate::filter::ResultSet;
use crate::WidgetConfig;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What the results region shows. Exactly one applies at a time.
#[derive(Debug)]
pub enum View<'a> {
    /// Nothing committed yet: prompt with example terms
    Hint { examples: Vec<&'a str> },
    Matches {
        query: &'a str,
        results: &'a ResultSet,
    },
    /// Query committed but nothing matched
    Empty { query: &'a str },
}

impl View<'_> {
    /// Text for the hint and empty states; `None` for the match list.
    pub fn message(&self) -> Option<String> {
        match self {
            View::Hint { examples } => Some(hint_message(examples)),
            View::Empty { query } => Some(empty_message(query)),
            View::Matches { .. } => None,
        }
    }
}

pub fn hint_message(examples: &[&str]) -> String {
    if examples.is_empty() {
        return "Type to search".to_string();
    }
    format!("Type to search, e.g. {}", examples.join(", "))
}

pub fn empty_message(query: &str) -> String {
    format!("No results for \"{}\"", query)
}

pub struct FilterWidget {
    raw: String,
    debounced: String,
    results: ResultSet,
    debouncer: Debouncer<String>,
    focused: bool,
    hint_count: usize,
}

impl FilterWidget {
    /// Mount a widget over `candidates`. Input starts focused and empty.
    pub fn new(candidates: CandidateList, config: WidgetConfig) -> Self {
        info!(
            candidates = candidates.len(),
            quiet_ms = config.quiet_interval.as_millis() as u64,
            "filter widget mounted"
        );
        Self {
            raw: String::new(),
            debounced: String::new(),
            results: ResultSet::new(candidates),
            debouncer: Debouncer::new(config.quiet_interval),
            focused: true,
            hint_count: config.hint_count,
        }
    }

    // --- Events ---

    /// Keystroke: replace the raw query and restart the quiet interval.
    pub fn set_query(&mut self, value: impl Into<String>, now: Instant) {
        self.raw = value.into();
        self.debouncer.arm(self.raw.clone(), now);
    }

    /// Timer: commit the pending query if its quiet interval has elapsed.
    ///
    /// Returns true when a commit happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(value) = self.debouncer.fire(now) else {
            return false;
        };
        self.commit(value.trim());
        true
    }

    /// Clear control: empty the input and return focus to it.
    pub fn clear(&mut self, now: Instant) {
        debug!("query cleared");
        self.focused = true;
        self.set_query(String::new(), now);
    }

    /// Tear down: drop any pending commit.
    pub fn unmount(&mut self) {
        if let Some(id) = self.debouncer.cancel() {
            debug!(?id, "pending commit cancelled on unmount");
        }
    }

    fn commit(&mut self, query: &str) {
        if self.debounced != query {
            self.debounced.clear();
            self.debounced.push_str(query);
        }
        if self.results.refresh(&self.debounced) {
            debug!(query = %self.debounced, matches = self.results.len(), "results recomputed");
        }
    }

    // --- Focus ---

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    // --- State ---

    pub fn raw_query(&self) -> &str {
        &self.raw
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn candidates(&self) -> &CandidateList {
        self.results.candidates()
    }

    pub fn quiet_interval(&self) -> Duration {
        self.debouncer.delay()
    }

    /// True while a keystroke is waiting out its quiet interval
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending commit is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn view(&self) -> View<'_> {
        if self.debounced.is_empty() {
            View::Hint {
                examples: self.candidates().iter().take(self.hint_count).collect(),
            }
        } else if self.results.is_empty() {
            View::Empty {
                query: &self.debounced,
            }
        } else {
            View::Matches {
                query: &self.debounced,
                results: &self.results,
            }
        }
    }
}

impl Drop for FilterWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn widget(items: &[&str]) -> FilterWidget {
        FilterWidget::new(
            CandidateList::new(items.iter().copied()),
            WidgetConfig::default(),
        )
    }

    #[test]
    fn starts_in_hint_state() {
        let w = widget(&["Siri", "Alexa", "Google", "Facebook"]);
        assert!(w.is_focused());
        assert!(w.results().is_empty());
        match w.view() {
            View::Hint { examples } => assert_eq!(examples, ["Siri", "Alexa", "Google"]),
            other => panic!("expected hint, got {other:?}"),
        }
    }

    #[test]
    fn keystroke_updates_raw_immediately_but_commits_later() {
        let start = Instant::now();
        let mut w = widget(&["Siri", "Alexa", "Google"]);
        w.set_query("al", start);

        assert_eq!(w.raw_query(), "al");
        assert_eq!(w.debounced_query(), "");
        assert!(w.is_pending());
        assert!(!w.tick(start + ms(100)));
        assert!(matches!(w.view(), View::Hint { .. }));

        assert!(w.tick(start + ms(220)));
        assert_eq!(w.debounced_query(), "al");
        assert_eq!(w.results().iter().collect::<Vec<_>>(), ["Alexa"]);
    }

    #[test]
    fn rapid_keystrokes_commit_once() {
        let start = Instant::now();
        let mut w = widget(&["Siri", "Alexa", "Google"]);
        for (i, partial) in ["g", "go", "goo", "goo "].iter().enumerate() {
            w.set_query(*partial, start + ms(50 * i as u64));
            assert!(!w.tick(start + ms(50 * i as u64 + 10)));
        }

        let mut fired = 0;
        for step in 0..20 {
            if w.tick(start + ms(150 + step * 25)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(w.debounced_query(), "goo");
    }

    #[test]
    fn empty_state_names_the_query() {
        let start = Instant::now();
        let mut w = widget(&["Siri", "Alexa", "Google"]);
        w.set_query("xyz", start);
        w.tick(start + ms(300));

        let view = w.view();
        assert!(matches!(view, View::Empty { query: "xyz" }));
        assert!(view.message().unwrap_or_default().contains("xyz"));
    }

    #[test]
    fn whitespace_only_query_commits_as_empty() {
        let start = Instant::now();
        let mut w = widget(&["Siri"]);
        w.set_query("   ", start);
        assert!(w.tick(start + ms(220)));
        assert_eq!(w.debounced_query(), "");
        assert!(matches!(w.view(), View::Hint { .. }));
    }

    #[test]
    fn clear_resets_through_debounce_and_refocuses() {
        let start = Instant::now();
        let mut w = widget(&["Siri", "Alexa", "Google"]);
        w.set_query("si", start);
        w.tick(start + ms(220));
        w.blur();

        w.clear(start + ms(300));
        assert_eq!(w.raw_query(), "");
        assert!(w.is_focused());
        // still showing the old results until the quiet interval passes
        assert!(matches!(w.view(), View::Matches { query: "si", .. }));

        assert!(w.tick(start + ms(520)));
        assert_eq!(w.debounced_query(), "");
        assert!(w.results().is_empty());
        assert!(matches!(w.view(), View::Hint { .. }));
    }

    #[test]
    fn unmount_cancels_pending_commit() {
        let start = Instant::now();
        let mut w = widget(&["Siri"]);
        w.set_query("s", start);
        w.unmount();
        assert!(!w.is_pending());
        assert!(!w.tick(start + ms(1000)));
        assert_eq!(w.debounced_query(), "");
    }

    #[test]
    fn messages_for_each_state() {
        assert_eq!(hint_message(&[]), "Type to search");
        assert_eq!(
            hint_message(&["Siri", "Alexa"]),
            "Type to search, e.g. Siri, Alexa"
        );
        assert_eq!(empty_message("xyz"), "No results for \"xyz\"");
    }
}
