//! The searchable data source
//!
//! An ordered, immutable list of display strings. Cloning is cheap; every
//! clone shares the same backing slice.

use crate::{Result, SearchBoxError};
use std::collections::HashSet;
use std::sync::Arc;

/// Names searched when no items are supplied on the command line
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "Siri", "Alexa", "Google", "Facebook", "Twitter", "Linkedin", "Sinkedin",
];

/// Immutable candidate list with a cached lowercase form of each entry
#[derive(Debug, Clone)]
pub struct CandidateList {
    items: Arc<[String]>,
    lowered: Arc<[String]>,
}

impl CandidateList {
    /// Build a list from items, keeping their order.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let lowered: Vec<String> = items.iter().map(|s| s.to_lowercase()).collect();
        Self {
            items: items.into(),
            lowered: lowered.into(),
        }
    }

    /// Build a list from user input, rejecting blank and duplicate items.
    pub fn from_user_items(items: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.trim().is_empty() {
                return Err(SearchBoxError::invalid_option("--item", "items must not be blank"));
            }
            if !seen.insert(item.as_str()) {
                return Err(SearchBoxError::invalid_option(
                    "--item",
                    format!("duplicate item '{}'", item),
                ));
            }
        }
        Ok(Self::new(items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }

    /// Iterate `(original, lowercase)` pairs in list order.
    pub(crate) fn iter_with_lowered(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.items
            .iter()
            .zip(self.lowered.iter())
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }
}

impl Default for CandidateList {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES.iter().copied())
    }
}
