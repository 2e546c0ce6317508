//! Case-insensitive substring filtering

use crate::candidates::CandidateList;

/// Indices of candidates containing `query`, in list order.
///
/// An empty query yields no results.
pub fn filter_indices(candidates: &CandidateList, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    candidates
        .iter_with_lowered()
        .enumerate()
        .filter(|(_, (_, lowered))| lowered.contains(needle.as_str()))
        .map(|(idx, _)| idx)
        .collect()
}

/// Result set derived from a candidate list and a committed query.
///
/// Recomputed only when the query changes.
#[derive(Debug, Clone)]
pub struct ResultSet {
    candidates: CandidateList,
    query: String,
    indices: Vec<usize>,
}

impl ResultSet {
    pub fn new(candidates: CandidateList) -> Self {
        Self {
            candidates,
            query: String::new(),
            indices: Vec::new(),
        }
    }

    /// Bring the set up to date with `query`. Returns true if it was recomputed.
    pub fn refresh(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query.clear();
        self.query.push_str(query);
        self.indices = filter_indices(&self.candidates, query);
        true
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.indices
            .get(position)
            .and_then(|&idx| self.candidates.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.indices
            .iter()
            .filter_map(move |&idx| self.candidates.get(idx))
    }
}
