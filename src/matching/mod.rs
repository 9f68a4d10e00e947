// Search over parsed dialogue: simplifiers normalize candidates, comparators decide matches.

use std::sync::Arc;

use tracing::debug;

use crate::script::Turn;

pub mod comparators;
pub mod simplifiers;
pub mod wildcard;

pub use comparators::{exact, simplify_target, subset};
pub use simplifiers::{alphabet_only, collapse_whitespace, compose_simplifiers, ignore_case, skip_chars_if};
pub use wildcard::{wildcard, wildcard_from_pattern};

/// Pure string normalization applied before comparison.
pub type Simplifier = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Decides whether a simplified candidate line matches a raw query.
pub type Comparator = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// First-match search over a frozen copy of a script's turns.
///
/// Owns its snapshot, so it stays valid after the script is dropped and can be
/// shared across threads.
#[derive(Clone)]
pub struct SearchFunction {
    entries: Vec<(Turn, String)>,
    comparator: Comparator,
}

impl SearchFunction {
    pub fn new(turns: &[Turn], comparator: Comparator, simplifiers: &[Simplifier]) -> Self {
        let simplifier = compose_simplifiers(simplifiers);
        let entries: Vec<(Turn, String)> = turns
            .iter()
            .map(|turn| (turn.clone(), simplifier(turn.text())))
            .collect();

        debug!(
            turns = entries.len(),
            simplifiers = simplifiers.len(),
            "Built search function"
        );

        Self { entries, comparator }
    }

    /// The first turn, in script order, whose simplified text matches `query`.
    pub fn search(&self, query: &str) -> Option<&Turn> {
        self.entries
            .iter()
            .find(|(_, simplified)| (self.comparator)(simplified.as_str(), query))
            .map(|(turn, _)| turn)
    }

    /// Every matching turn, in script order.
    pub fn find_all(&self, query: &str) -> Vec<&Turn> {
        self.entries
            .iter()
            .filter(|(_, simplified)| (self.comparator)(simplified.as_str(), query))
            .map(|(turn, _)| turn)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SearchFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchFunction")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
