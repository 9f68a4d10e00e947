use std::sync::Arc;

use super::{compose_simplifiers, Comparator, Simplifier};

/// Candidate and query are equal.
pub fn exact() -> Comparator {
    Arc::new(|candidate: &str, target: &str| candidate == target)
}

/// Candidate contains the query.
pub fn subset() -> Comparator {
    Arc::new(|candidate: &str, target: &str| candidate.contains(target))
}

/// Run the query through `simplifiers` (composed right to left) before `comparator`.
///
/// Base comparators see the raw query; wrap them with the same chain used for the
/// search function to get a symmetric comparison.
pub fn simplify_target(comparator: Comparator, simplifiers: &[Simplifier]) -> Comparator {
    let simplifier = compose_simplifiers(simplifiers);
    Arc::new(move |candidate: &str, target: &str| comparator(candidate, simplifier(target).as_str()))
}
