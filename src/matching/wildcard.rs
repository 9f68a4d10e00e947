// Glob-style comparator: marker matches in the query are stretchy gaps, the text
// around them has to appear in the candidate in order.

use std::sync::Arc;

use regex_automata::meta::Regex;

use super::{subset, Comparator};
use crate::error::{Error, Result};

/// Build a wildcard-aware comparator from an already compiled marker pattern.
///
/// Spans of `target` matched by `marker` are gaps. The literal stretches between
/// and around them are required phrases, searched left to right in the candidate.
/// A query without any marker match falls back to [`subset`]; a query made only
/// of markers (or of phrases no longer than one char) matches everything.
pub fn wildcard(marker: Regex) -> Comparator {
    let contains = subset();
    Arc::new(move |candidate: &str, target: &str| {
        match required_phrases(&marker, target) {
            None => contains(candidate, target),
            Some(phrases) => phrases_in_order(candidate, &phrases),
        }
    })
}

/// Compile `pattern` as the wildcard marker, e.g. `\*+`.
pub fn wildcard_from_pattern(pattern: &str) -> Result<Comparator> {
    let marker = Regex::new(pattern).map_err(|source| Error::InvalidWildcard {
        pattern: pattern.to_string(),
        source: Box::new(source),
    })?;
    Ok(wildcard(marker))
}

/// Literal phrases of `target` outside the marker spans, or `None` without markers.
///
/// Phrases of a single char are dropped along with empty ones.
fn required_phrases<'t>(marker: &Regex, target: &'t str) -> Option<Vec<&'t str>> {
    let mut phrases = Vec::new();
    let mut literal_start = 0;
    let mut saw_marker = false;

    for gap in marker.find_iter(target) {
        saw_marker = true;
        phrases.push(&target[literal_start..gap.start()]);
        literal_start = gap.end();
    }
    if !saw_marker {
        return None;
    }
    phrases.push(&target[literal_start..]);

    phrases.retain(|phrase| phrase.chars().nth(1).is_some());
    Some(phrases)
}

/// Greedy, non-backtracking: each phrase is searched from just past the previous
/// match plus one more char.
fn phrases_in_order(candidate: &str, phrases: &[&str]) -> bool {
    let Some((last, leading)) = phrases.split_last() else {
        return true;
    };

    let mut rest = candidate;
    for phrase in leading {
        let Some(start) = rest.find(phrase) else {
            return false;
        };
        let end = start + phrase.len();
        let Some(skipped) = rest[end..].chars().next() else {
            // more phrases left but no room for them
            return false;
        };
        rest = &rest[end + skipped.len_utf8()..];
    }
    rest.contains(last)
}
