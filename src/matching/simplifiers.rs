use std::sync::Arc;

use super::Simplifier;

/// Compose simplifiers right to left: `[f, g, h]` becomes `x -> f(g(h(x)))`.
///
/// No simplifiers gives the identity.
pub fn compose_simplifiers(simplifiers: &[Simplifier]) -> Simplifier {
    let chain: Vec<Simplifier> = simplifiers.iter().rev().cloned().collect();
    Arc::new(move |s: &str| {
        chain
            .iter()
            .fold(s.to_string(), |acc, simplifier| simplifier(acc.as_str()))
    })
}

/// Drop every char for which `skip` returns true.
pub fn skip_chars_if<F>(skip: F) -> Simplifier
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Arc::new(move |s: &str| s.chars().filter(|c| !skip(*c)).collect())
}

/// Keep ASCII letters only.
pub fn alphabet_only() -> Simplifier {
    skip_chars_if(|c| !c.is_ascii_alphabetic())
}

/// Uppercase, so comparisons ignore case.
pub fn ignore_case() -> Simplifier {
    Arc::new(|s: &str| s.to_uppercase())
}

/// Collapse whitespace runs (line breaks included) to one space and trim the ends.
pub fn collapse_whitespace() -> Simplifier {
    Arc::new(|s: &str| s.split_whitespace().collect::<Vec<_>>().join(" "))
}
