// WHY: Start-of-turn and non-dialogue patterns are validated once, then shared read-only

use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;
use tracing::debug;

use crate::error::{Error, Result};

const SPEAKER_GROUP: &str = "speaker";
const DIALOGUE_GROUP: &str = "dialogue";

/// Compiled parser configuration.
///
/// The turn pattern always has the shape
/// `^(?:{prefix})(?P<speaker>(?:{speaker}))(?:{postfix})(?P<dialogue>.*)`. The
/// caller supplied fragments are checked one by one, so the only capture groups in
/// the full pattern are the two added here.
#[derive(Debug, Clone)]
pub struct PatternConfig {
    turn_start: Regex,
    multi_line: bool,
    non_dialogue: Vec<Regex>,
}

impl PatternConfig {
    /// Build the start-of-turn pattern from its three fragments.
    ///
    /// With `multi_line` set, every line that neither starts a turn nor matches a
    /// non-dialogue pattern is appended to the previous turn.
    pub fn new(prefix: &str, speaker: &str, postfix: &str, multi_line: bool) -> Result<Self> {
        for fragment in [prefix, speaker, postfix] {
            validate_fragment(fragment)?;
        }

        // WHY: each fragment gets its own group so a top-level `|` stays inside it
        // and cannot unanchor the pattern or skip the speaker group
        let pattern = format!(
            "^(?:{prefix})(?P<{SPEAKER_GROUP}>(?:{speaker}))(?:{postfix})(?P<{DIALOGUE_GROUP}>.*)"
        );
        let turn_start = Regex::new(&pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.clone(),
            source: Box::new(source),
        })?;

        debug!(%pattern, multi_line, "Compiled turn pattern");

        Ok(Self {
            turn_start,
            multi_line,
            non_dialogue: Vec::new(),
        })
    }

    /// Replace the non-dialogue patterns with the given sources.
    ///
    /// They are used as is, so anchor them with `^` and `$` unless a partial match
    /// inside dialogue should also break a turn. Only consulted in multi-line mode.
    pub fn with_non_dialogue<I, S>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|source| Error::InvalidNonDialoguePattern {
                    pattern: p.to_string(),
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_non_dialogue_regexes(compiled))
    }

    /// Replace the non-dialogue patterns with already compiled ones.
    pub fn with_non_dialogue_regexes(mut self, patterns: Vec<Regex>) -> Self {
        debug!(count = patterns.len(), "Installed non-dialogue patterns");
        self.non_dialogue = patterns;
        self
    }

    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    pub fn non_dialogue_count(&self) -> usize {
        self.non_dialogue.len()
    }

    /// Fresh capture slots for [`PatternConfig::match_turn_start`].
    pub fn create_captures(&self) -> Captures {
        self.turn_start.create_captures()
    }

    /// Returns `(speaker, dialogue)` if `line` opens a new turn.
    pub fn match_turn_start<'h>(
        &self,
        line: &'h str,
        caps: &mut Captures,
    ) -> Option<(&'h str, &'h str)> {
        self.turn_start.captures(line, caps);
        if !caps.is_match() {
            return None;
        }
        let speaker = caps.get_group_by_name(SPEAKER_GROUP)?;
        let dialogue = caps.get_group_by_name(DIALOGUE_GROUP)?;
        Some((
            &line[speaker.start..speaker.end],
            &line[dialogue.start..dialogue.end],
        ))
    }

    pub fn is_non_dialogue(&self, line: &str) -> bool {
        self.non_dialogue.iter().any(|re| re.is_match(line))
    }
}

/// A fragment must compile on its own and must not add capture groups.
fn validate_fragment(fragment: &str) -> Result<()> {
    let re = Regex::new(fragment).map_err(|source| Error::InvalidFragment {
        fragment: fragment.to_string(),
        source: Box::new(source),
    })?;
    // captures_len counts the implicit whole-match group
    if re.captures_len() > 1 {
        return Err(Error::CaptureGroupInFragment {
            fragment: fragment.to_string(),
        });
    }
    Ok(())
}
