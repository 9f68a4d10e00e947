// Immutable script model built from parsed raw lines.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::matching::{Comparator, SearchFunction, Simplifier};
use crate::parser::RawLine;

/// Speaker recorded for lines the turn pattern did not attribute to anyone.
pub const NON_SPEAKER: &str = "";

/// One attributed (or unattributed) block of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    speaker: String,
    line_numbers: Vec<usize>,
    text: String,
}

impl Turn {
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn is_attributed(&self) -> bool {
        self.speaker != NON_SPEAKER
    }

    /// Zero-based source lines, ascending.
    pub fn line_numbers(&self) -> &[usize] {
        &self.line_numbers
    }

    pub fn first_line_number(&self) -> usize {
        self.line_numbers[0]
    }

    /// Dialogue text; lines of a multi-line turn are joined with `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<RawLine> for Turn {
    fn from(raw: RawLine) -> Self {
        let (speaker, text, line_numbers) = raw.into_parts();
        Self {
            speaker,
            line_numbers,
            text,
        }
    }
}

/// Parsed transcript: turns in input order plus a per-speaker index.
#[derive(Debug, Clone, Default)]
pub struct Script {
    speakers: Vec<String>,
    turns_by_speaker: HashMap<String, Vec<Turn>>,
    turns: Vec<Turn>,
}

impl Script {
    pub fn new(raw_lines: Vec<RawLine>) -> Self {
        let mut script = Script::default();

        for turn in raw_lines.into_iter().map(Turn::from) {
            if !script.turns_by_speaker.contains_key(turn.speaker()) {
                script.speakers.push(turn.speaker.clone());
            }
            script
                .turns_by_speaker
                .entry(turn.speaker.clone())
                .or_default()
                .push(turn.clone());
            script.turns.push(turn);
        }

        debug!(
            turns = script.turns.len(),
            speakers = script.speakers.len(),
            "Built script"
        );
        script
    }

    /// Distinct speakers in order of first appearance. Includes [`NON_SPEAKER`]
    /// when the transcript has unattributed lines.
    pub fn speakers(&self) -> &[String] {
        &self.speakers
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns of one speaker in input order; empty for an unknown speaker.
    pub fn turns_by(&self, speaker: &str) -> &[Turn] {
        self.turns_by_speaker
            .get(speaker)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Snapshot the dialogue and return a reusable search over it.
    ///
    /// Every turn is simplified once here, not per query.
    pub fn search_function(
        &self,
        comparator: Comparator,
        simplifiers: &[Simplifier],
    ) -> SearchFunction {
        SearchFunction::new(&self.turns, comparator, simplifiers)
    }
}
