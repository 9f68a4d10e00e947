// WHY: Single-pass line classification state machine: turn start, unattributed line, or continuation

use std::convert::Infallible;
use std::io::{self, BufRead};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::pattern::PatternConfig;
use crate::script::{Script, NON_SPEAKER};

/// One parsed turn before it is frozen into a [`crate::Turn`].
///
/// Always holds at least one line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    speaker: String,
    text: String,
    line_numbers: Vec<usize>,
}

impl RawLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>, line_number: usize) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            line_numbers: vec![line_number],
        }
    }

    /// Append a continuation line, separated by `\n`.
    pub fn push_line(&mut self, text: &str, line_number: usize) {
        self.text.push('\n');
        self.text.push_str(text);
        self.line_numbers.push(line_number);
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_numbers(&self) -> &[usize] {
        &self.line_numbers
    }

    pub(crate) fn into_parts(self) -> (String, String, Vec<usize>) {
        (self.speaker, self.text, self.line_numbers)
    }
}

/// Turns raw transcript lines into [`RawLine`]s using a fixed [`PatternConfig`].
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    config: PatternConfig,
}

impl TranscriptParser {
    pub fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Classify every line in order.
    ///
    /// The first read error aborts the parse; the error carries the zero-based
    /// index of the line that could not be read.
    pub fn parse_lines<I>(&self, lines: I) -> Result<Vec<RawLine>>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        self.classify(lines)
            .map_err(|(line, source)| Error::Read { line, source })
    }

    /// Parse an in-memory transcript. Line endings follow [`BufRead::lines`]:
    /// `\n` separates lines and a trailing `\r` is dropped.
    pub fn parse_str(&self, text: &str) -> Vec<RawLine> {
        let lines = text.lines().map(|l| Ok::<_, Infallible>(l.to_string()));
        self.classify(lines).unwrap_or_else(|(_, never)| match never {})
    }

    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<RawLine>> {
        self.parse_lines(reader.lines())
    }

    /// Parse everything `reader` yields and build the [`Script`].
    pub fn load_transcript<R: BufRead>(&self, reader: R) -> Result<Script> {
        let raw_lines = self.parse_reader(reader)?;
        let script = Script::new(raw_lines);
        info!(
            turns = script.turns().len(),
            speakers = script.speakers().len(),
            "Loaded transcript"
        );
        Ok(script)
    }

    // WHY: generic over the line error so in-memory input can use `Infallible`
    // and never needs a fallback for a failure that cannot happen
    fn classify<I, E>(&self, lines: I) -> std::result::Result<Vec<RawLine>, (usize, E)>
    where
        I: IntoIterator<Item = std::result::Result<String, E>>,
    {
        let mut caps = self.config.create_captures();
        let mut raw_lines = Vec::new();
        let mut pending: Option<RawLine> = None;

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.map_err(|source| (index, source))?;

            if let Some((speaker, dialogue)) = self.config.match_turn_start(&line, &mut caps) {
                raw_lines.extend(pending.replace(RawLine::new(speaker, dialogue, index)));
                continue;
            }

            match pending.as_mut() {
                Some(turn) if self.config.multi_line() && !self.config.is_non_dialogue(&line) => {
                    turn.push_line(&line, index);
                }
                _ => {
                    raw_lines.extend(pending.replace(RawLine::new(NON_SPEAKER, line, index)));
                }
            }
        }

        raw_lines.extend(pending);

        debug!(turns = raw_lines.len(), "Classified transcript lines");
        Ok(raw_lines)
    }
}
