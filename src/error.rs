use std::path::PathBuf;

use regex_automata::meta::BuildError;
use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a transcript from being configured, read or parsed.
///
/// Configuration variants are produced before any line is looked at. `Read` is the
/// only variant raised mid-parse, and it always aborts the whole parse.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pattern fragments must not contain capture groups: {fragment:?}")]
    CaptureGroupInFragment { fragment: String },

    #[error("pattern fragment did not compile: {fragment:?}")]
    InvalidFragment {
        fragment: String,
        #[source]
        source: Box<BuildError>,
    },

    #[error("full turn pattern did not compile: {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },

    #[error("non-dialogue pattern did not compile: {pattern:?}")]
    InvalidNonDialoguePattern {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },

    #[error("wildcard pattern did not compile: {pattern:?}")]
    InvalidWildcard {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },

    #[error("unable to read the entire transcript (stopped at line {line})")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parser settings")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Index of the last line processed before a read failure, if any line was.
    pub fn last_good_line(&self) -> Option<usize> {
        match self {
            Error::Read { line, .. } => line.checked_sub(1),
            _ => None,
        }
    }

    /// True for every failure raised while building a configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::CaptureGroupInFragment { .. }
                | Error::InvalidFragment { .. }
                | Error::InvalidPattern { .. }
                | Error::InvalidNonDialoguePattern { .. }
                | Error::InvalidWildcard { .. }
                | Error::Config(_)
        )
    }
}
