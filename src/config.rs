use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::pattern::PatternConfig;

/// Serializable description of a [`PatternConfig`].
///
/// ```json
/// { "speaker": "[A-Z]+", "postfix": ":\\s*", "multi_line": true,
///   "non_dialogue": ["^\\[.*\\]$"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserSettings {
    pub prefix: String,
    pub speaker: String,
    pub postfix: String,
    pub multi_line: bool,
    /// Used verbatim; only consulted when `multi_line` is set.
    pub non_dialogue: Vec<String>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            speaker: r"\w+".to_string(),
            postfix: r":\s*".to_string(),
            multi_line: false,
            non_dialogue: Vec::new(),
        }
    }
}

impl ParserSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        info!(path = %path.display(), "Loaded parser settings");
        Ok(settings)
    }

    /// Validate and compile every pattern.
    pub fn compile(&self) -> Result<PatternConfig> {
        PatternConfig::new(&self.prefix, &self.speaker, &self.postfix, self.multi_line)?
            .with_non_dialogue(&self.non_dialogue)
    }
}
