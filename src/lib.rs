pub mod config;
pub mod error;
pub mod matching;
pub mod parser;
pub mod pattern;
pub mod reader;
pub mod render;
pub mod script;

// Re-export main types for convenient access
pub use error::{Error, Result};
pub use parser::{RawLine, TranscriptParser};
pub use pattern::PatternConfig;
pub use script::{Script, Turn, NON_SPEAKER};

// Re-export the matching surface
pub use matching::{Comparator, SearchFunction, Simplifier};
