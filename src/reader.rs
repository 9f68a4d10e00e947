use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::parser::TranscriptParser;
use crate::script::Script;

/// Configuration for transcript file reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for the line reader (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for one transcript read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Reads transcript files line by line straight into a [`TranscriptParser`]
pub struct TranscriptReader {
    config: ReaderConfig,
}

impl TranscriptReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Parse the file at `file_path` into a [`Script`].
    ///
    /// Any read failure, including invalid UTF-8, aborts with [`Error::Read`]
    /// naming the zero-based line that failed.
    pub fn read_script<P: AsRef<Path>>(
        &self,
        file_path: P,
        parser: &TranscriptParser,
    ) -> Result<(Script, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = Instant::now();

        debug!("Starting read of transcript: {}", path.display());

        let file = File::open(path).map_err(|source| {
            warn!("Failed to open transcript {}: {}", path.display(), source);
            Error::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut line_count = 0u64;
        let mut byte_count = 0u64;
        // WHY: read_line reports the bytes actually consumed, line ending included,
        // so CRLF files and a missing final newline are counted exactly
        let lines = std::iter::from_fn(|| {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => None,
                Ok(n) => {
                    line_count += 1;
                    byte_count += n as u64;
                    trim_line_ending(&mut line);
                    Some(Ok(line))
                }
                Err(e) => Some(Err(e)),
            }
        });

        let raw_lines = parser.parse_lines(lines).inspect_err(|e| {
            warn!("Read error in {}: {}", path.display(), e);
        })?;
        let script = Script::new(raw_lines);

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: line_count,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Parsed {}: {} lines, {} bytes, {} turns, {} speakers in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            script.turns().len(),
            script.speakers().len(),
            stats.duration_ms,
        );

        Ok((script, stats))
    }
}

/// Strip `\n` or `\r\n` the way [`BufRead::lines`] does.
fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Convenience function for parsing a single file with default reader configuration
pub fn read_script<P: AsRef<Path>>(file_path: P, parser: &TranscriptParser) -> Result<Script> {
    let reader = TranscriptReader::new(ReaderConfig::default());
    let (script, _stats) = reader.read_script(file_path, parser)?;
    Ok(script)
}
