// Integration test utilities and common code

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub mod fixtures;

/// Temporary directory holding transcript and settings files for one test
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a transcript file with the given content
    pub fn create_transcript(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.root_path.join(name);
        fs::write(&file_path, content).expect("Failed to write transcript");
        file_path
    }

    /// Write a JSON settings file
    pub fn create_settings(&self, name: &str, json: &str) -> PathBuf {
        let file_path = self.root_path.join(name);
        fs::write(&file_path, json).expect("Failed to write settings");
        file_path
    }
}
