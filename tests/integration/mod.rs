// Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod fixtures;

/// Temporary directory holding the text files a test analyses.
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

    /// Write a text file with the given content, creating parent directories.
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        self.create_binary_file(relative_path, content.as_bytes())
    }

    pub fn create_binary_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Expected log location for a source, computed independently of the library.
    pub fn expected_log_path<P: AsRef<Path>>(&self, source_path: P) -> PathBuf {
        let source_path = source_path.as_ref();
        let file_name = source_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        source_path.with_file_name(format!("log_{file_name}"))
    }

    pub fn read_log<P: AsRef<Path>>(&self, source_path: P) -> Result<String, std::io::Error> {
        fs::read_to_string(self.expected_log_path(source_path))
    }
}
