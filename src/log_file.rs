// WHY: Persisting a rendered report next to the analysed file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FileError, Result};

/// Prefix of the log file written beside each source.
pub const LOG_FILE_PREFIX: &str = "log_";

/// `dir/book.txt` -> `dir/log_book.txt`
pub fn log_file_path(source_path: &Path) -> Result<PathBuf> {
    let file_name = source_path
        .file_name()
        .ok_or(FileError::PathNotSet)?
        .to_string_lossy();
    Ok(source_path.with_file_name(format!("{LOG_FILE_PREFIX}{file_name}")))
}

/// Write `content` to the log file for `source_path`, replacing any earlier log.
pub async fn write_log(source_path: &Path, content: &str) -> Result<PathBuf> {
    let log_path = log_file_path(source_path)?;
    tokio::fs::write(&log_path, content)
        .await
        .map_err(|e| FileError::NotWritable { path: log_path.clone(), source: e })?;
    info!("Saved report log to {}", log_path.display());
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_path_is_sibling() {
        let path = log_file_path(Path::new("/data/texts/book.txt")).unwrap();
        assert_eq!(path, PathBuf::from("/data/texts/log_book.txt"));

        let path = log_file_path(Path::new("notes")).unwrap();
        assert_eq!(path, PathBuf::from("log_notes"));
    }

    #[test]
    fn test_log_file_path_needs_a_file_name() {
        let err = log_file_path(Path::new("/")).unwrap_err();
        assert!(matches!(err, AnalysisError::File(FileError::PathNotSet)));
    }

    #[tokio::test]
    async fn test_write_log_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("book.txt");
        std::fs::write(&source, "content").unwrap();

        let first = write_log(&source, "first report with more text").await.unwrap();
        let second = write_log(&source, "second").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_write_log_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("missing").join("book.txt");

        let err = write_log(&source, "report").await.unwrap_err();

        assert!(matches!(err, AnalysisError::File(FileError::NotWritable { .. })));
    }
}
