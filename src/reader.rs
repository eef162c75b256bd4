// WHY: Single buffered read of the source file with UTF-8 or Latin-1 decoding

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, FileError, Result};

/// Statistics for one source read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    /// Whether the bytes were decoded as Latin-1 because they were not valid UTF-8
    pub latin1_fallback: bool,
}

/// Check that `path` names an existing, readable regular file.
pub async fn validate_source(path: &Path) -> Result<()> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FileError::NotFound(path.to_path_buf()).into());
        }
        Err(e) => {
            return Err(FileError::NotReadable { path: path.to_path_buf(), source: e }.into());
        }
    };

    if !metadata.is_file() {
        return Err(FileError::NotAFile(path.to_path_buf()).into());
    }
    Ok(())
}

/// Read the whole source once into memory.
///
/// Validation and opening happen before any byte is read; a failure after
/// that point is a `Parse` error and nothing read so far is returned.
pub async fn read_source(path: &Path, config: &AnalyzerConfig) -> Result<(String, ReadStats)> {
    let start_time = std::time::Instant::now();

    validate_source(path).await?;

    let file = File::open(path).await.map_err(|e| {
        warn!("Failed to open file {}: {}", path.display(), e);
        FileError::NotReadable { path: path.to_path_buf(), source: e }
    })?;

    debug!("Starting buffered read of file: {}", path.display());

    // The handle is dropped on every return path below.
    let mut reader = BufReader::with_capacity(config.buffer_size, file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await.map_err(|e| {
        warn!("Read error in {}: {}", path.display(), e);
        AnalysisError::Parse { path: path.to_path_buf(), source: e }
    })?;

    let bytes_read = bytes.len() as u64;
    let (text, latin1_fallback) = decode(bytes);
    if latin1_fallback {
        debug!("{} is not valid UTF-8, decoded as Latin-1", path.display());
    }

    let stats = ReadStats {
        file_path: path.display().to_string(),
        bytes_read,
        duration_ms: start_time.elapsed().as_millis() as u64,
        latin1_fallback,
    };

    info!(
        "Successfully read {}: {} chars in {}ms",
        path.display(),
        text.chars().count(),
        stats.duration_ms
    );

    Ok((text, stats))
}

/// UTF-8 when valid, otherwise one char per byte (ISO-8859-1).
fn decode(bytes: Vec<u8>) -> (String, bool) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, false),
        Err(e) => {
            let text = e.into_bytes().into_iter().map(char::from).collect();
            (text, true)
        }
    }
}
