// WHY: Typed failures of the analysis library, grouped by the stage that raised them

use std::path::PathBuf;

use thiserror::Error;

/// Root error type for a single analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("File error: {0}")]
    File(#[from] FileError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The source became unreadable part way through the read.
    #[error("Failed to read {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tokenizer worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Option-set problems, raised when the options are built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("expected exactly 3 option flags, got {0}")]
    WrongArity(usize),

    #[error("the text occurrence option is set but no pattern was given")]
    MissingPattern,
}

/// Source or log file problems, raised before any parsing starts.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file path is not set")]
    PathNotSet,

    #[error("file cannot be found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("file cannot be read: {}", path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file cannot be written: {}", path.display())]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("pattern must not be empty")]
    EmptyPattern,

    #[error("symbol {symbol:?} is outside the alphabet of size {alphabet_size}")]
    SymbolOutOfRange { symbol: char, alphabet_size: usize },
}
