pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod log_file;
pub mod matcher;
pub mod options;
pub mod reader;
pub mod statistics;
pub mod tokenizer;

// Re-export main types for convenient access
pub use analyzer::{analyze_text, TextAnalyzer};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ConfigurationError, FileError, InvalidInputError, Result};
pub use matcher::StringMatcher;
pub use options::OptionSet;
pub use statistics::{Metric, StatisticsReport};
pub use tokenizer::{tokenize, tokenize_concurrently, CharacterStream, Tokenized};
