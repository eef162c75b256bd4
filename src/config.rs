// WHY: Tunables for one analysis run, loadable from serde sources

use serde::{Deserialize, Serialize};

use crate::matcher::EXTENDED_ASCII_ALPHABET;

/// Analyzer-wide settings that stay fixed across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Read buffer size for the source file (default: 8KB)
    pub buffer_size: usize,
    /// Number of symbols the occurrence matcher accepts in a pattern
    pub alphabet_size: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            alphabet_size: EXTENDED_ASCII_ALPHABET,
        }
    }
}
