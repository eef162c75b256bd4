// WHY: Runs one analysis: read the source, tokenize it, compute the requested statistics.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AnalyzerConfig;
use crate::error::{FileError, Result};
use crate::log_file;
use crate::options::OptionSet;
use crate::reader::{self, ReadStats};
use crate::statistics::StatisticsReport;
use crate::tokenizer::{self, Tokenized};

/// Caller-owned analyzer holding the report of its most recent run.
///
/// `process` takes `&mut self`, so one instance never has two runs in flight.
#[derive(Debug, Default)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
    report: StatisticsReport,
    rendered: String,
    source: Option<PathBuf>,
    read_stats: Option<ReadStats>,
}

impl TextAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyse the file at `source` with the given options.
    ///
    /// The previous report is cleared first; on any error it stays cleared.
    pub async fn process(&mut self, source: &Path, options: &OptionSet) -> Result<&StatisticsReport> {
        self.report.reset();
        self.rendered.clear();
        self.source = None;
        self.read_stats = None;

        info!(path = %source.display(), options = ?options.flags(), "Starting analysis");

        if let Err(e) = self.run(source, options).await {
            warn!(path = %source.display(), error = %e, "Analysis failed");
            self.report.reset();
            return Err(e);
        }

        self.rendered = self.report.render();
        self.source = Some(source.to_path_buf());
        info!(path = %source.display(), "Analysis complete");
        Ok(&self.report)
    }

    async fn run(&mut self, source: &Path, options: &OptionSet) -> Result<()> {
        let (text, stats) = reader::read_source(source, &self.config).await?;
        info!(
            bytes = stats.bytes_read,
            duration_ms = stats.duration_ms,
            latin1 = stats.latin1_fallback,
            "Read {}",
            stats.file_path
        );

        let tokens = tokenizer::tokenize_concurrently(Arc::from(text)).await?;
        self.report.compute(&tokens, options, self.config.alphabet_size)?;
        self.read_stats = Some(stats);
        Ok(())
    }

    pub fn report(&self) -> &StatisticsReport {
        &self.report
    }

    /// Report text from the last successful run, empty before any run.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// The source of the last successful run.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn read_stats(&self) -> Option<&ReadStats> {
        self.read_stats.as_ref()
    }

    /// Write the rendered report to `log_<file name>` beside the last analysed source.
    pub async fn save_log(&self) -> Result<PathBuf> {
        let source = self.source.as_deref().ok_or(FileError::PathNotSet)?;
        log_file::write_log(source, &self.rendered).await
    }
}

/// Analyse an in-memory text on the calling thread.
pub fn analyze_text(text: &str, options: &OptionSet, config: &AnalyzerConfig) -> Result<StatisticsReport> {
    let tokens: Tokenized = tokenizer::tokenize(text);
    let mut report = StatisticsReport::new();
    report.compute(&tokens, options, config.alphabet_size)?;
    Ok(report)
}
