use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use textualyser::{AnalyzerConfig, OptionSet, TextAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "textualyser")]
#[command(about = "Character, word and sentence statistics for a text file")]
#[command(version)]
struct Args {
    /// Text file to analyse
    file: PathBuf,

    /// Average sentence and word lengths
    #[arg(long)]
    averages: bool,

    /// Character frequencies and character/suffix counts
    #[arg(long)]
    frequencies: bool,

    /// Count occurrences of PATTERN in the text
    #[arg(long, value_name = "PATTERN")]
    find: Option<String>,

    /// Averages and frequencies (the default when no category is chosen)
    #[arg(long)]
    all: bool,

    /// Also write the report to log_<file name> beside the input
    #[arg(long)]
    save_log: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = 8192)]
    buffer_size: usize,
}

impl Args {
    fn options(&self) -> OptionSet {
        let nothing_chosen = !self.averages && !self.frequencies && self.find.is_none();
        let both = self.all || nothing_chosen;
        OptionSet::new(self.averages || both, self.frequencies || both, self.find.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if !args.file.exists() {
        anyhow::bail!("File does not exist: {}", args.file.display());
    }

    if args.buffer_size == 0 {
        anyhow::bail!("--buffer-size must be greater than zero");
    }

    let config = AnalyzerConfig {
        buffer_size: args.buffer_size,
        ..Default::default()
    };
    let mut analyzer = TextAnalyzer::new(config);
    let options = args.options();

    let report = analyzer.process(&args.file, &options).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", analyzer.rendered());
    }

    if args.save_log {
        let log_path = analyzer.save_log().await?;
        info!("Report saved to {}", log_path.display());
    }

    Ok(())
}
