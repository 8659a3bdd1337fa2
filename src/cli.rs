use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::ai::client::SummaryClient;
use crate::core::config::{AppConfig, load_dotenv};
use crate::core::models::SummaryStyle;
use crate::errors::SummarizeError;
use crate::features::summarize::summarize;

#[derive(Debug, Parser)]
#[command(name = "tldr-summarize")]
#[command(about = "Summarize a text file with a hosted summarization model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the text file to summarize (positional also accepted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to the text file to summarize
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Summary type: short|medium|bullet
    #[arg(short = 't', long = "type", default_value = "short", value_parser = parse_style)]
    pub style: SummaryStyle,
}

fn parse_style(raw: &str) -> Result<SummaryStyle, String> {
    raw.parse()
}

impl Cli {
    /// `--input` wins over the positional path.
    ///
    /// # Errors
    ///
    /// Returns an error when neither was given.
    pub fn input_path(&self) -> Result<&Path> {
        self.input
            .as_deref()
            .or(self.file.as_deref())
            .ok_or_else(|| anyhow!("missing --input <file> (or positional file path)"))
    }
}

/// Entry point for the `tldr-summarize` binary.
///
/// # Errors
///
/// Returns an error for bad arguments, unreadable input, invalid configuration
/// or a failed summarization call.
pub async fn run() -> Result<()> {
    load_dotenv();
    let cli = Cli::parse();
    crate::setup_logging();

    let summary = execute_with(&cli, AppConfig::from_env).await?;
    println!("{summary}");
    Ok(())
}

/// Resolves the input path and reads the file. Invalid UTF-8 is replaced
/// rather than rejected.
///
/// # Errors
///
/// Returns an error for a missing or unreadable input path.
pub fn read_input(cli: &Cli) -> Result<String> {
    let path = cli.input_path().context("Argument error")?;
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads the input file and runs the summarization pipeline with `config`.
///
/// # Errors
///
/// Returns an error for a missing or unreadable input path, or when the
/// summarization call fails.
pub async fn execute(cli: &Cli, config: &AppConfig) -> Result<String> {
    execute_with(cli, || Ok(config.clone())).await
}

/// Like [`execute`], but configuration is only loaded once the input has
/// been read, so argument and file errors are reported first.
///
/// # Errors
///
/// Returns an error for a missing or unreadable input path, invalid
/// configuration, or a failed summarization call.
pub async fn execute_with<F>(cli: &Cli, load_config: F) -> Result<String>
where
    F: FnOnce() -> Result<AppConfig, SummarizeError>,
{
    let content = read_input(cli)?;
    let config = load_config().context("Failed to load configuration")?;

    let client = SummaryClient::new(config.client_config())?;
    summarize(&client, cli.style, &content)
        .await
        .context("Failed to get summary")
}
