//! TLDR summarize - summarizes a block of text using a hosted summarization model.
//!
//! The pipeline has three stages:
//! 1. Prompt construction: a style-specific directive is prepended to the text
//! 2. Remote call: the prompt is POSTed to a Hugging Face style inference endpoint
//! 3. Formatting: the returned text is trimmed to a sentence budget or bulleted
//!
//! # Styles
//!
//! - `short`: one or two sentences
//! - `medium`: a paragraph of at most four sentences
//! - `bullet`: one `- ` prefixed line per point
//!
//! # Example
//!
//! ```no_run
//! use tldr_summarize::ai::SummaryClient;
//! use tldr_summarize::core::config::AppConfig;
//! use tldr_summarize::core::models::SummaryStyle;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     tldr_summarize::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let client = SummaryClient::new(config.client_config())?;
//!
//!     let text = std::fs::read_to_string("article.txt")?;
//!     let summary =
//!         tldr_summarize::features::summarize(&client, SummaryStyle::Bullet, &text).await?;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod cli;
pub mod core;
pub mod errors;
pub mod features;
pub mod formatter;
pub mod prompt;
pub mod utils;

pub use errors::SummarizeError;

/// Configure structured logging with JSON format on stderr.
///
/// Verbosity follows `RUST_LOG` and defaults to `warn`, so stdout carries
/// only the summary. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// tldr_summarize::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
