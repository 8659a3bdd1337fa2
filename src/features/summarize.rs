use tracing::info;

use crate::ai::client::SummaryClient;
use crate::core::models::SummaryStyle;
use crate::errors::SummarizeError;
use crate::formatter::format_summary;
use crate::prompt::build_prompt;

/// Summarize `text` in the requested `style`.
///
/// Builds the prompt, fetches the raw summary from the remote model and
/// formats it. Errors from the remote call are returned unchanged.
///
/// # Errors
///
/// Propagates any [`SummarizeError`] raised by [`SummaryClient::fetch_summary`].
pub async fn summarize(
    client: &SummaryClient,
    style: SummaryStyle,
    text: &str,
) -> Result<String, SummarizeError> {
    let prompt = build_prompt(style, text);
    let raw = client.fetch_summary(style, prompt).await?;
    let formatted = format_summary(style, &raw);
    info!(
        "Generated {} summary ({} chars)",
        style,
        formatted.chars().count()
    );
    Ok(formatted)
}
