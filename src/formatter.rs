//! Post-processing of raw model output into the requested summary shape.

use tracing::debug;

use crate::core::models::{RawSummary, SummaryStyle};
use crate::prompt::BULLET_MARKER;
use crate::utils::sentences::{PunctuationSplitter, SentenceSplitter};

/// Reshapes raw summaries. Never fails: whenever post-processing would leave
/// nothing, the trimmed input is returned instead.
#[derive(Debug, Clone, Default)]
pub struct SummaryFormatter<S = PunctuationSplitter> {
    splitter: S,
}

impl SummaryFormatter<PunctuationSplitter> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SentenceSplitter> SummaryFormatter<S> {
    #[must_use]
    pub fn with_splitter(splitter: S) -> Self {
        Self { splitter }
    }

    #[must_use]
    pub fn format(&self, style: SummaryStyle, raw: &RawSummary) -> String {
        let summary = raw.as_str().trim();
        match style.sentence_limit() {
            Some(limit) => self.truncate_sentences(summary, limit),
            None => self.bulletize(summary),
        }
    }

    fn bulletize(&self, summary: &str) -> String {
        let lines: Vec<&str> = summary.split('\n').collect();
        if lines
            .iter()
            .any(|line| line.trim().starts_with(BULLET_MARKER))
        {
            debug!("Summary already bulleted, leaving lines untouched");
            return lines.join("\n");
        }

        let bullets: Vec<String> = self
            .splitter
            .split(summary)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{BULLET_MARKER}{s}"))
            .collect();

        if bullets.is_empty() {
            return summary.to_string();
        }
        bullets.join("\n")
    }

    fn truncate_sentences(&self, summary: &str, limit: usize) -> String {
        let sentences: Vec<&str> = self
            .splitter
            .split(summary)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if sentences.is_empty() {
            return summary.to_string();
        }
        if sentences.len() > limit {
            debug!(
                "Truncating summary from {} to {} sentences",
                sentences.len(),
                limit
            );
        }
        sentences[..sentences.len().min(limit)].join(" ")
    }
}

/// Formats `raw` for `style` with the default punctuation splitter.
#[must_use]
pub fn format_summary(style: SummaryStyle, raw: &RawSummary) -> String {
    SummaryFormatter::new().format(style, raw)
}
