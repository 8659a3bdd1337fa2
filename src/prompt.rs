use crate::core::models::{Prompt, SummaryStyle};

pub const SHORT_DIRECTIVE: &str =
    "Provide ONLY a concise 1-2 sentence summary of the following text.";

pub const MEDIUM_DIRECTIVE: &str = "Provide ONLY a one-paragraph summary of the following text.";

pub const BULLET_DIRECTIVE: &str = "Provide ONLY a concise bullet list summary of the following text. \
     Use '- ' to prefix each bullet and one bullet per line.";

/// Marker every bullet line starts with, in prompts and formatted output alike.
pub const BULLET_MARKER: &str = "- ";

#[must_use]
pub const fn directive_for(style: SummaryStyle) -> &'static str {
    match style {
        SummaryStyle::Short => SHORT_DIRECTIVE,
        SummaryStyle::Medium => MEDIUM_DIRECTIVE,
        SummaryStyle::Bullet => BULLET_DIRECTIVE,
    }
}

/// Builds the instruction sent to the model: the style directive, a blank
/// line, then the source text with surrounding whitespace removed.
#[must_use]
pub fn build_prompt(style: SummaryStyle, text: &str) -> Prompt {
    let base = text.trim();
    Prompt::new(format!("{}\n\n{base}", directive_for(style)))
}
