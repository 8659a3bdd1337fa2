use tldr_summarize::core::models::SummaryStyle;
use tldr_summarize::prompt::{
    BULLET_DIRECTIVE, MEDIUM_DIRECTIVE, SHORT_DIRECTIVE, build_prompt, directive_for,
};

#[test]
fn test_build_prompt_variants() {
    let text = "Example text.";

    let short = build_prompt(SummaryStyle::Short, text);
    assert!(short.as_str().contains("1-2 sentence"), "short prompt missing hint: {short}");

    let medium = build_prompt(SummaryStyle::Medium, text);
    assert!(medium.as_str().contains("one-paragraph"), "medium prompt missing hint: {medium}");

    let bullet = build_prompt(SummaryStyle::Bullet, text);
    assert!(bullet.as_str().contains("bullet list"), "bullet prompt missing hint: {bullet}");
    assert!(bullet.as_str().contains("'- '"), "bullet prompt should name the marker");
    assert!(bullet.as_str().contains("one bullet per line"));
}

#[test]
fn test_build_prompt_ends_with_trimmed_text() {
    let text = "\n\t  The quick brown fox. It jumped over the dog.  \n";
    for style in SummaryStyle::ALL {
        let prompt = build_prompt(style, text);
        assert!(
            prompt.as_str().starts_with(directive_for(style)),
            "prompt for {style} should start with its directive"
        );
        assert!(
            prompt
                .as_str()
                .ends_with("\n\nThe quick brown fox. It jumped over the dog."),
            "prompt for {style} should end with the trimmed text: {prompt:?}"
        );
    }
}

#[test]
fn test_directives_are_distinct() {
    assert_ne!(SHORT_DIRECTIVE, MEDIUM_DIRECTIVE);
    assert_ne!(MEDIUM_DIRECTIVE, BULLET_DIRECTIVE);
    assert_ne!(SHORT_DIRECTIVE, BULLET_DIRECTIVE);
}

#[test]
fn test_build_prompt_is_deterministic() {
    let a = build_prompt(SummaryStyle::Medium, "Same input.");
    let b = build_prompt(SummaryStyle::Medium, "Same input.");
    assert_eq!(a, b);
}

#[test]
fn test_build_prompt_with_empty_text() {
    let prompt = build_prompt(SummaryStyle::Short, "   ");
    assert_eq!(prompt.into_inner(), format!("{SHORT_DIRECTIVE}\n\n"));
}
