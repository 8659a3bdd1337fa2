//! Naive sentence boundary detection.
//!
//! A boundary falls right after every `.`, `!` or `?`. Abbreviations
//! ("e.g."), decimals ("3.5") and quoted punctuation are not special-cased,
//! so such input splits into more pieces than a linguistic splitter would.

/// Characters that close a sentence. Each one stays attached to the sentence it ends.
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Splits text into sentences.
///
/// Implementations must preserve input order and must not drop text; callers
/// are responsible for skipping empty or whitespace-only pieces.
pub trait SentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Punctuation-only splitter backed by [`Sentences`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

impl SentenceSplitter for PunctuationSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_sentences(text).collect()
    }
}

/// Single-pass iterator over the sentences of a borrowed string.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        // Terminators are ASCII, so `i + 1` is always a char boundary.
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| TERMINATORS.contains(c))
            .map_or(self.rest.len(), |(i, _)| i + 1);

        let (sentence, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(sentence)
    }
}

impl std::iter::FusedIterator for Sentences<'_> {}

#[must_use]
pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences { rest: text }
}
