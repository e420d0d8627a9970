//! Sentence boundary detection.
//!
//! A small deterministic segmenter standing in for a full NLP pipeline: it
//! splits on `.`, `!`, `?` followed by whitespace, with an abbreviation guard
//! so "Dr. Smith" or "sum of Rs. 5 lakh" do not break mid-phrase. The handle
//! is constructed once at process start and shared read-only; construction
//! compiles the guard pattern, segmentation itself allocates only the output.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A sentence-like span in document order. `ordinal` is the zero-based
/// position, significant for the summarizer's "first N matches" truncation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub ordinal: usize,
}

/// Trailing abbreviations whose period is not a sentence boundary.
static ABBREV_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:mr|mrs|ms|dr|no|rs|vs|etc|e\.g|i\.e|viz)\.$").unwrap()
});

/// Sentence segmenter handle. Construct once, share by reference.
#[derive(Debug)]
pub struct SentenceSegmenter {
    abbrev: &'static Regex,
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self { abbrev: &ABBREV_RE }
    }

    /// Split text into trimmed, non-empty sentences in document order.
    ///
    /// Boundary rule: a terminator byte (`.`, `!`, `?`) followed by ASCII
    /// whitespace ends a sentence, unless the text up to and including the
    /// terminator ends in a known abbreviation. Any trailing remainder
    /// (text with no final terminator) is kept as the last sentence.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let bytes = text.as_bytes();
        let mut start = 0;

        for (i, &b) in bytes.iter().enumerate() {
            if (b == b'.' || b == b'!' || b == b'?')
                && i + 1 < bytes.len()
                && bytes[i + 1].is_ascii_whitespace()
            {
                let candidate = &text[start..=i];
                if b == b'.' && self.abbrev.is_match(candidate.trim_end()) {
                    continue;
                }
                push_trimmed(&mut sentences, candidate);
                start = i + 1;
            }
        }
        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_trimmed(sentences: &mut Vec<Sentence>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(Sentence {
            text: trimmed.to_string(),
            ordinal: sentences.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        SentenceSegmenter::new()
            .segment(input)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn splits_on_terminators() {
        assert_eq!(
            texts("First sentence. Second one! Third?"),
            vec!["First sentence.", "Second one!", "Third?"]
        );
    }

    #[test]
    fn keeps_unterminated_remainder() {
        assert_eq!(
            texts("Complete sentence. trailing fragment"),
            vec!["Complete sentence.", "trailing fragment"]
        );
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(texts("").is_empty());
        assert!(texts("   \n\t ").is_empty());
    }

    #[test]
    fn abbreviation_does_not_split() {
        assert_eq!(
            texts("Consult Dr. Smith for details. Claims go to the insurer."),
            vec![
                "Consult Dr. Smith for details.",
                "Claims go to the insurer."
            ]
        );
    }

    #[test]
    fn ordinals_follow_document_order() {
        let sents = SentenceSegmenter::new().segment("One. Two. Three.");
        let ordinals: Vec<usize> = sents.iter().map(|s| s.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }
}
