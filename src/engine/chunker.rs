//! Passage splitting: paragraph-first, with a sentence fallback for
//! oversized paragraphs.

use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_MIN_PASSAGE_LEN: usize = 10;
pub const DEFAULT_MAX_PASSAGE_LEN: usize = 1000;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n+|\n{2,}").expect("valid paragraph regex"));
static GLUED_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])([A-Z])").expect("valid glued-sentence regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+[A-Z]").expect("valid sentence regex"));

/// Splits extracted book text into context passages.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    min_len: usize,
    max_len: usize,
}

impl Chunker {
    /// Create a chunker keeping passages of `min_len..=max_len` characters.
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    /// Split `text` into passages. A passage's index is its position in the
    /// returned vector.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut passages = Vec::new();

        for paragraph in PARAGRAPH_BREAK.split(text) {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }

            let normalized = normalize_paragraph(paragraph);
            let len = normalized.chars().count();

            if len > self.max_len {
                passages.extend(
                    split_sentences(&normalized)
                        .into_iter()
                        .map(str::trim)
                        .filter(|s| self.in_bounds(s))
                        .map(str::to_string),
                );
            } else if len >= self.min_len {
                passages.push(normalized);
            }
            // Shorter fragments are page numbers and markup debris.
        }

        passages
    }

    fn in_bounds(&self, passage: &str) -> bool {
        let len = passage.chars().count();
        len >= self.min_len && len <= self.max_len
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSAGE_LEN, DEFAULT_MAX_PASSAGE_LEN)
    }
}

/// Join wrapped lines, repair missing spaces between sentences and collapse
/// whitespace.
fn normalize_paragraph(paragraph: &str) -> String {
    let joined = paragraph.replace('\n', " ");
    let repaired = GLUED_SENTENCE.replace_all(&joined, "${1} ${2}");
    WHITESPACE_RUN
        .replace_all(&repaired, " ")
        .trim()
        .to_string()
}

/// Break after `.`, `!` or `?` when whitespace and then a capital follow.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The terminator is a single ASCII byte; the capital opens the next
        // sentence and is one ASCII byte too.
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end() - 1;
    }
    sentences.push(&text[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_passages() {
        let text = "First paragraph, wrapped\nacross two lines.\n\n\nSecond paragraph here.";
        let passages = Chunker::default().split(text);
        assert_eq!(
            passages,
            vec![
                "First paragraph, wrapped across two lines.",
                "Second paragraph here."
            ]
        );
    }

    #[test]
    fn test_short_fragments_dropped() {
        let passages = Chunker::default().split("12\n\nChapter I\n\nA real sentence follows.");
        assert_eq!(passages, vec!["A real sentence follows."]);
    }

    #[test]
    fn test_glued_sentences_repaired() {
        let passages = Chunker::default().split("It ended.Then it began again!Quietly.");
        assert_eq!(passages, vec!["It ended. Then it began again! Quietly."]);
    }

    #[test]
    fn test_whitespace_only_blank_lines_split() {
        let passages = Chunker::default().split("Alpha paragraph.\n   \t\nBeta paragraph.");
        assert_eq!(passages, vec!["Alpha paragraph.", "Beta paragraph."]);
    }

    #[test]
    fn test_oversized_paragraph_falls_back_to_sentences() {
        let sentence = "The river wound slowly past the mill and the old stone bridge. ";
        let paragraph = sentence.repeat(20);
        let passages = Chunker::default().split(&paragraph);
        assert_eq!(passages.len(), 20);
        assert!(passages
            .iter()
            .all(|p| p == "The river wound slowly past the mill and the old stone bridge."));
    }

    #[test]
    fn test_sentence_split_requires_capital() {
        let chunker = Chunker::new(5, 40);
        let passages = chunker.split("one. two. Three is here? Yes. and more words follow now!");
        assert_eq!(
            passages,
            vec!["one. two.", "Three is here?", "Yes. and more words follow now!"]
        );
    }

    #[test]
    fn test_oversized_unsplittable_sentence_dropped() {
        let blob = "x".repeat(1200);
        assert!(Chunker::default().split(&blob).is_empty());
    }
}
