//! Sentence splitting on terminal punctuation.
//!
//! ## Deliberately Naive
//!
//! A sentence ends at every `.`, `!` or `?`. The mark stays with the sentence
//! it closes:
//!
//! ```text
//! "Wait... what? Yes!"
//!  → ["Wait.", ".", ".", "what?", "Yes!"]
//! ```
//!
//! Abbreviations ("Dr.", "т.е.") and ellipses therefore produce short
//! fragments. The packer glues fragments back together with their neighbours,
//! so the only visible effect is an occasional extra space inside a chunk.
//! Unicode sentence segmentation (UAX #29) would cut differently and change
//! which chunks exist; this splitter keeps chunk boundaries predictable.

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split a paragraph into trimmed sentences.
///
/// Text after the last terminator becomes a final sentence if anything but
/// whitespace is left. The returned slices borrow from `paragraph`.
///
/// ```rust
/// use chatbook::split_sentences;
///
/// let sentences = split_sentences("One. Two!  Three? tail");
/// assert_eq!(sentences, ["One.", "Two!", "Three?", "tail"]);
/// ```
#[must_use]
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, c) in paragraph.char_indices() {
        if SENTENCE_TERMINATORS.contains(&c) {
            let end = i + c.len_utf8();
            // Never empty: the slice holds at least the terminator.
            sentences.push(paragraph[start..end].trim());
            start = end;
        }
    }

    let rest = paragraph[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("Hello world. How are you? I am fine!");
        assert_eq!(sentences, ["Hello world.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let sentences = split_sentences("First. and then nothing");
        assert_eq!(sentences, ["First.", "and then nothing"]);
    }

    #[test]
    fn test_trailing_whitespace_dropped() {
        let sentences = split_sentences("Only one.   \n ");
        assert_eq!(sentences, ["Only one."]);
    }

    #[test]
    fn test_every_terminator_splits() {
        let sentences = split_sentences("Dr. Smith arrived...");
        assert_eq!(sentences, ["Dr.", "Smith arrived.", ".", "."]);
    }

    #[test]
    fn test_cyrillic() {
        let sentences = split_sentences("Люси открыла шкаф. Там была зима!");
        assert_eq!(sentences, ["Люси открыла шкаф.", "Там была зима!"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }
}
