//! Paragraph-first segmentation with greedy sentence packing.
//!
//! ## The Algorithm
//!
//! ```text
//! 1. Split on "\n\n" (paragraphs), trim, drop empty pieces
//! 2. Paragraph fits the capacity?  Emit it unchanged.
//! 3. Otherwise split it into sentences and pack them greedily:
//!
//!    max = 30
//!    sentences: ["Aaaa aaaa.", "Bbbb bbbb bbbb.", "Cccc.", "Dddd dddd."]
//!
//!    group = "Aaaa aaaa."                           10
//!    + 1 + 15 = 26 ≤ 30 → "Aaaa aaaa. Bbbb bbbb bbbb."
//!    + 1 +  5 = 32 > 30 → flush, group = "Cccc."
//!    + 1 + 10 = 16 ≤ 30 → "Cccc. Dddd dddd."
//!    end                → flush
//! ```
//!
//! Unlike the recursive splitter family there is no finer level: a sentence
//! longer than the capacity becomes its own oversized chunk. Nothing is ever
//! cut mid-sentence.
//!
//! If no paragraph survives trimming the whole input is returned as a single
//! chunk, so a non-empty input never yields an empty sequence.

use tracing::debug;

use crate::{split_sentences, Capacity, Chunk, Chunker, Result};

/// Paragraph separator: one blank line.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Paragraph chunker with sentence packing for long paragraphs.
///
/// ## Example
///
/// ```rust
/// use chatbook::{Chunker, ParagraphChunker};
///
/// let chunker = ParagraphChunker::default();
/// let chunks = chunker.chunk("Cats are small.\n\nDogs are big.");
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text, "Cats are small.");
/// assert_eq!(chunks[1].text, "Dogs are big.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphChunker {
    capacity: Capacity,
}

impl ParagraphChunker {
    /// Create a chunker with the given capacity.
    #[must_use]
    pub const fn new(capacity: Capacity) -> Self {
        Self { capacity }
    }

    /// Create a chunker from a raw maximum length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`](crate::Error::InvalidChunkSize)
    /// if `max_length == 0`.
    pub fn with_max_length(max_length: usize) -> Result<Self> {
        Capacity::new(max_length).map(Self::new)
    }

    /// The capacity this chunker packs to.
    #[must_use]
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Greedily pack sentences into chunks, appending to `out`.
    fn pack_sentences(&self, sentences: &[&str], out: &mut Vec<Chunk>) {
        let mut group = String::new();
        let mut group_len = 0;

        for sentence in sentences {
            let sentence_len = sentence.chars().count();

            // +1 for the joining space, counted even for an empty group.
            if self.capacity.would_overflow(group_len, sentence_len + 1) {
                if !group.is_empty() {
                    emit(out, std::mem::take(&mut group));
                }
                if !self.capacity.fits(sentence_len) {
                    debug!(
                        chars = sentence_len,
                        max = self.capacity.max(),
                        "sentence exceeds capacity, kept whole"
                    );
                }
                group.push_str(sentence);
                group_len = sentence_len;
            } else {
                if !group.is_empty() {
                    group.push(' ');
                    group_len += 1;
                }
                group.push_str(sentence);
                group_len += sentence_len;
            }
        }

        if !group.is_empty() {
            emit(out, group);
        }
    }
}

fn emit(out: &mut Vec<Chunk>, text: String) {
    let index = out.len();
    out.push(Chunk::new(text, index));
}

impl Chunker for ParagraphChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::with_capacity(self.estimate_chunks(text.len()));
        let mut paragraphs = 0usize;
        let mut packed = 0usize;

        for paragraph in text
            .split(PARAGRAPH_BREAK)
            .map(str::trim)
            .filter(|p| !p.is_empty())
        {
            paragraphs += 1;
            if self.capacity.fits(paragraph.chars().count()) {
                emit(&mut chunks, paragraph.to_owned());
            } else {
                packed += 1;
                self.pack_sentences(&split_sentences(paragraph), &mut chunks);
            }
        }

        if chunks.is_empty() {
            debug!("no paragraphs found, using the whole text as one chunk");
            return vec![Chunk::new(text, 0)];
        }

        debug!(
            paragraphs,
            packed,
            chunks = chunks.len(),
            max = self.capacity.max(),
            "segmented text"
        );
        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.capacity.max()).max(1)
    }
}

/// Segment `text` into chunks of at most `capacity` characters.
///
/// Shorthand for `ParagraphChunker::new(capacity).chunk(text)`.
///
/// ```rust
/// use chatbook::{segment, Capacity};
///
/// let chunks = segment("One. Two. Three.", Capacity::new(10).unwrap());
/// let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(texts, ["One. Two.", "Three."]);
/// ```
#[must_use]
pub fn segment(text: &str, capacity: Capacity) -> Vec<Chunk> {
    ParagraphChunker::new(capacity).chunk(text)
}
