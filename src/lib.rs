//! # chatbook
//!
//! Ask questions about a text file and get back the passage that best
//! matches them. No models, no index: paragraphs, sentences and keyword
//! counting.
//!
//! ## The Pipeline
//!
//! ```text
//! file ──load──→ Document ──segment──→ [Chunk] ──find_answer──→ Answer ──format_answer──→ screen
//!       UTF-8 or          paragraphs,            keyword                truncated to
//!       windows-1251      packed sentences       overlap                1000 chars
//! ```
//!
//! ### Loading
//!
//! Strict UTF-8 with a strict windows-1251 fallback, newlines normalized to
//! `\n`. Whitespace-only files are rejected.
//!
//! ### Segmentation
//!
//! Blank lines separate paragraphs. A paragraph that fits the capacity
//! (5000 characters by default) is one chunk. A longer one is cut into
//! sentences at `.`, `!` and `?`, and the sentences are packed greedily back
//! into chunks that fit:
//!
//! ```text
//! Paragraph (too long): [S1 S2 S3 S4 S5]
//! Packed:               [S1 S2] [S3] [S4 S5]
//! ```
//!
//! A single sentence longer than the capacity is kept whole.
//!
//! ### Matching
//!
//! The question becomes a set of lowercase keywords of three or more
//! characters. Each chunk scores one point per keyword it contains as a
//! substring; the first chunk with the highest score wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatbook::{find_answer, format_answer, Chunker, ParagraphChunker};
//!
//! let text = "Cats are small.\n\nDogs are big.";
//!
//! let chunks = ParagraphChunker::default().chunk(text);
//! let answer = find_answer("What do dogs do?", &chunks).unwrap();
//!
//! assert_eq!(answer.text, "Dogs are big.");
//! assert_eq!(answer.score, 1);
//! assert_eq!(format_answer(&answer.text, 1000), "Dogs are big.");
//! ```
//!
//! ## Interactive Use
//!
//! ```rust,no_run
//! use chatbook::{load, Session, SessionConfig};
//!
//! let document = load("narnia.txt")?;
//! let session = Session::from_document(&document, SessionConfig::default());
//! session.greet(std::io::stdout())?;
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod capacity;
mod chunk;
mod error;
mod loader;
mod matcher;
mod presenter;
mod segment;
mod sentence;
mod session;

pub use capacity::Capacity;
pub use chunk::Chunk;
pub use error::{Error, Result};
pub use loader::{decode, load, Document};
pub use matcher::{
    find_answer, score_chunks, Answer, Keywords, KEYWORD_PUNCTUATION, MIN_KEYWORD_CHARS,
    NO_KEYWORDS_MESSAGE, NO_MATCH_PREFIX, NO_MATCH_PREVIEW_CHARS,
};
pub use presenter::{
    format_answer, render_answer, rule, DEFAULT_DISPLAY_CHARS, RULE_WIDTH, TRUNCATION_MARKER,
};
pub use segment::{segment, ParagraphChunker, PARAGRAPH_BREAK};
pub use sentence::{split_sentences, SENTENCE_TERMINATORS};
pub use session::{
    is_exit_command, read_line, Session, SessionConfig, END_OF_INPUT, EXIT_COMMANDS, PROMPT,
};

/// A text chunking strategy.
///
/// ```rust
/// use chatbook::{Chunk, Chunker, ParagraphChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<Chunk> {
///     chunker.chunk(text)
/// }
///
/// let chunker = ParagraphChunker::with_max_length(100).unwrap();
/// let chunks = chunk_document(&chunker, "Hello world.\n\nThis is a test.");
/// assert_eq!(chunks.len(), 2);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into an ordered sequence of chunks.
    fn chunk(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}
