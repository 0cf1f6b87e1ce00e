//! Keyword-overlap matching.
//!
//! ## Scoring
//!
//! A question is reduced to a set of keywords: lowercase, edge punctuation
//! stripped, at least three characters, each counted once. A chunk's score
//! is the number of keywords that occur *anywhere* in the lowercased chunk.
//!
//! ```text
//! Question: "What do dogs do?"
//! Keywords: {what, dogs}            "do" is too short
//!
//! "Cats are small."  → 0
//! "Dogs are big."    → 1            "dogs" ⊂ "dogs are big."
//! ```
//!
//! Matching is plain substring containment, not word matching: "cat" scores
//! against "education". Changing that would change which chunk wins, so the
//! behaviour is fixed.
//!
//! ## Ties
//!
//! The best chunk is only replaced by a strictly higher score, so the first
//! chunk reaching the maximum wins.

use indexmap::IndexSet;
use tracing::debug;

use crate::{Error, Result};

/// Characters stripped from both ends of every question token.
pub const KEYWORD_PUNCTUATION: [char; 14] = [
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Shortest keyword kept, in characters.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Answer text when the question has no usable keywords.
pub const NO_KEYWORDS_MESSAGE: &str = "Не удалось определить ключевые слова в вопросе.";

/// Prefix of the answer when no chunk contains any keyword.
pub const NO_MATCH_PREFIX: &str = "Не найдено точного совпадения. Вот начало текста:\n";

/// How much of the first chunk the no-match answer shows, in characters.
pub const NO_MATCH_PREVIEW_CHARS: usize = 500;

/// The distinct keywords of one question, in order of first appearance.
///
/// ```rust
/// use chatbook::Keywords;
///
/// let keywords = Keywords::from_question("Who is Aslan? Aslan, the lion!");
/// assert_eq!(keywords.iter().collect::<Vec<_>>(), ["who", "aslan", "the", "lion"]);
/// assert_eq!(keywords.score("Aslan is a great lion."), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(IndexSet<String>);

impl Keywords {
    /// Extract keywords from a free-text question.
    #[must_use]
    pub fn from_question(question: &str) -> Self {
        let keywords = question
            .to_lowercase()
            .split_whitespace()
            .map(|token| token.trim_matches(&KEYWORD_PUNCTUATION[..]))
            .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
            .map(str::to_owned)
            .collect();
        Self(keywords)
    }

    /// Whether no keyword survived extraction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keywords in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Count the keywords contained in `text`, case-insensitively.
    #[must_use]
    pub fn score(&self, text: &str) -> usize {
        let haystack = text.to_lowercase();
        self.0
            .iter()
            .filter(|keyword| haystack.contains(keyword.as_str()))
            .count()
    }
}

/// The chosen chunk text and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// The answer body: a chunk, or one of the fixed messages.
    pub text: String,
    /// Number of distinct keywords found; 0 for the fixed messages.
    pub score: usize,
}

impl Answer {
    /// Create a new answer.
    #[must_use]
    pub fn new(text: impl Into<String>, score: usize) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// Whether a chunk actually matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Score every chunk against `keywords`, in order.
pub fn score_chunks<T: AsRef<str>>(keywords: &Keywords, chunks: &[T]) -> Vec<usize> {
    chunks
        .iter()
        .map(|chunk| keywords.score(chunk.as_ref()))
        .collect()
}

/// Find the chunk that best answers `question`.
///
/// # Errors
///
/// Returns [`Error::NoChunks`] if the question has keywords but `chunks` is
/// empty.
///
/// ```rust
/// use chatbook::find_answer;
///
/// let chunks = ["Cats are small.", "Dogs are big."];
/// let answer = find_answer("What do dogs do?", &chunks).unwrap();
/// assert_eq!(answer.text, "Dogs are big.");
/// assert_eq!(answer.score, 1);
/// ```
pub fn find_answer<T: AsRef<str>>(question: &str, chunks: &[T]) -> Result<Answer> {
    let keywords = Keywords::from_question(question);
    if keywords.is_empty() {
        debug!("no keywords in question");
        return Ok(Answer::new(NO_KEYWORDS_MESSAGE, 0));
    }

    let first: &str = chunks.first().ok_or(Error::NoChunks)?.as_ref();

    let mut best: Option<(usize, &str)> = None;
    let mut best_score = 0;
    for (index, chunk) in chunks.iter().enumerate() {
        let score = keywords.score(chunk.as_ref());
        if score > best_score {
            best_score = score;
            best = Some((index, chunk.as_ref()));
        }
    }

    match best {
        Some((index, text)) => {
            debug!(
                keywords = keywords.len(),
                chunk = index,
                score = best_score,
                "best match"
            );
            Ok(Answer::new(text, best_score))
        }
        None => {
            debug!(keywords = keywords.len(), "no chunk matched");
            let preview: String = first.chars().take(NO_MATCH_PREVIEW_CHARS).collect();
            Ok(Answer::new(format!("{NO_MATCH_PREFIX}{preview}"), 0))
        }
    }
}
