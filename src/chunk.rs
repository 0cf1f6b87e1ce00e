//! The Chunk type: one retrievable piece of a document.

/// A piece of a document, the unit the matcher scores.
///
/// A chunk is either a whole paragraph or a run of sentences from one
/// paragraph joined by single spaces. Sentence runs are not byte-exact slices
/// of the source (inner whitespace is collapsed at the joins), so a chunk
/// carries its text and its position in the sequence rather than offsets.
///
/// ```rust
/// use chatbook::Chunk;
///
/// let chunk = Chunk::new("Привет, мир.", 0);
/// assert_eq!(chunk.char_len(), 12);
/// assert!(chunk.len() > chunk.char_len()); // bytes
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text.
    pub text: String,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// The length of this chunk in characters.
    ///
    /// This is the length [`Capacity`](crate::Capacity) limits.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, chars: {} }}",
            self.index,
            self.char_len()
        )
    }
}
