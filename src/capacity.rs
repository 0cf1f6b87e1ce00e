//! Chunk capacity configuration.
//!
//! ## The Problem
//!
//! A chunk has to be small enough to read as one answer, but the segmenter
//! only cuts at paragraph and sentence boundaries. Sometimes a single sentence
//! is already longer than the limit.
//!
//! ```text
//! max = 20
//! Text: "Short one. This sentence alone is far longer than twenty."
//!
//! Chunks: ["Short one.", "This sentence alone is far longer than twenty."]
//!                        ↑ over the limit, emitted whole
//! ```
//!
//! `Capacity` is the limit; the segmenter decides what to do when an atomic
//! unit does not fit.
//!
//! All lengths are counted in characters (Unicode scalar values), not bytes,
//! so a Cyrillic paragraph and a Latin paragraph of the same visible length
//! get the same treatment.

use crate::{Error, Result};

/// Maximum chunk length, in characters.
///
/// # Examples
///
/// ```rust
/// use chatbook::Capacity;
///
/// let cap = Capacity::new(100).unwrap();
/// assert_eq!(cap.max(), 100);
/// assert!(cap.fits(100));
/// assert!(!cap.fits(101));
///
/// assert!(Capacity::new(0).is_err());
/// assert_eq!(Capacity::default().max(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    max: usize,
}

impl Capacity {
    /// Default maximum chunk length.
    pub const DEFAULT_MAX: usize = 5000;

    /// Create a capacity with the given maximum length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `max == 0`.
    pub fn new(max: usize) -> Result<Self> {
        if max == 0 {
            Err(Error::InvalidChunkSize(max))
        } else {
            Ok(Self { max })
        }
    }

    /// The maximum allowed chunk length.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Whether a piece of `len` characters fits as-is.
    #[must_use]
    pub const fn fits(&self, len: usize) -> bool {
        len <= self.max
    }

    /// Check if adding `additional` characters would exceed the capacity.
    ///
    /// Used by incremental chunk building; callers include the separator in
    /// `additional`.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            max: Self::DEFAULT_MAX,
        }
    }
}

impl TryFrom<usize> for Capacity {
    type Error = Error;

    fn try_from(max: usize) -> Result<Self> {
        Self::new(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits() {
        let cap = Capacity::new(100).unwrap();
        assert!(cap.fits(50));
        assert!(cap.fits(100));
        assert!(!cap.fits(150));
    }

    #[test]
    fn test_would_overflow() {
        let cap = Capacity::new(100).unwrap();
        assert!(!cap.would_overflow(50, 49));
        assert!(!cap.would_overflow(50, 50));
        assert!(cap.would_overflow(50, 51));
    }

    #[test]
    fn test_would_overflow_saturates() {
        let cap = Capacity::new(10).unwrap();
        assert!(cap.would_overflow(usize::MAX, 1));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(Capacity::new(0), Err(Error::InvalidChunkSize(0))));
        assert!(Capacity::try_from(0).is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(Capacity::default().max(), 5000);
    }
}
