//! Reading a document from disk.
//!
//! Text files in the wild are mostly UTF-8, but older Russian texts are often
//! saved as windows-1251. The loader tries strict UTF-8 first and falls back
//! to strict windows-1251; only if both reject the bytes is the file reported
//! as undecodable.
//!
//! Line endings are normalized to `\n` so that `\r\n\r\n` counts as a
//! paragraph break just like `\n\n`.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};
use tracing::{debug, info};

use crate::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The one byte windows-1251 leaves unassigned. The WHATWG table behind
/// `encoding_rs` maps it to U+0098, so it has to be rejected by hand.
const WINDOWS_1251_UNASSIGNED: u8 = 0x98;

/// A loaded document. Immutable once read.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    path: PathBuf,
    encoding: &'static Encoding,
}

impl Document {
    /// The full document text, with `\n` line endings.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The path the document was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The encoding that decoded the file.
    #[must_use]
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Document length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Consume the document, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Load a text document.
///
/// # Errors
///
/// - [`Error::NotFound`] if `path` does not exist
/// - [`Error::NotAFile`] if `path` is a directory or other non-regular file
/// - [`Error::Decode`] if the bytes are neither UTF-8 nor windows-1251
/// - [`Error::EmptyContent`] if the text is empty after trimming whitespace
/// - [`Error::Io`] for any other read failure
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, encoding) = decode(&bytes).ok_or_else(|| Error::Decode {
        path: path.to_path_buf(),
    })?;

    if text.trim().is_empty() {
        return Err(Error::EmptyContent {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = encoding.name(),
        "loaded document"
    );

    Ok(Document {
        text,
        path: path.to_path_buf(),
        encoding,
    })
}

/// Decode raw bytes as UTF-8, falling back to windows-1251.
///
/// A leading UTF-8 byte order mark is dropped and line endings are
/// normalized. Returns `None` if neither encoding accepts the bytes: the
/// input is not UTF-8 and contains the unassigned windows-1251 byte `0x98`.
///
/// ```rust
/// use chatbook::decode;
///
/// let (text, encoding) = decode("Нарния\r\n".as_bytes()).unwrap();
/// assert_eq!(text, "Нарния\n");
/// assert_eq!(encoding.name(), "UTF-8");
///
/// // "Нарния" in windows-1251
/// let (text, encoding) = decode(&[0xCD, 0xE0, 0xF0, 0xED, 0xE8, 0xFF]).unwrap();
/// assert_eq!(text, "Нарния");
/// assert_eq!(encoding.name(), "windows-1251");
/// ```
#[must_use]
pub fn decode(bytes: &[u8]) -> Option<(String, &'static Encoding)> {
    let utf8 = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(utf8) {
        return Some((normalize_newlines(text), UTF_8));
    }

    debug!("not valid UTF-8, trying windows-1251");
    if bytes.contains(&WINDOWS_1251_UNASSIGNED) {
        debug!("byte 0x98 is unassigned in windows-1251");
        return None;
    }
    WINDOWS_1251
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| (normalize_newlines(text), WINDOWS_1251))
}

/// Convert `\r\n` and lone `\r` to `\n`.
fn normalize_newlines(text: Cow<'_, str>) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.into_owned()
    }
}
