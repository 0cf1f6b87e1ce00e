//! Error types for chatbook.

use std::path::PathBuf;

/// Errors that can occur while loading, chunking or answering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document path does not exist.
    #[error("Файл не найден: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The document path exists but is not a regular file.
    #[error("Указанный путь не является файлом: {}", path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// Neither UTF-8 nor windows-1251 could decode the file.
    #[error("не удалось декодировать файл (UTF-8, windows-1251): {}", path.display())]
    Decode {
        /// The undecodable file.
        path: PathBuf,
    },

    /// The file holds only whitespace.
    #[error("Файл пустой: {}", path.display())]
    EmptyContent {
        /// The empty file.
        path: PathBuf,
    },

    /// Any other I/O failure while reading the document.
    #[error("ошибка чтения {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Invalid display length (must be > 0).
    #[error("invalid display length: {0} (must be > 0)")]
    InvalidDisplayLength(usize),

    /// A question was asked against an empty chunk sequence.
    #[error("нет фрагментов текста для поиска")]
    NoChunks,
}

impl Error {
    /// Whether this error was raised by the loader.
    ///
    /// Load errors end the session before the first question; everything
    /// else is either per-question or fatal to the process.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::NotAFile { .. }
                | Self::Decode { .. }
                | Self::EmptyContent { .. }
                | Self::Io { .. }
        )
    }
}

/// Result type for chatbook operations.
pub type Result<T> = std::result::Result<T, Error>;
