//! The question/answer loop.
//!
//! A [`Session`] owns the chunk sequence computed once at startup and answers
//! one line at a time. It is generic over its input and output so the binary
//! can drive it from the terminal and tests can drive it from byte buffers.
//!
//! ```text
//! read line ─┬─ exit token ─────────────→ "До свидания!"   Ok(())
//!            ├─ end of input ───────────→ UnexpectedEof    Err
//!            ├─ empty ──────────────────→ ask again
//!            └─ question → match → format → print → read line
//! ```
//!
//! A failure while answering one question is printed and the loop continues.
//! A closed input stream is not a way to leave: it surfaces as an
//! [`io::ErrorKind::UnexpectedEof`] error, which the binary treats as fatal.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::presenter::{render_answer, rule, DEFAULT_DISPLAY_CHARS};
use crate::{find_answer, segment, Answer, Capacity, Chunk, Document, Error, Result};

/// Words that end the session, compared case-insensitively.
pub const EXIT_COMMANDS: [&str; 4] = ["выход", "exit", "quit", "q"];

/// Printed before each question.
pub const PROMPT: &str = "Ваш вопрос: ";

/// Whether `line` is one of the [`EXIT_COMMANDS`].
///
/// ```rust
/// use chatbook::is_exit_command;
///
/// assert!(is_exit_command("Выход"));
/// assert!(is_exit_command(" QUIT "));
/// assert!(!is_exit_command("exit now"));
/// ```
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_COMMANDS.contains(&line.as_str())
}

/// Chunking and display limits for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    capacity: Capacity,
    max_display_length: usize,
}

impl SessionConfig {
    /// Create a config.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidChunkSize`] if `max_length == 0`,
    /// [`Error::InvalidDisplayLength`] if `max_display_length == 0`.
    pub fn new(max_length: usize, max_display_length: usize) -> Result<Self> {
        let capacity = Capacity::new(max_length)?;
        if max_display_length == 0 {
            return Err(Error::InvalidDisplayLength(max_display_length));
        }
        Ok(Self {
            capacity,
            max_display_length,
        })
    }

    /// Maximum chunk length.
    #[must_use]
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Maximum answer length shown before truncation.
    #[must_use]
    pub const fn max_display_length(&self) -> usize {
        self.max_display_length
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: Capacity::default(),
            max_display_length: DEFAULT_DISPLAY_CHARS,
        }
    }
}

/// Message of the error returned when input ends before an answer is read.
pub const END_OF_INPUT: &str = "EOF when reading a line";

/// Read one line into `line` (cleared first).
///
/// # Errors
///
/// [`io::ErrorKind::UnexpectedEof`] if the input is already exhausted, plus
/// any read failure.
///
/// ```rust
/// use std::io::ErrorKind;
///
/// let mut input = "first\n".as_bytes();
/// let mut line = String::new();
/// chatbook::read_line(&mut input, &mut line).unwrap();
/// assert_eq!(line, "first\n");
///
/// let err = chatbook::read_line(&mut input, &mut line).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
/// ```
pub fn read_line(input: &mut impl BufRead, line: &mut String) -> io::Result<()> {
    line.clear();
    if input.read_line(line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, END_OF_INPUT));
    }
    Ok(())
}

/// An interactive question/answer session over one document.
#[derive(Debug, Clone)]
pub struct Session {
    chunks: Vec<Chunk>,
    config: SessionConfig,
}

impl Session {
    /// Create a session over pre-computed chunks.
    #[must_use]
    pub fn new(chunks: Vec<Chunk>, config: SessionConfig) -> Self {
        Self { chunks, config }
    }

    /// Segment `document` and create a session over its chunks.
    #[must_use]
    pub fn from_document(document: &Document, config: SessionConfig) -> Self {
        Self::new(segment(document.text(), config.capacity()), config)
    }

    /// The chunks questions are answered from.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The session limits.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Answer a single question.
    ///
    /// # Errors
    ///
    /// [`Error::NoChunks`] if the session has no chunks.
    pub fn ask(&self, question: &str) -> Result<Answer> {
        find_answer(question, &self.chunks)
    }

    /// Print the chunk count and the usage banner.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn greet(&self, mut out: impl Write) -> io::Result<()> {
        let equals = rule('=');
        writeln!(out, "✓ Текст разбит на {} частей", self.chunks.len())?;
        writeln!(out)?;
        writeln!(out, "{equals}")?;
        writeln!(
            out,
            "Можете задавать вопросы. Для выхода введите 'выход' или 'exit'"
        )?;
        writeln!(out, "{equals}")?;
        writeln!(out)
    }

    /// Run the loop until an exit command.
    ///
    /// # Errors
    ///
    /// [`io::ErrorKind::UnexpectedEof`] if `input` ends before an exit
    /// command, and any other I/O failure on `input` or `output`. Answering
    /// errors are reported inline and do not end the loop.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        let mut line = String::new();
        let mut asked = 0usize;

        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            if let Err(e) = read_line(&mut input, &mut line) {
                debug!(asked, error = %e, "reading question failed");
                return Err(e);
            }

            let question = line.trim();
            if is_exit_command(question) {
                writeln!(output, "\nДо свидания!")?;
                debug!(asked, "exit command");
                return Ok(());
            }
            if question.is_empty() {
                writeln!(output, "Пожалуйста, введите вопрос.")?;
                continue;
            }

            asked += 1;
            match self.ask(question) {
                Ok(answer) => {
                    render_answer(&mut output, &answer, self.config.max_display_length)?;
                }
                Err(e) => {
                    warn!(error = %e, "failed to answer question");
                    writeln!(output, "❌ Ошибка при поиске ответа: {e}")?;
                    writeln!(output)?;
                }
            }
        }
    }
}
