//! Formatting answers for the terminal.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::Answer;

/// Appended to an answer cut at the display limit.
pub const TRUNCATION_MARKER: &str = "\n\n[... текст обрезан ...]";

/// Default display limit, in characters.
pub const DEFAULT_DISPLAY_CHARS: usize = 1000;

/// Width of the horizontal rules around banners and answers.
pub const RULE_WIDTH: usize = 60;

/// Truncate `text` to `max_display_length` characters, marking the cut.
///
/// Text that already fits is returned borrowed and unchanged, so formatting
/// is idempotent for it.
///
/// ```rust
/// use chatbook::{format_answer, TRUNCATION_MARKER};
///
/// assert_eq!(format_answer("short", 10), "short");
/// assert_eq!(
///     format_answer("абвгдежзий", 3),
///     format!("абв{TRUNCATION_MARKER}")
/// );
/// ```
#[must_use]
pub fn format_answer(text: &str, max_display_length: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_display_length) {
        Some((cut, _)) => Cow::Owned(format!("{}{TRUNCATION_MARKER}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// A horizontal rule of `RULE_WIDTH` copies of `c`.
#[must_use]
pub fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

/// Write the answer block: rules, heading, body and the match count.
///
/// # Errors
///
/// Propagates write failures.
pub fn render_answer(
    out: &mut impl Write,
    answer: &Answer,
    max_display_length: usize,
) -> io::Result<()> {
    let dashes = rule('-');
    writeln!(out)?;
    writeln!(out, "{dashes}")?;
    writeln!(out, "Ответ:")?;
    writeln!(out, "{dashes}")?;
    writeln!(out, "{}", format_answer(&answer.text, max_display_length))?;
    if answer.is_match() {
        writeln!(out, "\n(Найдено совпадений: {})", answer.score)?;
    }
    writeln!(out, "{dashes}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert!(matches!(format_answer("Dogs are big.", 1000), Cow::Borrowed(_)));
    }

    #[test]
    fn test_exact_length_unchanged() {
        let text = "x".repeat(1000);
        assert_eq!(format_answer(&text, 1000), text);
    }

    #[test]
    fn test_truncation_counts_chars() {
        let text = "я".repeat(1001);
        let formatted = format_answer(&text, 1000);
        let body = formatted.strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(body.chars().count(), 1000);
    }

    #[test]
    fn test_zero_display_length() {
        assert_eq!(format_answer("abc", 0), TRUNCATION_MARKER);
        assert_eq!(format_answer("", 0), "");
    }

    #[test]
    fn test_render_with_score() {
        let mut out = Vec::new();
        render_answer(&mut out, &Answer::new("Dogs are big.", 1), 1000).unwrap();
        let out = String::from_utf8(out).unwrap();

        let dashes = rule('-');
        let expected = format!(
            "\n{dashes}\nОтвет:\n{dashes}\nDogs are big.\n\n(Найдено совпадений: 1)\n{dashes}\n\n"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_without_score() {
        let mut out = Vec::new();
        render_answer(&mut out, &Answer::new("nothing", 0), 1000).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Найдено совпадений"));
        assert!(out.contains("nothing\n"));
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(rule('=').chars().count(), RULE_WIDTH);
    }
}
