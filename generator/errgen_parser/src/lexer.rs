//! Hand-written lexer for a single header line
//!
//! The lexer is deliberately coarse: the directive grammar only cares about
//! `#`, runs of identifier characters, and where whitespace sits. Everything
//! else is a one-character [`Tok::Punct`].

use derive_more::Display;
use errgen_utils::span::{Span, Spannable, Spanned};

/// A token within one line of a header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Tok<'input> {
    /// The token `#`
    #[display("#")]
    Hash,
    /// A run of `[A-Za-z0-9_]` characters. Covers both identifiers and
    /// decimal literals, since a macro name may itself be all digits.
    #[display("{_0}")]
    Word(&'input str),
    /// A run of whitespace characters
    #[display("{_0}")]
    Whitespace(&'input str),
    /// Any other single character
    #[display("{_0}")]
    Punct(char),
}
impl Tok<'_> {
    /// Whether this token is a [`Tok::Word`] made only of decimal digits
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Tok::Word(text) if is_decimal(text))
    }
}

/// Whether `ch` may appear inside a [`Tok::Word`]
#[must_use]
pub const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Whether `text` is a non-empty run of ASCII decimal digits
#[must_use]
pub fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

/// A lexer over a single line of input. Any line terminator must already be
/// stripped; a stray `\n` is lexed as ordinary whitespace.
#[derive(Debug, Clone)]
pub struct LineLexer<'input> {
    /// The line being lexed
    input: &'input str,
    /// Current position in the line (byte offset)
    pos: usize,
}

impl<'input> LineLexer<'input> {
    /// Create a new [`LineLexer`] over one line
    #[must_use]
    pub const fn new(input: &'input str) -> Self {
        Self { input, pos: 0 }
    }

    /// Peek at the current character without consuming it
    #[must_use]
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advance by one character and return it
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume characters while `pred` holds, returning the consumed text
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'input str {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
        &self.input[start..self.pos]
    }
}

impl<'input> Iterator for LineLexer<'input> {
    type Item = Spanned<Tok<'input>>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let ch = self.peek()?;

        let token = if ch.is_whitespace() {
            Tok::Whitespace(self.take_while(char::is_whitespace))
        } else if is_word_char(ch) {
            Tok::Word(self.take_while(is_word_char))
        } else {
            self.advance();
            if ch == '#' {
                Tok::Hash
            } else {
                Tok::Punct(ch)
            }
        };

        Some(token.in_span(Span::from_positions(start, self.pos)))
    }
}

#[cfg(test)]
mod tests {
    use errgen_utils::spanned;

    use super::*;

    /// Lex a line and strip the spans
    fn tokens(line: &str) -> Vec<Tok<'_>> {
        LineLexer::new(line).map(Spanned::into_value).collect()
    }

    #[test]
    fn define_line_is_tokenized_with_spans() {
        let tokens: Vec<_> = LineLexer::new("#define EIO 5").collect();
        assert_eq!(
            tokens,
            vec![
                spanned!(0, Tok::Hash, 1),
                spanned!(1, Tok::Word("define"), 7),
                spanned!(7, Tok::Whitespace(" "), 8),
                spanned!(8, Tok::Word("EIO"), 11),
                spanned!(11, Tok::Whitespace(" "), 12),
                spanned!(12, Tok::Word("5"), 13),
            ]
        );
    }

    #[test]
    fn whitespace_runs_are_merged() {
        assert_eq!(
            tokens(" \t #  define"),
            vec![
                Tok::Whitespace(" \t "),
                Tok::Hash,
                Tok::Whitespace("  "),
                Tok::Word("define"),
            ]
        );
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(
            tokens("FOO(x)"),
            vec![
                Tok::Word("FOO"),
                Tok::Punct('('),
                Tok::Word("x"),
                Tok::Punct(')'),
            ]
        );
    }

    #[test]
    fn hexadecimal_literal_is_one_word() {
        assert_eq!(tokens("0x1F"), vec![Tok::Word("0x1F")]);
        assert!(!Tok::Word("0x1F").is_decimal());
    }

    #[test]
    fn non_ascii_characters_are_punctuation() {
        assert_eq!(
            tokens("a\u{e9}b"),
            vec![Tok::Word("a"), Tok::Punct('\u{e9}'), Tok::Word("b")]
        );
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn decimal_detection() {
        assert!(is_decimal("0"));
        assert!(is_decimal("0042"));
        assert!(!is_decimal(""));
        assert!(!is_decimal("12abc"));
        assert!(!is_decimal("-1"));
        assert!(Tok::Word("34").is_decimal());
        assert!(!Tok::Hash.is_decimal());
    }

    #[test]
    fn tokens_display_as_source_text() {
        let line = "  #define ERANGE 34 // Math result";
        let rebuilt: String = tokens(line).iter().map(ToString::to_string).collect();
        assert_eq!(rebuilt, line);
    }
}
