//! The `#define NAME VALUE` grammar
//!
//! A line is a definition when, after optional leading whitespace, it reads
//! `#`, optional whitespace, `define`, whitespace, a name word, whitespace,
//! and an all-digit value word. Anything may follow the value. The grammar
//! is applied one line at a time by [`parse_line`]; [`Header`] and
//! [`Definitions`] lift it to a whole file.

use std::iter::Peekable;

use derive_more::Display;
use errgen_utils::span::{Span, Spannable, Spanned};

use crate::lexer::{is_decimal, LineLexer, Tok};

/// A single `#define NAME VALUE` constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("#define {name} {value}")]
pub struct Definition<'input> {
    /// The macro name, a run of `[A-Za-z0-9_]`
    pub name: &'input str,
    /// The macro value exactly as written, a run of decimal digits
    pub value: &'input str,
}
impl Definition<'_> {
    /// The value as a number, or [`None`] if it does not fit in a [`u64`]
    #[must_use]
    pub fn numeric_value(&self) -> Option<u64> {
        self.value.parse().ok()
    }
}

/// Why a line was not a [`Definition`]
///
/// Rejections are informational. A header is expected to contain plenty of
/// lines that are not integer definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The line does not start with `#` (blank lines, comments, code)
    #[display("not a preprocessor directive")]
    NotADirective,
    /// The directive is something other than `#define`
    #[display("not a #define directive")]
    NotADefine,
    /// `#define` is not followed by whitespace and a name
    #[display("#define without a name")]
    MissingName,
    /// The name is not followed by whitespace and a value, as with
    /// function-like macros
    #[display("#define without a value")]
    MissingValue,
    /// The value is present but is not a plain decimal integer
    #[display("value is not a decimal integer")]
    NonDecimalValue,
}
impl Rejection {
    /// Whether the line was a `#define` that failed to match. These are
    /// worth logging; other rejections are just ordinary header content.
    #[must_use]
    pub const fn is_define(self) -> bool {
        matches!(
            self,
            Self::MissingName | Self::MissingValue | Self::NonDecimalValue
        )
    }
}

/// Skip over a single [`Tok::Whitespace`] if one is next
fn skip_whitespace<'input>(tokens: &mut Peekable<impl Iterator<Item = Tok<'input>>>) -> bool {
    tokens
        .next_if(|tok| matches!(tok, Tok::Whitespace(_)))
        .is_some()
}

/// Parse one line (without its terminator) as a `#define NAME VALUE`
///
/// # Errors
/// Returns the [`Rejection`] describing where the line left the grammar.
pub fn parse_line(line: &str) -> Result<Definition<'_>, Rejection> {
    let mut tokens = LineLexer::new(line).map(Spanned::into_value).peekable();

    skip_whitespace(&mut tokens);
    if tokens.next() != Some(Tok::Hash) {
        return Err(Rejection::NotADirective);
    }

    skip_whitespace(&mut tokens);
    if tokens.next() != Some(Tok::Word("define")) {
        return Err(Rejection::NotADefine);
    }

    if !skip_whitespace(&mut tokens) {
        return Err(Rejection::MissingName);
    }
    let Some(Tok::Word(name)) = tokens.next() else {
        return Err(Rejection::MissingName);
    };

    if !skip_whitespace(&mut tokens) {
        return Err(Rejection::MissingValue);
    }
    match tokens.next() {
        Some(Tok::Word(value)) if is_decimal(value) => Ok(Definition { name, value }),
        Some(_) => Err(Rejection::NonDecimalValue),
        None => Err(Rejection::MissingValue),
    }
}

/// The text of a C header, viewed as a source of [`Definition`]s
///
/// Every call to [`Header::definitions`] starts a fresh scan, so the sequence
/// can be walked as many times as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'input> {
    /// The full header text
    source: &'input str,
}
impl<'input> Header<'input> {
    /// Wrap the text of a header
    #[must_use]
    pub const fn new(source: &'input str) -> Self {
        Self { source }
    }

    /// The wrapped text
    #[must_use]
    pub const fn source(&self) -> &'input str {
        self.source
    }

    /// Start a lazy scan over the definitions in this header
    #[must_use]
    pub fn definitions(&self) -> Definitions<'input> {
        Definitions::new(self.source)
    }
}
impl<'input> IntoIterator for &Header<'input> {
    type Item = Spanned<Definition<'input>>;
    type IntoIter = Definitions<'input>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions()
    }
}

/// Lazy iterator over the [`Definition`]s of a header, in file order
///
/// Each item is spanned with the byte range of its line in the header,
/// excluding the line terminator.
#[derive(Debug, Clone)]
pub struct Definitions<'input> {
    /// The full header text
    input: &'input str,
    /// Byte offset of the next unscanned line
    pos: usize,
    /// 1-indexed number of the last scanned line
    line: usize,
}
impl<'input> Definitions<'input> {
    /// Start scanning `input` from the top. A leading byte order mark is
    /// skipped so it cannot hide a definition on the first line.
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        let pos = if input.starts_with('\u{feff}') {
            '\u{feff}'.len_utf8()
        } else {
            0
        };
        Self { input, pos, line: 0 }
    }

    /// Split the next line off the input, returning it and its start offset
    fn next_line(&mut self) -> Option<(usize, &'input str)> {
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let rest = &self.input[start..];
        let (raw, consumed) = rest
            .find('\n')
            .map_or((rest, rest.len()), |idx| (&rest[..idx], idx + 1));
        self.pos += consumed;
        self.line += 1;

        Some((start, raw.strip_suffix('\r').unwrap_or(raw)))
    }
}
impl<'input> Iterator for Definitions<'input> {
    type Item = Spanned<Definition<'input>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (start, line) = self.next_line()?;
            match parse_line(line) {
                Ok(definition) => {
                    return Some(definition.in_span(Span::from_positions(start, start + line.len())))
                }
                Err(rejection) if rejection.is_define() => {
                    tracing::trace!(line_number = self.line, %rejection, "skipping `{line}`");
                }
                Err(_) => {}
            }
        }
    }
}
