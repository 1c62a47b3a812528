//! Rendering definitions into snippet entries
//!
//! An [`Entry`] is the rendering of one [`Definition`] in one
//! [`EncodingMode`]. Every line of an entry ends in `\n`; switch entries span
//! two lines.

use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use errgen_parser::{Definition, Header};
use errgen_utils::span::Spanned;

use crate::mode::EncodingMode;

/// Emitter settings that do not change between entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitConfig {
    /// Text placed at the start of every emitted string literal, inside the
    /// quotes. Empty by default.
    pub prefix: String,
}

/// One definition rendered in one mode
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// The definition to render
    pub definition: &'a Definition<'a>,
    /// The style to render it in
    pub mode: EncodingMode,
    /// The string literal prefix
    pub prefix: &'a str,
}
impl Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Definition { name, value } = *self.definition;
        let prefix = self.prefix;
        match self.mode {
            EncodingMode::Text => writeln!(f, "\"{prefix}{name}\","),
            EncodingMode::Enum => writeln!(f, "{name} = {value},"),
            EncodingMode::Dict => writeln!(f, "{{{value}, \"{prefix}{name}\"}},"),
            EncodingMode::Switch => {
                writeln!(f, "case {name}: ")?;
                writeln!(f, "\treturn \"{prefix}{name}\";")
            }
        }
    }
}

/// Writes [`Entry`]s for a stream of definitions to an output
#[derive(Debug)]
pub struct Encoder<W> {
    /// Where entries are written
    out: W,
    /// The style for every entry
    mode: EncodingMode,
    /// Shared settings
    config: EmitConfig,
}

impl<W: Write> Encoder<W> {
    /// Create a new [`Encoder`] writing to `out`
    pub const fn new(out: W, mode: EncodingMode, config: EmitConfig) -> Self {
        Self { out, mode, config }
    }

    /// The mode this encoder writes in
    #[must_use]
    pub const fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Write the entry for a single definition
    ///
    /// # Errors
    /// Propagates any error from the underlying writer.
    pub fn emit(&mut self, definition: &Definition<'_>) -> io::Result<()> {
        let entry = Entry {
            definition,
            mode: self.mode,
            prefix: &self.config.prefix,
        };
        write!(self.out, "{entry}")
    }

    /// Write entries for every definition in order, returning how many were
    /// written
    ///
    /// # Errors
    /// Stops at and returns the first error from the underlying writer.
    pub fn emit_all<'input>(
        &mut self,
        definitions: impl IntoIterator<Item = Spanned<Definition<'input>>>,
    ) -> io::Result<usize> {
        let mut count = 0;
        for definition in definitions {
            self.emit(definition.value())?;
            count += 1;
        }
        Ok(count)
    }

    /// Flush the output and hand it back
    ///
    /// # Errors
    /// Returns any error raised while flushing.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Render every definition of a header into one string
#[must_use]
pub fn emit_to_string(header: &Header<'_>, mode: EncodingMode, config: &EmitConfig) -> String {
    header
        .definitions()
        .map(|definition| {
            Entry {
                definition: definition.value(),
                mode,
                prefix: &config.prefix,
            }
            .to_string()
        })
        .collect()
}
