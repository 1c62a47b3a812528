//! Interactive selection of the encoding mode

use std::io::{self, BufRead, Write};

use errgen_emit::EncodingMode;

/// Lists the accepted answers; `text` is bracketed as the default
const OPTIONS_MESSAGE: &str = "valid options are:\n  'switch' / 'Dict' / 'enum' / ['text']\n";

/// Printed right before reading the answer
const PROMPT: &str = "encode type: ";

/// Ask the operator which mode to emit in
///
/// Writes the option list and prompt to `output`, then reads one line from
/// `input`. There is no retry: anything unrecognized, including end of
/// input, selects [`EncodingMode::Text`].
///
/// # Errors
/// If writing the prompt or reading the answer fails.
pub fn select_mode(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<EncodingMode> {
    output.write_all(OPTIONS_MESSAGE.as_bytes())?;
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let mode = EncodingMode::from_operator_input(&answer);
    tracing::debug!(answer = answer.trim(), %mode, "selected encoding mode");
    Ok(mode)
}
