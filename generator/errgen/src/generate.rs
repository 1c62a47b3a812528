//! errgen pipeline driver
//!
//! Loads the header, extracts its definitions and writes the encoded snippet.
//! Every failure here is fatal for the run.

use std::{io, path::PathBuf};

use errgen_emit::{EncodingMode, Encoder};
use errgen_parser::Header;
use errgen_utils::io::{open_output, read_source};
use thiserror::Error;

use crate::config::GeneratorConfig;

/// A fatal error while running the pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The header could not be read
    #[error("failed to read header `{}`", .path.display())]
    ReadInput {
        /// The header path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
    /// The snippet could not be written. The output may be left truncated.
    #[error("failed to write snippet to `{}`", .path.display())]
    WriteOutput {
        /// The output path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
}

/// Drive one generator run, returning the number of entries written
///
/// The input is read in full before the output is opened, so a missing
/// header leaves any existing output untouched.
///
/// # Errors
/// If the header cannot be read or the output cannot be written.
pub fn generate(config: &GeneratorConfig, mode: EncodingMode) -> Result<usize, GenerateError> {
    // === LOADER ===
    let source = read_source(&config.input_path).map_err(|source| GenerateError::ReadInput {
        path: config.input_path.clone(),
        source,
    })?;
    tracing::debug!(
        path = %config.input_path.display(),
        bytes = source.len(),
        "loaded header"
    );

    // === EXTRACTOR ===
    let header = Header::new(&source);

    // === ENCODER ===
    let write_error = |source| GenerateError::WriteOutput {
        path: config.output_path.clone(),
        source,
    };
    let out = open_output(&config.output_path).map_err(write_error)?;
    let mut encoder = Encoder::new(out, mode, config.emit_config());
    let count = encoder.emit_all(&header).map_err(write_error)?;
    encoder.finish().map_err(write_error)?;

    tracing::info!(
        path = %config.output_path.display(),
        %mode,
        count,
        "wrote snippet"
    );
    Ok(count)
}
