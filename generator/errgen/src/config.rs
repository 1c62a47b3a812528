//! Generator configuration
//!
//! Everything that used to be fixed about a run lives in
//! [`GeneratorConfig`]: where the header is, where the snippet goes, and the
//! string literal prefix.

use std::{
    env, io,
    path::{Path, PathBuf},
};

use errgen_emit::EmitConfig;

/// File name of the default input header
pub const DEFAULT_INPUT_FILE: &str = "errno.txt";
/// File name of the default output snippet. The contents are not actually CSV.
pub const DEFAULT_OUTPUT_FILE: &str = "errno.csv";

/// Settings for a single generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Prepended inside every emitted string literal
    pub prefix: String,
    /// The header to read
    pub input_path: PathBuf,
    /// Where to write the snippet; `-` means stdout
    pub output_path: PathBuf,
}

impl GeneratorConfig {
    /// The default files inside `dir`, with no prefix
    #[must_use]
    pub fn beside(dir: &Path) -> Self {
        Self {
            prefix: String::new(),
            input_path: dir.join(DEFAULT_INPUT_FILE),
            output_path: dir.join(DEFAULT_OUTPUT_FILE),
        }
    }

    /// The default files next to the running executable
    ///
    /// # Errors
    /// If the path of the current executable cannot be determined.
    pub fn beside_executable() -> io::Result<Self> {
        let exe = env::current_exe()?;
        Ok(Self::beside(exe.parent().unwrap_or_else(|| Path::new("."))))
    }

    /// The part of the configuration the emitter cares about
    #[must_use]
    pub fn emit_config(&self) -> EmitConfig {
        EmitConfig {
            prefix: self.prefix.clone(),
        }
    }
}
