//! Defines the errgen command line interface

use std::{io, path::PathBuf};

use clap::Parser;
use derive_more::Display;
use errgen_emit::EncodingMode;

use crate::config::GeneratorConfig;

/// Generate code snippets from the `#define` constants of an errno-style
/// header
///
/// With no arguments, reads `errno.txt` beside the executable, asks which
/// style to emit, and writes `errno.csv` beside the executable.
#[derive(Parser, Debug)]
#[command(version = None)]
pub struct Cli {
    /// See what version of errgen you are using
    #[arg(short = 'V', long)]
    pub version: bool,

    /// The header to read definitions from
    /// [default: errno.txt beside the executable]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The file to write the snippet to, or `-` for stdout
    /// [default: errno.csv beside the executable]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text to place at the start of every emitted string literal
    #[arg(short, long)]
    #[clap(default_value = "")]
    pub prefix: String,

    /// What style to emit. If omitted, you will be asked interactively.
    #[arg(short, long)]
    pub mode: Option<OutputFormat>,

    /// Log what the generator is doing to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the command line overrides on top of the default configuration
    ///
    /// # Errors
    /// If a default path is needed and the executable's location cannot be
    /// determined.
    pub fn into_config(self) -> io::Result<GeneratorConfig> {
        let (input_path, output_path) = match (self.input, self.output) {
            (Some(input), Some(output)) => (input, output),
            (input, output) => {
                let defaults = GeneratorConfig::beside_executable()?;
                (
                    input.unwrap_or(defaults.input_path),
                    output.unwrap_or(defaults.output_path),
                )
            }
        };

        Ok(GeneratorConfig {
            prefix: self.prefix,
            input_path,
            output_path,
        })
    }
}

/// The list of snippet styles errgen can emit
#[derive(Debug, Clone, Copy, clap::ValueEnum, PartialEq, Eq, Display)]
pub enum OutputFormat {
    /// `"EPERM",`
    #[display("text")]
    Text,
    /// `EPERM = 1,`
    #[display("enum")]
    Enum,
    /// `{1, "EPERM"},`
    #[display("dict")]
    Dict,
    /// `case EPERM:` followed by `return "EPERM";`
    #[display("switch")]
    Switch,
}
impl From<OutputFormat> for EncodingMode {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Text => Self::Text,
            OutputFormat::Enum => Self::Enum,
            OutputFormat::Dict => Self::Dict,
            OutputFormat::Switch => Self::Switch,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_defaults_and_prompt() {
        let cli = Cli::try_parse_from(["errgen"]).expect("should parse");
        assert!(!cli.version);
        assert!(!cli.verbose);
        assert_eq!(cli.input, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.prefix, "");
        assert_eq!(cli.mode, None);
    }

    #[test]
    fn overrides_are_parsed() {
        let cli = Cli::try_parse_from([
            "errgen", "-i", "in.h", "-o", "-", "-p", "E_", "--mode", "switch", "-v",
        ])
        .expect("should parse");
        assert_eq!(cli.input, Some(PathBuf::from("in.h")));
        assert_eq!(cli.output, Some(PathBuf::from("-")));
        assert_eq!(cli.prefix, "E_");
        assert_eq!(cli.mode, Some(OutputFormat::Switch));
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_mode_is_a_usage_error() {
        assert!(Cli::try_parse_from(["errgen", "--mode", "csv"]).is_err());
    }

    #[test]
    fn explicit_paths_are_used_verbatim() {
        let config = Cli::try_parse_from(["errgen", "-i", "a.h", "-o", "b.inc", "-p", "x"])
            .expect("should parse")
            .into_config()
            .expect("should build config");
        assert_eq!(
            config,
            GeneratorConfig {
                prefix: "x".to_string(),
                input_path: PathBuf::from("a.h"),
                output_path: PathBuf::from("b.inc"),
            }
        );
    }

    #[test]
    fn missing_paths_fall_back_to_executable_directory() {
        let config = Cli::try_parse_from(["errgen", "-i", "a.h"])
            .expect("should parse")
            .into_config()
            .expect("should build config");
        let defaults = GeneratorConfig::beside_executable().expect("should locate executable");
        assert_eq!(config.input_path, PathBuf::from("a.h"));
        assert_eq!(config.output_path, defaults.output_path);
    }

    #[test]
    fn output_formats_map_onto_encoding_modes() {
        for (format, mode) in [
            (OutputFormat::Text, EncodingMode::Text),
            (OutputFormat::Enum, EncodingMode::Enum),
            (OutputFormat::Dict, EncodingMode::Dict),
            (OutputFormat::Switch, EncodingMode::Switch),
        ] {
            assert_eq!(EncodingMode::from(format), mode);
            assert_eq!(format.to_string(), mode.to_string());
        }
    }
}
