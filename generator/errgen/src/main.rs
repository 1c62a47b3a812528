#![doc = "errgen - turn errno-style `#define` headers into code snippets"]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_structs_with_brackets,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::min_ident_chars,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::non_ascii_literal,
    clippy::redundant_type_annotations,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::unseparated_literal_suffix,
    clippy::implicit_clone,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unused_crate_dependencies,
    variant_size_differences,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions
)]

mod build_info;
mod cli;
mod config;
mod generate;
mod ice;
mod prompt;

use std::io;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use errgen_emit::EncodingMode;
use errgen_utils::io::is_stdout;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "ERRGEN_LOG";

/// Install the stderr log subscriber
///
/// [`LOG_ENV`] wins if set; otherwise `-v` selects `debug` and the default is
/// `warn`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    ice::setup_panic_hook();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version());
        return Ok(());
    }

    init_logging(cli.verbose);

    let mode = cli.mode.map(EncodingMode::from);
    let config = cli.into_config()?;

    let mode = match mode {
        Some(mode) => Ok(mode),
        // keep the prompt out of the generated snippet when it goes to stdout
        None if is_stdout(&config.output_path) => {
            prompt::select_mode(&mut io::stdin().lock(), &mut io::stderr().lock())
        }
        None => prompt::select_mode(&mut io::stdin().lock(), &mut io::stdout().lock()),
    }
    .context("failed to read the encoding mode")?;

    generate::generate(&config, mode)?;

    Ok(())
}
