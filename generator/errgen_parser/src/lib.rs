//! Extraction of `#define NAME VALUE` constants from C headers
//!
//! The [`lexer`] splits a single line into [`lexer::Tok`]ens and the
//! [`parser`] applies the directive grammar to each line, yielding
//! [`Definition`]s in file order. Lines that are not integer `#define`s are
//! skipped, never reported as errors.

#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod lexer;
pub mod parser;

pub use parser::{parse_line, Definition, Definitions, Header, Rejection};
