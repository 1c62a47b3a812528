//! Snippet emitter for extracted `#define` constants
//!
//! Given a sequence of [`errgen_parser::Definition`]s and an
//! [`EncodingMode`], the [`Encoder`] writes one entry per definition in one
//! of four code styles. The output is a starting point for hand editing:
//! trailing commas are left on the final entry.

#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod encoder;
pub mod mode;

pub use encoder::{emit_to_string, EmitConfig, Encoder, Entry};
pub use mode::{EncodingMode, UnknownEncodingMode};
