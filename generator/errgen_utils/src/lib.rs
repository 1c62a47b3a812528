//! Shared utilities for the errgen workspace
//!
//! Source locations ([`span`]) and the file helpers used by the generator
//! pipeline ([`io`]).

#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod io;
pub mod span;
