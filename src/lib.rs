//! semtag - Semantic tag registry for Rust source trees
//!
//! A command-line tool that tracks semantic tags attached to fields,
//! parameters, and return values, lints them against their declared
//! types, and generates per-tag documentation reports.
//!
//! Tags are attached in source with the `tagged` attribute macro and
//! erased during expansion; the registry reads them back from source
//! text, so they never affect compiled output.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SemtagError;

#[doc(hidden)]
pub use semtag_macros::tagged;
