//! Semantic tag system

pub mod definition;
pub mod docgen;
pub mod lint;
pub mod query;
pub mod registry;
pub mod scanner;

// Re-export main types
pub use definition::{TagDefinition, CURRENT_TIME_MILLIS_DOC};
pub use docgen::DocGenerator;
pub use lint::{Diagnostic, DiagnosticKind, Linter, Severity};
pub use query::TagQuery;
pub use registry::TagRegistry;
pub use scanner::SiteScanner;
