//! Error types for semtag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the semtag tooling
#[derive(Debug, Error)]
pub enum SemtagError {
    #[error("Not a semtag project: {0}")]
    NotSemtagProject(PathBuf),

    #[error("Invalid tag query: {0}")]
    InvalidQuery(String),

    #[error("No sites found for tag: {0}")]
    TagNotFound(String),

    #[error("Check failed: {errors} error(s), {warnings} warning(s)")]
    ChecksFailed { errors: usize, warnings: usize },

    #[error("No documentation template for tag '{tag}' at {site_kind} sites")]
    MissingDocumentationTemplate { tag: String, site_kind: String },

    #[error("Failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SemtagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SemtagError::NotSemtagProject(_) => 2,
            SemtagError::InvalidQuery(_) => 3,
            SemtagError::TagNotFound(_) => 4,
            SemtagError::ChecksFailed { .. } => 5,
            SemtagError::MissingDocumentationTemplate { .. } => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SemtagError::NotSemtagProject(path) => {
                format!(
                    "Not a semtag project: {}\n\n\
                    Suggestions:\n\
                    • Run 'semtag init' in this directory to set up the registry\n\
                    • Navigate to a directory that contains .semtag/\n\
                    • Set SEMTAG_ROOT environment variable to your project path",
                    path.display()
                )
            }
            SemtagError::InvalidQuery(query) => {
                format!(
                    "Invalid tag query: '{}'\n\n\
                    Valid queries combine tag names with AND, OR, NOT:\n\
                    • current_time_millis\n\
                    • current_time_millis AND duration_millis\n\
                    • current_time_millis AND NOT duration_millis\n\n\
                    Tag names use lowercase letters, digits, and underscores.",
                    query
                )
            }
            SemtagError::TagNotFound(tag) => {
                format!(
                    "No sites found for tag: '{}'\n\n\
                    Suggestions:\n\
                    • Check the tag spelling against 'semtag tags'\n\
                    • Make sure the source directory is configured: semtag config source_dir\n\
                    • Sites carry tags via #[semtag({})] markers",
                    tag, tag
                )
            }
            SemtagError::MissingDocumentationTemplate { tag, site_kind } => {
                format!(
                    "No documentation template for tag '{}' at {} sites\n\n\
                    Suggestions:\n\
                    • Add the missing template under [[tags]] in .semtag/config.toml\n\
                    • Templates are member_doc, param_doc, and return_doc\n\
                    • Run 'semtag tags' to see the declared tags",
                    tag, site_kind
                )
            }
            SemtagError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: source_dir, created ('created' is read-only)\n\
                        Example: semtag config source_dir src",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SemtagError
pub type Result<T> = std::result::Result<T, SemtagError>;
