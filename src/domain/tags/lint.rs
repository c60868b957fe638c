//! Lint checks over scanned sites
//!
//! Diagnostics are tooling output only. A tag has no runtime
//! representation, so nothing here can surface at runtime.

use crate::domain::numeric::NumericClass;
use crate::domain::site::TagSite;
use crate::domain::tags::definition::TagDefinition;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The declared type cannot hold an epoch-millisecond value
    TypeMismatch,
    /// The marker names a tag that is not declared in the config
    UnknownTag,
    /// The same tag is attached twice to one site
    DuplicateTag,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::TypeMismatch => write!(f, "TypeMismatch"),
            DiagnosticKind::UnknownTag => write!(f, "UnknownTag"),
            DiagnosticKind::DuplicateTag => write!(f, "DuplicateTag"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub file: PathBuf,
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}]: {}:{} {}",
            self.severity,
            self.kind,
            self.file.display(),
            self.line,
            self.message
        )
    }
}

pub struct Linter;

impl Linter {
    /// Check every site against the declared tags
    ///
    /// Emits at most one TypeMismatch per (site, tag) pair and exactly one
    /// UnknownTag per undeclared name per site.
    pub fn check(sites: &[TagSite], declared: &[TagDefinition]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for site in sites {
            for tag in site.unique_tags() {
                let is_declared = declared.iter().any(|def| def.name == tag);

                if !is_declared {
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::UnknownTag,
                        severity: Severity::Error,
                        file: site.file.clone(),
                        line: site.line,
                        message: format!(
                            "{}: tag '{}' is not declared in .semtag/config.toml",
                            site.location_label(),
                            tag
                        ),
                    });
                    continue;
                }

                if !NumericClass::classify(&site.declared_type).is_integer_like() {
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::TypeMismatch,
                        severity: Severity::Error,
                        file: site.file.clone(),
                        line: site.line,
                        message: format!(
                            "{}: tag '{}' requires an integer-like type, found {}",
                            site.location_label(),
                            tag,
                            site.declared_type
                        ),
                    });
                }
            }

            for tag in site.duplicate_tags() {
                diagnostics.push(Diagnostic {
                    kind: DiagnosticKind::DuplicateTag,
                    severity: Severity::Warning,
                    file: site.file.clone(),
                    line: site.line,
                    message: format!(
                        "{}: tag '{}' is attached more than once",
                        site.location_label(),
                        tag
                    ),
                });
            }
        }

        diagnostics
    }

    pub fn error_count(diagnostics: &[Diagnostic]) -> usize {
        diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(diagnostics: &[Diagnostic]) -> usize {
        diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}
