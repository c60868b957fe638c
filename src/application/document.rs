//! Documentation generation use case
//!
//! Orchestrates the full workflow: scan the tree, collect the sites for
//! one tag, render the report, write it under the project.

use crate::application::scan::ScanService;
use crate::domain::tags::definition::is_valid_tag_name;
use crate::domain::tags::DocGenerator;
use crate::error::{Result, SemtagError};
use crate::infrastructure::repository::ProjectRepository;
use crate::infrastructure::FileSystemRepository;
use std::path::PathBuf;

/// Options for documentation generation
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Tag to document
    pub tag: String,

    /// Output file path (None = default: .semtag/docs/<tag>.md)
    pub output: Option<PathBuf>,
}

/// Service for generating the per-tag documentation report
pub struct DocumentService {
    repository: FileSystemRepository,
}

impl DocumentService {
    /// Create new document service
    pub fn new(repository: FileSystemRepository) -> Self {
        DocumentService { repository }
    }

    /// Execute the generation
    ///
    /// Returns the path of the written report.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tag name is invalid or not declared
    /// - No sites carry the tag
    /// - A template is missing for one of the site kinds
    /// - File I/O fails
    pub fn execute(&self, options: DocumentOptions) -> Result<PathBuf> {
        if !is_valid_tag_name(&options.tag) {
            return Err(SemtagError::InvalidQuery(options.tag.clone()));
        }

        let (config, registry) = ScanService::new(self.repository.clone()).execute()?;

        let sites = registry.sites_by_tag(&options.tag);
        if sites.is_empty() {
            return Err(SemtagError::TagNotFound(options.tag.clone()));
        }

        // An undeclared tag has no templates at all: same configuration
        // error as a declared tag missing one template.
        let definition = config.find_tag(&options.tag).ok_or_else(|| {
            SemtagError::MissingDocumentationTemplate {
                tag: options.tag.clone(),
                site_kind: sites[0].kind.label().to_string(),
            }
        })?;

        let report = DocGenerator::render(definition, &sites)?;

        let output_path = options
            .output
            .unwrap_or_else(|| PathBuf::from(format!(".semtag/docs/{}.md", options.tag)));

        self.repository.write_report(&output_path, &report)?;

        Ok(if output_path.is_absolute() {
            output_path
        } else {
            self.repository.root().join(output_path)
        })
    }
}
