//! Scan use case - build the registry from the source tree

use crate::domain::tags::{SiteScanner, TagRegistry};
use crate::error::Result;
use crate::infrastructure::repository::ProjectRepository;
use crate::infrastructure::{Config, FileSystemRepository};

/// Service that runs the single-pass scan over the configured source tree
pub struct ScanService {
    repository: FileSystemRepository,
}

impl ScanService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ScanService { repository }
    }

    /// Scan every source file and collect tagged sites into a registry
    ///
    /// Files are visited in sorted path order and sites kept in
    /// declaration order, so the registry's ordering is the source
    /// traversal order.
    pub fn execute(&self) -> Result<(Config, TagRegistry)> {
        let config = self.repository.load_config()?;
        let sources = self.repository.list_sources(&config.source_dir)?;

        let mut sites = Vec::new();
        for source in sources {
            let content = self.repository.read_source(&source)?;
            sites.extend(SiteScanner::extract_from_source(&content, &source)?);
        }

        Ok((config, TagRegistry::from_sites(sites)))
    }
}
