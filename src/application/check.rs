//! Check use case - run the linter over the scanned registry

use crate::application::scan::ScanService;
use crate::domain::tags::{Diagnostic, Linter};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service that lints every tagged site
pub struct CheckService {
    repository: FileSystemRepository,
}

impl CheckService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CheckService { repository }
    }

    /// Scan and lint; diagnostics come back in site traversal order
    pub fn execute(&self) -> Result<Vec<Diagnostic>> {
        let (config, registry) = ScanService::new(self.repository.clone()).execute()?;
        Ok(Linter::check(registry.sites(), &config.tags))
    }
}
