//! Tag listing use case

use crate::application::scan::ScanService;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for listing the declared tags with their site counts
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Declared tags in name order, each with the number of sites found
    ///
    /// Tags that appear in markers without being declared are the
    /// linter's business, not this listing's.
    pub fn execute(&self) -> Result<Vec<(String, usize)>> {
        let (config, registry) = ScanService::new(self.repository.clone()).execute()?;
        let counts = registry.tag_counts();

        let mut names: Vec<String> = config.tags.iter().map(|tag| tag.name.clone()).collect();
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| {
                let count = counts.get(&name).copied().unwrap_or(0);
                (name, count)
            })
            .collect())
    }
}
