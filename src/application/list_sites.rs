//! Site listing use case - the findSitesByTag surface

use crate::application::scan::ScanService;
use crate::domain::site::TagSite;
use crate::domain::tags::TagQuery;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for querying sites by tag
pub struct ListSitesService {
    repository: FileSystemRepository,
}

impl ListSitesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListSitesService { repository }
    }

    /// Scan the tree and return the sites matching a boolean tag query
    pub fn execute(&self, query: &str) -> Result<Vec<TagSite>> {
        let query = TagQuery::parse(query)?;
        let (_, registry) = ScanService::new(self.repository.clone()).execute()?;
        Ok(registry.filter(&query).into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init;
    use crate::error::SemtagError;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        init::init(temp.path()).unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(
            temp.path().join("src/lib.rs"),
            r#"
            pub struct Event {
                #[semtag(current_time_millis)]
                pub created_at_millis: u64,
                #[semtag(audit_millis)]
                pub audited_at_millis: u64,
            }
            "#,
        )
        .unwrap();
        temp
    }

    #[test]
    fn single_tag_query_returns_matching_sites() {
        let temp = project();
        let service = ListSitesService::new(FileSystemRepository::new(temp.path().to_path_buf()));

        let sites = service.execute("current_time_millis").unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].location_label(), "Event.created_at_millis");
    }

    #[test]
    fn boolean_query_excludes_sites() {
        let temp = project();
        let service = ListSitesService::new(FileSystemRepository::new(temp.path().to_path_buf()));

        let sites = service
            .execute("current_time_millis OR audit_millis")
            .unwrap();
        assert_eq!(sites.len(), 2);

        let sites = service.execute("NOT current_time_millis").unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].location_label(), "Event.audited_at_millis");
    }

    #[test]
    fn invalid_query_is_rejected() {
        let temp = project();
        let service = ListSitesService::new(FileSystemRepository::new(temp.path().to_path_buf()));

        let err = service.execute("bad-query").unwrap_err();
        assert!(matches!(err, SemtagError::InvalidQuery(_)));
    }
}
