//! Application layer - use cases and services

pub mod check;
pub mod document;
pub mod init;
pub mod list_sites;
pub mod list_tags;
pub mod manage_config;
pub mod scan;

pub use check::CheckService;
pub use document::{DocumentOptions, DocumentService};
pub use list_sites::ListSitesService;
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use scan::ScanService;
