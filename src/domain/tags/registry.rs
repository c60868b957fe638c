//! The semantic tag registry
//!
//! Holds every tagged attachment site found by a scan, in source traversal
//! order. The order is presentational only; consumers must treat the site
//! list as an unordered set.

use crate::domain::site::TagSite;
use crate::domain::tags::query::TagQuery;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    sites: Vec<TagSite>,
}

impl TagRegistry {
    pub fn from_sites(sites: Vec<TagSite>) -> Self {
        TagRegistry { sites }
    }

    pub fn sites(&self) -> &[TagSite] {
        &self.sites
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Every site carrying the given tag, in traversal order
    pub fn sites_by_tag(&self, tag: &str) -> Vec<&TagSite> {
        self.sites
            .iter()
            .filter(|site| site.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Sites whose tag set matches a boolean query
    pub fn filter(&self, query: &TagQuery) -> Vec<&TagSite> {
        self.sites
            .iter()
            .filter(|site| query.matches(&site.tags))
            .collect()
    }

    /// Site counts per tag, sorted by tag name
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for site in &self.sites {
            for tag in site.unique_tags() {
                *counts.entry(tag.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }
}
