//! Attachment sites for semantic tags

use std::path::PathBuf;

/// Which slot of a declaration carries the tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteKind {
    /// A named field of a record type
    Field { name: String },
    /// A function parameter
    Param { name: String },
    /// A function return slot
    Return,
}

impl SiteKind {
    /// Short noun used in diagnostics and template lookups
    pub fn label(&self) -> &'static str {
        match self {
            SiteKind::Field { .. } => "field",
            SiteKind::Param { .. } => "parameter",
            SiteKind::Return => "return",
        }
    }
}

impl std::fmt::Display for SiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteKind::Field { name } => write!(f, "field {}", name),
            SiteKind::Param { name } => write!(f, "parameter {}", name),
            SiteKind::Return => write!(f, "return value"),
        }
    }
}

/// One declaration site carrying at least one semantic tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSite {
    /// Declaring entity, e.g. "Event", "Event::created_at_millis", "timers::schedule"
    pub entity: String,

    /// Which slot of the entity the tags attach to
    pub kind: SiteKind,

    /// Declared type at the site, rendered from source
    pub declared_type: String,

    /// Source file relative to the project root
    pub file: PathBuf,

    /// 1-based line of the declaration
    pub line: usize,

    /// Tags attached to this site, in source order, possibly with duplicates
    pub tags: Vec<String>,

    /// Existing doc comment on the declaration, if any
    pub doc: Option<String>,
}

impl TagSite {
    /// Tags with duplicates removed, preserving first-occurrence order
    pub fn unique_tags(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for tag in &self.tags {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag.as_str());
            }
        }
        seen
    }

    /// Tags that occur more than once on this site
    pub fn duplicate_tags(&self) -> Vec<&str> {
        let mut duplicates = Vec::new();
        for (index, tag) in self.tags.iter().enumerate() {
            if self.tags[..index].contains(tag) && !duplicates.contains(&tag.as_str()) {
                duplicates.push(tag.as_str());
            }
        }
        duplicates
    }

    /// "entity.field" / "entity(param)" / "entity -> type" style label
    pub fn location_label(&self) -> String {
        match &self.kind {
            SiteKind::Field { name } => format!("{}.{}", self.entity, name),
            SiteKind::Param { name } => format!("{}({})", self.entity, name),
            SiteKind::Return => format!("{} -> {}", self.entity, self.declared_type),
        }
    }
}
