//! Tag declarations and their documentation templates

use crate::domain::site::SiteKind;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Boilerplate appended to every site tagged `current_time_millis`
pub const CURRENT_TIME_MILLIS_DOC: &str = "Value is a non-negative timestamp measured as the \
number of milliseconds since 1970-01-01T00:00:00Z.";

/// Regex for valid tag names: lowercase identifier, digits and underscores
fn tag_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap())
}

/// Check a tag name against the allowed syntax
pub fn is_valid_tag_name(name: &str) -> bool {
    tag_name_regex().is_match(name)
}

/// A declared semantic tag
///
/// The tag itself carries no payload; its identity is its name. The
/// templates are the fixed sentences the documentation generator appends
/// at each kind of attachment site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    pub name: String,

    /// Template for tagged record fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_doc: Option<String>,

    /// Template for tagged function parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_doc: Option<String>,

    /// Template for tagged return slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_doc: Option<String>,
}

impl TagDefinition {
    /// The built-in tag for non-negative epoch-millisecond timestamps
    pub fn current_time_millis() -> Self {
        TagDefinition {
            name: "current_time_millis".to_string(),
            member_doc: Some(CURRENT_TIME_MILLIS_DOC.to_string()),
            param_doc: Some(CURRENT_TIME_MILLIS_DOC.to_string()),
            return_doc: Some(CURRENT_TIME_MILLIS_DOC.to_string()),
        }
    }

    /// Template text for a given attachment-site kind, if declared
    pub fn template_for(&self, kind: &SiteKind) -> Option<&str> {
        match kind {
            SiteKind::Field { .. } => self.member_doc.as_deref(),
            SiteKind::Param { .. } => self.param_doc.as_deref(),
            SiteKind::Return => self.return_doc.as_deref(),
        }
    }
}
