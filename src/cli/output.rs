//! Output formatting utilities

use crate::domain::site::TagSite;
use crate::domain::tags::{Diagnostic, Linter};

/// Format a list of tag sites for display
pub fn format_site_list(sites: &[TagSite]) -> String {
    if sites.is_empty() {
        return "No sites found".to_string();
    }

    let mut output = String::new();
    for site in sites {
        output.push_str(&format!(
            "{}:{}  {} ({}: {})  #{}\n",
            site.file.display(),
            site.line,
            site.location_label(),
            site.kind.label(),
            site.declared_type,
            site.unique_tags().join(" #"),
        ));
    }
    output
}

/// Format declared tags with their site counts
pub fn format_tag_list(tags: &[(String, usize)]) -> String {
    if tags.is_empty() {
        return "No tags declared".to_string();
    }

    let mut output = String::new();
    for (name, count) in tags {
        let noun = if *count == 1 { "site" } else { "sites" };
        output.push_str(&format!("#{}  {} {}\n", name, count, noun));
    }

    output
}

/// Format lint diagnostics followed by a summary line
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut output = String::new();
    for diagnostic in diagnostics {
        output.push_str(&format!("{}\n", diagnostic));
    }
    output.push_str(&format!(
        "{} error(s), {} warning(s)\n",
        Linter::error_count(diagnostics),
        Linter::warning_count(diagnostics)
    ));
    output
}
