//! Documentation generation for tagged sites
//!
//! Renders a markdown report for one tag: each carrying site's existing
//! doc comment with the tag's boilerplate template appended. The template
//! lands verbatim, exactly once; a doc comment that already carries the
//! sentence as a paragraph is left alone.

use crate::domain::site::{SiteKind, TagSite};
use crate::domain::tags::definition::TagDefinition;
use crate::error::{Result, SemtagError};
use pulldown_cmark::{Event, Parser, TagEnd};
use std::path::Path;

pub struct DocGenerator;

impl DocGenerator {
    /// Render the documentation report for a tag over its sites
    ///
    /// Sites are expected in traversal order; they are grouped under one
    /// heading per source file.
    ///
    /// # Errors
    ///
    /// `MissingDocumentationTemplate` if the tag has no template for the
    /// kind of one of the sites. The doc step fails; nothing else does.
    pub fn render(tag: &TagDefinition, sites: &[&TagSite]) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("# Documentation: {}\n", tag.name));

        let mut current_file: Option<&Path> = None;

        for site in sites {
            let template =
                tag.template_for(&site.kind)
                    .ok_or_else(|| SemtagError::MissingDocumentationTemplate {
                        tag: tag.name.clone(),
                        site_kind: site.kind.label().to_string(),
                    })?;

            if current_file != Some(site.file.as_path()) {
                output.push_str(&format!("\n## {}\n", site.file.display()));
                current_file = Some(site.file.as_path());
            }

            output.push_str(&format!(
                "\n### {} ({}, {})\n\n",
                site_heading(site),
                site.kind.label(),
                site.declared_type
            ));
            output.push_str(&merge_doc(site.doc.as_deref(), template));
            output.push('\n');
        }

        Ok(output)
    }
}

fn site_heading(site: &TagSite) -> String {
    match &site.kind {
        SiteKind::Field { name } => format!("{}.{}", site.entity, name),
        SiteKind::Param { name } => format!("{}({})", site.entity, name),
        SiteKind::Return => site.entity.clone(),
    }
}

/// Append the template to the existing doc unless it is already present
///
/// A doc that repeats the template paragraph keeps only its first copy, so
/// the rendered report carries the sentence exactly once either way.
fn merge_doc(existing: Option<&str>, template: &str) -> String {
    match existing {
        Some(doc) if contains_paragraph(doc, template) => {
            format!("{}\n", drop_repeated_paragraph(doc, template).trim_end())
        }
        Some(doc) if !doc.trim().is_empty() => {
            format!("{}\n\n{}\n", doc.trim_end(), template)
        }
        _ => format!("{}\n", template),
    }
}

/// Remove every blank-line-separated block equal to the sentence but the first
fn drop_repeated_paragraph(doc: &str, sentence: &str) -> String {
    let wanted = normalize_whitespace(sentence);
    let mut seen = false;
    let blocks: Vec<&str> = doc
        .split("\n\n")
        .filter(|block| {
            if normalize_whitespace(block) == wanted {
                if seen {
                    return false;
                }
                seen = true;
            }
            true
        })
        .collect();
    blocks.join("\n\n")
}

/// Whether the markdown text contains the sentence as a whole paragraph
fn contains_paragraph(markdown: &str, sentence: &str) -> bool {
    let wanted = normalize_whitespace(sentence);
    let mut current = String::new();
    let mut in_paragraph = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(pulldown_cmark::Tag::Paragraph) => {
                in_paragraph = true;
                current.clear();
            }
            Event::End(TagEnd::Paragraph) => {
                in_paragraph = false;
                if normalize_whitespace(&current) == wanted {
                    return true;
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if in_paragraph {
                    current.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_paragraph {
                    current.push(' ');
                }
            }
            _ => {}
        }
    }

    false
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::definition::CURRENT_TIME_MILLIS_DOC;
    use std::path::PathBuf;

    fn field_site(doc: Option<&str>) -> TagSite {
        TagSite {
            entity: "Event".to_string(),
            kind: SiteKind::Field {
                name: "created_at_millis".to_string(),
            },
            declared_type: "u64".to_string(),
            file: PathBuf::from("src/lib.rs"),
            line: 3,
            tags: vec!["current_time_millis".to_string()],
            doc: doc.map(String::from),
        }
    }

    fn count_occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn template_appears_verbatim_exactly_once() {
        let tag = TagDefinition::current_time_millis();
        let site = field_site(Some("When the event fired."));
        let report = DocGenerator::render(&tag, &[&site]).unwrap();

        assert_eq!(count_occurrences(&report, CURRENT_TIME_MILLIS_DOC), 1);
        assert!(report.contains("When the event fired."));
    }

    #[test]
    fn site_without_doc_gets_only_the_template() {
        let tag = TagDefinition::current_time_millis();
        let site = field_site(None);
        let report = DocGenerator::render(&tag, &[&site]).unwrap();

        assert_eq!(count_occurrences(&report, CURRENT_TIME_MILLIS_DOC), 1);
        assert!(report.contains("### Event.created_at_millis (field, u64)"));
    }

    #[test]
    fn existing_boilerplate_is_not_duplicated() {
        let tag = TagDefinition::current_time_millis();
        let doc = format!("When the event fired.\n\n{}", CURRENT_TIME_MILLIS_DOC);
        let site = field_site(Some(&doc));
        let report = DocGenerator::render(&tag, &[&site]).unwrap();

        assert_eq!(count_occurrences(&report, CURRENT_TIME_MILLIS_DOC), 1);
    }

    #[test]
    fn doubled_boilerplate_in_the_doc_collapses_to_one() {
        let tag = TagDefinition::current_time_millis();
        let doc = format!(
            "When the event fired.\n\n{}\n\n{}",
            CURRENT_TIME_MILLIS_DOC, CURRENT_TIME_MILLIS_DOC
        );
        let site = field_site(Some(&doc));
        let report = DocGenerator::render(&tag, &[&site]).unwrap();

        assert_eq!(count_occurrences(&report, CURRENT_TIME_MILLIS_DOC), 1);
        assert!(report.contains("When the event fired."));
    }

    #[test]
    fn boilerplate_split_across_doc_lines_is_detected() {
        let tag = TagDefinition::current_time_millis();
        // Soft line breaks inside the paragraph still count as the sentence.
        let doc = CURRENT_TIME_MILLIS_DOC.replace("measured as the", "measured as the\n");
        let site = field_site(Some(&doc));
        let report = DocGenerator::render(&tag, &[&site]).unwrap();

        // The re-wrapped doc is kept as written, with no second copy appended.
        assert!(report.contains("measured as the\n"));
        assert_eq!(count_occurrences(&report, CURRENT_TIME_MILLIS_DOC), 0);
    }

    #[test]
    fn sites_group_under_file_headings() {
        let tag = TagDefinition::current_time_millis();
        let site_a = field_site(None);
        let mut site_b = field_site(None);
        site_b.file = PathBuf::from("src/timers.rs");
        site_b.entity = "Deadline".to_string();

        let report = DocGenerator::render(&tag, &[&site_a, &site_b]).unwrap();
        assert!(report.contains("## src/lib.rs"));
        assert!(report.contains("## src/timers.rs"));
        let lib_pos = report.find("## src/lib.rs").unwrap();
        let timers_pos = report.find("## src/timers.rs").unwrap();
        assert!(lib_pos < timers_pos);
    }

    #[test]
    fn return_sites_use_the_entity_as_heading() {
        let tag = TagDefinition::current_time_millis();
        let mut site = field_site(None);
        site.entity = "now_millis".to_string();
        site.kind = SiteKind::Return;

        let report = DocGenerator::render(&tag, &[&site]).unwrap();
        assert!(report.contains("### now_millis (return, u64)"));
    }

    #[test]
    fn missing_template_fails_the_doc_step() {
        let tag = TagDefinition {
            name: "duration_millis".to_string(),
            member_doc: None,
            param_doc: None,
            return_doc: None,
        };
        let site = field_site(None);
        let err = DocGenerator::render(&tag, &[&site]).unwrap_err();

        assert!(matches!(
            err,
            SemtagError::MissingDocumentationTemplate { .. }
        ));
    }

    #[test]
    fn paragraph_detection_normalizes_whitespace() {
        assert!(contains_paragraph(
            "Intro.\n\nValue is   a non-negative\nsentence.",
            "Value is a non-negative sentence."
        ));
        assert!(!contains_paragraph(
            "Value is a non-negative sentence with more words.",
            "Value is a non-negative sentence."
        ));
    }

    #[test]
    fn empty_site_list_renders_header_only() {
        let tag = TagDefinition::current_time_millis();
        let report = DocGenerator::render(&tag, &[]).unwrap();
        assert_eq!(report, "# Documentation: current_time_millis\n");
    }
}
