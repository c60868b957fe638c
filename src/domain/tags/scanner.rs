//! Site extraction from Rust source
//!
//! The scanner reads marker attributes straight out of the source text, so
//! it sees them even though macro expansion erases them from the build. It
//! recognizes `#[semtag(tag, ...)]` on struct fields, function parameters,
//! and methods (tagging the return slot), and `#[tagged(tag, ...)]` on
//! functions (also tagging the return slot).

use crate::domain::site::{SiteKind, TagSite};
use crate::error::{Result, SemtagError};
use quote::ToTokens;
use std::path::Path;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, Token};

pub struct SiteScanner;

impl SiteScanner {
    /// Extract every tagged attachment site from one source file
    ///
    /// Sites come back in declaration order. `file` is recorded on each
    /// site as-is; pass a path relative to the project root.
    pub fn extract_from_source(source: &str, file: &Path) -> Result<Vec<TagSite>> {
        let parsed = syn::parse_file(source).map_err(|err| SemtagError::Parse {
            file: file.to_path_buf(),
            message: err.to_string(),
        })?;

        let mut sites = Vec::new();
        let mut modules = Vec::new();
        walk_items(&parsed.items, &mut modules, file, &mut sites);
        Ok(sites)
    }
}

fn walk_items(items: &[syn::Item], modules: &mut Vec<String>, file: &Path, out: &mut Vec<TagSite>) {
    for item in items {
        match item {
            syn::Item::Mod(module) => {
                if let Some((_, inner)) = &module.content {
                    modules.push(module.ident.to_string());
                    walk_items(inner, modules, file, out);
                    modules.pop();
                }
            }
            syn::Item::Struct(structure) => {
                let entity = qualify(modules, &structure.ident.to_string());
                collect_field_sites(&structure.fields, &entity, file, out);
            }
            syn::Item::Fn(func) => {
                let entity = qualify(modules, &func.sig.ident.to_string());
                collect_fn_sites(&func.attrs, &func.sig, entity, file, out);
            }
            syn::Item::Impl(block) => {
                let self_ty = render_type(&block.self_ty);
                for entry in &block.items {
                    if let syn::ImplItem::Fn(method) = entry {
                        let entity =
                            qualify(modules, &format!("{}::{}", self_ty, method.sig.ident));
                        collect_fn_sites(&method.attrs, &method.sig, entity, file, out);
                    }
                }
            }
            syn::Item::Trait(definition) => {
                for entry in &definition.items {
                    if let syn::TraitItem::Fn(method) = entry {
                        let entity = qualify(
                            modules,
                            &format!("{}::{}", definition.ident, method.sig.ident),
                        );
                        collect_fn_sites(&method.attrs, &method.sig, entity, file, out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Record sites for the marked named fields of a struct
fn collect_field_sites(fields: &syn::Fields, entity: &str, file: &Path, out: &mut Vec<TagSite>) {
    let syn::Fields::Named(named) = fields else {
        // Only named record fields are attachment sites.
        return;
    };

    for field in &named.named {
        let tags = marker_tags(&field.attrs);
        if tags.is_empty() {
            continue;
        }
        let Some(name) = &field.ident else {
            continue;
        };

        out.push(TagSite {
            entity: entity.to_string(),
            kind: SiteKind::Field {
                name: name.to_string(),
            },
            declared_type: render_type(&field.ty),
            file: file.to_path_buf(),
            line: name.span().start().line,
            tags,
            doc: doc_text(&field.attrs),
        });
    }
}

/// Record parameter and return-slot sites for one function signature
fn collect_fn_sites(
    attrs: &[Attribute],
    sig: &syn::Signature,
    entity: String,
    file: &Path,
    out: &mut Vec<TagSite>,
) {
    for input in &sig.inputs {
        let syn::FnArg::Typed(param) = input else {
            continue;
        };
        let tags = marker_tags(&param.attrs);
        if tags.is_empty() {
            continue;
        }

        out.push(TagSite {
            entity: entity.clone(),
            kind: SiteKind::Param {
                name: param_name(&param.pat),
            },
            declared_type: render_type(&param.ty),
            file: file.to_path_buf(),
            line: param.pat.span().start().line,
            tags,
            doc: None,
        });
    }

    // `#[tagged(x)]` args and `#[semtag(x)]` on the fn both tag the return.
    let mut return_tags = tagged_args(attrs);
    return_tags.extend(marker_tags(attrs));
    if return_tags.is_empty() {
        return;
    }

    let declared_type = match &sig.output {
        syn::ReturnType::Default => "()".to_string(),
        syn::ReturnType::Type(_, ty) => render_type(ty),
    };

    out.push(TagSite {
        entity,
        kind: SiteKind::Return,
        declared_type,
        file: file.to_path_buf(),
        line: sig.ident.span().start().line,
        tags: return_tags,
        doc: doc_text(attrs),
    });
}

/// Tags named by `#[semtag(...)]` attributes, in source order
///
/// Arguments that do not parse as identifier lists yield no tags here; the
/// `tagged` macro rejects them at compile time in code that builds.
fn marker_tags(attrs: &[Attribute]) -> Vec<String> {
    collect_attr_tags(attrs, "semtag")
}

/// Tags named as arguments of a `#[tagged(...)]` attribute
fn tagged_args(attrs: &[Attribute]) -> Vec<String> {
    collect_attr_tags(attrs, "tagged")
}

fn collect_attr_tags(attrs: &[Attribute], attr_name: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for attr in attrs {
        let is_match = attr
            .path()
            .segments
            .last()
            .is_some_and(|segment| segment.ident == attr_name);
        if !is_match {
            continue;
        }
        if let syn::Meta::List(_) = &attr.meta {
            if let Ok(names) =
                attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)
            {
                tags.extend(names.into_iter().map(|ident| ident.to_string()));
            }
        }
    }
    tags
}

/// Join `///` lines into one doc string, stripping the leading space rustdoc adds
fn doc_text(attrs: &[Attribute]) -> Option<String> {
    let mut lines = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(pair) = &attr.meta {
            if let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(text),
                ..
            }) = &pair.value
            {
                let value = text.value();
                lines.push(value.strip_prefix(' ').unwrap_or(&value).to_string());
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn param_name(pat: &syn::Pat) -> String {
    match pat {
        syn::Pat::Ident(ident) => ident.ident.to_string(),
        other => normalize_tokens(&other.to_token_stream().to_string()),
    }
}

fn qualify(modules: &[String], name: &str) -> String {
    if modules.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", modules.join("::"), name)
    }
}

fn render_type(ty: &syn::Type) -> String {
    normalize_tokens(&ty.to_token_stream().to_string())
}

/// Collapse the spacing `TokenStream::to_string` inserts around punctuation
fn normalize_tokens(raw: &str) -> String {
    raw.replace(" :: ", "::")
        .replace("< ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
        .replace("( )", "()")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::site::SiteKind;
    use std::path::PathBuf;

    fn scan(source: &str) -> Vec<TagSite> {
        SiteScanner::extract_from_source(source, Path::new("src/lib.rs")).unwrap()
    }

    #[test]
    fn extracts_field_site() {
        let sites = scan(
            r#"
            pub struct Event {
                #[semtag(current_time_millis)]
                pub created_at_millis: u64,
                pub name: String,
            }
            "#,
        );

        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].entity, "Event");
        assert_eq!(
            sites[0].kind,
            SiteKind::Field {
                name: "created_at_millis".to_string()
            }
        );
        assert_eq!(sites[0].declared_type, "u64");
        assert_eq!(sites[0].tags, vec!["current_time_millis"]);
        assert_eq!(sites[0].file, PathBuf::from("src/lib.rs"));
    }

    #[test]
    fn untagged_declarations_yield_no_sites() {
        let sites = scan(
            r#"
            pub struct Plain {
                pub value: u64,
            }
            pub fn id(value: u64) -> u64 { value }
            "#,
        );
        assert!(sites.is_empty());
    }

    #[test]
    fn extracts_param_and_return_sites() {
        let sites = scan(
            r#"
            #[tagged(current_time_millis)]
            pub fn schedule(#[semtag(current_time_millis)] fire_at_millis: i64, repeat: bool) -> u64 {
                0
            }
            "#,
        );

        assert_eq!(sites.len(), 2);
        assert_eq!(
            sites[0].kind,
            SiteKind::Param {
                name: "fire_at_millis".to_string()
            }
        );
        assert_eq!(sites[0].declared_type, "i64");
        assert_eq!(sites[1].kind, SiteKind::Return);
        assert_eq!(sites[1].declared_type, "u64");
        assert_eq!(sites[1].entity, "schedule");
    }

    #[test]
    fn fn_without_return_type_records_unit() {
        let sites = scan(
            r#"
            #[tagged(current_time_millis)]
            pub fn fire() {}
            "#,
        );
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].declared_type, "()");
    }

    #[test]
    fn extracts_method_return_site_from_impl() {
        let sites = scan(
            r#"
            impl Event {
                #[semtag(current_time_millis)]
                pub fn created_at_millis(&self) -> u64 {
                    self.created_at_millis
                }
            }
            "#,
        );

        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].entity, "Event::created_at_millis");
        assert_eq!(sites[0].kind, SiteKind::Return);
    }

    #[test]
    fn extracts_trait_method_sites() {
        let sites = scan(
            r#"
            pub trait Clock {
                #[semtag(current_time_millis)]
                fn now_millis(&self) -> u64;
            }
            "#,
        );

        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].entity, "Clock::now_millis");
        assert_eq!(sites[0].kind, SiteKind::Return);
    }

    #[test]
    fn nested_modules_qualify_entities() {
        let sites = scan(
            r#"
            mod timers {
                pub struct Deadline {
                    #[semtag(current_time_millis)]
                    pub at_millis: u64,
                }
            }
            "#,
        );

        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].entity, "timers::Deadline");
    }

    #[test]
    fn duplicate_markers_are_preserved_in_order() {
        let sites = scan(
            r#"
            pub struct Event {
                #[semtag(current_time_millis)]
                #[semtag(current_time_millis)]
                pub created_at_millis: u64,
            }
            "#,
        );

        assert_eq!(
            sites[0].tags,
            vec!["current_time_millis", "current_time_millis"]
        );
    }

    #[test]
    fn multiple_tags_in_one_marker() {
        let sites = scan(
            r#"
            pub struct Event {
                #[semtag(current_time_millis, audit_millis)]
                pub created_at_millis: u64,
            }
            "#,
        );

        assert_eq!(sites[0].tags, vec!["current_time_millis", "audit_millis"]);
    }

    #[test]
    fn doc_comment_is_captured() {
        let sites = scan(
            r#"
            pub struct Event {
                /// When the event fired.
                /// Stored at millisecond resolution.
                #[semtag(current_time_millis)]
                pub created_at_millis: u64,
            }
            "#,
        );

        assert_eq!(
            sites[0].doc.as_deref(),
            Some("When the event fired.\nStored at millisecond resolution.")
        );
    }

    #[test]
    fn line_numbers_are_one_based_source_lines() {
        let source = "pub struct E {\n    #[semtag(current_time_millis)]\n    pub t: u64,\n}\n";
        let sites = scan(source);
        assert_eq!(sites[0].line, 3);
    }

    #[test]
    fn tuple_struct_fields_are_not_sites() {
        let sites = scan(
            r#"
            pub struct Wrapper(#[semtag(current_time_millis)] pub u64);
            "#,
        );
        assert!(sites.is_empty());
    }

    #[test]
    fn generic_types_render_without_token_spacing() {
        let sites = scan(
            r#"
            pub struct Event {
                #[semtag(current_time_millis)]
                pub at_millis: Option<u64>,
            }
            "#,
        );
        assert_eq!(sites[0].declared_type, "Option<u64>");
    }

    #[test]
    fn invalid_source_is_a_parse_error() {
        let result = SiteScanner::extract_from_source("pub struct {", Path::new("src/bad.rs"));
        assert!(matches!(result, Err(SemtagError::Parse { .. })));
    }
}
