//! Marker attributes for semtag semantic tags.
//!
//! `#[tagged]` wraps a function, struct, or impl block and strips the inert
//! `#[semtag(...)]` markers it contains, so tagged code compiles to exactly
//! the tokens it would without the markers. The markers themselves are read
//! back out of the source text by the `semtag` scanner; expansion never
//! records them anywhere.
//!
//! # Example
//!
//! ```
//! use semtag_macros::tagged;
//!
//! #[tagged]
//! pub struct Event {
//!     #[semtag(current_time_millis)]
//!     pub created_at_millis: u64,
//!     pub name: String,
//! }
//!
//! #[tagged(current_time_millis)]
//! pub fn now_millis(#[semtag(current_time_millis)] base_millis: u64) -> u64 {
//!     base_millis
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, Item, Token};

/// Attach semantic tags to a declaration and erase the markers.
///
/// Arguments name tags attached to the function's return slot; they are
/// only meaningful on a `fn`. On a `struct` or `impl` the attribute takes
/// no arguments and merely enables `#[semtag(...)]` markers on fields,
/// parameters, and methods inside it.
#[proc_macro_attribute]
pub fn tagged(args: TokenStream, item: TokenStream) -> TokenStream {
    match expand(args.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let return_tags = parse_tag_names(args)?;
    let mut item: Item = syn::parse2(item)?;

    match &mut item {
        Item::Fn(func) => {
            strip_param_markers(&mut func.sig)?;
        }
        Item::Struct(structure) => {
            deny_return_tags(&return_tags, "a struct has no return slot")?;
            for field in structure.fields.iter_mut() {
                strip_markers(&mut field.attrs)?;
            }
        }
        Item::Impl(block) => {
            deny_return_tags(&return_tags, "an impl block has no return slot")?;
            for entry in block.items.iter_mut() {
                if let syn::ImplItem::Fn(method) = entry {
                    // On a method the marker tags the return slot.
                    strip_markers(&mut method.attrs)?;
                    strip_param_markers(&mut method.sig)?;
                }
            }
        }
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[tagged] applies to a fn, struct, or impl block",
            ));
        }
    }

    Ok(quote!(#item))
}

/// Parse attribute arguments as a comma-separated list of tag names.
fn parse_tag_names(args: TokenStream2) -> syn::Result<Vec<Ident>> {
    let names = Punctuated::<Ident, Token![,]>::parse_terminated.parse2(args)?;
    Ok(names.into_iter().collect())
}

fn deny_return_tags(tags: &[Ident], reason: &str) -> syn::Result<()> {
    match tags.first() {
        Some(first) => Err(syn::Error::new(first.span(), reason)),
        None => Ok(()),
    }
}

/// Remove `#[semtag(...)]` markers from the parameters of a signature.
fn strip_param_markers(sig: &mut syn::Signature) -> syn::Result<()> {
    for input in sig.inputs.iter_mut() {
        if let syn::FnArg::Typed(param) = input {
            strip_markers(&mut param.attrs)?;
        }
    }
    Ok(())
}

/// Validate and remove every `#[semtag(...)]` attribute in the list.
fn strip_markers(attrs: &mut Vec<Attribute>) -> syn::Result<()> {
    for attr in attrs.iter() {
        if is_marker(attr) {
            let names = attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
            if names.is_empty() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "#[semtag(...)] needs at least one tag name",
                ));
            }
        }
    }
    attrs.retain(|attr| !is_marker(attr));
    Ok(())
}

fn is_marker(attr: &Attribute) -> bool {
    attr.path().is_ident("semtag")
}
