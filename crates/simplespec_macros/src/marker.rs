//! The test marker attribute.
//!
//! An enclosing `#[spec]` strips markers before they expand, so this expansion
//! only runs for markers the collector never saw. That is always a misuse.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::spanned::Spanned;
use syn::{Attribute, Item, Meta};

use crate::utils::{first_token_span, item_name_span, Errors};

pub const NO_ARGUMENTS: &str = "the test marker takes no arguments";
pub const ONLY_METHODS: &str = "`#[simplespec::test]` can only be attached to methods";
pub const OUTSIDE_SPEC: &str = "`#[simplespec::test]` methods must be inside an `impl` block \
                                annotated with `#[simplespec::spec]`";

/// Entry point for a marker that expands on its own.
pub fn expand_standalone(args: TokenStream, item: TokenStream) -> TokenStream {
    standalone_error(args.into(), item.into())
        .to_compile_error()
        .into()
}

fn standalone_error(args: TokenStream2, item: TokenStream2) -> syn::Error {
    if let Some(span) = first_token_span(args) {
        return syn::Error::new(span, NO_ARGUMENTS);
    }

    match syn::parse2::<Item>(item) {
        Ok(Item::Fn(func)) => syn::Error::new(func.sig.ident.span(), OUTSIDE_SPEC),
        Ok(item) => syn::Error::new(item_name_span(&item), ONLY_METHODS),
        Err(err) => err,
    }
}

/// Whether `attr` is the test marker.
///
/// Accepts `test`, `simplespec::test`, and `simplespec_macros::test`, with or
/// without a leading `::`.
pub fn is_marker(attr: &Attribute) -> bool {
    let mut segments = attr.path().segments.iter().map(|s| &s.ident);
    match (segments.next(), segments.next(), segments.next()) {
        (Some(name), None, None) => name == "test",
        (Some(krate), Some(name), None) => {
            name == "test" && (krate == "simplespec" || krate == "simplespec_macros")
        }
        _ => false,
    }
}

/// Reject a marker written with a payload, e.g. `#[test(timeout = 5)]`.
pub fn check_no_payload(attr: &Attribute) -> syn::Result<()> {
    match &attr.meta {
        Meta::Path(_) => Ok(()),
        Meta::List(list) => Err(syn::Error::new(
            list.delimiter.span().join(),
            NO_ARGUMENTS,
        )),
        Meta::NameValue(pair) => Err(syn::Error::new(pair.eq_token.span(), NO_ARGUMENTS)),
    }
}

/// Remove every marker from `attrs`.
///
/// Returns whether at least one marker was present. Repeated markers collapse
/// into one.
pub fn strip_markers(attrs: &mut Vec<Attribute>) -> syn::Result<bool> {
    let mut found = false;
    let mut errors = Errors::default();

    attrs.retain(|attr| {
        if !is_marker(attr) {
            return true;
        }
        found = true;
        if let Err(err) = check_no_payload(attr) {
            errors.push(err);
        }
        false
    });

    errors.finish()?;
    Ok(found)
}
