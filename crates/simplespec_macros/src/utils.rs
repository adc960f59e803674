//! Span helpers shared by the marker and the collector.

use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::spanned::Spanned;
use syn::Item;

/// Span of the first token in `tokens`, if any.
pub fn first_token_span(tokens: TokenStream2) -> Option<Span> {
    tokens.into_iter().next().map(|tree| tree.span())
}

/// Span of the name an item declares, falling back to the whole item.
///
/// Diagnostics point at the name rather than the full item so the message
/// stays on one line.
pub fn item_name_span(item: &Item) -> Span {
    match item {
        Item::Const(item) => item.ident.span(),
        Item::Enum(item) => item.ident.span(),
        Item::ExternCrate(item) => item.ident.span(),
        Item::Fn(item) => item.sig.ident.span(),
        Item::Mod(item) => item.ident.span(),
        Item::Static(item) => item.ident.span(),
        Item::Struct(item) => item.ident.span(),
        Item::Trait(item) => item.ident.span(),
        Item::TraitAlias(item) => item.ident.span(),
        Item::Type(item) => item.ident.span(),
        Item::Union(item) => item.ident.span(),
        Item::Macro(item) => item
            .ident
            .as_ref()
            .map_or_else(|| item.mac.path.span(), proc_macro2::Ident::span),
        other => other.span(),
    }
}

/// Accumulates errors so one expansion reports every problem in the block.
#[derive(Default)]
pub struct Errors(Option<syn::Error>);

impl Errors {
    pub fn push(&mut self, err: syn::Error) {
        match &mut self.0 {
            Some(existing) => existing.combine(err),
            None => self.0 = Some(err),
        }
    }

    pub fn finish(self) -> syn::Result<()> {
        self.0.map_or(Ok(()), Err)
    }
}

impl Extend<syn::Error> for Errors {
    fn extend<I: IntoIterator<Item = syn::Error>>(&mut self, iter: I) {
        for err in iter {
            self.push(err);
        }
    }
}
