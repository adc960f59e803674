//! The `#[spec]` collector.
//!
//! Turns the marked methods of an inherent impl block into an implementation
//! of `simplespec::Spec`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, parse_quote, Attribute, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl,
    LitStr, Type,
};

use crate::marker::{strip_markers, ONLY_METHODS};
use crate::utils::{first_token_span, Errors};

const NOT_INHERENT: &str = "`#[simplespec::spec]` must be attached to an inherent `impl` block";
const SPEC_ARGUMENTS: &str = "`#[simplespec::spec]` takes no arguments";
const BY_VALUE_RECEIVER: &str = "test methods take `&self`, `&mut self`, or no receiver";
const EXTRA_PARAMETER: &str = "test methods take no parameters besides the receiver";
const ASYNC_METHOD: &str = "test methods cannot be `async`";
const GENERIC_METHOD: &str = "test methods cannot be generic";
const UNSAFE_METHOD: &str = "test methods cannot be `unsafe`";

/// Main entry point for the `#[spec]` attribute.
pub fn expand_spec(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let input = parse_macro_input!(item as ItemImpl);

    match expand_spec_impl(args, input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A marked method, ready to be listed in `test_cases()`.
struct MarkedMethod {
    ident: Ident,
    has_receiver: bool,
    /// `#[cfg]` attributes of the method, repeated on its entry so a method
    /// that is compiled out is not referenced.
    cfgs: Vec<Attribute>,
}

impl MarkedMethod {
    fn to_case(&self) -> TokenStream2 {
        let ident = &self.ident;
        let name = LitStr::new(&ident.unraw().to_string(), ident.span());
        let call = if self.has_receiver {
            quote! { |spec: &mut Self| ::simplespec::Outcome::into_result(Self::#ident(spec)) }
        } else {
            quote! { |_: &mut Self| ::simplespec::Outcome::into_result(Self::#ident()) }
        };
        let cfgs = &self.cfgs;
        quote! {
            #(#cfgs)*
            cases.push(::simplespec::TestCase::new(#name, #call));
        }
    }
}

fn expand_spec_impl(args: TokenStream2, mut input: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some(span) = first_token_span(args) {
        return Err(syn::Error::new(span, SPEC_ARGUMENTS));
    }
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(path, NOT_INHERENT));
    }

    let mut methods = Vec::new();
    let mut errors = Errors::default();

    for item in &mut input.items {
        match item {
            ImplItem::Fn(method) => match collect_method(method) {
                Ok(Some(marked)) => methods.push(marked),
                Ok(None) => {}
                Err(err) => errors.push(err),
            },
            ImplItem::Const(item) => {
                errors.extend(reject_marked(&mut item.attrs, item.ident.span()));
            }
            ImplItem::Type(item) => {
                errors.extend(reject_marked(&mut item.attrs, item.ident.span()));
            }
            ImplItem::Macro(item) => {
                let span = item.mac.path.span();
                errors.extend(reject_marked(&mut item.attrs, span));
            }
            _ => {}
        }
    }
    errors.finish()?;

    let self_ty = &input.self_ty;
    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: 'static));
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let cases = methods.iter().map(MarkedMethod::to_case);

    Ok(quote! {
        #input

        impl #impl_generics ::simplespec::Spec for #self_ty #where_clause {
            fn test_cases() -> ::std::vec::Vec<::simplespec::TestCase<Self>> {
                #[allow(unused_mut)]
                let mut cases = ::std::vec::Vec::new();
                #(#cases)*
                cases
            }
        }
    })
}

/// Strip markers from a method and check it can be called uniformly.
fn collect_method(method: &mut ImplItemFn) -> syn::Result<Option<MarkedMethod>> {
    if !strip_markers(&mut method.attrs)? {
        return Ok(None);
    }

    let sig = &method.sig;
    if let Some(token) = &sig.asyncness {
        return Err(syn::Error::new(token.span, ASYNC_METHOD));
    }
    if let Some(token) = &sig.unsafety {
        return Err(syn::Error::new(token.span, UNSAFE_METHOD));
    }
    if let Some(token) = &sig.generics.lt_token {
        return Err(syn::Error::new(token.span(), GENERIC_METHOD));
    }

    let mut has_receiver = false;
    for arg in &sig.inputs {
        match arg {
            FnArg::Receiver(receiver) => {
                if !matches!(*receiver.ty, Type::Reference(_)) {
                    return Err(syn::Error::new(receiver.self_token.span, BY_VALUE_RECEIVER));
                }
                has_receiver = true;
            }
            FnArg::Typed(param) => {
                return Err(syn::Error::new_spanned(&param.pat, EXTRA_PARAMETER));
            }
        }
    }

    let cfgs = method
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("cfg"))
        .cloned()
        .collect();

    Ok(Some(MarkedMethod {
        ident: sig.ident.clone(),
        has_receiver,
        cfgs,
    }))
}

/// Markers on associated consts, types, and macros are errors.
fn reject_marked(attrs: &mut Vec<syn::Attribute>, span: proc_macro2::Span) -> Option<syn::Error> {
    match strip_markers(attrs) {
        Ok(true) => Some(syn::Error::new(span, ONLY_METHODS)),
        Ok(false) => None,
        Err(err) => Some(err),
    }
}
