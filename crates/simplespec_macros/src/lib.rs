//! Procedural macros for simplespec.
//!
//! Rust has no runtime reflection over attributes, so the test marker is
//! turned into metadata at build time instead:
//!
//! ```text
//! #[simplespec::spec]
//! impl Stack {
//!     #[simplespec::test]
//!     fn starts_empty(&self) {
//!         assert!(self.items.is_empty());
//!     }
//!
//!     fn helper(&self) {}
//! }
//! ```
//!
//! `#[spec]` strips every marker from the impl block and generates an
//! implementation of `simplespec::Spec` that lists the marked methods, in
//! declaration order. `helper` is left alone and does not appear in the list.
//!
//! Users depend on the `simplespec` crate, which re-exports both attributes and
//! owns the types the generated code refers to.

mod marker;
mod spec;
mod utils;

use proc_macro::TokenStream;

/// Marks a method as a test case.
///
/// The marker carries no arguments and only has meaning inside an inherent
/// `impl` block annotated with [`macro@spec`]. Inside such a block the bare
/// form `#[test]` is accepted as well, since std's `#[test]` cannot be used on
/// associated functions anyway.
///
/// Placed anywhere else the marker is a compile error:
///
/// - on a free function, because nothing would collect it;
/// - on a type, const, static, or module, because only methods can be tests;
/// - with arguments, because the marker has no payload.
#[proc_macro_attribute]
pub fn test(args: TokenStream, item: TokenStream) -> TokenStream {
    marker::expand_standalone(args, item)
}

/// Collects the marked methods of an inherent `impl` block.
///
/// Generates `impl simplespec::Spec for SelfTy`, whose `test_cases()` returns
/// one entry per marked method. Marking a method more than once has the same
/// effect as marking it once.
///
/// Marked methods take `&self`, `&mut self`, or no receiver, take no other
/// parameters, are neither `async` nor generic, and return a type implementing
/// `simplespec::Outcome` (`()` or `Result<(), E>` with `E: Display`).
#[proc_macro_attribute]
pub fn spec(args: TokenStream, item: TokenStream) -> TokenStream {
    spec::expand_spec(args, item)
}
