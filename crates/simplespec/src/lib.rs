//! A lightweight behavior-driven test framework: the test marker and the
//! metadata it leaves behind.
//!
//! A spec is a type whose inherent `impl` block carries `#[spec]`. Inside it,
//! `#[test]` marks the methods that are test cases. The marker has no
//! arguments and no behavior; at build time it becomes an implementation of
//! [`Spec`] listing the marked methods, which tooling can query by name.
//!
//! ```
//! use simplespec::{Spec, SpecRegistry};
//!
//! #[derive(Default)]
//! struct StackSpec {
//!     items: Vec<u32>,
//! }
//!
//! #[simplespec::spec]
//! impl StackSpec {
//!     #[simplespec::test]
//!     fn starts_empty(&self) {
//!         assert!(self.items.is_empty());
//!     }
//!
//!     #[simplespec::test]
//!     fn pushes(&mut self) -> Result<(), String> {
//!         self.items.push(1);
//!         if self.items.len() == 1 {
//!             Ok(())
//!         } else {
//!             Err("push was lost".to_string())
//!         }
//!     }
//!
//!     fn depth(&self) -> usize {
//!         self.items.len()
//!     }
//! }
//!
//! assert!(StackSpec::is_marked("pushes"));
//! assert!(!StackSpec::is_marked("depth"));
//! assert_eq!(StackSpec::default().depth(), 0);
//!
//! let mut registry = SpecRegistry::new();
//! registry.register::<StackSpec>()?;
//! for test in registry.tests() {
//!     test.invoke()?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Where the marker may go
//!
//! Only on methods. Rustc rejects it on fields and parameters:
//!
//! ```compile_fail
//! struct Config {
//!     #[simplespec::test]
//!     retries: u8,
//! }
//! ```
//!
//! ```compile_fail
//! struct Parser;
//!
//! #[simplespec::spec]
//! impl Parser {
//!     fn parse(&self, #[simplespec::test] input: &str) {}
//! }
//! ```
//!
//! and the marker itself rejects types and free functions:
//!
//! ```compile_fail
//! #[simplespec::test]
//! struct NotAMethod;
//! ```
//!
//! ```compile_fail
//! #[simplespec::test]
//! fn standalone() {}
//! ```
//!
//! Running specs (ordering, isolation, reporting) belongs to a test runner and
//! is not provided here; [`SpecRegistry`] only makes marked methods
//! discoverable and callable.

// Lets the generated `::simplespec::` paths resolve inside this crate's own tests.
#[cfg(test)]
extern crate self as simplespec;

mod case;
mod error;
mod registry;

pub use case::{Outcome, Spec, TestBody, TestCase};
pub use error::{RegistryError, TestFailure};
pub use registry::{RegisteredSpec, SpecRegistry, TestEntry};
pub use simplespec_macros::{spec, test};
