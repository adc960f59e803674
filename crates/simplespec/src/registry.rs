//! Explicit registry of specs.
//!
//! Nothing is registered behind the user's back: each spec enters the registry
//! through a `register` call, and lookups only see what was registered.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use crate::case::Spec;
use crate::error::{RegistryError, TestFailure};

type ErasedBody = Box<dyn Fn() -> Result<(), TestFailure> + Send + Sync>;

/// A marked method with its spec type erased.
pub struct TestEntry {
    spec: &'static str,
    name: &'static str,
    body: ErasedBody,
}

impl TestEntry {
    /// Full type path of the spec that declares this test.
    pub fn spec_name(&self) -> &'static str {
        self.spec
    }

    /// Last path segment of the spec type, without generic arguments.
    pub fn short_spec_name(&self) -> &'static str {
        short_name(self.spec)
    }

    /// Name of the marked method.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `Spec::method`, using the short spec name.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.short_spec_name(), self.name)
    }

    /// Build a fresh spec instance and call the method on it once.
    ///
    /// Panics raised by the method propagate to the caller.
    pub fn invoke(&self) -> Result<(), TestFailure> {
        let _span = tracing::debug_span!("test", spec = self.spec, test = self.name).entered();
        let result = (self.body)();
        if let Err(failure) = &result {
            tracing::debug!(%failure, "test case reported failure");
        }
        result
    }
}

impl fmt::Debug for TestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestEntry")
            .field("spec", &self.spec)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A registered spec and its tests, in declaration order.
#[derive(Debug)]
pub struct RegisteredSpec {
    name: &'static str,
    type_id: TypeId,
    tests: Vec<TestEntry>,
}

impl RegisteredSpec {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }

    pub fn tests(&self) -> &[TestEntry] {
        &self.tests
    }

    /// Whether method `test` of this spec carries the marker.
    pub fn is_marked(&self, test: &str) -> bool {
        self.tests.iter().any(|entry| entry.name == test)
    }

    /// Matches either the full type path or the short name.
    fn answers_to(&self, spec: &str) -> bool {
        self.name == spec || self.short_name() == spec
    }
}

/// Ordered collection of registered specs.
#[derive(Debug, Default)]
pub struct SpecRegistry {
    specs: Vec<RegisteredSpec>,
}

impl SpecRegistry {
    pub fn new() -> Self {
        SpecRegistry::default()
    }

    /// Register `S`, creating instances with `S::default()`.
    pub fn register<S: Spec + Default>(&mut self) -> Result<&RegisteredSpec, RegistryError> {
        self.register_with(S::default)
    }

    /// Register `S`, creating a fresh instance with `factory` for every call
    /// to [`TestEntry::invoke`].
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateSpec`] if `S` is already registered.
    /// - [`RegistryError::NoTestCases`] if `S` has no marked methods.
    pub fn register_with<S, F>(&mut self, factory: F) -> Result<&RegisteredSpec, RegistryError>
    where
        S: Spec,
        F: Fn() -> S + Send + Sync + 'static,
    {
        let name = S::spec_name();
        let type_id = TypeId::of::<S>();

        if self.specs.iter().any(|spec| spec.type_id == type_id) {
            tracing::debug!(spec = name, "rejected duplicate spec registration");
            return Err(RegistryError::DuplicateSpec { spec: name });
        }

        let cases = S::test_cases();
        if cases.is_empty() {
            tracing::debug!(spec = name, "rejected spec without marked methods");
            return Err(RegistryError::NoTestCases { spec: name });
        }

        let factory = Arc::new(factory);
        let tests: Vec<TestEntry> = cases
            .into_iter()
            .map(|case| {
                let factory = Arc::clone(&factory);
                TestEntry {
                    spec: name,
                    name: case.name(),
                    body: Box::new(move || {
                        let mut spec = factory();
                        case.invoke(&mut spec)
                    }),
                }
            })
            .collect();

        tracing::debug!(spec = name, tests = tests.len(), "registered spec");

        let index = self.specs.len();
        self.specs.push(RegisteredSpec {
            name,
            type_id,
            tests,
        });
        Ok(&self.specs[index])
    }

    /// The registration of `S`, if any.
    pub fn get<S: Spec>(&self) -> Option<&RegisteredSpec> {
        let type_id = TypeId::of::<S>();
        self.specs.iter().find(|spec| spec.type_id == type_id)
    }

    /// Look up marked method `test` of `spec`.
    ///
    /// `spec` may be the full type path or the short name. When several
    /// registered specs share a short name the first registered wins, even if
    /// only a later one declares `test`; use the full path to reach the others.
    pub fn find(&self, spec: &str, test: &str) -> Option<&TestEntry> {
        self.specs
            .iter()
            .find(|registered| registered.answers_to(spec))
            .and_then(|registered| registered.tests.iter().find(|entry| entry.name == test))
    }

    /// Whether `spec` is registered and its method `test` carries the marker.
    pub fn is_marked(&self, spec: &str, test: &str) -> bool {
        self.find(spec, test).is_some()
    }

    /// Registered specs, in registration order.
    pub fn specs(&self) -> &[RegisteredSpec] {
        &self.specs
    }

    /// Every test, in registration order and then declaration order.
    pub fn tests(&self) -> impl Iterator<Item = &TestEntry> + '_ {
        self.specs.iter().flat_map(|spec| spec.tests.iter())
    }

    /// Tests whose qualified name (`Spec::method`) contains `pattern`.
    pub fn matching<'a>(&'a self, pattern: &'a str) -> impl Iterator<Item = &'a TestEntry> + 'a {
        self.tests()
            .filter(move |entry| entry.qualified_name().contains(pattern))
    }

    /// Number of registered tests across all specs.
    pub fn len(&self) -> usize {
        self.specs.iter().map(|spec| spec.tests.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn spec_count(&self) -> usize {
        self.specs.len()
    }
}

/// Last path segment of a type path, without generic arguments.
///
/// `app::specs::Wrapper<alloc::string::String>` becomes `Wrapper`.
fn short_name(path: &str) -> &str {
    let base = path.split('<').next().unwrap_or(path);
    base.rsplit("::").next().unwrap_or(base)
}
