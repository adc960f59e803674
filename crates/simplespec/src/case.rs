//! Marked methods and the trait that exposes them.

use std::fmt;

use crate::error::TestFailure;

/// A type whose inherent impl carries `#[simplespec::spec]`.
///
/// Implemented by the `#[spec]` attribute; there is rarely a reason to write
/// an implementation by hand.
pub trait Spec: Sized + 'static {
    /// Every marked method, in declaration order.
    fn test_cases() -> Vec<TestCase<Self>>;

    /// Path of the spec type, as reported by [`std::any::type_name`].
    fn spec_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The test case for method `name`, if that method carries the marker.
    ///
    /// Returns `None` both for unmarked methods and for names that are not
    /// methods at all.
    fn marked(name: &str) -> Option<TestCase<Self>> {
        Self::test_cases()
            .into_iter()
            .find(|case| case.name() == name)
    }

    /// Whether method `name` carries the marker.
    fn is_marked(name: &str) -> bool {
        Self::marked(name).is_some()
    }
}

/// Uniform signature every marked method is adapted to.
pub type TestBody<S> = fn(&mut S) -> Result<(), TestFailure>;

/// One marked method of spec `S`.
///
/// Holds the method name and a way to call it; the marker itself carries no
/// further data.
pub struct TestCase<S> {
    name: &'static str,
    body: TestBody<S>,
}

impl<S> TestCase<S> {
    pub const fn new(name: &'static str, body: TestBody<S>) -> Self {
        TestCase { name, body }
    }

    /// Name of the marked method.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Call the method once on `spec`.
    pub fn invoke(&self, spec: &mut S) -> Result<(), TestFailure> {
        (self.body)(spec)
    }
}

impl<S> Clone for TestCase<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for TestCase<S> {}

impl<S> fmt::Debug for TestCase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Return types a marked method may have.
pub trait Outcome {
    fn into_result(self) -> Result<(), TestFailure>;
}

impl Outcome for () {
    fn into_result(self) -> Result<(), TestFailure> {
        Ok(())
    }
}

impl<E: fmt::Display> Outcome for Result<(), E> {
    fn into_result(self) -> Result<(), TestFailure> {
        self.map_err(|err| TestFailure::new(err.to_string()))
    }
}
