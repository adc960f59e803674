//! Error types.

use thiserror::Error;

/// A marked method reported failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TestFailure {
    message: String,
}

impl TestFailure {
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        TestFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Registration into a [`SpecRegistry`](crate::SpecRegistry) failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same spec type was registered twice.
    #[error("spec `{spec}` is already registered")]
    DuplicateSpec { spec: &'static str },
    /// The spec has no marked methods.
    #[error("spec `{spec}` has no methods marked with `#[simplespec::test]`")]
    NoTestCases { spec: &'static str },
}
