//! A marked method compiled out by `#[cfg]` is left out of the spec.

use simplespec::Spec;

pub struct Gated;

#[simplespec::spec]
impl Gated {
    #[simplespec::test]
    fn always(&self) {}

    #[cfg(any())]
    #[simplespec::test]
    fn never_compiled(&self) {}
}

fn main() {
    let names: Vec<&str> = Gated::test_cases().iter().map(|case| case.name()).collect();
    assert_eq!(names, ["always"]);
    assert!(!Gated::is_marked("never_compiled"));
}
