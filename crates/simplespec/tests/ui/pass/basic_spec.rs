//! Marked methods with every supported receiver are collected.

use simplespec::Spec;

#[derive(Default)]
pub struct Counter {
    count: u32,
}

#[simplespec::spec]
impl Counter {
    #[simplespec::test]
    fn starts_at_zero(&self) {
        assert_eq!(self.count, 0);
    }

    #[simplespec::test]
    fn increments(&mut self) {
        self.count += 1;
    }

    #[simplespec::test]
    fn needs_no_instance() -> Result<(), String> {
        Ok(())
    }
}

fn main() {
    let names: Vec<&str> = Counter::test_cases().iter().map(|case| case.name()).collect();
    assert_eq!(names, ["starts_at_zero", "increments", "needs_no_instance"]);

    let mut counter = Counter::default();
    for case in Counter::test_cases() {
        assert!(case.invoke(&mut counter).is_ok());
    }
    assert_eq!(counter.count, 1);
}
