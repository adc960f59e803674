//! Marking a method more than once marks it once.

use simplespec::Spec;

pub struct Ledger;

#[simplespec::spec]
impl Ledger {
    #[test]
    #[simplespec::test]
    #[::simplespec::test]
    fn balances(&self) {}
}

fn main() {
    assert_eq!(Ledger::test_cases().len(), 1);
    assert!(Ledger::is_marked("balances"));
}
