//! Test methods take nothing but the receiver.
#![allow(dead_code)]

pub struct Totals;

#[simplespec::spec]
impl Totals {
    #[simplespec::test]
    fn sums(&self, count: usize) {}
}

fn main() {}
