//! A marker outside a `#[spec]` impl has nothing to collect it.
#![allow(dead_code)]

#[simplespec::test]
fn standalone() {}

fn main() {}
