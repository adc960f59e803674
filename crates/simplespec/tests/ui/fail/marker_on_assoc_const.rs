//! Associated consts are not methods.
#![allow(dead_code)]

pub struct Limits;

#[simplespec::spec]
impl Limits {
    #[simplespec::test]
    const MAX: usize = 3;
}

fn main() {}
