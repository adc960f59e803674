//! The collector takes no arguments either.
#![allow(dead_code)]

pub struct Stack;

#[simplespec::spec(parallel)]
impl Stack {
    #[simplespec::test]
    fn pushes(&self) {}
}

fn main() {}
