//! The marker carries no payload.
#![allow(dead_code)]

pub struct Stack;

#[simplespec::spec]
impl Stack {
    #[simplespec::test(timeout = 10)]
    fn pushes(&self) {}
}

fn main() {}
