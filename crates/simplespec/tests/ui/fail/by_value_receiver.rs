//! Test methods borrow their spec.
#![allow(dead_code)]

pub struct Token;

#[simplespec::spec]
impl Token {
    #[simplespec::test]
    fn consumes(self) {}
}

fn main() {}
