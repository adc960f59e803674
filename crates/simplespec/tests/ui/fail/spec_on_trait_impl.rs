//! Only inherent impl blocks can be specs.
#![allow(dead_code)]

pub struct Queue;

pub trait Checks {
    fn drains(&self);
}

#[simplespec::spec]
impl Checks for Queue {
    #[simplespec::test]
    fn drains(&self) {}
}

fn main() {}
