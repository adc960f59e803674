//! The marker only attaches to methods.
#![allow(dead_code)]

#[simplespec::test]
pub struct NotAMethod;

fn main() {}
