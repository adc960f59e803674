//! Generic specs need no `'static` bound on their parameters.

use simplespec::Spec;

pub struct Holder<T> {
    items: Vec<T>,
}

#[simplespec::spec]
impl<T> Holder<T> {
    #[simplespec::test]
    fn holds_something(&self) -> Result<(), &'static str> {
        if self.items.is_empty() {
            Err("holder is empty")
        } else {
            Ok(())
        }
    }
}

fn main() {
    let mut holder = Holder { items: vec!["one"] };
    let case = Holder::<&'static str>::marked("holds_something").unwrap();
    assert!(case.invoke(&mut holder).is_ok());

    holder.items.clear();
    assert!(case.invoke(&mut holder).is_err());
}
