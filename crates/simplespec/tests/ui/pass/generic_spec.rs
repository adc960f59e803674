//! Specs over generic types keep their bounds.

use simplespec::Spec;

pub struct Sorted<T> {
    items: Vec<T>,
}

#[simplespec::spec]
impl<T> Sorted<T>
where
    T: Ord + 'static,
{
    #[simplespec::test]
    fn is_ordered(&self) -> Result<(), &'static str> {
        if self.items.windows(2).all(|pair| pair[0] <= pair[1]) {
            Ok(())
        } else {
            Err("items out of order")
        }
    }
}

fn main() {
    let mut sorted = Sorted { items: vec![1, 2, 3] };
    let case = Sorted::<i32>::marked("is_ordered").unwrap();
    assert!(case.invoke(&mut sorted).is_ok());

    sorted.items.reverse();
    assert!(case.invoke(&mut sorted).is_err());
}
