use std::iter::Sum;

/// Returns true if `a` and `b` have the same length and equal elements in the same order.
pub fn is_eq<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Returns the sum of all elements in `items`, or zero if it is empty.
pub fn sum<'a, T: Sum<&'a T> + 'a>(items: &'a [T]) -> T {
    items.iter().sum()
}
