use num_traits::{Bounded, CheckedMul};

/// Square of the second element, or zero when there isn't one.
///
/// `slice::get` checks the bounds for us and hands back an `Option`, so a
/// short slice never turns into a panic. A square too large for `T`
/// saturates at `T::max_value()` instead of overflowing.
///
/// ```
/// use errors_as_values::indexing::square_of_second_element;
///
/// assert_eq!(square_of_second_element(&[1, 2]), 4);
/// assert_eq!(square_of_second_element(&[7]), 0);
/// assert_eq!(square_of_second_element::<u8>(&[]), 0);
/// assert_eq!(square_of_second_element(&[0i32, 100_000]), i32::MAX);
/// ```
pub fn square_of_second_element<T>(values: &[T]) -> T
where
    T: Copy + Default + Bounded + CheckedMul,
{
    values
        .get(1)
        .map(|value| value.checked_mul(value).unwrap_or_else(T::max_value))
        .unwrap_or_default()
}
