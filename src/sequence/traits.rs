/// ### -> `Length Trait`.
///
/// Synchronous size queries shared by [`Sequence<T, C>`](crate::Sequence),
/// [`SortableSequence<T>`](crate::SortableSequence) and every adapter.
///
/// ### -> `Methods`
/// - `length() -> usize`: number of stored elements.
/// - `length_eq(other) -> bool`: whether both hold the same number of elements.
/// - `length_cmp(other) -> Option<Ordering>`: compares element counts.
///
/// ### -> `Usage`
///
/// ```
/// use seqcore::prelude::*;
///
/// let left = Sequence::<i32>::from_data([1, 2, 3]);
/// let right = Sequence::<i32>::from_data([4, 5]);
///
/// assert_eq!(left.length(), 3);
/// assert!(!left.length_eq(&right));
/// assert_eq!(left.length_cmp(&right), Some(std::cmp::Ordering::Greater));
/// ```
pub trait Length {
    fn length(&self) -> usize;

    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    fn length_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.length().partial_cmp(&other.length())
    }
}
