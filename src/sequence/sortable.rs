use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use super::Sequence;
use crate::capability::{Capability, Ordered};
use crate::sequence::traits::Length;

/// Turns a "must sort before" predicate into a total ordering callback.
fn ordering_of<T, F>(mut before: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool
{
    move |left, right| {
        if before(left, right) {
            Ordering::Less
        } else if before(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// ### -> `SortableSequence<T>` - A [`Sequence`] whose elements are totally ordered.
///
/// Adds sorting and sortedness checks on top of `Sequence<T, Ordered>` and
/// requires `T: Ord` at compile time. It stores nothing beyond the wrapped
/// sequence and dereferences to it, so every base operation (access, insertion,
/// removal, searching, ...) is available unchanged.
///
/// ### -> `Usage`
///
/// ```
/// use seqcore::prelude::*;
///
/// let mut sequence = SortableSequence::from_data([3, 2, 1]);
/// sequence.sort();
///
/// assert_eq!(sequence.data(), &[1, 2, 3]);
/// assert!(sequence.is_sorted());
/// assert_eq!(sequence.ordered_search(&2), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct SortableSequence<T: Ord> {
    inner: Sequence<T, Ordered>,
}

impl <T: Ord> SortableSequence<T> {
    #[must_use = "New sequences must serve a purpose!"]
    pub fn new() -> Self {
        Self { inner: Sequence::new() }
    }

    #[must_use = "New sequences must serve a purpose!"]
    pub fn from_data<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>
    {
        Self { inner: Sequence::from_data(values) }
    }

    /// Gives back the wrapped sequence.
    pub fn into_inner(self) -> Sequence<T, Ordered> {
        self.inner
    }

    /// Sorts ascending. Equal elements may be reordered.
    pub fn sort(&mut self) {
        self.inner.data.sort_unstable();
    }

    /// Sorts ascending, keeping equal elements in their relative order.
    pub fn stable_sort(&mut self) {
        self.inner.data.sort();
    }

    /// Sorts with `before`, which returns true when its left argument must come
    /// first. Equal elements may be reordered.
    pub fn sort_func<F>(&mut self, before: F)
    where
        F: FnMut(&T, &T) -> bool
    {
        self.inner.data.sort_unstable_by(ordering_of(before));
    }

    /// Stable variant of [`SortableSequence::sort_func`].
    pub fn stable_sort_func<F>(&mut self, before: F)
    where
        F: FnMut(&T, &T) -> bool
    {
        self.inner.data.sort_by(ordering_of(before));
    }

    /// Whether no element is less than its predecessor.
    pub fn is_sorted(&self) -> bool {
        self.is_sorted_func(|left, right| left < right)
    }

    /// Whether no element must come before its predecessor according to `before`.
    ///
    /// Empty and single-element sequences are sorted.
    pub fn is_sorted_func<F>(&self, mut before: F) -> bool
    where
        F: FnMut(&T, &T) -> bool
    {
        self.inner.data.windows(2).all(|pair| !before(&pair[1], &pair[0]))
    }
}

impl <T: Ord> Default for SortableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl <T: Ord> Deref for SortableSequence<T> {
    type Target = Sequence<T, Ordered>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl <T: Ord> DerefMut for SortableSequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl <T: Ord, C: Capability<T>> From<Sequence<T, C>> for SortableSequence<T> {
    fn from(sequence: Sequence<T, C>) -> Self {
        Self { inner: sequence.into_capability() }
    }
}

impl <T: Ord> From<Vec<T>> for SortableSequence<T> {
    fn from(data: Vec<T>) -> Self {
        Self { inner: Sequence::from(data) }
    }
}

impl <T: Ord> FromIterator<T> for SortableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_data(iter)
    }
}

impl <T: Ord> Length for SortableSequence<T> {
    fn length(&self) -> usize {
        self.inner.size()
    }
}
