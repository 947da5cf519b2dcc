use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{ControlFlow, Index, IndexMut};

use crate::capability::{Capability, CapabilityKind, Opaque};
use crate::error::{Error, Result};

pub mod prelude;
pub mod search;
pub mod sortable;
pub mod traits;

/// Maps a signed position onto `[0, limit)`.
#[inline(always)]
fn position(index: isize, limit: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&position| position < limit)
}

/// ### -> `Sequence<T, C>` - A contiguous, order-preserving, growable container.
///
/// `Sequence<T, C>` owns every element it stores in a single contiguous backing
/// store. It offers positional access, insertion and removal at arbitrary
/// positions, fast paths at both ends, resizing, O(1) swapping, visitors and a
/// search engine with both ordered and concurrent variants.
///
/// ### -> `Capability`
///
/// The second type parameter selects how elements may be compared (see
/// [`Capability`]):
///
/// - `Sequence<T>` / `Sequence<T, Opaque>`: no comparison. Value searches always
///   report "not found"; identity searches work as usual.
/// - `Sequence<T, Equatable>`: elements are compared with `PartialEq`.
/// - `Sequence<T, Ordered>`: elements are compared with `PartialEq` and are known
///   to be ordered. Sorting lives in [`SortableSequence`](crate::SortableSequence).
///
/// The strategy is a zero-sized marker; it adds nothing to the layout.
///
/// ### -> `Teardown`
///
/// An element type registers a teardown notification by implementing `Drop`.
/// The container drops a removed element inside the removing call, exactly once:
///
/// - `clear` (back to front), `erase`, `pop_back`, `pop_front` and a shrinking
///   `resize` (back to front).
/// - Never on `swap`, and never on a successful `insert` / `push_back` / `push_front`.
/// - A value handed to an `insert` that fails was never stored. It is dropped
///   inside the failing call like any other owned argument, and every stored
///   element is left untouched.
/// - Dropping the container tears the remaining elements down back to front.
///
/// ### -> `Invariants`
///
/// 1. Index access is valid only for indices in `[0, size)`.
/// 2. After every mutating call the backing store reflects the logical content in order.
/// 3. A failing call returns an [`Error`] before mutating anything.
///
/// ### -> `Concurrency Model`
///
/// The container is not internally synchronized. Mutation needs `&mut self`, so
/// the borrow checker enforces the single-owner contract. The concurrent search
/// family (`search`, `ref_search`, `search_ref`, `ref_search_ref`) is the only
/// place where threads are spawned; it borrows the container immutably for the
/// whole call and joins every worker before returning.
///
/// ### -> `Performance Characteristics`
///
/// - **Index access / size / front / back**: O(1).
/// - **push_back / pop_back**: amortized O(1).
/// - **push_front / pop_front / insert / erase**: O(n), elements are shifted.
/// - **swap**: O(1), only the backing stores are exchanged.
/// - **ordered_search**: O(n), first match.
/// - **search**: O(n) split across worker threads, some match.
///
/// ### -> `Usage Example`
///
/// ```
/// use seqcore::prelude::*;
///
/// fn example() -> seqcore::Result<()> {
///     let mut sequence = Sequence::<i32, Equatable>::from_data([1, 2, 3, 4]);
///
///     sequence.insert(0, 5)?;
///     assert_eq!(sequence.data(), &[5, 1, 2, 3, 4]);
///
///     sequence.erase(1)?;
///     assert_eq!(sequence.data(), &[5, 2, 3, 4]);
///
///     assert_eq!(sequence.ordered_search(&3), Some(2));
///     assert_eq!(sequence.safe_at(9), Err(Error::IndexOutOfRange { index: 9, size: 4 }));
///
///     sequence.resize(6)?;
///     assert_eq!(sequence.back()?, 0);
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct Sequence<T, C = Opaque> {
    data: Vec<T>,
    capability: PhantomData<fn() -> C>,
}

impl <T, C> Sequence<T, C> {
    /// Creates an empty sequence.
    #[must_use = "New sequences must serve a purpose!"]
    pub fn new() -> Self {
        Self { data: Vec::new(), capability: PhantomData }
    }

    /// Creates an empty sequence able to hold `capacity` elements without reallocating.
    #[must_use = "New sequences must serve a purpose!"]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity), capability: PhantomData }
    }

    /// Creates a sequence holding `values` in iteration order.
    #[must_use = "New sequences must serve a purpose!"]
    pub fn from_data<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>
    {
        Self { data: values.into_iter().collect(), capability: PhantomData }
    }

    /// Moves the elements into a sequence using another comparison strategy.
    ///
    /// No element is copied or torn down.
    pub fn into_capability<D>(mut self) -> Sequence<T, D>
    where
        D: Capability<T>
    {
        Sequence { data: std::mem::take(&mut self.data), capability: PhantomData }
    }

    /// Returns a copy of the element at `index`.
    ///
    /// ### -> `Panics`
    /// Performs no validation of its own; an index outside `[0, size)` hits the
    /// backing slice's bounds check and panics. Use [`Sequence::safe_at`] for a
    /// checked variant.
    #[inline(always)]
    pub fn at(&self, index: usize) -> T
    where
        T: Clone
    {
        self.data[index].clone()
    }

    /// Returns a reference to the element at `index`. Panics like [`Sequence::at`].
    #[inline(always)]
    pub fn at_ref(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Returns a mutable reference to the element at `index`. Panics like [`Sequence::at`].
    #[inline(always)]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    /// Validates a position for element access.
    ///
    /// The empty-container error takes precedence over the range error.
    fn checked(&self, index: isize) -> Result<usize> {
        if self.data.is_empty() {
            return Err(Error::EmptyContainer);
        }

        position(index, self.data.len())
            .ok_or(Error::IndexOutOfRange { index, size: self.data.len() })
    }

    /// Returns a copy of the element at `index`.
    ///
    /// Fails with [`Error::EmptyContainer`] on an empty sequence (even for
    /// `index == 0`) and with [`Error::IndexOutOfRange`] when `index` is outside
    /// `[0, size)`.
    pub fn safe_at(&self, index: isize) -> Result<T>
    where
        T: Clone
    {
        self.safe_at_ref(index).cloned()
    }

    /// Checked variant of [`Sequence::at_ref`], see [`Sequence::safe_at`].
    pub fn safe_at_ref(&self, index: isize) -> Result<&T> {
        let position = self.checked(index)?;
        Ok(&self.data[position])
    }

    /// Checked variant of [`Sequence::at_mut`], see [`Sequence::safe_at`].
    pub fn safe_at_mut(&mut self, index: isize) -> Result<&mut T> {
        let position = self.checked(index)?;
        Ok(&mut self.data[position])
    }

    /// Returns a copy of the first element. Fails with [`Error::EmptyContainer`] when empty.
    pub fn front(&self) -> Result<T>
    where
        T: Clone
    {
        self.front_ref().cloned()
    }

    /// Returns a reference to the first element. Fails with [`Error::EmptyContainer`] when empty.
    pub fn front_ref(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyContainer)
    }

    /// Mutable variant of [`Sequence::front_ref`].
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.data.first_mut().ok_or(Error::EmptyContainer)
    }

    /// Returns a copy of the last element. Fails with [`Error::EmptyContainer`] when empty.
    pub fn back(&self) -> Result<T>
    where
        T: Clone
    {
        self.back_ref().cloned()
    }

    /// Returns a reference to the last element. Fails with [`Error::EmptyContainer`] when empty.
    pub fn back_ref(&self) -> Result<&T> {
        self.data.last().ok_or(Error::EmptyContainer)
    }

    /// Mutable variant of [`Sequence::back_ref`].
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.data.last_mut().ok_or(Error::EmptyContainer)
    }

    /// Whether no element is stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of stored elements.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of elements the backing store can hold without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The elements in order.
    #[inline(always)]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements from front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Pops from the back until `length` elements remain.
    fn truncate_back(&mut self, length: usize) {
        while self.data.len() > length {
            let removed = self.data.pop();
            crate::drop!(removed);
        }
    }

    /// Removes every element, tearing them down from the back to the front.
    pub fn clear(&mut self) {
        self.truncate_back(0);
    }

    /// Inserts `value` at `index`, shifting every later element one position back.
    ///
    /// `index == size` appends. Fails with [`Error::IndexOutOfBounds`] for a
    /// position outside `[0, size]`; the rejected value is dropped.
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        let size = self.data.len();
        let position = position(index, size + 1).ok_or(Error::IndexOutOfBounds { index, size })?;

        self.data.insert(position, value);
        Ok(())
    }

    /// Removes and tears down the element at `index`, shifting later elements forward.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] for a position outside `[0, size)`,
    /// which includes every position of an empty sequence.
    pub fn erase(&mut self, index: isize) -> Result<()> {
        let size = self.data.len();
        let position = position(index, size).ok_or(Error::IndexOutOfBounds { index, size })?;

        let removed = self.data.remove(position);
        crate::drop!(removed);
        Ok(())
    }

    /// Appends `value` after the last element. Amortized O(1).
    #[inline(always)]
    pub fn push_back(&mut self, value: T) {
        self.data.push(value);
    }

    /// Inserts `value` before the first element. O(n).
    pub fn push_front(&mut self, value: T) {
        self.data.insert(0, value);
    }

    /// Removes and tears down the last element.
    pub fn pop_back(&mut self) -> Result<()> {
        let removed = self.data.pop().ok_or(Error::EmptyContainer)?;
        crate::drop!(removed);
        Ok(())
    }

    /// Removes and tears down the first element. O(n).
    pub fn pop_front(&mut self) -> Result<()> {
        if self.data.is_empty() {
            return Err(Error::EmptyContainer);
        }

        let removed = self.data.remove(0);
        crate::drop!(removed);
        Ok(())
    }

    /// Changes the number of elements to `new_size`.
    ///
    /// - Negative `new_size`: fails with [`Error::NegativeSize`].
    /// - Growing: appends `T::default()` values.
    /// - Shrinking: pops (and tears down) from the back.
    /// - Same size: no-op.
    pub fn resize(&mut self, new_size: isize) -> Result<()>
    where
        T: Default
    {
        let target = usize::try_from(new_size).map_err(|_| Error::NegativeSize { requested: new_size })?;

        if target > self.data.len() {
            self.data.resize_with(target, T::default);
        } else {
            self.truncate_back(target);
        }

        Ok(())
    }

    /// Exchanges the backing stores of two sequences in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Calls `visitor` on every element from front to back.
    ///
    /// Returning `ControlFlow::Break(())` stops the traversal after that element.
    pub fn visit<F>(&self, visitor: F)
    where
        F: FnMut(&T) -> ControlFlow<()>
    {
        let _ = self.data.iter().try_for_each(visitor);
    }

    /// Calls `visitor` on every element from back to front, see [`Sequence::visit`].
    pub fn visit_reverse<F>(&self, visitor: F)
    where
        F: FnMut(&T) -> ControlFlow<()>
    {
        let _ = self.data.iter().rev().try_for_each(visitor);
    }

    /// Mutable variant of [`Sequence::visit`].
    pub fn visit_mut<F>(&mut self, visitor: F)
    where
        F: FnMut(&mut T) -> ControlFlow<()>
    {
        let _ = self.data.iter_mut().try_for_each(visitor);
    }

    /// Mutable variant of [`Sequence::visit_reverse`].
    pub fn visit_reverse_mut<F>(&mut self, visitor: F)
    where
        F: FnMut(&mut T) -> ControlFlow<()>
    {
        let _ = self.data.iter_mut().rev().try_for_each(visitor);
    }
}

impl <T, C> Sequence<T, C>
where
    C: Capability<T>
{
    /// The comparison capability this sequence was built with.
    pub fn capability(&self) -> CapabilityKind {
        C::KIND
    }
}

impl <T, C> Drop for Sequence<T, C> {
    fn drop(&mut self) {
        self.truncate_back(0);
    }
}

impl <T, C> Default for Sequence<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: the clone owns its own backing store.
impl <T: Clone, C> Clone for Sequence<T, C> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), capability: PhantomData }
    }
}

impl <T: Debug, C> Debug for Sequence<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl <T, C> From<Vec<T>> for Sequence<T, C> {
    fn from(data: Vec<T>) -> Self {
        Self { data, capability: PhantomData }
    }
}

impl <T, C> FromIterator<T> for Sequence<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_data(iter)
    }
}

impl <'a, T, C> IntoIterator for &'a Sequence<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl <T, C> Index<usize> for Sequence<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at_ref(index)
    }
}

impl <T, C> IndexMut<usize> for Sequence<T, C> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index)
    }
}

impl <T, C> traits::Length for Sequence<T, C> {
    #[inline(always)]
    fn length(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests;
