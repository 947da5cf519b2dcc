//! Search engine of [`Sequence`].
//!
//! ## Families
//!
//! * **Value** searches (`contains_value`, `*search`, `*search_ref`) compare
//!   elements through the sequence's [`Capability`]. Without a capability they
//!   report "not found".
//! * **Identity** searches (`contains_ref`, `*ref_search`, `*ref_search_ref`)
//!   look for the element stored at the address of a given reference and work
//!   for every element type.
//!
//! ## Ordered vs concurrent
//!
//! * `ordered_*` scans front to back on the calling thread and always returns
//!   the first match.
//! * `search`, `ref_search`, `search_ref` and `ref_search_ref` partition the
//!   sequence into contiguous chunks (see [`ChunkPlan`]) and scan each chunk on
//!   its own worker thread. The first worker to publish a match wins; other
//!   workers notice it between two comparisons and stop. A worker is never
//!   interrupted in the middle of a comparison, so with several matches the
//!   reported index is *some* matching index, not necessarily the lowest.

use std::any::Any;
use std::ops::{ControlFlow, Range};
use std::panic::resume_unwind;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::utils::CachePadded;
use parking_lot::Mutex;

use super::Sequence;
use crate::capability::Capability;
use crate::config;

/// Partition of `[0, len)` into one contiguous chunk per worker.
///
/// Every worker gets `chunk` elements; the last one also takes the remainder.
/// The chunks cover `[0, len)` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    pub len: usize,
    pub workers: usize,
    pub chunk: usize,
}

impl ChunkPlan {
    /// Plans a search over `len` elements.
    ///
    /// Uses `parallelism` workers, or a single one when
    /// `len < parallelism * multiplier`.
    pub fn new(len: usize, parallelism: usize, multiplier: usize) -> Self {
        let parallelism = parallelism.max(1);
        let workers = if len < parallelism.saturating_mul(multiplier) { 1 } else { parallelism };

        Self { len, workers, chunk: len / workers }
    }

    /// Plans a search with the process-wide configuration.
    pub fn current(len: usize) -> Self {
        Self::new(len, config::parallelism(), config::chunk_multiplier())
    }

    /// Range scanned by `worker`.
    pub fn range(&self, worker: usize) -> Range<usize> {
        assert!(worker < self.workers, "Worker {} does not exist in a plan of {} workers!", worker, self.workers);

        let start = self.chunk * worker;
        if worker == self.workers - 1 {
            start..self.len
        } else {
            start..start + self.chunk
        }
    }
}

/// Scans `data` with the process-wide [`ChunkPlan`], see [`concurrent_find_with`].
fn concurrent_find<T, F>(data: &[T], matches: F) -> Option<usize>
where
    T: Sync,
    F: Fn(&T) -> bool + Sync
{
    if data.is_empty() {
        return None;
    }

    concurrent_find_with(ChunkPlan::current(data.len()), data, matches)
}

/// Scans `data` with one scoped worker per chunk of `plan` and returns the index published first.
///
/// Blocks until every worker has finished. A panic raised by `matches` inside a
/// worker is resumed on the calling thread.
fn concurrent_find_with<T, F>(plan: ChunkPlan, data: &[T], matches: F) -> Option<usize>
where
    T: Sync,
    F: Fn(&T) -> bool + Sync
{
    assert_eq!(plan.len, data.len(), "Plan covers {} elements but {} were given!", plan.len, data.len());

    if data.is_empty() {
        return None;
    }

    tracing::debug!(size = plan.len, workers = plan.workers, chunk = plan.chunk, "partitioned search");

    let found = CachePadded::new(AtomicBool::new(false));
    let slot = Mutex::new(None);

    let outcome = crossbeam::scope(|scope| {
        for worker in 0..plan.workers {
            let range = plan.range(worker);
            let (found, slot, matches) = (&found, &slot, &matches);

            scope.spawn(move |_| {
                for index in range {
                    if matches(&data[index]) {
                        let mut published = slot.lock();
                        if published.is_none() {
                            *published = Some(index);
                            tracing::trace!(worker, index, "match published");
                        }
                        found.store(true, Ordering::Release);
                        return;
                    }

                    if found.load(Ordering::Acquire) {
                        return;
                    }
                }
            });
        }
    });

    // crossbeam collects every worker panic; surface the first one
    if let Err(payload) = outcome {
        match payload.downcast::<Vec<Box<dyn Any + Send>>>() {
            Ok(mut panics) if !panics.is_empty() => resume_unwind(panics.swap_remove(0)),
            Ok(_) => panic!("search worker panicked without a payload"),
            Err(payload) => resume_unwind(payload),
        }
    }

    slot.into_inner()
}

impl <T, C> Sequence<T, C>
where
    C: Capability<T>
{
    #[inline(always)]
    fn equals(element: &T, value: &T) -> bool {
        C::equal(element, value).unwrap_or(false)
    }

    /// Whether the strategy can compare elements at all.
    #[inline(always)]
    fn comparable(value: &T) -> bool {
        C::equal(value, value).is_some()
    }

    /// Index of the first element for which `matches` holds, scanning front to back.
    fn ordered_find<F>(&self, mut matches: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool
    {
        let mut index = 0;
        let mut found = None;

        self.visit(|element| {
            if matches(element) {
                found = Some(index);
                return ControlFlow::Break(());
            }

            index += 1;
            ControlFlow::Continue(())
        });

        found
    }

    /// Whether an element equal to `value` is stored.
    ///
    /// Always `false` when the sequence has no comparison capability.
    pub fn contains_value(&self, value: &T) -> bool {
        self.ordered_search(value).is_some()
    }

    /// Whether `element` refers to an element stored in this sequence.
    pub fn contains_ref(&self, element: &T) -> bool {
        self.ordered_ref_search(element).is_some()
    }

    /// Index of the first element equal to `value`.
    ///
    /// `None` when nothing matches, when the sequence is empty, or when the
    /// sequence has no comparison capability.
    pub fn ordered_search(&self, value: &T) -> Option<usize> {
        if self.is_empty() || !Self::comparable(value) {
            return None;
        }

        self.ordered_find(|element| Self::equals(element, value))
    }

    /// Index of the element stored at the address of `element`.
    pub fn ordered_ref_search(&self, element: &T) -> Option<usize> {
        self.ordered_find(|candidate| std::ptr::eq(candidate, element))
    }

    /// Reference to the first element equal to `value`, see [`Sequence::ordered_search`].
    pub fn ordered_search_ref(&self, value: &T) -> Option<&T> {
        self.ordered_search(value).map(|index| self.at_ref(index))
    }

    /// Reference to the element stored at the address of `element`.
    pub fn ordered_ref_search_ref(&self, element: &T) -> Option<&T> {
        self.ordered_ref_search(element).map(|index| self.at_ref(index))
    }
}

impl <T, C> Sequence<T, C>
where
    T: Sync,
    C: Capability<T>
{
    /// Index of *an* element equal to `value`, searched by several workers.
    ///
    /// With a single match the result is deterministic. With several matches
    /// any of them may be returned. Returns `None` without spawning workers
    /// when the sequence is empty or has no comparison capability.
    pub fn search(&self, value: &T) -> Option<usize> {
        if self.is_empty() || !Self::comparable(value) {
            return None;
        }

        concurrent_find(self.data(), |element| Self::equals(element, value))
    }

    /// Index of the element stored at the address of `element`, searched by several workers.
    pub fn ref_search(&self, element: &T) -> Option<usize> {
        concurrent_find(self.data(), |candidate| std::ptr::eq(candidate, element))
    }

    /// Reference to *an* element equal to `value`, see [`Sequence::search`].
    pub fn search_ref(&self, value: &T) -> Option<&T> {
        self.search(value).map(|index| self.at_ref(index))
    }

    /// Reference to the element stored at the address of `element`, see [`Sequence::ref_search`].
    pub fn ref_search_ref(&self, element: &T) -> Option<&T> {
        self.ref_search(element).map(|index| self.at_ref(index))
    }
}
