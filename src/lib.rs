//! A contiguous, order-preserving sequence container.
//!
//! [`Sequence<T, C>`] owns its elements in one backing store and offers
//! positional access, insertion and removal anywhere, fast paths at both ends,
//! resizing and O(1) swapping. Its search engine comes in two flavors:
//!
//! - **ordered** searches scan front to back and return the first match;
//! - **concurrent** searches split large sequences into chunks scanned by
//!   worker threads and return *a* match.
//!
//! Whether elements can be compared by value is decided by the capability
//! strategy `C` ([`Opaque`], [`Equatable`], [`Ordered`]); identity searches
//! work for every element type. [`SortableSequence<T>`] adds sorting for
//! totally ordered elements, and [`Deque`], [`Queue`] and [`Stack`] narrow the
//! container down to their usual operations.
//!
//! ```
//! use seqcore::prelude::*;
//!
//! let sequence = Sequence::<u64, Equatable>::from_data(0..100_000);
//!
//! assert_eq!(sequence.search(&73_512), Some(73_512));
//! assert!(!sequence.contains_value(&100_000));
//! ```

/// Drops every given value in order.
///
/// Marks the points where the container tears a removed element down.
#[macro_export]
macro_rules! drop {
    ($($x:expr),* $(,)?) => {
        $( std::mem::drop($x); )*
    };
}

pub mod adapters;
pub mod capability;
pub mod config;
pub mod error;
pub mod sequence;

pub use {
    crate::sequence::Sequence,
    crate::sequence::sortable::SortableSequence,
    crate::sequence::traits::Length,
    crate::capability::{Capability, CapabilityKind, Equatable, Opaque, Ordered},
    crate::adapters::{Deque, Queue, Stack},
    crate::error::{Error, Result},
};

pub mod prelude {
    pub use crate::sequence::prelude::*;
}
