/// Which comparison capability a [`Sequence`](crate::Sequence) was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// Elements cannot be compared; value searches always report "not found".
    Opaque,
    /// Elements support `==` / `!=`.
    Equality,
    /// Elements support `==` / `!=` and `<`, `>`, `<=`, `>=`.
    Ordering,
}

/// Strategy describing how elements of a sequence may be compared.
///
/// `Capability<T>` lets a `Sequence<T, C>` decide **at the type level** whether
/// value-based search operations can compare elements. Every search method is
/// available regardless of `C`; the strategy only changes what "equal" means:
///
/// - [`Opaque`] never compares, so value searches report "not found".
/// - [`Equatable`] compares with `PartialEq`.
/// - [`Ordered`] compares with `PartialEq` and additionally marks the element
///   type as ordered (`PartialOrd`).
///
/// ---
///
/// ## Why a strategy type
///
/// Element types differ in what they can do: some have no notion of equality,
/// some can be tested for equality, some are fully ordered. Encoding the choice
/// as a zero-sized type parameter keeps the dispatch static (no branching on a
/// runtime flag, no virtual calls) while still letting a container of
/// non-comparable elements expose the complete search API.
///
/// ---
///
/// ## Design Constraints
///
/// - Must be zero-cost (the strategies carry no data)
/// - Must not allocate
/// - `equal` must be callable from several worker threads at once
///
/// Implementations other than the three provided are possible but unusual;
/// identity searches never consult the strategy.
pub trait Capability<T: ?Sized> {
    /// Capability exposed by this strategy.
    const KIND: CapabilityKind;

    /// Compares two elements.
    ///
    /// Returns `None` when the strategy cannot compare elements at all, which
    /// callers treat as "no match" rather than as an error.
    fn equal(left: &T, right: &T) -> Option<bool>;
}

/// Strategy for element types without any comparison capability.
///
/// This is the default strategy of [`Sequence`](crate::Sequence) and places no
/// bound on `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Opaque;

/// Strategy for element types that implement `PartialEq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equatable;

/// Strategy for element types that implement `PartialOrd`.
///
/// [`SortableSequence`](crate::SortableSequence) is built on this strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordered;

impl <T: ?Sized> Capability<T> for Opaque {
    const KIND: CapabilityKind = CapabilityKind::Opaque;

    #[inline(always)]
    fn equal(_: &T, _: &T) -> Option<bool> {
        None
    }
}

impl <T: PartialEq + ?Sized> Capability<T> for Equatable {
    const KIND: CapabilityKind = CapabilityKind::Equality;

    #[inline(always)]
    fn equal(left: &T, right: &T) -> Option<bool> {
        Some(left == right)
    }
}

impl <T: PartialOrd + ?Sized> Capability<T> for Ordered {
    const KIND: CapabilityKind = CapabilityKind::Ordering;

    #[inline(always)]
    fn equal(left: &T, right: &T) -> Option<bool> {
        Some(left == right)
    }
}
