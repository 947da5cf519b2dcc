
pub use {
    crate::sequence::Sequence,
    crate::sequence::search::ChunkPlan,
    crate::sequence::sortable::SortableSequence,
    crate::sequence::traits::Length,
    crate::capability::{Capability, CapabilityKind, Equatable, Opaque, Ordered},
    crate::adapters::{Deque, Queue, Stack},
    crate::error::Error,
};
