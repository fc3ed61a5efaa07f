//! Allocation services for big slot values.

/// The allocator trait and the global allocator.
pub mod allocator;
pub mod counting;

pub use allocator::{AllocError, Global, SlotAlloc};
pub use counting::{AllocStats, CountingAlloc};
