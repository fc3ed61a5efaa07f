//! An allocator decorator that keeps allocation metrics.
//!
//! Used to verify the storage policy: small values must never reach the
//! allocator, big values must reach it exactly once per `create`/`copy` and
//! once per `clear`.

use super::{AllocError, Global, SlotAlloc};
use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

/// A snapshot of allocator activity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AllocStats {
    /// Successful `allocate` calls.
    pub allocations: usize,
    /// `deallocate` calls.
    pub deallocations: usize,
    /// Bytes handed out.
    pub allocated_bytes: usize,
    /// Bytes returned.
    pub deallocated_bytes: usize,
}

impl AllocStats {
    /// Blocks currently outstanding.
    ///
    /// Saturates at zero when counters were reset while blocks were live.
    pub fn live(&self) -> usize {
        self.allocations.saturating_sub(self.deallocations)
    }

    /// Returns `true` if every allocation has been returned.
    pub fn is_balanced(&self) -> bool {
        self.allocations == self.deallocations && self.allocated_bytes == self.deallocated_bytes
    }
}

/// Wraps another [`SlotAlloc`] and counts every call that passes through it.
///
/// Counters are plain `Cell`s: the decorator is meant for single-threaded use,
/// like the slots it serves.
#[derive(Debug, Default)]
pub struct CountingAlloc<A = Global> {
    inner: A,
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    allocated_bytes: Cell<usize>,
    deallocated_bytes: Cell<usize>,
}

impl CountingAlloc<Global> {
    /// Creates a counter over the global allocator.
    pub const fn new() -> Self {
        Self::wrap(Global)
    }
}

impl<A> CountingAlloc<A> {
    /// Creates a counter over `inner`.
    pub const fn wrap(inner: A) -> Self {
        Self {
            inner,
            allocations: Cell::new(0),
            deallocations: Cell::new(0),
            allocated_bytes: Cell::new(0),
            deallocated_bytes: Cell::new(0),
        }
    }

    /// Returns the current counters.
    pub fn stats(&self) -> AllocStats {
        AllocStats {
            allocations: self.allocations.get(),
            deallocations: self.deallocations.get(),
            allocated_bytes: self.allocated_bytes.get(),
            deallocated_bytes: self.deallocated_bytes.get(),
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.allocations.set(0);
        self.deallocations.set(0);
        self.allocated_bytes.set(0);
        self.deallocated_bytes.set(0);
    }

    /// Returns the wrapped allocator.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    #[inline(always)]
    fn on_alloc(&self, size: usize) {
        self.allocations.set(self.allocations.get() + 1);
        self.allocated_bytes.set(self.allocated_bytes.get() + size);
    }

    #[inline(always)]
    fn on_dealloc(&self, size: usize) {
        self.deallocations.set(self.deallocations.get() + 1);
        self.deallocated_bytes.set(self.deallocated_bytes.get() + size);
    }
}

impl<A: SlotAlloc> SlotAlloc for CountingAlloc<A> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let ptr = self.inner.allocate(layout)?;
        self.on_alloc(layout.size());
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.on_dealloc(layout.size());
        // SAFETY: forwarded contract.
        unsafe { self.inner.deallocate(ptr, layout) }
    }
}
