use core::alloc::Layout;
use core::ptr::NonNull;
use std::alloc::{alloc, dealloc};

/// The allocation service behind big slot values.
///
/// Slots never allocate for small types. For big types every `create`/`copy`
/// asks for exactly one block with `Layout::new::<T>()` and every `clear`
/// returns it with the same layout.
pub trait SlotAlloc {
    /// Allocates memory according to the given layout.
    ///
    /// # Errors
    /// Returns `AllocError` if allocation fails.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Deallocates memory.
    ///
    /// # Safety
    /// `ptr` must denote a block of memory currently allocated by this allocator.
    /// `layout` must be the same layout that was used to allocate that block of memory.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

impl<A: SlotAlloc + ?Sized> SlotAlloc for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded contract.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}

/// The process-wide allocator (`std::alloc`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

impl SlotAlloc for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            // Zero-sized blocks are never handed to the system allocator; any
            // well-aligned non-null address will do.
            return NonNull::new(layout.align() as *mut u8).ok_or(AllocError);
        }
        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc(layout) };
        NonNull::new(raw).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::error!(
                size = layout.size(),
                align = layout.align(),
                "global allocation failed"
            );
            AllocError
        })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            // SAFETY: caller guarantees `ptr` came from `allocate` with `layout`.
            unsafe { dealloc(ptr.as_ptr(), layout) }
        }
    }
}

/// The error type for allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("memory allocation failed")]
pub struct AllocError;
