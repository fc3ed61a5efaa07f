//! Create, copy, clear and access values inside a [`Slot`].
//!
//! Each operation has exactly two bodies, selected by `<T as Classified>::IS_SMALL`:
//! - **small**: the value lives in the slot's own bytes; no allocation happens.
//! - **big**: the slot stores a pointer to one block obtained from a
//!   [`SlotAlloc`] with `Layout::new::<T>()`.
//!
//! The functions without an allocator argument use [`Global`].

use super::{raw, Classified, Slot};
use crate::alloc::{AllocError, Global, SlotAlloc};
use core::alloc::Layout;
use core::ptr;
use std::alloc::handle_alloc_error;

#[inline]
fn or_handle_alloc_error<T>(result: Result<Slot, AllocError>) -> Slot {
    match result {
        Ok(slot) => slot,
        Err(AllocError) => handle_alloc_error(Layout::new::<T>()),
    }
}

/// Moves `value` into a fresh slot.
///
/// # Errors
/// Returns `AllocError` if `T` is big and `alloc` refuses the block. The value
/// is dropped in that case.
#[inline]
pub fn emplace_in<T, A: SlotAlloc + ?Sized>(value: T, alloc: &A) -> Result<Slot, AllocError> {
    let mut slot = Slot::uninit();
    if <T as Classified>::IS_SMALL {
        // SAFETY: `T` is small; the slot is fresh.
        unsafe { raw::write_inline(&mut slot, value) };
    } else {
        let layout = Layout::new::<T>();
        let target = alloc.allocate(layout)?.cast::<T>();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            type_name = core::any::type_name::<T>(),
            size = layout.size(),
            align = layout.align(),
            "slot value allocated"
        );
        // SAFETY: `target` is a fresh block with `T`'s layout.
        unsafe { target.as_ptr().write(value) };
        raw::set_indirect(&mut slot, target);
    }
    Ok(slot)
}

/// Returns a slot holding `T::default()`, allocated from `alloc` if `T` is big.
///
/// # Errors
/// Returns `AllocError` if the allocator refuses the block.
#[inline]
pub fn try_create_in<T: Default, A: SlotAlloc + ?Sized>(alloc: &A) -> Result<Slot, AllocError> {
    emplace_in(T::default(), alloc)
}

/// Returns a slot holding `T::default()`, allocated from `alloc` if `T` is big.
#[inline]
pub fn create_in<T: Default, A: SlotAlloc + ?Sized>(alloc: &A) -> Slot {
    or_handle_alloc_error::<T>(try_create_in::<T, A>(alloc))
}

/// Returns a slot holding `T::default()`.
#[inline]
pub fn create<T: Default>() -> Slot {
    create_in::<T, _>(&Global)
}

/// Returns a slot holding a clone of `value`, allocated from `alloc` if `T` is big.
///
/// # Errors
/// Returns `AllocError` if the allocator refuses the block.
#[inline]
pub fn try_copy_in<T: Clone, A: SlotAlloc + ?Sized>(
    value: &T,
    alloc: &A,
) -> Result<Slot, AllocError> {
    emplace_in(value.clone(), alloc)
}

/// Returns a slot holding a clone of `value`, allocated from `alloc` if `T` is big.
#[inline]
pub fn copy_in<T: Clone, A: SlotAlloc + ?Sized>(value: &T, alloc: &A) -> Slot {
    or_handle_alloc_error::<T>(try_copy_in(value, alloc))
}

/// Returns a slot holding a clone of `value`.
#[inline]
pub fn copy<T: Clone>(value: &T) -> Slot {
    copy_in(value, &Global)
}

/// Destroys the value held in `slot` and returns its block to `alloc`.
///
/// The slot itself stays usable as storage for a later `create`/`copy`.
///
/// # Safety
/// - `slot` must hold a live `T` created with `alloc` (or with an allocator
///   that `alloc` can release blocks for).
/// - The value must not be accessed or cleared again.
#[inline]
pub unsafe fn clear_in<T, A: SlotAlloc + ?Sized>(slot: &mut Slot, alloc: &A) {
    if <T as Classified>::IS_SMALL {
        // SAFETY: caller asserts a live small `T`.
        unsafe { raw::drop_inline::<T>(slot) };
    } else {
        // SAFETY: caller asserts the slot holds a pointer to a live `T`.
        let target = unsafe { raw::indirect::<T>(slot) };
        #[cfg(feature = "tracing")]
        tracing::trace!(type_name = core::any::type_name::<T>(), "slot value released");
        // SAFETY: `target` is live, non-null, and came from `alloc` with `T`'s layout.
        unsafe {
            ptr::drop_in_place(target);
            alloc.deallocate(ptr::NonNull::new_unchecked(target).cast::<u8>(), Layout::new::<T>());
        }
    }
}

/// Destroys the value held in `slot`.
///
/// # Safety
/// See [`clear_in`]; the value must have been created with [`Global`].
#[inline]
pub unsafe fn clear<T>(slot: &mut Slot) {
    // SAFETY: forwarded contract.
    unsafe { clear_in::<T, _>(slot, &Global) }
}

/// Moves the value out of `slot` and returns its block to `alloc`.
///
/// # Safety
/// Same as [`clear_in`].
#[inline]
pub unsafe fn take_in<T, A: SlotAlloc + ?Sized>(slot: &mut Slot, alloc: &A) -> T {
    if <T as Classified>::IS_SMALL {
        // SAFETY: caller asserts a live small `T`.
        unsafe { raw::read_inline::<T>(slot) }
    } else {
        // SAFETY: caller asserts the slot holds a pointer to a live `T` from `alloc`.
        unsafe {
            let target = raw::indirect::<T>(slot);
            let value = ptr::read(target);
            alloc.deallocate(ptr::NonNull::new_unchecked(target).cast::<u8>(), Layout::new::<T>());
            value
        }
    }
}

/// Returns a mutable reference to the value held in `slot`.
///
/// # Safety
/// `slot` must hold a live `T`.
#[inline(always)]
pub unsafe fn access<T>(slot: &mut Slot) -> &mut T {
    if <T as Classified>::IS_SMALL {
        // SAFETY: caller asserts a live small `T` in place.
        unsafe { &mut *raw::inline_mut_ptr::<T>(slot) }
    } else {
        // SAFETY: caller asserts a pointer to a live `T`; `&mut slot` makes it exclusive.
        unsafe { &mut *raw::indirect::<T>(slot) }
    }
}

/// Returns a shared reference to the value held in `slot`.
///
/// # Safety
/// `slot` must hold a live `T`.
#[inline(always)]
pub unsafe fn const_access<T>(slot: &Slot) -> &T {
    if <T as Classified>::IS_SMALL {
        // SAFETY: caller asserts a live small `T` in place.
        unsafe { &*raw::inline_ptr::<T>(slot) }
    } else {
        // SAFETY: caller asserts a pointer to a live `T`.
        unsafe { &*raw::indirect::<T>(slot) }
    }
}
