//! Unsafe, centralized operations on the slot word.
//!
//! Every reinterpretation of a [`Slot`]'s bytes goes through this file:
//! - in-place writes, reads and drops for small values
//! - storing and loading the pointer for big values
//! - building borrowed slot images for `cast`
//!
//! ## Core invariant
//! A small `T` handled here satisfies `size_of::<T>() <= SLOT_SIZE` and
//! `align_of::<T>() <= SLOT_ALIGN`; callers check `Classified::IS_SMALL` before
//! using the inline helpers.

use super::Slot;
use core::mem::MaybeUninit;
use core::ptr::{self, NonNull};

#[inline(always)]
pub(crate) fn inline_ptr<T>(slot: &Slot) -> *const T {
    slot.word.as_ptr().cast::<T>()
}

#[inline(always)]
pub(crate) fn inline_mut_ptr<T>(slot: &mut Slot) -> *mut T {
    slot.word.as_mut_ptr().cast::<T>()
}

/// Writes `value` into the slot's own bytes.
///
/// # Safety
/// - `T` must be small.
/// - Any value previously held in place is overwritten without being dropped.
#[inline(always)]
pub(crate) unsafe fn write_inline<T>(slot: &mut Slot, value: T) {
    // SAFETY: caller asserts `T` fits the word's size and alignment.
    unsafe { ptr::write(inline_mut_ptr::<T>(slot), value) }
}

/// Bitwise-moves the in-place value out of the slot.
///
/// # Safety
/// - `T` must be small and the slot must hold a live `T`.
/// - The slot is logically uninitialized afterwards.
#[inline(always)]
pub(crate) unsafe fn read_inline<T>(slot: &Slot) -> T {
    // SAFETY: caller asserts initialization.
    unsafe { ptr::read(inline_ptr::<T>(slot)) }
}

/// Drops the in-place value.
///
/// # Safety
/// - `T` must be small and the slot must hold a live `T`.
/// - Must not be called more than once for the same value.
#[inline(always)]
pub(crate) unsafe fn drop_inline<T>(slot: &mut Slot) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(inline_mut_ptr::<T>(slot)) }
}

/// Stores the address of a big value.
#[inline(always)]
pub(crate) fn set_indirect<T>(slot: &mut Slot, target: NonNull<T>) {
    slot.word = MaybeUninit::new(target.as_ptr().cast::<()>());
}

/// Loads the address of a big value.
///
/// # Safety
/// The slot must hold a pointer stored by [`set_indirect`] or [`from_address`].
#[inline(always)]
pub(crate) unsafe fn indirect<T>(slot: &Slot) -> *mut T {
    // SAFETY: caller asserts the word holds an initialized pointer.
    unsafe { slot.word.assume_init() }.cast::<T>()
}

/// Builds a slot holding the address of `value`.
#[inline(always)]
pub(crate) fn from_address<T>(value: &T) -> Slot {
    Slot {
        word: MaybeUninit::new(ptr::from_ref(value).cast_mut().cast::<()>()),
    }
}

/// Builds a slot holding a bitwise image of `value`.
///
/// # Safety
/// - `T` must be small.
/// - The image must never be dropped or cleared: it does not own `value`.
#[inline(always)]
pub(crate) unsafe fn from_bits<T>(value: &T) -> Slot {
    let mut slot = Slot::uninit();
    // SAFETY: `T` fits the word; source and destination do not overlap.
    unsafe { ptr::copy_nonoverlapping(ptr::from_ref(value), inline_mut_ptr::<T>(&mut slot), 1) };
    slot
}
