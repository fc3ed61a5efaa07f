//! Trait calls on slot contents.
//!
//! Containers keep values as raw slots and run their algorithms through
//! these helpers, which read each slot with `const_access::<T>` and forward
//! to the type registry.

use super::{lifecycle, Slot};
use crate::alloc::{Global, SlotAlloc};
use crate::types::{compare, hash, ParamHash};

/// Three-way comparison of two slots' values.
///
/// # Safety
/// Both slots must hold a live `T`.
#[inline]
pub unsafe fn compare_slots<T: PartialOrd>(x: &Slot, y: &Slot) -> i32 {
    // SAFETY: forwarded contract.
    unsafe { compare(lifecycle::const_access::<T>(x), lifecycle::const_access::<T>(y)) }
}

/// Equality of two slots' values.
///
/// # Safety
/// Both slots must hold a live `T`.
#[inline]
pub unsafe fn equal_slots<T: PartialEq>(x: &Slot, y: &Slot) -> bool {
    // SAFETY: forwarded contract.
    unsafe { lifecycle::const_access::<T>(x) == lifecycle::const_access::<T>(y) }
}

/// Hash code of a slot's value.
///
/// # Safety
/// `slot` must hold a live `T`.
#[inline]
pub unsafe fn hash_slot<T: ParamHash>(slot: &Slot) -> i32 {
    // SAFETY: forwarded contract.
    hash(unsafe { lifecycle::const_access::<T>(slot) })
}

/// Copies a slot's value into a fresh slot backed by `alloc`.
///
/// # Safety
/// `slot` must hold a live `T`.
#[inline]
pub unsafe fn duplicate_in<T: Clone, A: SlotAlloc + ?Sized>(slot: &Slot, alloc: &A) -> Slot {
    // SAFETY: forwarded contract.
    lifecycle::copy_in(unsafe { lifecycle::const_access::<T>(slot) }, alloc)
}

/// Copies a slot's value into a fresh slot.
///
/// # Safety
/// `slot` must hold a live `T`.
#[inline]
pub unsafe fn duplicate<T: Clone>(slot: &Slot) -> Slot {
    // SAFETY: forwarded contract.
    unsafe { duplicate_in::<T, _>(slot, &Global) }
}
