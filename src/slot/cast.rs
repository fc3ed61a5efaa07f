//! Slot images of existing values.
//!
//! [`cast`] turns `&T` into something a slot-based container can read as a
//! slot without going through `create`/`copy`. Which representation comes
//! back depends on `T`'s size, and the three cases differ in ownership:
//!
//! | `size_of::<T>()` vs. slot | variant              | owns a value? |
//! |---------------------------|----------------------|---------------|
//! | larger (or over-aligned)  | [`SlotView::Address`] | no, borrows   |
//! | equal                     | [`SlotView::Bits`]    | no, borrows   |
//! | smaller                   | [`SlotView::Owned`]   | yes, a copy   |
//!
//! Borrowed views are tied to the source value's lifetime and are never
//! cleared. The owned view clears its copy when dropped.

use super::{lifecycle, raw, CastKind, Classified, ParamSlot, Slot};

/// A slot representation of a value, produced by [`cast`].
#[derive(Debug)]
pub enum SlotView<'a, T> {
    /// The slot holds the address of `value`.
    Address {
        /// Slot image.
        slot: Slot,
        /// The value the slot points to.
        value: &'a T,
    },
    /// The slot holds a bitwise image of `value`. It must never be cleared.
    Bits {
        /// Slot image.
        slot: Slot,
        /// The value the bits were taken from.
        value: &'a T,
    },
    /// The slot owns a copy of the value.
    Owned(ParamSlot<T>),
}

impl<T> SlotView<'_, T> {
    /// Returns the representation this view uses.
    pub fn kind(&self) -> CastKind {
        match self {
            Self::Address { .. } => CastKind::Address,
            Self::Bits { .. } => CastKind::Bits,
            Self::Owned(_) => CastKind::Copy,
        }
    }

    /// Returns `true` if the view owns a copy of the value.
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Returns the slot representation.
    pub fn as_slot(&self) -> &Slot {
        match self {
            Self::Address { slot, .. } | Self::Bits { slot, .. } => slot,
            Self::Owned(param) => param.as_slot(),
        }
    }

    /// Decodes the slot representation back into `&T`.
    pub fn get(&self) -> &T {
        // SAFETY: every variant holds a valid slot image of a live `T`: an
        // address for big types, the value's bytes for small ones.
        unsafe { lifecycle::const_access::<T>(self.as_slot()) }
    }
}

/// Returns a slot representation of `value` without going through `create`.
///
/// Only types smaller than a slot are copied; see the module docs.
pub fn cast<T: Clone>(value: &T) -> SlotView<'_, T> {
    match <T as Classified>::CAST_KIND {
        CastKind::Address => SlotView::Address {
            slot: raw::from_address(value),
            value,
        },
        CastKind::Bits => SlotView::Bits {
            // SAFETY: `T` is small; the image lives in a `Bits` view that is never cleared.
            slot: unsafe { raw::from_bits(value) },
            value,
        },
        CastKind::Copy => SlotView::Owned(ParamSlot::from_ref(value)),
    }
}
