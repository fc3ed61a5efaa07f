//! The pointer-sized value slot and its lifecycle.
//!
//! A [`Slot`] is an untyped cell one pointer wide. The type stored in it is a
//! property of the call site: every operation is generic over `T` and picks the
//! in-place or the indirect strategy from `T`'s size class at compile time.
//!
//! Three layers are provided:
//! - the raw operations ([`create`], [`copy`], [`clear`], [`access`],
//!   [`const_access`], [`cast`]) where the caller tracks liveness;
//! - [`ParamSlot`], an owning handle that clears exactly once on drop;
//! - [`CheckedSlot`], a slot plus a liveness flag that reports misuse through
//!   [`undefined_operation`](crate::error::undefined_operation).

use core::fmt;
use core::mem::MaybeUninit;

pub mod call;
pub mod cast;
pub mod checked;
pub mod lifecycle;
pub mod param;
pub(crate) mod raw;
pub mod size_class;

pub use call::{compare_slots, duplicate, duplicate_in, equal_slots, hash_slot};
pub use cast::{cast, SlotView};
pub use checked::CheckedSlot;
pub use lifecycle::{
    access, clear, clear_in, const_access, copy, copy_in, create, create_in, emplace_in, take_in,
    try_copy_in, try_create_in,
};
pub use param::ParamSlot;
pub use size_class::{
    cast_kind, fits_inline, is_small, size_class, CastKind, Classified, SizeClass, SLOT_ALIGN,
    SLOT_SIZE,
};

/// An untyped storage cell exactly one pointer wide.
///
/// Holds either the bytes of a small value or the address of a big one. The
/// slot carries no type tag and no liveness flag; see the module docs for the
/// checked alternatives.
#[repr(transparent)]
pub struct Slot {
    word: MaybeUninit<*mut ()>,
}

impl Slot {
    /// Returns a slot holding no value.
    #[inline]
    pub const fn uninit() -> Self {
        Self {
            word: MaybeUninit::uninit(),
        }
    }

    /// Raw pointer to the slot's bytes.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.word.as_ptr().cast::<u8>()
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::uninit()
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").finish_non_exhaustive()
    }
}
