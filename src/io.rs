//! Text input and output for slots.
//!
//! Typed slots read and print through their value type (`FromStr` /
//! `Display` on [`ParamSlot`](crate::ParamSlot), [`display`] for raw slots).
//! An untyped [`Slot`] has no target type to parse into, so its input path
//! always fails with [`SlotError::StreamInputUndefined`] and leaves both the
//! reader and the slot untouched.

use crate::error::SlotError;
use crate::slot::{const_access, Slot};
use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;
use std::io::BufRead;

impl FromStr for Slot {
    type Err = SlotError;

    fn from_str(_s: &str) -> Result<Self, Self::Err> {
        Err(SlotError::StreamInputUndefined)
    }
}

/// Formatted input into an untyped slot.
///
/// # Errors
/// Always returns `SlotError::StreamInputUndefined`; nothing is consumed from
/// `input` and `out` is not written.
pub fn read_untyped<R: BufRead + ?Sized>(_input: &mut R, _out: &mut Slot) -> Result<(), SlotError> {
    Err(SlotError::StreamInputUndefined)
}

/// `Display` adapter for the `T` held in a raw slot.
pub struct SlotDisplay<'a, T> {
    slot: &'a Slot,
    _marker: PhantomData<&'a T>,
}

/// Returns a `Display` adapter for the `T` held in `slot`.
///
/// # Safety
/// `slot` must hold a live `T` for as long as the adapter is used.
pub unsafe fn display<T: fmt::Display>(slot: &Slot) -> SlotDisplay<'_, T> {
    SlotDisplay {
        slot,
        _marker: PhantomData,
    }
}

impl<T: fmt::Display> fmt::Display for SlotDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: guaranteed by the caller of `display`.
        fmt::Display::fmt(unsafe { const_access::<T>(self.slot) }, f)
    }
}
