//! A slot with a liveness flag.
//!
//! The raw operations leave liveness to the caller. `CheckedSlot` tracks it and
//! turns the undefined cases (reading or clearing a dead slot, creating over a
//! live one) into reports through [`undefined_operation`].

use super::{lifecycle, Slot};
use crate::error::{undefined_operation, SlotError};
use core::fmt;
use core::marker::PhantomData;

/// A slot for `T` that knows whether it currently holds a value.
pub struct CheckedSlot<T> {
    slot: Slot,
    live: bool,
    _marker: PhantomData<T>,
}

impl<T> CheckedSlot<T> {
    /// Returns an empty slot.
    pub const fn uninit() -> Self {
        Self {
            slot: Slot::uninit(),
            live: false,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the slot holds a value.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    #[inline]
    fn expect_dead(&self, op: &str) {
        if self.live {
            undefined_operation(&format!("{op} on a live slot"));
        }
    }

    #[inline]
    fn expect_live(&self, op: &str) {
        if !self.live {
            undefined_operation(&format!("{op} on uninitialized slot"));
        }
    }

    /// Stores `T::default()`.
    pub fn create(&mut self)
    where
        T: Default,
    {
        self.expect_dead("create");
        self.slot = lifecycle::create::<T>();
        self.live = true;
    }

    /// Stores a clone of `value`.
    pub fn copy_from(&mut self, value: &T)
    where
        T: Clone,
    {
        self.expect_dead("copy");
        self.slot = lifecycle::copy(value);
        self.live = true;
    }

    /// Destroys the held value.
    pub fn clear(&mut self) {
        self.expect_live("clear");
        self.live = false;
        // SAFETY: the flag said the slot held a live `T` from `Global`.
        unsafe { lifecycle::clear::<T>(&mut self.slot) }
    }

    /// Returns the held value mutably.
    pub fn access(&mut self) -> &mut T {
        self.expect_live("access");
        // SAFETY: live, and `&mut self` is exclusive.
        unsafe { lifecycle::access::<T>(&mut self.slot) }
    }

    /// Returns the held value.
    pub fn const_access(&self) -> &T {
        self.expect_live("const_access");
        // SAFETY: live.
        unsafe { lifecycle::const_access::<T>(&self.slot) }
    }

    /// Returns the held value, or an error if the slot is empty.
    ///
    /// # Errors
    /// Returns `SlotError::Uninitialized` if the slot holds no value.
    pub fn try_access(&self) -> Result<&T, SlotError> {
        if self.live {
            // SAFETY: live.
            Ok(unsafe { lifecycle::const_access::<T>(&self.slot) })
        } else {
            Err(SlotError::Uninitialized { op: "access" })
        }
    }
}

impl<T> Default for CheckedSlot<T> {
    fn default() -> Self {
        Self::uninit()
    }
}

impl<T> Drop for CheckedSlot<T> {
    fn drop(&mut self) {
        if self.live {
            self.clear();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CheckedSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_access() {
            Ok(value) => f.debug_tuple("CheckedSlot").field(value).finish(),
            Err(_) => f.write_str("CheckedSlot(<uninit>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_lifecycle() {
        let mut s = CheckedSlot::<u8>::uninit();
        assert!(!s.is_live());
        assert_eq!(s.try_access(), Err(SlotError::Uninitialized { op: "access" }));
        s.copy_from(&9);
        assert_eq!(*s.const_access(), 9);
        *s.access() += 1;
        assert_eq!(format!("{s:?}"), "CheckedSlot(10)");
        s.clear();
        assert!(!s.is_live());
        s.create();
        assert_eq!(*s.const_access(), 0);
    }

    #[test]
    #[should_panic(expected = "undefined operation: clear on uninitialized slot")]
    fn test_double_clear_is_reported() {
        let mut s = CheckedSlot::<String>::uninit();
        s.copy_from(&String::from("once"));
        s.clear();
        s.clear();
    }
}
