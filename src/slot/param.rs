//! An owning, typed handle over a [`Slot`].
//!
//! The handle is the same width as the slot when the allocator is zero-sized
//! (as [`Global`] is). Its type parameter plays the role of the tag: the value
//! is created on construction, duplicated only through `Clone`, and cleared
//! exactly once, either by `Drop` or by the consuming [`ParamSlot::clear`].

use super::{lifecycle, Classified, SizeClass, Slot};
use crate::alloc::{AllocError, Global, SlotAlloc};
use crate::error::SlotError;
use crate::types::ParamType;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::str::FromStr;

/// A slot that owns a value of type `T`.
pub struct ParamSlot<T, A: SlotAlloc = Global> {
    slot: Slot,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T> ParamSlot<T> {
    /// Creates a slot holding `T::default()`.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::new_in(Global)
    }

    /// Creates a slot holding a clone of `value`.
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::copy_in(value, Global)
    }

    /// Creates a slot that takes ownership of `value`.
    pub fn from_value(value: T) -> Self {
        Self::from_value_in(value, Global)
    }
}

impl<T, A: SlotAlloc> ParamSlot<T, A> {
    /// Creates a slot holding `T::default()`, allocating from `alloc` if `T` is big.
    pub fn new_in(alloc: A) -> Self
    where
        T: Default,
    {
        let slot = lifecycle::create_in::<T, A>(&alloc);
        // SAFETY: `slot` holds a live `T` from `alloc`.
        unsafe { Self::from_raw_parts(slot, alloc) }
    }

    /// Fallible form of [`ParamSlot::new_in`].
    ///
    /// # Errors
    /// Returns `AllocError` if the allocator refuses the block.
    pub fn try_new_in(alloc: A) -> Result<Self, AllocError>
    where
        T: Default,
    {
        let slot = lifecycle::try_create_in::<T, A>(&alloc)?;
        // SAFETY: `slot` holds a live `T` from `alloc`.
        Ok(unsafe { Self::from_raw_parts(slot, alloc) })
    }

    /// Creates a slot holding a clone of `value`, allocating from `alloc` if `T` is big.
    pub fn copy_in(value: &T, alloc: A) -> Self
    where
        T: Clone,
    {
        let slot = lifecycle::copy_in(value, &alloc);
        // SAFETY: `slot` holds a live `T` from `alloc`.
        unsafe { Self::from_raw_parts(slot, alloc) }
    }

    /// Creates a slot owning `value`, allocating from `alloc` if `T` is big.
    pub fn from_value_in(value: T, alloc: A) -> Self {
        match Self::try_from_value_in(value, alloc) {
            Ok(param) => param,
            Err(AllocError) => std::alloc::handle_alloc_error(core::alloc::Layout::new::<T>()),
        }
    }

    /// Fallible form of [`ParamSlot::from_value_in`].
    ///
    /// # Errors
    /// Returns `AllocError` if the allocator refuses the block.
    pub fn try_from_value_in(value: T, alloc: A) -> Result<Self, AllocError> {
        let slot = lifecycle::emplace_in(value, &alloc)?;
        // SAFETY: `slot` holds a live `T` from `alloc`.
        Ok(unsafe { Self::from_raw_parts(slot, alloc) })
    }

    /// Takes ownership of a raw slot.
    ///
    /// # Safety
    /// `slot` must hold a live `T` whose block (if any) belongs to `alloc`,
    /// and nothing else may clear it.
    pub unsafe fn from_raw_parts(slot: Slot, alloc: A) -> Self {
        Self {
            slot,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Releases ownership of the raw slot without clearing it.
    pub fn into_raw_parts(self) -> (Slot, A) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so each field is moved out exactly once.
        unsafe { (ptr::read(&this.slot), ptr::read(&this.alloc)) }
    }

    /// Moves the value out, releasing its block.
    pub fn into_inner(self) -> T {
        let (mut slot, alloc) = self.into_raw_parts();
        // SAFETY: the handle owned a live `T` from `alloc`.
        unsafe { lifecycle::take_in::<T, A>(&mut slot, &alloc) }
    }

    /// Destroys the value now rather than at scope end.
    pub fn clear(self) {
        drop(self);
    }

    /// Returns the value.
    #[inline]
    pub fn get(&self) -> &T {
        // SAFETY: the handle always holds a live `T`.
        unsafe { lifecycle::const_access::<T>(&self.slot) }
    }

    /// Returns the value mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        // SAFETY: the handle always holds a live `T`; `&mut self` is exclusive.
        unsafe { lifecycle::access::<T>(&mut self.slot) }
    }

    /// Replaces the value, returning the old one.
    pub fn replace(&mut self, value: T) -> T {
        core::mem::replace(self.get_mut(), value)
    }

    /// Resets the value to its type's default.
    pub fn reset(&mut self)
    where
        T: ParamType,
    {
        T::init_default(self.get_mut());
    }

    /// Returns the underlying slot.
    #[inline]
    pub fn as_slot(&self) -> &Slot {
        &self.slot
    }

    /// Returns the allocator backing big values.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns `T`'s storage strategy.
    pub const fn size_class(&self) -> SizeClass {
        <T as Classified>::SIZE_CLASS
    }

    /// Returns `true` if the value lives in the slot's own bytes.
    pub const fn is_inline(&self) -> bool {
        <T as Classified>::IS_SMALL
    }
}

impl<T, A: SlotAlloc> Drop for ParamSlot<T, A> {
    fn drop(&mut self) {
        // SAFETY: the handle holds a live `T` from `self.alloc`, cleared only here.
        unsafe { lifecycle::clear_in::<T, A>(&mut self.slot, &self.alloc) }
    }
}

impl<T: Clone, A: SlotAlloc + Clone> Clone for ParamSlot<T, A> {
    fn clone(&self) -> Self {
        Self::copy_in(self.get(), self.alloc.clone())
    }
}

impl<T: Default> Default for ParamSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for ParamSlot<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T, A: SlotAlloc> Deref for ParamSlot<T, A> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, A: SlotAlloc> DerefMut for ParamSlot<T, A> {
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T: fmt::Debug, A: SlotAlloc> fmt::Debug for ParamSlot<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParamSlot").field(self.get()).finish()
    }
}

impl<T: fmt::Display, A: SlotAlloc> fmt::Display for ParamSlot<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

impl<T: PartialEq, A: SlotAlloc, B: SlotAlloc> PartialEq<ParamSlot<T, B>> for ParamSlot<T, A> {
    fn eq(&self, other: &ParamSlot<T, B>) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq, A: SlotAlloc> Eq for ParamSlot<T, A> {}

impl<T: PartialOrd, A: SlotAlloc> PartialOrd for ParamSlot<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T: Ord, A: SlotAlloc> Ord for ParamSlot<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<T> FromStr for ParamSlot<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<T>()
            .map(Self::from_value)
            .map_err(|e| SlotError::Parse {
                type_name: core::any::type_name::<T>(),
                message: e.to_string(),
            })
    }
}

// SAFETY: the handle owns its `T` exclusively; thread safety follows `T` and `A`.
unsafe impl<T: Send, A: SlotAlloc + Send> Send for ParamSlot<T, A> {}
unsafe impl<T: Sync, A: SlotAlloc + Sync> Sync for ParamSlot<T, A> {}
