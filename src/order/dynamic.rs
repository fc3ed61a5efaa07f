//! Heterogeneous comparators behind one type.
//!
//! Containers that must store "some comparator for `T`" without naming its
//! type keep a `DynComparator`. Calls go through `dyn Comparator<T>`. Whether
//! the comparator is owned or borrowed is part of the variant, not a flag.

use super::Comparator;
use crate::error::{undefined_operation, SlotError};
use core::fmt;

/// A comparator for `T` behind dynamic dispatch.
pub enum DynComparator<'a, T: ?Sized> {
    /// No comparison configured. Comparing through it is a precondition violation.
    Undefined,
    /// A plain comparison function.
    Function(fn(&T, &T) -> i32),
    /// A comparator owned elsewhere that outlives this one.
    Borrowed(&'a dyn Comparator<T>),
    /// A heap-allocated comparator owned by this value.
    Owned(Box<dyn Comparator<T> + 'a>),
}

impl<'a, T: ?Sized> DynComparator<'a, T> {
    /// Wraps a comparison function.
    pub const fn from_fn(cmp: fn(&T, &T) -> i32) -> Self {
        Self::Function(cmp)
    }

    /// Borrows a comparator.
    pub fn borrowed(cmp: &'a dyn Comparator<T>) -> Self {
        Self::Borrowed(cmp)
    }

    /// Takes ownership of a comparator, moving it to the heap.
    pub fn owned<C: Comparator<T> + 'a>(cmp: C) -> Self {
        Self::Owned(Box::new(cmp))
    }

    /// Returns `true` if this value owns a heap-allocated comparator.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Returns `true` unless this is [`DynComparator::Undefined`].
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Compares `x` and `y`, or reports that no comparison is configured.
    ///
    /// # Errors
    /// Returns `SlotError::CompareUndefined` for [`DynComparator::Undefined`].
    pub fn try_compare(&self, x: &T, y: &T) -> Result<i32, SlotError> {
        match self {
            Self::Undefined => Err(SlotError::CompareUndefined),
            Self::Function(cmp) => Ok(cmp(x, y)),
            Self::Borrowed(cmp) => Ok(cmp.compare(x, y)),
            Self::Owned(cmp) => Ok(cmp.compare(x, y)),
        }
    }
}

impl<T: ?Sized> Default for DynComparator<'_, T> {
    fn default() -> Self {
        Self::Undefined
    }
}

impl<T: ?Sized> Comparator<T> for DynComparator<'_, T> {
    fn compare(&self, x: &T, y: &T) -> i32 {
        match self.try_compare(x, y) {
            Ok(result) => result,
            Err(_) => undefined_operation("DynComparator: compare undefined"),
        }
    }
}

impl<T: ?Sized> From<fn(&T, &T) -> i32> for DynComparator<'_, T> {
    fn from(cmp: fn(&T, &T) -> i32) -> Self {
        Self::Function(cmp)
    }
}

impl<T: ?Sized> fmt::Debug for DynComparator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Self::Undefined => "Undefined",
            Self::Function(_) => "Function",
            Self::Borrowed(_) => "Borrowed",
            Self::Owned(_) => "Owned",
        };
        write!(f, "DynComparator::{variant}")
    }
}
