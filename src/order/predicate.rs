//! Strict-weak-order predicates built from three-way comparisons.

use super::Comparator;
use crate::types::compare;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

/// A "strictly before" relation usable by sorting and searching.
pub trait StrictOrder<T: ?Sized> {
    /// Returns `true` iff `x` orders strictly before `y`.
    fn less(&self, x: &T, y: &T) -> bool;

    /// Derives an [`Ordering`] from two `less` calls.
    #[inline]
    fn ordering(&self, x: &T, y: &T) -> Ordering {
        if self.less(x, y) {
            Ordering::Less
        } else if self.less(y, x) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Sorts `items` (stable) by this order.
    fn sort(&self, items: &mut [T])
    where
        T: Sized,
    {
        items.sort_by(|a, b| self.ordering(a, b));
    }

    /// Index of the first element of sorted `items` that `x` does not order after.
    fn insertion_point(&self, items: &[T], x: &T) -> usize
    where
        T: Sized,
    {
        items.partition_point(|e| self.less(e, x))
    }
}

/// Orders by [`compare`].
pub struct SmallerDefault<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> SmallerDefault<T> {
    /// Creates the predicate.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for SmallerDefault<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for SmallerDefault<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for SmallerDefault<T> {}

impl<T: ?Sized> fmt::Debug for SmallerDefault<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SmallerDefault")
    }
}

impl<T: PartialOrd + ?Sized> StrictOrder<T> for SmallerDefault<T> {
    #[inline]
    fn less(&self, x: &T, y: &T) -> bool {
        compare(x, y) < 0
    }
}

/// Orders by a plain comparison function.
pub struct SmallerCmpFn<T: ?Sized> {
    cmp: fn(&T, &T) -> i32,
}

impl<T: ?Sized> SmallerCmpFn<T> {
    /// Wraps `cmp`.
    pub const fn new(cmp: fn(&T, &T) -> i32) -> Self {
        Self { cmp }
    }
}

impl<T: ?Sized> Clone for SmallerCmpFn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for SmallerCmpFn<T> {}

impl<T: ?Sized> fmt::Debug for SmallerCmpFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmallerCmpFn").finish_non_exhaustive()
    }
}

impl<T: ?Sized> StrictOrder<T> for SmallerCmpFn<T> {
    #[inline]
    fn less(&self, x: &T, y: &T) -> bool {
        (self.cmp)(x, y) < 0
    }
}

/// Orders by a borrowed comparator object.
///
/// The comparator must outlive the predicate; the lifetime enforces it.
pub struct SmallerCmpObj<'a, T: ?Sized, C: Comparator<T> + ?Sized> {
    cmp: &'a C,
    _marker: PhantomData<fn(&T)>,
}

impl<'a, T: ?Sized, C: Comparator<T> + ?Sized> SmallerCmpObj<'a, T, C> {
    /// Borrows `cmp`.
    pub const fn new(cmp: &'a C) -> Self {
        Self {
            cmp,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Clone for SmallerCmpObj<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Copy for SmallerCmpObj<'_, T, C> {}

impl<T: ?Sized, C: Comparator<T> + ?Sized> fmt::Debug for SmallerCmpObj<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmallerCmpObj").finish_non_exhaustive()
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> StrictOrder<T> for SmallerCmpObj<'_, T, C> {
    #[inline]
    fn less(&self, x: &T, y: &T) -> bool {
        self.cmp.compare(x, y) < 0
    }
}
