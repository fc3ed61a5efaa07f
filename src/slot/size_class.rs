//! Compile-time size-class selection.
//!
//! A type is *small* when it fits in the slot word (size and alignment both no
//! larger than a pointer's) and *big* otherwise. Every lifecycle operation reads
//! the same associated constant, so a type can never be created one way and
//! cleared the other.

use core::mem::{align_of, size_of};
use serde::{Deserialize, Serialize};

/// Width of a slot in bytes.
pub const SLOT_SIZE: usize = size_of::<*mut ()>();

/// Alignment of a slot in bytes.
pub const SLOT_ALIGN: usize = align_of::<*mut ()>();

/// Storage strategy of a type inside a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    /// Stored in place; the slot's bytes are the value's bytes.
    Small,
    /// Stored behind a heap allocation; the slot's bytes are the pointer's bytes.
    Big,
}

/// How [`cast`](super::cast) represents a borrowed value as a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastKind {
    /// Bigger than a slot: the slot holds the value's address.
    Address,
    /// Exactly slot sized: the slot holds a bitwise image of the value.
    Bits,
    /// Smaller than a slot: the slot holds an owned copy.
    Copy,
}

/// Returns `true` if a value with this size and alignment is stored in place.
#[inline(always)]
pub const fn fits_inline(size: usize, align: usize) -> bool {
    size <= SLOT_SIZE && align <= SLOT_ALIGN
}

/// Returns `true` if `T` is stored in place.
#[inline(always)]
pub const fn is_small<T>() -> bool {
    fits_inline(size_of::<T>(), align_of::<T>())
}

/// Returns the size class of `T`.
#[inline(always)]
pub const fn size_class<T>() -> SizeClass {
    if is_small::<T>() {
        SizeClass::Small
    } else {
        SizeClass::Big
    }
}

/// Returns the cast representation of `T`.
#[inline(always)]
pub const fn cast_kind<T>() -> CastKind {
    if !is_small::<T>() {
        CastKind::Address
    } else if size_of::<T>() == SLOT_SIZE {
        CastKind::Bits
    } else {
        CastKind::Copy
    }
}

/// Size-class constants for every type.
///
/// The constants are evaluated during monomorphization; branching on them
/// leaves a single unconditional path in each instantiation.
pub trait Classified: Sized {
    /// `true` when `Self` is stored in place.
    const IS_SMALL: bool;
    /// The storage strategy for `Self`.
    const SIZE_CLASS: SizeClass;
    /// The [`cast`](super::cast) representation for `Self`.
    const CAST_KIND: CastKind;
}

impl<T> Classified for T {
    const IS_SMALL: bool = is_small::<T>();
    const SIZE_CLASS: SizeClass = size_class::<T>();
    const CAST_KIND: CastKind = cast_kind::<T>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(align(32))]
    struct OverAligned;

    #[test]
    fn test_scalars_are_small() {
        assert!(is_small::<u8>());
        assert!(is_small::<i32>());
        assert!(is_small::<usize>());
        assert!(is_small::<*const u8>());
        assert!(is_small::<()>());
        assert_eq!(size_class::<f32>(), SizeClass::Small);
    }

    #[test]
    fn test_pointer_sized_boundary_is_small() {
        assert_eq!(size_class::<usize>(), SizeClass::Small);
        assert_eq!(size_class::<Box<u64>>(), SizeClass::Small);
        assert_eq!(size_class::<[usize; 2]>(), SizeClass::Big);
        assert_eq!(size_class::<String>(), SizeClass::Big);
    }

    #[test]
    fn test_over_aligned_zst_is_big() {
        assert_eq!(core::mem::size_of::<OverAligned>(), 0);
        assert_eq!(size_class::<OverAligned>(), SizeClass::Big);
        assert_eq!(cast_kind::<OverAligned>(), CastKind::Address);
    }

    #[test]
    fn test_cast_kinds() {
        assert_eq!(cast_kind::<u8>(), CastKind::Copy);
        assert_eq!(cast_kind::<usize>(), CastKind::Bits);
        assert_eq!(cast_kind::<&str>(), CastKind::Address);
        assert_eq!(<u16 as Classified>::CAST_KIND, CastKind::Copy);
    }

    #[test]
    fn test_trait_constants_agree_with_functions() {
        assert_eq!(<[u8; 3] as Classified>::IS_SMALL, is_small::<[u8; 3]>());
        assert_eq!(<Vec<u8> as Classified>::SIZE_CLASS, SizeClass::Big);
    }
}
