//! Numeric identities for pointers and integers.
//!
//! [`IdWord`] is exactly as wide as a pointer on the target, so a pointer's
//! identity is its address bits with nothing lost or added.

use core::ptr::NonNull;
use num_traits::AsPrimitive;

/// Unsigned integer as wide as a pointer.
#[cfg(target_pointer_width = "64")]
pub type IdWord = u64;

/// Unsigned integer as wide as a pointer.
#[cfg(target_pointer_width = "32")]
pub type IdWord = u32;

/// Unsigned integer as wide as a pointer.
#[cfg(target_pointer_width = "16")]
pub type IdWord = u16;

const _: () = assert!(core::mem::size_of::<IdWord>() == core::mem::size_of::<*const ()>());

/// Conversion into a pointer-width identity.
pub trait IdNumber {
    /// Returns the identity of `self`.
    fn id_number(self) -> IdWord;
}

#[inline(always)]
fn address_bits<T: ?Sized>(ptr: *const T) -> IdWord {
    // `IdWord` and `usize` have the same width, so this keeps every bit.
    ptr.cast::<()>() as usize as IdWord
}

impl<T: ?Sized> IdNumber for *const T {
    #[inline]
    fn id_number(self) -> IdWord {
        address_bits(self)
    }
}

impl<T: ?Sized> IdNumber for *mut T {
    #[inline]
    fn id_number(self) -> IdWord {
        address_bits(self.cast_const())
    }
}

impl<T: ?Sized> IdNumber for &T {
    #[inline]
    fn id_number(self) -> IdWord {
        address_bits(self)
    }
}

impl<T: ?Sized> IdNumber for NonNull<T> {
    #[inline]
    fn id_number(self) -> IdWord {
        address_bits(self.as_ptr().cast_const())
    }
}

macro_rules! impl_integer_id {
    ($($ty:ty),*) => {$(
        impl IdNumber for $ty {
            #[inline]
            fn id_number(self) -> IdWord {
                AsPrimitive::<IdWord>::as_(self)
            }
        }
    )*};
}

impl_integer_id!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Returns the pointer-width identity of `x`.
#[inline]
pub fn id_number<X: IdNumber>(x: X) -> IdWord {
    x.id_number()
}
