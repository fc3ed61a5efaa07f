use super::id::IdNumber;
use core::ptr::NonNull;
use num_traits::AsPrimitive;

/// Hash codes for slot values.
///
/// There is no blanket implementation: hashing a type that does not
/// implement this trait fails to compile.
pub trait ParamHash {
    /// Returns the hash code of `self`.
    fn param_hash(&self) -> i32;
}

macro_rules! impl_numeric_hash {
    ($($ty:ty),*) => {$(
        impl ParamHash for $ty {
            #[inline]
            fn param_hash(&self) -> i32 {
                AsPrimitive::<i32>::as_(*self)
            }
        }
    )*};
}

impl_numeric_hash!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: ?Sized> ParamHash for *const T {
    #[inline]
    fn param_hash(&self) -> i32 {
        // Low bits of the address.
        (*self).id_number() as i32
    }
}

impl<T: ?Sized> ParamHash for *mut T {
    #[inline]
    fn param_hash(&self) -> i32 {
        (*self).id_number() as i32
    }
}

impl<T: ?Sized> ParamHash for NonNull<T> {
    #[inline]
    fn param_hash(&self) -> i32 {
        (*self).id_number() as i32
    }
}

/// Returns the hash code of `x`.
#[inline]
pub fn hash<T: ParamHash + ?Sized>(x: &T) -> i32 {
    x.param_hash()
}
