//! Per-type metadata: tag, name and default value.
//!
//! The free functions [`type_id`], [`type_name`] and [`init_default`] answer
//! for every type. Built-in scalars and raw pointers get their own tag and
//! name; everything else reports [`TypeKind::Unknown`] and `"unknown"`.
//! [`ParamType`] is the registration point for types that want their own
//! metadata in descriptors and in [`ParamSlot::reset`](crate::ParamSlot::reset).

use super::TypeKind;
use core::any::TypeId;
use num_traits::Zero;

/// Registered metadata for a slot-storable type.
///
/// `TYPE_ID` and `TYPE_NAME` fall back to [`TypeKind::Unknown`] and
/// `"unknown"`. [`param_type!`](crate::param_type) implements the trait with
/// [`value_init`] as `init_default`:
///
/// ```rust
/// use genslot::types::{descriptor, type_name, ParamType};
///
/// #[derive(Default)]
/// struct Point { x: f64, y: f64 }
/// genslot::param_type!(Point, "point");
///
/// assert_eq!(<Point as ParamType>::TYPE_NAME, "point");
/// assert_eq!(descriptor::<Point>().name, "point");
/// // The free function needs no registration and reports the fallback.
/// assert_eq!(type_name::<Point>(), "unknown");
/// ```
pub trait ParamType: Sized {
    /// Tag of the type.
    const TYPE_ID: TypeKind = TypeKind::Unknown;
    /// Human-readable name of the type.
    const TYPE_NAME: &'static str = "unknown";

    /// Assigns the type's default value to `x`.
    fn init_default(x: &mut Self);
}

/// Assigns `T::default()` to `x`.
#[inline]
pub fn value_init<T: Default>(x: &mut T) {
    *x = T::default();
}

macro_rules! for_each_builtin {
    ($m:ident) => {
        $m! {
            i8 => TypeKind::Char, "char";
            i16 => TypeKind::Short, "short";
            i32 => TypeKind::Int, "int";
            i64 => TypeKind::Long, "long";
            isize => TypeKind::pointer_width_integer(), "long";
            u8 => TypeKind::Unknown, "unsigned char";
            u16 => TypeKind::Unknown, "unsigned short";
            u32 => TypeKind::Unknown, "unsigned int";
            u64 => TypeKind::Unknown, "unsigned long";
            usize => TypeKind::Unknown, "unsigned long";
            f32 => TypeKind::Float, "float";
            f64 => TypeKind::Double, "double";
        }
    };
}

// Raw pointers are generic over their pointee, so they are recognized by the
// shape of the compiler's type name rather than by `TypeId`.
#[inline]
fn is_raw_pointer<T: ?Sized>() -> bool {
    let name = core::any::type_name::<T>();
    name.starts_with("*const ") || name.starts_with("*mut ")
}

/// Tag and name of the built-in types, `None` for everything else.
fn builtin<T: ?Sized + 'static>() -> Option<(TypeKind, &'static str)> {
    macro_rules! lookup {
        ($($ty:ty => $kind:expr, $name:literal;)*) => {$(
            if TypeId::of::<T>() == TypeId::of::<$ty>() {
                return Some(($kind, $name));
            }
        )*};
    }

    for_each_builtin!(lookup);
    lookup! { bool => TypeKind::Unknown, "bool"; }

    if is_raw_pointer::<T>() {
        Some((TypeKind::Ptr, "pointer"))
    } else {
        None
    }
}

/// Returns the tag of `T`, or [`TypeKind::Unknown`] if `T` has none.
#[inline]
pub fn type_id<T: ?Sized + 'static>() -> TypeKind {
    builtin::<T>().map_or(TypeKind::Unknown, |(kind, _)| kind)
}

/// Returns the name of `T`, or `"unknown"` if `T` has none.
#[inline]
pub fn type_name<T: ?Sized + 'static>() -> &'static str {
    builtin::<T>().map_or("unknown", |(_, name)| name)
}

/// Assigns the default value of `T` to `x`.
///
/// Scalars become zero, `bool` becomes `false`, and any other type is
/// value-initialized with `T::default()`.
#[inline]
pub fn init_default<T: Default>(x: &mut T) {
    value_init(x);
}

/// Implements [`ParamType`](crate::types::ParamType) with the generic
/// fallbacks: unknown tag, `Default`-based `init_default`, and either
/// `"unknown"` or the given name.
#[macro_export]
macro_rules! param_type {
    ($ty:ty) => {
        impl $crate::types::ParamType for $ty {
            #[inline]
            fn init_default(x: &mut Self) {
                $crate::types::value_init(x);
            }
        }
    };
    ($ty:ty, $name:expr) => {
        impl $crate::types::ParamType for $ty {
            const TYPE_NAME: &'static str = $name;

            #[inline]
            fn init_default(x: &mut Self) {
                $crate::types::value_init(x);
            }
        }
    };
}

macro_rules! impl_scalar_param_type {
    ($($ty:ty => $kind:expr, $name:literal;)*) => {$(
        impl ParamType for $ty {
            const TYPE_ID: TypeKind = $kind;
            const TYPE_NAME: &'static str = $name;

            #[inline]
            fn init_default(x: &mut Self) {
                *x = <$ty as Zero>::zero();
            }
        }
    )*};
}

for_each_builtin!(impl_scalar_param_type);

impl ParamType for bool {
    const TYPE_NAME: &'static str = "bool";

    #[inline]
    fn init_default(x: &mut Self) {
        *x = false;
    }
}

impl<T> ParamType for *const T {
    const TYPE_ID: TypeKind = TypeKind::Ptr;
    const TYPE_NAME: &'static str = "pointer";

    #[inline]
    fn init_default(x: &mut Self) {
        *x = core::ptr::null();
    }
}

impl<T> ParamType for *mut T {
    const TYPE_ID: TypeKind = TypeKind::Ptr;
    const TYPE_NAME: &'static str = "pointer";

    #[inline]
    fn init_default(x: &mut Self) {
        *x = core::ptr::null_mut();
    }
}

param_type!(String);

impl<T> ParamType for Vec<T> {
    #[inline]
    fn init_default(x: &mut Self) {
        x.clear();
    }
}

impl<T> ParamType for Option<T> {
    #[inline]
    fn init_default(x: &mut Self) {
        *x = None;
    }
}
