use super::{ParamType, TypeKind};
use crate::slot::{CastKind, Classified, SizeClass};
use serde::{Deserialize, Serialize};

/// A materialized snapshot of everything the crate knows about a type.
///
/// Useful for diagnostics and for recording container layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Tag of the type.
    pub id: TypeKind,
    /// Registered name.
    pub name: String,
    /// `size_of::<T>()`.
    pub size: usize,
    /// `align_of::<T>()`.
    pub align: usize,
    /// Storage strategy inside a slot.
    pub size_class: SizeClass,
    /// Representation produced by `cast`.
    pub cast_kind: CastKind,
}

/// Returns the descriptor of `T`.
pub fn descriptor<T: ParamType>() -> TypeDescriptor {
    TypeDescriptor {
        id: T::TYPE_ID,
        name: T::TYPE_NAME.to_owned(),
        size: core::mem::size_of::<T>(),
        align: core::mem::align_of::<T>(),
        size_class: <T as Classified>::SIZE_CLASS,
        cast_kind: <T as Classified>::CAST_KIND,
    }
}
